//! End-to-end tests for the game controller.

use rewind_tictactoe::{GameController, GameStatus, Player, Position, Square};

/// Plays a sequence of moves, panicking only if the harness itself is wrong.
fn play_all(game: &mut GameController, positions: &[Position]) {
    for pos in positions {
        game.play_move(*pos);
    }
}

#[test]
fn test_first_move_in_center() {
    let mut game = GameController::new();
    game.play_move(Position::Center);

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_left_column_win_reports_line() {
    // X: 0, 3, 6; O: 1, 4
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ];
    let mut game = GameController::new();
    play_all(&mut game, &moves);

    match game.status() {
        GameStatus::Won(win) => {
            assert_eq!(win.player, Player::X);
            assert_eq!(
                win.squares,
                [
                    Position::TopLeft,
                    Position::MiddleLeft,
                    Position::BottomLeft
                ]
            );
        }
        other => panic!("Expected a win, got {other:?}"),
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // Final layout: X O X / O X X / O X O
    let moves = [
        Position::TopLeft,      // X
        Position::TopCenter,    // O
        Position::TopRight,     // X
        Position::MiddleLeft,   // O
        Position::Center,       // X
        Position::BottomLeft,   // O
        Position::MiddleRight,  // X
        Position::BottomRight,  // O
        Position::BottomCenter, // X
    ];
    let mut game = GameController::new();
    play_all(&mut game, &moves);

    assert_eq!(game.status(), GameStatus::Draw);
    assert!(rewind_tictactoe::rules::is_draw(game.board()));
    assert_eq!(game.history().len(), 10);
}

#[test]
fn test_moves_after_win_are_noops() {
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft, // X wins on move 5
    ];
    let mut game = GameController::new();
    play_all(&mut game, &moves);
    assert_eq!(game.history().len(), 6);

    game.play_move(Position::BottomRight);
    game.play_move(Position::TopRight);

    assert_eq!(game.history().len(), 6);
    assert!(matches!(game.status(), GameStatus::Won(_)));
}

#[test]
fn test_turn_parity_at_every_cursor() {
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ];
    let mut game = GameController::new();
    play_all(&mut game, &moves);

    for k in 0..game.history().len() {
        game.jump_to(k).expect("recorded index");
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.to_move(), expected, "wrong player at cursor {k}");
    }
}

#[test]
fn test_history_length_tracks_moves_played() {
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ];
    let mut game = GameController::new();
    for (played, pos) in moves.iter().enumerate() {
        game.play_move(*pos);
        assert_eq!(game.history().len(), played + 2);
    }
}

#[test]
fn test_jumping_back_from_win_resumes_play() {
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ];
    let mut game = GameController::new();
    play_all(&mut game, &moves);
    assert!(matches!(game.status(), GameStatus::Won(_)));

    game.jump_to(4).expect("recorded index");
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.to_move(), Player::X);

    // Branch: X plays elsewhere instead of completing the column.
    game.play_move(Position::BottomRight);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_controller_serde_round_trip() {
    let mut game = GameController::new();
    play_all(&mut game, &[Position::Center, Position::TopLeft]);
    game.jump_to(1).expect("recorded index");

    let json = serde_json::to_string(&game).expect("controller serializes");
    let restored: GameController = serde_json::from_str(&json).expect("controller deserializes");

    assert_eq!(restored, game);
    assert_eq!(restored.cursor(), 1);
    assert_eq!(restored.to_move(), Player::O);
}
