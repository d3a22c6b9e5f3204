//! Move list rendering with time-travel selection.

use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Renders the move list in the app's chosen display order.
///
/// Each row carries its underlying history index in the app state, so
/// selecting a row and pressing Enter jumps to the right entry whether
/// the list is ascending or descending.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .move_labels()
        .into_iter()
        .map(|label| {
            let style = if label.current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(label.text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Moves [{}]", app.sort_label())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    f.render_stateful_widget(list, area, &mut state);
}
