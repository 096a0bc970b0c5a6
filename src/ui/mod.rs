//! Terminal rendering.

pub mod game_scene;
pub mod header;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the whole screen: feeds header on top, game below.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::header_height(app)),
            Constraint::Min(10),
        ])
        .split(frame.size());

    header::render_header(frame, chunks[0], app);
    game_scene::render_game(frame, chunks[1], app);
}
