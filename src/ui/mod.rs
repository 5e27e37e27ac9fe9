//! UI module for flashdeck
//!
//! This module contains the rendering functions for the TUI: the card panel
//! (home screen, question, answer), the notation markup of card text and the
//! status bar.

mod card;
mod helpers;
mod notation;
mod status;

use ratatui::{
    layout::Margin,
    prelude::*,
    widgets::Block,
};

use crate::app::App;
use crate::theme::BG_PRIMARY;

pub use card::render_card;
pub use status::render_status_bar;

/// Draw one frame and record where the card (the tap target) landed
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Card area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(main_layout[0]);

    let card_area = columns[1].inner(Margin {
        horizontal: 0,
        vertical: 1,
    });
    app.tap_area = card_area;

    render_card(card_area, app, frame);
    render_status_bar(main_layout[1], app, frame);
}
