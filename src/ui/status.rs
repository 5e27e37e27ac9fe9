//! Bottom status bar: key hints, pass progress and transient messages

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::models::Mode;
use crate::theme::{AMBER_QUESTION, BG_PRIMARY, BORDER_SUBTLE, TEXT_PRIMARY};

/// Key hints for a mode
pub fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Home => " Space/click: start | t: theme | r: reload | q: quit ",
        Mode::Question => " Space/click: show answer | t: theme | r: reload | q: quit ",
        Mode::Answer => " Space/click: next card | t: theme | r: reload | q: quit ",
    }
}

pub fn render_status_bar(area: Rect, app: &App, frame: &mut Frame) {
    if let Some(ref msg) = app.status_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(AMBER_QUESTION).fg(BG_PRIMARY));
        frame.render_widget(flash, area);
        return;
    }

    let (pos, len) = app.session.progress();
    let progress = format!(" {} {}/{} ", app.scheme.icon(), pos, len);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(progress.chars().count() as u16),
        ])
        .split(area);

    let bar_style = Style::default().bg(BORDER_SUBTLE).fg(TEXT_PRIMARY);
    frame.render_widget(Paragraph::new(hints(app.session.mode)).style(bar_style), layout[0]);
    frame.render_widget(
        Paragraph::new(progress)
            .style(bar_style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right),
        layout[1],
    );
}
