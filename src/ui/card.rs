//! Card face rendering (home, question and answer)

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::helpers::{center_vertically, wrapped_height};
use super::notation::{NotationStyle, answer_lines, question_lines};
use crate::app::App;
use crate::models::Mode;
use crate::theme::{CARD_BORDER, CardColors, RED_ERROR, card_colors};

/// Render the card panel for the current mode
pub fn render_card(area: Rect, app: &App, frame: &mut Frame) {
    let colors = card_colors(app.scheme, app.session.mode);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(CARD_BORDER)
        .border_style(Style::default().fg(colors.accent))
        .style(Style::default().bg(colors.background).fg(colors.text));
    if app.session.mode != Mode::Home {
        block = block.title(Line::from(Span::styled(
            format!(" {} ", app.session.mode.label()),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        )));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match app.session.mode {
        Mode::Home => home_lines(app, &colors),
        Mode::Question | Mode::Answer => face_lines(app, &colors),
    };

    let height = wrapped_height(&lines, inner.width);
    let text_area = center_vertically(inner, height);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, text_area);
}

fn notation_style(colors: &CardColors) -> NotationStyle {
    let text = Style::default().fg(colors.text);
    NotationStyle {
        text,
        note: text.add_modifier(Modifier::BOLD),
        accidental: Style::default().fg(colors.accidental).add_modifier(Modifier::BOLD),
        operator: Style::default().fg(colors.accent),
    }
}

/// Question or answer of the current card
fn face_lines(app: &App, colors: &CardColors) -> Vec<Line<'static>> {
    let style = notation_style(colors);
    // A missing card renders as a dash rather than failing the frame
    let Some(card) = app.current_card() else {
        return vec![Line::from("—")];
    };
    match app.session.mode {
        Mode::Answer => answer_lines(&card.answer, &style),
        _ => question_lines(&card.question, &style),
    }
}

/// Home screen: title, deck summary or load error, and the start hint
fn home_lines(app: &App, colors: &CardColors) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "F L A S H D E C K",
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(ref error) = app.load_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(RED_ERROR),
        )));
        return lines;
    }

    let muted = Style::default().fg(colors.muted);
    lines.push(Line::from(Span::styled(
        match app.cards.len() {
            1 => "1 card".to_string(),
            n => format!("{} cards", n),
        },
        muted,
    )));

    let (pos, len) = app.session.progress();
    if pos > 0 && pos < len {
        lines.push(Line::from(Span::styled(
            format!("{} of {} seen in this pass", pos, len),
            muted,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Space or click to start",
        Style::default().fg(colors.text),
    )));
    lines
}
