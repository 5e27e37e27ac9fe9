//! Card text markup: note names, accidentals and operators

use ratatui::prelude::*;

const ACCIDENTALS: [char; 4] = ['#', '♯', 'b', '♭'];
const OPERATOR: char = '×';

/// Styles applied to the pieces of card text
#[derive(Debug, Clone, Copy)]
pub struct NotationStyle {
    pub text: Style,
    pub note: Style,
    pub accidental: Style,
    pub operator: Style,
}

/// Split a question into its head line and an optional second line
pub fn split_question(question: &str) -> (&str, Option<&str>) {
    let question = question.trim();
    match question.split_once('\n') {
        Some((head, rest)) => {
            let rest = rest.trim();
            (head.trim(), (!rest.is_empty()).then_some(rest))
        }
        None => (question, None),
    }
}

/// Parse a bare note name such as `C`, `f#`, `B ♭`.
/// Returns the uppercase letter and the normalized accidental.
pub fn parse_note(text: &str) -> Option<(char, Option<char>)> {
    let mut chars = text.trim().chars().filter(|c| !c.is_whitespace());
    let letter = chars
        .next()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'A'..='G'))?;
    let accidental = match chars.next() {
        None => None,
        Some('#') | Some('♯') => Some('♯'),
        Some('b') | Some('♭') => Some('♭'),
        Some(_) => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some((letter.to_ascii_uppercase(), accidental))
}

/// Split `text` into spans, giving characters picked by `classify` their own style
fn styled_runs(text: &str, base: Style, classify: impl Fn(char) -> Option<Style>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();

    for c in text.chars() {
        match classify(c) {
            Some(style) => {
                if !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), base));
                }
                spans.push(Span::styled(c.to_string(), style));
            }
            None => run.push(c),
        }
    }

    if !run.is_empty() {
        spans.push(Span::styled(run, base));
    }

    spans
}

/// Highlight every accidental character (and `×`) in free text
pub fn accidental_spans(text: &str, style: &NotationStyle) -> Vec<Span<'static>> {
    styled_runs(text, style.text, |c| {
        if ACCIDENTALS.contains(&c) {
            Some(style.accidental)
        } else if c == OPERATOR {
            Some(style.operator)
        } else {
            None
        }
    })
}

/// Render a note name as letter + accidental, or fall back to accidental markup
pub fn note_spans(text: &str, style: &NotationStyle) -> Vec<Span<'static>> {
    match parse_note(text) {
        Some((letter, accidental)) => {
            let mut spans = vec![Span::styled(letter.to_string(), style.note)];
            if let Some(accidental) = accidental {
                spans.push(Span::styled(accidental.to_string(), style.accidental));
            }
            spans
        }
        None => accidental_spans(text.trim(), style),
    }
}

/// Lines of a question: head line with note markup, then the optional second line
pub fn question_lines(question: &str, style: &NotationStyle) -> Vec<Line<'static>> {
    let (head, rest) = split_question(question);
    let mut lines = vec![Line::from(note_spans(head, style))];
    if let Some(rest) = rest {
        lines.push(Line::from(accidental_spans(rest, style)));
    }
    lines
}

/// Lines of an answer
pub fn answer_lines(answer: &str, style: &NotationStyle) -> Vec<Line<'static>> {
    answer
        .trim()
        .lines()
        .map(|line| Line::from(note_spans(line, style)))
        .collect()
}
