//! UI helper functions

use ratatui::prelude::*;

/// Simple word wrapping helper, counting characters rather than bytes.
/// Words wider than `max_width` are broken across rows.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text
        .split_whitespace()
        .flat_map(|word| split_long_word(word, max_width))
    {
        let word_width = word.chars().count();
        if current_line.is_empty() {
            current_line = word;
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(&word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word;
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Break `word` into pieces of at most `max_width` characters
fn split_long_word(word: &str, max_width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Number of rows `lines` take once wrapped to `width`
pub fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| &*s.content).collect();
            wrap_text(&text, width as usize).len()
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// A full-width slice of `area` of the given height, centered vertically
pub fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = area.y + (area.height - height) / 2;
    Rect::new(area.x, top, area.width, height)
}
