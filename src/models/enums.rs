//! Enums used throughout flashdeck
//!
//! This module contains the session mode and the color scheme, both of which
//! are persisted in the key-value store.

use serde::{Deserialize, Serialize};

/// Which face of the session is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Home,     // Start screen, no card selected
    Question, // Question of the current card
    Answer,   // Answer of the current card
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Home => "HOME",
            Mode::Question => "QUESTION",
            Mode::Answer => "ANSWER",
        }
    }
}

/// Color scheme for the card panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Normal,
    Invert, // Foreground and background swapped
}

impl Scheme {
    pub fn toggle(&self) -> Self {
        match self {
            Scheme::Normal => Scheme::Invert,
            Scheme::Invert => Scheme::Normal,
        }
    }

    /// Glyph shown in the status bar for the toggle
    pub fn icon(&self) -> &'static str {
        match self {
            Scheme::Normal => "☾",
            Scheme::Invert => "☀",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_toggle() {
        assert_eq!(Scheme::Normal.toggle(), Scheme::Invert);
        assert_eq!(Scheme::Invert.toggle(), Scheme::Normal);
    }

    #[test]
    fn test_scheme_default() {
        assert_eq!(Scheme::default(), Scheme::Normal);
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Home);
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Question).unwrap(), "\"question\"");
        let mode: Mode = serde_json::from_str("\"answer\"").unwrap();
        assert_eq!(mode, Mode::Answer);
    }

    #[test]
    fn test_scheme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Scheme::Invert).unwrap(), "\"invert\"");
    }
}
