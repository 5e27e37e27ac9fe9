//! Theme module for flashdeck
//!
//! This module provides the color palette and the per-scheme card colors.
//! The invert scheme swaps card foreground and background so questions and
//! answers can be drilled either way around.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::models::{Mode, Scheme};

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color - deep slate (#0f1419)
pub const BG_PRIMARY: Color = Color::Rgb(15, 20, 25);

/// Secondary background color for panels (#181e26)
pub const BG_SECONDARY: Color = Color::Rgb(24, 30, 38);

/// Subtle border color (#2a3340)
pub const BORDER_SUBTLE: Color = Color::Rgb(42, 51, 64);

/// Paper white used as the card face in the invert scheme (#f4f1ea)
pub const PAPER: Color = Color::Rgb(244, 241, 234);

// ============================================================================
// Accent Colors
// ============================================================================

/// Question accent - warm amber (#f5b942)
pub const AMBER_QUESTION: Color = Color::Rgb(245, 185, 66);

/// Answer accent - teal (#2dd4bf)
pub const TEAL_ANSWER: Color = Color::Rgb(45, 212, 191);

/// Accidental marks (♯, ♭) - rose (#f472b6)
pub const ROSE_ACCIDENTAL: Color = Color::Rgb(244, 114, 182);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Ink used on the paper face (#1f2328)
pub const INK: Color = Color::Rgb(31, 35, 40);

/// Border style of the card
pub const CARD_BORDER: BorderType = BorderType::Rounded;

/// Colors of the card panel for one scheme and mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColors {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub accidental: Color,
    pub muted: Color,
}

/// Resolve the card colors for a scheme and mode
pub fn card_colors(scheme: Scheme, mode: Mode) -> CardColors {
    let accent = match mode {
        Mode::Home => TEXT_MUTED,
        Mode::Question => AMBER_QUESTION,
        Mode::Answer => TEAL_ANSWER,
    };

    match scheme {
        Scheme::Normal => CardColors {
            background: BG_SECONDARY,
            text: TEXT_PRIMARY,
            accent,
            accidental: ROSE_ACCIDENTAL,
            muted: TEXT_MUTED,
        },
        Scheme::Invert => CardColors {
            background: PAPER,
            text: INK,
            accent: INK,
            accidental: RED_ERROR,
            muted: BORDER_SUBTLE,
        },
    }
}
