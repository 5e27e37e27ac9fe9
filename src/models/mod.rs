//! Data models for flashdeck
//!
//! This module contains the core data structures:
//! - Cards loaded from the JSON data file
//! - The deck/session state machine and its persisted form
//! - Enums for mode and color scheme

pub mod card;
pub mod enums;
pub mod session;

// Re-exports for convenient access
pub use card::{Card, DataError, load_cards};
pub use enums::{Mode, Scheme};
pub use session::SessionState;
