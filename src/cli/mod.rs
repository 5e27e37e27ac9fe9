//! CLI argument parsing and user prompts for flashdeck.

mod args;
mod prompts;

pub use args::{CliConfig, parse_args};
