//! User prompt functions for interactive CLI input.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Find deck files (`*.json`) directly inside `decks_dir`, sorted by name
pub fn find_deck_files(decks_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(decks_dir) else {
        return Vec::new();
    };

    let mut decks: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();

    decks.sort();
    decks
}

/// Count the entries of a deck for display, without validating them
pub fn count_entries(deck: &Path) -> Option<usize> {
    let content = std::fs::read_to_string(deck).ok()?;
    let value: serde_json::Value = serde_json::from_str(&content).ok()?;
    value.as_array().map(|entries| entries.len())
}

/// Display deck selection prompt and return the selected deck
pub fn prompt_deck_selection(decks: &[PathBuf]) -> io::Result<PathBuf> {
    println!();
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║  Flashdeck - Select a Deck                                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();

    for (i, deck) in decks.iter().enumerate() {
        let entries = match count_entries(deck) {
            Some(n) => format!("{} cards", n),
            None => "unreadable".to_string(),
        };
        println!("  {}) {:40} ({})", i + 1, deck.display(), entries);
    }

    println!();
    print!("Select deck [1-{}]: ", decks.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let selection = parse_selection(&input, decks.len())?;
    Ok(decks[selection - 1].clone())
}

/// Parse a 1-based menu choice
fn parse_selection(input: &str, count: usize) -> io::Result<usize> {
    let selection: usize = input
        .trim()
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid selection"))?;

    if selection < 1 || selection > count {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Selection out of range",
        ));
    }

    Ok(selection)
}
