//! CLI argument parsing and configuration.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use super::prompts::{find_deck_files, prompt_deck_selection};
use crate::storage::{app_data_dir, default_db_path};

/// Default data file, looked up in the working directory
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Directory scanned for decks when no data file is given
pub const DECKS_DIR: &str = "decks";

#[derive(Parser, Debug)]
#[command(
    name = "flashdeck",
    version,
    about = "Terminal flashcards: shuffled question/answer decks with resumable sessions",
    after_help = "Examples:\n  \
        flashdeck                     # ./data.json, or pick from ./decks/\n  \
        flashdeck intervals.json      # Run a specific deck\n  \
        flashdeck --fresh             # Forget the saved pass and reshuffle"
)]
struct Args {
    /// JSON file with an array of {"q": ..., "a": ...} pairs
    #[arg(env = "FLASHDECK_DATA")]
    data: Option<PathBuf>,

    /// SQLite file holding the saved session
    #[arg(long, env = "FLASHDECK_DB")]
    db: Option<PathBuf>,

    /// Where log output is written
    #[arg(long, env = "FLASHDECK_LOG")]
    log_file: Option<PathBuf>,

    /// Discard the saved session and start a new deck
    #[arg(long)]
    fresh: bool,

    /// Do not reload the data file when it changes on disk
    #[arg(long)]
    no_watch: bool,
}

/// Configuration from CLI arguments
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_path: PathBuf,
    pub db_path: PathBuf,
    pub log_file: PathBuf,
    pub fresh: bool,
    pub watch: bool,
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args = Args::parse();

    let data_path = match args.data {
        Some(path) => path,
        None => discover_data_file(Path::new("."))?,
    };

    Ok(CliConfig {
        data_path,
        db_path: args.db.unwrap_or_else(default_db_path),
        log_file: args
            .log_file
            .unwrap_or_else(|| app_data_dir().join("flashdeck.log")),
        fresh: args.fresh,
        watch: !args.no_watch,
    })
}

/// Pick the data file when none was given on the command line:
/// `data.json` if present, else the single deck in `decks/`, else a prompt.
/// With nothing found, `data.json` is returned so the load error shows on
/// the home screen.
fn discover_data_file(root: &Path) -> io::Result<PathBuf> {
    let default = root.join(DEFAULT_DATA_FILE);
    if default.exists() {
        return Ok(default);
    }

    let decks = find_deck_files(&root.join(DECKS_DIR));
    match decks.len() {
        0 => Ok(default),
        1 => {
            println!("Found one deck: {}", decks[0].display());
            Ok(decks[0].clone())
        }
        _ => prompt_deck_selection(&decks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["flashdeck"]).unwrap();
        assert!(!args.fresh);
        assert!(!args.no_watch);
    }

    #[test]
    fn test_args_all_flags() {
        let args = Args::try_parse_from([
            "flashdeck",
            "notes.json",
            "--db",
            "/tmp/s.db",
            "--log-file",
            "/tmp/f.log",
            "--fresh",
            "--no-watch",
        ])
        .unwrap();
        assert_eq!(args.data, Some(PathBuf::from("notes.json")));
        assert_eq!(args.db, Some(PathBuf::from("/tmp/s.db")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/f.log")));
        assert!(args.fresh);
        assert!(args.no_watch);
    }

    #[test]
    fn test_args_unknown_flag() {
        assert!(Args::try_parse_from(["flashdeck", "--bogus"]).is_err());
    }

    #[test]
    fn test_discover_prefers_data_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.json"), "[]").unwrap();
        fs::create_dir(dir.path().join("decks")).unwrap();
        fs::write(dir.path().join("decks").join("other.json"), "[]").unwrap();

        let found = discover_data_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("data.json"));
    }

    #[test]
    fn test_discover_single_deck() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("decks")).unwrap();
        fs::write(dir.path().join("decks").join("intervals.json"), "[]").unwrap();

        let found = discover_data_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("decks").join("intervals.json"));
    }

    #[test]
    fn test_discover_nothing_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let found = discover_data_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("data.json"));
    }
}
