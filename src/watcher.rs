//! Data file watching.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Set up a file watcher that flags `needs_reload` when the data file changes.
/// Returns `None` if the watcher could not be created; the app then simply
/// never reloads.
pub fn setup_data_watcher(
    data_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    let canonical_data = data_path.canonicalize().unwrap_or_else(|_| data_path.clone());
    let data_filename = data_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else {
                return;
            };
            // Editors often replace the file, so match on the file name too
            let matches = event.paths.iter().any(|p| {
                if let Ok(canonical) = p.canonicalize() {
                    if canonical == canonical_data {
                        return true;
                    }
                }
                match (&data_filename, p.file_name()) {
                    (Some(expected), Some(name)) => name == expected,
                    _ => false,
                }
            });

            if matches {
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    );

    let mut watcher = match watcher_result {
        Ok(watcher) => watcher,
        Err(e) => {
            log::warn!("Could not watch {}: {}", data_path.display(), e);
            return None;
        }
    };

    // Watch the parent directory so a replaced file is still seen
    let parent = match data_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if let Err(e) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
        log::warn!("Could not watch {}: {}", parent.display(), e);
        return None;
    }

    log::info!("Watching {} for changes", data_path.display());
    Some(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watcher_missing_directory() {
        let flag = Arc::new(Mutex::new(false));
        let watcher = setup_data_watcher(
            PathBuf::from("/nonexistent/dir/data.json"),
            Arc::clone(&flag),
        );
        assert!(watcher.is_none());
    }
}
