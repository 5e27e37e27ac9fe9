mod app;
mod cli;
mod models;
mod storage;
mod theme;
mod ui;
mod watcher;

use std::fs::{self, OpenOptions};
use std::io::stdout;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
};
use ratatui::DefaultTerminal;

use app::App;
use cli::parse_args;
use watcher::setup_data_watcher;

fn main() -> Result<()> {
    let config = parse_args()?;
    init_logging(&config.log_file)?;
    log::info!(
        "Starting flashdeck {} with {}",
        env!("CARGO_PKG_VERSION"),
        config.data_path.display()
    );

    let mut app = App::new(&config);

    // Keep the watcher alive for the whole session
    let _watcher = if config.watch {
        setup_data_watcher(config.data_path.clone(), app.data_needs_reload.clone())
    } else {
        None
    };

    // Setup terminal; ratatui restores raw mode and the screen on panic
    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            ratatui::restore();
            return Err(e).context("setting up the terminal");
        }
    };
    install_mouse_panic_hook();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(anyhow::Error::from)
        .and_then(|()| run(&mut terminal, &mut app));

    // Restore terminal
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    log::info!("Exiting");
    result
}

/// Send log output to a file; stderr belongs to the terminal UI
fn init_logging(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("opening log file {}", log_file.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Release mouse capture before the panic hook installed by `ratatui::init` runs
fn install_mouse_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        hook(info);
    }));
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.reload_data_if_needed();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
}
