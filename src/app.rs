//! Application state and core logic for flashdeck.
//!
//! This module contains the `App` struct which ties the loaded cards, the
//! session state machine, the key-value store and the view state together.
//! Every state change that must survive a restart is written to the store
//! before the next input event is handled.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::{Position, Rect};

use crate::cli::CliConfig;
use crate::models::{Card, DataError, Mode, Scheme, SessionState, load_cards};
use crate::storage::{KvStore, SCHEME_KEY, STATE_KEY};

/// Application state
pub struct App {
    pub cards: Vec<Card>,
    /// Message shown on the home screen when the data file could not be used
    pub load_error: Option<String>,
    pub session: SessionState,
    pub scheme: Scheme,
    pub data_path: PathBuf,
    pub data_needs_reload: Arc<Mutex<bool>>,
    /// Transient message for the status bar, cleared on the next key
    pub status_message: Option<String>,
    /// Screen area of the card, used to hit-test mouse clicks
    pub tap_area: Rect,
    pub should_quit: bool,
    store: Option<KvStore>,
    fresh: bool,
    rng: StdRng,
}

impl App {
    pub fn new(config: &CliConfig) -> Self {
        let store = match KvStore::open(&config.db_path) {
            Ok(store) => Some(store),
            Err(e) => {
                log::warn!(
                    "Could not open store at {}, session will not be saved: {}",
                    config.db_path.display(),
                    e
                );
                None
            }
        };
        let store_failed = store.is_none();

        let mut app = Self::from_parts(
            load_cards(&config.data_path),
            config.data_path.clone(),
            store,
            StdRng::from_os_rng(),
            config.fresh,
        );
        if store_failed {
            app.status_message = Some("Store unavailable, progress will not be saved".to_string());
        }
        app
    }

    /// Build the app from already-resolved parts and run the boot sequence
    pub fn from_parts(
        cards: Result<Vec<Card>, DataError>,
        data_path: PathBuf,
        store: Option<KvStore>,
        mut rng: StdRng,
        fresh: bool,
    ) -> Self {
        let session = SessionState::new(0, &mut rng);
        let mut app = Self {
            cards: Vec::new(),
            load_error: None,
            session,
            scheme: Scheme::default(),
            data_path,
            data_needs_reload: Arc::new(Mutex::new(false)),
            status_message: None,
            tap_area: Rect::default(),
            should_quit: false,
            store,
            fresh,
            rng,
        };

        app.scheme = app.load_saved(SCHEME_KEY).unwrap_or_default();

        match cards {
            Ok(cards) => {
                app.cards = cards;
                app.boot_session();
            }
            Err(e) => {
                log::warn!("{}", e);
                app.load_error = Some(e.to_string());
            }
        }

        app
    }

    /// Restore the saved session for the current cards (always landing home)
    fn boot_session(&mut self) {
        let saved = if self.fresh {
            None
        } else {
            self.load_saved::<SessionState>(STATE_KEY)
        };
        self.session = SessionState::restore(saved, self.cards.len(), &mut self.rng);
        let (pos, len) = self.session.progress();
        log::info!("Session ready at {}/{}", pos, len);
        self.persist_session();
    }

    fn load_saved<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let store = self.store.as_ref()?;
        match store.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring unreadable saved '{}': {}", key, e);
                None
            }
        }
    }

    fn persist_session(&mut self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        if let Err(e) = store.set(STATE_KEY, &self.session) {
            log::warn!("Failed to save session state: {}", e);
            self.status_message = Some(format!("Could not save progress: {}", e));
        }
    }

    /// Whether taps can advance the session
    pub fn is_ready(&self) -> bool {
        self.load_error.is_none() && !self.cards.is_empty()
    }

    /// Advance the session by one tap and save it
    pub fn handle_tap(&mut self) {
        if !self.is_ready() {
            return;
        }
        self.session.tap(self.cards.len(), &mut self.rng);
        log::debug!(
            "Tap -> {:?} (card {:?}, {}/{})",
            self.session.mode,
            self.session.current_index,
            self.session.pos,
            self.session.deck.len()
        );
        if self.session.mode == Mode::Home {
            log::info!("Deck finished, dealt a new one");
        }
        self.persist_session();
    }

    /// Handle a key press: taps, theme, reload and quit
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status_message = None;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Right => self.handle_tap(),
            KeyCode::Char('t') => self.toggle_scheme(),
            KeyCode::Char('r') => self.reload_data(),
            _ => {}
        }
    }

    /// A left click on the card counts as a tap
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.tap_area.contains(Position::new(mouse.column, mouse.row)) {
            self.status_message = None;
            self.handle_tap();
        }
    }

    /// Switch between the normal and inverted color schemes and save the choice
    pub fn toggle_scheme(&mut self) {
        self.scheme = self.scheme.toggle();
        if let Some(store) = self.store.as_ref()
            && let Err(e) = store.set(SCHEME_KEY, &self.scheme)
        {
            log::warn!("Failed to save scheme: {}", e);
            self.status_message = Some(format!("Could not save theme: {}", e));
        }
    }

    /// Card currently on screen, if any
    pub fn current_card(&self) -> Option<&Card> {
        self.session.current_card(&self.cards)
    }

    /// Reload the data file if the watcher flagged a change
    pub fn reload_data_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.data_needs_reload.lock() else {
                return;
            };
            std::mem::take(&mut *flag)
        };

        if needs_reload {
            self.reload_data();
        }
    }

    /// Reload cards from disk.
    ///
    /// A changed card count resets the deck and sends the session home.
    /// A failed reload keeps the cards already loaded.
    pub fn reload_data(&mut self) {
        match load_cards(&self.data_path) {
            Ok(cards) => {
                let was_ready = self.is_ready();
                let count_changed = cards.len() != self.cards.len();
                self.cards = cards;
                self.load_error = None;

                if !was_ready {
                    self.boot_session();
                } else if count_changed {
                    self.session.mode = Mode::Home;
                    self.session.reset_deck(self.cards.len(), &mut self.rng);
                    self.persist_session();
                }
                self.status_message = Some(format!("Reloaded {} cards", self.cards.len()));
            }
            Err(e) => {
                log::warn!("Reload failed: {}", e);
                if self.cards.is_empty() {
                    self.load_error = Some(e.to_string());
                } else {
                    self.status_message = Some(format!("Reload failed: {}", e));
                }
            }
        }
    }
}
