//! Deck and session state machine
//!
//! A session walks a shuffled deck of card indices:
//! home -> question -> answer -> question -> ... -> home.
//! Reaching the end of the deck sends the session home and deals a new
//! shuffled deck, so every card is shown once per pass.
//!
//! The state only knows the card count, never the cards themselves.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::enums::Mode;

/// Return the indices `0..n` in random order (Fisher-Yates)
pub fn shuffled_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}

/// Persisted session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub mode: Mode,
    /// Presentation order for the current pass
    pub deck: Vec<usize>,
    /// Number of deck entries already dealt
    pub pos: usize,
    /// Card on screen (question or answer mode only)
    pub current_index: Option<usize>,
}

impl SessionState {
    pub fn new<R: Rng + ?Sized>(card_count: usize, rng: &mut R) -> Self {
        Self {
            mode: Mode::Home,
            deck: shuffled_indices(card_count, rng),
            pos: 0,
            current_index: None,
        }
    }

    /// Rebuild the session from a saved state.
    ///
    /// The restored session always starts at home. The saved deck is kept
    /// (so an unfinished pass resumes where it stopped) unless it no longer
    /// matches the card count.
    pub fn restore<R: Rng + ?Sized>(
        saved: Option<SessionState>,
        card_count: usize,
        rng: &mut R,
    ) -> Self {
        let Some(mut state) = saved else {
            return Self::new(card_count, rng);
        };

        state.mode = Mode::Home;
        state.current_index = None;

        if !state.is_valid_for(card_count) {
            log::info!(
                "Saved deck does not match {} cards, dealing a new one",
                card_count
            );
            state.reset_deck(card_count, rng);
        }

        state
    }

    /// Whether the deck is a permutation of `0..card_count` and `pos` is in range
    pub fn is_valid_for(&self, card_count: usize) -> bool {
        if self.deck.len() != card_count || self.pos > self.deck.len() {
            return false;
        }
        let mut seen = vec![false; card_count];
        for &index in &self.deck {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Deal a fresh shuffled deck and rewind to its start
    pub fn reset_deck<R: Rng + ?Sized>(&mut self, card_count: usize, rng: &mut R) {
        self.deck = shuffled_indices(card_count, rng);
        self.pos = 0;
        self.current_index = None;
    }

    /// Move to the next card of the deck, or home with a new deck when exhausted
    pub fn pick_next_question<R: Rng + ?Sized>(&mut self, card_count: usize, rng: &mut R) {
        match self.deck.get(self.pos) {
            Some(&index) => {
                self.current_index = Some(index);
                self.pos += 1;
                self.mode = Mode::Question;
            }
            None => {
                self.mode = Mode::Home;
                self.reset_deck(card_count, rng);
            }
        }
    }

    /// Advance the state machine by one tap
    pub fn tap<R: Rng + ?Sized>(&mut self, card_count: usize, rng: &mut R) {
        match self.mode {
            Mode::Home | Mode::Answer => self.pick_next_question(card_count, rng),
            Mode::Question => self.mode = Mode::Answer,
        }
    }

    /// Card currently on screen, if any
    pub fn current_card<'a>(&self, cards: &'a [Card]) -> Option<&'a Card> {
        self.current_index.and_then(|index| cards.get(index))
    }

    /// Cards dealt so far in this pass, and the pass length
    pub fn progress(&self) -> (usize, usize) {
        (self.pos, self.deck.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn is_permutation(deck: &[usize], n: usize) -> bool {
        let mut sorted = deck.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_shuffled_indices_is_permutation() {
        let mut rng = rng();
        for n in [0, 1, 2, 7, 50] {
            let deck = shuffled_indices(n, &mut rng);
            assert!(is_permutation(&deck, n), "not a permutation for n = {}", n);
        }
    }

    #[test]
    fn test_shuffled_indices_varies() {
        let mut rng = rng();
        let first = shuffled_indices(20, &mut rng);
        let differs = (0..10).any(|_| shuffled_indices(20, &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_new_session_starts_home() {
        let state = SessionState::new(5, &mut rng());
        assert_eq!(state.mode, Mode::Home);
        assert_eq!(state.pos, 0);
        assert_eq!(state.current_index, None);
        assert!(is_permutation(&state.deck, 5));
    }

    #[test]
    fn test_tap_cycle() {
        let mut rng = rng();
        let mut state = SessionState::new(3, &mut rng);
        let first = state.deck[0];

        state.tap(3, &mut rng);
        assert_eq!(state.mode, Mode::Question);
        assert_eq!(state.current_index, Some(first));
        assert_eq!(state.pos, 1);

        state.tap(3, &mut rng);
        assert_eq!(state.mode, Mode::Answer);
        assert_eq!(state.current_index, Some(first));
        assert_eq!(state.pos, 1);

        state.tap(3, &mut rng);
        assert_eq!(state.mode, Mode::Question);
        assert_eq!(state.current_index, Some(state.deck[1]));
        assert_eq!(state.pos, 2);
    }

    #[test]
    fn test_exactly_n_cycles_before_home() {
        let mut rng = rng();
        let n = 6;
        let mut state = SessionState::new(n, &mut rng);
        let deck = state.deck.clone();

        state.tap(n, &mut rng);
        let mut shown = Vec::new();
        let mut cycles = 0;
        while state.mode != Mode::Home {
            assert_eq!(state.mode, Mode::Question);
            shown.push(state.current_index.unwrap());
            state.tap(n, &mut rng);
            assert_eq!(state.mode, Mode::Answer);
            state.tap(n, &mut rng);
            cycles += 1;
            assert!(cycles <= n, "session never returned home");
        }

        assert_eq!(cycles, n);
        assert_eq!(shown, deck);
    }

    #[test]
    fn test_exhaustion_returns_home_with_new_deck() {
        let mut rng = rng();
        let n = 4;
        let mut state = SessionState::new(n, &mut rng);
        for _ in 0..(1 + 2 * n) {
            state.tap(n, &mut rng);
        }

        assert_eq!(state.mode, Mode::Home);
        assert_eq!(state.pos, 0);
        assert_eq!(state.current_index, None);
        assert!(is_permutation(&state.deck, n));
    }

    #[test]
    fn test_restore_none_builds_new_session() {
        let state = SessionState::restore(None, 4, &mut rng());
        assert_eq!(state.mode, Mode::Home);
        assert!(is_permutation(&state.deck, 4));
    }

    #[test]
    fn test_restore_forces_home_and_keeps_position() {
        let saved = SessionState {
            mode: Mode::Answer,
            deck: vec![2, 0, 1],
            pos: 2,
            current_index: Some(0),
        };

        let state = SessionState::restore(Some(saved), 3, &mut rng());
        assert_eq!(state.mode, Mode::Home);
        assert_eq!(state.current_index, None);
        assert_eq!(state.deck, vec![2, 0, 1]);
        assert_eq!(state.pos, 2);
    }

    #[test]
    fn test_restore_resumes_pass() {
        let mut rng = rng();
        let saved = SessionState {
            mode: Mode::Question,
            deck: vec![2, 0, 1],
            pos: 2,
            current_index: Some(0),
        };

        let mut state = SessionState::restore(Some(saved), 3, &mut rng);
        state.tap(3, &mut rng);
        assert_eq!(state.current_index, Some(1));
        state.tap(3, &mut rng);
        state.tap(3, &mut rng);
        assert_eq!(state.mode, Mode::Home);
    }

    #[test]
    fn test_restore_resets_when_card_count_changed() {
        let saved = SessionState {
            mode: Mode::Home,
            deck: vec![1, 0],
            pos: 1,
            current_index: None,
        };

        let state = SessionState::restore(Some(saved), 5, &mut rng());
        assert_eq!(state.pos, 0);
        assert!(is_permutation(&state.deck, 5));
    }

    #[test]
    fn test_is_valid_for_rejects_bad_decks() {
        let mut state = SessionState::new(3, &mut rng());
        assert!(state.is_valid_for(3));
        assert!(!state.is_valid_for(4));

        state.deck = vec![0, 0, 1];
        assert!(!state.is_valid_for(3));

        state.deck = vec![0, 1, 3];
        assert!(!state.is_valid_for(3));

        state.deck = vec![0, 1, 2];
        state.pos = 4;
        assert!(!state.is_valid_for(3));
    }

    #[test]
    fn test_current_card() {
        let cards = vec![Card::new("C", "E"), Card::new("D", "F#")];
        let mut state = SessionState::new(2, &mut rng());
        assert!(state.current_card(&cards).is_none());

        state.current_index = Some(1);
        assert_eq!(state.current_card(&cards), Some(&cards[1]));

        state.current_index = Some(9);
        assert!(state.current_card(&cards).is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let state = SessionState {
            mode: Mode::Question,
            deck: vec![1, 0],
            pos: 1,
            current_index: Some(1),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["mode"], "question");
        assert_eq!(json["deck"], serde_json::json!([1, 0]));
        assert_eq!(json["pos"], 1);
        assert_eq!(json["currentIndex"], 1);

        let home: SessionState = serde_json::from_str(
            r#"{"mode": "home", "deck": [0], "pos": 0, "currentIndex": null}"#,
        )
        .unwrap();
        assert_eq!(home.current_index, None);
    }
}
