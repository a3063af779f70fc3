//! External collaborator seams.
//!
//! The engine never touches a terminal directly: it asks an [`InputProvider`]
//! for every decision and narrates through a [`DisplaySink`]. Front-ends stay
//! thin, and tests drive whole games with [`ScriptedInput`].

use crate::cards::{Card, Color};
use crate::stats::Statistics;
use std::collections::VecDeque;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum InputError {
    /// The input source has no more moves to give.
    #[error("input stream closed")]
    Closed,
    #[error("input read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of player decisions. One blocking request per decision; the engine
/// re-prompts on invalid moves, so implementations do not validate.
pub trait InputProvider {
    /// Choose a move for the player at `seat`: `0` draws a card,
    /// `1..=hand_len` plays the hand card at that position.
    fn choose_move(&mut self, seat: usize, hand_len: usize) -> Result<usize, InputError>;

    /// Choose the color a just-played wild card resolves to.
    fn choose_color(&mut self) -> Result<Color, InputError>;

    /// Number of players for a new game.
    fn player_count(&mut self) -> Result<usize, InputError>;

    /// Display name for the player at `ordinal` (1-based).
    fn player_name(&mut self, ordinal: usize) -> Result<String, InputError>;
}

/// Game narration. Implementations render however they like; the engine only
/// reports events.
pub trait DisplaySink {
    fn show_top_card(&mut self, card: Card);
    fn show_hand(&mut self, name: &str, cards: &[Card]);
    fn invalid_move(&mut self);
    fn announce_winner(&mut self, name: &str);
    fn show_statistics(&mut self, stats: &Statistics);
}

/// A pre-scripted input source for tests and replays. Moves and colors are
/// consumed front to back; running out yields [`InputError::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedInput {
    moves: VecDeque<usize>,
    colors: VecDeque<Color>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = usize>>(moves: I) -> Self {
        Self { moves: moves.into_iter().collect(), colors: VecDeque::new() }
    }

    pub fn with_colors<I: IntoIterator<Item = Color>>(mut self, colors: I) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Moves not yet consumed.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl InputProvider for ScriptedInput {
    fn choose_move(&mut self, _seat: usize, _hand_len: usize) -> Result<usize, InputError> {
        self.moves.pop_front().ok_or(InputError::Closed)
    }

    fn choose_color(&mut self) -> Result<Color, InputError> {
        self.colors.pop_front().ok_or(InputError::Closed)
    }

    fn player_count(&mut self) -> Result<usize, InputError> {
        Err(InputError::Closed)
    }

    fn player_name(&mut self, ordinal: usize) -> Result<String, InputError> {
        Ok(format!("P{ordinal}"))
    }
}

/// Swallows all narration. Useful in tests and benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show_top_card(&mut self, _card: Card) {}
    fn show_hand(&mut self, _name: &str, _cards: &[Card]) {}
    fn invalid_move(&mut self) {}
    fn announce_winner(&mut self, _name: &str) {}
    fn show_statistics(&mut self, _stats: &Statistics) {}
}
