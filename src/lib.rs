//! taki-rs: TAKI card game engine
//!
//! Goals:
//! - Deterministic, testable turn engine: all randomness flows through a
//!   seedable card supply
//! - Small, well-documented public API
//! - No panics for invalid input; invalid moves re-prompt, contract and
//!   allocation failures use `Result`
//!
//! ## Quick start: run a scripted game
//! ```
//! use taki_rs::deck::CardSupply;
//! use taki_rs::game::{Game, TurnOutcome};
//! use taki_rs::io::{NullDisplay, ScriptedInput};
//!
//! let names = vec!["Alice".to_string(), "Bob".to_string()];
//! let mut game = Game::new(names, CardSupply::from_seed(42)).unwrap();
//!
//! // Alice draws a card; drawing never passes the turn.
//! let mut input = ScriptedInput::new([0]);
//! let outcome = game.play_turn(&mut input, &mut NullDisplay).unwrap();
//! assert_eq!(outcome, TurnOutcome::Continue);
//! assert_eq!(game.current(), 0);
//! ```
//!
//! ## Console game
//! Run the interactive console game with:
//! ```sh
//! cargo run --bin taki-rs
//! ```

pub mod cards;
mod chain;
pub mod console;
pub mod deck;
pub mod game;
pub mod hand;
pub mod io;
pub mod stats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
