use crate::cards::{Card, CardType};
use crate::chain;
use crate::deck::CardSupply;
use crate::hand::{Hand, HandError, INITIAL_CAPACITY};
use crate::io::{DisplaySink, InputError, InputProvider};
use crate::stats::Statistics;

/// Cards dealt to each player before the first turn.
pub const OPENING_HAND_SIZE: usize = INITIAL_CAPACITY;

/// Rotation direction through the fixed player sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn flipped(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Hand,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}

/// A rejected move. Always recovered locally by re-prompting; never
/// surfaced out of the engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("choice {choice} out of range 0..={hand_len}")]
    OutOfRange { choice: usize, hand_len: usize },
    #[error("card {card} cannot be played on {top}")]
    Mismatch { card: Card, top: Card },
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("hand operation failed: {0}")]
    Hand(#[from] HandError),
    #[error("input failed: {0}")]
    Input(#[from] InputError),
    #[error("cannot start a game with no players")]
    NoPlayers,
}

/// Result of one completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnOutcome {
    Continue,
    Winner(usize),
}

/// The whole game state: players, rotation, top card, statistics, and the
/// random card supply. Owned by the engine for the life of one game; all
/// mutation happens on the turn path, strictly single-threaded.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) direction: Direction,
    pub(crate) top: Card,
    pub(crate) stats: Statistics,
    pub(crate) supply: CardSupply,
}

impl Game {
    /// Start a game: deal [`OPENING_HAND_SIZE`] cards to every player
    /// (each counted in the statistics) and flip an opening top card,
    /// which is always a number card.
    pub fn new(names: Vec<String>, mut supply: CardSupply) -> Result<Self, GameError> {
        if names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let mut stats = Statistics::new();
        let mut players = Vec::with_capacity(names.len());
        for name in names {
            let mut hand = Hand::new()?;
            for _ in 0..OPENING_HAND_SIZE {
                let card = supply.draw();
                stats.record(card.card_type());
                hand.add(card)?;
            }
            players.push(Player { name, hand });
        }
        let top = supply.first_top();
        Ok(Self { players, current: 0, direction: Direction::Forward, top, stats, supply })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Seat index of the active player.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn top_card(&self) -> Card {
        self.top
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Check a choice for the active player: `0` draws and is always legal;
    /// `1..=hand_len` selects a hand card, legal iff it can be played on the
    /// top card.
    pub fn validate_move(&self, choice: usize) -> Result<(), MoveError> {
        if choice == 0 {
            return Ok(());
        }
        let hand = &self.players[self.current].hand;
        let Some(card) = hand.get(choice - 1) else {
            return Err(MoveError::OutOfRange { choice, hand_len: hand.len() });
        };
        if card.can_play_on(self.top) {
            Ok(())
        } else {
            Err(MoveError::Mismatch { card, top: self.top })
        }
    }

    /// Prompt until the provider produces a legal choice.
    pub(crate) fn request_move(
        &mut self,
        input: &mut dyn InputProvider,
        display: &mut dyn DisplaySink,
    ) -> Result<usize, GameError> {
        loop {
            let hand_len = self.players[self.current].hand.len();
            let choice = input.choose_move(self.current, hand_len)?;
            match self.validate_move(choice) {
                Ok(()) => return Ok(choice),
                Err(_) => display.invalid_move(),
            }
        }
    }

    /// Advance the active seat one step in the current direction.
    pub(crate) fn step(&mut self) {
        self.current = self.seat_after(self.current);
    }

    /// The seat one step ahead of `seat` in the current direction.
    pub(crate) fn seat_after(&self, seat: usize) -> usize {
        let n = self.players.len();
        match self.direction {
            Direction::Forward => (seat + 1) % n,
            Direction::Backward => (seat + n - 1) % n,
        }
    }

    /// Draw a card from the supply into `seat`'s hand, counting it.
    pub(crate) fn draw_into(&mut self, seat: usize) -> Result<Card, GameError> {
        let card = self.supply.draw();
        self.stats.record(card.card_type());
        self.players[seat].hand.add(card)?;
        Ok(card)
    }

    /// Run one full turn of the active player: show the table, collect a
    /// legal move, apply it and its effect, then check for a win.
    pub fn play_turn(
        &mut self,
        input: &mut dyn InputProvider,
        display: &mut dyn DisplaySink,
    ) -> Result<TurnOutcome, GameError> {
        let seat = self.current;
        display.show_top_card(self.top);
        display.show_hand(&self.players[seat].name, self.players[seat].hand.as_slice());

        let choice = self.request_move(input, display)?;
        if choice == 0 {
            // Drawing ends the turn but leaves the rotation in place.
            self.draw_into(seat)?;
            return Ok(TurnOutcome::Continue);
        }

        let card = self.players[seat].hand.remove_at(choice - 1)?;
        self.top = card;
        self.apply_effect(card.card_type(), input, display)?;

        // A Plus force-draw has already refilled an emptied hand by now.
        if self.players[seat].hand.is_empty() {
            return Ok(TurnOutcome::Winner(seat));
        }
        Ok(TurnOutcome::Continue)
    }

    /// Dispatch the effect of the card type that just became the top card.
    /// Also re-entered once by the chain resolver for its terminal move.
    pub(crate) fn apply_effect(
        &mut self,
        card_type: CardType,
        input: &mut dyn InputProvider,
        display: &mut dyn DisplaySink,
    ) -> Result<(), GameError> {
        match card_type {
            CardType::Plus => {
                // Same player keeps the turn. An emptied hand is refilled
                // with one penalty draw before win detection can run.
                if self.players[self.current].hand.is_empty() {
                    self.draw_into(self.current)?;
                }
            }
            CardType::Stop => {
                if self.players.len() > 1 {
                    let next = self.seat_after(self.current);
                    if self.players.len() == 2 && self.players[next].hand.len() == 1 {
                        // Skip waived: the threatened player draws a card
                        // and still takes their turn.
                        self.draw_into(next)?;
                        self.step();
                    } else {
                        self.step();
                        self.step();
                    }
                }
            }
            CardType::Reverse => {
                self.direction = self.direction.flipped();
                self.step();
            }
            CardType::ChangeColor => {
                let color = input.choose_color()?;
                self.top.resolve_color(color);
                self.step();
            }
            CardType::Taki => {
                if let Some(chain_color) = self.top.color() {
                    chain::run(self, chain_color, input, display)?;
                }
            }
            _ => self.step(),
        }
        Ok(())
    }

    /// Play until somebody wins; announce the winner, release all hands,
    /// sort and render the statistics. Returns the winner's seat.
    pub fn run(
        &mut self,
        input: &mut dyn InputProvider,
        display: &mut dyn DisplaySink,
    ) -> Result<usize, GameError> {
        loop {
            if let TurnOutcome::Winner(seat) = self.play_turn(input, display)? {
                display.announce_winner(&self.players[seat].name);
                self.finish(display);
                return Ok(seat);
            }
        }
    }

    /// End-of-game teardown: hands give back their storage, the frequency
    /// table is sorted and rendered.
    pub fn finish(&mut self, display: &mut dyn DisplaySink) {
        for player in &mut self.players {
            player.hand.release();
        }
        self.stats.sort();
        display.show_statistics(&self.stats);
    }
}
