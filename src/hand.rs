use crate::cards::Card;
use std::collections::TryReserveError;

/// Starting capacity of every hand; also the opening deal size.
pub const INITIAL_CAPACITY: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    /// Contract violation: callers validate indices before removal.
    #[error("card index {index} out of range for hand of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Growing the hand's storage failed. This is the engine's only fatal
    /// error path.
    #[error("hand allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

/// A player's hand: a growable multiset of cards.
///
/// Card order carries no meaning, which lets removal swap with the last
/// slot instead of shifting. Capacity starts at [`INITIAL_CAPACITY`],
/// doubles whenever an insert would overflow it, and never shrinks until
/// [`Hand::release`] at game end.
///
/// ```
/// use taki_rs::cards::{Card, Color, Rank};
/// use taki_rs::hand::Hand;
///
/// let mut hand = Hand::new().unwrap();
/// hand.add(Card::Number(Rank::Five, Color::Red)).unwrap();
/// assert_eq!(hand.len(), 1);
/// assert_eq!(hand.capacity(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Result<Self, HandError> {
        let mut cards = Vec::new();
        cards.try_reserve_exact(INITIAL_CAPACITY)?;
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cards.capacity()
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Append a card, doubling capacity first when full. Amortized O(1).
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.cards.len() == self.cards.capacity() {
            let grow = self.cards.capacity().max(INITIAL_CAPACITY);
            self.cards.try_reserve_exact(grow)?;
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove and return the card at `index` by swapping it with the last
    /// occupied slot. O(1); does not preserve order.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= self.cards.len() {
            return Err(HandError::IndexOutOfRange { index, len: self.cards.len() });
        }
        Ok(self.cards.swap_remove(index))
    }

    /// Drop all cards and their storage. Called once at game end; the hand
    /// is left empty with zero capacity.
    pub fn release(&mut self) {
        self.cards = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Rank};

    fn number(rank: Rank) -> Card {
        Card::Number(rank, Color::Red)
    }

    #[test]
    fn new_hand_preallocates_initial_capacity() {
        let hand = Hand::new().unwrap();
        assert_eq!(hand.len(), 0);
        assert_eq!(hand.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut hand = Hand::new().unwrap();
        for _ in 0..INITIAL_CAPACITY {
            hand.add(number(Rank::One)).unwrap();
        }
        assert_eq!(hand.capacity(), INITIAL_CAPACITY);
        hand.add(number(Rank::Two)).unwrap();
        assert_eq!(hand.capacity(), INITIAL_CAPACITY * 2);
        for _ in 0..INITIAL_CAPACITY {
            hand.add(number(Rank::Three)).unwrap();
        }
        assert_eq!(hand.capacity(), INITIAL_CAPACITY * 4);
    }

    #[test]
    fn removal_swaps_with_last_slot() {
        let mut hand = Hand::new().unwrap();
        hand.add(number(Rank::One)).unwrap();
        hand.add(number(Rank::Two)).unwrap();
        hand.add(number(Rank::Three)).unwrap();

        let removed = hand.remove_at(0).unwrap();
        assert_eq!(removed, number(Rank::One));
        assert_eq!(hand.len(), 2);
        // Last card moved into the vacated slot.
        assert_eq!(hand.get(0), Some(number(Rank::Three)));
    }

    #[test]
    fn removal_out_of_range_is_an_error() {
        let mut hand = Hand::new().unwrap();
        hand.add(number(Rank::One)).unwrap();
        assert!(matches!(
            hand.remove_at(1),
            Err(HandError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(hand.len(), 1, "failed removal leaves the hand intact");
    }

    #[test]
    fn removal_never_shrinks_capacity() {
        let mut hand = Hand::new().unwrap();
        for _ in 0..=INITIAL_CAPACITY {
            hand.add(number(Rank::Four)).unwrap();
        }
        let grown = hand.capacity();
        while !hand.is_empty() {
            hand.remove_at(0).unwrap();
        }
        assert_eq!(hand.capacity(), grown);
    }

    #[test]
    fn release_drops_all_storage() {
        let mut hand = Hand::new().unwrap();
        for _ in 0..10 {
            hand.add(number(Rank::Five)).unwrap();
        }
        hand.release();
        assert_eq!(hand.len(), 0);
        assert_eq!(hand.capacity(), 0);
    }
}
