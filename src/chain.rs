//! The TAKI chain: a sub-mode where the player who opened it keeps playing
//! cards of the chain color until they draw, play the wild card, or empty
//! their hand. Effects of cards played inside the chain do not fire; only
//! the terminal move is re-dispatched through the normal effect table,
//! exactly once. Chains never nest.

use crate::cards::{Card, CardType, Color};
use crate::game::{Game, GameError};
use crate::io::{DisplaySink, InputProvider};

/// Whether a card may join a chain of the given color.
fn accepts(card: Card, chain_color: Color) -> bool {
    card.is_wild() || card.color() == Some(chain_color)
}

/// Resolve a chain opened by the Taki card now on top of the pile. The
/// chain color is fixed for the whole chain, whatever cards land on top.
pub(crate) fn run(
    game: &mut Game,
    chain_color: Color,
    input: &mut dyn InputProvider,
    display: &mut dyn DisplaySink,
) -> Result<(), GameError> {
    let seat = game.current;
    loop {
        display.show_top_card(game.top);
        display.show_hand(&game.players[seat].name, game.players[seat].hand.as_slice());

        let hand_len = game.players[seat].hand.len();
        let choice = input.choose_move(seat, hand_len)?;
        if choice == 0 {
            // Terminal "drew" outcome. Re-dispatching a draw is a no-op:
            // a draw never advances the rotation.
            game.draw_into(seat)?;
            return Ok(());
        }

        let Some(card) = game.players[seat].hand.get(choice - 1) else {
            display.invalid_move();
            continue;
        };
        if !accepts(card, chain_color) {
            // Rejected plays never leave the hand and do not consume a turn.
            display.invalid_move();
            continue;
        }

        let card = game.players[seat].hand.remove_at(choice - 1)?;
        game.top = card;

        if game.players[seat].hand.is_empty() {
            if card.card_type() == CardType::Plus {
                // Plus keeps its continuation inside a chain: one penalty
                // draw, and the chain stays open.
                game.draw_into(seat)?;
                continue;
            }
            // The win is detected by the caller once the chain unwinds.
            return Ok(());
        }

        if card.is_wild() {
            // The wild ends the chain; its ordinary effect picks the new
            // color and advances the rotation.
            return game.apply_effect(CardType::ChangeColor, input, display);
        }
        // Any other accepted card keeps the chain open; its effect stays
        // dormant.
    }
}
