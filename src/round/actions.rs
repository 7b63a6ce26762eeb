use crate::card::Card;
use crate::error::ActionError;
use crate::event::{RoundEvent, Seat};

use super::{Round, RoundPhase, RoundTicket};

impl Round {
    fn ensure_playing(&self, ticket: RoundTicket) -> Result<(), ActionError> {
        if !self.is_current(ticket) {
            return Err(ActionError::StaleRound);
        }
        if self.phase != RoundPhase::Playing {
            return Err(ActionError::InvalidPhase);
        }
        Ok(())
    }

    /// Player action: hit (draw one card).
    ///
    /// Busting settles the round immediately as a dealer win, regardless of
    /// the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is stale, the round is not in the
    /// playing phase, or the deck is exhausted. On error no state changes.
    pub fn hit(&mut self, ticket: RoundTicket) -> Result<Card, ActionError> {
        self.ensure_playing(ticket)?;

        let card = self.deck.draw().ok_or(ActionError::DeckExhausted)?;
        self.player.add_card(card);
        self.emit(RoundEvent::CardDealt { seat: Seat::Player });

        if self.player.is_bust() {
            self.settle();
        }

        Ok(card)
    }

    /// Player action: stand (end the turn and hand over to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is stale or the round is not in the
    /// playing phase. On error no state changes.
    pub fn stand(&mut self, ticket: RoundTicket) -> Result<(), ActionError> {
        self.ensure_playing(ticket)?;

        self.phase = RoundPhase::Dealer;

        Ok(())
    }
}
