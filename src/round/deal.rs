use crate::deck::Deck;
use crate::error::DealError;
use crate::event::{RoundEvent, Seat};

use super::{Round, RoundPhase, RoundTicket};

impl Round {
    /// Deals the opening cards and starts the player's turn.
    ///
    /// A fresh deck is shuffled for every deal (unless one was stacked) and
    /// four cards are drawn from the front: the player gets cards 1 and 3,
    /// the dealer gets cards 2 and 4. The dealer's second card stays face
    /// down until the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is stale, the round is not in the
    /// betting phase, or a stacked deck has fewer than four cards. On error
    /// no card reaches either hand.
    pub fn deal(&mut self, ticket: RoundTicket) -> Result<(), DealError> {
        if !self.is_current(ticket) {
            return Err(DealError::StaleRound);
        }
        if self.phase != RoundPhase::Betting {
            return Err(DealError::InvalidPhase);
        }

        self.deck = match self.stacked.take() {
            Some(cards) => Deck::stacked(cards),
            None => Deck::shuffled(&mut self.rng),
        };

        let first_player = self.deck.draw().ok_or(DealError::NotEnoughCards)?;
        let up_card = self.deck.draw().ok_or(DealError::NotEnoughCards)?;
        let second_player = self.deck.draw().ok_or(DealError::NotEnoughCards)?;
        let hole_card = self.deck.draw().ok_or(DealError::NotEnoughCards)?;

        self.player.add_card(first_player);
        self.emit(RoundEvent::CardDealt { seat: Seat::Player });

        self.dealer.add_card(up_card);
        self.emit(RoundEvent::CardDealt { seat: Seat::Dealer });

        self.player.add_card(second_player);
        self.emit(RoundEvent::CardDealt { seat: Seat::Player });

        // Hole card: dealt face down.
        self.dealer.add_card(hole_card);
        self.emit(RoundEvent::CardDealt { seat: Seat::Dealer });

        self.phase = RoundPhase::Playing;

        Ok(())
    }
}
