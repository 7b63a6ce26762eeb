use crate::card::Card;
use crate::error::ActionError;
use crate::event::{RoundEvent, Seat};
use crate::result::{Outcome, RoundSummary};

use super::{Round, RoundPhase, RoundTicket};

/// One step of the dealer's automatic play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The hole card was turned face up.
    RevealedHole,
    /// The dealer drew a card. If it busted the hand, the round is settled
    /// and the phase is already [`RoundPhase::Result`].
    Drew(Card),
    /// The dealer stood; the round has been settled.
    Finished,
}

impl Round {
    /// Advances the dealer's turn by one step.
    ///
    /// The first step reveals the hole card. Each following step either
    /// draws one card (while the hand value is below 17) or settles the
    /// round. Splitting the turn into discrete steps lets the presentation
    /// layer put its own delay between cards; call in a loop until the
    /// phase leaves [`RoundPhase::Dealer`], or use [`Round::run_dealer`].
    ///
    /// Whether the dealer hits a soft 17 is controlled by
    /// [`RoundOptions::dealer_stands_on_soft_17`](crate::RoundOptions).
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is stale, it is not the dealer's
    /// turn, or the deck is exhausted while the dealer must draw.
    pub fn dealer_step(&mut self, ticket: RoundTicket) -> Result<DealerStep, ActionError> {
        if !self.is_current(ticket) {
            return Err(ActionError::StaleRound);
        }
        if self.phase != RoundPhase::Dealer {
            return Err(ActionError::InvalidPhase);
        }

        if !self.dealer.is_hole_revealed() {
            self.dealer.reveal_hole();
            self.emit(RoundEvent::HoleRevealed);
            return Ok(DealerStep::RevealedHole);
        }

        let value = self.dealer.value();
        let is_soft = self.dealer.is_soft();

        // Stand on 17 or higher (considering the soft 17 rule).
        let stands =
            value > 17 || (value == 17 && (!is_soft || self.options.dealer_stands_on_soft_17));
        if stands {
            self.settle();
            return Ok(DealerStep::Finished);
        }

        let card = self.deck.draw().ok_or(ActionError::DeckExhausted)?;
        self.dealer.add_card(card);
        self.emit(RoundEvent::CardDealt { seat: Seat::Dealer });

        if self.dealer.is_bust() {
            self.settle();
        }

        Ok(DealerStep::Drew(card))
    }

    /// Runs the dealer's turn to completion.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is stale, it is not the dealer's
    /// turn, or the deck is exhausted while the dealer must draw.
    pub fn run_dealer(&mut self, ticket: RoundTicket) -> Result<Vec<Card>, ActionError> {
        let mut drawn = Vec::new();

        while self.phase == RoundPhase::Dealer {
            if let DealerStep::Drew(card) = self.dealer_step(ticket)? {
                drawn.push(card);
            }
        }

        Ok(drawn)
    }

    /// Settles the round: determines the winner, records the summary, and
    /// enters the result phase.
    pub(super) fn settle(&mut self) {
        // The dealer's hand is shown once both hands are final, including
        // the case where the player busted before the dealer played.
        self.dealer.reveal_hole();

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let outcome = if player_value > 21 {
            Outcome::DealerWin
        } else if dealer_value > 21 {
            Outcome::PlayerWin
        } else if player_value > dealer_value {
            Outcome::PlayerWin
        } else if player_value < dealer_value {
            Outcome::DealerWin
        } else {
            Outcome::Draw
        };

        let reward = match outcome {
            Outcome::PlayerWin => self.options.win_reward,
            Outcome::DealerWin | Outcome::Draw => 0,
        };

        self.summary = Some(RoundSummary {
            outcome,
            player_value,
            dealer_value,
            reward,
        });
        self.phase = RoundPhase::Result;

        self.emit(match outcome {
            Outcome::PlayerWin => RoundEvent::RoundWon { reward },
            Outcome::DealerWin => RoundEvent::RoundLost,
            Outcome::Draw => RoundEvent::RoundDraw,
        });
    }
}
