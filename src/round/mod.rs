//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::event::RoundEvent;
use crate::hand::{DealerHand, Hand};
use crate::options::RoundOptions;
use crate::result::RoundSummary;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use dealer::DealerStep;
pub use state::{RoundPhase, RoundTicket};

/// A single-player blackjack round engine.
///
/// The engine owns the deck, both hands, and the phase machine. Every
/// mutating call takes a [`RoundTicket`]; a ticket issued before the last
/// reset is rejected without touching state, so callbacks deferred by a
/// presentation layer cannot leak into a later round.
///
/// Use [`RoundOptions`] to configure the soft-17 rule and the win reward.
#[derive(Debug)]
pub struct Round {
    /// Round options.
    pub options: RoundOptions,
    /// Current phase.
    pub(crate) phase: RoundPhase,
    /// The deck being consumed this round.
    pub(crate) deck: Deck,
    /// The player's hand.
    pub(crate) player: Hand,
    /// The dealer's hand.
    pub(crate) dealer: DealerHand,
    /// Summary of the finished round, if any.
    pub(crate) summary: Option<RoundSummary>,
    /// Round generation; bumped on every reset.
    pub(crate) generation: u64,
    /// Fixed card order for the next deal, if set.
    pub(crate) stacked: Option<Vec<Card>>,
    /// Events recorded since the last drain.
    pub(crate) events: Vec<RoundEvent>,
    /// Random number generator.
    pub(crate) rng: ChaCha8Rng,
}

impl Round {
    /// Creates a new round engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pocket21::{Round, RoundOptions, RoundPhase};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.phase(), RoundPhase::Betting);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self {
            options,
            phase: RoundPhase::Betting,
            deck: Deck::empty(),
            player: Hand::new(),
            dealer: DealerHand::new(),
            summary: None,
            generation: 0,
            stacked: None,
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns a ticket for the current round.
    ///
    /// Capture a ticket before scheduling a deferred engine call; the call
    /// fails with a stale-round error if the table was reset in between.
    #[must_use]
    pub const fn ticket(&self) -> RoundTicket {
        RoundTicket(self.generation)
    }

    pub(crate) const fn is_current(&self, ticket: RoundTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Fixes the card order for the next deal instead of shuffling.
    ///
    /// The first card in `cards` is the first card dealt. Intended for
    /// tests and demos; consumed by the next [`Round::deal`] and cleared on
    /// [`Round::replay`].
    pub fn stack_deck(&mut self, cards: Vec<Card>) {
        self.stacked = Some(cards);
    }

    pub(crate) fn emit(&mut self, event: RoundEvent) {
        self.events.push(event);
    }

    /// Drains and returns the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's current hand value.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer value the player is allowed to see.
    ///
    /// Only the up card counts until the hole card is revealed.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u8 {
        self.dealer.visible_value()
    }

    /// Returns the summary of the finished round, if the round is over.
    #[must_use]
    pub const fn summary(&self) -> Option<RoundSummary> {
        self.summary
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Clears the table and returns to the betting phase.
    ///
    /// Resets both hands, the deck, and the summary in one step, and bumps
    /// the round generation so tickets from the finished round are rejected
    /// from here on. Legal from any phase, which doubles as the abort path
    /// after a deck-exhaustion error.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is stale.
    pub fn replay(&mut self, ticket: RoundTicket) -> Result<(), ActionError> {
        if !self.is_current(ticket) {
            return Err(ActionError::StaleRound);
        }

        self.player.clear();
        self.dealer.clear();
        self.deck = Deck::empty();
        self.summary = None;
        self.stacked = None;
        self.phase = RoundPhase::Betting;
        self.generation += 1;
        self.emit(RoundEvent::RoundReset);

        Ok(())
    }
}
