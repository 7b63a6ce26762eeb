//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur during the opening deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidPhase,
    /// The ticket belongs to a round that was already reset.
    #[error("ticket belongs to a previous round")]
    StaleRound,
    /// Not enough cards to complete the opening deal.
    #[error("not enough cards to complete the opening deal")]
    NotEnoughCards,
}

/// Errors that can occur during player actions and dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidPhase,
    /// The ticket belongs to a round that was already reset.
    #[error("ticket belongs to a previous round")]
    StaleRound,
    /// No cards left in the deck.
    ///
    /// Normal play never gets here: a round draws far fewer than 52 cards.
    /// Hitting it means a stacked deck was too short; abort the round with
    /// [`Round::replay`](crate::Round::replay).
    #[error("no cards left in the deck")]
    DeckExhausted,
}
