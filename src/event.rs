//! Round events for presentation-layer feedback.
//!
//! The engine records discrete named events as they happen (a card hit the
//! table, the hole card flipped, the round was won). A UI, audio, or haptics
//! layer drains them with [`Round::take_events`](crate::Round::take_events)
//! after each action and decides on its own how and when to present them.
//! The engine never waits on a consumer; unread events are simply dropped
//! at the next drain boundary a consumer chooses.

/// Which side of the table a card went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player's hand.
    Player,
    /// The dealer's hand.
    Dealer,
}

/// A discrete event produced while a round plays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// A card was dealt to the given seat.
    CardDealt {
        /// Where the card landed.
        seat: Seat,
    },
    /// The dealer's hole card was turned face up.
    HoleRevealed,
    /// The round ended in a player win.
    RoundWon {
        /// Points credited for the win.
        reward: u64,
    },
    /// The round ended in a dealer win.
    RoundLost,
    /// The round ended level; nobody wins.
    RoundDraw,
    /// The table was cleared for a new round.
    RoundReset,
}
