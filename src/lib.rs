//! A single-player blackjack round engine.
//!
//! The crate provides a [`Round`] type that manages the full round flow:
//! dealing, player hits and stands, the dealer's automatic play to 17, and
//! winner determination. Shuffling is seeded, so rounds are reproducible.
//! Every mutating call takes a [`RoundTicket`], and tickets issued before a
//! reset are rejected, so UI callbacks deferred behind animation delays can
//! never leak into a later round.
//!
//! The engine performs no I/O. Presentation layers (audio, haptics, UI)
//! observe it by draining [`RoundEvent`]s after each action.
//!
//! # Example
//!
//! ```
//! use pocket21::{Round, RoundOptions, RoundPhase};
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! let ticket = round.ticket();
//!
//! round.deal(ticket).unwrap();
//! round.stand(ticket).unwrap();
//! round.run_dealer(ticket).unwrap();
//!
//! assert_eq!(round.phase(), RoundPhase::Result);
//! let summary = round.summary().unwrap();
//! println!("{:?}", summary.outcome);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError};
pub use event::{RoundEvent, Seat};
pub use hand::{DealerHand, Hand};
pub use options::RoundOptions;
pub use result::{Outcome, RoundSummary};
pub use round::{DealerStep, Round, RoundPhase, RoundTicket};
