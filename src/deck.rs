//! Deck construction, shuffling, and draw order.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A single 52-card deck, consumed from the front as cards are dealt.
///
/// A deck is built fresh for every round and never reused mid-round.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Index of the next card to draw.
    next: usize,
}

impl Deck {
    /// Builds the 52 unique (suit, rank) combinations in canonical order.
    #[must_use]
    pub fn standard() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards
    }

    /// Creates a freshly shuffled deck.
    ///
    /// The shuffle is the unbiased swap-based permutation from
    /// [`SliceRandom::shuffle`], so a deck built from a seeded RNG is
    /// reproducible.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::standard();
        cards.shuffle(rng);
        Self { cards, next: 0 }
    }

    /// Creates a deck with a fixed card order.
    ///
    /// The next draw returns the first card in `cards`. Intended for tests
    /// and demos that need a known deal sequence.
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self { cards, next: 0 }
    }

    /// Creates a deck with nothing left to draw.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: Vec::new(),
            next: 0,
        }
    }

    /// Draws the next card from the front of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }
}
