use crate::{Card, GameError, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single 52-card deck, shuffled once at round start and consumed from the
/// top as cards are dealt. No state survives across rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 52-card set and apply an unbiased Fisher-Yates shuffle.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deck with a fixed card order; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_shuffled_deck_has_52_unique_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining(), 52);

        let unique: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_draw_consumes_deck() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::shuffled(&mut rng);
        let first = deck.draw().unwrap();
        assert_eq!(deck.remaining(), 51);
        assert!(!deck.cards.contains(&first));
    }

    #[test]
    fn test_draw_from_empty_deck_fails() {
        let mut deck = Deck::from_cards(Vec::new());
        assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
        let mut b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
        for _ in 0..52 {
            assert_eq!(a.draw().unwrap(), b.draw().unwrap());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(2));
        assert_ne!(a.cards, b.cards);
    }
}
