use crate::Card;
use serde::{Deserialize, Serialize};

/// Best blackjack total for a set of cards. Aces start at 11; while the
/// total exceeds 21 each remaining ace is re-counted as 1. Order of the
/// cards never affects the result.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += card.value();
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Whether an ace is still counted as 11 (could drop to 1 without busting).
pub fn is_soft_hand(cards: &[Card]) -> bool {
    if !cards.iter().any(|c| c.is_ace()) {
        return false;
    }
    let hard_total: u8 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { c.value() })
        .sum();
    hard_total + 10 == calculate_hand_value(cards)
}

pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > 21
}

/// A natural: exactly two cards totaling 21. Pays better than a 21 built
/// from three or more cards.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == 21
}

pub fn can_split_cards(card1: &Card, card2: &Card) -> bool {
    card1.rank == card2.rank
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && can_split_cards(&self.cards[0], &self.cards[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        let cards = vec![card(Rank::Two), Card::new(Rank::Three, Suit::Hearts)];
        assert_eq!(calculate_hand_value(&cards), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        let cards = vec![card(Rank::King), Card::new(Rank::Queen, Suit::Hearts)];
        assert_eq!(calculate_hand_value(&cards), 20);
    }

    #[test]
    fn test_calculate_hand_value_blackjack() {
        let cards = vec![card(Rank::Ace), Card::new(Rank::King, Suit::Hearts)];
        assert_eq!(calculate_hand_value(&cards), 21);
    }

    #[test]
    fn test_calculate_hand_value_soft_ace() {
        let cards = vec![card(Rank::Ace), card(Rank::Six)];
        assert_eq!(calculate_hand_value(&cards), 17);
    }

    #[test]
    fn test_calculate_hand_value_hard_ace() {
        let cards = vec![card(Rank::Ace), card(Rank::Six), card(Rank::Nine)];
        assert_eq!(calculate_hand_value(&cards), 16);
    }

    #[test]
    fn test_calculate_hand_value_two_aces_and_nine() {
        let cards = vec![
            card(Rank::Ace),
            Card::new(Rank::Ace, Suit::Hearts),
            card(Rank::Nine),
        ];
        // One ace as 11, one as 1.
        assert_eq!(calculate_hand_value(&cards), 21);
    }

    #[test]
    fn test_calculate_hand_value_order_independent() {
        let mut cards = vec![
            card(Rank::Ace),
            card(Rank::Five),
            Card::new(Rank::Ace, Suit::Hearts),
            card(Rank::King),
        ];
        let expected = calculate_hand_value(&cards);
        cards.reverse();
        assert_eq!(calculate_hand_value(&cards), expected);
        cards.swap(0, 2);
        assert_eq!(calculate_hand_value(&cards), expected);
    }

    #[test]
    fn test_is_busted() {
        let cards = vec![card(Rank::King), card(Rank::Queen), card(Rank::Five)];
        assert!(is_busted(&cards));
        assert!(!is_busted(&cards[..2]));
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&[card(Rank::Ace), card(Rank::King)]));
        // 21 with three cards is not a natural.
        assert!(!is_blackjack(&[
            card(Rank::Seven),
            card(Rank::Seven),
            Card::new(Rank::Seven, Suit::Hearts),
        ]));
        assert!(!is_blackjack(&[card(Rank::King), card(Rank::Queen)]));
    }

    #[test]
    fn test_is_soft_hand() {
        assert!(is_soft_hand(&[card(Rank::Ace), card(Rank::Six)]));
        assert!(!is_soft_hand(&[
            card(Rank::Ace),
            card(Rank::Six),
            card(Rank::Nine),
        ]));
        assert!(!is_soft_hand(&[card(Rank::King), card(Rank::Seven)]));
    }

    #[test]
    fn test_can_split_cards() {
        assert!(can_split_cards(
            &card(Rank::Eight),
            &Card::new(Rank::Eight, Suit::Hearts),
        ));
        assert!(!can_split_cards(&card(Rank::Eight), &card(Rank::Nine)));
        // King and queen are both worth 10 but are different ranks.
        assert!(!can_split_cards(&card(Rank::King), &card(Rank::Queen)));
    }

    #[test]
    fn test_hand_struct() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::King));
        hand.add_card(card(Rank::Seven));
        assert_eq!(hand.value(), 17);
        assert!(!hand.is_blackjack());
        assert!(!hand.can_split());

        let mut pair = Hand::new();
        pair.add_card(card(Rank::Eight));
        pair.add_card(Card::new(Rank::Eight, Suit::Clubs));
        assert!(pair.can_split());
    }
}
