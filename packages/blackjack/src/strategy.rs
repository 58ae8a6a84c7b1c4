use crate::hand::{calculate_hand_value, is_soft_hand};
use crate::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimalMove {
    Hit,
    Stand,
    Double,
}

/// Basic-strategy suggestion for the actions this game supports (no split,
/// no surrender; dealer stands on all 17s). Used by the front-end to
/// highlight the suggested key, never to act on its own.
pub fn optimal_move(player_cards: &[Card], dealer_upcard: Card, can_double: bool) -> OptimalMove {
    let player_value = calculate_hand_value(player_cards);
    let dealer_value = dealer_upcard.value();
    let is_soft = is_soft_hand(player_cards);

    if can_double {
        if is_soft {
            let double = match player_value {
                19 => dealer_value == 6,
                18 => (2..=6).contains(&dealer_value),
                17 => (3..=6).contains(&dealer_value),
                15 | 16 => (4..=6).contains(&dealer_value),
                13 | 14 => (5..=6).contains(&dealer_value),
                _ => false,
            };
            if double {
                return OptimalMove::Double;
            }
        } else {
            let double = match player_value {
                11 => true,
                10 => dealer_value <= 9,
                9 => (3..=6).contains(&dealer_value),
                _ => false,
            };
            if double {
                return OptimalMove::Double;
            }
        }
    }

    if is_soft {
        match player_value {
            v if v >= 19 => OptimalMove::Stand,
            18 if dealer_value < 9 => OptimalMove::Stand,
            _ => OptimalMove::Hit,
        }
    } else {
        match player_value {
            v if v >= 17 => OptimalMove::Stand,
            v if (13..=16).contains(&v) && (2..=6).contains(&dealer_value) => OptimalMove::Stand,
            12 if (4..=6).contains(&dealer_value) => OptimalMove::Stand,
            _ => OptimalMove::Hit,
        }
    }
}
