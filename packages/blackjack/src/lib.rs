mod card;
mod deck;
mod error;
mod hand;
mod payout;
mod round;
mod strategy;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use hand::{
    calculate_hand_value, can_split_cards, is_blackjack, is_busted, is_soft_hand, Hand,
};
pub use payout::{tokens_won, Outcome, PayoutRatio};
pub use round::{Round, RoundPhase, RoundSummary, Wallet};
pub use strategy::{optimal_move, OptimalMove};
