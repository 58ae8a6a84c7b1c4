use crate::round::RoundPhase;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid bet of {bet} (available chips: {chips})")]
    InvalidBet { bet: u64, chips: u64 },

    #[error("{action} is not allowed in the {phase:?} phase")]
    IllegalAction {
        action: &'static str,
        phase: RoundPhase,
    },

    #[error("the deck is out of cards")]
    EmptyDeck,
}
