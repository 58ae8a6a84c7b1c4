use serde::{Deserialize, Serialize};

/// Terminal result of a round. Produced exactly once, at resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBlackjack,
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

impl Outcome {
    /// Total tokens returned per chip bet, as a ratio.
    pub fn payout_ratio(&self) -> PayoutRatio {
        match self {
            Outcome::PlayerBlackjack => PayoutRatio::BLACKJACK,
            Outcome::DealerBust | Outcome::PlayerWin => PayoutRatio::WIN,
            Outcome::Push => PayoutRatio::PUSH,
            Outcome::PlayerBust | Outcome::DealerWin => PayoutRatio::LOSS,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBlackjack => "Blackjack!",
            Outcome::PlayerBust => "Bust! You went over 21.",
            Outcome::DealerBust => "Dealer busts!",
            Outcome::PlayerWin => "You win!",
            Outcome::DealerWin => "You lose.",
            Outcome::Push => "Push. Your bet has been returned.",
        }
    }
}

/// Payout multiplier expressed as a total-return ratio: a winning bet of
/// `bet` chips pays `bet * numerator / denominator` tokens, stake included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    /// Natural 21, 3:2 on top of the returned stake.
    pub const BLACKJACK: Self = Self {
        numerator: 5,
        denominator: 2,
    };
    /// Even money plus the returned stake.
    pub const WIN: Self = Self {
        numerator: 2,
        denominator: 1,
    };
    /// Stake returned, no net gain.
    pub const PUSH: Self = Self {
        numerator: 1,
        denominator: 1,
    };
    pub const LOSS: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// Rounds down, so a 15-chip blackjack pays 37 tokens.
    pub fn calculate_payout(&self, bet: u64) -> u64 {
        bet * self.numerator as u64 / self.denominator as u64
    }
}

/// Tokens won for an outcome, per the fixed payout table.
pub fn tokens_won(outcome: Outcome, bet: u64) -> u64 {
    outcome.payout_ratio().calculate_payout(bet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blackjack_pays_two_and_a_half() {
        assert_eq!(tokens_won(Outcome::PlayerBlackjack, 10), 25);
        assert_eq!(tokens_won(Outcome::PlayerBlackjack, 100), 250);
        // Odd bets round down.
        assert_eq!(tokens_won(Outcome::PlayerBlackjack, 15), 37);
    }

    #[test]
    fn test_win_pays_double() {
        assert_eq!(tokens_won(Outcome::PlayerWin, 20), 40);
        assert_eq!(tokens_won(Outcome::DealerBust, 20), 40);
    }

    #[test]
    fn test_push_returns_stake() {
        assert_eq!(tokens_won(Outcome::Push, 20), 20);
    }

    #[test]
    fn test_losses_pay_nothing() {
        assert_eq!(tokens_won(Outcome::PlayerBust, 20), 0);
        assert_eq!(tokens_won(Outcome::DealerWin, 20), 0);
    }

    #[test]
    fn test_zero_bet_pays_zero() {
        assert_eq!(tokens_won(Outcome::PlayerBlackjack, 0), 0);
    }
}
