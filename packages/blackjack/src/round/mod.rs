use crate::{payout, Card, Deck, GameError, Hand, Outcome};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chip/token balances live outside the engine. The engine validates every
/// precondition before calling in, so debit and credit are assumed to
/// succeed.
pub trait Wallet {
    fn chips(&self) -> u64;
    fn debit_chips(&mut self, amount: u64);
    fn credit_tokens(&mut self, amount: u64);
}

/// Lifecycle of a round. `Betting` is where a round conceptually starts;
/// `Dealing` covers the initial four-card deal; `Resolved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Betting,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// Everything a caller needs after a round resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub player_score: u8,
    pub dealer_score: u8,
    pub tokens_won: u64,
}

/// A single round of blackjack against the house dealer.
///
/// The bet is escrowed (debited from the wallet) when the round starts and
/// paid back out exactly once at resolution, possibly as zero. One deck is
/// shuffled at round start and threaded through every draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    deck: Deck,
    bet: u64,
    player_hand: Hand,
    dealer_hand: Hand,
    phase: RoundPhase,
    hole_revealed: bool,
    hit_taken: bool,
    outcome: Option<Outcome>,
    tokens_won: u64,
}

impl Round {
    /// Place a bet and deal the opening hands. Fails with `InvalidBet` before
    /// any card is dealt or chip debited. A natural 21 resolves immediately
    /// as `PlayerBlackjack` without dealer play.
    pub fn start(bet: u64, wallet: &mut impl Wallet, rng: &mut impl Rng) -> Result<Self, GameError> {
        Self::start_with_deck(Deck::shuffled(rng), bet, wallet)
    }

    /// Same as `start` but with a caller-supplied deck. Lets tests (or an
    /// external shuffler) stack the card order.
    pub fn start_with_deck(
        deck: Deck,
        bet: u64,
        wallet: &mut impl Wallet,
    ) -> Result<Self, GameError> {
        let chips = wallet.chips();
        if bet == 0 || bet > chips {
            return Err(GameError::InvalidBet { bet, chips });
        }

        let mut round = Self {
            deck,
            bet,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            phase: RoundPhase::Dealing,
            hole_revealed: false,
            hit_taken: false,
            outcome: None,
            tokens_won: 0,
        };

        wallet.debit_chips(bet);

        // Player, dealer, player, dealer.
        for _ in 0..2 {
            let card = round.deck.draw()?;
            round.player_hand.add_card(card);
            let card = round.deck.draw()?;
            round.dealer_hand.add_card(card);
        }

        if round.player_hand.is_blackjack() {
            round.resolve(Outcome::PlayerBlackjack, wallet);
        } else {
            round.phase = RoundPhase::PlayerTurn;
        }

        Ok(round)
    }

    /// Draw one card. Busts over 21, auto-advances to dealer play at exactly
    /// 21, otherwise stays in the player turn. Permanently disables double
    /// down for this round.
    pub fn hit(&mut self, wallet: &mut impl Wallet) -> Result<(), GameError> {
        self.expect_player_turn("hit")?;

        let card = self.deck.draw()?;
        self.player_hand.add_card(card);
        self.hit_taken = true;

        match self.player_hand.value() {
            v if v > 21 => self.resolve(Outcome::PlayerBust, wallet),
            21 => self.play_dealer(wallet)?,
            _ => {}
        }
        Ok(())
    }

    /// End the player turn and run dealer play to completion.
    pub fn stand(&mut self, wallet: &mut impl Wallet) -> Result<(), GameError> {
        self.expect_player_turn("stand")?;
        self.play_dealer(wallet)
    }

    /// Double the bet, draw exactly one card, then resolve or run dealer
    /// play. Only available on the opening two cards, before any hit, with
    /// enough chips left to match the original bet.
    pub fn double_down(&mut self, wallet: &mut impl Wallet) -> Result<(), GameError> {
        self.expect_player_turn("double down")?;
        if !self.can_double(wallet.chips()) {
            return Err(GameError::IllegalAction {
                action: "double down",
                phase: self.phase,
            });
        }

        let card = self.deck.draw()?;
        wallet.debit_chips(self.bet);
        self.bet *= 2;
        self.player_hand.add_card(card);

        if self.player_hand.is_busted() {
            self.resolve(Outcome::PlayerBust, wallet);
            Ok(())
        } else {
            self.play_dealer(wallet)
        }
    }

    /// Splitting is advertised in the UI but not supported by this engine;
    /// `can_split` reports eligibility, invoking the action always fails.
    pub fn split(&mut self) -> Result<(), GameError> {
        Err(GameError::IllegalAction {
            action: "split",
            phase: self.phase,
        })
    }

    pub fn can_double(&self, chips: u64) -> bool {
        self.phase == RoundPhase::PlayerTurn
            && self.player_hand.len() == 2
            && !self.hit_taken
            && chips >= self.bet
    }

    pub fn can_split(&self) -> bool {
        self.phase == RoundPhase::PlayerTurn && self.player_hand.can_split()
    }

    fn expect_player_turn(&self, action: &'static str) -> Result<(), GameError> {
        if self.phase == RoundPhase::PlayerTurn {
            Ok(())
        } else {
            Err(GameError::IllegalAction {
                action,
                phase: self.phase,
            })
        }
    }

    /// Dealer policy: reveal the hole card, draw below 17, stand on every 17
    /// including soft 17. Runs synchronously to completion; callers wanting
    /// to animate replay the cards appended to the dealer hand.
    fn play_dealer(&mut self, wallet: &mut impl Wallet) -> Result<(), GameError> {
        self.phase = RoundPhase::DealerTurn;
        self.hole_revealed = true;

        while self.dealer_hand.value() < 17 {
            let card = self.deck.draw()?;
            self.dealer_hand.add_card(card);
        }

        let dealer = self.dealer_hand.value();
        let player = self.player_hand.value();
        let outcome = if dealer > 21 {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::PlayerWin
        } else if player < dealer {
            Outcome::DealerWin
        } else {
            Outcome::Push
        };

        self.resolve(outcome, wallet);
        Ok(())
    }

    /// Exactly one payout computation and one wallet credit per round, even
    /// when the credited amount is zero.
    fn resolve(&mut self, outcome: Outcome, wallet: &mut impl Wallet) {
        self.phase = RoundPhase::Resolved;
        self.hole_revealed = true;
        self.outcome = Some(outcome);
        self.tokens_won = payout::tokens_won(outcome, self.bet);
        wallet.credit_tokens(self.tokens_won);
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer_hand.cards.first().copied()
    }

    pub fn player_score(&self) -> u8 {
        self.player_hand.value()
    }

    /// Score the player can see: the full dealer hand once the hole card is
    /// revealed, only the upcard before that.
    pub fn visible_dealer_score(&self) -> u8 {
        if self.hole_revealed {
            self.dealer_hand.value()
        } else {
            self.dealer_upcard().map(|c| c.value()).unwrap_or(0)
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn tokens_won(&self) -> u64 {
        self.tokens_won
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        self.outcome.map(|outcome| RoundSummary {
            outcome,
            player_score: self.player_hand.value(),
            dealer_score: self.dealer_hand.value(),
            tokens_won: self.tokens_won,
        })
    }
}
