use crate::card::Card;
use crate::dealer::DealerPolicy;
use crate::error::GameError;
use crate::hand::Hand;
use crate::rules::TableRules;
use crate::shoe::Shoe;
use crate::strategy::{Action, BasicStrategy, DecisionStrategy};
use log::debug;
use serde::Serialize;

/// Result of a round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Push,
}

/// Everything the presentation layer needs to report a finished round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub player_total: u8,
    pub dealer_total: u8,
    pub player_hand: Hand,
    pub dealer_hand: Hand,
}

/// The interaction collaborator: supplies one action per player decision
/// point. The engine passes along the current hand, the dealer's face-up
/// card, and the basic strategy suggestion for display; the choice made is
/// entirely the implementor's.
pub trait PlayerInput {
    fn choose(&mut self, hand: &Hand, up_card: Card, suggestion: Action) -> Action;
}

/// Sequences one round of blackjack: the alternating initial deal, the
/// player decision loop, dealer play, and the final comparison of totals.
pub struct RoundOrchestrator<D: DecisionStrategy = BasicStrategy> {
    policy: DealerPolicy,
    advisor: D,
}

impl RoundOrchestrator<BasicStrategy> {
    /// Associated function to create a new `RoundOrchestrator` struct
    /// advising from basic strategy.
    pub fn new(rules: TableRules) -> RoundOrchestrator<BasicStrategy> {
        RoundOrchestrator::with_advisor(rules, BasicStrategy::new())
    }
}

impl<D: DecisionStrategy> RoundOrchestrator<D> {
    /// Like `new` but with a caller-supplied advisor.
    pub fn with_advisor(rules: TableRules, advisor: D) -> RoundOrchestrator<D> {
        RoundOrchestrator {
            policy: DealerPolicy::new(rules),
            advisor,
        }
    }

    /// Plays a single round against `shoe`, driving player decisions
    /// through `input`.
    ///
    /// Cards go out alternately, player first; the dealer's first card is
    /// the face-up card for the whole player turn. The player is prompted
    /// while under 21: a hit draws, a stand ends the turn, and any other
    /// action is unsupported here and simply prompts again. A player bust
    /// loses immediately and the dealer does not play.
    pub fn play_round(
        &self,
        shoe: &mut Shoe,
        input: &mut impl PlayerInput,
    ) -> Result<RoundSummary, GameError> {
        let mut player_hand = Hand::new();
        let mut dealer_hand = Hand::new();

        player_hand.add_card(shoe.draw()?);
        dealer_hand.add_card(shoe.draw()?);
        player_hand.add_card(shoe.draw()?);
        dealer_hand.add_card(shoe.draw()?);

        let up_card = dealer_hand.cards()[0];

        while player_hand.value().total < 21 {
            let suggestion = self.advisor.suggest(&player_hand, up_card);
            match input.choose(&player_hand, up_card, suggestion) {
                Action::Hit => player_hand.add_card(shoe.draw()?),
                Action::Stand => break,
                unsupported => {
                    debug!("action '{}' not supported here, prompting again", unsupported);
                }
            }
        }

        let player_value = player_hand.value();
        if player_value.is_bust() {
            let dealer_total = dealer_hand.value().total;
            return Ok(RoundSummary {
                outcome: Outcome::Lose,
                player_total: player_value.total,
                dealer_total,
                player_hand,
                dealer_hand,
            });
        }

        self.policy.play(&mut dealer_hand, shoe)?;

        let dealer_value = dealer_hand.value();
        let outcome = if dealer_value.is_bust() || player_value.total > dealer_value.total {
            Outcome::Win
        } else if player_value.total == dealer_value.total {
            Outcome::Push
        } else {
            Outcome::Lose
        };

        Ok(RoundSummary {
            outcome,
            player_total: player_value.total,
            dealer_total: dealer_value.total,
            player_hand,
            dealer_hand,
        })
    }
}
