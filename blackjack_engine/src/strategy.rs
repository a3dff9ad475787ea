use crate::card::Card;
use crate::error::GameError;
use crate::hand::Hand;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

/// The playing vocabulary. Only `Hit` and `Stand` are executed by the round
/// loop; the others are accepted at the boundary and reported back as
/// unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Hit,
    Stand,
    Split,
    DoubleDown,
    Surrender,
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Split => "split",
            Action::DoubleDown => "double down",
            Action::Surrender => "surrender",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for Action {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hit" => Ok(Action::Hit),
            "stand" => Ok(Action::Stand),
            "split" => Ok(Action::Split),
            "double" | "double down" => Ok(Action::DoubleDown),
            "surrender" => Ok(Action::Surrender),
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}

/// Trait for anything able to recommend a play from the player's hand and
/// the dealer's face-up card. Advisory only, never enforced.
pub trait DecisionStrategy {
    fn suggest(&self, hand: &Hand, up_card: Card) -> Action;
}

/// Basic strategy trimmed to hit/stand.
///
/// Decisions come from a lookup table keyed on
/// `(player total, dealer up-card value)`, populated once at construction.
pub struct BasicStrategy {
    totals: HashMap<(u8, u8), Action>,
}

impl BasicStrategy {
    /// Associated method for populating the lookup table used by basic
    /// strategy, intended as a helper for `new`.
    fn build_lookup_table() -> HashMap<(u8, u8), Action> {
        let mut totals: HashMap<(u8, u8), Action> = HashMap::new();
        for total in 2..=21 {
            for up_value in 2..=11 {
                let action = match total {
                    t if t < 12 => Action::Hit,
                    12 => match up_value {
                        4..=6 => Action::Stand,
                        _ => Action::Hit,
                    },
                    13..=16 => match up_value {
                        2..=6 => Action::Stand,
                        _ => Action::Hit,
                    },
                    _ => Action::Stand,
                };
                totals.insert((total, up_value), action);
            }
        }
        totals
    }

    /// Associated function to create a new `BasicStrategy` struct.
    pub fn new() -> BasicStrategy {
        BasicStrategy {
            totals: BasicStrategy::build_lookup_table(),
        }
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        BasicStrategy::new()
    }
}

impl DecisionStrategy for BasicStrategy {
    fn suggest(&self, hand: &Hand, up_card: Card) -> Action {
        let total = u8::min(hand.value().total, 21);
        self.totals
            .get(&(total, up_card.value()))
            .copied()
            .unwrap_or(Action::Hit)
    }
}
