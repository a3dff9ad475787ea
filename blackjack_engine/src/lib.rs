//! A single-player blackjack engine: multi-deck shoe with cut-card
//! reshuffling, ace-flex hand scoring, a basic strategy advisor, dealer play
//! driven by configurable table rules, and a round orchestrator that leaves
//! rendering and input to the caller.
//!
//! The crate performs no I/O of its own beyond `log` statements, so it can be
//! embedded behind any front end. See `blackjack_console` for the interactive
//! console adapter.

pub mod card;
pub mod dealer;
pub mod error;
pub mod hand;
pub mod round;
pub mod rules;
pub mod shoe;
pub mod strategy;

pub mod prelude {
    pub use crate::card::{Card, Rank, Suit};
    pub use crate::dealer::{DealerPolicy, DealerState};
    pub use crate::error::GameError;
    pub use crate::hand::{Hand, HandValue};
    pub use crate::round::{Outcome, PlayerInput, RoundOrchestrator, RoundSummary};
    pub use crate::rules::TableRules;
    pub use crate::shoe::Shoe;
    pub use crate::strategy::{Action, BasicStrategy, DecisionStrategy};
}

pub use prelude::*;
