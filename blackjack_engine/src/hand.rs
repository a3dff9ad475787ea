use crate::card::Card;
use serde::Serialize;
use std::fmt::{self, Display};

/// The best value of a hand under ace-flex scoring.
///
/// `total` is the highest value not exceeding 21 when one is reachable,
/// with busted totals left unreduced once every Ace counts as 1.
/// `soft_aces` is the number of Aces still counted as 11; a hand with
/// `soft_aces == 0` is hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    pub total: u8,
    pub soft_aces: u8,
}

impl HandValue {
    pub fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    pub fn is_bust(&self) -> bool {
        self.total > 21
    }
}

/// One participant's cards for a round. Append-only: cards never go back to
/// the shoe, the hand is simply dropped when the round ends.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Associated function to create a new, empty `Hand` struct.
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Scores the hand: every Ace starts at 11, then Aces are downgraded to
    /// 1 one at a time while the total is over 21 and a soft Ace remains.
    pub fn value(&self) -> HandValue {
        let mut total: u8 = self.cards.iter().map(|card| card.value()).sum();
        let mut soft_aces = self.cards.iter().filter(|card| card.is_ace()).count() as u8;
        while total > 21 && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        HandValue { total, soft_aces }
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}", cards)
    }
}
