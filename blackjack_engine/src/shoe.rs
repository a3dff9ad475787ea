use crate::card::{Card, Rank, Suit};
use crate::error::GameError;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A dealing shoe holding one or more shuffled 52-card decks.
///
/// The shoe carries a cut-card position near its end: once the remaining
/// card count falls to the cut card, the next draw first rebuilds and
/// reshuffles the whole shoe. Drawing from an empty shoe therefore never
/// happens during normal play.
pub struct Shoe {
    cards: Vec<Card>,
    cut_position: usize,
    num_decks: usize,
    rng: StdRng,
}

impl Shoe {
    /// Associated function to create a new `Shoe` struct with `num_decks`
    /// freshly shuffled decks. Returns `GameError::InvalidDeckCount` for a
    /// zero deck count.
    pub fn new(num_decks: usize) -> Result<Shoe, GameError> {
        Shoe::from_rng(num_decks, StdRng::from_entropy())
    }

    /// Like `Shoe::new` but seeded, for reproducible games and tests.
    pub fn with_seed(num_decks: usize, seed: u64) -> Result<Shoe, GameError> {
        Shoe::from_rng(num_decks, StdRng::seed_from_u64(seed))
    }

    fn from_rng(num_decks: usize, mut rng: StdRng) -> Result<Shoe, GameError> {
        if num_decks == 0 {
            return Err(GameError::InvalidDeckCount(num_decks));
        }
        let mut cards = generate_cards(num_decks);
        cards.shuffle(&mut rng);
        Ok(Shoe {
            cards,
            cut_position: default_cut_position(num_decks),
            num_decks,
            rng,
        })
    }

    /// Removes and returns one card from the draw end of the shoe.
    ///
    /// The cut-card check happens before the pop: if the remaining count is
    /// at or below `cut_position`, every previously drawn card is discarded
    /// and a full shoe is regenerated and reshuffled first. The deck count
    /// of the regenerated shoe is recomputed from the remaining card count
    /// (one deck minimum); the cut position is kept from construction.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.cards.len() <= self.cut_position {
            self.refresh();
        }
        self.cards.pop().ok_or(GameError::ShoeExhausted)
    }

    /// Number of cards left in the shoe.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn num_decks(&self) -> usize {
        self.num_decks
    }

    pub fn cut_position(&self) -> usize {
        self.cut_position
    }

    fn refresh(&mut self) {
        self.num_decks = usize::max(1, self.cards.len() / 52);
        debug!(
            "reached the cut card, reshuffling {} deck(s)",
            self.num_decks
        );
        self.cards = generate_cards(self.num_decks);
        self.cards.shuffle(&mut self.rng);
    }
}

fn generate_cards(num_decks: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(num_decks * 52);
    for _ in 0..num_decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    cards
}

/// Cut-card depth used by real tables: half a deck in from the end for a
/// single deck, a deck and a half for anything larger.
fn default_cut_position(num_decks: usize) -> usize {
    match num_decks {
        1 => 26,
        2 => 78,
        n => n * 52 - 78,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn zero_decks_is_rejected() {
        assert!(matches!(
            Shoe::new(0),
            Err(GameError::InvalidDeckCount(0))
        ));
    }

    #[test]
    fn fresh_shoe_is_a_standard_multideck() {
        for num_decks in [1usize, 2, 6] {
            let shoe = Shoe::with_seed(num_decks, 7).unwrap();
            assert_eq!(shoe.remaining(), num_decks * 52);

            let mut counts: HashMap<(Rank, Suit), usize> = HashMap::new();
            for card in &shoe.cards {
                *counts.entry((card.rank, card.suit)).or_insert(0) += 1;
            }
            assert_eq!(counts.len(), 52);
            assert!(counts.values().all(|&n| n == num_decks));
        }
    }

    #[test]
    fn cut_position_table() {
        assert_eq!(Shoe::with_seed(1, 0).unwrap().cut_position(), 26);
        assert_eq!(Shoe::with_seed(2, 0).unwrap().cut_position(), 78);
        assert_eq!(Shoe::with_seed(5, 0).unwrap().cut_position(), 5 * 52 - 78);
    }

    #[test]
    fn drawing_at_the_cut_card_reshuffles_first() {
        let mut shoe = Shoe::with_seed(1, 42).unwrap();
        for _ in 0..26 {
            shoe.draw().unwrap();
        }
        assert_eq!(shoe.remaining(), 26);

        // 26 remaining <= cut at 26, so this draw regenerates a full
        // single deck (max(1, 26 / 52) = 1) before popping.
        shoe.draw().unwrap();
        assert_eq!(shoe.remaining(), 51);
        assert_eq!(shoe.num_decks(), 1);
    }

    #[test]
    fn reshuffle_shrinks_to_the_remaining_deck_count() {
        let mut shoe = Shoe::with_seed(2, 42).unwrap();
        assert_eq!(shoe.remaining(), 104);
        for _ in 0..26 {
            shoe.draw().unwrap();
        }
        assert_eq!(shoe.remaining(), 78);

        // 78 remaining <= cut at 78: regenerated as max(1, 78 / 52) = 1 deck.
        shoe.draw().unwrap();
        assert_eq!(shoe.remaining(), 51);
        assert_eq!(shoe.num_decks(), 1);
        // The cut position set at construction stays put.
        assert_eq!(shoe.cut_position(), 78);
    }

    #[test]
    fn draw_never_underflows_over_a_long_session() {
        let mut shoe = Shoe::with_seed(1, 3).unwrap();
        for _ in 0..1_000 {
            shoe.draw().unwrap();
            assert!(shoe.remaining() > 0);
        }
    }
}
