use crate::error::GameError;
use crate::hand::{Hand, HandValue};
use crate::rules::TableRules;
use crate::shoe::Shoe;
use log::debug;

/// Dealer drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    Drawing,
    Done,
}

/// Applies the table's soft-17 rules to decide when the dealer stops
/// drawing.
#[derive(Debug, Clone, Copy)]
pub struct DealerPolicy {
    rules: TableRules,
}

impl DealerPolicy {
    /// Associated function to create a new `DealerPolicy` struct.
    pub fn new(rules: TableRules) -> DealerPolicy {
        DealerPolicy { rules }
    }

    /// One transition of the state machine, evaluated on the dealer hand's
    /// current value.
    ///
    /// Below 17 the dealer always draws. On a soft 17,
    /// `dealer_hits_soft_17` is consulted before `dealer_stands_soft_17`,
    /// so the hit rule wins when both are set. Everything else stands.
    pub fn next_state(&self, value: HandValue) -> DealerState {
        if value.total < 17 {
            return DealerState::Drawing;
        }
        if value.total == 17 && value.is_soft() && self.rules.dealer_hits_soft_17 {
            return DealerState::Drawing;
        }
        DealerState::Done
    }

    /// Plays the dealer hand to completion, drawing one card from the shoe
    /// per `Drawing` step.
    pub fn play(&self, hand: &mut Hand, shoe: &mut Shoe) -> Result<(), GameError> {
        while self.next_state(hand.value()) == DealerState::Drawing {
            let card = shoe.draw()?;
            debug!("dealer draws {}", card);
            hand.add_card(card);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(rank, Suit::Clubs));
        }
        hand
    }

    #[test]
    fn dealer_draws_below_seventeen() {
        let policy = DealerPolicy::new(TableRules::default());
        let value = hand(&[Rank::Ten, Rank::Six]).value();
        assert_eq!(policy.next_state(value), DealerState::Drawing);
    }

    #[test]
    fn dealer_stands_on_hard_seventeen_either_way() {
        let seventeen = hand(&[Rank::Ten, Rank::Seven]).value();
        let stands = DealerPolicy::new(TableRules::default());
        assert_eq!(stands.next_state(seventeen), DealerState::Done);
        let hits = DealerPolicy::new(
            TableRules::default().with_dealer_hits_soft_17(true),
        );
        assert_eq!(hits.next_state(seventeen), DealerState::Done);
    }

    #[test]
    fn soft_seventeen_follows_the_table_rule() {
        let soft_seventeen = hand(&[Rank::Ace, Rank::Six]).value();
        assert!(soft_seventeen.is_soft());

        let stands = DealerPolicy::new(TableRules::default());
        assert_eq!(stands.next_state(soft_seventeen), DealerState::Done);

        let hits = DealerPolicy::new(
            TableRules::default()
                .with_dealer_hits_soft_17(true)
                .with_dealer_stands_soft_17(false),
        );
        assert_eq!(hits.next_state(soft_seventeen), DealerState::Drawing);
    }

    #[test]
    fn hit_rule_wins_when_both_soft_seventeen_flags_are_set() {
        let policy = DealerPolicy::new(
            TableRules::default().with_dealer_hits_soft_17(true),
        );
        let soft_seventeen = hand(&[Rank::Ace, Rank::Six]).value();
        assert_eq!(policy.next_state(soft_seventeen), DealerState::Drawing);
    }

    #[test]
    fn soft_eighteen_stands_even_under_the_hit_rule() {
        let policy = DealerPolicy::new(
            TableRules::default().with_dealer_hits_soft_17(true),
        );
        let soft_eighteen = hand(&[Rank::Ace, Rank::Seven]).value();
        assert_eq!(policy.next_state(soft_eighteen), DealerState::Done);
    }

    #[test]
    fn play_runs_the_hand_to_a_terminal_total() {
        for seed in 0..10 {
            let mut shoe = Shoe::with_seed(1, seed).unwrap();
            let mut dealer = hand(&[Rank::Ten, Rank::Six]);
            let policy = DealerPolicy::new(TableRules::default());
            policy.play(&mut dealer, &mut shoe).unwrap();

            let value = dealer.value();
            assert!(value.total >= 17);
            assert!(dealer.len() >= 3);
            assert_eq!(policy.next_state(value), DealerState::Done);
        }
    }

    #[test]
    fn play_hits_a_soft_seventeen_at_least_once_under_h17() {
        for seed in 0..10 {
            let mut shoe = Shoe::with_seed(1, seed).unwrap();
            let mut dealer = hand(&[Rank::Ace, Rank::Six]);
            let policy = DealerPolicy::new(
                TableRules::default()
                    .with_dealer_hits_soft_17(true)
                    .with_dealer_stands_soft_17(false),
            );
            policy.play(&mut dealer, &mut shoe).unwrap();
            assert!(dealer.len() >= 3);
            assert_eq!(policy.next_state(dealer.value()), DealerState::Done);
        }
    }

    #[test]
    fn play_stands_pat_on_a_soft_seventeen_under_s17() {
        let mut shoe = Shoe::with_seed(1, 0).unwrap();
        let mut dealer = hand(&[Rank::Ace, Rank::Six]);
        let policy = DealerPolicy::new(TableRules::default());
        policy.play(&mut dealer, &mut shoe).unwrap();
        assert_eq!(dealer.len(), 2);
        assert_eq!(shoe.remaining(), 52);
    }
}
