//! ASCII rendering of cards, hands, and round results.

use blackjack_engine::prelude::*;

const CARD_ART_LINES: usize = 7;

/// Seven-line ASCII frame for one card face.
pub fn card_art(card: Card) -> [String; CARD_ART_LINES] {
    let rank = card.rank.short();
    let suit = card.suit.symbol();
    [
        "┌───────┐".to_string(),
        format!("| {:<2}    |", rank),
        "|       |".to_string(),
        format!("|   {}   |", suit),
        "|       |".to_string(),
        format!("|    {:>2} |", rank),
        "└───────┘".to_string(),
    ]
}

/// Prints a single card.
pub fn show_card(card: Card) {
    for line in card_art(card) {
        println!("{}", line);
    }
}

/// Prints a hand with its cards side by side.
pub fn show_hand(hand: &Hand) {
    if hand.is_empty() {
        return;
    }
    let mut rows = vec![String::new(); CARD_ART_LINES];
    for &card in hand.cards() {
        for (row, line) in rows.iter_mut().zip(card_art(card)) {
            row.push_str(&line);
            row.push_str("  ");
        }
    }
    println!("{}", rows.join("\n"));
}

/// Prints the table as the player sees it: the dealer's face-up card and
/// the player's hand with its running total.
pub fn show_table(hand: &Hand, up_card: Card) {
    println!("Dealer's Visible Card:");
    show_card(up_card);
    println!("\n(Value: *{}*)", up_card.value());
    println!("Your Hand:");
    show_hand(hand);
    println!("\nTotal: {}\n", hand.value().total);
}

/// Prints the dealer's final hand and the verdict for the round.
pub fn report(summary: &RoundSummary) {
    if summary.player_total > 21 {
        println!("Bust! You exceeded 21 points. You lose!");
        return;
    }

    println!("\nDealer's Hand:");
    show_hand(&summary.dealer_hand);
    println!("\nDealer Total: {}\n", summary.dealer_total);

    match summary.outcome {
        Outcome::Win if summary.dealer_total > 21 => {
            println!("Dealer Bust! Dealer exceeded 21 points. You win!")
        }
        Outcome::Win => println!("Congratulations! You win!"),
        Outcome::Lose => println!("Sorry! Dealer wins!"),
        Outcome::Push => println!("It's a tie!"),
    }
}
