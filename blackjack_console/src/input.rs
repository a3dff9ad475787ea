//! The interactive seat at the table.

use crate::render;
use blackjack_engine::prelude::*;
use std::io::{self, Write};

/// Drives player decisions from stdin. Each prompt re-renders the table,
/// shows the basic strategy suggestion, and loops until a recognizable
/// action token comes in. End of input is treated as a stand.
pub struct ConsolePlayer;

impl PlayerInput for ConsolePlayer {
    fn choose(&mut self, hand: &Hand, up_card: Card, suggestion: Action) -> Action {
        render::show_table(hand, up_card);
        println!(
            "Basic Strategy Suggests: {}",
            suggestion.to_string().to_uppercase()
        );
        loop {
            match read_line("Do you want to 'hit', 'stand', 'split', 'double' or 'surrender'? ") {
                Some(line) => match line.parse::<Action>() {
                    Ok(action) => return action,
                    Err(e) => println!("{}", e),
                },
                None => return Action::Stand,
            }
        }
    }
}

/// Prompts for a yes/no answer; anything but `y` declines.
pub fn confirm(prompt: &str) -> bool {
    match read_line(prompt) {
        Some(line) => line.eq_ignore_ascii_case("y"),
        None => false,
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
