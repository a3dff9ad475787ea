mod input;
mod render;

use blackjack_engine::prelude::*;
use clap::Parser;
use input::ConsolePlayer;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Single-player blackjack against the house.
#[derive(Parser)]
#[command(name = "blackjack")]
struct Cli {
    /// Number of decks in the shoe
    #[arg(long, default_value_t = 1)]
    decks: usize,
    /// Dealer hits soft 17 instead of standing
    #[arg(long)]
    hit_soft_17: bool,
    /// Path to a JSON table-rules file
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Seed for a reproducible shoe
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let rules = match load_rules(&cli) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::debug!("table rules: {:?}", rules);

    let shoe = match cli.seed {
        Some(seed) => Shoe::with_seed(cli.decks, seed),
        None => Shoe::new(cli.decks),
    };
    let mut shoe = match shoe {
        Ok(shoe) => shoe,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let orchestrator = RoundOrchestrator::new(rules);
    let mut player = ConsolePlayer;

    println!("Welcome to Blackjack!\n");
    loop {
        match orchestrator.play_round(&mut shoe, &mut player) {
            Ok(summary) => render::report(&summary),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }

        if !input::confirm("Do you want to continue playing with the current deck? (y/n): ") {
            break;
        }
    }

    ExitCode::SUCCESS
}

/// Builds the table rules from the optional JSON file, then lets the
/// command line flag override the soft-17 pair.
fn load_rules(cli: &Cli) -> Result<TableRules, Box<dyn Error>> {
    let mut rules = match &cli.rules {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => TableRules::default(),
    };
    if cli.hit_soft_17 {
        rules = rules
            .with_dealer_hits_soft_17(true)
            .with_dealer_stands_soft_17(false);
    }
    Ok(rules)
}
