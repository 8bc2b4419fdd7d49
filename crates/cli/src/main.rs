// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Camel Cards winnings calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, error, info};
use std::path::PathBuf;

use camelcards_eval::{Game, Hand, Rules};

pub mod input;

#[derive(Debug, Parser)]
struct Cli {
    /// The puzzle input file, one `<cards> <bid>` per line.
    input: PathBuf,
    /// Treat J as a joker wildcard.
    #[clap(long, short)]
    jokers: bool,
    /// Log each ranked hand with its category.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let entries =
        input::read(&cli.input).map_err(|e| anyhow!("{}: {e}", cli.input.display()))?;

    let rules = if cli.jokers {
        Rules::Jokers
    } else {
        Rules::Standard
    };

    info!("Ranking {} hands with {rules} rules", entries.len());
    let game = Game::new(rules, entries)?;

    for (rank, hand) in game.ranked() {
        debug!("{}", hand_line(rank, hand));
    }

    println!("Sum = {}", game.winnings());

    Ok(())
}

/// Formats a ranked hand as `rank cards bid strength category`.
fn hand_line(rank: u64, hand: &Hand) -> String {
    format!(
        "{rank:>5} {} {:>6} {} {}",
        hand.cards(),
        hand.bid(),
        hand.rank().strength(),
        hand.rank()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let cli = Cli::try_parse_from(["camelcards", "input.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert!(!cli.jokers);
        assert!(!cli.verbose);

        let cli = Cli::try_parse_from(["camelcards", "-j", "--verbose", "input.txt"]).unwrap();
        assert!(cli.jokers);
        assert!(cli.verbose);

        assert!(Cli::try_parse_from(["camelcards"]).is_err());
    }

    #[test]
    fn hand_line_strength() {
        let hand = Hand::new("T55J5".parse().unwrap(), 684, Rules::Jokers);
        assert_eq!(hand_line(3, &hand), "    3 T55J5    684 1 Four of a kind");

        let hand = Hand::new("32T3K".parse().unwrap(), 765, Rules::Standard);
        assert_eq!(hand_line(1, &hand), "    1 32T3K    765 5 One pair");
    }

    #[test]
    fn run_missing_input() {
        let cli = Cli::try_parse_from(["camelcards", "/nonexistent/camelcards.txt"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/camelcards.txt: "));
    }

    #[test]
    fn run_winnings_overflow() {
        let path = std::env::temp_dir().join(format!("camelcards-max-{}.txt", std::process::id()));
        std::fs::write(&path, "23456 18446744073709551615\nAAAAA 18446744073709551615\n").unwrap();

        let arg = path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["camelcards", arg.as_str()]).unwrap();
        let res = run(&cli);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(res.unwrap_err().to_string(), "winnings overflow at rank 2");
    }
}
