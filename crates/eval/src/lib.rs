// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Camel Cards hand classifier and ranking.
//!
//! Hands are classified into a [HandRank] category, with the jack either
//! standing for itself or acting as a joker depending on the [Rules], and
//! ordered by category and then card by card:
//!
//! ```
//! # use camelcards_eval::*;
//! let cards = "KTJJT".parse::<Cards>().unwrap();
//! assert_eq!(Rules::Standard.classify(&cards), HandRank::TwoPair);
//! assert_eq!(Rules::Jokers.classify(&cards), HandRank::FourOfAKind);
//! ```
//!
//! A [Game] ranks a set of hands with bids from the weakest to the strongest
//! and computes the total winnings:
//!
//! ```
//! # use camelcards_eval::*;
//! let hands = [("32T3K", 765), ("T55J5", 684), ("KK677", 28), ("KTJJT", 220), ("QQQJA", 483)]
//!     .map(|(cards, bid)| (cards.parse::<Cards>().unwrap(), bid));
//!
//! assert_eq!(Game::new(Rules::Standard, hands)?.winnings(), 6440);
//! assert_eq!(Game::new(Rules::Jokers, hands)?.winnings(), 5905);
//! # Ok::<(), WinningsOverflow>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod game;
pub mod rules;

pub use eval::HandRank;
pub use game::{Game, Hand, WinningsOverflow, winnings};
pub use rules::Rules;

// Reexport cards types.
pub use camelcards_cards::{Cards, CardsError, Label};
