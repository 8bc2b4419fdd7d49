// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Camel Cards labels and hands.
//!
//! This crate defines the [Label] alphabet and the [Cards] of a five cards
//! hand, parsed from their text representation:
//!
//! ```
//! # use camelcards_cards::{Cards, Label};
//! let cards = "32T3K".parse::<Cards>().unwrap();
//! assert_eq!(cards.labels()[2], Label::Ten);
//! assert_eq!(cards.counts()[Label::Trey.index()], 2);
//! ```
//!
//! To iterate through all possible hands:
//!
//! ```no_run
//! # use camelcards_cards::Cards;
//! let mut counter = 0;
//! Cards::for_each(|cards| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 371_293);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Cards, CardsError, Label};
