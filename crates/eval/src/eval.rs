// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classifier.
use std::{cmp::Ordering, fmt};

use camelcards_cards::{Cards, Label};

/// A hand category.
///
/// The discriminant is the hand strength, from the strongest
/// [HandRank::FiveOfAKind] with strength 0 to [HandRank::Unclassified] with
/// strength 7. The [Ord] implementation follows the hand value, so that a
/// stronger category compares greater than a weaker one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandRank {
    /// All five cards have the same label: `AAAAA`.
    FiveOfAKind = 0,
    /// Four cards have the same label: `AA8AA`.
    FourOfAKind,
    /// Three cards share a label and the other two share another: `23332`.
    FullHouse,
    /// Three cards share a label, the other two are distinct: `TTT98`.
    ThreeOfAKind,
    /// Two pairs and a fifth distinct card: `23432`.
    TwoPair,
    /// One pair and three distinct cards: `A23A4`.
    OnePair,
    /// All labels are distinct: `23456`.
    HighCard,
    /// No category matched.
    Unclassified,
}

impl HandRank {
    /// Classifies cards with every label standing for itself.
    pub fn of(cards: &Cards) -> HandRank {
        Self::from_counts(&cards.counts())
    }

    /// Classifies cards with [Label::Jack] as a joker that takes whichever
    /// label gives the strongest category.
    pub fn with_jokers(cards: &Cards) -> HandRank {
        Self::with_wildcard(cards, Label::Jack)
    }

    /// Classifies cards with `wildcard` taking whichever label gives the
    /// strongest category.
    pub fn with_wildcard(cards: &Cards, wildcard: Label) -> HandRank {
        let mut counts = cards.counts();
        let jokers = std::mem::take(&mut counts[wildcard.index()]);

        match jokers {
            n if n >= 4 => HandRank::FiveOfAKind,
            3 if counts.contains(&2) => HandRank::FiveOfAKind,
            3 => HandRank::FourOfAKind,
            n => Self::from_counts(&counts).upgrade(n),
        }
    }

    /// The hand strength, 0 is the best.
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// Returns all the categories from the strongest to the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            FiveOfAKind,
            FourOfAKind,
            FullHouse,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
            Unclassified,
        ]
        .into_iter()
    }

    fn from_counts(counts: &[u8; Label::COUNT]) -> HandRank {
        let mut groups = *counts;
        groups.sort_unstable_by(|a, b| b.cmp(a));

        match groups {
            [5, ..] => HandRank::FiveOfAKind,
            [4, ..] => HandRank::FourOfAKind,
            [3, 2, ..] => HandRank::FullHouse,
            [3, ..] => HandRank::ThreeOfAKind,
            [2, 2, ..] => HandRank::TwoPair,
            [2, ..] => HandRank::OnePair,
            [1, ..] => HandRank::HighCard,
            _ => HandRank::Unclassified,
        }
    }

    /// Adds up to two jokers to the largest group of this category.
    fn upgrade(self, jokers: u8) -> HandRank {
        use HandRank::*;

        match (self, jokers) {
            (rank, 0) => rank,
            (FourOfAKind, _) => FiveOfAKind,
            (FullHouse | ThreeOfAKind, 1) => FourOfAKind,
            (FullHouse | ThreeOfAKind, _) => FiveOfAKind,
            (TwoPair, _) => FullHouse,
            (OnePair, 1) => ThreeOfAKind,
            (OnePair, _) => FourOfAKind,
            (HighCard, 1) => OnePair,
            (HighCard, _) => ThreeOfAKind,
            (rank, _) => rank,
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        other.strength().cmp(&self.strength())
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::FiveOfAKind => "Five of a kind",
            HandRank::FourOfAKind => "Four of a kind",
            HandRank::FullHouse => "Full house",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::TwoPair => "Two pair",
            HandRank::OnePair => "One pair",
            HandRank::HighCard => "High card",
            HandRank::Unclassified => "Unclassified",
        };

        write!(f, "{name}")
    }
}
