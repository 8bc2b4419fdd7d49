// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands with bids and winnings.
use camelcards_cards::Cards;
use thiserror::Error;

use crate::{eval::HandRank, rules::Rules};

/// A hand with its bid.
///
/// The hand category is computed once when the hand is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: Cards,
    bid: u64,
    rank: HandRank,
}

impl Hand {
    /// Creates a hand classified with the given rules.
    pub fn new(cards: Cards, bid: u64, rules: Rules) -> Self {
        Self {
            cards,
            bid,
            rank: rules.classify(&cards),
        }
    }

    /// The hand cards.
    pub fn cards(&self) -> &Cards {
        &self.cards
    }

    /// The hand bid.
    pub fn bid(&self) -> u64 {
        self.bid
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }
}

/// The total winnings don't fit in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("winnings overflow at rank {rank}")]
pub struct WinningsOverflow {
    /// The rank of the hand whose bid overflowed the total.
    pub rank: u64,
}

/// Sorts hands from the weakest to the strongest and returns the sum of each
/// hand bid multiplied by its 1-based position.
///
/// The hands must have been created with the same `rules`.
pub fn winnings(hands: &mut [Hand], rules: Rules) -> Result<u64, WinningsOverflow> {
    hands.sort_by(|a, b| rules.compare(a, b));
    hands.iter().zip(1u64..).try_fold(0u64, |total, (hand, rank)| {
        hand.bid
            .checked_mul(rank)
            .and_then(|amount| total.checked_add(amount))
            .ok_or(WinningsOverflow { rank })
    })
}

/// A set of hands played with the same rules.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    /// The hands from the weakest to the strongest.
    hands: Vec<Hand>,
    winnings: u64,
}

impl Game {
    /// Creates a game from `(cards, bid)` pairs.
    ///
    /// Fails if the total winnings overflow.
    pub fn new<I>(rules: Rules, entries: I) -> Result<Self, WinningsOverflow>
    where
        I: IntoIterator<Item = (Cards, u64)>,
    {
        let mut hands = entries
            .into_iter()
            .map(|(cards, bid)| Hand::new(cards, bid, rules))
            .collect::<Vec<_>>();
        let winnings = winnings(&mut hands, rules)?;

        Ok(Self {
            rules,
            hands,
            winnings,
        })
    }

    /// The game rules.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The number of hands.
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Checks if the game has no hands.
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// The hands with their rank, from the weakest with rank 1.
    pub fn ranked(&self) -> impl Iterator<Item = (u64, &Hand)> {
        (1..).zip(self.hands.iter())
    }

    /// The total winnings.
    pub fn winnings(&self) -> u64 {
        self.winnings
    }
}
