// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game rules and hands ordering.
use std::{cmp::Ordering, fmt};

use camelcards_cards::{Cards, Label};

use crate::{eval::HandRank, game::Hand};

/// Labels strongest first with the jack in its natural position.
const STANDARD_TABLE: [Label; Label::COUNT] = {
    use Label::*;
    [
        Ace, King, Queen, Jack, Ten, Nine, Eight, Seven, Six, Five, Four, Trey, Deuce,
    ]
};

/// Labels strongest first with the joker as the weakest label.
const JOKERS_TABLE: [Label; Label::COUNT] = {
    use Label::*;
    [
        Ace, King, Queen, Ten, Nine, Eight, Seven, Six, Five, Four, Trey, Deuce, Jack,
    ]
};

/// Label positions in [STANDARD_TABLE] indexed by [Label::index].
const STANDARD_RANKS: [usize; Label::COUNT] = invert(&STANDARD_TABLE);

/// Label positions in [JOKERS_TABLE] indexed by [Label::index].
const JOKERS_RANKS: [usize; Label::COUNT] = invert(&JOKERS_TABLE);

const fn invert(table: &[Label; Label::COUNT]) -> [usize; Label::COUNT] {
    let mut ranks = [0; Label::COUNT];
    let mut pos = 0;
    while pos < Label::COUNT {
        ranks[table[pos] as usize] = pos;
        pos += 1;
    }
    ranks
}

/// The rules used to classify and order hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rules {
    /// Every label stands for itself.
    #[default]
    Standard,
    /// Jacks are jokers: wildcards for classification and the weakest label
    /// when breaking ties.
    Jokers,
}

impl Rules {
    /// The wildcard label, if any.
    pub fn wildcard(self) -> Option<Label> {
        match self {
            Rules::Standard => None,
            Rules::Jokers => Some(Label::Jack),
        }
    }

    /// The labels used for tie breaks, strongest first.
    pub fn rank_table(self) -> &'static [Label; Label::COUNT] {
        match self {
            Rules::Standard => &STANDARD_TABLE,
            Rules::Jokers => &JOKERS_TABLE,
        }
    }

    /// The label position in the rank table, 0 is the strongest.
    pub fn label_rank(self, label: Label) -> usize {
        let ranks = match self {
            Rules::Standard => &STANDARD_RANKS,
            Rules::Jokers => &JOKERS_RANKS,
        };
        ranks[label.index()]
    }

    /// Classifies the cards, the wildcard label if any takes whichever label
    /// gives the strongest category.
    pub fn classify(self, cards: &Cards) -> HandRank {
        match self.wildcard() {
            None => HandRank::of(cards),
            Some(wildcard) => HandRank::with_wildcard(cards, wildcard),
        }
    }

    /// Compares two hands, [Ordering::Greater] if `a` is stronger than `b`.
    ///
    /// The hands category comes first, then labels are compared position by
    /// position using the rank table.
    pub fn compare(self, a: &Hand, b: &Hand) -> Ordering {
        a.rank()
            .cmp(&b.rank())
            .then_with(|| self.compare_labels(a.cards(), b.cards()))
    }

    /// Compares two cards classifying them with these rules.
    pub fn compare_cards(self, a: &Cards, b: &Cards) -> Ordering {
        self.classify(a)
            .cmp(&self.classify(b))
            .then_with(|| self.compare_labels(a, b))
    }

    fn compare_labels(self, a: &Cards, b: &Cards) -> Ordering {
        a.labels()
            .iter()
            .zip(b.labels())
            .find(|(la, lb)| la != lb)
            .map_or(Ordering::Equal, |(&la, &lb)| {
                self.label_rank(lb).cmp(&self.label_rank(la))
            })
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rules::Standard => write!(f, "standard"),
            Rules::Jokers => write!(f, "jokers"),
        }
    }
}
