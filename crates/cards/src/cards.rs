// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Camel Cards labels and hands definitions.
use rand::prelude::*;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when parsing labels and cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardsError {
    /// A hand must have exactly [Cards::SIZE] labels.
    #[error("a hand must have {size} cards, got {0}", size = Cards::SIZE)]
    InvalidLength(usize),
    /// The character is not a card label.
    #[error("invalid card label '{0}'")]
    InvalidLabel(char),
}

/// Card label.
///
/// Labels are in their natural order, from the lowest [Label::Deuce] to the
/// highest [Label::Ace].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Label {
    /// The number of labels.
    pub const COUNT: usize = 13;

    /// All labels in their natural order.
    pub const ALL: [Label; Label::COUNT] = {
        use Label::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all labels.
    pub fn labels() -> impl DoubleEndedIterator<Item = Label> {
        Self::ALL.into_iter()
    }

    /// This label position in the natural order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for Label {
    type Error = CardsError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let label = match c {
            '2' => Label::Deuce,
            '3' => Label::Trey,
            '4' => Label::Four,
            '5' => Label::Five,
            '6' => Label::Six,
            '7' => Label::Seven,
            '8' => Label::Eight,
            '9' => Label::Nine,
            'T' => Label::Ten,
            'J' => Label::Jack,
            'Q' => Label::Queen,
            'K' => Label::King,
            'A' => Label::Ace,
            _ => return Err(CardsError::InvalidLabel(c)),
        };

        Ok(label)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Label::Deuce => '2',
            Label::Trey => '3',
            Label::Four => '4',
            Label::Five => '5',
            Label::Six => '6',
            Label::Seven => '7',
            Label::Eight => '8',
            Label::Nine => '9',
            Label::Ten => 'T',
            Label::Jack => 'J',
            Label::Queen => 'Q',
            Label::King => 'K',
            Label::Ace => 'A',
        };

        write!(f, "{label}")
    }
}

/// The five cards of a Camel Cards hand.
///
/// The cards order is significant, two hands with the same labels in a
/// different order are different hands.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cards([Label; Cards::SIZE]);

impl Cards {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from its labels.
    pub fn new(labels: [Label; Cards::SIZE]) -> Self {
        Self(labels)
    }

    /// The hand labels in order.
    pub fn labels(&self) -> &[Label; Cards::SIZE] {
        &self.0
    }

    /// Counts the occurrences of each label, indexed by [Label::index].
    pub fn counts(&self) -> [u8; Label::COUNT] {
        let mut counts = [0; Label::COUNT];
        for label in self.0 {
            counts[label.index()] += 1;
        }
        counts
    }

    /// Creates a hand with random labels.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| {
            Label::ALL[rng.random_range(0..Label::COUNT)]
        }))
    }

    /// Calls the `f` closure for each possible hand.
    pub fn for_each<F>(mut f: F)
    where
        F: FnMut(Cards),
    {
        let mut h = [Label::Deuce; Cards::SIZE];

        for l1 in Label::ALL {
            h[0] = l1;

            for l2 in Label::ALL {
                h[1] = l2;

                for l3 in Label::ALL {
                    h[2] = l3;

                    for l4 in Label::ALL {
                        h[3] = l4;

                        for l5 in Label::ALL {
                            h[4] = l5;
                            f(Cards(h));
                        }
                    }
                }
            }
        }
    }
}

impl FromStr for Cards {
    type Err = CardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Cards::SIZE {
            return Err(CardsError::InvalidLength(len));
        }

        let mut labels = [Label::Deuce; Cards::SIZE];
        for (label, c) in labels.iter_mut().zip(s.chars()) {
            *label = Label::try_from(c)?;
        }

        Ok(Self(labels))
    }
}

impl fmt::Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in self.0 {
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cards({self})")
    }
}
