// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Puzzle input parsing.
//!
//! The input has one hand per line with the cards and the bid separated by
//! whitespace:
//!
//! ```text
//! 32T3K 765
//! T55J5 684
//! ```
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseIntError,
    path::Path,
};
use thiserror::Error;

use camelcards_eval::{Cards, CardsError};

/// Input errors, lines are numbered from 1.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input cannot be opened.
    #[error("{0}")]
    Io(#[from] io::Error),
    /// A line cannot be read.
    #[error("line {line}: {source}")]
    Read {
        /// The line number.
        line: usize,
        /// The read error.
        source: io::Error,
    },
    /// The line doesn't have exactly two fields.
    #[error("line {line}: expected `<cards> <bid>`")]
    MalformedLine {
        /// The line number.
        line: usize,
    },
    /// The bid is not a non negative integer.
    #[error("line {line}: invalid bid: {source}")]
    InvalidBid {
        /// The line number.
        line: usize,
        /// The integer parsing error.
        source: ParseIntError,
    },
    /// The cards are not five known labels.
    #[error("line {line}: invalid hand: {source}")]
    InvalidHand {
        /// The line number.
        line: usize,
        /// The cards parsing error.
        source: CardsError,
    },
}

/// Reads all the hands from a file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<(Cards, u64)>, InputError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

/// Parses all the hands from a reader, blank lines are skipped.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<(Cards, u64)>, InputError> {
    let mut entries = Vec::new();

    for (idx, text) in reader.lines().enumerate() {
        let line = idx + 1;
        let text = text.map_err(|source| InputError::Read { line, source })?;
        if let Some(entry) = parse_line(line, &text)? {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Parses one input line, returns `None` for a blank line.
pub fn parse_line(line: usize, text: &str) -> Result<Option<(Cards, u64)>, InputError> {
    let fields = text.split_whitespace().collect::<Vec<_>>();

    match fields[..] {
        [] => Ok(None),
        [cards, bid] => {
            let cards = cards
                .parse::<Cards>()
                .map_err(|source| InputError::InvalidHand { line, source })?;
            let bid = bid
                .parse::<u64>()
                .map_err(|source| InputError::InvalidBid { line, source })?;
            Ok(Some((cards, bid)))
        }
        _ => Err(InputError::MalformedLine { line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camelcards_eval::{Game, Rules};

    const SAMPLE: &str = "32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    #[test]
    fn parse_sample() {
        let entries = parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].0.to_string(), "32T3K");
        assert_eq!(entries[0].1, 765);
        assert_eq!(entries[4].0.to_string(), "QQQJA");
        assert_eq!(entries[4].1, 483);

        assert_eq!(
            Game::new(Rules::Standard, entries.clone()).unwrap().winnings(),
            6440
        );
        assert_eq!(Game::new(Rules::Jokers, entries).unwrap().winnings(), 5905);
    }

    #[test]
    fn max_bids_overflow() {
        let input = "23456 18446744073709551615\nAAAAA 18446744073709551615\n";
        let entries = parse(input.as_bytes()).unwrap();
        assert_eq!(entries[0].1, u64::MAX);
        assert!(Game::new(Rules::Standard, entries).is_err());
    }

    #[test]
    fn read_error_line() {
        let err = parse(&b"AAAAA 1\n23456 2\n\xff\xfe 3\n"[..]).unwrap_err();
        assert!(matches!(err, InputError::Read { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3: "));
    }

    #[test]
    fn skip_blank_lines() {
        let entries = parse("\n  AAAAA   1  \n\n\t\n23456\t2\n".as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].0.to_string(), "23456");
        assert_eq!(entries[1].1, 2);
    }

    #[test]
    fn malformed_line() {
        let err = parse("AAAAA 1\nAAAAA\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::MalformedLine { line: 2 }));
        assert_eq!(err.to_string(), "line 2: expected `<cards> <bid>`");

        let err = parse_line(7, "AAAAA 1 2").unwrap_err();
        assert!(matches!(err, InputError::MalformedLine { line: 7 }));
    }

    #[test]
    fn invalid_bid() {
        for bid in ["x", "-5", "1.5", "99999999999999999999"] {
            let err = parse_line(3, &format!("AAAAA {bid}")).unwrap_err();
            assert!(matches!(err, InputError::InvalidBid { line: 3, .. }), "{bid}");
        }
    }

    #[test]
    fn invalid_hand() {
        let err = parse_line(1, "AAAA 1").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidHand {
                line: 1,
                source: CardsError::InvalidLength(4)
            }
        ));

        let err = parse_line(2, "AAXAA 1").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidHand {
                line: 2,
                source: CardsError::InvalidLabel('X')
            }
        ));
        assert_eq!(err.to_string(), "line 2: invalid hand: invalid card label 'X'");
    }

    #[test]
    fn read_file() {
        let path = std::env::temp_dir().join(format!("camelcards-{}.txt", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();

        let entries = read(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(entries.unwrap().len(), 5);

        let err = read(&path).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
