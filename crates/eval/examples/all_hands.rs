// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example all_hands
// ...
// Rules:           standard
// Total hands      371293
//
// Five of a kind:  13
// Four of a kind:  780
// Full house:      1560
// ...
// ```

use std::time::Instant;

use camelcards_eval::*;

fn main() {
    for rules in [Rules::Standard, Rules::Jokers] {
        // Classify all 371293 hands.
        let now = Instant::now();
        let mut counts = [0usize; 8];

        Cards::for_each(|cards| {
            let rank = rules.classify(&cards);
            counts[rank.strength() as usize] += 1;
        });

        let elapsed = now.elapsed().as_secs_f64();
        let total = counts.iter().sum::<usize>();
        println!("Rules:           {rules}");
        println!("Total hands      {total}");
        println!("Elapsed:         {:.3}s", elapsed);
        println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

        for rank in HandRank::ranks() {
            let name = format!("{rank}:");
            println!("{name:<17}{}", counts[rank.strength() as usize]);
        }
        println!();
    }
}
