/*
sequence.rs

Copyright 2025 Hervé Quatremain

This file is part of Escape Maze.

Escape Maze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Escape Maze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Escape Maze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Sequence puzzle: give the next term of a geometric sequence.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::difficulty::Tier;

/// Sequence puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SequencePuzzle {
    /// Terms displayed to the player.
    pub shown: Vec<i64>,

    /// First term.
    pub first: i64,

    /// Common ratio.
    pub ratio: i64,

    /// Next term, which the player must find.
    pub answer: i64,
}

/// Generate a sequence puzzle.
///
/// The sequence has four terms at tier 1 and up to six at tier 10 (the last one is hidden).
pub fn generate<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> SequencePuzzle {
    let length: usize = tier.scale(4, 6);
    let first: i64 = rng.random_range(1..=5);
    let ratio: i64 = rng.random_range(2..=if tier.get() > 5 { 4 } else { 3 });
    SequencePuzzle::from_parts(first, ratio, length)
}

impl SequencePuzzle {
    /// Build the puzzle for the sequence `first * ratio^k`, `k` in `0..length`.
    pub fn from_parts(first: i64, ratio: i64, length: usize) -> Self {
        let mut terms: Vec<i64> = Vec::with_capacity(length);
        let mut term: i64 = first;
        for _ in 0..length {
            terms.push(term);
            term = term.saturating_mul(ratio);
        }
        let answer: i64 = terms.pop().unwrap_or(first);
        Self {
            shown: terms,
            first,
            ratio,
            answer,
        }
    }

    /// Whether the given number is the next term.
    pub fn accepts(&self, value: i64) -> bool {
        value == self.answer
    }

    /// Whether the given text, once trimmed, is the next term.
    pub fn accepts_text(&self, text: &str) -> bool {
        text.trim()
            .parse::<i64>()
            .is_ok_and(|value| self.accepts(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn two_times_three() {
        let p: SequencePuzzle = SequencePuzzle::from_parts(2, 3, 4);
        assert_eq!(p.shown, vec![2, 6, 18]);
        assert_eq!(p.answer, 54);
        assert!(p.accepts_text(" 54 "));
        assert!(!p.accepts_text("fifty-four"));
        assert!(!p.accepts(18));
    }

    #[test]
    fn answer_is_recomputed_from_the_terms() {
        for t in 1..=10 {
            let mut rng: StdRng = StdRng::seed_from_u64(100 + t as u64);
            let p: SequencePuzzle = generate(Tier::new(t), &mut rng);
            assert!((3..=5).contains(&p.shown.len()));
            assert!(p.first >= 1 && p.ratio >= 2);
            let k: u32 = p.shown.len() as u32;
            assert_eq!(p.first * p.ratio.pow(k), p.answer);
            for (i, term) in p.shown.iter().enumerate() {
                assert_eq!(p.first * p.ratio.pow(i as u32), *term);
            }
        }
    }
}
