/*
pattern.rs

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

//! Pattern puzzle: find the missing number in an arithmetic sequence.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::difficulty::Tier;

/// Number of options offered to the player.
pub const CHOICE_COUNT: usize = 5;

/// Decoys are `start + offset`, with the offset in this range.
const DECOY_OFFSETS: std::ops::RangeInclusive<i64> = -3..=10;

/// Pattern puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatternPuzzle {
    /// Full sequence, including the hidden value.
    pub sequence: Vec<i64>,

    /// Position of the hidden value in the sequence.
    pub missing_index: usize,

    /// Options, in display order. The hidden value is in the list exactly once.
    pub choices: Vec<i64>,
}

/// Generate a pattern puzzle.
pub fn generate<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> PatternPuzzle {
    let length: usize = rng.random_range(3..=tier.scale(3, 7));
    let start: i64 = rng.random_range(1..=10 * tier.get() as i64);
    let step: i64 = rng.random_range(1..=2 + tier.get() as i64);

    let sequence: Vec<i64> = (0..length as i64).map(|i| start + i * step).collect();
    let missing_index: usize = rng.random_range(0..length);
    let answer: i64 = sequence[missing_index];

    // Draw the decoys without replacement, so that the answer cannot show up twice
    let mut decoys: Vec<i64> = DECOY_OFFSETS
        .map(|offset| start + offset)
        .filter(|v| *v != answer)
        .collect();
    decoys.shuffle(rng);

    let mut choices: Vec<i64> = decoys.into_iter().take(CHOICE_COUNT - 1).collect();
    let position: usize = rng.random_range(0..=choices.len());
    choices.insert(position, answer);

    PatternPuzzle {
        sequence,
        missing_index,
        choices,
    }
}

impl PatternPuzzle {
    /// Return the hidden value, or None if the hidden position is outside the sequence.
    pub fn answer(&self) -> Option<i64> {
        self.sequence.get(self.missing_index).copied()
    }

    /// Return the sequence as displayed to the player, with None for the hidden value.
    pub fn shown(&self) -> Vec<Option<i64>> {
        self.sequence
            .iter()
            .enumerate()
            .map(|(i, v)| if i == self.missing_index { None } else { Some(*v) })
            .collect()
    }

    /// Whether the given option is the hidden value.
    pub fn accepts(&self, choice: i64) -> bool {
        self.answer() == Some(choice)
    }
}
