/*
riddle.rs

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

//! Riddle puzzle.

use serde::{Deserialize, Serialize};

use crate::difficulty::LevelIndex;

/// Riddles and their answers.
const RIDDLES: [(&str, &str); 10] = [
    ("What has keys but can't open locks?", "piano"),
    ("What gets wetter the more it dries?", "towel"),
    ("What has a neck but no head?", "bottle"),
    ("What can you catch but not throw?", "cold"),
    ("What has hands but cannot clap?", "clock"),
    ("What goes up but never comes down?", "age"),
    ("What has one eye but cannot see?", "needle"),
    ("What runs but never walks?", "water"),
    ("What has many teeth but cannot bite?", "comb"),
    ("What belongs to you but others use it more?", "name"),
];

/// Riddle puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RiddlePuzzle {
    pub question: String,
    pub answer: String,
}

/// Return the riddle for the level. Riddles are picked in turn, there is no randomness.
pub fn generate(index: LevelIndex) -> RiddlePuzzle {
    let (question, answer) = RIDDLES[index as usize % RIDDLES.len()];
    RiddlePuzzle {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

impl RiddlePuzzle {
    /// Whether the text is the answer, ignoring case and surrounding spaces.
    pub fn accepts(&self, text: &str) -> bool {
        text.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn riddles_cycle_with_the_level() {
        assert_eq!(generate(0), generate(RIDDLES.len() as LevelIndex));
        assert_ne!(generate(0), generate(1));
    }

    #[test]
    fn answers_ignore_case_and_spaces() {
        let r: RiddlePuzzle = generate(0);
        assert!(r.accepts("  PiAnO\n"));
        assert!(!r.accepts("pianos"));
        assert!(!r.accepts(""));
    }
}
