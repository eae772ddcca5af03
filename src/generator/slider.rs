/*
slider.rs

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

//! Slider puzzle: put the word tiles back in the right order.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::difficulty::Tier;

/// Words used to build the phrases.
const WORDS: [&str; 16] = [
    "escape", "the", "maze", "find", "your", "way", "out", "before", "dark", "door", "key",
    "light", "path", "hidden", "north", "gate",
];

/// Slider puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SliderPuzzle {
    /// Tiles in their initial order.
    pub tiles: Vec<String>,

    /// Tiles in the expected order.
    pub solution: Vec<String>,
}

/// Generate a slider puzzle.
///
/// The phrase has three words or more. The longest phrase goes from three words at tier 1 to six
/// words at tier 10.
pub fn generate<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> SliderPuzzle {
    let length: usize = rng.random_range(3..=tier.scale(3, 6));

    let mut solution: Vec<String> = WORDS
        .choose_multiple(rng, length)
        .map(|w| w.to_string())
        .collect();
    solution.shuffle(rng);

    let mut tiles: Vec<String> = solution.clone();
    tiles.shuffle(rng);
    // Never start with a solved puzzle. The words are distinct, so a rotation always moves them.
    if tiles == solution {
        tiles.rotate_left(1);
    }

    SliderPuzzle { tiles, solution }
}

impl SliderPuzzle {
    /// Whether the tiles are in the expected order.
    pub fn accepts(&self, tiles: &[String]) -> bool {
        tiles == self.solution.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn tiles_are_a_permutation_of_the_solution() {
        for t in 1..=10 {
            let mut rng: StdRng = StdRng::seed_from_u64(t as u64);
            let p: SliderPuzzle = generate(Tier::new(t), &mut rng);
            let mut a: Vec<String> = p.tiles.clone();
            let mut b: Vec<String> = p.solution.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b);
            assert_ne!(p.tiles, p.solution);
            assert!(p.accepts(&p.solution));
        }
    }

    #[test]
    fn phrase_length_varies_within_a_tier() {
        let lengths: HashSet<usize> = (0..50)
            .map(|seed| generate(Tier::MAX, &mut StdRng::seed_from_u64(seed)).solution.len())
            .collect();
        assert!(lengths.len() > 1);
        assert!(lengths.iter().all(|l| (3..=6).contains(l)));
        let shortest: SliderPuzzle = generate(Tier::MIN, &mut StdRng::seed_from_u64(0));
        assert_eq!(shortest.solution.len(), 3);
    }

    #[test]
    fn order_matters() {
        let p: SliderPuzzle = SliderPuzzle {
            tiles: vec!["maze".into(), "the".into(), "escape".into()],
            solution: vec!["escape".into(), "the".into(), "maze".into()],
        };
        assert!(!p.accepts(&p.tiles));
        assert!(!p.accepts(&p.solution[..2]));
    }
}
