/*
generator.rs

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

//! Generate random puzzles.
//!
//! There is one module per puzzle kind. Each module provides a `generate` function that builds a
//! puzzle for a difficulty [`Tier`], and the `accepts` methods that check an answer.
//!
//! * [`grid_code`]: a code word hidden along a [`random_walk`] in a grid of letters.
//! * [`pattern`]: an arithmetic sequence with a missing value and five options.
//! * [`slider`]: a phrase with shuffled word tiles.
//! * [`sequence`]: the next term of a geometric sequence.
//! * [`riddle`]: a riddle from a fixed list.
//! * [`arrow_maze`]: a board of arrows to clear by tracing paths (arrow-maze content pack).
//!
//! The generators never pick their own random source. The caller provides it, usually from
//! [`level_rng`], so that a level can be built again identically.

pub mod arrow_maze;
pub mod grid_code;
pub mod path;
pub mod pattern;
pub mod random_walk;
pub mod riddle;
pub mod sequence;
pub mod slider;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::difficulty::{LevelIndex, Tier};
use crate::puzzle::{PuzzleDescriptor, PuzzleKind};
use crate::settings::SeedMode;

/// Build a puzzle of the given kind.
pub fn generate<R: Rng + ?Sized>(
    kind: PuzzleKind,
    index: LevelIndex,
    tier: Tier,
    rng: &mut R,
) -> PuzzleDescriptor {
    debug!("Generating level {index}: {kind} puzzle, tier {tier}");
    match kind {
        PuzzleKind::GridCode => PuzzleDescriptor::GridCode(grid_code::generate(tier, rng)),
        PuzzleKind::Pattern => PuzzleDescriptor::Pattern(pattern::generate(tier, rng)),
        PuzzleKind::Slider => PuzzleDescriptor::Slider(slider::generate(tier, rng)),
        PuzzleKind::Sequence => PuzzleDescriptor::Sequence(sequence::generate(tier, rng)),
        PuzzleKind::Riddle => PuzzleDescriptor::Riddle(riddle::generate(index)),
        PuzzleKind::ArrowMaze => PuzzleDescriptor::ArrowMaze(arrow_maze::generate(tier, rng)),
    }
}

/// Return the seed of a level.
///
/// `generation` is incremented each time the player asks for a new version of the level.
pub fn level_seed(base_seed: u64, index: LevelIndex, generation: u64) -> u64 {
    // SplitMix64 finalizer, so that neighbour levels get unrelated seeds
    let mut z: u64 = base_seed
        ^ (index as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ generation.rotate_left(32);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Return the random source for a level.
pub fn level_rng(mode: SeedMode, base_seed: u64, index: LevelIndex, generation: u64) -> StdRng {
    match mode {
        SeedMode::Seeded => StdRng::seed_from_u64(level_seed(base_seed, index, generation)),
        SeedMode::Ambient => StdRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_levels_repeat() {
        let a: PuzzleDescriptor = generate(
            PuzzleKind::GridCode,
            3,
            Tier::MIN,
            &mut level_rng(SeedMode::Seeded, 0, 3, 0),
        );
        let b: PuzzleDescriptor = generate(
            PuzzleKind::GridCode,
            3,
            Tier::MIN,
            &mut level_rng(SeedMode::Seeded, 0, 3, 0),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn seeds_differ() {
        assert_ne!(level_seed(0, 1, 0), level_seed(0, 2, 0));
        assert_ne!(level_seed(0, 1, 0), level_seed(0, 1, 1));
        assert_ne!(level_seed(0, 1, 0), level_seed(7, 1, 0));
    }

    #[test]
    fn generated_kind_matches_request() {
        let mut rng: StdRng = level_rng(SeedMode::Ambient, 0, 0, 0);
        for kind in (0..=5).filter_map(PuzzleKind::from_repr) {
            assert_eq!(generate(kind, 42, Tier::new(3), &mut rng).kind(), kind);
        }
    }
}
