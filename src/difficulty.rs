/*
difficulty.rs

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

//! Difficulty curve.
//!
//! The difficulty tier only depends on the level index: it starts at 1 and increases by one
//! every [`LEVELS_PER_TIER`] levels, up to [`Tier::MAX`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based level identifier.
pub type LevelIndex = u32;

/// Number of consecutive levels that share the same tier.
pub const LEVELS_PER_TIER: LevelIndex = 50;

/// Difficulty tier, between 1 and 10.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    /// Easiest tier.
    pub const MIN: Tier = Tier(1);

    /// Hardest tier.
    pub const MAX: Tier = Tier(10);

    /// Create a [`Tier`] object, clamping the value to the `[1, 10]` range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Return the tier as an integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Return the tier as a `usize`, for sizing grids and sequences.
    pub fn level(self) -> usize {
        self.0 as usize
    }

    /// Scale the tier to the `[low, high]` range: tier 1 maps to `low` and tier 10 to `high`.
    pub fn scale(self, low: usize, high: usize) -> usize {
        let span: usize = Self::MAX.level() - Self::MIN.level();
        low + (self.level() - Self::MIN.level()) * (high - low) / span
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Return the difficulty tier of the given level.
///
/// The function is total: indexes past the last level stay at [`Tier::MAX`]. Range checks are the
/// job of [`crate::catalog::LevelCatalog::tier`].
pub fn tier_for(index: LevelIndex) -> Tier {
    let step: LevelIndex = index / LEVELS_PER_TIER;
    if step >= (Tier::MAX.0 - 1) as LevelIndex {
        Tier::MAX
    } else {
        Tier(1 + step as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_level_is_tier_one() {
        assert_eq!(tier_for(0), Tier::MIN);
    }

    #[test]
    fn tier_changes_at_fifty() {
        assert_eq!(tier_for(49).get(), 1);
        assert_eq!(tier_for(50).get(), 2);
        assert_eq!(tier_for(449).get(), 9);
        assert_eq!(tier_for(450).get(), 10);
        assert_eq!(tier_for(499).get(), 10);
        assert_eq!(tier_for(LevelIndex::MAX), Tier::MAX);
    }

    #[test]
    fn scale_covers_the_range() {
        assert_eq!(Tier::MIN.scale(3, 6), 3);
        assert_eq!(Tier::MAX.scale(3, 6), 6);
        assert_eq!(Tier::new(4).scale(3, 6), 4);
        assert_eq!(Tier::new(0), Tier::MIN);
        assert_eq!(Tier::new(42), Tier::MAX);
    }

    proptest! {
        #[test]
        fn tier_is_bounded_and_monotonic(index in 0..500_u32) {
            let tier = tier_for(index);
            prop_assert!((1..=10).contains(&tier.get()));
            if index > 0 {
                prop_assert!(tier_for(index - 1) <= tier);
            }
        }
    }
}
