/*
catalog.rs

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

//! Level catalog.
//!
//! The [`LevelCatalog`] object is the entry point for the UI: it returns the puzzle of a level
//! and checks the answers for that level.
//!
//! Puzzles are generated the first time they are requested and then kept, so that a level does
//! not change while the player is on it. Each level has its own [`OnceLock`] cell: when the
//! catalog is shared between threads, a level is still generated only once.
//! [`LevelCatalog::regenerate`] replaces the puzzle of a level with a new one.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use std::sync::{Arc, OnceLock};

use crate::difficulty::{self, LevelIndex, Tier};
use crate::error::{EngineError, SettingsError};
use crate::generator;
use crate::puzzle::{PuzzleDescriptor, PuzzleKind};
use crate::selector;
use crate::settings::Settings;
use crate::validator::{self, Candidate, Verdict};

/// Ordered list of the game levels.
#[derive(Debug)]
pub struct LevelCatalog {
    settings: Settings,

    /// Generated puzzles, indexed by level.
    levels: Vec<OnceLock<Arc<PuzzleDescriptor>>>,

    /// Number of times each level has been regenerated. Part of the level seed.
    generations: Vec<u64>,
}

impl LevelCatalog {
    /// Create a [`LevelCatalog`] object. No puzzle is generated yet.
    ///
    /// # Errors
    ///
    /// The method returns an error if the settings are not valid.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.check()?;
        let count: usize = settings.level_count as usize;
        info!(
            "Level catalog: {count} levels, {:?} pack, {:?} seeds",
            settings.pack, settings.seed_mode
        );
        Ok(Self {
            settings,
            levels: (0..count).map(|_| OnceLock::new()).collect(),
            generations: vec![0; count],
        })
    }

    /// Return the settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Return the number of levels.
    pub fn count(&self) -> u32 {
        self.settings.level_count
    }

    /// Verify that the level exists and return its position in the internal lists.
    fn slot(&self, index: LevelIndex) -> Result<usize, EngineError> {
        if index < self.count() {
            Ok(index as usize)
        } else {
            Err(EngineError::InvalidLevelIndex {
                index,
                count: self.count(),
            })
        }
    }

    /// Return the difficulty tier of the level.
    pub fn tier(&self, index: LevelIndex) -> Result<Tier, EngineError> {
        self.slot(index)?;
        Ok(difficulty::tier_for(index))
    }

    /// Return the puzzle kind of the level.
    pub fn kind_at(&self, index: LevelIndex) -> Result<PuzzleKind, EngineError> {
        self.slot(index)?;
        Ok(selector::select_kind(self.settings.pack, index))
    }

    /// Return the puzzle of the level, generating it on first use.
    pub fn level_at(&self, index: LevelIndex) -> Result<Arc<PuzzleDescriptor>, EngineError> {
        let slot: usize = self.slot(index)?;
        let descriptor: &Arc<PuzzleDescriptor> =
            self.levels[slot].get_or_init(|| Arc::new(self.build(index, self.generations[slot])));
        Ok(Arc::clone(descriptor))
    }

    /// Generate all the levels now instead of on first use.
    pub fn preload(&self) {
        for index in 0..self.count() {
            // Indexes below count() are always valid
            if let Err(e) = self.level_at(index) {
                warn!("Cannot preload level {index}: {e}");
            }
        }
        debug!("{} levels preloaded", self.count());
    }

    /// Drop the puzzle of the level and generate a new one.
    ///
    /// In [`crate::settings::SeedMode::Seeded`] mode the new puzzle is as reproducible as the
    /// first one: it depends on the number of times the level was regenerated.
    pub fn regenerate(&mut self, index: LevelIndex) -> Result<Arc<PuzzleDescriptor>, EngineError> {
        let slot: usize = self.slot(index)?;
        self.generations[slot] += 1;
        self.levels[slot] = OnceLock::new();
        debug!(
            "Level {index} regenerated (generation {})",
            self.generations[slot]
        );
        self.level_at(index)
    }

    /// Check an answer for the level.
    pub fn validate(
        &self,
        index: LevelIndex,
        candidate: &Candidate,
    ) -> Result<Verdict, EngineError> {
        let descriptor: Arc<PuzzleDescriptor> = self.level_at(index)?;
        validator::validate(&descriptor, candidate, self.settings.grid_code_rule)
    }

    /// Build the puzzle of a level.
    fn build(&self, index: LevelIndex, generation: u64) -> PuzzleDescriptor {
        let tier: Tier = difficulty::tier_for(index);
        let kind: PuzzleKind = selector::select_kind(self.settings.pack, index);
        let mut rng: StdRng = generator::level_rng(
            self.settings.seed_mode,
            self.settings.base_seed,
            index,
            generation,
        );
        generator::generate(kind, index, tier, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ContentPack, SeedMode};

    fn small_catalog() -> LevelCatalog {
        LevelCatalog::new(Settings {
            level_count: 60,
            ..Settings::default()
        })
        .unwrap()
    }

    #[test]
    fn out_of_range_levels() {
        let c: LevelCatalog = small_catalog();
        let err = EngineError::InvalidLevelIndex {
            index: 60,
            count: 60,
        };
        assert_eq!(c.tier(60), Err(err.clone()));
        assert_eq!(c.level_at(60).err(), Some(err.clone()));
        assert_eq!(c.kind_at(60), Err(err));
        assert!(c.tier(59).is_ok());
    }

    #[test]
    fn preload_fills_every_level() {
        let c: LevelCatalog = small_catalog();
        c.preload();
        assert!(c.levels.iter().all(|cell| cell.get().is_some()));
    }

    #[test]
    fn levels_are_memoized() {
        let c: LevelCatalog = small_catalog();
        let a: Arc<PuzzleDescriptor> = c.level_at(5).unwrap();
        let b: Arc<PuzzleDescriptor> = c.level_at(5).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn seeded_catalogs_agree() {
        let a: LevelCatalog = small_catalog();
        let b: LevelCatalog = small_catalog();
        for i in 0..60 {
            assert_eq!(a.level_at(i).unwrap(), b.level_at(i).unwrap());
        }
    }

    #[test]
    fn regenerate_only_touches_one_level() {
        let mut c: LevelCatalog = small_catalog();
        let fresh: LevelCatalog = small_catalog();
        let before: Arc<PuzzleDescriptor> = c.level_at(0).unwrap();
        let other: Arc<PuzzleDescriptor> = c.level_at(1).unwrap();
        let after: Arc<PuzzleDescriptor> = c.regenerate(0).unwrap();
        assert_ne!(before, after);
        assert_eq!(after.kind(), before.kind());
        assert!(Arc::ptr_eq(&other, &c.level_at(1).unwrap()));
        assert_eq!(fresh.level_at(0).unwrap(), before);
        assert!(c.regenerate(60).is_err());
    }

    #[test]
    fn arrow_pack_levels() {
        let c: LevelCatalog = LevelCatalog::new(Settings {
            level_count: 3,
            pack: ContentPack::ArrowMaze,
            seed_mode: SeedMode::Ambient,
            ..Settings::default()
        })
        .unwrap();
        c.preload();
        assert_eq!(c.level_at(2).unwrap().kind(), PuzzleKind::ArrowMaze);
    }

    #[test]
    fn no_levels() {
        assert!(
            LevelCatalog::new(Settings {
                level_count: 0,
                ..Settings::default()
            })
            .is_err()
        );
    }
}
