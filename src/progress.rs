/*
progress.rs

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

//! Manage the player's progress.
//!
//! The main object, [`ProgressState`], records the current level, the highest unlocked level,
//! the remaining lives, hints and skips, and the stars earned per level.
//! It only holds small integers, never puzzle data, so changing the generators does not break
//! saved progress.
//!
//! The UI updates the object from the [`Verdict`] of each answer and saves it through a
//! [`ProgressStore`]. See the [`crate::saver::progress`] module for the JSON file store.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::difficulty::LevelIndex;
use crate::error::ProgressError;
use crate::validator::Verdict;

/// Number of lives at the start of the game, and after a level reset.
pub const STARTING_LIVES: u8 = 3;

/// Number of hints at the start of the game.
pub const STARTING_HINTS: u8 = 3;

/// Number of skips at the start of the game.
pub const STARTING_SKIPS: u8 = 3;

/// Stars for a level solved without mistakes.
pub const MAX_STARS: u8 = 3;

/// Saved state of the player's progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProgressState {
    /// Level being played.
    pub level: LevelIndex,

    /// Highest level the player can open.
    pub unlocked: LevelIndex,

    pub lives: u8,
    pub hints: u8,
    pub skips: u8,

    /// Best number of stars per completed level. Levels not completed are not in the map.
    stars: BTreeMap<LevelIndex, u8>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressState {
    /// Create a [`ProgressState`] object for a new player.
    pub fn new() -> Self {
        Self {
            level: 0,
            unlocked: 0,
            lives: STARTING_LIVES,
            hints: STARTING_HINTS,
            skips: STARTING_SKIPS,
            stars: BTreeMap::new(),
        }
    }

    /// Return the stars earned for a level solved with the given number of mistakes.
    pub fn stars_for(mistakes: usize) -> u8 {
        MAX_STARS - mistakes.min(MAX_STARS as usize - 1) as u8
    }

    /// Update the state from the verdict of an answer to the current level.
    ///
    /// `mistakes` is the number of rejected answers before this one, and `level_count` the
    /// number of levels in the game.
    pub fn apply_verdict(&mut self, verdict: &Verdict, mistakes: usize, level_count: u32) {
        if verdict.accepted {
            self.complete(self.level, mistakes, level_count);
        } else {
            self.lose_life();
        }
    }

    /// Record a completed level, unlock the next one and move to it.
    ///
    /// Return the number of stars earned. The map keeps the best result for the level.
    pub fn complete(&mut self, level: LevelIndex, mistakes: usize, level_count: u32) -> u8 {
        let stars: u8 = Self::stars_for(mistakes);
        let best: &mut u8 = self.stars.entry(level).or_insert(0);
        *best = (*best).max(stars);

        let last: LevelIndex = level_count.saturating_sub(1);
        self.unlocked = self.unlocked.max(level.saturating_add(1).min(last));
        if self.level == level {
            self.level = level.saturating_add(1).min(last);
        }
        debug!(
            "Level {level} completed with {stars} stars, unlocked up to {}",
            self.unlocked
        );
        stars
    }

    /// Remove one life and return the number of lives left.
    pub fn lose_life(&mut self) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Give back all the lives, when the player restarts a level.
    pub fn reset_lives(&mut self) {
        self.lives = STARTING_LIVES;
    }

    /// Use a hint. Return false if there are no hints left.
    pub fn use_hint(&mut self) -> bool {
        if self.hints == 0 {
            return false;
        }
        self.hints -= 1;
        true
    }

    /// Skip the current level: the next level is unlocked without earning stars.
    ///
    /// Return false if there are no skips left, or if this is the last level.
    pub fn use_skip(&mut self, level_count: u32) -> bool {
        let next: LevelIndex = self.level.saturating_add(1);
        if self.skips == 0 || next >= level_count {
            return false;
        }
        self.skips -= 1;
        self.unlocked = self.unlocked.max(next);
        self.level = next;
        true
    }

    /// Move to another level. Return false if the level is still locked.
    pub fn go_to(&mut self, level: LevelIndex) -> bool {
        if level > self.unlocked {
            return false;
        }
        self.level = level;
        true
    }

    /// Return the stars earned for the level (0 if not completed).
    pub fn stars(&self, level: LevelIndex) -> u8 {
        self.stars.get(&level).copied().unwrap_or(0)
    }

    /// Return the total number of stars.
    pub fn total_stars(&self) -> u32 {
        self.stars.values().map(|s| *s as u32).sum()
    }

    /// Whether the level has been completed.
    pub fn is_completed(&self, level: LevelIndex) -> bool {
        self.stars.contains_key(&level)
    }
}

/// Load and save the player's progress.
pub trait ProgressStore {
    /// Return the saved progress, or None if nothing was saved yet.
    fn load(&self) -> Result<Option<ProgressState>, ProgressError>;

    /// Save the progress.
    fn save(&mut self, state: &ProgressState) -> Result<(), ProgressError>;

    /// Forget the saved progress.
    fn clear(&mut self) -> Result<(), ProgressError>;
}

/// Store that keeps the progress in memory, as JSON.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    saved: Option<String>,
}

impl MemoryProgressStore {
    /// Create an empty [`MemoryProgressStore`] object.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self) -> Result<Option<ProgressState>, ProgressError> {
        match &self.saved {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, state: &ProgressState) -> Result<(), ProgressError> {
        self.saved = Some(serde_json::to_string(state)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ProgressError> {
        self.saved = None;
        Ok(())
    }
}
