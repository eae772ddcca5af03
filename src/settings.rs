/*
settings.rs

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

//! Engine settings.
//!
//! The settings can be read from a JSON file. Missing keys take their default value:
//!
//! ```json
//! {"level_count": 500, "pack": "classic", "seed_mode": "seeded", "base_seed": 0,
//!  "grid_code_rule": "any_cells"}
//! ```

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::SettingsError;

/// Default number of levels.
pub const LEVEL_COUNT: u32 = 500;

/// Family of generators used to build the levels.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ContentPack {
    /// Grid codes, patterns, sliders, sequences, and riddles.
    #[default]
    Classic,

    /// Arrow mazes only.
    ArrowMaze,
}

/// Source of randomness for the generators.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// The random source is seeded from the level index, so a level is always the same until it
    /// is explicitly regenerated.
    #[default]
    Seeded,

    /// The random source is seeded from the system, so a level changes on every run.
    Ambient,
}

/// How a grid-code selection is checked.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GridCodeRule {
    /// Any selection of at least three distinct cells is accepted.
    #[default]
    AnyCells,

    /// The selected cells must touch one another and spell the hidden code.
    PlantedCode,
}

/// Engine settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Number of levels in the game.
    pub level_count: u32,

    /// Generators used to build the levels.
    pub pack: ContentPack,

    /// Source of randomness.
    pub seed_mode: SeedMode,

    /// Mixed into the per-level seeds in [`SeedMode::Seeded`] mode.
    pub base_seed: u64,

    /// How grid-code answers are checked.
    pub grid_code_rule: GridCodeRule,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_count: LEVEL_COUNT,
            pack: ContentPack::default(),
            seed_mode: SeedMode::default(),
            base_seed: 0,
            grid_code_rule: GridCodeRule::default(),
        }
    }
}

impl Settings {
    /// Read the settings from a JSON file.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be read or parsed, or if the settings are
    /// not valid.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        debug!("Settings file: {path:?}");
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let settings: Settings = serde_json::from_reader(reader)?;
        settings.check()?;
        Ok(settings)
    }

    /// Verify that the settings can be used.
    pub fn check(&self) -> Result<(), SettingsError> {
        if self.level_count == 0 {
            return Err(SettingsError::NoLevels);
        }
        Ok(())
    }
}
