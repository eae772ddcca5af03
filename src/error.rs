/*
error.rs

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

//! Error types.
//!
//! A wrong answer is not an error: it is a rejected [`crate::validator::Verdict`].
//! The errors below are programming errors made by the caller (a level index out of range, or a
//! candidate that does not have the shape expected by the puzzle), or I/O failures when loading
//! settings and saving the player's progress.

use thiserror::Error;

use crate::difficulty::LevelIndex;
use crate::puzzle::PuzzleKind;

/// Errors raised by the level catalog and the answer validators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The level index is outside `[0, count)`.
    #[error("level index {index} is out of range (the game has {count} levels)")]
    InvalidLevelIndex { index: LevelIndex, count: u32 },

    /// The candidate answer does not have the shape expected by the puzzle kind.
    #[error("a {found} answer cannot be checked against a {kind} puzzle")]
    InvalidCandidateShape { kind: PuzzleKind, found: &'static str },
}

/// Errors raised when loading the engine settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read the settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    /// The game must have at least one level.
    #[error("the level count must be at least 1")]
    NoLevels,
}

/// Errors raised by the progress stores.
#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("cannot access the progress file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot decode the progress file: {0}")]
    Json(#[from] serde_json::Error),
}
