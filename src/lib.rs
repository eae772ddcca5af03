/*
lib.rs

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

//! Level generation and answer checking for Escape Maze.
//!
//! The game UI talks to a [`catalog::LevelCatalog`]:
//!
//! ```
//! use escapemaze::catalog::LevelCatalog;
//! use escapemaze::settings::Settings;
//! use escapemaze::validator::{self, Candidate};
//!
//! let catalog = LevelCatalog::new(Settings::default()).unwrap();
//! let puzzle = catalog.level_at(4).unwrap();
//! let verdict = catalog.validate(4, &validator::solution(&puzzle)).unwrap();
//! assert!(verdict.accepted);
//! assert!(!catalog.validate(4, &Candidate::Text("no idea".into())).unwrap().accepted);
//! ```
//!
//! The player's progress lives in a [`progress::ProgressState`] object, which the UI updates
//! from the verdicts and saves through a [`progress::ProgressStore`], such as
//! [`saver::progress::JsonProgressStore`].

pub mod catalog;
pub mod difficulty;
pub mod error;
pub mod generator;
pub mod progress;
pub mod puzzle;
pub mod saver;
pub mod selector;
pub mod settings;
pub mod validator;
