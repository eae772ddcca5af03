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

//! Save and restore the player's progress.
//!
//! The saved object is a serialization of the [`ProgressState`] object in JSON format by
//! using [`serde`], in the `progress.json` file.

use log::debug;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::error::ProgressError;
use crate::progress::{ProgressState, ProgressStore};

/// Object to save and restore the progress in a JSON file.
pub struct JsonProgressStore {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl JsonProgressStore {
    /// Create a [`JsonProgressStore`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the progress must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("progress.json");
        debug!("Progress file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }
}

impl ProgressStore for JsonProgressStore {
    /// Retrieve the [`ProgressState`] object from the progress file.
    ///
    /// Return None if the progress file does not exist.
    fn load(&self) -> Result<Option<ProgressState>, ProgressError> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(error.into()),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let state: ProgressState = serde_json::from_reader(reader)?;
        Ok(Some(state))
    }

    /// Save the provided [`ProgressState`] object.
    fn save(&mut self, state: &ProgressState) -> Result<(), ProgressError> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, state)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the progress file.
    fn clear(&mut self) -> Result<(), ProgressError> {
        match remove_file(&self.save_file) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_no_progress() {
        let dir = tempfile::tempdir().unwrap();
        let mut store: JsonProgressStore = JsonProgressStore::new(dir.path().to_path_buf());
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store: JsonProgressStore = JsonProgressStore::new(dir.path().to_path_buf());
        let mut state: ProgressState = ProgressState::new();
        state.complete(0, 1, 500);
        state.lose_life();
        store.save(&state).unwrap();

        let other: JsonProgressStore = JsonProgressStore::new(dir.path().to_path_buf());
        assert_eq!(other.load().unwrap(), Some(state));

        store.clear().unwrap();
        assert!(other.load().unwrap().is_none());
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("progress.json"), "{not json").unwrap();
        let store: JsonProgressStore = JsonProgressStore::new(dir.path().to_path_buf());
        assert!(matches!(store.load(), Err(ProgressError::Json(_))));
    }
}
