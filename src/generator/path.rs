/*
path.rs

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

//! Path of cells in a square grid.

use std::collections::HashSet;

use crate::puzzle::Cell;

/// Path object.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Cell>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Cell>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(length: usize) -> Self {
        Self {
            path: Vec::with_capacity(length),
            visited: HashSet::with_capacity(length),
        }
    }

    /// Create a [`Path`] object that snakes through the grid, row by row, alternating direction.
    ///
    /// Consecutive cells always touch, so the path is a valid walk of any length up to
    /// `size * size`. Used when the random walk gives up.
    pub fn snake(size: usize, length: usize) -> Self {
        let mut path: Path = Path::new(length);
        for i in 0..length.min(size * size) {
            let row: usize = i / size;
            let col: usize = if row % 2 == 0 {
                i % size
            } else {
                size - 1 - i % size
            };
            path.push(Cell::new(row, col));
        }
        path
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Cell) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) {
        if let Some(c) = self.path.pop() {
            self.visited.remove(&c);
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Cell> {
        &self.path
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Consume the object and return the ordered list of cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_keep_lookup_in_sync() {
        let mut p: Path = Path::new(3);
        p.push(Cell::new(0, 0));
        p.push(Cell::new(0, 1));
        assert!(p.contains(Cell::new(0, 1)));
        p.pop();
        assert!(!p.contains(Cell::new(0, 1)));
        assert_eq!(p.get_last(), Some(Cell::new(0, 0)));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn snake_is_a_connected_walk() {
        let p: Path = Path::snake(4, 16);
        assert_eq!(p.len(), 16);
        for pair in p.get().windows(2) {
            assert!(pair[0].touches(&pair[1]));
        }
        assert_eq!(p.get()[4], Cell::new(1, 3));
    }

    #[test]
    fn snake_never_leaves_the_grid() {
        assert_eq!(Path::snake(3, 20).len(), 9);
    }
}
