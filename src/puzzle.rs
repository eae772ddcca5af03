/*
puzzle.rs

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

//! Puzzle descriptors.
//!
//! A [`PuzzleDescriptor`] is the data package the UI receives for a level. It carries everything
//! needed to draw the puzzle and to check an answer. It is serialized to JSON with a `kind` tag:
//!
//! ```json
//! {"kind":"riddle","question":"What has keys but can't open locks?","answer":"piano"}
//! ```

use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

use crate::generator::arrow_maze::ArrowMazePuzzle;
use crate::generator::grid_code::GridCodePuzzle;
use crate::generator::pattern::PatternPuzzle;
use crate::generator::riddle::RiddlePuzzle;
use crate::generator::sequence::SequencePuzzle;
use crate::generator::slider::SliderPuzzle;

/// Puzzle kinds.
///
/// The first five kinds form the classic content pack, in rotation order.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, FromRepr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum PuzzleKind {
    #[default]
    GridCode,
    Pattern,
    Slider,
    Sequence,
    Riddle,
    ArrowMaze,
}

/// Number of kinds in the classic content pack.
pub const CLASSIC_KIND_COUNT: u8 = 5;

/// Position of a cell in a square grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the cell is inside a `size` x `size` grid.
    pub fn is_inside(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Whether the two cells touch, horizontally, vertically, or diagonally.
    pub fn touches(&self, other: &Cell) -> bool {
        *self != *other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Return the (up to eight) cells around this cell that are inside the grid.
    pub fn neighbours(&self, size: usize) -> Vec<Cell> {
        let mut ret: Vec<Cell> = Vec::with_capacity(8);
        for row in self.row.saturating_sub(1)..=(self.row + 1).min(size - 1) {
            for col in self.col.saturating_sub(1)..=(self.col + 1).min(size - 1) {
                let c: Cell = Cell::new(row, col);
                if c != *self {
                    ret.push(c);
                }
            }
        }
        ret
    }
}

/// A generated puzzle, tagged by its kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleDescriptor {
    GridCode(GridCodePuzzle),
    Pattern(PatternPuzzle),
    Slider(SliderPuzzle),
    Sequence(SequencePuzzle),
    Riddle(RiddlePuzzle),
    ArrowMaze(ArrowMazePuzzle),
}

impl PuzzleDescriptor {
    /// Return the kind of the puzzle.
    pub fn kind(&self) -> PuzzleKind {
        match self {
            PuzzleDescriptor::GridCode(_) => PuzzleKind::GridCode,
            PuzzleDescriptor::Pattern(_) => PuzzleKind::Pattern,
            PuzzleDescriptor::Slider(_) => PuzzleKind::Slider,
            PuzzleDescriptor::Sequence(_) => PuzzleKind::Sequence,
            PuzzleDescriptor::Riddle(_) => PuzzleKind::Riddle,
            PuzzleDescriptor::ArrowMaze(_) => PuzzleKind::ArrowMaze,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbours() {
        assert_eq!(Cell::new(0, 0).neighbours(3).len(), 3);
        assert_eq!(Cell::new(1, 1).neighbours(3).len(), 8);
        assert_eq!(Cell::new(2, 1).neighbours(3).len(), 5);
    }

    #[test]
    fn touching_cells() {
        let c: Cell = Cell::new(2, 2);
        assert!(c.touches(&Cell::new(1, 1)));
        assert!(c.touches(&Cell::new(2, 3)));
        assert!(!c.touches(&c));
        assert!(!c.touches(&Cell::new(0, 2)));
    }

    #[test]
    fn kinds_follow_declaration_order() {
        assert_eq!(PuzzleKind::from_repr(0), Some(PuzzleKind::GridCode));
        assert_eq!(PuzzleKind::from_repr(4), Some(PuzzleKind::Riddle));
        assert_eq!(PuzzleKind::from_repr(CLASSIC_KIND_COUNT), Some(PuzzleKind::ArrowMaze));
        assert_eq!(PuzzleKind::GridCode.to_string(), "grid_code");
    }

    #[test]
    fn descriptor_json_is_tagged() {
        let d: PuzzleDescriptor = PuzzleDescriptor::Riddle(RiddlePuzzle {
            question: "q".to_string(),
            answer: "a".to_string(),
        });
        let json: String = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"kind\":\"riddle\""));
        let back: PuzzleDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), PuzzleKind::Riddle);
    }
}
