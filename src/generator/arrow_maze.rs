/*
arrow_maze.rs

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

//! Arrow maze: the puzzle of the arrow-maze content pack.
//!
//! Every cell of the board holds an arrow. The player traces paths: from a cell, the path can
//! only continue to the cell the arrow points to. The cells of each completed path are cleared,
//! and the level is won when the whole board is cleared.
//!
//! The board is random, with some structure added on top:
//!
//! * corridors: long runs of cells that point the same way, with the occasional turn.
//! * loops: 2x2 blocks of cells that turn clockwise.
//!
//! Arrows on the border that point off the board are turned until they point back inside. This
//! way every cell can be cleared, at worst with a two-cell path.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

use crate::difficulty::Tier;
use crate::puzzle::Cell;

/// Side of the board at tier 1 (and 0).
const BASE_SIZE: usize = 7;

/// Probability to turn at each step when carving a corridor.
const TURN_PROBABILITY: f64 = 0.3;

/// Arrow directions, in clockwise order.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, FromRepr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Return a random direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_repr(rng.random_range(0..4)).unwrap_or_default()
    }

    /// Return the next direction, clockwise.
    pub fn clockwise(self) -> Self {
        Self::from_repr((self as u8 + 1) % 4).unwrap_or_default()
    }

    /// Return the cell next to `cell` in this direction, or None if it is off the board.
    pub fn step(self, cell: Cell, size: usize) -> Option<Cell> {
        let next: Cell = match self {
            Direction::Up => Cell::new(cell.row.checked_sub(1)?, cell.col),
            Direction::Right => Cell::new(cell.row, cell.col + 1),
            Direction::Down => Cell::new(cell.row + 1, cell.col),
            Direction::Left => Cell::new(cell.row, cell.col.checked_sub(1)?),
        };
        if next.is_inside(size) { Some(next) } else { None }
    }

    /// Same as [`Direction::step`], but stay on the border instead of leaving the board.
    fn step_clamped(self, cell: Cell, size: usize) -> Cell {
        self.step(cell, size).unwrap_or(cell)
    }
}

/// Arrow maze puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArrowMazePuzzle {
    /// Side of the square board.
    pub size: usize,

    /// Arrows, row by row.
    pub arrows: Vec<Vec<Direction>>,
}

/// Generate an arrow maze.
///
/// The board side is `7 + tier / 2`, and harder tiers get more corridors.
pub fn generate<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> ArrowMazePuzzle {
    let size: usize = BASE_SIZE + tier.level() / 2;
    let mut arrows: Vec<Vec<Direction>> = (0..size)
        .map(|_| (0..size).map(|_| Direction::random(rng)).collect())
        .collect();

    // Corridors
    let corridors: usize = 6 + tier.level();
    for _ in 0..corridors {
        let mut cell: Cell = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
        let length: usize = rng.random_range((size / 2).max(3)..=size * 2);
        let mut direction: Direction = Direction::random(rng);
        for _ in 0..length {
            arrows[cell.row][cell.col] = direction;
            if rng.random_bool(TURN_PROBABILITY) {
                direction = Direction::random(rng);
            }
            cell = direction.step_clamped(cell, size);
        }
    }

    // Loops
    for _ in 0..(size / 3).max(2) {
        let r: usize = rng.random_range(1..=size - 2);
        let c: usize = rng.random_range(1..=size - 2);
        arrows[r][c] = Direction::Right;
        arrows[r][c + 1] = Direction::Down;
        arrows[r + 1][c + 1] = Direction::Left;
        arrows[r + 1][c] = Direction::Up;
    }

    // Turn the arrows that point off the board
    let mut fixed: usize = 0;
    for (row, line) in arrows.iter_mut().enumerate() {
        for (col, direction) in line.iter_mut().enumerate() {
            while direction.step(Cell::new(row, col), size).is_none() {
                *direction = direction.clockwise();
                fixed += 1;
            }
        }
    }
    debug!("Arrow maze {size}x{size}: {corridors} corridors, {fixed} border turns");

    ArrowMazePuzzle { size, arrows }
}

impl ArrowMazePuzzle {
    /// Return the arrow at the given cell, or None if the cell is off the board.
    pub fn arrow(&self, cell: Cell) -> Option<Direction> {
        self.arrows.get(cell.row)?.get(cell.col).copied()
    }

    /// Whether the trace follows the arrows.
    ///
    /// A trace has at least two cells, and each cell is the one the previous cell points to.
    pub fn accepts(&self, trace: &[Cell]) -> bool {
        trace.len() >= 2
            && trace.windows(2).all(|pair| {
                self.arrow(pair[0])
                    .and_then(|d| d.step(pair[0], self.size))
                    .is_some_and(|next| next == pair[1])
            })
    }
}

/// Cleared status of the cells of an arrow maze, while the player is solving it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MazeBoard {
    size: usize,
    cleared: Vec<Vec<bool>>,
}

impl MazeBoard {
    /// Create a [`MazeBoard`] object with no cleared cells.
    pub fn new(puzzle: &ArrowMazePuzzle) -> Self {
        Self {
            size: puzzle.size,
            cleared: vec![vec![false; puzzle.size]; puzzle.size],
        }
    }

    /// Clear the cells of the trace if it follows the arrows.
    ///
    /// Return whether the trace was accepted. A trace for a puzzle of another size is refused.
    pub fn apply(&mut self, puzzle: &ArrowMazePuzzle, trace: &[Cell]) -> bool {
        if puzzle.size != self.size || !puzzle.accepts(trace) {
            return false;
        }
        for cell in trace {
            if let Some(c) = self.cleared.get_mut(cell.row).and_then(|r| r.get_mut(cell.col)) {
                *c = true;
            }
        }
        true
    }

    /// Return the number of cells still to clear.
    pub fn remaining(&self) -> usize {
        self.cleared.iter().flatten().filter(|c| !**c).count()
    }

    /// Whether the whole board is cleared.
    pub fn is_cleared(&self) -> bool {
        self.remaining() == 0
    }
}
