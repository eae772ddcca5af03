/*
grid_code.rs

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

//! Grid-code puzzle: find a code word hidden in a grid of letters.
//!
//! The grid is filled with random letters, and then the code is written over a random walk
//! (see [`super::random_walk`]). The player selects the cells that spell the code.

use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::path::Path;
use super::random_walk::RandomWalk;
use crate::difficulty::Tier;
use crate::puzzle::Cell;
use crate::settings::GridCodeRule;

/// Letters used to fill the grid and to build codes. `I` and `O` are left out because they look
/// like `1` and `0`.
pub const ALPHABET: [char; 24] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Minimum number of cells in a selection.
pub const MIN_SELECTION: usize = 3;

/// Grid-code puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridCodePuzzle {
    /// Side of the square grid.
    pub size: usize,

    /// Letters, row by row.
    pub grid: Vec<Vec<char>>,

    /// The hidden code.
    pub code: String,

    /// Cells where the code was written, in order.
    pub path: Vec<Cell>,
}

/// Generate a grid-code puzzle.
///
/// The side of the grid goes from 3 at tier 1 to 6 at tier 10. The code has at least three
/// letters, and at most as many letters as the side of the grid.
pub fn generate<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> GridCodePuzzle {
    let size: usize = tier.scale(3, 6);
    let length: usize = rng.random_range(3..=tier.scale(3, 6)).min(size * size);

    let mut grid: Vec<Vec<char>> = (0..size)
        .map(|_| (0..size).map(|_| random_letter(rng)).collect())
        .collect();
    let code: String = (0..length).map(|_| random_letter(rng)).collect();

    let path: Path = match RandomWalk::new(size).generate(length, rng) {
        Ok(p) => p,
        Err(e) => {
            warn!("Cannot find a random walk ({e:?}), using a fixed one");
            Path::snake(size, length)
        }
    };

    for (cell, letter) in path.get().iter().zip(code.chars()) {
        grid[cell.row][cell.col] = letter;
    }
    debug!("Grid code {code} planted along {:?}", path.get());

    GridCodePuzzle {
        size,
        grid,
        code,
        path: path.into_cells(),
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    *ALPHABET.choose(rng).unwrap_or(&'A')
}

impl GridCodePuzzle {
    /// Return the letter at the given cell, or None if the cell is outside the grid.
    pub fn symbol(&self, cell: Cell) -> Option<char> {
        self.grid.get(cell.row)?.get(cell.col).copied()
    }

    /// Return the word spelled by the given cells, or None if a cell is outside the grid.
    pub fn read(&self, cells: &[Cell]) -> Option<String> {
        cells.iter().map(|c| self.symbol(*c)).collect()
    }

    /// Whether the selected cells are accepted as the code.
    ///
    /// With [`GridCodeRule::AnyCells`], any selection of at least three distinct cells is
    /// accepted. With [`GridCodeRule::PlantedCode`], the cells must touch one another in
    /// order and spell the code.
    pub fn accepts(&self, cells: &[Cell], rule: GridCodeRule) -> bool {
        if cells.len() < MIN_SELECTION || cells.iter().any(|c| !c.is_inside(self.size)) {
            return false;
        }
        let distinct: HashSet<&Cell> = cells.iter().collect();
        if distinct.len() != cells.len() {
            return false;
        }

        match rule {
            GridCodeRule::AnyCells => true,
            GridCodeRule::PlantedCode => {
                cells.windows(2).all(|pair| pair[0].touches(&pair[1]))
                    && self.read(cells).is_some_and(|word| word == self.code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn planted_code_is_readable_along_its_path() {
        for t in 1..=10 {
            for seed in 0..50 {
                let mut rng: StdRng = StdRng::seed_from_u64(seed);
                let p: GridCodePuzzle = generate(Tier::new(t), &mut rng);
                assert_eq!(p.read(&p.path).as_deref(), Some(p.code.as_str()));
                assert_eq!(p.grid.len(), p.size);
                assert!(p.accepts(&p.path, GridCodeRule::PlantedCode));
            }
        }
    }

    #[test]
    fn size_grows_with_tier() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        assert_eq!(generate(Tier::MIN, &mut rng).size, 3);
        let p: GridCodePuzzle = generate(Tier::MAX, &mut rng);
        assert_eq!(p.size, 6);
        assert!((3..=6).contains(&p.code.len()));
    }

    #[test]
    fn code_length_varies_within_a_tier() {
        let lengths: HashSet<usize> = (0..50)
            .map(|seed| generate(Tier::MAX, &mut StdRng::seed_from_u64(seed)).code.len())
            .collect();
        assert!(lengths.len() > 1);
        assert!(lengths.iter().all(|l| (3..=6).contains(l)));
        assert_eq!(generate(Tier::MIN, &mut StdRng::seed_from_u64(0)).code.len(), 3);
    }

    #[test]
    fn lenient_rule_accepts_any_three_cells() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let p: GridCodePuzzle = generate(Tier::MIN, &mut rng);
        let corners: Vec<Cell> = vec![Cell::new(0, 0), Cell::new(2, 2), Cell::new(0, 2)];
        assert!(p.accepts(&corners, GridCodeRule::AnyCells));
        assert!(!p.accepts(&corners[..2], GridCodeRule::AnyCells));
    }

    #[test]
    fn repeated_or_outside_cells_are_refused() {
        let mut rng: StdRng = StdRng::seed_from_u64(12);
        let p: GridCodePuzzle = generate(Tier::MIN, &mut rng);
        let repeated: Vec<Cell> = vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 0)];
        assert!(!p.accepts(&repeated, GridCodeRule::AnyCells));
        let outside: Vec<Cell> = vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 3)];
        assert!(!p.accepts(&outside, GridCodeRule::AnyCells));
    }

    #[test]
    fn strict_rule_needs_the_code() {
        let p: GridCodePuzzle = GridCodePuzzle {
            size: 3,
            grid: vec![
                vec!['C', 'A', 'T'],
                vec!['X', 'X', 'X'],
                vec!['T', 'A', 'C'],
            ],
            code: "CAT".to_string(),
            path: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
        };
        let reversed: Vec<Cell> = vec![Cell::new(2, 2), Cell::new(2, 1), Cell::new(2, 0)];
        assert!(p.accepts(&reversed, GridCodeRule::PlantedCode));
        let gap: Vec<Cell> = vec![Cell::new(0, 0), Cell::new(2, 1), Cell::new(0, 2)];
        assert!(!p.accepts(&gap, GridCodeRule::PlantedCode));
        let wrong: Vec<Cell> = vec![Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)];
        assert!(!p.accepts(&wrong, GridCodeRule::PlantedCode));
        assert!(p.accepts(&wrong, GridCodeRule::AnyCells));
    }
}
