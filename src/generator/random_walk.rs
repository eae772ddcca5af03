/*
random_walk.rs

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

//! Generate a random walk in a square grid.
//!
//! Each step moves to one of the up to eight cells around the current cell. The walk never visits
//! the same cell twice, so that the letters written along the walk are not overwritten.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::path::Path;
use crate::puzzle::Cell;

// Max number of cells to try before giving up. Walks are short (six cells at most), so this limit
// is only reached if something is really wrong.
const MAX_ITERATIONS: usize = 10_000;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomWalkError {
    /// The walk is longer than the number of cells in the grid.
    NoPath,

    /// No walk found before the iteration limit.
    IterationsExceeded,
}

/// [`RandomWalk`] object.
pub struct RandomWalk {
    /// Side of the square grid.
    pub size: usize,

    /// Number of iterations it took to generate the last random walk.
    pub iteration: usize,
}

impl RandomWalk {
    /// Create the object.
    pub fn new(size: usize) -> Self {
        Self { size, iteration: 0 }
    }

    /// Generate and return a random walk of `length` cells, starting from a random cell.
    ///
    /// # Errors
    ///
    /// The method returns an error if the walk cannot fit in the grid, or if it takes too many
    /// iterations to produce a walk.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        length: usize,
        rng: &mut R,
    ) -> Result<Path, RandomWalkError> {
        self.iteration = 0;
        if length == 0 || length > self.size * self.size {
            return Err(RandomWalkError::NoPath);
        }

        let start: Cell = Cell::new(
            rng.random_range(0..self.size),
            rng.random_range(0..self.size),
        );
        debug!(
            "Starting cell = {start:?}  Length = {length}  Grid size = {}",
            self.size
        );

        let mut path: Path = Path::new(length);
        let res: Result<(), RandomWalkError> = self.find_walk(start, length, &mut path, rng);
        debug!("Iterations = {}", self.iteration);
        match res {
            Err(e) => Err(e),
            Ok(()) => Ok(path),
        }
    }

    /// Recursively extend the walk.
    fn find_walk<R: Rng + ?Sized>(
        &mut self,
        current: Cell,
        length: usize,
        path: &mut Path,
        rng: &mut R,
    ) -> Result<(), RandomWalkError> {
        path.push(current);
        if path.len() == length {
            return Ok(());
        }

        self.iteration += 1;
        if self.iteration >= MAX_ITERATIONS {
            // The cells stay in the path, but generate() drops it with the error
            return Err(RandomWalkError::IterationsExceeded);
        }

        // Randomize the order in which to test the neighbours
        let mut next: Vec<Cell> = current
            .neighbours(self.size)
            .into_iter()
            .filter(|c| !path.contains(*c))
            .collect();
        next.shuffle(rng);

        for c in next {
            match self.find_walk(c, length, path, rng) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if e == RandomWalkError::IterationsExceeded {
                        return Err(e);
                    }
                }
            }
        }
        debug!("    Back: no free cell around {current:?}");
        path.pop();
        Err(RandomWalkError::NoPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn walks_are_connected() {
        for seed in 0..200 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let path: Path = RandomWalk::new(3).generate(6, &mut rng).unwrap();
            assert_eq!(path.len(), 6);
            for pair in path.get().windows(2) {
                assert!(pair[0].touches(&pair[1]));
            }
        }
    }

    #[test]
    fn walks_never_revisit_a_cell() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let path: Path = RandomWalk::new(6).generate(6, &mut rng).unwrap();
        let mut cells: Vec<Cell> = path.get().clone();
        cells.sort_unstable();
        cells.dedup();
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn too_long_walk_is_rejected() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let res = RandomWalk::new(2).generate(5, &mut rng);
        assert_eq!(res.err(), Some(RandomWalkError::NoPath));
    }
}
