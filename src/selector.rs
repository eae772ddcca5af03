/*
selector.rs

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

//! Choose the puzzle kind of a level.

use crate::difficulty::LevelIndex;
use crate::puzzle::{CLASSIC_KIND_COUNT, PuzzleKind};
use crate::settings::ContentPack;

/// The first levels go through every classic kind in turn, so that the player meets them all.
pub const WARM_UP_LEVELS: LevelIndex = 10;

/// Return the puzzle kind of the given level.
///
/// For the classic pack, the first [`WARM_UP_LEVELS`] levels rotate through the kinds. After
/// that the kind is `(index + index / 7) mod 5`, which varies from level to level but is always
/// the same for a given index.
pub fn select_kind(pack: ContentPack, index: LevelIndex) -> PuzzleKind {
    match pack {
        ContentPack::ArrowMaze => PuzzleKind::ArrowMaze,
        ContentPack::Classic => {
            let count: LevelIndex = CLASSIC_KIND_COUNT as LevelIndex;
            let slot: LevelIndex = if index < WARM_UP_LEVELS {
                index % count
            } else {
                (index % count + (index / 7) % count) % count
            };
            // `slot` is below CLASSIC_KIND_COUNT, so it is always a classic kind
            PuzzleKind::from_repr(slot as u8).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn warm_up_rotation() {
        let kinds: Vec<PuzzleKind> = (0..WARM_UP_LEVELS)
            .map(|i| select_kind(ContentPack::Classic, i))
            .collect();
        assert_eq!(
            kinds,
            vec![
                PuzzleKind::GridCode,
                PuzzleKind::Pattern,
                PuzzleKind::Slider,
                PuzzleKind::Sequence,
                PuzzleKind::Riddle,
                PuzzleKind::GridCode,
                PuzzleKind::Pattern,
                PuzzleKind::Slider,
                PuzzleKind::Sequence,
                PuzzleKind::Riddle,
            ]
        );
    }

    #[test]
    fn formula_after_warm_up() {
        // (10 + 1) mod 5 = 1, (14 + 2) mod 5 = 1, (35 + 5) mod 5 = 0
        assert_eq!(select_kind(ContentPack::Classic, 10), PuzzleKind::Pattern);
        assert_eq!(select_kind(ContentPack::Classic, 14), PuzzleKind::Pattern);
        assert_eq!(select_kind(ContentPack::Classic, 35), PuzzleKind::GridCode);
        assert_eq!(
            select_kind(ContentPack::Classic, LevelIndex::MAX),
            select_kind(ContentPack::Classic, LevelIndex::MAX)
        );
    }

    #[test]
    fn classic_pack_never_picks_arrow_mazes() {
        assert!((0..500).all(|i| select_kind(ContentPack::Classic, i) != PuzzleKind::ArrowMaze));
        assert_eq!(select_kind(ContentPack::ArrowMaze, 3), PuzzleKind::ArrowMaze);
    }
}
