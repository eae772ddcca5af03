/*
validator.rs

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

//! Check the player's answers.
//!
//! [`validate`] routes a [`Candidate`] to the check of the puzzle kind and returns a [`Verdict`].
//! A wrong answer gets a hint that depends on the puzzle kind only, never on the answer itself.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::puzzle::{Cell, PuzzleDescriptor};
use crate::settings::GridCodeRule;

const HINT_GRID_CODE: &str = "Select at least three letters that form the code.";
const HINT_GRID_CODE_STRICT: &str = "Follow the letters of the code from cell to cell.";
const HINT_PATTERN: &str = "Look at the gap between two neighbouring numbers.";
const HINT_SLIDER: &str = "Some words are still out of place.";
const HINT_SEQUENCE: &str = "Each number is the previous one times the same factor.";
const HINT_RIDDLE: &str = "Not quite. Read the riddle again.";
const HINT_ARROW_MAZE: &str = "Wrong direction: follow the arrow of each cell.";

/// Answer submitted by the player.
///
/// Serialized with a `type` tag, for example `{"type": "choice", "value": 12}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Candidate {
    /// Selected grid cells, in selection order.
    Cells(Vec<Cell>),

    /// Chosen number.
    Choice(i64),

    /// Tiles, in the order set by the player.
    Tiles(Vec<String>),

    /// Free text.
    Text(String),

    /// Cells of a traced path, in order.
    Trace(Vec<Cell>),
}

impl Candidate {
    /// Name of the candidate shape, for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Candidate::Cells(_) => "cells",
            Candidate::Choice(_) => "choice",
            Candidate::Tiles(_) => "tiles",
            Candidate::Text(_) => "text",
            Candidate::Trace(_) => "trace",
        }
    }
}

/// Result of an answer check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,

    /// Hint for the player. Only set when the answer is rejected.
    pub hint: Option<String>,
}

impl Verdict {
    /// Create an accepted [`Verdict`].
    pub fn accept() -> Self {
        Self {
            accepted: true,
            hint: None,
        }
    }

    /// Create a rejected [`Verdict`] with the given hint.
    pub fn reject(hint: &str) -> Self {
        Self {
            accepted: false,
            hint: Some(hint.to_string()),
        }
    }

    fn from_check(accepted: bool, hint: &str) -> Self {
        if accepted {
            Self::accept()
        } else {
            Self::reject(hint)
        }
    }
}

/// Check the candidate against the puzzle.
///
/// # Errors
///
/// The function returns [`EngineError::InvalidCandidateShape`] if the candidate does not have
/// the shape that the puzzle expects (a free text for a grid-code puzzle for example).
pub fn validate(
    descriptor: &PuzzleDescriptor,
    candidate: &Candidate,
    rule: GridCodeRule,
) -> Result<Verdict, EngineError> {
    let verdict: Verdict = match (descriptor, candidate) {
        (PuzzleDescriptor::GridCode(p), Candidate::Cells(cells)) => {
            let hint: &str = match rule {
                GridCodeRule::AnyCells => HINT_GRID_CODE,
                GridCodeRule::PlantedCode => HINT_GRID_CODE_STRICT,
            };
            Verdict::from_check(p.accepts(cells, rule), hint)
        }
        (PuzzleDescriptor::Pattern(p), Candidate::Choice(choice)) => {
            Verdict::from_check(p.accepts(*choice), HINT_PATTERN)
        }
        (PuzzleDescriptor::Slider(p), Candidate::Tiles(tiles)) => {
            Verdict::from_check(p.accepts(tiles), HINT_SLIDER)
        }
        (PuzzleDescriptor::Sequence(p), Candidate::Choice(value)) => {
            Verdict::from_check(p.accepts(*value), HINT_SEQUENCE)
        }
        (PuzzleDescriptor::Sequence(p), Candidate::Text(text)) => {
            Verdict::from_check(p.accepts_text(text), HINT_SEQUENCE)
        }
        (PuzzleDescriptor::Riddle(p), Candidate::Text(text)) => {
            Verdict::from_check(p.accepts(text), HINT_RIDDLE)
        }
        (PuzzleDescriptor::ArrowMaze(p), Candidate::Trace(trace)) => {
            Verdict::from_check(p.accepts(trace), HINT_ARROW_MAZE)
        }
        _ => {
            return Err(EngineError::InvalidCandidateShape {
                kind: descriptor.kind(),
                found: candidate.shape(),
            });
        }
    };
    debug!(
        "{} answer for a {} puzzle: accepted = {}",
        candidate.shape(),
        descriptor.kind(),
        verdict.accepted
    );
    Ok(verdict)
}

/// Return an answer that solves the puzzle.
///
/// For arrow mazes, the answer is one valid trace (a single trace rarely clears the whole board).
pub fn solution(descriptor: &PuzzleDescriptor) -> Candidate {
    match descriptor {
        PuzzleDescriptor::GridCode(p) => Candidate::Cells(p.path.clone()),
        PuzzleDescriptor::Pattern(p) => Candidate::Choice(p.answer().unwrap_or_default()),
        PuzzleDescriptor::Slider(p) => Candidate::Tiles(p.solution.clone()),
        PuzzleDescriptor::Sequence(p) => Candidate::Choice(p.answer),
        PuzzleDescriptor::Riddle(p) => Candidate::Text(p.answer.clone()),
        PuzzleDescriptor::ArrowMaze(p) => {
            let start: Cell = Cell::new(0, 0);
            let trace: Vec<Cell> = p
                .arrow(start)
                .and_then(|d| d.step(start, p.size))
                .map_or_else(|| vec![start], |next| vec![start, next]);
            Candidate::Trace(trace)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::riddle;
    use crate::generator::sequence::SequencePuzzle;
    use crate::puzzle::PuzzleKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn riddle_verdicts() {
        let d: PuzzleDescriptor = PuzzleDescriptor::Riddle(riddle::generate(1));
        let ok: Verdict = validate(&d, &Candidate::Text(" TOWEL ".into()), GridCodeRule::AnyCells)
            .unwrap();
        assert_eq!(ok, Verdict::accept());

        let ko: Verdict =
            validate(&d, &Candidate::Text("sponge".into()), GridCodeRule::AnyCells).unwrap();
        assert!(!ko.accepted);
        assert!(ko.hint.is_some_and(|h| !h.is_empty()));
    }

    #[test]
    fn sequence_takes_numbers_and_text() {
        let d: PuzzleDescriptor = PuzzleDescriptor::Sequence(SequencePuzzle::from_parts(2, 3, 4));
        for c in [Candidate::Choice(54), Candidate::Text("54".into())] {
            assert!(validate(&d, &c, GridCodeRule::AnyCells).unwrap().accepted);
        }
        let ko: Verdict = validate(&d, &Candidate::Text("55".into()), GridCodeRule::AnyCells)
            .unwrap();
        assert_eq!(ko.hint.as_deref(), Some(HINT_SEQUENCE));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let d: PuzzleDescriptor = PuzzleDescriptor::Riddle(riddle::generate(0));
        assert_eq!(
            validate(&d, &Candidate::Choice(3), GridCodeRule::AnyCells),
            Err(EngineError::InvalidCandidateShape {
                kind: PuzzleKind::Riddle,
                found: "choice"
            })
        );
    }

    #[test]
    fn candidate_json() {
        let c: Candidate = serde_json::from_str(r#"{"type":"text","value":"piano"}"#).unwrap();
        assert_eq!(c, Candidate::Text("piano".into()));
        let c: Candidate =
            serde_json::from_str(r#"{"type":"cells","value":[{"row":0,"col":1}]}"#).unwrap();
        assert_eq!(c, Candidate::Cells(vec![Cell::new(0, 1)]));
    }

    #[test]
    fn saved_pattern_with_a_bad_hidden_position() {
        let d: PuzzleDescriptor = serde_json::from_str(
            r#"{"kind":"pattern","sequence":[1,2,3],"missing_index":7,"choices":[1,2,3,4,5]}"#,
        )
        .unwrap();
        let v: Verdict = validate(&d, &Candidate::Choice(3), GridCodeRule::AnyCells).unwrap();
        assert_eq!(v, Verdict::reject(HINT_PATTERN));
    }
}
