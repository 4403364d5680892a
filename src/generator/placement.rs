/*
placement.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordgrid.

Wordgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Word placed in a grid.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::Cell;

/// A word committed to the grid. Placements are never modified after they are created, except
/// for the coordinate shift applied when a crossword is trimmed to its bounding box.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Placed word, uppercase letters only.
    pub answer: String,

    /// Crossword clue. Word searches do not use clues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Direction of the word.
    pub direction: Direction,
}

impl Placement {
    /// Create a [`Placement`] object.
    pub fn new(
        answer: &str,
        clue: Option<&str>,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Self {
        Self {
            answer: answer.to_string(),
            clue: clue.map(str::to_string),
            row,
            col,
            direction,
        }
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// Return the cells covered by the word, from the first letter to the last one.
    ///
    /// Placements are only created for words that fit in the grid: every cell has non-negative
    /// coordinates.
    pub fn cells(&self) -> Vec<Cell> {
        (0..self.len()).map(|i| self.cell_at(i)).collect()
    }

    /// Return the cells covered by the word along with the letters.
    pub fn letters(&self) -> Vec<(Cell, char)> {
        self.cells().into_iter().zip(self.answer.chars()).collect()
    }

    /// Last cell of the word.
    pub fn end(&self) -> Cell {
        self.cell_at(self.len().saturating_sub(1))
    }

    /// Cell of the letter at the given index.
    fn cell_at(&self, index: usize) -> Cell {
        let (r, c) = self
            .direction
            .advance(self.row as isize, self.col as isize, index);
        debug_assert!(r >= 0 && c >= 0, "{} leaves the grid", self.answer);
        (r as usize, c as usize)
    }

    /// Return a copy of the placement moved up by `rows` and left by `cols`.
    pub fn shifted(&self, rows: usize, cols: usize) -> Self {
        Self {
            answer: self.answer.clone(),
            clue: self.clue.clone(),
            row: self.row - rows,
            col: self.col - cols,
            direction: self.direction,
        }
    }
}
