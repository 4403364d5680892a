/*
grid.rs

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

//! Square letter grid used by the placers.
//!
//! The grid stores one optional letter per cell and keeps track of the bounding box of the
//! occupied cells. Coordinates are `(row, col)` pairs, with `(0, 0)` in the top left corner.
//! Methods that take signed coordinates accept positions outside of the grid so that callers can
//! probe the cells around a word without checking the bounds first.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Zero-indexed `(row, col)` coordinates of a cell inside the grid.
pub type Cell = (usize, usize);

/// Smallest rectangle that contains all the occupied cells.
///
/// All the limits are inclusive.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Bounds {
    /// Return the bounding box of a straight run of `len` cells.
    ///
    /// Returns `None` if the run leaves the positive quadrant.
    pub fn of_span(row: isize, col: isize, direction: Direction, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let (end_row, end_col) = direction.advance(row, col, len - 1);
        if row.min(end_row) < 0 || col.min(end_col) < 0 {
            return None;
        }
        Some(Self {
            min_row: row.min(end_row) as usize,
            max_row: row.max(end_row) as usize,
            min_col: col.min(end_col) as usize,
            max_col: col.max(end_col) as usize,
        })
    }

    /// Smallest box that contains both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Self {
        Self {
            min_row: self.min_row.min(other.min_row),
            max_row: self.max_row.max(other.max_row),
            min_col: self.min_col.min(other.min_col),
            max_col: self.max_col.max(other.max_col),
        }
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }
}

/// Square grid of optional letters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Row-major cell contents.
    cells: Vec<Option<char>>,

    /// Bounding box of the occupied cells, or `None` while the grid is empty.
    bounds: Option<Bounds>,
}

impl Grid {
    /// Create an empty grid of `size` by `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            bounds: None,
        }
    }

    /// Number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bounding box of the occupied cells.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Whether the signed coordinates are inside the grid.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Return the letter at the given cell, or `None` if the cell is empty or outside the grid.
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        if !self.contains(row, col) {
            return None;
        }
        self.cells[row as usize * self.size + col as usize]
    }

    /// Whether the cell holds a letter. Cells outside of the grid are never occupied.
    pub fn is_occupied(&self, row: isize, col: isize) -> bool {
        self.get(row, col).is_some()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over the occupied cells and their letters, in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|letter| ((i / self.size, i % self.size), letter)))
    }

    /// Whether a word of `len` letters starting at the given position stays inside the grid.
    pub fn fits(&self, row: isize, col: isize, direction: Direction, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let (end_row, end_col) = direction.advance(row, col, len - 1);
        self.contains(row, col) && self.contains(end_row, end_col)
    }

    /// Write the word into the grid and extend the bounding box.
    ///
    /// The method does not validate the placement against the existing letters; use the
    /// validator for that. It only refuses words that would leave the grid, in which case
    /// nothing is written and `false` is returned.
    pub fn place(&mut self, word: &str, row: isize, col: isize, direction: Direction) -> bool {
        let len: usize = word.chars().count();
        if !self.fits(row, col, direction, len) {
            debug!("Refusing to write {word} at ({row}, {col}) {direction:?}: out of the grid");
            return false;
        }

        for (i, letter) in word.chars().enumerate() {
            let (r, c) = direction.advance(row, col, i);
            self.cells[r as usize * self.size + c as usize] = Some(letter);
        }

        if let Some(span) = Bounds::of_span(row, col, direction, len) {
            self.bounds = Some(match self.bounds {
                Some(b) => b.union(&span),
                None => span,
            });
        }
        true
    }

    /// Return the grid as a list of rows.
    pub fn rows(&self) -> Vec<Vec<Option<char>>> {
        self.cells.chunks(self.size.max(1)).map(|r| r.to_vec()).collect()
    }

    /// Return the part of the grid inside the given box, as a list of rows.
    pub fn trimmed(&self, bounds: &Bounds) -> Vec<Vec<Option<char>>> {
        (bounds.min_row..=bounds.max_row)
            .map(|r| {
                (bounds.min_col..=bounds.max_col)
                    .map(|c| self.get(r as isize, c as isize))
                    .collect()
            })
            .collect()
    }

    /// Return a copy of the grid where every empty cell receives a letter from `pick`.
    pub fn filled_with<F>(&self, mut pick: F) -> Vec<Vec<char>>
    where
        F: FnMut() -> char,
    {
        self.rows()
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.unwrap_or_else(&mut pick)).collect())
            .collect()
    }

    /// Print the grid.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        for row in self.rows() {
            let s: String = row
                .iter()
                .map(|c| c.unwrap_or('.'))
                .flat_map(|c| [c, ' '])
                .collect();
            debug!("{}", s.trim_end());
        }
    }
}
