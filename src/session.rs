/*
session.rs

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

//! Manage the puzzle the player is working on.
//!
//! A [`PuzzleSession`] object keeps the last generated puzzle, whether the answers are shown, and
//! the letters the player typed in the crossword cells. The generators never hold that state.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::generator::crossword::CrosswordPuzzle;
use crate::generator::grid::Cell;
use crate::generator::word_search::WordSearchPuzzle;

/// Generated puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Puzzle {
    WordSearch(WordSearchPuzzle),
    Crossword(CrosswordPuzzle),
}

impl Puzzle {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        match self {
            Puzzle::WordSearch(p) => p.grid.len(),
            Puzzle::Crossword(p) => p.grid.len(),
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        match self {
            Puzzle::WordSearch(p) => p.grid.first().map_or(0, |r| r.len()),
            Puzzle::Crossword(p) => p.grid.first().map_or(0, |r| r.len()),
        }
    }

    /// Letter expected in the cell, or `None` for crossword blocks and cells outside the grid.
    pub fn answer(&self, row: usize, col: usize) -> Option<char> {
        match self {
            Puzzle::WordSearch(p) => p.grid.get(row)?.get(col).copied(),
            Puzzle::Crossword(p) => *p.grid.get(row)?.get(col)?,
        }
    }
}

/// Result of the verification of the player's letters.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of letter cells.
    pub total: usize,

    /// Number of cells holding the right letter.
    pub correct: usize,

    /// Number of cells holding a letter.
    pub filled: usize,
}

impl CheckReport {
    pub fn is_solved(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

/// Puzzle in progress.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PuzzleSession {
    /// Last generated puzzle.
    puzzle: Option<Puzzle>,

    /// Clue number of each crossword cell.
    numbers: Vec<Vec<Option<usize>>>,

    /// Whether the answers are shown instead of the player's letters.
    pub show_answers: bool,

    /// Letters typed by the player, one per crossword cell.
    entries: Vec<Vec<Option<char>>>,
}

impl PuzzleSession {
    /// Create an empty [`PuzzleSession`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the puzzle. The player's letters are discarded and the answers are hidden.
    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        self.numbers = match &puzzle {
            Puzzle::Crossword(p) => p.numbers(),
            Puzzle::WordSearch(_) => Vec::new(),
        };
        self.entries = vec![vec![None; puzzle.cols()]; puzzle.rows()];
        self.puzzle = Some(puzzle);
        self.show_answers = false;
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Clue number of the cell, if any.
    pub fn number(&self, row: usize, col: usize) -> Option<usize> {
        *self.numbers.get(row)?.get(col)?
    }

    /// Show or hide the answers, and return the new state.
    pub fn toggle_answers(&mut self) -> bool {
        self.show_answers = !self.show_answers;
        self.show_answers
    }

    /// Record the player's input for a crossword cell.
    ///
    /// Only the last letter of `text` is kept, in uppercase. An input without letter clears the
    /// cell. The input is ignored while the answers are shown, and for blocks or word search
    /// grids. Returns whether the cell was updated.
    pub fn set_entry(&mut self, row: usize, col: usize, text: &str) -> bool {
        if self.show_answers {
            return false;
        }
        let Some(Puzzle::Crossword(puzzle)) = &self.puzzle else {
            return false;
        };
        if puzzle.grid.get(row).and_then(|r| r.get(col)).copied().flatten().is_none() {
            return false;
        }
        let letter: Option<char> = text
            .chars()
            .rev()
            .find(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase());
        debug!("Entry at ({row}, {col}): {letter:?}");
        match letter {
            Some(l) => self.entries[row][col] = Some(l),
            None => self.clear_entry(row, col),
        }
        true
    }

    /// Clear the player's letter in a cell.
    pub fn clear_entry(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.entries.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = None;
        }
    }

    /// Letter typed by the player in the cell.
    pub fn entry(&self, row: usize, col: usize) -> Option<char> {
        *self.entries.get(row)?.get(col)?
    }

    /// Clear all the player's letters and hide the answers.
    pub fn reset(&mut self) {
        self.entries.iter_mut().flatten().for_each(|c| *c = None);
        self.show_answers = false;
    }

    /// Compare the player's letters with the answers.
    ///
    /// Returns `None` for word searches, which have nothing to type.
    pub fn check(&self) -> Option<CheckReport> {
        let Some(Puzzle::Crossword(puzzle)) = &self.puzzle else {
            return None;
        };
        let mut report = CheckReport {
            total: 0,
            correct: 0,
            filled: 0,
        };
        for (r, row) in puzzle.grid.iter().enumerate() {
            for (c, answer) in row.iter().enumerate() {
                let Some(answer) = answer else {
                    continue;
                };
                report.total += 1;
                if let Some(letter) = self.entry(r, c) {
                    report.filled += 1;
                    if letter == *answer {
                        report.correct += 1;
                    }
                }
            }
        }
        Some(report)
    }

    /// Whether every crossword cell holds the right letter.
    pub fn is_solved(&self) -> bool {
        self.check().is_some_and(|r| r.is_solved())
    }

    /// Cells that belong to an answer: the hidden words of a word search, or all the letter
    /// cells of a crossword.
    pub fn answer_cells(&self) -> HashSet<Cell> {
        match &self.puzzle {
            Some(Puzzle::WordSearch(p)) => p.answer_cells(),
            Some(Puzzle::Crossword(p)) => p
                .placements
                .iter()
                .flat_map(|placement| placement.cells())
                .collect(),
            None => HashSet::new(),
        }
    }

    /// Letter to display in a cell.
    ///
    /// Word search cells always show their letter. Crossword cells show the answer while the
    /// answers are shown, and the player's letter otherwise.
    pub fn cell_display(&self, row: usize, col: usize) -> Option<char> {
        match self.puzzle.as_ref()? {
            Puzzle::WordSearch(p) => p.grid.get(row)?.get(col).copied(),
            Puzzle::Crossword(p) => {
                if self.show_answers {
                    *p.grid.get(row)?.get(col)?
                } else {
                    self.entry(row, col)
                }
            }
        }
    }
}
