/*
render.rs

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

//! Plain-text rendering of the puzzles for the terminal.
//!
//! Word search letters are separated by spaces. In a crossword, blocks are drawn with `#` and
//! empty letter cells with `_`. When the answers are shown, blocks are drawn with `.`.
//! Word search letters that do not belong to a hidden word are also replaced with `.` when the
//! answers are shown.

use std::collections::HashSet;
use std::fmt::Write;

use crate::generator::grid::Cell;
use crate::generator::numbering::{Clue, ClueList};
use crate::session::{Puzzle, PuzzleSession};

/// Join the cells of a row.
fn join_row<I>(cells: I) -> String
where
    I: Iterator<Item = char>,
{
    let mut s: String = cells.flat_map(|c| [c, ' ']).collect();
    s.pop();
    s
}

/// Render a list of clues under a title.
fn clue_section(out: &mut String, title: &str, clues: &[Clue]) {
    if clues.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}");
    for clue in clues {
        let _ = writeln!(
            out,
            "{:>4}. {} ({})",
            clue.number,
            clue.clue,
            clue.answer.len()
        );
    }
}

/// Render the across and down clues.
pub fn clues(list: &ClueList) -> String {
    let mut out: String = String::new();
    clue_section(&mut out, "ACROSS", &list.across);
    clue_section(&mut out, "DOWN", &list.down);
    out
}

/// Render the grid of the session's puzzle, following its answer toggle.
pub fn grid(session: &PuzzleSession) -> String {
    let Some(puzzle) = session.puzzle() else {
        return String::new();
    };
    let answers: HashSet<Cell> = session.answer_cells();
    let mut out: String = String::new();

    for r in 0..puzzle.rows() {
        let row: String = join_row((0..puzzle.cols()).map(|c| {
            let expected: Option<char> = puzzle.answer(r, c);
            match (puzzle, expected) {
                (Puzzle::WordSearch(_), Some(letter)) => {
                    if session.show_answers && !answers.contains(&(r, c)) {
                        '.'
                    } else {
                        letter
                    }
                }
                (Puzzle::Crossword(_), Some(_)) => session.cell_display(r, c).unwrap_or('_'),
                (_, None) => {
                    if session.show_answers {
                        '.'
                    } else {
                        '#'
                    }
                }
            }
        }));
        let _ = writeln!(out, "{row}");
    }
    out
}

/// Render the puzzle: grid, then the word list or the clues.
pub fn puzzle(session: &PuzzleSession) -> String {
    let mut out: String = grid(session);
    match session.puzzle() {
        Some(Puzzle::WordSearch(p)) => {
            let _ = writeln!(out, "\n{}", p.words().join("  "));
        }
        Some(Puzzle::Crossword(p)) => out.push_str(&clues(&p.clues())),
        None => (),
    }
    out
}
