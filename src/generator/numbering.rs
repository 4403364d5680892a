/*
numbering.rs

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

//! Crossword clue numbers.
//!
//! Cells are scanned row by row. A cell receives the next number when it starts an across run
//! (nothing on its left, a letter on its right) or a down run (nothing above, a letter below).
//! A cell that starts both runs receives a single number, shared by both clue lists.

use serde::{Deserialize, Serialize};

use super::placement::Placement;
use super::word::default_clue;

/// Return the clue number of each cell of the grid.
pub fn compute_numbers(grid: &[Vec<Option<char>>]) -> Vec<Vec<Option<usize>>> {
    let filled = |r: usize, c: usize| {
        grid.get(r)
            .and_then(|row| row.get(c))
            .is_some_and(|x| x.is_some())
    };
    let mut next: usize = 1;

    grid.iter()
        .enumerate()
        .map(|(r, row)| {
            (0..row.len())
                .map(|c| {
                    if !filled(r, c) {
                        return None;
                    }
                    let across: bool = (c == 0 || !filled(r, c - 1)) && filled(r, c + 1);
                    let down: bool = (r == 0 || !filled(r - 1, c)) && filled(r + 1, c);
                    if across || down {
                        next += 1;
                        Some(next - 1)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect()
}

/// Crossword clue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub number: usize,
    pub clue: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
}

/// Across and down clues, ordered by number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ClueList {
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}

impl ClueList {
    /// Build the clue lists from the placements and the numbering grid.
    ///
    /// A placement whose first cell has no number is skipped.
    pub fn new(placements: &[Placement], numbers: &[Vec<Option<usize>>]) -> Self {
        let mut list = Self::default();
        for p in placements {
            let Some(number) = numbers.get(p.row).and_then(|r| r.get(p.col)).copied().flatten()
            else {
                continue;
            };
            let clue = Clue {
                number,
                clue: p.clue.clone().unwrap_or_else(|| default_clue(&p.answer)),
                answer: p.answer.clone(),
                row: p.row,
                col: p.col,
            };
            if p.direction.is_across() {
                list.across.push(clue);
            } else {
                list.down.push(clue);
            }
        }
        list.across.sort_by_key(|c| c.number);
        list.down.sort_by_key(|c| c.number);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::direction::Direction;

    fn to_grid(rows: &[&str]) -> Vec<Vec<Option<char>>> {
        rows.iter()
            .map(|r| r.chars().map(|c| if c == '.' { None } else { Some(c) }).collect())
            .collect()
    }

    #[test]
    fn shared_start_gets_one_number() {
        let grid = to_grid(&["CAT", "O..", "W.."]);
        let numbers = compute_numbers(&grid);
        assert_eq!(numbers[0], vec![Some(1), None, None]);
        assert_eq!(numbers[1], vec![None, None, None]);
        assert_eq!(numbers[2], vec![None, None, None]);

        let placements = vec![
            Placement::new("CAT", Some("Purrs"), 0, 0, Direction::Right),
            Placement::new("COW", None, 0, 0, Direction::Down),
        ];
        let clues = ClueList::new(&placements, &numbers);
        assert_eq!(clues.across[0].number, 1);
        assert_eq!(clues.down[0].number, 1);
        assert_eq!(clues.down[0].clue, "3 letters");
    }

    #[test]
    fn numbers_increase_in_row_major_order() {
        let grid = to_grid(&[
            "..B....",
            "PLANET.",
            "..T.M..",
            "...COW.",
            "....N..",
        ]);
        let numbers = compute_numbers(&grid);
        let found: Vec<(usize, usize, usize)> = numbers
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter_map(move |(c, n)| n.map(|n| (r, c, n)))
            })
            .collect();
        // B, P, E and C start runs
        assert_eq!(found, vec![(0, 2, 1), (1, 0, 2), (1, 4, 3), (3, 3, 4)]);
    }

    #[test]
    fn unnumbered_placement_is_skipped() {
        let grid = to_grid(&["CAT"]);
        let numbers = compute_numbers(&grid);
        let placements = vec![Placement::new("AT", None, 0, 1, Direction::Right)];
        assert!(ClueList::new(&placements, &numbers).across.is_empty());
    }
}
