/*
validator.rs

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

//! Decide whether a word can be written at a given position.
//!
//! Two adjacency policies exist:
//!
//! * [`TouchPolicy::Intersect`] (the default): a word may cross existing words on matching
//!   letters. The cells just before the first letter and just after the last letter must be
//!   empty, so that two words never run together. Each new letter must not touch a letter on
//!   either side, perpendicular to the word, so that no unintended crossing appears.
//!
//! * [`TouchPolicy::Isolate`]: a word never touches any other word, not even diagonally. This is
//!   the same validator with zero permitted intersections.
//!
//! ```text
//!    Intersect: the "#" cells must be empty        Isolate: the "#" cells must be empty
//!
//!      # # . # #                                       # # # # # # #
//!    # C A T S #        (around the new letters)       # C A T S #
//!      # # . # #                                       # # # # # # #
//! ```

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::Grid;
use super::level::Level;

/// How a new word may touch the words already in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TouchPolicy {
    /// Words never touch each other.
    Isolate,

    /// Words may cross on matching letters.
    #[default]
    Intersect,
}

/// Placement rules shared by the word search and crossword placers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlacementPolicy {
    /// Directions a word may take.
    pub allowed_directions: Vec<Direction>,

    /// Maximum number of letters a word may share with the words already in the grid.
    pub max_intersections: usize,

    /// Whether every word but the first must share at least one letter with the grid.
    pub require_intersection: bool,

    /// Adjacency rule.
    pub touch_policy: TouchPolicy,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self::crossword()
    }
}

impl PlacementPolicy {
    /// Crossword rules: across or down, one or two crossings per word.
    pub fn crossword() -> Self {
        Self {
            allowed_directions: Direction::ACROSS_DOWN.to_vec(),
            max_intersections: 2,
            require_intersection: true,
            touch_policy: TouchPolicy::Intersect,
        }
    }

    /// Word search rules with crossings, directions filtered by level.
    pub fn word_search(level: Level) -> Self {
        Self {
            allowed_directions: Direction::for_level(level),
            max_intersections: 2,
            require_intersection: true,
            touch_policy: TouchPolicy::Intersect,
        }
    }

    /// Word search rules where words never touch, directions filtered by level.
    pub fn isolated(level: Level) -> Self {
        Self {
            allowed_directions: Direction::for_level(level),
            max_intersections: 0,
            require_intersection: false,
            touch_policy: TouchPolicy::Isolate,
        }
    }

    /// Whether the word can be written at the given position under this policy's adjacency rule.
    ///
    /// The intersection count limits are not checked here; see [`PlacementPolicy::accepts`].
    pub fn can_place(
        &self,
        grid: &Grid,
        word: &str,
        row: isize,
        col: isize,
        direction: Direction,
    ) -> bool {
        match self.touch_policy {
            TouchPolicy::Intersect => can_place(grid, word, row, col, direction),
            TouchPolicy::Isolate => can_place_isolated(grid, word, row, col, direction),
        }
    }

    /// Whether the number of crossings of a legal placement is acceptable.
    ///
    /// `first_word` exempts the seed word from the mandatory intersection.
    pub fn accepts(&self, intersections: usize, first_word: bool) -> bool {
        if intersections > self.max_intersections {
            return false;
        }
        !(self.require_intersection && !first_word && intersections == 0)
    }
}

/// Whether the word can cross the existing words at the given position.
///
/// The word must fit in the grid, every occupied cell along the word must hold the same letter,
/// the cells before the start and after the end must be empty, and the cells on both sides of
/// each new letter must be empty.
pub fn can_place(grid: &Grid, word: &str, row: isize, col: isize, direction: Direction) -> bool {
    let len: usize = word.chars().count();
    if !grid.fits(row, col, direction, len) {
        return false;
    }

    // No run-on: nothing directly before the start or after the end
    let (dr, dc) = direction.delta();
    let (end_row, end_col) = direction.advance(row, col, len - 1);
    if grid.is_occupied(row - dr, col - dc) || grid.is_occupied(end_row + dr, end_col + dc) {
        return false;
    }

    let (pr, pc) = direction.perpendicular();
    for (i, letter) in word.chars().enumerate() {
        let (r, c) = direction.advance(row, col, i);
        match grid.get(r, c) {
            Some(existing) if existing != letter => return false,
            Some(_) => (),
            None => {
                // A new letter must not touch a parallel word
                if grid.is_occupied(r + pr, c + pc) || grid.is_occupied(r - pr, c - pc) {
                    return false;
                }
            }
        }
    }
    true
}

/// Whether the word can be written at the given position without touching any other letter.
pub fn can_place_isolated(
    grid: &Grid,
    word: &str,
    row: isize,
    col: isize,
    direction: Direction,
) -> bool {
    let len: usize = word.chars().count();
    if !grid.fits(row, col, direction, len) {
        return false;
    }

    for i in 0..len {
        let (r, c) = direction.advance(row, col, i);
        if grid.is_occupied(r, c) {
            return false;
        }
        for neighbor in Direction::ALL {
            let (nr, nc) = neighbor.advance(r, c, 1);
            if grid.is_occupied(nr, nc) {
                return false;
            }
        }
    }
    true
}

/// Number of letters of the word that fall on occupied cells.
///
/// Call this only for placements that the validator accepted: the letters then match.
pub fn count_intersections(
    grid: &Grid,
    word: &str,
    row: isize,
    col: isize,
    direction: Direction,
) -> usize {
    (0..word.chars().count())
        .filter(|i| {
            let (r, c) = direction.advance(row, col, *i);
            grid.is_occupied(r, c)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_cat() -> Grid {
        let mut grid = Grid::new(7);
        grid.place("CAT", 3, 2, Direction::Right);
        grid
    }

    #[test]
    fn crossing_on_a_matching_letter() {
        let grid = grid_with_cat();
        // "BAT" down through the A of CAT
        assert!(can_place(&grid, "BAT", 2, 3, Direction::Down));
        assert_eq!(count_intersections(&grid, "BAT", 2, 3, Direction::Down), 1);
    }

    #[test]
    fn mismatched_crossing_is_rejected() {
        let grid = grid_with_cat();
        assert!(!can_place(&grid, "DOG", 2, 3, Direction::Down));
    }

    #[test]
    fn run_on_is_rejected() {
        let grid = grid_with_cat();
        // "SUN" starting right after CAT would read "CATSUN"
        assert!(!can_place(&grid, "SUN", 3, 5, Direction::Right));
        // "AN" ending right before CAT would read "ANCAT"
        assert!(!can_place(&grid, "AN", 3, 0, Direction::Right));
    }

    #[test]
    fn parallel_touching_is_rejected() {
        let grid = grid_with_cat();
        // "DOG" just below CAT
        assert!(!can_place(&grid, "DOG", 4, 2, Direction::Right));
        // Two rows below is fine
        assert!(can_place(&grid, "DOG", 5, 2, Direction::Right));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let grid = Grid::new(5);
        assert!(!can_place(&grid, "ELEPHANT", 0, 0, Direction::Right));
        assert!(!can_place(&grid, "CAT", 0, 3, Direction::Right));
        assert!(!can_place(&grid, "CAT", -1, 0, Direction::Down));
        assert!(can_place(&grid, "CAT", 0, 2, Direction::Right));
    }

    #[test]
    fn diagonal_uses_rotated_neighbors() {
        let mut grid = Grid::new(7);
        grid.place("OWL", 1, 0, Direction::DownRight);
        // Parallel diagonal just beside OWL
        assert!(!can_place(&grid, "EMU", 0, 1, Direction::DownRight));
        // Diagonal crossing on W
        assert!(can_place(&grid, "AWE", 1, 2, Direction::DownLeft));
    }

    #[test]
    fn isolated_never_touches() {
        let grid = grid_with_cat();
        assert!(!can_place_isolated(&grid, "BAT", 2, 3, Direction::Down));
        assert!(!can_place_isolated(&grid, "DOG", 4, 3, Direction::Right));
        assert!(!can_place_isolated(&grid, "DOG", 0, 5, Direction::Down));
        assert!(can_place_isolated(&grid, "DOG", 5, 2, Direction::Right));
    }

    #[test]
    fn policy_accepts_intersection_counts() {
        let crossword = PlacementPolicy::crossword();
        assert!(crossword.accepts(0, true));
        assert!(!crossword.accepts(0, false));
        assert!(crossword.accepts(2, false));
        assert!(!crossword.accepts(3, false));

        let isolated = PlacementPolicy::isolated(Level::Easy);
        assert!(isolated.accepts(0, false));
        assert!(!isolated.accepts(1, false));
    }
}
