/*
direction.rs

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

//! Directions in which a word can run through the grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::level::Level;

/// The eight compass directions.
///
/// Crosswords only use [`Direction::Right`] (across) and [`Direction::Down`] (down).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// All the directions, orthogonal first.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Across and down. Words never run backward or diagonally in a crossword.
    pub const ACROSS_DOWN: [Direction; 2] = [Direction::Right, Direction::Down];

    /// Return the `(dr, dc)` unit vector.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Move `steps` cells from the given position.
    pub fn advance(self, row: isize, col: isize, steps: usize) -> (isize, isize) {
        let (dr, dc) = self.delta();
        let steps: isize = steps as isize;
        (row + dr * steps, col + dc * steps)
    }

    /// Unit vector perpendicular to the direction (rotated by a quarter turn).
    ///
    /// The two cells beside a letter are at `+perpendicular` and `-perpendicular`.
    pub fn perpendicular(self) -> (isize, isize) {
        let (dr, dc) = self.delta();
        (-dc, dr)
    }

    /// Whether the direction is across (left to right).
    pub fn is_across(self) -> bool {
        self == Direction::Right
    }

    /// Directions a word search may use at the given level.
    ///
    /// * [`Level::Easy`]: right and down, so words are never read backward.
    /// * [`Level::Medium`]: right, down, and the down-right diagonal.
    /// * [`Level::Hard`]: all eight directions.
    pub fn for_level(level: Level) -> Vec<Direction> {
        match level {
            Level::Easy => vec![Direction::Right, Direction::Down],
            Level::Medium => vec![Direction::Right, Direction::Down, Direction::DownRight],
            Level::Hard => Self::ALL.to_vec(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "across"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Up => write!(f, "up"),
            Direction::DownRight => write!(f, "down-right"),
            Direction::DownLeft => write!(f, "down-left"),
            Direction::UpRight => write!(f, "up-right"),
            Direction::UpLeft => write!(f, "up-left"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filters_directions() {
        assert_eq!(Direction::for_level(Level::Easy).len(), 2);
        assert_eq!(
            Direction::for_level(Level::Medium),
            vec![Direction::Right, Direction::Down, Direction::DownRight]
        );
        assert_eq!(Direction::for_level(Level::Hard).len(), 8);
    }

    #[test]
    fn perpendicular_of_across_is_vertical() {
        assert_eq!(Direction::Right.perpendicular(), (-1, 0));
        assert_eq!(Direction::Down.perpendicular(), (0, 1));
    }
}
