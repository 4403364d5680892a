/*
level.rs

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

//! Puzzle difficulty level.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Difficulty level, from 1 (young children) to 3 (age 10 and more).
///
/// The level selects the word search directions and caps the complexity of the words picked
/// from a word list.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(u8)]
pub enum Level {
    #[value(name = "1", alias = "easy")]
    Easy = 1,
    #[value(name = "2", alias = "medium")]
    Medium = 2,
    #[default]
    #[value(name = "3", alias = "hard")]
    Hard = 3,
}

impl Level {
    /// Return the level for a number, clamping values outside of the 1-3 range.
    pub fn from_number(n: u8) -> Self {
        Level::from_repr(n.clamp(1, 3)).unwrap_or_default()
    }

    /// Numeric value of the level.
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Level::Easy => write!(f, "Easy"),
            Level::Medium => write!(f, "Medium"),
            Level::Hard => write!(f, "Hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_number_clamps() {
        assert_eq!(Level::from_number(0), Level::Easy);
        assert_eq!(Level::from_number(2), Level::Medium);
        assert_eq!(Level::from_number(9), Level::Hard);
        assert_eq!(Level::Medium.number(), 2);
    }
}
