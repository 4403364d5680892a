/*
generator.rs

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

//! Place words in a grid to build word searches and crosswords.
//!
//! The caller provides a list of [`word::WordEntry`] objects and a [`word::GridSize`].
//! Entries are normalized into [`word::Word`] objects (uppercase letters only) before placement.
//!
//! Both placers write words into a [`grid::Grid`] and ask the [`validator`] module whether a
//! position is legal. The rules are grouped in a [`validator::PlacementPolicy`] object:
//! allowed directions, intersection limits, and whether words may touch each other.
//!
//! * A word search is built by a [`word_search::WordSearch`] object.
//!   Words are tried at random positions, the empty cells are filled with random letters by
//!   [`letter_fill::LetterFill`], and the result is verified by
//!   [`cleanliness::Cleanliness`].
//!   Use the [`word_search::WordSearch::generate`] method to get a
//!   [`word_search::WordSearchPuzzle`] object.
//!
//! * A crossword is built by a [`crossword::Crossword`] object.
//!   Each word is attached at the best crossing position found by
//!   [`crossword::find_best_placement`].
//!   Use the [`crossword::Crossword::generate`] method to get a
//!   [`crossword::CrosswordPuzzle`] object, and the [`numbering`] module for the clue numbers.
//!
//! Generators own their random source. Create them with a seed to get reproducible puzzles.

pub mod cleanliness;
pub mod crossword;
pub mod direction;
pub mod grid;
pub mod letter_fill;
pub mod level;
pub mod numbering;
pub mod placement;
pub mod validator;
pub mod word;
pub mod word_search;
