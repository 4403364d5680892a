/*
crossword.rs

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

//! Generate a crossword.
//!
//! The longest word is written across the middle of the grid. The other words, longest first,
//! are attached one at a time at the best crossing position:
//!
//! 1. the position that grows the bounding box the least,
//! 2. then the position with the fewest crossings,
//! 3. then the position closest to the center of the grid.
//!
//! A word that cannot cross the words already in the grid is dropped, so the puzzle always stays
//! in one piece. The whole process is run several times with a new word order, and the best
//! result is kept (most words, then smallest area). When words are still missing, the grid is
//! enlarged and the process starts again.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

use super::direction::Direction;
use super::grid::{Bounds, Grid};
use super::numbering::{ClueList, compute_numbers};
use super::placement::Placement;
use super::validator::{can_place, count_intersections};
use super::word::{GridSize, Word, WordEntry, normalize_entries};

/// Number of complete placement runs per grid size.
pub const MAX_ATTEMPTS: usize = 60;

/// Number of times the grid is enlarged when words are missing.
pub const SIZE_GROWTH_ROUNDS: usize = 4;

/// Number of rows and columns added at each enlargement.
pub const SIZE_STEP: usize = 2;

/// Shortest word accepted in a crossword.
pub const MIN_WORD_LEN: usize = 3;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum CrosswordError {
    /// No word left after normalization.
    #[error("no usable word in the list")]
    NoWords,

    /// The longest word does not fit in the grid.
    #[error("could not build puzzle: {word} does not fit in a {size}x{size} grid")]
    UnplaceableSeed { word: String, size: usize },

    /// Some words could not be placed, even in the largest grid.
    #[error("could not build puzzle: only {placed} of {requested} words placed, try other words or a larger size")]
    GenerationExhausted { placed: usize, requested: usize },
}

/// Crossword parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrosswordConfig {
    /// Words shorter than that, after normalization, are discarded.
    pub min_word_len: usize,

    /// Number of complete placement runs per grid size.
    pub max_attempts: usize,

    /// Number of times the grid is enlarged when words are missing.
    pub size_growth_rounds: usize,

    /// Number of rows and columns added at each enlargement.
    pub size_step: usize,

    /// Minimum number of crossings for each word but the first.
    pub min_intersections: usize,

    /// Maximum number of crossings for each word.
    pub max_intersections: usize,

    /// Whether a puzzle that misses words is an error.
    pub require_all_words: bool,
}

impl Default for CrosswordConfig {
    fn default() -> Self {
        Self {
            min_word_len: MIN_WORD_LEN,
            max_attempts: MAX_ATTEMPTS,
            size_growth_rounds: SIZE_GROWTH_ROUNDS,
            size_step: SIZE_STEP,
            min_intersections: 1,
            max_intersections: 2,
            require_all_words: false,
        }
    }
}

/// Candidate position for a word.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub row: isize,
    pub col: isize,
    pub direction: Direction,

    /// Number of crossings.
    pub hits: usize,

    /// Sort key: bounding box growth, crossings, doubled distance to the center.
    score: (usize, usize, usize),
}

/// Generated crossword.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrosswordPuzzle {
    /// Size of the square grid the puzzle was built in.
    pub size: usize,

    /// Cells trimmed to the bounding box, row by row. `None` is a block.
    pub grid: Vec<Vec<Option<char>>>,

    /// Words, in placement order, with coordinates relative to the trimmed grid.
    pub placements: Vec<Placement>,

    /// Bounding box of the words in the square grid.
    pub bounds: Bounds,

    /// Words that could not be placed.
    #[serde(default)]
    pub dropped: Vec<String>,

    /// Number of words after normalization.
    pub requested: usize,
}

impl CrosswordPuzzle {
    pub fn width(&self) -> usize {
        self.bounds.width()
    }

    pub fn height(&self) -> usize {
        self.bounds.height()
    }

    /// Whether all the words were placed.
    pub fn is_complete(&self) -> bool {
        self.placements.len() == self.requested
    }

    /// Clue number of each cell.
    pub fn numbers(&self) -> Vec<Vec<Option<usize>>> {
        compute_numbers(&self.grid)
    }

    /// Across and down clues.
    pub fn clues(&self) -> ClueList {
        ClueList::new(&self.placements, &self.numbers())
    }

    /// Whether `self` is a better result than `other`: more words, then smaller area.
    fn is_better_than(&self, other: &CrosswordPuzzle) -> bool {
        self.placements.len() > other.placements.len()
            || (self.placements.len() == other.placements.len()
                && self.bounds.area() < other.bounds.area())
    }
}

/// Return the best crossing position for the word, or `None` if the word cannot cross the
/// words already in the grid.
///
/// Every occupied cell is tried, in row-major order, against every matching letter of the word,
/// in both directions. Ties keep the first candidate found.
pub fn find_best_placement(
    grid: &Grid,
    word: &str,
    min_intersections: usize,
    max_intersections: usize,
) -> Option<Candidate> {
    let bounds: Bounds = grid.bounds()?;
    let size: isize = grid.size() as isize;
    let len: usize = word.chars().count();
    let mut best: Option<Candidate> = None;

    for ((r, c), letter) in grid.letters() {
        for (i, _) in word.chars().enumerate().filter(|(_, l)| *l == letter) {
            for direction in Direction::ACROSS_DOWN {
                let (dr, dc) = direction.delta();
                let i: isize = i as isize;
                let (row, col) = (r as isize - dr * i, c as isize - dc * i);
                if !can_place(grid, word, row, col, direction) {
                    continue;
                }
                let hits: usize = count_intersections(grid, word, row, col, direction);
                if hits < min_intersections || hits > max_intersections {
                    continue;
                }
                let Some(span) = Bounds::of_span(row, col, direction, len) else {
                    continue;
                };
                let growth: usize = bounds.union(&span).area() - bounds.area();
                let distance: usize = ((2 * row - size).abs() + (2 * col - size).abs()) as usize;
                let score = (growth, hits, distance);
                if best.is_none_or(|b| score < b.score) {
                    best = Some(Candidate {
                        row,
                        col,
                        direction,
                        hits,
                        score,
                    });
                }
            }
        }
    }
    best
}

/// [`Crossword`] object.
pub struct Crossword<R: Rng> {
    /// Parameters.
    pub config: CrosswordConfig,

    /// Number of placement runs during the last generation.
    pub iteration: usize,

    /// Size of the grid of the returned puzzle.
    pub final_size: usize,

    /// Duration in seconds of the last generation.
    pub duration: f32,

    /// Random source, used to shuffle the words between runs.
    rng: R,
}

impl Crossword<StdRng> {
    /// Create the object with a random source seeded by the operating system.
    pub fn new(config: CrosswordConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create the object with a reproducible random source.
    pub fn with_seed(config: CrosswordConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Crossword<R> {
    /// Create the object with the given random source.
    pub fn with_rng(config: CrosswordConfig, rng: R) -> Self {
        Self {
            config,
            iteration: 0,
            final_size: 0,
            duration: 0.0,
            rng,
        }
    }

    /// Generate a crossword from the given entries.
    ///
    /// # Errors
    ///
    /// The method returns an error when no entry survives normalization, or when the longest word
    /// does not fit in the requested grid. When [`CrosswordConfig::require_all_words`] is set, it
    /// also returns an error if some words are still missing after all the grid enlargements.
    pub fn generate(
        &mut self,
        entries: &[WordEntry],
        size: GridSize,
    ) -> Result<CrosswordPuzzle, CrosswordError> {
        let start: Instant = Instant::now();
        self.iteration = 0;

        let words: Vec<Word> = normalize_entries(entries, self.config.min_word_len);
        let Some(longest) = words.iter().max_by_key(|w| w.len()) else {
            return Err(CrosswordError::NoWords);
        };
        let mut size: usize = size.resolve(&words);
        if longest.len() > size {
            return Err(CrosswordError::UnplaceableSeed {
                word: longest.answer.clone(),
                size,
            });
        }

        let mut best: Option<CrosswordPuzzle> = None;
        for round in 0..=self.config.size_growth_rounds {
            if round > 0 {
                size += self.config.size_step;
                debug!("Growing the grid to {size}x{size}");
            }
            for _ in 0..self.config.max_attempts {
                self.iteration += 1;
                let Some(puzzle) = self.attempt(&words, size) else {
                    continue;
                };
                if best.as_ref().is_none_or(|b| puzzle.is_better_than(b)) {
                    best = Some(puzzle);
                }
                if best.as_ref().is_some_and(|b| b.is_complete()) {
                    break;
                }
            }
            if best.as_ref().is_some_and(|b| b.is_complete()) {
                break;
            }
        }
        self.duration = start.elapsed().as_secs_f32();

        let Some(puzzle) = best else {
            return Err(CrosswordError::UnplaceableSeed {
                word: longest.answer.clone(),
                size,
            });
        };
        self.final_size = puzzle.size;
        info!(
            "Crossword {}x{}: {} of {} words, {} runs",
            puzzle.width(),
            puzzle.height(),
            puzzle.placements.len(),
            puzzle.requested,
            self.iteration
        );

        if !puzzle.is_complete() {
            warn!("Could not place {}", puzzle.dropped.join(", "));
            if self.config.require_all_words {
                return Err(CrosswordError::GenerationExhausted {
                    placed: puzzle.placements.len(),
                    requested: puzzle.requested,
                });
            }
        }
        Ok(puzzle)
    }

    /// Run the placement once, with a new word order.
    fn attempt(&mut self, words: &[Word], size: usize) -> Option<CrosswordPuzzle> {
        let mut order: Vec<&Word> = words.iter().collect();
        order.shuffle(&mut self.rng);
        order.sort_by(|a, b| b.len().cmp(&a.len()));

        let seed: &Word = order.first()?;
        if seed.len() > size {
            return None;
        }

        let mut grid: Grid = Grid::new(size);
        let row: usize = size / 2;
        let col: usize = (size - seed.len()) / 2;
        grid.place(&seed.answer, row as isize, col as isize, Direction::Right);
        let mut placements: Vec<Placement> = vec![Placement::new(
            &seed.answer,
            Some(seed.clue.as_str()),
            row,
            col,
            Direction::Right,
        )];
        let mut dropped: Vec<String> = Vec::new();

        for word in order.iter().skip(1) {
            match find_best_placement(
                &grid,
                &word.answer,
                self.config.min_intersections,
                self.config.max_intersections,
            ) {
                Some(c) => {
                    grid.place(&word.answer, c.row, c.col, c.direction);
                    placements.push(Placement::new(
                        &word.answer,
                        Some(word.clue.as_str()),
                        c.row as usize,
                        c.col as usize,
                        c.direction,
                    ));
                }
                None => dropped.push(word.answer.clone()),
            }
        }

        let bounds: Bounds = grid.bounds()?;
        Some(CrosswordPuzzle {
            size,
            grid: grid.trimmed(&bounds),
            placements: placements
                .iter()
                .map(|p| p.shifted(bounds.min_row, bounds.min_col))
                .collect(),
            bounds,
            dropped,
            requested: words.len(),
        })
    }
}
