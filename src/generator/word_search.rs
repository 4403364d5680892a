/*
word_search.rs

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

//! Generate a word search.
//!
//! The longest word is written across the middle of the grid. Each remaining word, longest first,
//! is then tried at random positions and in random directions until the validator accepts it.
//! Words that cannot be placed are dropped. The empty cells are filled with random letters and the
//! result is verified: the fill is drawn again when it spells a blocklisted term or a second copy
//! of a word.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;
use thiserror::Error;

use super::cleanliness::{Cleanliness, Verdict};
use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::letter_fill::LetterFill;
use super::level::Level;
use super::placement::Placement;
use super::validator::{PlacementPolicy, count_intersections};
use super::word::{GridSize, Word, WordEntry, normalize_entries};

/// Number of times the direction of a word is drawn.
pub const OUTER_ATTEMPTS: usize = 150;

/// Number of random positions tried for each drawn direction.
pub const POSITION_SAMPLES: usize = 30;

/// Number of trials per word when words must not touch.
pub const ISOLATED_TRIALS: usize = 500;

/// Number of new letter fills when the grid is not clean.
pub const REFILL_RETRIES: usize = 10;

/// Shortest word accepted in a word search.
pub const MIN_WORD_LEN: usize = 3;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum WordSearchError {
    /// No word left after normalization.
    #[error("no usable word in the list")]
    NoWords,

    /// The longest word does not fit in the grid.
    #[error("the word {word} does not fit in a {size}x{size} grid")]
    SeedTooLong { word: String, size: usize },
}

/// Word search parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordSearchConfig {
    /// Difficulty level.
    pub level: Level,

    /// Placement rules.
    pub policy: PlacementPolicy,

    /// Words shorter than that, after normalization, are discarded.
    pub min_word_len: usize,

    /// Number of times a direction is drawn for a word.
    pub outer_attempts: usize,

    /// Number of positions tried for each drawn direction.
    pub position_samples: usize,

    /// Number of new letter fills before accepting a grid that is not clean.
    pub refill_retries: usize,
}

impl Default for WordSearchConfig {
    fn default() -> Self {
        Self::for_level(Level::default())
    }
}

impl WordSearchConfig {
    /// Words may cross each other. Directions depend on the level.
    pub fn for_level(level: Level) -> Self {
        Self {
            level,
            policy: PlacementPolicy::word_search(level),
            min_word_len: MIN_WORD_LEN,
            outer_attempts: OUTER_ATTEMPTS,
            position_samples: POSITION_SAMPLES,
            refill_retries: REFILL_RETRIES,
        }
    }

    /// Words never touch each other.
    pub fn isolated(level: Level) -> Self {
        Self {
            level,
            policy: PlacementPolicy::isolated(level),
            min_word_len: MIN_WORD_LEN,
            outer_attempts: ISOLATED_TRIALS,
            position_samples: 1,
            refill_retries: REFILL_RETRIES,
        }
    }
}

/// Generated word search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordSearchPuzzle {
    /// Number of rows and columns.
    pub size: usize,

    /// Letters, row by row. Every cell holds a letter.
    pub grid: Vec<Vec<char>>,

    /// Hidden words, in placement order.
    pub placements: Vec<Placement>,

    /// Words that could not be placed.
    #[serde(default)]
    pub dropped: Vec<String>,

    /// Whether the letter fill passed the verification.
    pub clean: bool,
}

impl WordSearchPuzzle {
    /// Words the player must find, sorted alphabetically.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.placements.iter().map(|p| p.answer.as_str()).collect();
        words.sort_unstable();
        words
    }

    /// Cells that belong to a hidden word.
    pub fn answer_cells(&self) -> HashSet<Cell> {
        self.placements.iter().flat_map(|p| p.cells()).collect()
    }
}

/// [`WordSearch`] object.
pub struct WordSearch<R: Rng> {
    /// Parameters.
    pub config: WordSearchConfig,

    /// Number of position trials during the last generation.
    pub iteration: usize,

    /// Number of new letter fills during the last generation.
    pub refills: usize,

    /// Duration in seconds of the last generation.
    pub duration: f32,

    /// Random source.
    rng: R,

    /// Filler letter distribution.
    fill: LetterFill,
}

impl WordSearch<StdRng> {
    /// Create the object with a random source seeded by the operating system.
    pub fn new(config: WordSearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create the object with a reproducible random source.
    pub fn with_seed(config: WordSearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WordSearch<R> {
    /// Create the object with the given random source.
    pub fn with_rng(config: WordSearchConfig, rng: R) -> Self {
        Self {
            config,
            iteration: 0,
            refills: 0,
            duration: 0.0,
            rng,
            fill: LetterFill::english(),
        }
    }

    /// Generate a word search from the given entries.
    ///
    /// # Errors
    ///
    /// The method returns an error when no entry survives normalization, or when the longest word
    /// is longer than the grid. Words that cannot be placed are not errors: they are listed in
    /// [`WordSearchPuzzle::dropped`].
    pub fn generate(
        &mut self,
        entries: &[WordEntry],
        size: GridSize,
    ) -> Result<WordSearchPuzzle, WordSearchError> {
        let start: Instant = Instant::now();
        self.iteration = 0;
        self.refills = 0;

        let mut words: Vec<Word> = normalize_entries(entries, self.config.min_word_len);
        if words.is_empty() {
            return Err(WordSearchError::NoWords);
        }
        let size: usize = size.resolve(&words);

        // Random order, then longest first: words of the same length stay shuffled
        words.shuffle(&mut self.rng);
        words.sort_by(|a, b| b.len().cmp(&a.len()));

        let seed: &Word = &words[0];
        if seed.len() > size {
            return Err(WordSearchError::SeedTooLong {
                word: seed.answer.clone(),
                size,
            });
        }

        let mut grid: Grid = Grid::new(size);
        let row: usize = size / 2;
        let col: usize = (size - seed.len()) / 2;
        grid.place(&seed.answer, row as isize, col as isize, Direction::Right);
        let mut placements: Vec<Placement> =
            vec![Placement::new(&seed.answer, None, row, col, Direction::Right)];
        let mut dropped: Vec<String> = Vec::new();

        for word in words.iter().skip(1) {
            match self.place_word(&mut grid, word) {
                Some(p) => placements.push(p),
                None => {
                    warn!("Could not place {}", word.answer);
                    dropped.push(word.answer.clone());
                }
            }
        }
        grid.debug();

        let placed: Vec<String> = placements.iter().map(|p| p.answer.clone()).collect();
        let (letters, clean) = self.fill_grid(&grid, &placed);

        self.duration = start.elapsed().as_secs_f32();
        info!(
            "Word search {size}x{size}: {} placed, {} dropped, {} refills, {} trials",
            placements.len(),
            dropped.len(),
            self.refills,
            self.iteration
        );
        Ok(WordSearchPuzzle {
            size,
            grid: letters,
            placements,
            dropped,
            clean,
        })
    }

    /// Try random positions for the word and write it at the first acceptable one.
    fn place_word(&mut self, grid: &mut Grid, word: &Word) -> Option<Placement> {
        let size: usize = grid.size();
        let directions: &[Direction] = &self.config.policy.allowed_directions;
        if directions.is_empty() || size == 0 {
            return None;
        }

        for _ in 0..self.config.outer_attempts {
            let direction: Direction = directions[self.rng.random_range(0..directions.len())];
            for _ in 0..self.config.position_samples {
                self.iteration += 1;
                let row: usize = self.rng.random_range(0..size);
                let col: usize = self.rng.random_range(0..size);
                let (r, c) = (row as isize, col as isize);

                if !self
                    .config
                    .policy
                    .can_place(grid, &word.answer, r, c, direction)
                {
                    continue;
                }
                let hits: usize = count_intersections(grid, &word.answer, r, c, direction);
                if !self.config.policy.accepts(hits, false) {
                    continue;
                }

                debug!(
                    "{} at ({row}, {col}) {direction}, {hits} intersection(s)",
                    word.answer
                );
                grid.place(&word.answer, r, c, direction);
                return Some(Placement::new(&word.answer, None, row, col, direction));
            }
        }
        None
    }

    /// Fill the empty cells and verify the result, drawing new letters when needed.
    ///
    /// Returns the letters and whether they passed the verification.
    fn fill_grid(&mut self, grid: &Grid, words: &[String]) -> (Vec<Vec<char>>, bool) {
        let checker: Cleanliness = Cleanliness::new(words);
        let mut letters: Vec<Vec<char>> = self.fill.fill(grid, &mut self.rng);

        loop {
            match checker.check(&letters, Some(grid)) {
                Verdict::Clean => return (letters, true),
                verdict => {
                    if self.refills >= self.config.refill_retries {
                        warn!("Could not generate clean grid ({verdict:?})");
                        return (letters, false);
                    }
                    debug!("Drawing new letters ({verdict:?})");
                    self.refills += 1;
                    letters = self.fill.fill(grid, &mut self.rng);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words.iter().map(|w| WordEntry::new(w)).collect()
    }

    #[test]
    fn seed_is_centered() {
        let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(Level::Easy), 1);
        let puzzle = ws
            .generate(&entries(&["elephant"]), GridSize::Fixed(10))
            .unwrap();
        let seed = &puzzle.placements[0];
        assert_eq!((seed.row, seed.col, seed.direction), (5, 1, Direction::Right));
        let row: String = puzzle.grid[5][1..9].iter().collect();
        assert_eq!(row, "ELEPHANT");
    }

    fn only(letters: &[(char, f64)]) -> LetterFill {
        let mut weights: [f64; 26] = [0.0; 26];
        for (l, w) in letters {
            weights[(*l as u8 - b'A') as usize] = *w;
        }
        LetterFill::from_weights(&weights)
    }

    #[test]
    fn dirty_fill_stops_after_the_retries() {
        // Every filler letter extends the placed AAA
        let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(Level::Easy), 3);
        ws.fill = only(&[('A', 1.0)]);
        let puzzle = ws.generate(&entries(&["aaa"]), GridSize::Fixed(5)).unwrap();
        assert_eq!(ws.refills, REFILL_RETRIES);
        assert!(!puzzle.clean);

        let config = WordSearchConfig {
            refill_retries: 0,
            ..WordSearchConfig::for_level(Level::Easy)
        };
        let mut ws = WordSearch::with_seed(config, 3);
        ws.fill = only(&[('A', 1.0)]);
        let puzzle = ws.generate(&entries(&["aaa"]), GridSize::Fixed(5)).unwrap();
        assert_eq!(ws.refills, 0);
        assert!(!puzzle.clean);
    }

    #[test]
    fn clean_fill_is_kept() {
        let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(Level::Easy), 3);
        ws.fill = only(&[('Q', 1.0)]);
        let puzzle = ws.generate(&entries(&["aaa"]), GridSize::Fixed(5)).unwrap();
        assert_eq!(ws.refills, 0);
        assert!(puzzle.clean);
        assert_eq!(puzzle.grid[0], vec!['Q'; 5]);
    }

    #[test]
    fn dirty_fill_is_drawn_again() {
        let mut repaired: usize = 0;
        for seed in 0..40 {
            let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(Level::Easy), seed);
            ws.fill = only(&[('A', 1.0), ('Q', 9.0)]);
            let puzzle = ws.generate(&entries(&["aaa"]), GridSize::Fixed(5)).unwrap();
            assert!(ws.refills <= REFILL_RETRIES);
            if puzzle.clean {
                let checker = Cleanliness::new(&["AAA".to_string()]);
                let mut grid = Grid::new(5);
                grid.place("AAA", 2, 1, Direction::Right);
                assert!(checker.check(&puzzle.grid, Some(&grid)).is_clean());
                if ws.refills > 0 {
                    repaired += 1;
                }
            }
        }
        assert!(repaired > 0);
    }

    #[test]
    fn target_inside_another_target_keeps_the_grid_clean() {
        let words = entries(&["caterpillar", "cat", "rat"]);
        for seed in 0..30 {
            let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(Level::Hard), seed);
            ws.fill = only(&[('Q', 1.0)]);
            let puzzle = ws.generate(&words, GridSize::Auto).unwrap();
            assert!(puzzle.clean, "seed {seed}");
            assert_eq!(ws.refills, 0, "seed {seed}");
        }
    }

    #[test]
    fn errors() {
        let mut ws = WordSearch::with_seed(WordSearchConfig::default(), 2);
        assert_eq!(
            ws.generate(&entries(&["!!", "ox"]), GridSize::Auto),
            Err(WordSearchError::NoWords)
        );
        assert_eq!(
            ws.generate(&entries(&["hippopotamus"]), GridSize::Fixed(5)),
            Err(WordSearchError::SeedTooLong {
                word: "HIPPOPOTAMUS".to_string(),
                size: 5
            })
        );
    }

    #[test]
    fn every_word_is_placed_or_dropped() {
        let words = entries(&["giraffe", "lion", "tiger", "zebra", "camel", "otter", "panda"]);
        for seed in 0..20 {
            let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(Level::Hard), seed);
            let puzzle = ws.generate(&words, GridSize::Auto).unwrap();
            assert_eq!(puzzle.placements.len() + puzzle.dropped.len(), words.len());
            assert!(puzzle.grid.iter().flatten().all(|c| c.is_ascii_uppercase()));
            for p in &puzzle.placements {
                for ((r, c), letter) in p.letters() {
                    assert_eq!(puzzle.grid[r][c], letter);
                }
            }
        }
    }

    #[test]
    fn easy_level_only_uses_right_and_down() {
        let words = entries(&["apple", "pear", "plum", "grape", "lemon", "melon"]);
        for seed in 0..10 {
            let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(Level::Easy), seed);
            let puzzle = ws.generate(&words, GridSize::Fixed(12)).unwrap();
            assert!(
                puzzle
                    .placements
                    .iter()
                    .all(|p| Direction::ACROSS_DOWN.contains(&p.direction))
            );
        }
    }

    #[test]
    fn isolated_words_never_share_cells() {
        let words = entries(&["cat", "dog", "owl", "emu", "yak", "bee"]);
        for seed in 0..10 {
            let mut ws = WordSearch::with_seed(WordSearchConfig::isolated(Level::Medium), seed);
            let puzzle = ws.generate(&words, GridSize::Fixed(12)).unwrap();
            let mut seen: HashSet<Cell> = HashSet::new();
            for p in &puzzle.placements {
                for cell in p.cells() {
                    assert!(seen.insert(cell), "cell {cell:?} shared");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let words = entries(&["river", "stone", "cloud", "storm"]);
        let a = WordSearch::with_seed(WordSearchConfig::default(), 42)
            .generate(&words, GridSize::Auto)
            .unwrap();
        let b = WordSearch::with_seed(WordSearchConfig::default(), 42)
            .generate(&words, GridSize::Auto)
            .unwrap();
        assert_eq!(a, b);
    }
}
