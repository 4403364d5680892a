/*
word_search_test.rs

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

//! Word search generation over many seeds.

mod common;

use std::collections::HashMap;

use wordgrid::generator::cleanliness::{Cleanliness, check_grid};
use wordgrid::generator::direction::Direction;
use wordgrid::generator::grid::{Cell, Grid};
use wordgrid::generator::level::Level;
use wordgrid::generator::word::{GridSize, normalize};
use wordgrid::generator::word_search::{WordSearch, WordSearchConfig, WordSearchPuzzle};

/// Verify that the hidden words are in the grid and that crossings share a letter.
fn verify(puzzle: &WordSearchPuzzle, level: Level) {
    let allowed: Vec<Direction> = Direction::for_level(level);
    let mut letters: HashMap<Cell, char> = HashMap::new();

    for p in &puzzle.placements {
        assert!(allowed.contains(&p.direction) || p.direction == Direction::Right);
        for ((r, c), l) in p.letters() {
            assert_eq!(puzzle.grid[r][c], l);
            if let Some(previous) = letters.insert((r, c), l) {
                assert_eq!(previous, l);
            }
        }
    }
    assert_eq!(puzzle.grid.len(), puzzle.size);
    assert!(puzzle.grid.iter().all(|row| row.len() == puzzle.size));
    assert!(puzzle.grid.iter().flatten().all(|c| c.is_ascii_uppercase()));

    // In a clean grid, filler letters never spell a word
    if puzzle.clean {
        let mut placed = Grid::new(puzzle.size);
        for p in &puzzle.placements {
            assert!(placed.place(&p.answer, p.row as isize, p.col as isize, p.direction));
        }
        let words: Vec<String> = puzzle.placements.iter().map(|p| p.answer.clone()).collect();
        let mut duplicates = Cleanliness::new(&words);
        duplicates.set_blocklist(&[]);
        assert!(duplicates.check(&puzzle.grid, Some(&placed)).is_clean());
    }
}

#[test]
fn generated_grids_hold_the_words() {
    let entries = common::words(&common::ANIMALS);
    for level in [Level::Easy, Level::Medium, Level::Hard] {
        for seed in 0..10 {
            let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(level), seed);
            let puzzle = ws.generate(&entries, GridSize::Auto).unwrap();
            assert_eq!(puzzle.placements.len() + puzzle.dropped.len(), entries.len());
            verify(&puzzle, level);
        }
    }
}

#[test]
fn words_cross_at_most_twice() {
    let entries = common::words(&common::ANIMALS);
    for seed in 0..10 {
        let puzzle = WordSearch::with_seed(WordSearchConfig::for_level(Level::Hard), seed)
            .generate(&entries, GridSize::Fixed(12))
            .unwrap();
        let mut owners: HashMap<Cell, usize> = HashMap::new();
        for (k, p) in puzzle.placements.iter().enumerate() {
            let shared: usize = p.cells().iter().filter(|c| owners.contains_key(c)).count();
            if k > 0 {
                assert!((1..=2).contains(&shared), "{} shares {shared} cells", p.answer);
            }
            for cell in p.cells() {
                owners.entry(cell).or_insert(k);
            }
        }
    }
}

#[test]
fn isolated_words_do_not_touch() {
    let entries = common::words(&["cat", "dog", "owl", "emu", "yak", "bee", "ant"]);
    for seed in 0..10 {
        let puzzle = WordSearch::with_seed(WordSearchConfig::isolated(Level::Hard), seed)
            .generate(&entries, GridSize::Fixed(12))
            .unwrap();
        for (i, a) in puzzle.placements.iter().enumerate() {
            for b in puzzle.placements.iter().skip(i + 1) {
                for (ra, ca) in a.cells() {
                    for (rb, cb) in b.cells() {
                        assert!(ra.abs_diff(rb) > 1 || ca.abs_diff(cb) > 1);
                    }
                }
            }
        }
        verify(&puzzle, Level::Hard);
    }
}

#[test]
fn accidental_second_occurrence_is_detected() {
    let grid: Vec<Vec<char>> = ["QCATQ", "QQQQQ", "TQQQQ", "AQQQQ", "CQQQQ"]
        .iter()
        .map(|r| r.chars().collect())
        .collect();
    assert!(!check_grid(&grid, &["CAT".to_string()]));
    assert!(check_grid(&grid, &["DOG".to_string()]));
}

#[test]
fn normalization_is_idempotent() {
    for w in common::ANIMALS {
        let once: String = normalize(w);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn word_inside_another_word_is_not_a_duplicate() {
    let entries = common::words(&["caterpillar", "cat", "rat"]);
    for seed in 0..30 {
        let mut ws = WordSearch::with_seed(WordSearchConfig::for_level(Level::Hard), seed);
        let puzzle = ws.generate(&entries, GridSize::Auto).unwrap();
        assert!(puzzle.clean, "seed {seed}: {} refills", ws.refills);
        verify(&puzzle, Level::Hard);
    }
}
