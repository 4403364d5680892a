/*
cleanliness.rs

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

//! Verify a filled word search grid.
//!
//! Random filler letters can spell words by accident. A grid is rejected when:
//!
//! * a run of letters, in any of the eight directions, spells a blocklisted term, or
//! * a word from the word list can be found more than once. The player would otherwise find an
//!   answer twice.
//!
//! An occurrence is identified by its two end cells, so a palindrome read in both directions is
//! only counted once. When the placed letters are known, runs made only of placed letters are
//! ignored: the placed word itself, or a target spelled inside another one (CAT in CATERPILLAR).
//! Any target that goes through a filler letter is then a duplicate.

use log::debug;
use std::collections::{BTreeMap, HashSet};

use super::direction::Direction;
use super::grid::{Cell, Grid};

/// Shortest run of letters that is checked.
const MIN_RUN: usize = 3;

/// Terms that must not appear in a children's puzzle.
pub const BLOCKLIST: [&str; 35] = [
    "ASS", "DAMN", "HELL", "FUCK", "SHIT", "CUNT", "DICK", "PISS", "TITS", "BOOB", "COCK", "BALLS",
    "BUTT", "POOP", "PEE", "SEX", "PORN", "NAZI", "KKK", "RAPE", "KILL", "DIE", "DEAD", "BOMB",
    "GUN", "DRUG", "WEED", "CRACK", "HEROIN", "METH", "COCAINE", "ALCOHOL", "BEER", "WINE",
    "BOOZE",
];

/// Result of the grid verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to report.
    Clean,

    /// The grid spells the given blocklisted term.
    Blocked(String),

    /// The given word from the word list appears more than once.
    Duplicate(String),
}

impl Verdict {
    pub fn is_clean(&self) -> bool {
        *self == Verdict::Clean
    }
}

/// Grid verification for a given word list.
#[derive(Debug, Clone)]
pub struct Cleanliness {
    /// Words of the puzzle, normalized.
    targets: HashSet<String>,

    /// Forbidden terms.
    blocklist: HashSet<String>,

    /// Longest run worth reading.
    max_len: usize,
}

impl Cleanliness {
    /// Create a [`Cleanliness`] object for the given normalized words and the default blocklist.
    pub fn new(words: &[String]) -> Self {
        let mut obj = Self {
            targets: words.iter().cloned().collect(),
            blocklist: HashSet::new(),
            max_len: 0,
        };
        obj.set_blocklist(&BLOCKLIST);
        obj
    }

    /// Replace the blocklist.
    pub fn set_blocklist(&mut self, terms: &[&str]) {
        self.blocklist = terms.iter().map(|t| t.to_uppercase()).collect();
        self.max_len = self
            .targets
            .iter()
            .chain(self.blocklist.iter())
            .map(|w| w.len())
            .max()
            .unwrap_or(0);
    }

    /// Verify the letters of a filled grid.
    ///
    /// When `fixed` is provided, it holds the letters of the placed words. Runs made only of
    /// placed letters are then ignored, because drawing new filler letters cannot remove them,
    /// and a single target word going through a filler letter is reported. Without `fixed`, a
    /// target word must be found twice to be reported.
    pub fn check(&self, letters: &[Vec<char>], fixed: Option<&Grid>) -> Verdict {
        let rows: isize = letters.len() as isize;
        let cols: isize = letters.first().map_or(0, |r| r.len()) as isize;
        let inside = |r: isize, c: isize| r >= 0 && c >= 0 && r < rows && c < cols;

        let threshold: usize = if fixed.is_some() { 0 } else { 1 };

        // Occurrences of each target word, keyed by their sorted end cells
        let mut found: BTreeMap<String, HashSet<(Cell, Cell)>> = BTreeMap::new();

        for r in 0..rows {
            for c in 0..cols {
                for direction in Direction::ALL {
                    let mut run: String = String::with_capacity(self.max_len);
                    let mut all_fixed: bool = true;
                    let (mut rr, mut cc) = (r, c);
                    while inside(rr, cc) && run.len() < self.max_len {
                        run.push(letters[rr as usize][cc as usize]);
                        all_fixed &= fixed.is_some_and(|g| g.is_occupied(rr, cc));
                        if run.len() >= MIN_RUN {
                            if self.blocklist.contains(&run) && !all_fixed {
                                debug!("Blocklisted {run} at ({r}, {c}) {direction}");
                                return Verdict::Blocked(run);
                            }
                            if self.targets.contains(&run) && !all_fixed {
                                let start: Cell = (r as usize, c as usize);
                                let end: Cell = (rr as usize, cc as usize);
                                found
                                    .entry(run.clone())
                                    .or_default()
                                    .insert((start.min(end), start.max(end)));
                            }
                        }
                        (rr, cc) = direction.advance(rr, cc, 1);
                    }
                }
            }
        }

        match found.into_iter().find(|(_, occurrences)| occurrences.len() > threshold) {
            Some((word, occurrences)) => {
                debug!("{word} found {} times", occurrences.len());
                Verdict::Duplicate(word)
            }
            None => Verdict::Clean,
        }
    }
}

/// Whether the filled grid is free of blocklisted terms and duplicated words.
pub fn check_grid(letters: &[Vec<char>], words: &[String]) -> bool {
    Cleanliness::new(words).check(letters, None).is_clean()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_letters(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|r| r.chars().collect()).collect()
    }

    #[test]
    fn accidental_duplicate_is_rejected() {
        let letters = to_letters(&["CATXY", "QRSTU", "VWXYZ", "TACJK", "LMNOP"]);
        let words: Vec<String> = vec!["CAT".to_string()];
        assert!(!check_grid(&letters, &words));
        assert_eq!(
            Cleanliness::new(&words).check(&letters, None),
            Verdict::Duplicate("CAT".to_string())
        );
    }

    #[test]
    fn single_occurrence_is_clean() {
        let letters = to_letters(&["CATXY", "QRSTU", "VWXYZ", "JJJJK", "LMNOP"]);
        assert!(check_grid(&letters, &["CAT".to_string()]));
    }

    #[test]
    fn palindrome_counts_once() {
        let letters = to_letters(&["POPXY", "QRSTU", "VWXYZ"]);
        assert!(check_grid(&letters, &["POP".to_string()]));
    }

    #[test]
    fn blocklisted_diagonal_is_rejected() {
        let letters = to_letters(&["GXXX", "XUXX", "XXNX", "XXXX"]);
        assert_eq!(
            Cleanliness::new(&[]).check(&letters, None),
            Verdict::Blocked("GUN".to_string())
        );
    }

    #[test]
    fn blocklisted_run_inside_placed_words_is_ignored() {
        let mut grid = Grid::new(5);
        grid.place("SHELL", 0, 0, Direction::Right);
        let letters = to_letters(&["SHELL", "ABCJQ", "ABCJQ", "ABCJQ", "ABCJQ"]);
        let words: Vec<String> = vec!["SHELL".to_string()];

        let checker = Cleanliness::new(&words);
        assert!(!checker.check(&letters, None).is_clean());
        assert!(checker.check(&letters, Some(&grid)).is_clean());
    }

    #[test]
    fn target_inside_another_target_is_ignored() {
        let mut grid = Grid::new(11);
        grid.place("CATERPILLAR", 0, 0, Direction::Right);
        grid.place("CAT", 0, 0, Direction::Down);
        grid.place("RAT", 4, 0, Direction::Right);
        let words: Vec<String> = ["CATERPILLAR", "CAT", "RAT"].map(String::from).to_vec();
        let checker = Cleanliness::new(&words);

        let mut rows: Vec<String> = vec!["CATERPILLAR".to_string()];
        rows.extend(["AQQQQQQQQQQ", "TQQQQQQQQQQ", "QQQQQQQQQQQ", "RATQQQQQQQQ"].map(String::from));
        rows.extend(std::iter::repeat_n("QQQQQQQQQQQ".to_string(), 6));
        let mut letters: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        assert!(checker.check(&letters, Some(&grid)).is_clean());

        // Filler letters spelling RAT a second time
        letters[7][4] = 'R';
        letters[7][5] = 'A';
        letters[7][6] = 'T';
        assert_eq!(
            checker.check(&letters, Some(&grid)),
            Verdict::Duplicate("RAT".to_string())
        );
    }
}
