/*
word.rs

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

//! Words and clues given to the placers.
//!
//! A [`WordEntry`] is what a caller provides: a raw word, an optional clue, and an optional level.
//! Before placement, entries are normalized into [`Word`] objects: uppercase ASCII letters only,
//! with a minimum length.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::level::Level;

/// Smallest grid produced by [`GridSize::Auto`].
const MIN_AUTO_SIZE: usize = 10;

/// Letters that are harder to find for children. Each one adds to the complexity score.
const RARE_LETTERS: [char; 6] = ['J', 'K', 'Q', 'V', 'X', 'Z'];

/// Word entry provided by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WordEntry {
    /// Raw word. It can contain spaces, punctuation, or lowercase letters.
    #[serde(alias = "answer")]
    pub word: String,

    /// Crossword clue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,

    /// Difficulty level of the word (1 to 3). Computed from the word when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    /// Themes the word belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl WordEntry {
    /// Create an entry without clue.
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            ..Default::default()
        }
    }

    /// Create an entry with a clue.
    pub fn with_clue(word: &str, clue: &str) -> Self {
        Self {
            word: word.to_string(),
            clue: Some(clue.to_string()),
            ..Default::default()
        }
    }

    /// Whether the entry belongs to the theme. The comparison ignores the case.
    pub fn has_tag(&self, theme: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(theme))
    }

    /// Level of the entry, or the level computed from its complexity score.
    pub fn level(&self) -> Level {
        match self.level {
            Some(l) => Level::from_number(l),
            None => complexity_level(&self.word).unwrap_or(Level::Hard),
        }
    }
}

/// Normalized word, ready for placement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    /// Uppercase A-Z letters only.
    pub answer: String,

    /// Clue text. Defaults to "N letters" when the entry has no clue.
    pub clue: String,
}

impl Word {
    /// Normalize the entry. Return `None` if fewer than `min_len` letters remain.
    pub fn from_entry(entry: &WordEntry, min_len: usize) -> Option<Self> {
        let answer: String = normalize(&entry.word);
        if answer.is_empty() || answer.len() < min_len {
            debug!("Discarding word {:?}: too short after normalization", entry.word);
            return None;
        }
        let clue: String = match &entry.clue {
            Some(c) if !c.trim().is_empty() => c.trim().to_string(),
            _ => default_clue(&answer),
        };
        Some(Self { answer, clue })
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

/// Requested grid size.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GridSize {
    /// Compute the size from the words. See [`auto_size`].
    #[default]
    Auto,

    /// Fixed number of rows and columns.
    Fixed(usize),
}

impl GridSize {
    /// Return the number of rows and columns for the given words.
    pub fn resolve(self, words: &[Word]) -> usize {
        match self {
            GridSize::Auto => auto_size(words),
            GridSize::Fixed(n) => n,
        }
    }
}

/// Uppercase the string and strip everything that is not an A-Z letter.
pub fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Clue used when an entry has none.
pub fn default_clue(answer: &str) -> String {
    format!("{} letters", answer.len())
}

/// Normalize the entries, drop the ones that are too short, and remove duplicated answers.
///
/// The order of the remaining words is preserved.
pub fn normalize_entries(entries: &[WordEntry], min_len: usize) -> Vec<Word> {
    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .filter_map(|e| Word::from_entry(e, min_len))
        .filter(|w| seen.insert(w.answer.clone()))
        .collect()
}

/// Default grid size: `max(10, longest + 2, ceil(sqrt(count)) * 4)`.
pub fn auto_size(words: &[Word]) -> usize {
    let longest: usize = words.iter().map(|w| w.len()).max().unwrap_or(0);
    let by_count: usize = (words.len() as f64).sqrt().ceil() as usize * 4;
    MIN_AUTO_SIZE.max(longest + 2).max(by_count)
}

/// Complexity score of a word: its length plus 1.5 for each rare letter.
///
/// Returns `None` if the trimmed word contains anything else than letters.
pub fn complexity_score(word: &str) -> Option<f32> {
    let clean: String = word.trim().to_uppercase();
    if clean.is_empty() || !clean.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let rare: usize = clean.chars().filter(|c| RARE_LETTERS.contains(c)).count();
    Some(clean.len() as f32 + 1.5 * rare as f32)
}

/// Difficulty level of a word, from its complexity score.
///
/// * Score below 6: [`Level::Easy`] (simple, short words).
/// * Score below 9: [`Level::Medium`] (standard vocabulary).
/// * Otherwise: [`Level::Hard`] (long or complex words).
pub fn complexity_level(word: &str) -> Option<Level> {
    let score: f32 = complexity_score(word)?;
    Some(if score >= 9.0 {
        Level::Hard
    } else if score >= 6.0 {
        Level::Medium
    } else {
        Level::Easy
    })
}

/// Sorted list of the themes found in the entries.
pub fn themes(entries: &[WordEntry]) -> Vec<String> {
    let mut themes: Vec<String> = entries
        .iter()
        .flat_map(|e| e.tags.iter().map(|t| t.to_lowercase()))
        .collect();
    themes.sort_unstable();
    themes.dedup();
    themes
}

/// Select at most `max_words` entries at or below the given level, in random order.
///
/// When `theme` is provided, only the entries with that tag are considered. If none of them is
/// at or below the level, the level is ignored. Entries are deduplicated on their normalized
/// word.
pub fn select_words<R: Rng>(
    entries: &[WordEntry],
    theme: Option<&str>,
    level: Level,
    max_words: usize,
    rng: &mut R,
) -> Vec<WordEntry> {
    let in_theme: Vec<&WordEntry> = entries
        .iter()
        .filter(|e| theme.is_none_or(|t| e.has_tag(t)))
        .collect();
    let mut candidates: Vec<&WordEntry> =
        in_theme.iter().copied().filter(|e| e.level() <= level).collect();
    if candidates.is_empty() {
        debug!("No word at level {level}, ignoring the level");
        candidates = in_theme;
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    let mut selection: Vec<WordEntry> = candidates
        .into_iter()
        .filter(|e| seen.insert(normalize(&e.word)))
        .cloned()
        .collect();
    selection.shuffle(rng);
    selection.truncate(max_words);
    selection
}

/// Split a comma, semicolon, or newline separated list of words.
pub fn parse_word_list(text: &str) -> Vec<WordEntry> {
    text.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(WordEntry::new)
        .collect()
}

/// Parse `ANSWER - clue` lines. Lines without a clue produce entries without clue.
pub fn parse_clued_lines(text: &str) -> Vec<WordEntry> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter_map(|line| {
            let mut parts = line.split(" - ");
            let answer: &str = parts.next()?.trim();
            if answer.is_empty() {
                return None;
            }
            let clue: String = parts.map(str::trim).collect::<Vec<&str>>().join(" - ");
            Some(if clue.is_empty() {
                WordEntry::new(answer)
            } else {
                WordEntry::with_clue(answer, &clue)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn normalize_strips_and_uppercases() {
        assert_eq!(normalize("ice-cream!"), "ICECREAM");
        assert_eq!(normalize("T. rex"), "TREX");
        assert_eq!(normalize("123"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for w in ["Polar Bear", "x-ray", "ABC", "élan", "dog's"] {
            let once: String = normalize(w);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn from_entry_enforces_min_len_and_default_clue() {
        assert!(Word::from_entry(&WordEntry::new("ox"), 3).is_none());
        assert!(Word::from_entry(&WordEntry::new("!!!"), 1).is_none());
        let w: Word = Word::from_entry(&WordEntry::new("cat"), 3).unwrap();
        assert_eq!(w.answer, "CAT");
        assert_eq!(w.clue, "3 letters");
        let w: Word = Word::from_entry(&WordEntry::with_clue("Cat", " Purrs "), 3).unwrap();
        assert_eq!(w.clue, "Purrs");
    }

    #[test]
    fn normalize_entries_drops_duplicates() {
        let entries = vec![
            WordEntry::new("cat"),
            WordEntry::new("CAT"),
            WordEntry::new("dog"),
            WordEntry::new("ox"),
        ];
        let words: Vec<String> = normalize_entries(&entries, 3)
            .into_iter()
            .map(|w| w.answer)
            .collect();
        assert_eq!(words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn auto_size_formula() {
        let words: Vec<Word> = normalize_entries(&[WordEntry::new("cat")], 3);
        assert_eq!(auto_size(&words), 10);

        let long: Vec<Word> = normalize_entries(&[WordEntry::new("hippopotamuses")], 3);
        assert_eq!(auto_size(&long), 16);

        let many: Vec<WordEntry> = (0..17)
            .map(|i| WordEntry::new(&format!("word{}", "abcdefghijklmnopq".as_bytes()[i] as char)))
            .collect();
        assert_eq!(auto_size(&normalize_entries(&many, 3)), 20);
    }

    #[test]
    fn complexity_levels() {
        assert_eq!(complexity_level("cat"), Some(Level::Easy));
        assert_eq!(complexity_level("rabbit"), Some(Level::Medium));
        assert_eq!(complexity_level("zebra"), Some(Level::Medium));
        assert_eq!(complexity_level("crocodile"), Some(Level::Hard));
        assert_eq!(complexity_level("ice cream"), None);
    }

    #[test]
    fn select_words_filters_level_and_caps() {
        let entries = vec![
            WordEntry::new("cat"),
            WordEntry::new("dog"),
            WordEntry::new("Dog"),
            WordEntry::new("crocodile"),
            WordEntry { word: "emu".into(), level: Some(3), ..Default::default() },
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked: Vec<String> = select_words(&entries, None, Level::Easy, 10, &mut rng)
            .into_iter()
            .map(|e| normalize(&e.word))
            .collect();
        picked.sort();
        assert_eq!(picked, vec!["CAT", "DOG"]);

        assert_eq!(select_words(&entries, None, Level::Hard, 2, &mut rng).len(), 2);
    }

    #[test]
    fn select_words_by_theme() {
        let tagged = |w: &str, tag: &str| WordEntry {
            word: w.into(),
            tags: vec![tag.into()],
            ..Default::default()
        };
        let entries = vec![
            tagged("crocodile", "Animals"),
            tagged("hippopotamus", "animals"),
            tagged("pear", "fruits"),
        ];
        assert_eq!(themes(&entries), vec!["animals", "fruits"]);

        let mut rng = StdRng::seed_from_u64(8);
        // No easy animal: the level is ignored
        let picked = select_words(&entries, Some("animals"), Level::Easy, 10, &mut rng);
        assert_eq!(picked.len(), 2);
        let picked = select_words(&entries, Some("fruits"), Level::Easy, 10, &mut rng);
        assert_eq!(picked[0].word, "pear");
    }

    #[test]
    fn parse_lists() {
        let words = parse_word_list("cat, dog;fish\n\n bird ");
        assert_eq!(words.len(), 4);
        assert_eq!(words[3].word, "bird");

        let clued = parse_clued_lines("CAT - Purrs\nDOG\nEMU - Big - flightless bird");
        assert_eq!(clued[0].clue.as_deref(), Some("Purrs"));
        assert_eq!(clued[1].clue, None);
        assert_eq!(clued[2].clue.as_deref(), Some("Big - flightless bird"));
    }
}
