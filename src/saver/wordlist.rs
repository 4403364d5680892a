/*
wordlist.rs

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

//! Load word lists from JSON files.
//!
//! Three layouts are accepted:
//!
//! * A word database: `{"wordDatabase": [{"word": "CAT", "level": 1, "tags": ["animals"]}]}`
//! * Themes: `{"themes": {"animals": ["cat", "dog"]}}`
//! * A plain list of words or entries: `["cat", {"word": "dog", "clue": "Barks"}]`

use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use super::SaverError;
use crate::generator::word::WordEntry;

/// Item of a plain list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Item {
    Word(String),
    Entry(WordEntry),
}

impl From<Item> for WordEntry {
    fn from(item: Item) -> Self {
        match item {
            Item::Word(w) => WordEntry::new(&w),
            Item::Entry(e) => e,
        }
    }
}

/// Accepted file layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum Layout {
    Database {
        #[serde(rename = "wordDatabase")]
        word_database: Vec<WordEntry>,
    },
    Themes {
        themes: BTreeMap<String, Vec<String>>,
    },
    List(Vec<Item>),
}

/// Parse a JSON word list.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<WordEntry>, serde_json::Error> {
    let layout: Layout = serde_json::from_reader(reader)?;
    Ok(match layout {
        Layout::Database { word_database } => word_database,
        Layout::Themes { themes } => themes
            .into_iter()
            .flat_map(|(theme, words)| {
                words.into_iter().map(move |w| WordEntry {
                    word: w,
                    tags: vec![theme.clone()],
                    ..Default::default()
                })
            })
            .collect(),
        Layout::List(items) => items.into_iter().map(WordEntry::from).collect(),
    })
}

/// Word list file.
pub struct WordListFile {
    /// Path to the JSON file.
    path: PathBuf,
}

impl WordListFile {
    /// Create a [`WordListFile`] object.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the entries of the file.
    pub fn load(&self) -> Result<Vec<WordEntry>, SaverError> {
        let file: File = File::open(&self.path).map_err(|source| SaverError::Io {
            path: self.path.clone(),
            source,
        })?;
        let entries: Vec<WordEntry> =
            from_reader(BufReader::new(file)).map_err(|source| SaverError::Json {
                path: self.path.clone(),
                source,
            })?;
        debug!("{} entries read from {:?}", entries.len(), self.path);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_three_layouts() {
        let db = r#"{"wordDatabase": [{"word": "CAT", "level": 1, "tags": ["animals"]},
                                      {"word": "PEAR", "clue": "Fruit"}]}"#;
        let entries = from_reader(db.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Some(1));
        assert!(entries[0].has_tag("Animals"));
        assert_eq!(entries[1].clue.as_deref(), Some("Fruit"));

        let themes = r#"{"themes": {"space": ["moon", "star"], "sea": ["fish"]}}"#;
        let entries = from_reader(themes.as_bytes()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].word, "fish");
        assert_eq!(entries[0].tags, vec!["sea"]);

        let list = r#"["cat", {"answer": "dog", "clue": "Barks"}]"#;
        let entries = from_reader(list.as_bytes()).unwrap();
        assert_eq!(entries[0], WordEntry::new("cat"));
        assert_eq!(entries[1], WordEntry::with_clue("dog", "Barks"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let file = WordListFile::new(PathBuf::from("/nonexistent/wordgrid/words.json"));
        assert!(matches!(file.load(), Err(SaverError::Io { .. })));
    }

    #[test]
    fn invalid_content_is_rejected() {
        assert!(from_reader("{\"words\": 3}".as_bytes()).is_err());
    }
}
