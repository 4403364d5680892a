/*
puzzle.rs

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

//! Export generated puzzles.
//!
//! The exported object is a [`PuzzleExport`] serialized in JSON format by using [`serde`].
//! Crossword exports also carry the clue numbers and the clue lists, so that a renderer does not
//! need to compute them.

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use super::SaverError;
use crate::config::{PKGNAME, VERSION};
use crate::generator::numbering::ClueList;
use crate::session::Puzzle;

/// Exported puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleExport {
    /// Name and version of the program that generated the puzzle.
    pub generator: String,

    /// Generation date, RFC 3339 format.
    pub created: String,

    /// Seed of the random source, if the puzzle can be generated again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    pub puzzle: Puzzle,

    /// Crossword clue numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbers: Option<Vec<Vec<Option<usize>>>>,

    /// Crossword clues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clues: Option<ClueList>,
}

impl PuzzleExport {
    /// Create a [`PuzzleExport`] object for the puzzle, dated now.
    pub fn new(puzzle: Puzzle, seed: Option<u64>) -> Self {
        let now: DateTime<Local> = Local::now();
        let (numbers, clues) = match &puzzle {
            Puzzle::Crossword(p) => (Some(p.numbers()), Some(p.clues())),
            Puzzle::WordSearch(_) => (None, None),
        };
        Self {
            generator: format!("{PKGNAME} {VERSION}"),
            created: now.to_rfc3339(),
            seed,
            puzzle,
            numbers,
            clues,
        }
    }

    /// Write the object in JSON format.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }
}

/// Puzzle file.
pub struct SaverPuzzle {
    /// Path to the JSON file.
    path: PathBuf,
}

impl SaverPuzzle {
    /// Create a [`SaverPuzzle`] object.
    pub fn new(path: PathBuf) -> Self {
        debug!("Puzzle file: {path:?}");
        Self { path }
    }

    fn io_error(&self, source: std::io::Error) -> SaverError {
        SaverError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> SaverError {
        SaverError::Json {
            path: self.path.clone(),
            source,
        }
    }

    /// Save the provided [`PuzzleExport`] object.
    pub fn save(&self, export: &PuzzleExport) -> Result<(), SaverError> {
        let file: File = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        export
            .write_to(&mut writer)
            .map_err(|e| self.json_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;
        Ok(())
    }

    /// Read a previously saved puzzle.
    pub fn load(&self) -> Result<PuzzleExport, SaverError> {
        let file: File = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let reader: BufReader<File> = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| self.json_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::crossword::{Crossword, CrosswordConfig};
    use crate::generator::word::{GridSize, WordEntry};
    use std::env;

    #[test]
    fn save_and_load() {
        let entries = vec![
            WordEntry::with_clue("planet", "Orbits a star"),
            WordEntry::with_clue("moon", "Orbits a planet"),
        ];
        let puzzle = Crossword::with_seed(CrosswordConfig::default(), 5)
            .generate(&entries, GridSize::Auto)
            .unwrap();
        let export = PuzzleExport::new(Puzzle::Crossword(puzzle), Some(5));
        assert!(export.clues.is_some());

        let mut path: PathBuf = env::temp_dir();
        path.push(format!("wordgrid-test-{}.json", std::process::id()));
        let saver = SaverPuzzle::new(path.clone());
        saver.save(&export).unwrap();
        let loaded = saver.load().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, export);
    }
}
