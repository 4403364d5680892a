/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Build a word search from a list of words:
//!
//! ```
//! $ wordgrid -w "cat, dog, horse, rabbit, parrot" -l 1 -n 10
//! ```
//!
//! Build a crossword from the "space" theme of a word file, and save it in JSON format:
//!
//! ```
//! $ wordgrid -x -f words.json -t space --seed 42 -j -o space.json
//! ```
//!
//! Measure the generation time over a hundred puzzles:
//!
//! ```
//! $ wordgrid -x -f words.json -c 100 -s > /dev/null
//! ```

use clap::Parser;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use wordgrid::config::{COPYRIGHT_NOTICE, DEFAULT_MAX_WORDS};
use wordgrid::generator::crossword::{Crossword, CrosswordConfig};
use wordgrid::generator::level::Level;
use wordgrid::generator::word::{
    GridSize, WordEntry, parse_clued_lines, parse_word_list, select_words, themes,
};
use wordgrid::generator::word_search::{WordSearch, WordSearchConfig};
use wordgrid::render;
use wordgrid::saver::puzzle::{PuzzleExport, SaverPuzzle};
use wordgrid::saver::wordlist::WordListFile;
use wordgrid::session::{Puzzle, PuzzleSession};

/// Smallest grid accepted on the command line.
const MIN_SIZE: i64 = 3;

/// Largest grid accepted on the command line.
const MAX_SIZE: i64 = 200;

/// Generate word search and crossword puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Build a crossword instead of a word search
    #[arg(short = 'x', long, default_value_t = false)]
    crossword: bool,

    /// Comma, semicolon, or newline separated words. For crosswords, "ANSWER - clue" lines are
    /// also accepted
    #[arg(short, long, group = "source")]
    words: Option<String>,

    /// JSON word list
    #[arg(short = 'f', long, group = "source")]
    word_file: Option<PathBuf>,

    /// Theme to pick the words from in the word list
    #[arg(short, long, requires = "word_file")]
    theme: Option<String>,

    /// List the themes of the word list
    #[arg(long, default_value_t = false, requires = "word_file")]
    list_themes: bool,

    /// Number of rows and columns, from 3 to 200. Computed from the words when not provided
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u16).range(MIN_SIZE..=MAX_SIZE))]
    size: Option<u16>,

    /// Difficulty level
    #[arg(value_enum, short, long, default_value_t = Level::Hard)]
    level: Level,

    /// Words never touch each other (word search only)
    #[arg(short, long, default_value_t = false)]
    isolated: bool,

    /// Maximum number of words picked from the word list
    #[arg(short, long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Seed for the random source, to generate the same puzzles again
    #[arg(long)]
    seed: Option<u64>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Show the answers
    #[arg(short, long, default_value_t = false)]
    answers: bool,

    /// Print the puzzles in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Write the JSON output to this file
    #[arg(short, long, requires = "json")]
    output: Option<PathBuf>,

    /// Fail when some words cannot be placed
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Generation statistics.
#[derive(Default)]
struct Stats {
    total: f32,
    max: f32,
    iterations: usize,
    errors: usize,
    dropped: usize,
}

impl Stats {
    fn add(&mut self, duration: f32, iterations: usize) {
        self.total += duration;
        if duration > self.max {
            self.max = duration;
        }
        self.iterations += iterations;
    }
}

/// Return the entries from the command line or from the word list.
fn load_entries(args: &Args, rng: &mut StdRng) -> Result<Vec<WordEntry>, String> {
    if let Some(text) = &args.words {
        return Ok(if args.crossword && text.contains(" - ") {
            parse_clued_lines(text)
        } else {
            parse_word_list(text)
        });
    }
    let Some(path) = &args.word_file else {
        return Err("No words: use --words or --word-file".to_string());
    };
    let entries: Vec<WordEntry> = WordListFile::new(path.clone())
        .load()
        .map_err(|e| e.to_string())?;
    Ok(select_words(
        &entries,
        args.theme.as_deref(),
        args.level,
        args.max_words,
        rng,
    ))
}

/// Output path for the puzzle at the given index.
fn output_path(path: &Path, index: usize, count: usize) -> PathBuf {
    if count <= 1 {
        return path.to_path_buf();
    }
    let stem: String = path
        .file_stem()
        .map_or_else(|| "puzzle".to_string(), |s| s.to_string_lossy().into_owned());
    let mut p: PathBuf = path.to_path_buf();
    p.set_file_name(format!("{stem}-{}.json", index + 1));
    p
}

/// Generate one puzzle and update the statistics.
fn generate(
    args: &Args,
    entries: &[WordEntry],
    seed: Option<u64>,
    stats: &mut Stats,
) -> Option<Puzzle> {
    let size: GridSize = args
        .size
        .map_or(GridSize::Auto, |n| GridSize::Fixed(n as usize));

    if args.crossword {
        let config = CrosswordConfig {
            require_all_words: args.strict,
            ..CrosswordConfig::default()
        };
        let mut generator = match seed {
            Some(s) => Crossword::with_seed(config, s),
            None => Crossword::new(config),
        };
        let ret = generator.generate(entries, size);
        stats.add(generator.duration, generator.iteration);
        match ret {
            Ok(p) => {
                stats.dropped += p.dropped.len();
                Some(Puzzle::Crossword(p))
            }
            Err(e) => {
                eprintln!("Error: {e}");
                None
            }
        }
    } else {
        let config: WordSearchConfig = if args.isolated {
            WordSearchConfig::isolated(args.level)
        } else {
            WordSearchConfig::for_level(args.level)
        };
        let mut generator = match seed {
            Some(s) => WordSearch::with_seed(config, s),
            None => WordSearch::new(config),
        };
        let ret = generator.generate(entries, size);
        stats.add(generator.duration, generator.iteration);
        match ret {
            Ok(p) if args.strict && !p.dropped.is_empty() => {
                eprintln!(
                    "Error: could not place {}, try other words or a larger size",
                    p.dropped.join(", ")
                );
                None
            }
            Ok(p) => {
                stats.dropped += p.dropped.len();
                Some(Puzzle::WordSearch(p))
            }
            Err(e) => {
                eprintln!("Error: {e}");
                None
            }
        }
    }
}

/// Print or save the puzzle.
fn output(args: &Args, puzzle: Puzzle, index: usize, seed: Option<u64>) -> Result<(), String> {
    if args.json {
        let export: PuzzleExport = PuzzleExport::new(puzzle, seed);
        return match &args.output {
            Some(path) => SaverPuzzle::new(output_path(path, index, args.count))
                .save(&export)
                .map_err(|e| e.to_string()),
            None => {
                let mut stdout = io::stdout().lock();
                export.write_to(&mut stdout).map_err(|e| e.to_string())?;
                writeln!(stdout).map_err(|e| e.to_string())
            }
        };
    }

    let dropped: Vec<String> = match &puzzle {
        Puzzle::WordSearch(p) => p.dropped.clone(),
        Puzzle::Crossword(p) => p.dropped.clone(),
    };
    let mut session: PuzzleSession = PuzzleSession::new();
    session.set_puzzle(puzzle);
    session.show_answers = args.answers;

    if args.count > 1 {
        println!("Puzzle {}\n", index + 1);
    }
    println!("{}", render::puzzle(&session));
    if !dropped.is_empty() {
        eprintln!("Could not place: {}", dropped.join(", "));
    }
    Ok(())
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut rng: StdRng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    //
    // List the themes
    //
    if args.list_themes {
        if let Some(path) = &args.word_file {
            match WordListFile::new(path.clone()).load() {
                Ok(entries) => themes(&entries).iter().for_each(|t| println!("{t}")),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            }
        }
        return 0;
    }

    let entries: Vec<WordEntry> = match load_entries(&args, &mut rng) {
        Ok(e) => e,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return 2;
        }
    };
    debug!("{} entries selected", entries.len());

    //
    // Generate the puzzles
    //
    let mut stats: Stats = Stats::default();
    for i in 0..args.count {
        let seed: Option<u64> = args.seed.map(|s| s.wrapping_add(i as u64));
        let Some(puzzle) = generate(&args, &entries, seed, &mut stats) else {
            stats.errors += 1;
            continue;
        };
        if let Err(msg) = output(&args, puzzle, i, seed) {
            eprintln!("Error: {msg}");
            return 1;
        }
    }
    if stats.dropped > 0 {
        warn!("{} words dropped in total", stats.dropped);
    }

    // Print some stats
    if args.summary {
        let count: usize = args.count.max(1);
        eprintln!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
     dropped words = {}
            errors = {}",
            stats.total,
            stats.total / count as f32,
            stats.max,
            stats.iterations / count,
            stats.dropped,
            stats.errors
        );
    }

    if stats.errors == args.count && args.count > 0 {
        1
    } else {
        0
    }
}
