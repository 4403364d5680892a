/*
letter_fill.rs

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

//! Random filler letters for word searches.
//!
//! Letters are drawn following their frequency in English text, so that the filler looks like
//! the hidden words and does not give them away.

use rand::Rng;

use super::grid::Grid;

/// Relative frequency of the letters A to Z in English text, in percent.
const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.12, 1.54, 2.71, 4.32, 12.02, 2.30, 1.73, 5.92, 7.31, 0.23, 0.87, 3.98, 2.61, 6.95, 7.68,
    1.66, 0.14, 6.02, 6.28, 9.10, 2.88, 1.06, 2.11, 0.06, 2.11, 0.23,
];

/// Weighted letter distribution.
#[derive(Debug, Clone)]
pub struct LetterFill {
    /// Cumulative distribution, from the weight of A up to 1.0 for Z.
    cumulative: [f64; 26],
}

impl Default for LetterFill {
    fn default() -> Self {
        Self::english()
    }
}

impl LetterFill {
    /// Distribution of the letters in English text.
    pub fn english() -> Self {
        Self::from_weights(&ENGLISH_FREQUENCIES)
    }

    /// Build the distribution from 26 weights, A to Z. Weights do not need to sum to one.
    pub fn from_weights(weights: &[f64; 26]) -> Self {
        let total: f64 = weights.iter().sum();
        let mut cumulative: [f64; 26] = [0.0; 26];
        let mut sum: f64 = 0.0;
        for (i, w) in weights.iter().enumerate() {
            sum += w;
            cumulative[i] = if total > 0.0 {
                sum / total
            } else {
                (i + 1) as f64 / 26.0
            };
        }
        Self { cumulative }
    }

    /// Draw a letter.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        let draw: f64 = rng.random::<f64>();
        let index: usize = self
            .cumulative
            .iter()
            .position(|c| draw < *c)
            .unwrap_or(25);
        (b'A' + index as u8) as char
    }

    /// Return the letters of the grid with every empty cell filled with a random letter.
    ///
    /// The grid itself is not modified, so the fill can be drawn again.
    pub fn fill<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Vec<Vec<char>> {
        grid.filled_with(|| self.sample(rng))
    }
}
