/*
common/mod.rs

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

//! Word lists shared by the integration tests.

#![allow(dead_code)]

use wordgrid::generator::word::WordEntry;

pub const ANIMALS: [&str; 12] = [
    "elephant", "giraffe", "monkey", "tiger", "zebra", "rabbit", "parrot", "turtle", "camel",
    "otter", "koala", "penguin",
];

pub const SPACE: [(&str, &str); 8] = [
    ("planet", "Earth is one"),
    ("comet", "Icy visitor with a tail"),
    ("rocket", "It flies to space"),
    ("orbit", "Path around a star"),
    ("galaxy", "Billions of stars"),
    ("moon", "Night light"),
    ("astronaut", "Space traveler"),
    ("meteor", "Shooting star"),
];

pub fn words(list: &[&str]) -> Vec<WordEntry> {
    list.iter().map(|w| WordEntry::new(w)).collect()
}

pub fn clued(list: &[(&str, &str)]) -> Vec<WordEntry> {
    list.iter().map(|(w, c)| WordEntry::with_clue(w, c)).collect()
}
