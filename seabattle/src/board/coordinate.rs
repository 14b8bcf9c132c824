// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! The coordinates of a cell on the board and their letter-number text form.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use regex::Regex;

use crate::{
    board::ParseCoordinateError,
    config::{BOARD_SIZE, CELL_COUNT},
};

/// Letter naming the first row.
const BASE_LETTER: u8 = b'A';

/// Pattern for a single cell, without anchors. Shared with the placement grammar.
pub(crate) const COORD_PATTERN: &str = "[A-J](?:10|[1-9])";

/// Matcher for a complete coordinate.
static COORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i)^{}$", COORD_PATTERN)).unwrap());

/// Axes along which two coordinates can line up.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Axis {
    /// Both coordinates are in the same row.
    Row = 0b01,
    /// Both coordinates are in the same column.
    Column = 0b10,
}

/// The coordinates of a cell on the 10x10 board. Rows are lettered `A` through `J` and
/// columns numbered `1` through `10`, so `Coordinate::new(1, 4)` is `B5`.
///
/// A `Coordinate` can only be built in bounds, so every value addresses a real cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Zero-based row, `A` is 0.
    row: usize,
    /// Zero-based column, `1` is 0.
    col: usize,
}

impl Coordinate {
    /// Construct the [`Coordinate`] at the given zero-based `row` and `col`. Returns `None`
    /// if either is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Zero-based row of this cell.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column of this cell.
    pub fn col(self) -> usize {
        self.col
    }

    /// Position of this cell in a row-major array of the board.
    pub(crate) fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Convert a row-major index back into a [`Coordinate`]. Panics if `idx` is not
    /// less than [`CELL_COUNT`].
    pub(crate) fn from_index(idx: usize) -> Self {
        assert!(idx < CELL_COUNT, "cell index {} is out of bounds", idx);
        Self {
            row: idx / BOARD_SIZE,
            col: idx % BOARD_SIZE,
        }
    }

    /// Get the cell `rows` down and `cols` to the right of this one, or `None` if that
    /// would leave the board. Negative offsets move up and left.
    pub fn offset(self, rows: isize, cols: isize) -> Option<Self> {
        let row = self.row as isize + rows;
        let col = self.col as isize + cols;
        if row < 0 || col < 0 {
            None
        } else {
            Self::new(row as usize, col as usize)
        }
    }

    /// The axes this coordinate shares with `other`. Empty if they are on a diagonal, both
    /// axes if they are the same cell.
    pub fn shared_axes(self, other: Coordinate) -> BitFlags<Axis> {
        let mut axes = BitFlags::empty();
        if self.row == other.row {
            axes.insert(Axis::Row);
        }
        if self.col == other.col {
            axes.insert(Axis::Column);
        }
        axes
    }

    /// Iterate every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse text like `"F8"` or `"j10"`. Anything but exactly one row letter followed
    /// by a column number from 1 to 10 is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !COORD.is_match(s) {
            return Err(ParseCoordinateError::new(s));
        }
        let row = (s.as_bytes()[0].to_ascii_uppercase() - BASE_LETTER) as usize;
        let col: usize = s[1..].parse().map_err(|_| ParseCoordinateError::new(s))?;
        Self::new(row, col - 1).ok_or_else(|| ParseCoordinateError::new(s))
    }
}

impl fmt::Display for Coordinate {
    /// Writes the canonical uppercase form, such as `B5`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = (BASE_LETTER + self.row as u8) as char;
        f.pad(&format!("{}{}", letter, self.col + 1))
    }
}

impl Distribution<Coordinate> for Standard {
    /// Uniform over all cells of the board.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::from_index(rng.gen_range(0, CELL_COUNT))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn parses_corners() {
        assert_eq!("A1".parse(), Ok(Coordinate { row: 0, col: 0 }));
        assert_eq!("J10".parse(), Ok(Coordinate { row: 9, col: 9 }));
        assert_eq!("a10".parse(), Ok(Coordinate { row: 0, col: 9 }));
        assert_eq!("j1".parse(), Ok(Coordinate { row: 9, col: 0 }));
    }

    #[test]
    fn rejects_malformed_text() {
        for text in &[
            "", "A", "1", "A0", "A11", "K1", "AA1", "A01", " A1", "A1 ", "A1-", "1A", "A-1",
            "Ä1", "A１",
        ] {
            assert!(
                text.parse::<Coordinate>().is_err(),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn display_round_trips_every_cell() {
        for coord in Coordinate::all() {
            let text = coord.to_string();
            assert_eq!(text.parse::<Coordinate>(), Ok(coord));
            assert_eq!(text.to_lowercase().parse::<Coordinate>(), Ok(coord));
        }
        assert_eq!(Coordinate::all().count(), CELL_COUNT);
    }

    #[test]
    fn offsets_stop_at_edges() {
        let corner = Coordinate::new(0, 9).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(1, -1), Coordinate::new(1, 8));
        assert_eq!(corner.offset(9, 0), Coordinate::new(9, 9));
        assert_eq!(corner.offset(10, 0), None);
    }

    #[test]
    fn shared_axes() {
        let b2 = Coordinate::new(1, 1).unwrap();
        let b5 = Coordinate::new(1, 4).unwrap();
        let e2 = Coordinate::new(4, 1).unwrap();
        assert_eq!(b2.shared_axes(b5), BitFlags::from(Axis::Row));
        assert_eq!(b2.shared_axes(e2), BitFlags::from(Axis::Column));
        assert!(b5.shared_axes(e2).is_empty());
        assert!(b2.shared_axes(b2).is_all());
    }

    #[test]
    fn sampling_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let coord: Coordinate = rng.gen();
            assert!(coord.row() < BOARD_SIZE && coord.col() < BOARD_SIZE);
        }
    }
}
