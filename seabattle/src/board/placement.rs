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
//! Straight runs of cells that a vessel can be placed on.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::{coordinate::COORD_PATTERN, Coordinate, ParsePlacementError};

/// Matcher for either a single cell or two cells joined by a dash.
static PLACEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?i)^(?P<start>{0})(?:-(?P<end>{0}))?$",
        COORD_PATTERN
    ))
    .unwrap()
});

/// A straight, axis-aligned run of cells, inclusive of both ends.
///
/// The ends are stored in order, so `"B5-B2"` and `"B2-B5"` produce the same placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// The end with the lower row or column.
    start: Coordinate,
    /// The end with the higher row or column. Equal to `start` for a single cell.
    end: Coordinate,
}

impl Placement {
    /// Construct the run between `a` and `b`, in either order. Returns `None` if the two
    /// cells share neither a row nor a column.
    pub fn new(a: Coordinate, b: Coordinate) -> Option<Self> {
        if a.shared_axes(b).is_empty() {
            None
        } else if a <= b {
            Some(Self { start: a, end: b })
        } else {
            Some(Self { start: b, end: a })
        }
    }

    /// Construct a placement covering the single cell `coord`.
    pub fn single(coord: Coordinate) -> Self {
        Self {
            start: coord,
            end: coord,
        }
    }

    /// The first cell of the run.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The last cell of the run.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Number of cells covered by the run.
    pub fn len(&self) -> usize {
        (self.end.row() - self.start.row()) + (self.end.col() - self.start.col()) + 1
    }

    /// Iterate the cells of the run from `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let start = self.start;
        let (rows, cols) = if start.row() == self.end.row() {
            (0, 1)
        } else {
            (1, 0)
        };
        (0..self.len() as isize).filter_map(move |i| start.offset(rows * i, cols * i))
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    /// Parse either a single cell (`"C10"`) or a run between two cells (`"B3-B6"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePlacementError::new(s);
        if !s.is_ascii() {
            return Err(err());
        }
        let captures = PLACEMENT.captures(s).ok_or_else(err)?;
        let start: Coordinate = captures["start"].parse().map_err(|_| err())?;
        let end = match captures.name("end") {
            Some(end) => end.as_str().parse().map_err(|_| err())?,
            None => start,
        };
        Self::new(start, end).ok_or_else(err)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start == self.end {
            f.pad(&self.start.to_string())
        } else {
            f.pad(&format!("{}-{}", self.start, self.end))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    #[test]
    fn single_cell() {
        let placement: Placement = "c10".parse().unwrap();
        assert_eq!(placement.len(), 1);
        assert_eq!(placement.cells().collect::<Vec<_>>(), vec![coord("C10")]);
        assert_eq!(placement.to_string(), "C10");
    }

    #[test]
    fn endpoints_are_normalized() {
        let forward: Placement = "B2-B5".parse().unwrap();
        let backward: Placement = "b5-b2".parse().unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 4);
        assert_eq!(
            backward.cells().collect::<Vec<_>>(),
            vec![coord("B2"), coord("B3"), coord("B4"), coord("B5")]
        );
        assert_eq!(backward.to_string(), "B2-B5");
    }

    #[test]
    fn vertical_runs_step_down_rows() {
        let placement: Placement = "J1-F1".parse().unwrap();
        assert_eq!(placement.start(), coord("F1"));
        assert_eq!(placement.end(), coord("J1"));
        assert_eq!(
            placement.cells().collect::<Vec<_>>(),
            vec![coord("F1"), coord("G1"), coord("H1"), coord("I1"), coord("J1")]
        );
    }

    #[test]
    fn same_cell_twice_is_a_single_cell() {
        let placement: Placement = "D4-D4".parse().unwrap();
        assert_eq!(placement, Placement::single(coord("D4")));
        assert_eq!(placement.len(), 1);
    }

    #[test]
    fn rejects_malformed_runs() {
        for text in &[
            "", "-", "A1-", "-A1", "A1-B2", "A1--A2", "A1-A2-A3", "A1 - A2", "A1-K1", "A0-A3",
            "A1A2", "AB1-AB2",
        ] {
            assert!(
                text.parse::<Placement>().is_err(),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn long_runs_parse_regardless_of_fleet() {
        let placement: Placement = "A1-A10".parse().unwrap();
        assert_eq!(placement.len(), 10);
    }
}
