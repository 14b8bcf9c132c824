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
//! Errors used by the `Board` and the text forms of its inputs.

use std::fmt::{self, Debug};

use thiserror::Error;

/// Error returned when text is not a valid [`Coordinate`][crate::board::Coordinate].
#[derive(Error, Clone, Eq, PartialEq)]
#[error("malformed coordinate {input:?}, expected a letter A-J followed by a number 1-10")]
pub struct ParseCoordinateError {
    /// The text that failed to parse.
    input: String,
}

impl ParseCoordinateError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Debug for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error returned when text is not a valid [`Placement`][crate::board::Placement].
#[derive(Error, Clone, Eq, PartialEq)]
#[error("malformed placement {input:?}, expected a cell like \"C10\" or a straight run like \"B3-B6\"")]
pub struct ParsePlacementError {
    /// The text that failed to parse.
    input: String,
}

impl ParsePlacementError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Extract the text that failed to parse.
    pub fn into_input(self) -> String {
        self.input
    }
}

impl Debug for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reason why a vessel could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The placement text was not a single cell or a straight run between two cells.
    #[error("the placement was malformed")]
    Malformed,
    /// No vessel of the requested length is left to place.
    #[error("no vessel of that length is left to place")]
    NoCapacity,
    /// One or more of the cells in the run is already occupied.
    #[error("the requested position was already occupied")]
    Blocked,
}

/// Error caused when attempting to place a vessel.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("could not place vessel at {input:?}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    /// Text of the attempted placement.
    input: String,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the text of the placement.
    pub(crate) fn new(reason: CannotPlaceReason, input: impl Into<String>) -> Self {
        Self {
            reason,
            input: input.into(),
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the text of the placement that was attempted.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Extract the text of the attempted placement from this error.
    pub fn into_input(self) -> String {
        self.input
    }
}

impl From<ParsePlacementError> for PlaceError {
    fn from(err: ParsePlacementError) -> Self {
        Self::new(CannotPlaceReason::Malformed, err.into_input())
    }
}
