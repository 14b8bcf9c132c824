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
//! Types that make up the game board.

use log::{debug, trace};
use rand::Rng;

use crate::{
    config::{BOARD_SIZE, FLEET, MAX_VESSEL_SIZE},
    ships::{Fleet, Vessel},
};

use self::grid::Grid;
pub use self::{
    coordinate::{Axis, Coordinate},
    errors::{CannotPlaceReason, ParseCoordinateError, ParsePlacementError, PlaceError},
    grid::CellState,
    placement::Placement,
};

mod coordinate;
mod errors;
mod grid;
mod placement;

/// How many random runs are tried for one vessel before random placement gives up.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 1000;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot landed on open water or on a segment that was already destroyed.
    Miss,
    /// The shot destroyed a segment of a vessel that is still afloat.
    Hit,
    /// The shot destroyed the last segment of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shot destroyed a segment.
    pub fn is_hit(self) -> bool {
        self != ShotOutcome::Miss
    }
}

/// Something that can be fired at. This is the only part of a [`Board`] the
/// [`TargetingEngine`][crate::targeting::TargetingEngine] relies on.
pub trait ShotTarget {
    /// Resolve a shot at `coord`.
    fn fire(&mut self, coord: Coordinate) -> ShotOutcome;
}

/// Represents a single player's board, including their vessels and their side of the
/// ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cell states and the vessel occupying each cell.
    grid: Grid,

    /// Every vessel placed on this board.
    fleet: Fleet,

    /// Count of vessels of each size, indexed by `size - 1`. During setup this is the
    /// number still to be placed. Once reset for play, sinking a vessel decrements it,
    /// so it becomes the number still afloat.
    remaining: [usize; MAX_VESSEL_SIZE],

    /// Number of occupied cells not yet destroyed.
    live_segments: usize,

    /// Number of shots resolved against this board.
    total_guesses: usize,

    /// Number of shots that destroyed a segment.
    total_hits: usize,

    /// The cell most recently fired at.
    last_resolved: Option<Coordinate>,
}

impl Board {
    /// Construct an empty board with the full fleet waiting to be placed.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            fleet: Fleet::default(),
            remaining: FLEET,
            live_segments: 0,
            total_guesses: 0,
            total_hits: 0,
            last_resolved: None,
        }
    }

    /// Place a vessel from text: either a single cell like `"C10"` for a vessel of size 1,
    /// or a straight run like `"B3-B6"`. Errors carry `text` exactly as given.
    pub fn place_vessel(&mut self, text: &str) -> Result<(), PlaceError> {
        let placement: Placement = text.parse()?;
        self.try_place(placement).map_err(|reason| PlaceError::new(reason, text))
    }

    /// Place a vessel on the given run. Fails with [`CannotPlaceReason::NoCapacity`] if no
    /// vessel of that length is left to place and with [`CannotPlaceReason::Blocked`] if
    /// any cell of the run is not empty. The board is unchanged on failure. Errors carry
    /// the normalized run, as printed by [`Placement`]'s `Display`.
    pub fn place(&mut self, placement: Placement) -> Result<(), PlaceError> {
        self.try_place(placement).map_err(|reason| PlaceError::new(reason, placement.to_string()))
    }

    fn try_place(&mut self, placement: Placement) -> Result<(), CannotPlaceReason> {
        let size = placement.len();
        if size > MAX_VESSEL_SIZE || self.remaining[size - 1] == 0 {
            return Err(CannotPlaceReason::NoCapacity);
        }
        if placement
            .cells()
            .any(|coord| self.grid[coord].state != CellState::Empty)
        {
            return Err(CannotPlaceReason::Blocked);
        }
        let id = self.fleet.launch(Vessel::new(size));
        for coord in placement.cells() {
            let cell = &mut self.grid[coord];
            cell.state = CellState::Occupied;
            cell.vessel = Some(id);
        }
        self.remaining[size - 1] -= 1;
        self.live_segments += size;
        debug!("placed vessel of size {} at {}", size, placement);
        Ok(())
    }

    /// Place every vessel still waiting to be placed at random, largest first.
    pub fn place_random_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), PlaceError> {
        for size in (1..=MAX_VESSEL_SIZE).rev() {
            while self.remaining[size - 1] > 0 {
                self.place_random(rng, size)?;
            }
        }
        Ok(())
    }

    /// Try random runs of the given size until one can be placed.
    fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        size: usize,
    ) -> Result<(), PlaceError> {
        let mut outcome = Err(PlaceError::new(CannotPlaceReason::Blocked, ""));
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let placement = match random_run(rng, size) {
                Some(placement) => placement,
                None => continue,
            };
            outcome = self.place(placement);
            if outcome.is_ok() {
                break;
            }
        }
        outcome
    }

    /// Returns true once every vessel of the fleet has been placed.
    pub fn all_vessels_placed(&self) -> bool {
        self.remaining.iter().all(|&count| count == 0)
    }

    /// Restore the per-size counts to the full fleet without touching the grid. Called
    /// when play begins so the counts track vessels still afloat.
    pub fn reset_placement_counters(&mut self) {
        self.remaining = FLEET;
    }

    /// Snapshot of the per-size counts, indexed by `size - 1`.
    pub fn remaining_counts(&self) -> [usize; MAX_VESSEL_SIZE] {
        self.remaining
    }

    /// Parse `text` as a coordinate and fire at it. Malformed text is rejected without
    /// counting as a guess.
    pub fn resolve_shot(&mut self, text: &str) -> Result<ShotOutcome, ParseCoordinateError> {
        let coord = text.parse()?;
        Ok(self.fire(coord))
    }

    /// Returns true while any segment of any vessel is undamaged.
    pub fn has_live_vessels(&self) -> bool {
        self.live_segments > 0
    }

    /// Number of occupied cells not yet destroyed.
    pub fn live_segments(&self) -> usize {
        self.live_segments
    }

    /// Number of shots resolved against this board.
    pub fn total_guesses(&self) -> usize {
        self.total_guesses
    }

    /// Number of shots that destroyed a segment.
    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    /// The cell most recently fired at, if any.
    pub fn last_resolved(&self) -> Option<Coordinate> {
        self.last_resolved
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coordinate) -> CellState {
        self.grid[coord].state
    }

    /// The vessel occupying `coord`, if any, sunk or not.
    pub fn vessel_at(&self, coord: Coordinate) -> Option<&Vessel> {
        self.grid[coord].vessel.map(|id| &self.fleet[id])
    }

    /// All vessels placed on this board.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Get an iterator over the board. The iterator's item is another iterator that
    /// iterates over the cell states of a single row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        self.grid.rows()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotTarget for Board {
    fn fire(&mut self, coord: Coordinate) -> ShotOutcome {
        self.total_guesses += 1;
        self.last_resolved = Some(coord);
        let cell = &mut self.grid[coord];
        let outcome = match (cell.state, cell.vessel) {
            (CellState::Occupied, Some(id)) => {
                cell.state = CellState::Destroyed;
                let vessel = &mut self.fleet[id];
                vessel.damage();
                self.live_segments -= 1;
                self.total_hits += 1;
                if vessel.is_alive() {
                    ShotOutcome::Hit
                } else {
                    let afloat = &mut self.remaining[vessel.size() - 1];
                    *afloat = afloat.saturating_sub(1);
                    ShotOutcome::Sunk
                }
            }
            (CellState::Empty, _) => {
                cell.state = CellState::Missed;
                ShotOutcome::Miss
            }
            // Shots at destroyed or missed cells are repeat guesses and count as misses.
            _ => ShotOutcome::Miss,
        };
        trace!("shot at {} resolved as {:?}", coord, outcome);
        outcome
    }
}

/// Pick a random straight run of `size` cells that fits on the board.
fn random_run<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Option<Placement> {
    let reach = BOARD_SIZE - size;
    let start;
    let end;
    if rng.gen() {
        start = Coordinate::new(rng.gen_range(0, reach + 1), rng.gen_range(0, BOARD_SIZE))?;
        end = start.offset(size as isize - 1, 0)?;
    } else {
        start = Coordinate::new(rng.gen_range(0, BOARD_SIZE), rng.gen_range(0, reach + 1))?;
        end = start.offset(0, size as isize - 1)?;
    }
    Placement::new(start, end)
}
