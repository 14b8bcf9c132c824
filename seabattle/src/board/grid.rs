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
//! Defines the types that make up the grid of a board.

use std::ops::{Index, IndexMut};

use crate::{
    board::Coordinate,
    config::{BOARD_SIZE, CELL_COUNT},
    ships::VesselId,
};

/// State of a single cell. A cell only ever moves forward: `Empty` becomes `Occupied`
/// when a vessel is placed or `Missed` when shot, and `Occupied` becomes `Destroyed`
/// when shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Nothing is here and nothing has been fired here.
    Empty,
    /// An undamaged segment of a vessel.
    Occupied,
    /// A segment of a vessel that has been hit.
    Destroyed,
    /// An empty cell that has been fired at.
    Missed,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// A single cell in the player's grid.
#[derive(Debug, Default, Copy, Clone)]
pub(super) struct GridCell {
    /// What is in this cell and whether it has been fired at.
    pub(super) state: CellState,

    /// The vessel that occupies this cell, if any.
    pub(super) vessel: Option<VesselId>,
}

/// Row-major 10x10 grid of cells.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        Self {
            cells: vec![GridCell::default(); CELL_COUNT].into_boxed_slice(),
        }
    }

    /// Get an iterator over the rows of the grid. Each row is an iterator over the states
    /// of its cells.
    pub(super) fn rows(
        &self,
    ) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|cell| cell.state))
    }
}

impl Index<Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        &self.cells[coord.index()]
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        &mut self.cells[coord.index()]
    }
}
