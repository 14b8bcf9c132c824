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
//! Fixed dimensions of the game: the grid and the fleet each board must hold.

/// Width and height of the square grid.
pub const BOARD_SIZE: usize = 10;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Length of the largest vessel in the fleet.
pub const MAX_VESSEL_SIZE: usize = 5;

/// Number of vessels of each size that make up a complete fleet. Index `i` holds the
/// count for vessels of size `i + 1`.
pub const FLEET: [usize; MAX_VESSEL_SIZE] = [1, 2, 2, 1, 1];

/// Number of cells occupied by a complete fleet.
pub const FLEET_CELLS: usize = 1 + 2 * 2 + 2 * 3 + 4 + 5;

/// How far from a hit the targeting engine probes in each direction. The largest vessel
/// is five long, so four cells past the first hit always reaches its far end.
pub const MAX_HUNT_REACH: usize = MAX_VESSEL_SIZE - 1;
