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
//! Battleship on a 10x10 grid against an automated opponent.
//!
//! [`board`] holds a player's side of the ocean: where vessels are placed, which cells
//! have been fired at, and how many segments are still afloat. [`targeting`] chooses
//! the automated player's shots, searching at random and hunting around hits.
//! [`game`] pairs a human board and a computer board with the engine that plays for the
//! computer.
//!
//! ```
//! use seabattle::board::{Board, ShotOutcome};
//!
//! let mut board = Board::new();
//! board.place_vessel("B2-B5").unwrap();
//! assert_eq!(board.resolve_shot("B3"), Ok(ShotOutcome::Hit));
//! assert_eq!(board.resolve_shot("B3"), Ok(ShotOutcome::Miss));
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod ships;
pub mod targeting;
