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
//! A game between a human and the automated opponent on two 10x10 boards.
use log::info;
use rand::Rng;

use crate::{
    board::{Board, ParseCoordinateError, ShotOutcome},
    targeting::TargetingEngine,
};

/// Side of the game. Either the `Human` or the `Computer`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The player at the terminal.
    Human,
    /// The automated opponent.
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Both boards and the engine that plays for the computer. The engine always fires at
/// the human's board.
#[derive(Debug)]
pub struct Game<R> {
    /// The human's vessels, fired at by the computer.
    human: Board,

    /// The computer's vessels, fired at by the human.
    computer: Board,

    /// Chooses the computer's shots.
    enemy: TargetingEngine<R>,
}

impl<R: Rng> Game<R> {
    /// Create a game with two empty boards. `rng` drives the computer's shots.
    pub fn new(rng: R) -> Self {
        Self {
            human: Board::new(),
            computer: Board::new(),
            enemy: TargetingEngine::new(rng),
        }
    }

    /// Get the board holding the given side's vessels.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Mutably get the board holding the given side's vessels, for placement.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    /// The engine playing for the computer.
    pub fn enemy(&self) -> &TargetingEngine<R> {
        &self.enemy
    }

    /// Begin play. Both fleets must be fully placed, otherwise returns the first side
    /// that still has vessels to place. Resets the per-size counts of both boards so
    /// they track vessels afloat.
    pub fn start(&mut self) -> Result<(), Side> {
        for &side in &[Side::Human, Side::Computer] {
            if !self.board(side).all_vessels_placed() {
                return Err(side);
            }
        }
        self.human.reset_placement_counters();
        self.computer.reset_placement_counters();
        info!("both fleets placed, starting play");
        Ok(())
    }

    /// Fire the human's shot at the computer's board.
    pub fn fire(&mut self, text: &str) -> Result<ShotOutcome, ParseCoordinateError> {
        self.computer.resolve_shot(text)
    }

    /// Let the computer fire one shot at the human's board. Returns `None` only if the
    /// computer has already fired at every cell.
    pub fn enemy_turn(&mut self) -> Option<ShotOutcome> {
        self.enemy.make_move(&mut self.human)
    }

    /// The side that has won, if either side has no vessels left.
    pub fn winner(&self) -> Option<Side> {
        if !self.computer.has_live_vessels() {
            Some(Side::Human)
        } else if !self.human.has_live_vessels() {
            Some(Side::Computer)
        } else {
            None
        }
    }
}
