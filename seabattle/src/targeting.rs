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
//! The automated opponent's choice of where to fire.
//!
//! The engine searches at random until a shot hits, then hunts around that hit. A hunt
//! probes up to four cells in each direction, always trying up, then down, then left,
//! then right, and gives up on a direction at its first miss. The hunt ends when a
//! vessel sinks or every direction is used up.
use std::collections::HashSet;

use log::debug;
use rand::{seq::IteratorRandom, Rng};

use crate::board::{Coordinate, ShotOutcome, ShotTarget};

use self::hunt::HuntContext;
pub use self::hunt::Direction;

mod hunt;

/// Random draws tried before falling back to scanning for cells not yet fired at.
const SEARCH_DRAWS: usize = 64;

/// What the engine will do on its next move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    /// Firing at random cells not yet fired at.
    Searching,
    /// Probing around a previous hit.
    Hunting,
}

/// Chooses and fires shots for the automated player.
#[derive(Debug)]
pub struct TargetingEngine<R> {
    /// Source of randomness for the search phase.
    rng: R,

    /// Open hunts, the active one last.
    hunts: Vec<HuntContext>,

    /// Every cell this engine has fired at.
    fired: HashSet<Coordinate>,
}

impl<R: Rng> TargetingEngine<R> {
    /// Construct an engine that has not fired yet.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            hunts: Vec::new(),
            fired: HashSet::new(),
        }
    }

    /// Fire exactly one shot at `target` and return its outcome. Returns `None` only if
    /// every cell of the board has already been fired at.
    pub fn make_move<T: ShotTarget + ?Sized>(&mut self, target: &mut T) -> Option<ShotOutcome> {
        match self.hunt(target) {
            Some(outcome) => Some(outcome),
            None => self.search(target),
        }
    }

    /// Whether the next move will search or hunt.
    pub fn mode(&self) -> Mode {
        if self.hunts.is_empty() {
            Mode::Searching
        } else {
            Mode::Hunting
        }
    }

    /// Number of hunts currently open.
    pub fn hunt_depth(&self) -> usize {
        self.hunts.len()
    }

    /// Every cell this engine has fired at.
    pub fn fired(&self) -> &HashSet<Coordinate> {
        &self.fired
    }

    /// Fire from the active hunt. Hunts with nothing left to try are dropped. Returns
    /// `None` without firing if no hunt has a cell left.
    fn hunt<T: ShotTarget + ?Sized>(&mut self, target: &mut T) -> Option<ShotOutcome> {
        while let Some(hunt) = self.hunts.last_mut() {
            let (direction, coord) = match hunt.next_guess() {
                Some(guess) => guess,
                None => {
                    debug!("hunt around {} exhausted", hunt.origin());
                    self.hunts.pop();
                    continue;
                }
            };
            if !self.fired.insert(coord) {
                continue;
            }
            let outcome = target.fire(coord);
            if outcome == ShotOutcome::Miss {
                hunt.abandon(direction);
            }
            if outcome == ShotOutcome::Sunk {
                debug!("hunt around {} sank a vessel at {}", hunt.origin(), coord);
                self.hunts.pop();
            } else if hunt.is_exhausted() {
                debug!("hunt around {} exhausted at {}", hunt.origin(), coord);
                self.hunts.pop();
            }
            return Some(outcome);
        }
        None
    }

    /// Fire at a random cell not yet fired at, opening a hunt if it hits.
    fn search<T: ShotTarget + ?Sized>(&mut self, target: &mut T) -> Option<ShotOutcome> {
        let coord = self.pick_unfired()?;
        self.fired.insert(coord);
        let outcome = target.fire(coord);
        if outcome == ShotOutcome::Hit {
            debug!("opening hunt around {}", coord);
            self.hunts.push(HuntContext::new(coord, &self.fired));
        }
        Some(outcome)
    }

    /// Pick a cell uniformly from those not yet fired at.
    fn pick_unfired(&mut self) -> Option<Coordinate> {
        for _ in 0..SEARCH_DRAWS {
            let coord: Coordinate = self.rng.gen();
            if !self.fired.contains(&coord) {
                return Some(coord);
            }
        }
        let fired = &self.fired;
        Coordinate::all()
            .filter(|coord| !fired.contains(coord))
            .choose(&mut self.rng)
    }
}
