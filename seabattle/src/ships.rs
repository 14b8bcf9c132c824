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
//! Vessels placed on a board and the arena that owns them.
use std::ops::{Index, IndexMut};

/// Handle to a [`Vessel`] stored in a [`Fleet`]. Every cell a vessel occupies holds the
/// same handle, so damage through any of them lands on the one shared vessel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VesselId(usize);

/// A vessel occupying a straight run of cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Vessel {
    /// Number of cells the vessel occupies. Fixed at construction.
    size: usize,
    /// Number of occupied cells not yet destroyed. Only ever decreases.
    remaining: usize,
}

impl Vessel {
    /// Construct an undamaged vessel of the given size. Panics if `size` is 0.
    pub fn new(size: usize) -> Self {
        assert!(size > 0);
        Self {
            size,
            remaining: size,
        }
    }

    /// Number of cells this vessel occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of segments not yet destroyed.
    pub fn remaining_segments(&self) -> usize {
        self.remaining
    }

    /// Whether any segment of the vessel is still undamaged.
    pub fn is_alive(&self) -> bool {
        self.remaining > 0
    }

    /// Destroy one segment of the vessel. Has no effect once the vessel is sunk.
    pub fn damage(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// Arena of every vessel placed on one board. Vessels are never removed, so handles stay
/// valid for the life of the board.
#[derive(Debug, Default, Clone)]
pub struct Fleet {
    vessels: Vec<Vessel>,
}

impl Fleet {
    /// Add a vessel and return its handle.
    pub(crate) fn launch(&mut self, vessel: Vessel) -> VesselId {
        self.vessels.push(vessel);
        VesselId(self.vessels.len() - 1)
    }

    /// Number of vessels in the fleet.
    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    /// Whether no vessel has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Iterate all vessels in the order they were placed.
    pub fn iter(&self) -> impl Iterator<Item = &Vessel> {
        self.vessels.iter()
    }
}

impl Index<VesselId> for Fleet {
    type Output = Vessel;

    fn index(&self, id: VesselId) -> &Vessel {
        &self.vessels[id.0]
    }
}

impl IndexMut<VesselId> for Fleet {
    fn index_mut(&mut self, id: VesselId) -> &mut Vessel {
        &mut self.vessels[id.0]
    }
}
