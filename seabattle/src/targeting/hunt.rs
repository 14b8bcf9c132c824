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
//! Per-hit working state of the targeting engine.
use std::collections::{HashSet, VecDeque};

use crate::{board::Coordinate, config::MAX_HUNT_REACH};

/// Direction probed away from a hit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Toward row A.
    Up,
    /// Toward row J.
    Down,
    /// Toward column 1.
    Left,
    /// Toward column 10.
    Right,
}

impl Direction {
    /// All directions, in the order they are tried on every turn.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Change in `(row, col)` for one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Cells still worth probing around one hit.
#[derive(Debug, Clone)]
pub(super) struct HuntContext {
    /// The cell whose hit opened this hunt.
    origin: Coordinate,

    /// Candidate cells for each direction, nearest first, indexed by
    /// [`Direction::index`].
    queues: [VecDeque<Coordinate>; 4],
}

impl HuntContext {
    /// Open a hunt around `origin`. Each direction gets up to [`MAX_HUNT_REACH`] cells,
    /// stopping at the edge of the board and skipping cells already in `fired`. Cells
    /// fired at after this point are not removed from the queues.
    pub(super) fn new(origin: Coordinate, fired: &HashSet<Coordinate>) -> Self {
        let probe = |direction: Direction| {
            let (rows, cols) = direction.delta();
            let mut queue = VecDeque::with_capacity(MAX_HUNT_REACH);
            for step in 1..=MAX_HUNT_REACH as isize {
                match origin.offset(rows * step, cols * step) {
                    None => break,
                    Some(coord) if fired.contains(&coord) => {}
                    Some(coord) => queue.push_back(coord),
                }
            }
            queue
        };
        Self {
            origin,
            queues: [
                probe(Direction::Up),
                probe(Direction::Down),
                probe(Direction::Left),
                probe(Direction::Right),
            ],
        }
    }

    /// The cell whose hit opened this hunt.
    pub(super) fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Take the front cell of the first non-empty queue, scanning up, down, left, right.
    pub(super) fn next_guess(&mut self) -> Option<(Direction, Coordinate)> {
        for &direction in Direction::ALL.iter() {
            if let Some(coord) = self.queues[direction.index()].pop_front() {
                return Some((direction, coord));
            }
        }
        None
    }

    /// Stop probing in `direction`.
    pub(super) fn abandon(&mut self, direction: Direction) {
        self.queues[direction.index()].clear();
    }

    /// Whether every direction has run out of cells.
    pub(super) fn is_exhausted(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Remaining candidates in `direction`.
    #[cfg(test)]
    pub(super) fn queue(&self, direction: Direction) -> &VecDeque<Coordinate> {
        &self.queues[direction.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn cells(queue: &VecDeque<Coordinate>) -> Vec<String> {
        queue.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn queues_reach_four_cells() {
        let hunt = HuntContext::new(coord("E5"), &HashSet::new());
        assert_eq!(cells(hunt.queue(Direction::Up)), ["D5", "C5", "B5", "A5"]);
        assert_eq!(cells(hunt.queue(Direction::Down)), ["F5", "G5", "H5", "I5"]);
        assert_eq!(cells(hunt.queue(Direction::Left)), ["E4", "E3", "E2", "E1"]);
        assert_eq!(cells(hunt.queue(Direction::Right)), ["E6", "E7", "E8", "E9"]);
    }

    #[test]
    fn queues_stop_at_edges() {
        let hunt = HuntContext::new(coord("J10"), &HashSet::new());
        assert!(hunt.queue(Direction::Down).is_empty());
        assert!(hunt.queue(Direction::Right).is_empty());
        assert_eq!(cells(hunt.queue(Direction::Up)), ["I10", "H10", "G10", "F10"]);
        assert_eq!(cells(hunt.queue(Direction::Left)), ["J9", "J8", "J7", "J6"]);

        let hunt = HuntContext::new(coord("B2"), &HashSet::new());
        assert_eq!(cells(hunt.queue(Direction::Up)), ["A2"]);
        assert_eq!(cells(hunt.queue(Direction::Left)), ["B1"]);
    }

    #[test]
    fn fired_cells_are_skipped_not_blocking() {
        let fired: HashSet<Coordinate> =
            [coord("D5"), coord("E7")].iter().copied().collect();
        let hunt = HuntContext::new(coord("E5"), &fired);
        assert_eq!(cells(hunt.queue(Direction::Up)), ["C5", "B5", "A5"]);
        assert_eq!(cells(hunt.queue(Direction::Right)), ["E6", "E8", "E9"]);
    }

    #[test]
    fn guesses_follow_priority_and_abandon_clears() {
        let mut hunt = HuntContext::new(coord("A1"), &HashSet::new());
        assert_eq!(hunt.next_guess(), Some((Direction::Down, coord("B1"))));
        assert_eq!(hunt.next_guess(), Some((Direction::Down, coord("C1"))));
        hunt.abandon(Direction::Down);
        assert_eq!(hunt.next_guess(), Some((Direction::Right, coord("A2"))));
        hunt.abandon(Direction::Right);
        assert!(hunt.is_exhausted());
        assert_eq!(hunt.next_guess(), None);
    }
}
