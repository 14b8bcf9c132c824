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
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use seabattle::{
    board::{Board, CannotPlaceReason, CellState, Coordinate, Placement, ShotOutcome},
    config::{BOARD_SIZE, FLEET_CELLS},
};

fn random_board(seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_random_fleet(&mut rng).unwrap();
    board.reset_placement_counters();
    board
}

fn cells(board: &Board) -> Vec<CellState> {
    board.rows().flatten().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn coordinate_text_round_trips(row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let coord = Coordinate::new(row, col).unwrap();
        let text = coord.to_string();
        prop_assert_eq!(text.parse::<Coordinate>(), Ok(coord));
        prop_assert_eq!(text.to_lowercase().parse::<Coordinate>(), Ok(coord));
        prop_assert_eq!(text.to_lowercase().parse::<Coordinate>().unwrap().to_string(), text);
    }

    #[test]
    fn arbitrary_shot_text_never_counts_unless_valid(text in "\\PC{0,6}") {
        let mut board = random_board(0);
        match board.resolve_shot(&text) {
            Ok(_) => prop_assert_eq!(board.total_guesses(), 1),
            Err(err) => {
                prop_assert_eq!(err.input(), text.as_str());
                prop_assert_eq!(board.total_guesses(), 0);
                prop_assert_eq!(board.last_resolved(), None);
            }
        }
    }

    #[test]
    fn overlapping_runs_are_blocked(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        len in 2..=4usize,
        vertical in any::<bool>(),
    ) {
        let mut board = Board::new();
        board.place_vessel("C3-C7").unwrap();
        let start = Coordinate::new(row, col).unwrap();
        let end = if vertical {
            start.offset(len as isize - 1, 0)
        } else {
            start.offset(0, len as isize - 1)
        };
        prop_assume!(end.is_some());
        let placement = Placement::new(start, end.unwrap()).unwrap();
        let overlaps = placement.cells().any(|c| c.row() == 2 && (2..7).contains(&c.col()));

        let before = cells(&board);
        match board.place(placement) {
            Ok(()) => {
                prop_assert!(!overlaps);
                prop_assert_eq!(board.live_segments(), 5 + len);
            }
            Err(err) => {
                prop_assert!(overlaps);
                prop_assert_eq!(err.reason(), CannotPlaceReason::Blocked);
                prop_assert_eq!(cells(&board), before);
            }
        }
    }

    #[test]
    fn vessels_sink_exactly_on_their_last_segment(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut order: Vec<Coordinate> = Coordinate::all().collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed.wrapping_add(1)));

        let mut hits = 0;
        let mut sunk = 0;
        for coord in order {
            let was_occupied = board.cell(coord) == CellState::Occupied;
            let segments_left = board.vessel_at(coord).map(|v| v.remaining_segments());
            let outcome = board.resolve_shot(&coord.to_string()).unwrap();
            match outcome {
                ShotOutcome::Miss => prop_assert!(!was_occupied),
                ShotOutcome::Hit => prop_assert!(was_occupied && segments_left > Some(1)),
                ShotOutcome::Sunk => {
                    prop_assert!(was_occupied && segments_left == Some(1));
                    sunk += 1;
                }
            }
            if outcome.is_hit() {
                hits += 1;
            }
            prop_assert_eq!(board.live_segments(), FLEET_CELLS - hits);
            prop_assert_eq!(board.has_live_vessels(), hits < FLEET_CELLS);
        }
        prop_assert_eq!(sunk, 7);
        prop_assert_eq!(board.remaining_counts(), [0; 5]);
    }

    #[test]
    fn repeat_shots_only_count_as_guesses(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let text = Coordinate::new(row, col).unwrap().to_string();
        board.resolve_shot(&text).unwrap();
        let hits = board.total_hits();
        let live = board.live_segments();
        let state = cells(&board);

        prop_assert_eq!(board.resolve_shot(&text), Ok(ShotOutcome::Miss));
        prop_assert_eq!(board.total_guesses(), 2);
        prop_assert_eq!(board.total_hits(), hits);
        prop_assert_eq!(board.live_segments(), live);
        prop_assert_eq!(cells(&board), state);
    }
}
