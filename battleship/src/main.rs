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
use std::{
    io::{self, BufRead, Write},
    time::{Duration, Instant},
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use seabattle::{
    board::{Board, CannotPlaceReason, ShotOutcome},
    game::{Game, Side},
};

use crate::render::{banner, side_by_side, FleetTable, GridView, Icons, DEFAULT_SHIP_ICON};

mod logging;
mod render;

/// How the human's fleet gets placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum PlacementMode {
    Random,
    Manual,
}

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship against the computer.")
        .arg(
            Arg::with_name("icon")
                .long("icon")
                .value_name("ICON")
                .help("icon drawn for your undamaged ship segments, up to three characters")
                .takes_value(true)
                .empty_values(false),
        )
        .arg(
            Arg::with_name("cheat")
                .short("c")
                .long("cheat")
                .help("reveal the computer's fleet"),
        )
        .arg(
            Arg::with_name("placement")
                .long("placement")
                .value_name("PLACEMENT")
                .help("pre-specify how your fleet is placed")
                .takes_value(true)
                .possible_values(&["random", "manual"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random generator for a reproducible game")
                .takes_value(true),
        )
        .get_matches();
    logging::init_logging();

    let icons = Icons::new(matches.value_of("icon").unwrap_or(DEFAULT_SHIP_ICON));
    let cheat = matches.is_present("cheat");
    let mut rng = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!("using seed {}", seed);
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    print!("{}", intro());
    let mut game = Game::new(StdRng::seed_from_u64(rng.gen()));
    match choose_placement_mode(&matches, &mut input)? {
        PlacementMode::Random => place_randomly(game.board_mut(Side::Human), &mut rng),
        PlacementMode::Manual => {
            place_manually(game.board_mut(Side::Human), &icons, &mut input)?
        }
    }
    place_randomly(game.board_mut(Side::Computer), &mut rng);
    if let Err(side) = game.start() {
        warn!("{:?} fleet incomplete at start", side);
        return Ok(());
    }

    let started = Instant::now();
    let mut turns = 0;
    while game.winner().is_none() {
        println!();
        show_boards(&game, &icons, cheat);
        let outcome = input.read_input("Fire at (e.g. B7):", |text| match game.fire(text) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                println!("\"{}\" is not a cell on the board, try something like B7.", err.input());
                None
            }
        })?;
        turns += 1;
        report("You", game.board(Side::Computer), outcome);

        if game.board(Side::Computer).has_live_vessels() {
            if let Some(outcome) = game.enemy_turn() {
                report("The enemy", game.board(Side::Human), outcome);
            }
        }
    }

    println!();
    show_boards(&game, &icons, true);
    match game.winner() {
        Some(Side::Human) => print!("{}", banner("YOU WIN! The enemy fleet is sunk.")),
        _ => print!("{}", banner("YOU LOSE! Your fleet is sunk.")),
    }
    show_stats(&game, turns, started.elapsed());
    Ok(())
}

/// Text shown before setup begins.
fn intro() -> String {
    format!(
        "{}\n\
         Sink the enemy fleet before it sinks yours.\n\
         Fire by entering a cell as a row letter and a column number, like D4.\n\
         Rows run from A to J and columns from 1 to 10.\n\
         Enter q or quit at any prompt to leave the game.\n\n",
        banner("BATTLESHIP")
    )
}

/// Choose the placement mode from the arguments, or ask the player.
fn choose_placement_mode<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<PlacementMode> {
    Ok(match matches.value_of("placement") {
        Some(mode) if mode.eq_ignore_ascii_case("manual") => PlacementMode::Manual,
        Some(_) => PlacementMode::Random,
        None => {
            println!("How do you want to place your fleet?");
            println!("  1) random");
            println!("  2) manual");
            input.read_input_lower(">", |input| match input {
                "1" | "random" | "r" => Some(PlacementMode::Random),
                "2" | "manual" | "m" => Some(PlacementMode::Manual),
                _ => {
                    println!("Invalid selection, enter 1 or 2.");
                    None
                }
            })?
        }
    })
}

/// Place every vessel on the board at random. Starts over on the rare layout that
/// leaves no room for the remaining vessels.
fn place_randomly(board: &mut Board, rng: &mut impl Rng) {
    while let Err(err) = board.place_random_fleet(rng) {
        warn!("random placement stalled ({}), starting over", err);
        *board = Board::new();
    }
}

/// Read placements from the player until the whole fleet is on the board.
fn place_manually(
    board: &mut Board,
    icons: &Icons,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    println!();
    println!("Place your fleet. Enter a single cell like C10 for a submarine,");
    println!("or the two ends of a straight run like B3-B6.");
    while !board.all_vessels_placed() {
        println!();
        print!(
            "{}",
            side_by_side(
                "Your board",
                &GridView::new(board, icons, true).to_string(),
                "Left to place",
                &FleetTable(board).to_string(),
            )
        );
        let text = input.read_input_upper("Place a vessel:", |text| Some(text.to_string()))?;
        match board.place_vessel(&text) {
            Ok(()) => println!("Vessel placed at {}.", text),
            Err(err) if err.reason() == CannotPlaceReason::Malformed => {
                println!("\"{}\" is not a cell or a straight run of cells.", err.input());
            }
            Err(err) => {
                println!("Vessel could not be placed at {}: {}.", err.input(), err.reason());
            }
        }
    }
    Ok(())
}

/// Print both boards with the fleet tables under them.
fn show_boards<R: Rng>(game: &Game<R>, icons: &Icons, reveal_enemy: bool) {
    let human = game.board(Side::Human);
    let computer = game.board(Side::Computer);
    let left = format!("{}\n{}", GridView::new(human, icons, true), FleetTable(human));
    let right = format!(
        "{}\n{}",
        GridView::new(computer, icons, reveal_enemy),
        FleetTable(computer)
    );
    print!("{}", side_by_side("Your fleet", &left, "Enemy waters", &right));
}

/// Describe the outcome of the shot that was just resolved on `board`.
fn report(shooter: &str, board: &Board, outcome: ShotOutcome) {
    let at = board
        .last_resolved()
        .map(|coord| coord.to_string())
        .unwrap_or_default();
    match outcome {
        ShotOutcome::Miss => println!("{} fired at {}: miss.", shooter, at),
        ShotOutcome::Hit => println!("{} fired at {}: hit!", shooter, at),
        ShotOutcome::Sunk => println!("{} fired at {}: hit and sunk!", shooter, at),
    }
}

/// Print turn, shot, and timing statistics for the finished game.
fn show_stats<R: Rng>(game: &Game<R>, turns: usize, elapsed: Duration) {
    println!();
    println!("Turns played: {}", turns);
    for &(name, target) in &[("You", Side::Computer), ("Enemy", Side::Human)] {
        let board = game.board(target);
        println!(
            "{:<6} guesses: {:>3}  hits: {:>2}  accuracy: {:>5.1}%",
            name,
            board.total_guesses(),
            board.total_hits(),
            accuracy(board.total_hits(), board.total_guesses()),
        );
    }
    let secs = elapsed.as_secs();
    println!("Time played: {}m {:02}s", secs / 60, secs % 60);
}

/// Percentage of guesses that hit.
fn accuracy(hits: usize, guesses: usize) -> f64 {
    if guesses == 0 {
        0.0
    } else {
        hits as f64 * 100.0 / guesses as f64
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.read_input_with(prompt, str::make_ascii_lowercase, checker)
    }

    /// Like [`read_input_lower`](Self::read_input_lower) but converts to ascii upper.
    fn read_input_upper<F, T>(&mut self, prompt: &str, checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.read_input_with(prompt, str::make_ascii_uppercase, checker)
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.read_input_with(prompt, |_| {}, checker)
    }

    fn read_input_with<C, F, T>(
        &mut self,
        prompt: &str,
        convert: C,
        mut checker: F,
    ) -> io::Result<T>
    where
        C: Fn(&mut str),
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            convert(self.buf.as_mut_str());
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Ends the
    /// program at end of input or when the player asks to quit.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        if is_quit(&self.buf) {
            println!("Goodbye.");
            std::process::exit(0);
        }
        Ok(())
    }
}

/// Whether a line of input asks to leave the game.
fn is_quit(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn quit_words() {
        assert!(is_quit("q\n"));
        assert!(is_quit("  QUIT \r\n"));
        assert!(!is_quit("quiet"));
        assert!(!is_quit("A1"));
    }

    #[test]
    fn reader_trims_and_retries() {
        let mut input = InputReader::new(Cursor::new("nope\n  b7 \n"));
        let coord = input
            .read_input_upper(">", |text| text.parse::<seabattle::board::Coordinate>().ok())
            .unwrap();
        assert_eq!(coord.to_string(), "B7");
    }

    #[test]
    fn intro_explains_shots_and_quitting() {
        let text = intro();
        assert!(text.starts_with(&banner("BATTLESHIP")));
        assert!(text.contains("like D4"));
        assert!(text.contains("q or quit"));
    }

    #[test]
    fn accuracy_handles_no_guesses() {
        assert_eq!(accuracy(0, 0), 0.0);
        assert_eq!(accuracy(5, 20), 25.0);
    }
}
