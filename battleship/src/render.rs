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
//! Text rendering of boards, fleet tables, and banners.
use std::fmt;

use seabattle::{
    board::{Board, CellState},
    config::{BOARD_SIZE, MAX_VESSEL_SIZE},
};

/// Icon used for undamaged ship segments when none is given on the command line.
pub const DEFAULT_SHIP_ICON: &str = "< >";

/// Gap between boards shown side by side.
const GUTTER: &str = "      ";

/// Icons used to draw cells.
#[derive(Debug, Clone)]
pub struct Icons {
    ship: String,
}

impl Icons {
    /// Build the icon set. A single character is centered in the cell, anything longer
    /// is cut or padded to the three-character cell width.
    pub fn new(ship: &str) -> Self {
        let mut chars = ship.chars();
        let ship = match (chars.next(), chars.next()) {
            (Some(c), None) => format!(" {} ", c),
            _ => format!("{:<3}", ship.chars().take(3).collect::<String>()),
        };
        Self { ship }
    }

    fn cell(&self, state: CellState, show_ships: bool) -> &str {
        match state {
            CellState::Occupied if show_ships => &self.ship,
            CellState::Empty | CellState::Occupied => "   ",
            CellState::Destroyed => " X ",
            CellState::Missed => " * ",
        }
    }
}

/// Display helper which draws a board as a lettered grid.
pub struct GridView<'a> {
    board: &'a Board,
    icons: &'a Icons,
    show_ships: bool,
}

impl<'a> GridView<'a> {
    /// Draw `board`. Undamaged segments are only drawn when `show_ships` is set.
    pub fn new(board: &'a Board, icons: &'a Icons, show_ships: bool) -> Self {
        Self {
            board,
            icons,
            show_ships,
        }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {:^3}", col)?;
        }
        writeln!(f)?;
        write_separator(f)?;
        for (row, cells) in self.board.rows().enumerate() {
            write!(f, "{} |", (b'A' + row as u8) as char)?;
            for state in cells {
                write!(f, "{}|", self.icons.cell(state, self.show_ships))?;
            }
            writeln!(f)?;
            write_separator(f)?;
        }
        Ok(())
    }
}

fn write_separator(f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "  +")?;
    for _ in 0..BOARD_SIZE {
        write!(f, "---+")?;
    }
    writeln!(f)
}

/// Name of the vessel class of the given size.
pub fn vessel_name(size: usize) -> &'static str {
    match size {
        5 => "Aircraft Carrier",
        4 => "Battleship",
        3 => "Cruiser",
        2 => "Destroyer",
        1 => "Submarine",
        _ => "Unknown",
    }
}

/// Display helper which lists how many vessels of each class are counted on a board.
/// During setup that is the number left to place, during play the number afloat.
pub struct FleetTable<'a>(pub &'a Board);

impl fmt::Display for FleetTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let counts = self.0.remaining_counts();
        for size in (1..=MAX_VESSEL_SIZE).rev() {
            writeln!(
                f,
                "{}x  {:<16}  {}",
                counts[size - 1],
                vessel_name(size),
                size
            )?;
        }
        Ok(())
    }
}

/// Lay out two blocks of text next to each other, each under its own title.
pub fn side_by_side(left_title: &str, left: &str, right_title: &str, right: &str) -> String {
    let left: Vec<&str> = std::iter::once(left_title).chain(left.lines()).collect();
    let right: Vec<&str> = std::iter::once(right_title).chain(right.lines()).collect();
    let width = left.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        let line = format!("{:<width$}{}{}", l, GUTTER, r, width = width);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Frame a message in a box of asterisks.
pub fn banner(message: &str) -> String {
    let width = message.chars().count() + 6;
    let edge = "*".repeat(width);
    format!("{}\n*{:^inner$}*\n{}\n", edge, message, edge, inner = width - 2)
}
