//! Line-oriented shell: prints the board, reads a column per line, and
//! re-prompts until the game ends or input runs out.

use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};
use tracing::debug;

use crate::game::{Board, Cell, Game, GameStatus, Player};

const MARKER: &str = "O";

fn marker_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => Color::White,
        Cell::Occupied(Player::Red) => Color::Red,
        Cell::Occupied(Player::Yellow) => Color::Yellow,
    }
}

/// Write the board, one marker per cell. Without `color` every cell is a bare
/// `O` for occupied or `.` for empty.
pub fn display_board<W: Write>(out: &mut W, board: &Board, color: bool) -> io::Result<()> {
    for row in board.iter_rows() {
        write!(out, " ")?;
        for &cell in row {
            if color {
                write!(out, "{} ", MARKER.with(marker_color(cell)))?;
            } else {
                let marker = if cell == Cell::Empty { "." } else { MARKER };
                write!(out, "{marker} ")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Play `game` to completion reading columns from `input`.
///
/// Returns the final status, or `None` if input ended first.
pub fn run_plain<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    out: &mut W,
    color: bool,
) -> io::Result<Option<GameStatus>> {
    display_board(out, game.board(), color)?;

    let mut line = String::new();
    loop {
        write!(out, "Choose a column to play: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        let column: isize = match line.trim().parse() {
            Ok(column) => column,
            Err(err) => {
                writeln!(out, "Invalid input: {err}")?;
                continue;
            }
        };

        let outcome = match game.play(column) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(%err, "move rejected");
                writeln!(out, "Invalid move: {err}")?;
                continue;
            }
        };

        writeln!(out)?;
        display_board(out, game.board(), color)?;

        match outcome.status {
            GameStatus::Won(player) => {
                writeln!(out, "Player {} won!", player.index() + 1)?;
                return Ok(Some(outcome.status));
            }
            GameStatus::Draw => {
                writeln!(out, "Game ended in draw")?;
                return Ok(Some(outcome.status));
            }
            GameStatus::InProgress => {}
        }
    }
}
