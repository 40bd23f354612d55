#![cfg(feature = "std")]

//! Interactive console front end. Works against any `GameApi`, local or
//! remote, and keeps its own view of the board: the service never reveals
//! more than the flagship layout and per-shot results.

use std::io::{self, Write};

use crate::api::GameApi;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::protocol::ShotReport;

const EMPTY: char = '.';
const SHIP: char = 'S';
const HIT: char = 'X';
const MISS: char = 'O';
const SUNK: char = '#';

/// Only the length-5 flagship is revealed on the display; the destroyers
/// stay hidden and are the ones the player hunts.
const FLAGSHIP_LENGTH: usize = 5;
const HIDDEN_SHIPS: usize = 2;

type BoardView = [[char; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Run the interactive shot loop until the player quits.
pub async fn run_console(api: &mut dyn GameApi) -> anyhow::Result<()> {
    println!("Welcome to Broadside!");
    println!("Enter coordinates (A1 - J10) to fire shots.");
    println!("Type 'reset' to restart, or 'exit' to quit.\n");

    let mut board = start_game(api).await?;
    let mut sunk = 0usize;
    draw_board(&board);

    loop {
        print!("\nEnter your shot (e.g., A5): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim().to_ascii_uppercase();

        match input.as_str() {
            "EXIT" => break,
            "RESET" => {
                board = start_game(api).await?;
                sunk = 0;
                draw_board(&board);
                continue;
            }
            "" => continue,
            _ => {}
        }

        let target = match Coord::parse(&input) {
            Ok(coord) => coord,
            Err(_) => {
                println!("Invalid input!");
                continue;
            }
        };
        match cell(&board, target) {
            SHIP => {
                println!("You cannot fire at your own battleship!");
                continue;
            }
            HIT | MISS | SUNK => {
                println!("Already fired at this position!");
                continue;
            }
            _ => {}
        }

        let report = api.fire(&input).await?;
        if apply_report(&mut board, target, &report) {
            sunk += 1;
        }
        println!("{}", report.message);
        draw_board(&board);

        if sunk == HIDDEN_SHIPS {
            println!("\nBOOM! You sank them all!");
            print!("Press ENTER to restart or type 'exit' to quit: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            if line.trim().eq_ignore_ascii_case("exit") {
                break;
            }
            board = start_game(api).await?;
            sunk = 0;
            draw_board(&board);
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Reset the game and seed a fresh display from the fleet layout.
async fn start_game(api: &mut dyn GameApi) -> anyhow::Result<BoardView> {
    let message = api.reset().await?;
    println!("{}", message);

    let mut board = [[EMPTY; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for ship in api.ships().await? {
        if ship.original_cells.len() == FLAGSHIP_LENGTH {
            for [row, col] in ship.original_cells {
                board[row as usize][col as usize] = SHIP;
            }
        }
    }
    Ok(board)
}

fn cell(board: &BoardView, coord: Coord) -> char {
    board[coord.row as usize][coord.col as usize]
}

/// Mark the shot on the display. Returns `true` when the report carries a
/// sunk ship, whose whole footprint gets painted.
fn apply_report(board: &mut BoardView, target: Coord, report: &ShotReport) -> bool {
    if let Some(cells) = &report.sunk_cells {
        for [row, col] in cells {
            board[*row as usize][*col as usize] = SUNK;
        }
        return true;
    }
    if report.message == "Hit!" {
        board[target.row as usize][target.col as usize] = HIT;
    } else if report.message == "Miss!" {
        board[target.row as usize][target.col as usize] = MISS;
    }
    false
}

fn draw_board(board: &BoardView) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!("{} ", (b'A' + col) as char);
    }
    println!();
    for (row, cells) in board.iter().enumerate() {
        print!("{:2} ", row + 1);
        for ch in cells {
            print!("{} ", ch);
        }
        println!();
    }
}
