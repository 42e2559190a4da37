//! Knight's Tour Example
//!
//! Builds a closed knight's tour and prints the board with the step at
//! which the knight visits each square.
//!
//! Usage: `knights-tour [ROWS COLS]`. Without arguments the board comes from
//! the `[board]` section of `tour.toml`, or 8x8 if there is none.

use std::process::ExitCode;

use tourforge::prelude::*;

fn board_from_args() -> Result<Option<(i64, i64)>, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(None),
        [rows, cols] => {
            let rows = rows.parse().map_err(|_| format!("invalid row count: {rows}"))?;
            let cols = cols.parse().map_err(|_| format!("invalid column count: {cols}"))?;
            Ok(Some((rows, cols)))
        }
        _ => Err("usage: knights-tour [ROWS COLS]".to_string()),
    }
}

fn main() -> ExitCode {
    tourforge::console::init();

    println!("TourForge Knight's Tour Example");
    println!("===============================\n");

    let config = match TourConfig::load("tour.toml") {
        Ok(config) => config,
        Err(tourforge::ConfigError::Io(_)) => TourConfig::default(),
        Err(e) => {
            eprintln!("tour.toml: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (rows, cols) = match board_from_args() {
        Ok(Some(board)) => board,
        Ok(None) => config.board.map_or((8, 8), |b| (b.rows, b.cols)),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Board: {rows}x{cols}\n");

    let tour = match knight_tour_with_config(rows, cols, &config) {
        Ok(tour) => tour,
        Err(e) if e.is_invalid_configuration() => {
            eprintln!("{e}");
            eprintln!("Supported boards have even sides of at least 6 that differ by at most 2.");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("tour construction failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("\n{}", tour.render());
    println!(
        "Visited {} squares, returning from {} to {}.",
        tour.len(),
        tour.as_slice()[tour.len() - 1],
        tour.as_slice()[0]
    );
    ExitCode::SUCCESS
}
