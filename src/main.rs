mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use snadder::{defs, solve_board, Board, ExpectedRolls, SnadderMap};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let boards = match cli.size {
        Some(size) => vec![("custom", custom_board(cli, size)?)],
        None => defs::presets().context("building preset boards")?,
    };

    for (name, board) in boards {
        info!(name, %board, "solving");
        let expected =
            solve_board(&board).with_context(|| format!("solving board `{name}` ({board})"))?;
        print(&expected, cli.all);
    }
    Ok(())
}

fn custom_board(cli: &Cli, size: usize) -> Result<Board> {
    Board::builder(size)
        .snadders(cli.snadders.iter().copied().collect::<SnadderMap>())
        .dice_size(cli.dice)
        .transitive(cli.transitive)
        .exact(cli.exact)
        .build()
        .context("invalid board")
}

fn print(expected: &ExpectedRolls, all: bool) {
    if all {
        for (tile, e) in expected.as_array().iter().enumerate() {
            println!("{tile}\t{e}");
        }
    } else {
        println!("{}", expected.start());
    }
}
