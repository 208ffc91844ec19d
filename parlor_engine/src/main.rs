#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Parlor **
//! A data-driven parlor-mystery exploration game.

use parlor_engine::style::GameStyle;
use parlor_engine::{load_game, load_game_from, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;

use log::info;

use std::io::Write;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Parlor world...");
    let mut game = match std::env::args().nth(1) {
        Some(path) => load_game_from(Path::new(&path)),
        None => load_game(),
    }
    .context("while loading the game world")?;
    info!("world '{}' loaded successfully", game.title);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    println!("{:^84}", game.title.to_uppercase().title_style());
    println!(
        "\nYou are {}, {}\n",
        game.player.name.bold().bright_blue(),
        game.player.description
    );
    println!("{}", game.intro.description_style());

    run_repl(&mut game)
}
