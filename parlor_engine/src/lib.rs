#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const PARLOR_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod character;
pub mod command;
pub mod ending;
pub mod game;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;

// Re-exports for convenience
pub use character::Character;
pub use ending::{Accusation, WinCondition};
pub use game::{Game, Location, WorldObject};
pub use item::{Item, ItemHolder};
pub use loader::{build_game_from_def, load_game, load_game_from};
pub use parlor_data::Id;
pub use player::Player;
pub use repl::run_repl;
pub use room::{Puzzle, Room};
