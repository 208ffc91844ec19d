//! Loader utilities for building a [`Game`] from world-definition data.
//!
//! World content is RON-backed. The world shipped with the engine is
//! embedded in the binary; an alternate world file can be supplied on the
//! command line. Definitions are validated before the game is built, so a
//! misconfigured dataset fails fast instead of surfacing mid-play.

use crate::ending::{Accusation, WinCondition};
use crate::{Character, Game, Item, ItemHolder, Location, Player, Room};

use anyhow::{Context, Result, bail};
use log::info;
use parlor_data::WorldDef;
use std::fs;
use std::path::Path;

/// The world shipped with the engine.
const DEFAULT_WORLD_RON: &str = include_str!("../data/world.ron");

/// Load the built-in world.
///
/// # Errors
/// Errors bubble up from deserialization or validation.
pub fn load_game() -> Result<Game> {
    let def: WorldDef = ron::from_str(DEFAULT_WORLD_RON).context("while parsing built-in world data")?;
    build_game_from_def(&def)
}

/// Load a world from a RON file on disk.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_game_from(path: &Path) -> Result<Game> {
    let text =
        fs::read_to_string(path).with_context(|| format!("while reading world file {}", path.display()))?;
    let def: WorldDef =
        ron::from_str(&text).with_context(|| format!("while parsing world file {}", path.display()))?;
    build_game_from_def(&def)
}

/// Build a runtime [`Game`] from a validated [`WorldDef`].
///
/// # Errors
/// Returns a single aggregated error when validation fails.
pub fn build_game_from_def(def: &WorldDef) -> Result<Game> {
    validate_def(def)?;

    let mut game = Game::new_empty();
    game.title = def.game.title.clone();
    game.intro = def.game.intro.clone();
    game.start_room = def.game.player.start_room.clone();
    game.win = WinCondition::from(&def.game.win);
    game.accusation = def.game.accusation.as_ref().map(Accusation::from);
    game.player = Player {
        name: def.game.player.name.clone(),
        description: def.game.player.description.clone(),
        location: Location::Nowhere,
        inventory: Vec::new(),
    };

    for room_def in &def.rooms {
        let room = Room {
            id: room_def.id.clone(),
            name: room_def.name.clone(),
            description: room_def.desc.clone(),
            puzzle: room_def.puzzle.as_ref().map(|p| crate::Puzzle {
                question: p.question.clone(),
                options: p.options.clone(),
                answer: p.answer.clone(),
            }),
            ..Room::default()
        };
        game.rooms.insert(room.id.clone(), room);
    }

    for item_def in &def.items {
        let mut item = Item {
            id: item_def.id.clone(),
            name: item_def.name.clone(),
            description: item_def.desc.clone(),
            collectible: item_def.collectible,
            location: Location::Nowhere,
        };
        if let Some(room) = game.rooms.get_mut(&item_def.location) {
            room.add_item(item.id.clone());
            item.set_location_room(item_def.location.clone());
        }
        game.items.insert(item.id.clone(), item);
    }

    for character_def in &def.characters {
        let character = Character {
            id: character_def.id.clone(),
            name: character_def.name.clone(),
            description: character_def.desc.clone(),
            line: character_def.line.clone(),
            location: Location::Room(character_def.location.clone()),
        };
        if let Some(room) = game.rooms.get_mut(&character_def.location) {
            room.occupants.push(character.id.clone());
        }
        game.characters.insert(character.id.clone(), character);
    }

    info!("{} rooms added to Game", game.rooms.len());
    info!("{} items added to Game", game.items.len());
    info!("{} characters added to Game", game.characters.len());
    Ok(game)
}

/// Validate the world definition and return a single aggregated error.
fn validate_def(def: &WorldDef) -> Result<()> {
    let errors = parlor_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("world validation failed:\n{details}");
}
