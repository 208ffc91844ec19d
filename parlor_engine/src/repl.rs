//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. Handlers here resolve the
//! player's loosely-typed input to canonical entity names, call the exact-
//! match [`Game`] operations, and print the returned text. After each
//! state-changing action the win condition is re-checked and its verdict
//! shown, which is how the confrontation surfaces.

mod input;

use crate::command::{Command, parse_command};
use crate::game::MSG_KEEP_EXPLORING;
use crate::style::GameStyle;
use crate::{Game, WorldObject};

use anyhow::Result;
use colored::Colorize;
use log::info;
use textwrap::{fill, termwidth};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the game concludes or the user
/// quits.
///
/// Starts the game (entering the configured start room) before the first
/// prompt.
///
/// # Errors
/// - Propagates input backend failures that survive the stdin fallback.
pub fn run_repl(game: &mut Game) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    let mut input_manager = InputManager::new();
    game.turn_count = 1;

    print_section("scene");
    print_block(&game.start());

    loop {
        let solved = game.rooms.values().filter(|room| room.solved).count();
        let prompt = format!("\n[Turn: {} | Solved: {}/{}]>> ", game.turn_count, solved, game.rooms.len())
            .prompt_style()
            .to_string();

        let Ok(input_event) = input_manager.read_line(&prompt) else {
            println!("{}", "Failed to read input. Try again.".error_style());
            continue;
        };

        let input = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                println!("Command canceled.");
                continue;
            },
        };

        let command = parse_command(&input);
        match &command {
            Look => look_handler(game),
            Rooms => rooms_handler(game),
            MoveTo(name) => move_handler(game, name),
            Take(name) => take_handler(game, name),
            TalkTo(name) => talk_handler(game, name),
            Answer(answer) => answer_handler(game, answer),
            Accuse(name) => accuse_handler(game, name),
            Inventory => inventory_handler(game),
            Help => help_handler(),
            Quit => {
                if let ReplControl::Quit = quit_handler(game) {
                    break;
                }
            },
            Unknown => {
                println!("{}", "Didn't quite catch that. Try 'help'.".error_style());
            },
        }

        if !matches!(command, Unknown) {
            game.turn_count += 1;
        }

        if game.is_over {
            println!("\n{}", "THE END".title_style());
            println!("Thanks for playing {}.", game.title.bold());
            break;
        }
    }
    Ok(())
}

/// Re-display the current room without re-triggering anything.
fn look_handler(game: &Game) {
    if let Some(room) = game.current_room() {
        print_section("scene");
        print_block(&room.describe(&game.items, &game.characters));
    }
}

/// List every room in the manor, marking the ones already visited.
fn rooms_handler(game: &Game) {
    println!("{}", "Rooms".subheading_style());
    let mut names: Vec<_> = game.rooms.values().map(|room| (room.name.clone(), room.visited)).collect();
    names.sort();
    for (name, visited) in names {
        if visited {
            println!("  {} {}", name.room_style(), "(visited)".dimmed());
        } else {
            println!("  {}", name.room_style());
        }
    }
}

fn move_handler(game: &mut Game, query: &str) {
    let name = resolve_room(game, query).unwrap_or_else(|| query.to_string());
    print_section("scene");
    print_block(&game.move_to(&name));
}

fn take_handler(game: &mut Game, query: &str) {
    let name = resolve_item(game, query).unwrap_or_else(|| query.to_string());
    print_block(&game.collect_item(&name));
    print_verdict(&game.check_win_condition());
}

fn talk_handler(game: &Game, query: &str) {
    match resolve_character(game, query) {
        Some(name) => {
            let line = game.interact_with(&name);
            println!("{}: {line}", name.npc_style());
            info!("player talked to '{name}'");
        },
        None => print_block(&game.interact_with(query)),
    }
}

fn answer_handler(game: &mut Game, answer: &str) {
    let answer = resolve_answer(game, answer).unwrap_or_else(|| answer.to_string());
    print_block(&game.solve_current_puzzle(&answer));
    print_verdict(&game.check_win_condition());
}

fn accuse_handler(game: &mut Game, query: &str) {
    let name = resolve_suspect(game, query).unwrap_or_else(|| query.to_string());
    print_block(&game.accuse(&name));
}

/// Show the collected items, with descriptions.
fn inventory_handler(game: &Game) {
    println!("{}", "Inventory".subheading_style());
    let items = game.inventory_items();
    if items.is_empty() {
        println!("  {}", "Inventory is empty.".dimmed());
    } else {
        for item in items {
            println!("  {} -- {}", item.name().item_style(), item.description());
        }
    }
}

/// Show available commands.
fn help_handler() {
    println!("{}", "Commands".subheading_style());
    println!("  look                look around the current room");
    println!("  rooms               list the rooms of the manor");
    println!("  go <room>           move to a room (also: move, enter, visit)");
    println!("  take <item>         pick up an item (also: get, collect)");
    println!("  talk to <person>    hear what someone has to say");
    println!("  answer <choice>     answer the current room's puzzle (also: solve)");
    println!("  accuse <suspect>    name the thief, once the confrontation begins");
    println!("  inventory           list what you carry (also: inv)");
    println!("  quit                leave the game (also: exit)");
}

/// Quit the game.
fn quit_handler(game: &Game) -> ReplControl {
    info!("player quit after {} turns", game.turn_count);
    info!("ending inventory:");
    for item in game.inventory_items() {
        info!("- {} ({})", item.name(), item.id());
    }
    let visited = game.rooms.values().filter(|room| room.visited).count();
    println!(
        "You visited {visited} of {} rooms. The mystery keeps its secrets... for now.",
        game.rooms.len()
    );
    ReplControl::Quit
}

/// Resolve loose input to a canonical room name, case-insensitively.
fn resolve_room(game: &Game, query: &str) -> Option<String> {
    let query = query.to_lowercase();
    game.rooms
        .values()
        .find(|room| room.name.to_lowercase().contains(&query))
        .map(|room| room.name.clone())
}

/// Resolve loose input to the canonical name of an item in the current room.
fn resolve_item(game: &Game, query: &str) -> Option<String> {
    let room = game.current_room()?;
    let query = query.to_lowercase();
    room.contents
        .iter()
        .filter_map(|id| game.items.get(id))
        .find(|item| item.name.to_lowercase().contains(&query))
        .map(|item| item.name.clone())
}

/// Resolve loose input to the canonical name of a character in the current room.
fn resolve_character(game: &Game, query: &str) -> Option<String> {
    let room = game.current_room()?;
    let query = query.to_lowercase();
    room.occupants
        .iter()
        .filter_map(|id| game.characters.get(id))
        .find(|character| character.name.to_lowercase().contains(&query))
        .map(|character| character.name.clone())
}

/// Resolve loose input to one of the current puzzle's listed options.
/// Answers stay exact-match in the engine; this only fixes capitalization.
fn resolve_answer(game: &Game, answer: &str) -> Option<String> {
    let puzzle = game.current_room()?.puzzle.as_ref()?;
    puzzle
        .options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(answer))
        .cloned()
}

/// Resolve loose input to a name from the suspect lineup.
fn resolve_suspect(game: &Game, query: &str) -> Option<String> {
    let accusation = game.accusation.as_ref()?;
    accusation
        .suspects
        .iter()
        .find(|suspect| suspect.eq_ignore_ascii_case(query))
        .cloned()
}

fn display_width() -> usize {
    termwidth().min(84)
}

fn print_section(label: &str) {
    println!("{:.>width$}", label.section_style(), width = display_width());
}

/// Print a multi-line engine result, wrapping each line to the terminal.
fn print_block(text: &str) {
    let width = display_width();
    for line in text.lines() {
        println!("{}", fill(line, width));
    }
}

/// Print a win-condition verdict; routine encouragement is dimmed so the
/// confrontation stands out when it finally arrives.
fn print_verdict(verdict: &str) {
    if verdict == MSG_KEEP_EXPLORING {
        println!("{}", verdict.italic().dimmed());
    } else {
        print_block(verdict);
    }
}
