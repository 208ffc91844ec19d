//! Command module.
//!
//! Describes possible commands used during gameplay.

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Accuse(String),
    Answer(String),
    Help,
    Inventory,
    Look,
    MoveTo(String),
    Quit,
    Rooms,
    Take(String),
    TalkTo(String),
    Unknown,
}

/// Parses an input string and returns a corresponding `Command` if recognized.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["look"] | ["look", "around"] => Command::Look,
        ["rooms"] | ["map"] => Command::Rooms,
        ["go" | "move" | "enter", "to", rest @ ..] if !rest.is_empty() => {
            Command::MoveTo(rest.join(" "))
        },
        ["go" | "move" | "enter" | "visit", rest @ ..] if !rest.is_empty() => {
            Command::MoveTo(rest.join(" "))
        },
        ["take" | "get" | "collect", rest @ ..] if !rest.is_empty() => Command::Take(rest.join(" ")),
        ["talk" | "speak", "to" | "with", rest @ ..] if !rest.is_empty() => {
            Command::TalkTo(rest.join(" "))
        },
        ["answer" | "solve", rest @ ..] if !rest.is_empty() => Command::Answer(rest.join(" ")),
        ["accuse", rest @ ..] if !rest.is_empty() => Command::Accuse(rest.join(" ")),
        ["inventory" | "inv"] => Command::Inventory,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}
