use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    DuplicateName { kind: &'static str, name: String, context: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::DuplicateName { kind, name, context } => {
                write!(f, "duplicate {kind} name '{name}' ({context})")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// ```
/// use parlor_data::{GameDef, PlayerDef, RoomDef, WinDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         player: PlayerDef {
///             name: "Player".into(),
///             description: "a sleuth".into(),
///             start_room: "start".into(),
///         },
///         win: WinDef::HoldItem { item: "prize".into() },
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         puzzle: None,
///     }],
///     items: vec![parlor_data::ItemDef {
///         id: "prize".into(),
///         name: "Prize".into(),
///         desc: "Shiny.".into(),
///         collectible: true,
///         location: "start".into(),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();
    let mut characters = HashSet::new();

    track_ids(
        "room",
        world.rooms.iter().map(|r| r.id.as_str()),
        &mut rooms,
        &mut errors,
    );
    track_ids(
        "item",
        world.items.iter().map(|i| i.id.as_str()),
        &mut items,
        &mut errors,
    );
    track_ids(
        "character",
        world.characters.iter().map(|c| c.id.as_str()),
        &mut characters,
        &mut errors,
    );

    // Room names are the navigation key, so they must be globally unique.
    let mut room_names = HashSet::new();
    for room in &world.rooms {
        if !room_names.insert(room.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                kind: "room",
                name: room.name.clone(),
                context: "room names are used for navigation".to_string(),
            });
        }
    }

    if world.game.player.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game player start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &world.game.player.start_room,
            &rooms,
            "game player start room".to_string(),
            &mut errors,
        );
    }

    for item in &world.items {
        check_ref(
            "room",
            &item.location,
            &rooms,
            format!("location of item '{}'", item.id),
            &mut errors,
        );
    }
    for character in &world.characters {
        check_ref(
            "room",
            &character.location,
            &rooms,
            format!("location of character '{}'", character.id),
            &mut errors,
        );
    }

    // Item and character names are the player-facing lookup keys within a
    // room, so they must be unique per room.
    check_names_per_room("item", world.items.iter().map(|i| (&i.location, &i.name)), &mut errors);
    check_names_per_room(
        "character",
        world.characters.iter().map(|c| (&c.location, &c.name)),
        &mut errors,
    );

    let win_item = match &world.game.win {
        WinDef::AllSolvedAndItem { item } | WinDef::HoldItem { item } => item,
    };
    check_ref("item", win_item, &items, "win condition item".to_string(), &mut errors);

    for room in &world.rooms {
        if let Some(puzzle) = &room.puzzle {
            if puzzle.answer.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("empty puzzle answer in room '{}'", room.id),
                });
            }
        }
    }

    match (&world.game.win, &world.game.accusation) {
        (WinDef::AllSolvedAndItem { .. }, None) => {
            errors.push(ValidationError::InvalidValue {
                context: "win condition allSolvedAndItem requires an accusation lineup".to_string(),
            });
        },
        (_, Some(accusation)) => {
            if accusation.suspects.is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: "accusation lineup has no suspects".to_string(),
                });
            } else if !accusation.suspects.contains(&accusation.culprit) {
                errors.push(ValidationError::MissingReference {
                    kind: "suspect",
                    id: accusation.culprit.clone(),
                    context: "accusation culprit not in the suspect lineup".to_string(),
                });
            }
        },
        _ => {},
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(
    kind: &'static str,
    id: &str,
    known: &HashSet<&str>,
    context: String,
    errors: &mut Vec<ValidationError>,
) {
    if !known.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

fn check_names_per_room<'a>(
    kind: &'static str,
    entries: impl Iterator<Item = (&'a Id, &'a String)>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen: HashMap<&str, HashSet<&str>> = HashMap::new();
    for (room, name) in entries {
        if !seen.entry(room.as_str()).or_default().insert(name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                kind,
                name: name.clone(),
                context: format!("more than one in room '{room}'"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Test".into(),
                intro: "Intro".into(),
                player: PlayerDef {
                    name: "P".into(),
                    description: "tester".into(),
                    start_room: "library".into(),
                },
                win: WinDef::AllSolvedAndItem { item: "jewels".into() },
                accusation: Some(AccusationDef {
                    intro: "Who did it?".into(),
                    suspects: vec!["Butler".into(), "Maid".into()],
                    culprit: "Maid".into(),
                    confession: "It was me.".into(),
                }),
                ..GameDef::default()
            },
            rooms: vec![
                RoomDef {
                    id: "library".into(),
                    name: "Library".into(),
                    desc: "Books.".into(),
                    puzzle: Some(PuzzleDef {
                        question: "Odd one out?".into(),
                        options: vec!["A".into(), "B".into()],
                        answer: "B".into(),
                    }),
                },
                RoomDef {
                    id: "attic".into(),
                    name: "Attic".into(),
                    desc: "Dust.".into(),
                    puzzle: None,
                },
            ],
            items: vec![ItemDef {
                id: "jewels".into(),
                name: "Jewels".into(),
                desc: "Stolen.".into(),
                collectible: true,
                location: "attic".into(),
            }],
            characters: vec![CharacterDef {
                id: "maid".into(),
                name: "Maid".into(),
                desc: "Tidy.".into(),
                line: "Tea?".into(),
                location: "library".into(),
            }],
        }
    }

    #[test]
    fn valid_world_produces_no_errors() {
        assert!(validate_world(&minimal_world()).is_empty());
    }

    #[test]
    fn duplicate_room_id_reported() {
        let mut world = minimal_world();
        let mut dup = world.rooms[0].clone();
        dup.name = "Annex".into();
        world.rooms.push(dup);
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::DuplicateId { kind: "room", id } if id == "library"
        )));
    }

    #[test]
    fn duplicate_room_name_reported() {
        let mut world = minimal_world();
        let mut dup = world.rooms[0].clone();
        dup.id = "library2".into();
        world.rooms.push(dup);
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::DuplicateName { kind: "room", name, .. } if name == "Library"
        )));
    }

    #[test]
    fn missing_start_room_reported() {
        let mut world = minimal_world();
        world.game.player.start_room = "ballroom".into();
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { kind: "room", id, .. } if id == "ballroom"
        )));
    }

    #[test]
    fn dangling_item_location_reported() {
        let mut world = minimal_world();
        world.items[0].location = "cellar".into();
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { kind: "room", id, .. } if id == "cellar"
        )));
    }

    #[test]
    fn missing_win_item_reported() {
        let mut world = minimal_world();
        world.game.win = WinDef::AllSolvedAndItem { item: "crown".into() };
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { kind: "item", id, .. } if id == "crown"
        )));
    }

    #[test]
    fn culprit_outside_lineup_reported() {
        let mut world = minimal_world();
        if let Some(acc) = world.game.accusation.as_mut() {
            acc.culprit = "Gardener".into();
        }
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { kind: "suspect", id, .. } if id == "Gardener"
        )));
    }

    #[test]
    fn all_solved_win_requires_accusation() {
        let mut world = minimal_world();
        world.game.accusation = None;
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn hold_item_win_needs_no_accusation() {
        let mut world = minimal_world();
        world.game.win = WinDef::HoldItem { item: "jewels".into() };
        world.game.accusation = None;
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn duplicate_item_name_in_room_reported() {
        let mut world = minimal_world();
        world.items.push(ItemDef {
            id: "jewels2".into(),
            name: "Jewels".into(),
            desc: "Paste copies.".into(),
            collectible: true,
            location: "attic".into(),
        });
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::DuplicateName { kind: "item", name, .. } if name == "Jewels"
        )));
    }

    #[test]
    fn empty_puzzle_answer_reported() {
        let mut world = minimal_world();
        if let Some(puzzle) = world.rooms[0].puzzle.as_mut() {
            puzzle.answer = "  ".into();
        }
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidValue { .. })));
    }
}
