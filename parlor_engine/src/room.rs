//! Room definitions and rendering.
//!
//! Any location the player can occupy is a `Room`: it lists the items and
//! characters present, optionally carries a puzzle, and renders its own
//! textual listing when entered.

use crate::{Character, Id, Item, ItemHolder, Location, WorldObject};

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;

/// Failure text shared by every unsuccessful puzzle attempt. A room with no
/// puzzle answers the same way as a wrong guess.
pub const MSG_WRONG_ANSWER: &str = "That's not the right answer.";

/// A question/options/answer triple gating a room's solved status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub question: String,
    /// Display-only choices, rendered in their original order.
    pub options: Vec<String>,
    pub answer: String,
}

impl Puzzle {
    /// Exact-match check against the configured answer. Case-sensitive,
    /// no trimming beyond what the caller supplies.
    pub fn check(&self, answer: &str) -> bool {
        self.answer == answer
    }
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    pub id: Id,
    /// Globally unique display name; the key used for navigation.
    pub name: String,
    pub description: String,
    pub puzzle: Option<Puzzle>,
    pub visited: bool,
    /// Set once the puzzle has been answered exactly. Never resets.
    pub solved: bool,
    /// Ids of items currently in the room, in placement order.
    pub contents: Vec<Id>,
    /// Ids of characters present. Fixed for the game's duration.
    pub occupants: Vec<Id>,
    pub location: Location,
}

impl WorldObject for Room {
    fn id(&self) -> &Id {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

impl ItemHolder for Room {
    fn add_item(&mut self, item_id: Id) {
        if !self.contents.contains(&item_id) {
            self.contents.push(item_id);
        }
    }

    fn remove_item(&mut self, item_id: &Id) {
        self.contents.retain(|id| id != item_id);
    }

    fn contains_item(&self, item_id: &Id) -> bool {
        self.contents.contains(item_id)
    }
}

impl Room {
    /// Mark the room visited and render its full listing.
    ///
    /// Idempotent with respect to `visited`; re-entering re-displays the
    /// whole listing, minus the puzzle prompt once it has been solved.
    pub fn enter(&mut self, items: &HashMap<Id, Item>, characters: &HashMap<Id, Character>) -> String {
        self.visited = true;
        self.describe(items, characters)
    }

    /// Compose the room listing without touching the visited flag.
    ///
    /// Sections with nothing to show are omitted entirely rather than
    /// rendered empty.
    pub fn describe(&self, items: &HashMap<Id, Item>, characters: &HashMap<Id, Character>) -> String {
        let mut output = format!("You enter the {}.\n{}\n", self.name, self.description);

        if let Some(puzzle) = &self.puzzle {
            if !self.solved {
                let _ = writeln!(output, "Puzzle: {}", puzzle.question);
                for option in &puzzle.options {
                    let _ = writeln!(output, "- {option}");
                }
            }
        }

        let item_names: Vec<_> = self
            .contents
            .iter()
            .filter_map(|id| items.get(id))
            .map(|item| item.name.clone())
            .collect();
        if !item_names.is_empty() {
            let _ = writeln!(output, "Items here: {}", item_names.join(", "));
        }

        let character_names: Vec<_> = self
            .occupants
            .iter()
            .filter_map(|id| characters.get(id))
            .map(|character| character.name.clone())
            .collect();
        if !character_names.is_empty() {
            let _ = writeln!(output, "People here: {}", character_names.join(", "));
        }

        output
    }

    /// Check an answer against the room's puzzle.
    ///
    /// An exact match sets `solved` and reports success; anything else --
    /// including a room with no puzzle at all -- reports the same failure
    /// and leaves state unchanged. Re-solving reports success again.
    pub fn solve_puzzle(&mut self, answer: &str) -> String {
        match &self.puzzle {
            Some(puzzle) if puzzle.check(answer) => {
                if !self.solved {
                    info!("puzzle solved in room '{}'", self.id);
                }
                self.solved = true;
                format!("Correct! You've solved the puzzle in the {}.", self.name)
            },
            _ => MSG_WRONG_ANSWER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_room(id: &str) -> Room {
        Room {
            id: id.into(),
            name: "Library".into(),
            description: "Dusty shelves line the walls.".into(),
            puzzle: Some(Puzzle {
                question: "Which book title doesn't belong?".into(),
                options: vec![
                    "War and Peace".into(),
                    "1984".into(),
                    "Toaster Manual".into(),
                    "Jane Eyre".into(),
                ],
                answer: "Toaster Manual".into(),
            }),
            visited: false,
            solved: false,
            contents: Vec::new(),
            occupants: Vec::new(),
            location: Location::Nowhere,
        }
    }

    fn empty_tables() -> (HashMap<Id, Item>, HashMap<Id, Character>) {
        (HashMap::new(), HashMap::new())
    }

    #[test]
    fn enter_sets_visited_and_is_idempotent() {
        let (items, characters) = empty_tables();
        let mut room = create_test_room("library");
        assert!(!room.visited);
        room.enter(&items, &characters);
        assert!(room.visited);
        room.enter(&items, &characters);
        assert!(room.visited);
    }

    #[test]
    fn enter_output_starts_with_name_and_description() {
        let (items, characters) = empty_tables();
        let mut room = create_test_room("library");
        let output = room.enter(&items, &characters);
        assert!(output.starts_with("You enter the Library.\nDusty shelves line the walls."));
    }

    #[test]
    fn enter_lists_puzzle_options_in_order() {
        let (items, characters) = empty_tables();
        let mut room = create_test_room("library");
        let output = room.enter(&items, &characters);
        assert!(output.contains("Puzzle: Which book title doesn't belong?"));
        let war = output.find("- War and Peace").unwrap();
        let orwell = output.find("- 1984").unwrap();
        let toaster = output.find("- Toaster Manual").unwrap();
        let eyre = output.find("- Jane Eyre").unwrap();
        assert!(war < orwell && orwell < toaster && toaster < eyre);
    }

    #[test]
    fn enter_omits_puzzle_once_solved() {
        let (items, characters) = empty_tables();
        let mut room = create_test_room("library");
        room.solve_puzzle("Toaster Manual");
        let output = room.enter(&items, &characters);
        assert!(!output.contains("Puzzle:"));
    }

    #[test]
    fn enter_omits_empty_sections() {
        let (items, characters) = empty_tables();
        let mut room = create_test_room("library");
        room.puzzle = None;
        let output = room.enter(&items, &characters);
        assert!(!output.contains("Puzzle:"));
        assert!(!output.contains("Items here:"));
        assert!(!output.contains("People here:"));
    }

    #[test]
    fn enter_lists_items_and_characters() {
        let (mut items, mut characters) = empty_tables();
        items.insert(
            "book".into(),
            Item {
                id: "book".into(),
                name: "Ancient Book".into(),
                description: "It has a riddle scribbled inside.".into(),
                collectible: true,
                location: Location::Room("library".into()),
            },
        );
        characters.insert(
            "butler".into(),
            Character {
                id: "butler".into(),
                name: "Butler".into(),
                description: "He looks nervous.".into(),
                line: "...".into(),
                location: Location::Room("library".into()),
            },
        );
        let mut room = create_test_room("library");
        room.contents.push("book".into());
        room.occupants.push("butler".into());
        let output = room.enter(&items, &characters);
        assert!(output.contains("Items here: Ancient Book"));
        assert!(output.contains("People here: Butler"));
    }

    #[test]
    fn solve_puzzle_exact_match_sets_solved() {
        let mut room = create_test_room("library");
        let result = room.solve_puzzle("Toaster Manual");
        assert!(room.solved);
        assert!(result.contains("Library"));
    }

    #[test]
    fn solve_puzzle_is_case_sensitive() {
        let mut room = create_test_room("library");
        assert_eq!(room.solve_puzzle("toaster manual"), MSG_WRONG_ANSWER);
        assert!(!room.solved);
    }

    #[test]
    fn solve_puzzle_wrong_answer_leaves_solved_alone() {
        let mut room = create_test_room("library");
        room.solve_puzzle("Toaster Manual");
        assert_eq!(room.solve_puzzle("1984"), MSG_WRONG_ANSWER);
        assert!(room.solved, "a wrong answer never un-solves");
    }

    #[test]
    fn solve_puzzle_resolving_reports_success_again() {
        let mut room = create_test_room("library");
        let first = room.solve_puzzle("Toaster Manual");
        let second = room.solve_puzzle("Toaster Manual");
        assert_eq!(first, second);
        assert!(room.solved);
    }

    #[test]
    fn solve_puzzle_without_puzzle_reports_wrong_answer() {
        let mut room = create_test_room("attic");
        room.puzzle = None;
        assert_eq!(room.solve_puzzle("anything"), MSG_WRONG_ANSWER);
        assert!(!room.solved);
    }

    #[test]
    fn item_holder_round_trip() {
        let mut room = create_test_room("library");
        room.add_item("book".into());
        assert!(room.contains_item(&"book".into()));
        // adding twice does not duplicate
        room.add_item("book".into());
        assert_eq!(room.contents.len(), 1);
        room.remove_item(&"book".into());
        assert!(!room.contains_item(&"book".into()));
    }
}
