//! Character module.
//!
//! Characters are the suspects and bystanders of the mystery. Each one is
//! bound to a single room for the whole game and responds to interaction
//! with one fixed line of dialogue.

use crate::{Id, Location, WorldObject};

use serde::{Deserialize, Serialize};

/// A named character with a single fixed dialogue response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Character {
    pub id: Id,
    pub name: String,
    pub description: String,
    /// The line delivered on interaction. The dataset never needs dynamic
    /// dialogue, so this is plain text rather than a strategy object.
    pub line: String,
    pub location: Location,
}

impl Character {
    /// Returns the character's dialogue line. Repeatable, no state change.
    pub fn interact(&self) -> String {
        self.line.clone()
    }
}

impl WorldObject for Character {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interact_returns_the_bound_line() {
        let butler = Character {
            id: "butler".into(),
            name: "Butler".into(),
            description: "He looks nervous.".into(),
            line: "I saw someone sneaking into the attic last night.".into(),
            location: Location::Room("library".into()),
        };
        assert_eq!(butler.interact(), "I saw someone sneaking into the attic last night.");
        // repeat interaction gives the same line
        assert_eq!(butler.interact(), butler.interact());
    }

    #[test]
    fn world_object_trait_works() {
        let character = Character {
            id: "maid".into(),
            name: "Maid".into(),
            description: "She offers you tea.".into(),
            line: "Tea?".into(),
            location: Location::Room("study".into()),
        };
        assert_eq!(character.id(), "maid");
        assert_eq!(character.name(), "Maid");
        assert_eq!(character.location(), &Location::Room("study".into()));
    }
}
