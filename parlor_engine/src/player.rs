//! Player module.
//!
//! The player carries the inventory and a current location. Before
//! [`Game::start`](crate::Game::start) runs, the location is `Nowhere`.

use crate::{Id, ItemHolder, Location, WorldObject};

use serde::{Deserialize, Serialize};

/// The player character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub description: String,
    pub location: Location,
    /// Collected item ids, in collection order. Grows only.
    pub inventory: Vec<Id>,
}

impl WorldObject for Player {
    fn id(&self) -> &Id {
        &self.name
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

impl ItemHolder for Player {
    fn add_item(&mut self, item_id: Id) {
        if !self.inventory.contains(&item_id) {
            self.inventory.push(item_id);
        }
    }

    fn remove_item(&mut self, item_id: &Id) {
        self.inventory.retain(|id| id != item_id);
    }

    fn contains_item(&self, item_id: &Id) -> bool {
        self.inventory.contains(item_id)
    }
}
