//! Item types and related helpers.
//!
//! Items represent objects the player can find in rooms and, when
//! collectible, move into the inventory. An item is owned by exactly one
//! holder at a time; its `location` always agrees with whichever holder
//! lists it.

use crate::{Id, Location, WorldObject};

use serde::{Deserialize, Serialize};

/// A named, optionally collectible object that can move from a room into
/// the player's inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    /// The stable id of this item.
    pub id: Id,
    /// The display name, used for player-facing lookup. Unique per room.
    pub name: String,
    /// A general description of the item.
    pub description: String,
    /// Whether the item can be taken. Fixed items stay where they are.
    pub collectible: bool,
    /// The current [`Location`] of the item.
    pub location: Location,
}

impl WorldObject for Item {
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

impl Item {
    /// Set location to a [`Room`](crate::Room) by id.
    pub fn set_location_room(&mut self, room_id: Id) {
        self.location = Location::Room(room_id);
    }
    /// Set location to the player inventory.
    pub fn set_location_inventory(&mut self) {
        self.location = Location::Inventory;
    }
}

/// Methods common to things that can hold items.
pub trait ItemHolder {
    /// Insert an item into the holder's contents.
    fn add_item(&mut self, item_id: Id);
    /// Remove an item from the holder's contents.
    fn remove_item(&mut self, item_id: &Id);
    /// Return `true` when the holder already contains the given item.
    fn contains_item(&self, item_id: &Id) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_item(id: &str) -> Item {
        Item {
            id: id.into(),
            name: "Test Item".into(),
            description: "A test item".into(),
            collectible: true,
            location: Location::Nowhere,
        }
    }

    #[test]
    fn set_location_room_updates_location() {
        let mut item = create_test_item("item");
        item.set_location_room("room".into());
        assert_eq!(item.location, Location::Room("room".into()));
    }

    #[test]
    fn set_location_inventory_updates_location() {
        let mut item = create_test_item("item");
        item.set_location_inventory();
        assert_eq!(item.location, Location::Inventory);
    }

    #[test]
    fn world_object_trait_works() {
        let item = create_test_item("item");
        assert_eq!(item.id(), "item");
        assert_eq!(item.name(), "Test Item");
        assert_eq!(item.description(), "A test item");
        assert_eq!(item.location(), &Location::Nowhere);
    }
}
