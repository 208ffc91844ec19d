//! Game state and the player-facing operation surface.
//!
//! [`Game`] owns every room, item, and character plus the player, and
//! exposes the operations the presentation layer drives: movement, item
//! collection, dialogue, puzzle answers, and the accusation endgame.
//!
//! Every operation returns a human-readable result string. Failures are
//! normal returns, never errors: the game stays valid and playable after
//! any of them, and the caller may retry immediately.

use crate::PARLOR_VERSION;
use crate::ending::{Accusation, WinCondition};
use crate::item::ItemHolder;
use crate::room::MSG_WRONG_ANSWER;
use crate::{Character, Id, Item, Player, Room};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use variantly::Variantly;

/// Failure text for navigation to an unknown room.
pub const MSG_ROOM_NOT_FOUND: &str = "Room not found.";
/// Failure text for a missing or fixed item. Collectibility is a silent
/// gate: the player is not told which of the two applied.
pub const MSG_CANT_COLLECT: &str = "You can't collect that.";
/// Failure text for a dialogue attempt with nobody matching.
pub const MSG_NO_ONE_HERE: &str = "No one by that name here.";
/// Progress text while the win condition does not yet hold.
pub const MSG_KEEP_EXPLORING: &str = "Keep exploring...";
/// Refusal text for an accusation made before the confrontation.
pub const MSG_NO_CONFRONTATION: &str = "You haven't reached the confrontation yet.";

/// Kinds of places where a world object may be located.
///
/// Rooms are the locations themselves, so their own location is always
/// `Nowhere`; so is the player's before [`Game::start`] runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Variantly, PartialEq, Eq)]
pub enum Location {
    Inventory,
    #[default]
    Nowhere,
    Room(Id),
}

/// Methods common to any object in the world.
pub trait WorldObject {
    fn id(&self) -> &Id;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn location(&self) -> &Location;
}

/// Complete state of one playthrough.
///
/// Created by the loader, then mutated only in direct response to player
/// actions. `is_over` and `suspect_revealed` are monotonic: once set they
/// never clear.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub intro: String,
    pub rooms: HashMap<Id, Room>,
    pub items: HashMap<Id, Item>,
    pub characters: HashMap<Id, Character>,
    pub player: Player,
    pub start_room: Id,
    pub win: WinCondition,
    pub accusation: Option<Accusation>,
    pub is_over: bool,
    pub suspect_revealed: bool,
    pub turn_count: usize,
    pub version: String,
}

impl Game {
    /// Create a new empty game with a default player.
    pub fn new_empty() -> Game {
        Game {
            version: PARLOR_VERSION.to_string(),
            ..Game::default()
        }
    }

    /// Look up a room id by exact display name.
    fn room_id_by_name(&self, name: &str) -> Option<Id> {
        self.rooms.values().find(|room| room.name == name).map(|room| room.id.clone())
    }

    /// Reference to the room the player occupies, or `None` before the
    /// game has started.
    pub fn current_room(&self) -> Option<&Room> {
        self.player.location.room_ref().and_then(|id| self.rooms.get(id))
    }

    fn current_room_mut(&mut self) -> Option<&mut Room> {
        match &self.player.location {
            Location::Room(id) => self.rooms.get_mut(id),
            _ => None,
        }
    }

    /// Items currently held by the player, in collection order.
    pub fn inventory_items(&self) -> Vec<&Item> {
        self.player.inventory.iter().filter_map(|id| self.items.get(id)).collect()
    }

    /// Begin play by entering the configured start room.
    ///
    /// A world with no such room is a configuration error; it surfaces as
    /// the same not-found text rather than a distinct kind, since the
    /// loader validates this before play begins.
    pub fn start(&mut self) -> String {
        let Some(name) = self.rooms.get(&self.start_room).map(|room| room.name.clone()) else {
            warn!("start room '{}' missing from world data", self.start_room);
            return MSG_ROOM_NOT_FOUND.to_string();
        };
        info!("'{}' begins in the {name}", self.title);
        self.move_to(&name)
    }

    /// Move the player to the room with the given exact name.
    ///
    /// An unknown name leaves the current room unchanged. A hit always
    /// re-renders the full room listing, visited or not.
    pub fn move_to(&mut self, room_name: &str) -> String {
        let Some(room_id) = self.room_id_by_name(room_name) else {
            info!("move to unknown room '{room_name}' refused");
            return MSG_ROOM_NOT_FOUND.to_string();
        };
        self.player.location = Location::Room(room_id.clone());
        let Some(room) = self.rooms.get_mut(&room_id) else {
            return MSG_ROOM_NOT_FOUND.to_string();
        };
        room.enter(&self.items, &self.characters)
    }

    /// Transfer the named item from the current room into the inventory.
    ///
    /// Removal is name-based: every item in the room carrying that exact
    /// name leaves it, keeping room contents and inventory disjoint.
    pub fn collect_item(&mut self, item_name: &str) -> String {
        let Some(room_id) = self.player.location.room_ref().cloned() else {
            return MSG_CANT_COLLECT.to_string();
        };
        let matching: Vec<Id> = self
            .rooms
            .get(&room_id)
            .map(|room| {
                room.contents
                    .iter()
                    .filter(|id| self.items.get(*id).is_some_and(|item| item.name == item_name))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let Some(item_id) = matching.first().cloned() else {
            info!("collect refused: no item named '{item_name}' in room '{room_id}'");
            return MSG_CANT_COLLECT.to_string();
        };
        if !self.items.get(&item_id).is_some_and(|item| item.collectible) {
            info!("collect refused: item '{item_id}' is fixed in place");
            return MSG_CANT_COLLECT.to_string();
        }

        if let Some(room) = self.rooms.get_mut(&room_id) {
            for id in &matching {
                room.remove_item(id);
            }
        }
        self.player.add_item(item_id.clone());
        if let Some(item) = self.items.get_mut(&item_id) {
            item.set_location_inventory();
        }
        // same-named duplicates leave the world entirely
        for id in matching.iter().filter(|id| **id != item_id) {
            if let Some(item) = self.items.get_mut(id) {
                item.location = Location::Nowhere;
            }
        }
        info!("player collected '{item_id}' from room '{room_id}'");
        format!("You picked up the {item_name}.")
    }

    /// Return the named character's dialogue line.
    pub fn interact_with(&self, character_name: &str) -> String {
        let Some(room) = self.current_room() else {
            return MSG_NO_ONE_HERE.to_string();
        };
        room.occupants
            .iter()
            .filter_map(|id| self.characters.get(id))
            .find(|character| character.name == character_name)
            .map_or_else(|| MSG_NO_ONE_HERE.to_string(), Character::interact)
    }

    /// Check an answer against the current room's puzzle.
    pub fn solve_current_puzzle(&mut self, answer: &str) -> String {
        match self.current_room_mut() {
            Some(room) => room.solve_puzzle(answer),
            None => MSG_WRONG_ANSWER.to_string(),
        }
    }

    /// Evaluate the configured win predicate.
    ///
    /// Not automatic: the presentation layer calls this after each
    /// state-changing action to surface the transition. For the full
    /// mystery it opens the confrontation; for the simple hold-the-item
    /// variant it ends the game outright.
    pub fn check_win_condition(&mut self) -> String {
        if !self.win.satisfied(self) {
            return MSG_KEEP_EXPLORING.to_string();
        }
        match &self.win {
            WinCondition::AllSolvedAndItem { .. } => self.final_confrontation(),
            WinCondition::HoldItem { item } => {
                self.is_over = true;
                let name = self.items.get(item).map_or(item.as_str(), |i| i.name.as_str());
                info!("win condition met: player holds '{item}'");
                format!("With the {name} in hand, the case is closed. You win!")
            },
        }
    }

    /// Open the confrontation phase and present the suspect lineup.
    pub fn final_confrontation(&mut self) -> String {
        let Some(accusation) = &self.accusation else {
            // validated out at load time; resolve gracefully anyway
            warn!("win condition met but no accusation lineup configured");
            self.is_over = true;
            return "The mystery resolves itself. Case closed.".to_string();
        };
        self.suspect_revealed = true;
        info!("final confrontation reached; suspects revealed");
        accusation.prompt()
    }

    /// Accuse a suspect by exact name.
    ///
    /// Refused until the confrontation has been reached. A correct
    /// accusation concludes the game; a wrong one changes nothing and may
    /// be retried without limit.
    pub fn accuse(&mut self, name: &str) -> String {
        if !self.suspect_revealed {
            return MSG_NO_CONFRONTATION.to_string();
        }
        let Some(accusation) = &self.accusation else {
            return MSG_NO_CONFRONTATION.to_string();
        };
        if accusation.is_culprit(name) {
            self.is_over = true;
            info!("correct accusation: {name}. game concluded");
            format!("{}\nYou solved the mystery!", accusation.confession)
        } else {
            info!("wrong accusation: {name}");
            format!("{name} looks confused. \"I had nothing to do with it!\"\nWrong accusation. The real thief escapes...")
        }
    }
}
