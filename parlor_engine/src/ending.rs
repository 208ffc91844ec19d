//! Win-condition policy and the accusation endgame.
//!
//! The win predicate is data, not code: each world picks one
//! [`WinCondition`] variant, so the full mystery ("solve every room and
//! hold the key item") and the simple variant ("just hold the key item")
//! are both expressible without branching in the engine.

use crate::{Game, Id, ItemHolder};

use parlor_data::{AccusationDef, WinDef};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Configurable end-of-game predicate evaluated by
/// [`Game::check_win_condition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// Every puzzle-bearing room solved and the named item in inventory.
    AllSolvedAndItem { item: Id },
    /// Holding the named item wins outright, no confrontation phase.
    HoldItem { item: Id },
}

impl Default for WinCondition {
    fn default() -> Self {
        WinCondition::HoldItem { item: Id::new() }
    }
}

impl WinCondition {
    /// Returns true when the predicate currently holds.
    ///
    /// Rooms without a puzzle never gate the win; their `solved` flag is
    /// meaningless.
    pub fn satisfied(&self, game: &Game) -> bool {
        match self {
            WinCondition::AllSolvedAndItem { item } => {
                let all_solved = game.rooms.values().all(|room| room.puzzle.is_none() || room.solved);
                all_solved && game.player.contains_item(item)
            },
            WinCondition::HoldItem { item } => game.player.contains_item(item),
        }
    }

    /// The id of the item this condition hinges on.
    pub fn key_item(&self) -> &Id {
        match self {
            WinCondition::AllSolvedAndItem { item } | WinCondition::HoldItem { item } => item,
        }
    }
}

impl From<&WinDef> for WinCondition {
    fn from(def: &WinDef) -> Self {
        match def {
            WinDef::AllSolvedAndItem { item } => WinCondition::AllSolvedAndItem { item: item.clone() },
            WinDef::HoldItem { item } => WinCondition::HoldItem { item: item.clone() },
        }
    }
}

/// Suspect lineup and resolution text for the final confrontation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accusation {
    /// Scene-setting text shown when the confrontation begins.
    pub intro: String,
    /// Names offered to the player, in lineup order.
    pub suspects: Vec<String>,
    /// The one correct answer. Exact match required.
    pub culprit: String,
    /// The culprit's confession, delivered on a correct accusation.
    pub confession: String,
}

impl Accusation {
    /// Render the confrontation prompt with the suspect lineup.
    pub fn prompt(&self) -> String {
        let mut output = format!("Final Confrontation:\n{}\n", self.intro);
        for suspect in &self.suspects {
            let _ = writeln!(output, "- {suspect}");
        }
        output
    }

    /// Exact-match check against the configured culprit.
    pub fn is_culprit(&self, name: &str) -> bool {
        self.culprit == name
    }
}

impl From<&AccusationDef> for Accusation {
    fn from(def: &AccusationDef) -> Self {
        Accusation {
            intro: def.intro.clone(),
            suspects: def.suspects.clone(),
            culprit: def.culprit.clone(),
            confession: def.confession.clone(),
        }
    }
}
