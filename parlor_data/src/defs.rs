use serde::{Deserialize, Serialize};

/// Stable identifier used across `WorldDef` references.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub characters: Vec<CharacterDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    pub intro: String,
    pub player: PlayerDef,
    pub win: WinDef,
    /// Suspect lineup for the final confrontation. Required whenever `win`
    /// is `AllSolvedAndItem`; simple hold-the-item worlds may omit it.
    #[serde(default)]
    pub accusation: Option<AccusationDef>,
}

impl Default for GameDef {
    fn default() -> Self {
        Self {
            title: String::new(),
            blurb: String::new(),
            intro: String::new(),
            player: PlayerDef::default(),
            win: WinDef::HoldItem { item: String::new() },
            accusation: None,
        }
    }
}

/// Player definition.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerDef {
    pub name: String,
    pub description: String,
    pub start_room: Id,
}

/// How the game is won.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WinDef {
    /// Every room's puzzle solved and the named item in the inventory.
    AllSolvedAndItem { item: Id },
    /// Holding the named item wins outright.
    HoldItem { item: Id },
}

/// Suspect lineup and resolution text for the accusation endgame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccusationDef {
    pub intro: String,
    pub suspects: Vec<String>,
    pub culprit: String,
    pub confession: String,
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub puzzle: Option<PuzzleDef>,
}

/// A question/options/answer triple gating a room's solved status.
///
/// `options` are display-only; they are not validated against `answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDef {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
}

/// Item definition with its starting room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default = "default_collectible")]
    pub collectible: bool,
    pub location: Id,
}

/// Character definition with its fixed dialogue line and home room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    pub line: String,
    pub location: Id,
}

fn default_collectible() -> bool {
    true
}
