//! World content files.
//!
//! A content file is JSON describing rooms, their exits and occupants, the
//! start room, and which gifts count towards the quest. Loading goes through
//! the same validating setters as assembling a world by hand.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::character::Character;
use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::room::Room;
use crate::world::WorldGraph;

/// The castle world shipped with the game.
const CASTLE_JSON: &str = include_str!("../assets/castle.json");

/// Gift labels the quest ending looks for, one per quest role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestItems {
    /// Something valuable enough to pay a ransom.
    pub queen: String,
    /// A gem that can also pay the ransom.
    pub dragon: String,
    /// A weapon to fight the wizard with.
    pub knight: String,
    /// Food for the journey.
    pub cook: String,
    /// A map to the wizard's lair.
    pub princess: String,
}

impl Default for QuestItems {
    fn default() -> Self {
        Self {
            queen: "a bag of coins".to_string(),
            dragon: "a purple sapphire".to_string(),
            knight: "a shiny silver sword".to_string(),
            cook: "carefully wrapped food".to_string(),
            princess: "a rolled map of the area".to_string(),
        }
    }
}

/// A whole world as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldContent {
    /// Display title.
    pub title: String,
    /// Name of the room new sessions start in.
    pub start: String,
    /// Quest gift labels. Defaults to the castle's.
    #[serde(default)]
    pub quest_items: QuestItems,
    /// Rooms in display order.
    pub rooms: Vec<RoomContent>,
}

/// One room in a content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomContent {
    /// Room name, unique within the world.
    pub name: String,
    /// Room description.
    pub description: String,
    /// Directed exits, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exits: Vec<ExitContent>,
    /// Characters in the room. Only the first one is interactive.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occupants: Vec<CharacterContent>,
}

/// A directed exit in a content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitContent {
    /// Direction of travel.
    pub direction: Direction,
    /// Name of the destination room.
    pub to: String,
}

/// A character in a content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterContent {
    /// Character name.
    pub name: String,
    /// Character description.
    pub description: String,
    /// What the character says when talked to.
    pub dialogue: String,
    /// Gift handed over on `take`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<String>,
}

impl WorldContent {
    /// Parse content from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize content as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture an assembled world as content.
    pub fn from_world(world: &WorldGraph) -> CoreResult<Self> {
        let start = world
            .start()
            .and_then(|id| world.room(id))
            .ok_or(CoreError::NoStartRoom)?;

        let rooms = world
            .rooms()
            .map(|room| RoomContent {
                name: room.name().to_string(),
                description: room.description().to_string(),
                exits: world
                    .linked_directions(room.id())
                    .into_iter()
                    .map(|(direction, to)| ExitContent {
                        direction,
                        to: to.to_string(),
                    })
                    .collect(),
                occupants: room
                    .occupants()
                    .iter()
                    .map(|c| CharacterContent {
                        name: c.name().to_string(),
                        description: c.description().to_string(),
                        dialogue: c.dialogue().to_string(),
                        gift: c.gift().map(str::to_string),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            title: world.title.clone(),
            start: start.name().to_string(),
            quest_items: world.quest_items.clone(),
            rooms,
        })
    }

    /// Assemble and validate the world graph.
    ///
    /// Rooms are added first and exits linked afterwards, so exits may name
    /// rooms that appear later in the file.
    pub fn build(&self) -> CoreResult<WorldGraph> {
        let mut world = WorldGraph::new(&self.title);
        world.quest_items = self.quest_items.clone();

        for def in &self.rooms {
            let mut room = Room::new(&def.name);
            room.set_description(&def.description)?;
            for occupant in &def.occupants {
                room.add_occupant(occupant.build()?);
            }
            world.add_room(room)?;
        }

        for def in &self.rooms {
            let from = lookup(&world, &def.name)?;
            for exit in &def.exits {
                let to = lookup(&world, &exit.to)?;
                world.link(from, exit.direction, to)?;
            }
        }

        let start = lookup(&world, &self.start)?;
        world.set_start(start)?;
        world.validate()?;

        info!(
            title = %world.title,
            rooms = world.room_count(),
            exits = world.exit_count(),
            "world assembled"
        );
        Ok(world)
    }
}

impl CharacterContent {
    fn build(&self) -> CoreResult<Character> {
        let mut character = Character::new(&self.name);
        character.set_description(&self.description)?;
        character.set_dialogue(&self.dialogue)?;
        if let Some(gift) = &self.gift {
            character.set_gift(gift)?;
        }
        Ok(character)
    }
}

fn lookup(world: &WorldGraph, name: &str) -> CoreResult<crate::room::RoomId> {
    world
        .find_by_name(name)
        .ok_or_else(|| CoreError::RoomNotFound(name.to_string()))
}

/// Parse JSON content and build its world.
pub fn load_world(json: &str) -> CoreResult<WorldGraph> {
    WorldContent::from_json(json)?.build()
}

/// The bundled castle content.
pub fn castle_content() -> CoreResult<WorldContent> {
    WorldContent::from_json(CASTLE_JSON)
}

/// The bundled castle world, ready to play.
pub fn castle() -> CoreResult<WorldGraph> {
    load_world(CASTLE_JSON)
}
