use std::fmt;

use crate::character::{Character, MIN_TEXT_LEN, checked};
use crate::direction::Direction;
use crate::error::CoreResult;

/// Identifier of a room within a [`WorldGraph`](crate::WorldGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// The position of the room in its world, in insertion order.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of trying to leave a room in some direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Where the player ends up: the neighbour, or the same room when blocked.
    pub room: RoomId,
    /// Whether an exit existed.
    pub moved: bool,
}

/// A node of the world graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    name: String,
    description: String,
    exits: Vec<(Direction, RoomId)>,
    occupants: Vec<Character>,
}

impl Room {
    /// Create a room with no description, exits, or occupants.
    ///
    /// The room receives its ID when it is added to a world.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RoomId(0),
            name: name.into(),
            description: String::new(),
            exits: Vec::new(),
            occupants: Vec::new(),
        }
    }

    /// The room's ID within its world.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room's description (empty until set).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description. Rejected values leave the old one in place.
    pub fn set_description(&mut self, value: impl Into<String>) -> CoreResult<()> {
        self.description = checked("description", MIN_TEXT_LEN, value.into())?;
        Ok(())
    }

    /// Place a character in this room. The first one added is the primary
    /// occupant.
    pub fn add_occupant(&mut self, character: Character) {
        self.occupants.push(character);
    }

    /// Everyone in the room, in the order they were added.
    pub fn occupants(&self) -> &[Character] {
        &self.occupants
    }

    /// The occupant the player interacts with, if the room is not empty.
    pub fn primary_occupant(&self) -> Option<&Character> {
        self.occupants.first()
    }

    /// "Looking around the {name} you can see {description}"
    pub fn describe(&self) -> String {
        format!(
            "Looking around the {} you can see {}",
            self.name, self.description
        )
    }

    /// Exits in the order they were first linked.
    pub fn exits(&self) -> &[(Direction, RoomId)] {
        &self.exits
    }

    /// The room an exit leads to, if there is one.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, to)| *to)
    }

    /// Try to leave in `direction`. A missing exit leaves the player here.
    pub fn go(&self, direction: Direction) -> Step {
        match self.exit(direction) {
            Some(room) => Step { room, moved: true },
            None => Step {
                room: self.id,
                moved: false,
            },
        }
    }

    pub(crate) fn set_id(&mut self, id: RoomId) {
        self.id = id;
    }

    /// Add or replace the exit in `direction`. A replaced exit keeps its
    /// position in the exit list.
    pub(crate) fn link(&mut self, direction: Direction, to: RoomId) {
        match self.exits.iter_mut().find(|(d, _)| *d == direction) {
            Some(exit) => exit.1 = to,
            None => self.exits.push((direction, to)),
        }
    }
}
