use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::content::QuestItems;
use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::room::{Room, RoomId, Step};

/// The fixed graph of rooms. Built once, then borrowed immutably for play.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    /// Display title of the world.
    pub title: String,
    /// Gift labels the quest ending checks for.
    pub quest_items: QuestItems,
    rooms: Vec<Room>,
    start: Option<RoomId>,

    // Indexes
    by_name_lower: HashMap<String, RoomId>,
}

impl WorldGraph {
    /// Create an empty world.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            quest_items: QuestItems::default(),
            rooms: Vec::new(),
            start: None,
            by_name_lower: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Assembly
    // -----------------------------------------------------------------------

    /// Add a room to the world. Returns the room's ID.
    pub fn add_room(&mut self, mut room: Room) -> CoreResult<RoomId> {
        let name_lower = room.name().to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateRoom(room.name().to_string()));
        }

        let id = RoomId(self.rooms.len());
        room.set_id(id);
        self.by_name_lower.insert(name_lower, id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Create a directed exit from `from` to `to`.
    ///
    /// The reverse exit is not created. Linking the same direction twice
    /// replaces the earlier target.
    pub fn link(&mut self, from: RoomId, direction: Direction, to: RoomId) -> CoreResult<()> {
        if self.room(to).is_none() {
            return Err(CoreError::UnknownRoomId(to));
        }
        let room = self
            .rooms
            .get_mut(from.0)
            .ok_or(CoreError::UnknownRoomId(from))?;
        room.link(direction, to);
        debug!(from = %from, to = %to, %direction, "linked rooms");
        Ok(())
    }

    /// Get a mutable reference to a room, for setting descriptions and
    /// occupants during assembly.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Designate the room where new sessions begin.
    pub fn set_start(&mut self, id: RoomId) -> CoreResult<()> {
        if self.room(id).is_none() {
            return Err(CoreError::UnknownRoomId(id));
        }
        self.start = Some(id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The designated start room, if one has been set.
    pub fn start(&self) -> Option<RoomId> {
        self.start
    }

    /// Get a reference to a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Find a room ID by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<RoomId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// All rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of directed exits across all rooms.
    pub fn exit_count(&self) -> usize {
        self.rooms.iter().map(|r| r.exits().len()).sum()
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// The room reached by leaving `room` in `direction`, if there is an exit.
    pub fn neighbor(&self, room: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(room).and_then(|r| r.exit(direction))
    }

    /// Try to leave `room` in `direction`.
    pub fn step(&self, room: RoomId, direction: Direction) -> CoreResult<Step> {
        self.room(room)
            .map(|r| r.go(direction))
            .ok_or(CoreError::UnknownRoomId(room))
    }

    /// Exits of a room as (direction, neighbour name), in link order.
    pub fn linked_directions(&self, room: RoomId) -> Vec<(Direction, &str)> {
        self.room(room)
            .map(|r| {
                r.exits()
                    .iter()
                    .filter_map(|(dir, to)| self.room(*to).map(|t| (*dir, t.name())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One line per exit: "The {neighbour} is to the {direction}".
    pub fn exit_descriptions(&self, room: RoomId) -> Vec<String> {
        self.linked_directions(room)
            .into_iter()
            .map(|(dir, name)| format!("The {name} is to the {dir}"))
            .collect()
    }

    /// Rooms reachable from `from` by following exits, breadth-first,
    /// including `from` itself.
    pub fn reachable_from(&self, from: RoomId) -> Vec<RoomId> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        if self.room(from).is_some() {
            seen.insert(from);
            queue.push_back(from);
        }

        while let Some(id) = queue.pop_front() {
            order.push(id);
            if let Some(room) = self.room(id) {
                for (_, to) in room.exits() {
                    if seen.insert(*to) {
                        queue.push_back(*to);
                    }
                }
            }
        }

        order
    }

    /// Check that the world is playable: a start room is set and every room
    /// reachable from it has a description.
    pub fn validate(&self) -> CoreResult<()> {
        let start = self.start.ok_or(CoreError::NoStartRoom)?;
        self.validate_from(start)
    }

    /// Check that every room reachable from `start` has a description.
    pub fn validate_from(&self, start: RoomId) -> CoreResult<()> {
        if self.room(start).is_none() {
            return Err(CoreError::UnknownRoomId(start));
        }
        for id in self.reachable_from(start) {
            let Some(room) = self.room(id) else {
                continue;
            };
            if room.description().is_empty() {
                return Err(CoreError::MissingDescription(room.name().to_string()));
            }
        }
        Ok(())
    }
}
