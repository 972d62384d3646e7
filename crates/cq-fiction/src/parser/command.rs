//! Command parsing for player input.

use cq_core::Direction;

/// A parsed player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the current room.
    Move(Direction),
    /// Talk to the room's occupant.
    Talk,
    /// Accept the occupant's gift.
    Take,
    /// Fly off with the dragon and end the quest.
    ConcludeQuest,
    /// Input that matches no command.
    Unrecognized(String),
}

/// Parse a line of player input into an action.
///
/// Matching is case-insensitive and exact: "North East" moves north east,
/// "ne" and "talk to cook" are unrecognized.
pub fn parse_action(input: &str) -> Action {
    if let Some(direction) = Direction::parse(input) {
        return Action::Move(direction);
    }

    match input.to_lowercase().as_str() {
        "talk" => Action::Talk,
        "take" => Action::Take,
        "fly" => Action::ConcludeQuest,
        _ => Action::Unrecognized(input.to_string()),
    }
}
