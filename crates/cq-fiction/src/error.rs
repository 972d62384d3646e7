//! Error and notice types for the game engine.

use cq_core::{CoreError, Direction};
use thiserror::Error;

/// Result type for starting a game.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that prevent a session from starting.
#[derive(Debug, Error)]
pub enum GameError {
    /// The world failed validation.
    #[error("world is not playable: {0}")]
    InvalidWorld(#[from] CoreError),

    /// The requested start room does not exist.
    #[error("start room not found: {0}")]
    StartRoomNotFound(String),
}

/// Why an action left the session unchanged.
///
/// Notices are reported to the player inside an
/// [`OutputEvent`](crate::OutputEvent); they never end the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Notice {
    /// No exit in the requested direction.
    #[error("You can't go {0} from here.")]
    BlockedMove(Direction),

    /// Nobody in the room to talk to or take from.
    #[error("There is no one else in the room.")]
    NoOccupant,

    /// The occupant has no gift.
    #[error("The {0} has nothing to give you.")]
    NoGift(String),

    /// Input matched no command.
    #[error("Not a valid command. Please try again.")]
    UnrecognizedCommand(String),

    /// The quest is over.
    #[error("Your quest has ended. There is nothing more to do.")]
    SessionConcluded,
}
