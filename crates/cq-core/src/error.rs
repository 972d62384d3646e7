use crate::room::RoomId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while assembling or querying a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A text field was shorter than its minimum length. The previous value
    /// was kept.
    #[error("{field} is too short (minimum {min} characters): \"{value}\"")]
    ValidationRejected {
        /// The field being assigned.
        field: &'static str,
        /// The minimum accepted length.
        min: usize,
        /// The rejected value.
        value: String,
    },

    /// A character was asked for a gift it does not have.
    #[error("the {0} has no gift to give")]
    NoGift(String),

    /// A named room could not be found.
    #[error("room not found: \"{0}\"")]
    RoomNotFound(String),

    /// A room ID does not belong to this world.
    #[error("unknown room id: {0}")]
    UnknownRoomId(RoomId),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// A reachable room was never given a description.
    #[error("room \"{0}\" has no description")]
    MissingDescription(String),

    /// The world has no designated start room.
    #[error("no start room has been set")]
    NoStartRoom,

    /// World content could not be parsed.
    #[error("invalid world content: {0}")]
    Content(#[from] serde_json::Error),
}
