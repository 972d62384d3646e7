//! Core types for Castle Quest: rooms, characters, the player, and the world
//! graph that links rooms together.
//!
//! A world is assembled once, either by hand through [`WorldGraph`] or from
//! a JSON content file via [`content::load_world`], and is read-only during
//! play.

/// Non-player characters and text validation.
pub mod character;
/// JSON world content and the bundled castle.
pub mod content;
/// The eight compass directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// The player and their inventory.
pub mod player;
/// Rooms and exits.
pub mod room;
/// The world graph.
pub mod world;

/// Re-export character types.
pub use character::Character;
/// Re-export content types.
pub use content::{QuestItems, WorldContent, castle, load_world};
/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the player type.
pub use player::Player;
/// Re-export room types.
pub use room::{Room, RoomId, Step};
/// Re-export the world graph.
pub use world::WorldGraph;
