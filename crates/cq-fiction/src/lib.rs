//! Game engine for Castle Quest.
//!
//! Turns raw player input into typed actions, applies them to a
//! [`GameSession`] over a read-only [`cq_core::WorldGraph`], and decides the
//! ending once the player asks the dragon to fly.

/// Session configuration.
pub mod config;
/// Error and notice types for the game engine.
pub mod error;
/// Fixed narrative text.
pub mod narrator;
/// Quest endings and the rules that pick one.
pub mod outcome;
/// Command parsing and suggestions.
pub mod parser;
/// Game session state machine.
pub mod session;

pub use config::GameConfig;
pub use error::{GameError, GameResult, Notice};
pub use outcome::{Outcome, evaluate};
pub use parser::{Action, parse_action, suggest_command};
pub use session::{GameSession, OutputEvent, SessionStatus};
