//! Command parsing and suggestions.

mod command;
mod suggest;

pub use command::{Action, parse_action};
pub use suggest::suggest_command;
