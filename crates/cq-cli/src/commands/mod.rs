pub mod check;
pub mod export;
pub mod play;
pub mod rooms;

use std::path::Path;

use cq_core::WorldGraph;
use tracing::debug;

/// Load a world from a content file, or the bundled castle when no file is
/// given.
fn load_world(path: Option<&Path>) -> Result<WorldGraph, String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading world file");
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            cq_core::load_world(&json).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => cq_core::castle().map_err(|e| e.to_string()),
    }
}
