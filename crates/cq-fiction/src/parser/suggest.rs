//! "Did you mean" hints for unrecognized input.

use cq_core::Direction;
use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

const VERBS: &[&str] = &["talk", "take", "fly"];

/// Suggest the known command closest to some unrecognized input.
///
/// Suggestions are hints for the player only; the input is still
/// unrecognized.
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    Direction::ALL
        .iter()
        .map(|d| d.name())
        .chain(VERBS.iter().copied())
        .map(|cmd| (cmd, jaro_winkler(&input, cmd)))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(cmd, _)| cmd)
}
