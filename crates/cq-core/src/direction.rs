use std::fmt;

use serde::{Deserialize, Serialize};

/// A compass direction labelling an exit between two rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    #[serde(rename = "north")]
    North,
    /// South.
    #[serde(rename = "south")]
    South,
    /// East.
    #[serde(rename = "east")]
    East,
    /// West.
    #[serde(rename = "west")]
    West,
    /// North east.
    #[serde(rename = "north east", alias = "north-east")]
    NorthEast,
    /// North west.
    #[serde(rename = "north west", alias = "north-west")]
    NorthWest,
    /// South east.
    #[serde(rename = "south east", alias = "south-east")]
    SouthEast,
    /// South west.
    #[serde(rename = "south west", alias = "south-west")]
    SouthWest,
}

impl Direction {
    /// Every direction, cardinal points first.
    pub const ALL: [Direction; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Parse a direction name (case-insensitive, exact).
    ///
    /// The two-word directions accept either a space or a hyphen between
    /// the words. Abbreviations such as `n` or `ne` are not directions.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            "north east" | "north-east" => Some(Self::NorthEast),
            "north west" | "north-west" => Some(Self::NorthWest),
            "south east" | "south-east" => Some(Self::SouthEast),
            "south west" | "south-west" => Some(Self::SouthWest),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::NorthEast => "north east",
            Self::NorthWest => "north west",
            Self::SouthEast => "south east",
            Self::SouthWest => "south west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
