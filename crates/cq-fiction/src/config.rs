//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Name given to the player character.
    pub player_name: String,
    /// Room to start in, overriding the world's start room.
    pub start_room: Option<String>,
    /// List exits after each room description.
    pub show_exits: bool,
    /// Colour terminal output.
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            start_room: None,
            show_exits: true,
            color: true,
        }
    }
}

impl GameConfig {
    /// Set the player's name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Start in the named room instead of the world's start room.
    pub fn with_start_room(mut self, room: impl Into<String>) -> Self {
        self.start_room = Some(room.into());
        self
    }

    /// Show or hide the exit list.
    pub fn with_exits(mut self, show: bool) -> Self {
        self.show_exits = show;
        self
    }

    /// Enable or disable coloured output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
