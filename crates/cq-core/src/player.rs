use std::ops::Deref;

use crate::character::Character;

/// The player: a character who carries an inventory of collected gifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    character: Character,
    inventory: Vec<String>,
}

impl Player {
    /// Create a player with an empty inventory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            character: Character::new(name),
            inventory: Vec::new(),
        }
    }

    /// The underlying character.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Mutable access to the underlying character, for setup.
    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    /// Items collected so far, in the order they were taken.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Add an item to the inventory. Duplicates are kept.
    pub fn collect(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }
}

impl Deref for Player {
    type Target = Character;

    fn deref(&self) -> &Character {
        &self.character
    }
}
