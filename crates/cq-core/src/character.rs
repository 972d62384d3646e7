use tracing::warn;

use crate::error::{CoreError, CoreResult};

/// Minimum length for names, descriptions, and dialogue.
pub const MIN_TEXT_LEN: usize = 4;
/// Minimum length for a gift label.
pub const MIN_GIFT_LEN: usize = 3;

/// A non-player character who can be talked to and may hand over a gift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    description: String,
    dialogue: String,
    gift: Option<String>,
}

impl Character {
    /// Create a character with the given name and no description, dialogue,
    /// or gift.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            dialogue: String::new(),
            gift: None,
        }
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The character's line of dialogue.
    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }

    /// The gift this character offers, if any.
    pub fn gift(&self) -> Option<&str> {
        self.gift.as_deref()
    }

    /// Rename the character. Rejected names leave the old one in place.
    pub fn set_name(&mut self, value: impl Into<String>) -> CoreResult<()> {
        self.name = checked("name", MIN_TEXT_LEN, value.into())?;
        Ok(())
    }

    /// Set the description. Rejected values leave the old one in place.
    pub fn set_description(&mut self, value: impl Into<String>) -> CoreResult<()> {
        self.description = checked("description", MIN_TEXT_LEN, value.into())?;
        Ok(())
    }

    /// Set the dialogue line. Rejected values leave the old one in place.
    pub fn set_dialogue(&mut self, value: impl Into<String>) -> CoreResult<()> {
        self.dialogue = checked("dialogue", MIN_TEXT_LEN, value.into())?;
        Ok(())
    }

    /// Set the gift label. Rejected values leave the old one in place.
    pub fn set_gift(&mut self, value: impl Into<String>) -> CoreResult<()> {
        self.gift = Some(checked("gift", MIN_GIFT_LEN, value.into())?);
        Ok(())
    }

    /// "You have met the {name}, {description}."
    pub fn describe(&self) -> String {
        sentence(format!("You have met the {}, {}", self.name, self.description))
    }

    /// "The {name} says {dialogue}."
    pub fn converse(&self) -> String {
        sentence(format!("The {} says {}", self.name, self.dialogue))
    }

    /// "You accept the {name}'s gift of {gift}."
    ///
    /// Fails with [`CoreError::NoGift`] when the character has nothing to give.
    pub fn gift_given(&self) -> CoreResult<String> {
        let gift = self
            .gift
            .as_deref()
            .ok_or_else(|| CoreError::NoGift(self.name.clone()))?;
        Ok(sentence(format!(
            "You accept the {}'s gift of {gift}",
            self.name
        )))
    }
}

/// Check a text field against its minimum length, logging a warning on
/// rejection.
pub(crate) fn checked(field: &'static str, min: usize, value: String) -> CoreResult<String> {
    if value.chars().count() < min {
        warn!(field, min, value = %value, "rejected field assignment");
        return Err(CoreError::ValidationRejected { field, min, value });
    }
    Ok(value)
}

/// Close `text` with a full stop unless it already ends a sentence,
/// looking through trailing quotes.
fn sentence(mut text: String) -> String {
    let ended = text
        .trim_end()
        .trim_end_matches(['"', '\''])
        .ends_with(['.', '!', '?']);
    if !ended {
        text.push('.');
    }
    text
}
