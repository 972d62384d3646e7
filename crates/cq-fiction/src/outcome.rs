//! Quest endings and the rules that pick one.

use std::fmt;

use cq_core::QuestItems;

use crate::narrator;

/// How the quest ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Paid the wizard with a valuable item.
    RansomPaid,
    /// Fought the wizard with the sword.
    WizardDefeated,
    /// Carried neither a valuable nor a weapon.
    NoValuableOrWeapon,
    /// Carried no food.
    Starved,
    /// Carried no map.
    Lost,
    /// No rule matched. Has no narrative.
    Undetermined,
}

impl Outcome {
    /// The ending text shown to the player. Empty for
    /// [`Outcome::Undetermined`].
    pub fn narrative(&self) -> &'static str {
        match self {
            Self::RansomPaid => narrator::RANSOM_PAID,
            Self::WizardDefeated => narrator::WIZARD_DEFEATED,
            Self::NoValuableOrWeapon => narrator::NO_VALUABLE_OR_WEAPON,
            Self::Starved => narrator::STARVED,
            Self::Lost => narrator::LOST,
            Self::Undetermined => "",
        }
    }

    /// Whether the King was rescued.
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::RansomPaid | Self::WizardDefeated)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RansomPaid => "ransom paid",
            Self::WizardDefeated => "wizard defeated",
            Self::NoValuableOrWeapon => "no valuable or weapon",
            Self::Starved => "starved",
            Self::Lost => "lost",
            Self::Undetermined => "undetermined",
        };
        f.write_str(name)
    }
}

/// Decide the ending from the items the player carries.
///
/// Rules are checked in order and the first match wins. Only membership
/// matters: order and duplicates in `inventory` are irrelevant.
pub fn evaluate<S: AsRef<str>>(inventory: &[S], items: &QuestItems) -> Outcome {
    let has = |label: &str| inventory.iter().any(|i| i.as_ref() == label);

    let queen = has(items.queen.as_str());
    let dragon = has(items.dragon.as_str());
    let knight = has(items.knight.as_str());
    let cook = has(items.cook.as_str());
    let princess = has(items.princess.as_str());

    if (queen || dragon) && princess && cook {
        Outcome::RansomPaid
    } else if knight && princess && cook {
        Outcome::WizardDefeated
    } else if !queen && !dragon && !knight {
        Outcome::NoValuableOrWeapon
    } else if !cook {
        Outcome::Starved
    } else if !princess {
        Outcome::Lost
    } else {
        Outcome::Undetermined
    }
}
