//! Fixed narrative text.

/// Shown in place of an occupant description when a room is empty.
pub const NO_ONE_HERE: &str = "There is no one else in the room.";

/// Shown when the dragon carries the player away, before the ending.
pub const FLIGHT: &str = "The sapphire dragon who bows her neck and allows you to climb up. \
She says \"Lets fly together to the edge of the kingdom where I will leave you to complete \
your rescue quest.\"";

/// Ending: a valuable item paid the wizard's ransom.
pub const RANSOM_PAID: &str = "Congratulations! You rescued the King...you travelled a long, \
long way, found the Wizards lair and paid him to release the King. The Sapphire Dragon flew \
you both home where you received riches and acclaim.";

/// Ending: the sword defeated the wizard.
pub const WIZARD_DEFEATED: &str = "Congratulations! You rescued the King...you travelled a \
long, long way, found the Wizards lair and fought an epic battle using your silver sword. \
You killed the wizard and released the King. The Sapphire Dragon flew you both home where \
you received riches and acclaim.";

/// Ending: nothing to pay with and nothing to fight with.
pub const NO_VALUABLE_OR_WEAPON: &str = "You did not rescue the King. Unfortunately you did \
not take an item of value to pay for the King's release. You could have fought and killed \
the Wizard but you didn't take a weapon either.";

/// Ending: no food.
pub const STARVED: &str =
    "You did not rescue the King. Unfortunately you forgot to take food and starved.";

/// Ending: no map.
pub const LOST: &str = "You did not rescue the King. Unfortunately, you forgot to take a map, \
got horribly lost and are still trying to find your way out of a bog.";
