//! Game session state machine.
//!
//! A [`GameSession`] is a plain value: where the player is, what they carry,
//! and whether the quest is over. [`GameSession::apply`] consumes a session
//! and an [`Action`] and returns the next session together with an
//! [`OutputEvent`] for the renderer. The world is only ever borrowed.

use cq_core::{Player, RoomId, WorldGraph};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult, Notice};
use crate::narrator;
use crate::outcome::{Outcome, evaluate};
use crate::parser::{Action, parse_action};

/// Whether the quest is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The player is exploring the world.
    #[default]
    Exploring,
    /// The player has flown off; no further actions change anything.
    Concluded,
}

/// Everything a renderer needs after one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEvent {
    /// "Looking around the ..." for the current room.
    pub room_description: String,
    /// The primary occupant's description, or that nobody is here.
    pub occupant_message: String,
    /// One line per exit of the current room.
    pub exit_descriptions: Vec<String>,
    /// Free text from this turn: dialogue, a gift, the ending, or the
    /// notice message.
    pub text: Option<String>,
    /// Set when the action was refused.
    pub notice: Option<Notice>,
    /// Set on the turn the quest concludes.
    pub outcome: Option<Outcome>,
}

/// One player's run through a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    current: RoomId,
    player: Player,
    status: SessionStatus,
}

impl GameSession {
    /// Start a session in the world's start room.
    pub fn new(world: &WorldGraph) -> GameResult<Self> {
        Self::with_config(world, &GameConfig::default())
    }

    /// Start a session with the given configuration.
    ///
    /// Fails if the world does not validate or the configured start room
    /// does not exist.
    pub fn with_config(world: &WorldGraph, config: &GameConfig) -> GameResult<Self> {
        world.validate()?;

        let current = match &config.start_room {
            Some(name) => {
                let id = world
                    .find_by_name(name)
                    .ok_or_else(|| GameError::StartRoomNotFound(name.clone()))?;
                // The override may lead into rooms validate() never visited.
                world.validate_from(id)?;
                id
            }
            None => world.start().ok_or(cq_core::CoreError::NoStartRoom)?,
        };

        info!(
            world = %world.title,
            start = %current,
            player = %config.player_name,
            "session started"
        );

        Ok(Self {
            current,
            player: Player::new(config.player_name.clone()),
            status: SessionStatus::Exploring,
        })
    }

    /// The room the player is in.
    pub fn current_room(&self) -> RoomId {
        self.current
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Items collected so far.
    pub fn inventory(&self) -> &[String] {
        self.player.inventory()
    }

    /// Whether the quest is still running.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether the quest has ended.
    pub fn is_concluded(&self) -> bool {
        self.status == SessionStatus::Concluded
    }

    /// Describe the current room without acting.
    pub fn view(&self, world: &WorldGraph) -> OutputEvent {
        let room = world.room(self.current);
        OutputEvent {
            room_description: room.map(|r| r.describe()).unwrap_or_default(),
            occupant_message: room
                .and_then(|r| r.primary_occupant())
                .map(|c| c.describe())
                .unwrap_or_else(|| narrator::NO_ONE_HERE.to_string()),
            exit_descriptions: world.exit_descriptions(self.current),
            text: None,
            notice: None,
            outcome: None,
        }
    }

    /// Apply one action, returning the next session and what to show.
    pub fn apply(mut self, world: &WorldGraph, action: Action) -> (Self, OutputEvent) {
        debug!(room = %self.current, ?action, status = ?self.status, "applying action");

        if self.is_concluded() {
            let event = self.refuse(world, Notice::SessionConcluded);
            return (self, event);
        }

        let event = match action {
            Action::Move(direction) => {
                let step = world.room(self.current).map(|r| r.go(direction));
                match step {
                    Some(step) if step.moved => {
                        self.current = step.room;
                        self.view(world)
                    }
                    _ => self.refuse(world, Notice::BlockedMove(direction)),
                }
            }
            Action::Talk => match self.occupant(world) {
                Some(character) => self.say(world, character.converse()),
                None => self.refuse(world, Notice::NoOccupant),
            },
            Action::Take => match self.occupant(world) {
                Some(character) => match (character.gift(), character.gift_given()) {
                    (Some(gift), Ok(text)) => {
                        self.player.collect(gift);
                        debug!(gift, inventory = self.player.inventory().len(), "gift taken");
                        self.say(world, text)
                    }
                    _ => self.refuse(world, Notice::NoGift(character.name().to_string())),
                },
                None => self.refuse(world, Notice::NoOccupant),
            },
            Action::ConcludeQuest => {
                let outcome = evaluate(self.player.inventory(), &world.quest_items);
                self.status = SessionStatus::Concluded;
                info!(%outcome, items = self.player.inventory().len(), "quest concluded");

                let mut text = narrator::FLIGHT.to_string();
                if !outcome.narrative().is_empty() {
                    text.push_str("\n\n");
                    text.push_str(outcome.narrative());
                }
                OutputEvent {
                    outcome: Some(outcome),
                    ..self.say(world, text)
                }
            }
            Action::Unrecognized(input) => self.refuse(world, Notice::UnrecognizedCommand(input)),
        };

        (self, event)
    }

    /// Parse and apply a line of input in place.
    pub fn process(&mut self, world: &WorldGraph, input: &str) -> OutputEvent {
        let (next, event) = self.clone().apply(world, parse_action(input));
        *self = next;
        event
    }

    fn occupant<'w>(&self, world: &'w WorldGraph) -> Option<&'w cq_core::Character> {
        world.room(self.current).and_then(|r| r.primary_occupant())
    }

    fn say(&self, world: &WorldGraph, text: String) -> OutputEvent {
        OutputEvent {
            text: Some(text),
            ..self.view(world)
        }
    }

    fn refuse(&self, world: &WorldGraph, notice: Notice) -> OutputEvent {
        debug!(%notice, "action refused");
        OutputEvent {
            text: Some(notice.to_string()),
            notice: Some(notice),
            ..self.view(world)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cq_core::{Character, Direction, Room, castle};

    fn at(world: &WorldGraph, room: &str) -> GameSession {
        GameSession::with_config(world, &GameConfig::default().with_start_room(room)).unwrap()
    }

    fn run(world: &WorldGraph, session: &mut GameSession, inputs: &[&str]) -> OutputEvent {
        let mut last = session.view(world);
        for input in inputs {
            last = session.process(world, input);
        }
        last
    }

    /// Two rooms, the second empty, linked one way only.
    fn tiny_world() -> WorldGraph {
        let mut world = WorldGraph::new("Tiny");

        let mut hall = Room::new("Hall");
        hall.set_description("a bare hall").unwrap();
        let mut monk = Character::new("Monk");
        monk.set_description("a silent monk").unwrap();
        monk.set_dialogue("nothing at all").unwrap();
        hall.add_occupant(monk);

        let mut yard = Room::new("Yard");
        yard.set_description("a muddy yard").unwrap();

        let hall = world.add_room(hall).unwrap();
        let yard = world.add_room(yard).unwrap();
        world.link(hall, Direction::East, yard).unwrap();
        world.set_start(hall).unwrap();
        world
    }

    #[test]
    fn new_session_starts_exploring_in_the_start_room() {
        let world = castle().unwrap();
        let session = GameSession::new(&world).unwrap();

        assert_eq!(session.current_room(), world.start().unwrap());
        assert_eq!(session.status(), SessionStatus::Exploring);
        assert!(session.inventory().is_empty());
    }

    #[test]
    fn initial_view_of_the_great_hall() {
        let world = castle().unwrap();
        let session = GameSession::new(&world).unwrap();
        let view = session.view(&world);

        assert!(view.room_description.starts_with("Looking around the Great Hall you can see"));
        assert!(view.occupant_message.starts_with("You have met the Queen, "));
        assert_eq!(view.exit_descriptions.len(), 4);
        assert!(view.text.is_none());
        assert!(view.notice.is_none());
    }

    #[test]
    fn blocked_move_from_the_start_room() {
        let world = castle().unwrap();
        let session = GameSession::new(&world).unwrap();
        let before = session.clone();

        let (after, event) = session.apply(&world, Action::Move(Direction::NorthEast));

        assert_eq!(after, before);
        assert_eq!(event.notice, Some(Notice::BlockedMove(Direction::NorthEast)));
        assert_eq!(
            event.text.as_deref(),
            Some("You can't go north east from here.")
        );
        assert!(event.room_description.contains("Great Hall"));
    }

    #[test]
    fn blocked_north_leaves_the_room_unchanged() {
        let world = tiny_world();
        let session = GameSession::new(&world).unwrap();
        let start = session.current_room();

        let (after, event) = session.apply(&world, parse_action("north"));

        assert_eq!(after.current_room(), start);
        assert_eq!(event.notice, Some(Notice::BlockedMove(Direction::North)));
    }

    #[test]
    fn move_follows_the_exit() {
        let world = castle().unwrap();
        let mut session = GameSession::new(&world).unwrap();

        let event = session.process(&world, "North");

        assert_eq!(
            session.current_room(),
            world.find_by_name("Bed Chamber").unwrap()
        );
        assert!(event.room_description.contains("Bed Chamber"));
        assert!(event.occupant_message.contains("Princess"));
        assert!(event.notice.is_none());
        assert!(event.text.is_none());
        insta::assert_snapshot!(event.exit_descriptions.join("\n"), @r"
        The Great Hall is to the south
        The Turret is to the north
        ");
    }

    #[test]
    fn one_way_exit_has_no_way_back() {
        let world = tiny_world();
        let mut session = GameSession::new(&world).unwrap();

        session.process(&world, "east");
        assert_eq!(session.current_room(), world.find_by_name("Yard").unwrap());

        let event = session.process(&world, "west");
        assert_eq!(event.notice, Some(Notice::BlockedMove(Direction::West)));
        assert_eq!(session.current_room(), world.find_by_name("Yard").unwrap());
    }

    #[test]
    fn talk_to_the_occupant() {
        let world = castle().unwrap();
        let mut session = GameSession::new(&world).unwrap();

        let event = session.process(&world, "talk");

        assert_eq!(
            event.text.as_deref(),
            Some(
                "The Queen says \"Please find the kidnapped king. \
                 Here is a bag of gold coins to help\"."
            )
        );
        assert!(event.notice.is_none());
    }

    #[test]
    fn empty_room_shows_no_one_here() {
        let world = tiny_world();
        let mut session = GameSession::new(&world).unwrap();
        let event = session.process(&world, "east");
        assert_eq!(event.occupant_message, narrator::NO_ONE_HERE);

        let event = session.process(&world, "talk");
        assert_eq!(event.notice, Some(Notice::NoOccupant));

        let event = session.process(&world, "take");
        assert_eq!(event.notice, Some(Notice::NoOccupant));
        assert!(session.inventory().is_empty());
    }

    #[test]
    fn take_without_gift() {
        let world = tiny_world();
        let mut session = GameSession::new(&world).unwrap();

        let event = session.process(&world, "take");

        assert_eq!(event.notice, Some(Notice::NoGift("Monk".to_string())));
        assert_eq!(event.text.as_deref(), Some("The Monk has nothing to give you."));
        assert!(session.inventory().is_empty());
    }

    #[test]
    fn take_collects_the_gift() {
        let world = castle().unwrap();
        let mut session = GameSession::new(&world).unwrap();

        let event = session.process(&world, "take");

        assert_eq!(
            event.text.as_deref(),
            Some("You accept the Queen's gift of a bag of coins.")
        );
        assert_eq!(session.inventory(), ["a bag of coins"]);
    }

    #[test]
    fn taking_twice_keeps_a_duplicate() {
        let world = castle().unwrap();
        let mut session = GameSession::new(&world).unwrap();

        run(&world, &mut session, &["take", "take"]);

        assert_eq!(session.inventory(), ["a bag of coins", "a bag of coins"]);
    }

    #[test]
    fn unrecognized_command() {
        let world = castle().unwrap();
        let session = GameSession::new(&world).unwrap();
        let before = session.clone();

        let (after, event) = session.apply(&world, parse_action("dance"));

        assert_eq!(after, before);
        assert_eq!(
            event.notice,
            Some(Notice::UnrecognizedCommand("dance".to_string()))
        );
    }

    #[test]
    fn ransom_playthrough() {
        let world = castle().unwrap();
        let mut session = GameSession::new(&world).unwrap();

        // Queen in the hall, cook in the kitchen, back to the hall,
        // princess in the bed chamber.
        let event = run(
            &world,
            &mut session,
            &["take", "east", "take", "west", "north", "take", "fly"],
        );

        assert_eq!(event.outcome, Some(Outcome::RansomPaid));
        assert!(event.text.as_deref().unwrap().starts_with(narrator::FLIGHT));
        assert!(event.text.as_deref().unwrap().ends_with(narrator::RANSOM_PAID));
        assert!(session.is_concluded());
    }

    #[test]
    fn sword_playthrough() {
        let world = castle().unwrap();
        let mut session = at(&world, "Guard Room");

        let event = run(
            &world,
            &mut session,
            &["take", "north west", "take", "west", "north", "take", "FLY"],
        );

        assert_eq!(event.outcome, Some(Outcome::WizardDefeated));
    }

    #[test]
    fn flying_with_nothing() {
        let world = castle().unwrap();
        let mut session = GameSession::new(&world).unwrap();

        let event = session.process(&world, "fly");

        assert_eq!(event.outcome, Some(Outcome::NoValuableOrWeapon));
    }

    #[test]
    fn concluded_session_refuses_everything() {
        let world = castle().unwrap();
        let mut session = GameSession::new(&world).unwrap();
        session.process(&world, "fly");
        let concluded = session.clone();

        for input in ["north", "talk", "take", "fly", "sing"] {
            let event = session.process(&world, input);
            assert_eq!(event.notice, Some(Notice::SessionConcluded), "{input}");
            assert!(event.outcome.is_none());
            assert_eq!(session, concluded);
        }
    }

    #[test]
    fn start_room_override() {
        let world = castle().unwrap();
        let session = at(&world, "turret");
        assert_eq!(session.current_room(), world.find_by_name("Turret").unwrap());

        let err = GameSession::with_config(
            &world,
            &GameConfig::default().with_start_room("Dungeon"),
        )
        .unwrap_err();
        assert!(matches!(err, GameError::StartRoomNotFound(ref name) if name == "Dungeon"));
    }

    /// Hall is the start; Cellar leads north into a blank Crypt that the
    /// start cannot reach.
    fn world_with_hidden_blank_room() -> WorldGraph {
        let mut world = WorldGraph::new("Crypts");

        let mut hall = Room::new("Hall");
        hall.set_description("a bare hall").unwrap();
        let mut cellar = Room::new("Cellar");
        cellar.set_description("a damp cellar").unwrap();

        let hall = world.add_room(hall).unwrap();
        let cellar = world.add_room(cellar).unwrap();
        let crypt = world.add_room(Room::new("Crypt")).unwrap();
        world.link(cellar, Direction::North, crypt).unwrap();
        world.set_start(hall).unwrap();
        world
    }

    #[test]
    fn start_override_checks_every_room_it_can_reach() {
        let world = world_with_hidden_blank_room();
        assert!(GameSession::new(&world).is_ok());

        let err =
            GameSession::with_config(&world, &GameConfig::default().with_start_room("Cellar"))
                .unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidWorld(cq_core::CoreError::MissingDescription(ref name))
                if name == "Crypt"
        ));
    }

    #[test]
    fn blank_override_room_is_reported_by_its_real_name() {
        let world = world_with_hidden_blank_room();
        let err =
            GameSession::with_config(&world, &GameConfig::default().with_start_room("crypt"))
                .unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidWorld(cq_core::CoreError::MissingDescription(ref name))
                if name == "Crypt"
        ));
    }

    #[test]
    fn invalid_world_does_not_start() {
        let world = WorldGraph::new("Empty");
        assert!(matches!(
            GameSession::new(&world),
            Err(GameError::InvalidWorld(cq_core::CoreError::NoStartRoom))
        ));
    }

    #[test]
    fn player_name_comes_from_config() {
        let world = castle().unwrap();
        let session =
            GameSession::with_config(&world, &GameConfig::default().with_player_name("Ada"))
                .unwrap();
        assert_eq!(session.player().name(), "Ada");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_input() -> impl Strategy<Value = String> {
            prop::sample::select(vec![
                "north", "south", "east", "west", "north east", "north west", "south east",
                "south west", "talk", "take", "fly", "jump",
            ])
            .prop_map(str::to_string)
        }

        proptest! {
            #[test]
            fn inventory_never_shrinks(inputs in prop::collection::vec(arb_input(), 0..40)) {
                let world = castle().unwrap();
                let mut session = GameSession::new(&world).unwrap();
                let mut size = 0;

                for input in &inputs {
                    session.process(&world, input);
                    prop_assert!(session.inventory().len() >= size);
                    size = session.inventory().len();
                }
            }

            #[test]
            fn refused_actions_change_nothing(inputs in prop::collection::vec(arb_input(), 0..40)) {
                let world = castle().unwrap();
                let mut session = GameSession::new(&world).unwrap();

                for input in &inputs {
                    let before = session.clone();
                    let event = session.process(&world, input);
                    if event.notice.is_some() {
                        prop_assert_eq!(&session, &before);
                    }
                }
            }
        }
    }
}
