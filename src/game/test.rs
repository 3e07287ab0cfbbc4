mod utils {
	use std::time::Duration;

	use crate::game::{
		animation::SolveAnimator,
		board::{InputField, WordButton},
		level::{parser, LevelData},
		prelude::*,
		session::LevelProp,
	};
	use bevy::{ecs::system::RunSystemOnce, time::TimeUpdateStrategy};

	/// Length of a frame in the headless app
	pub const FRAME: Duration = Duration::from_millis(100);

	/// Numbers of the levels that have been reported as solved, in order
	#[derive(Resource, Debug, Default)]
	pub struct SolvedLevels(pub Vec<u32>);

	pub fn setup_app() -> App {
		let mut app = App::new();
		app.add_plugins((
			MinimalPlugins,
			AssetPlugin {
				watch_for_changes_override: Some(false),
				..default()
			},
			super::super::plugin,
		))
		.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
		.init_resource::<SolvedLevels>()
		.add_observer(|trigger: Trigger<LevelSolved>, mut solved: ResMut<SolvedLevels>| {
			solved.0.push(trigger.event().number);
		});
		app
	}

	/// Creates a headless app playing the given level, returns it along with the session entity
	pub fn app_with_level(level: &str) -> (App, Entity) {
		let mut app = setup_app();
		let level = parser::parse(level, |_| {}).expect("Level should parse");
		let handle = app
			.world_mut()
			.resource_mut::<Assets<LevelData>>()
			.add(level);
		let session = app.world_mut().spawn(Name::new("Session")).id();
		app.world_mut().trigger_targets(SpawnLevel(handle), session);
		// An update is needed to apply the spawned entities
		app.update();
		(app, session)
	}

	fn find_prop_system(In(name): In<String>, props: Query<(Entity, &LevelProp)>) -> Option<Entity> {
		props
			.iter()
			.find_map(|(id, prop)| (prop.name == name).then_some(id))
	}

	fn find_button_system(In(word): In<String>, buttons: Query<(Entity, &WordButton)>) -> Option<Entity> {
		buttons
			.iter()
			.find_map(|(id, button)| (button.word == word).then_some(id))
	}

	fn read_input_system(inputs: Query<&InputField>) -> String {
		inputs
			.single()
			.map(|input| input.contents.clone())
			.expect("There should be exactly one input field")
	}

	pub trait WordPuzzleAppExt {
		fn select_word(&mut self, session: Entity, word: &str);
		fn press_button(&mut self, word: &str);
		fn prop(&mut self, name: &str) -> Option<Entity>;
		fn input_text(&mut self) -> String;
		fn progress(&self, session: Entity) -> usize;
		fn solved_levels(&self) -> &[u32];
		fn run_frames(&mut self, frames: usize);
		fn pending_triggers(&self, prop: Entity) -> Vec<String>;
	}

	impl WordPuzzleAppExt for App {
		fn select_word(&mut self, session: Entity, word: &str) {
			self.world_mut()
				.trigger_targets(WordSelected(word.to_owned()), session);
		}

		fn press_button(&mut self, word: &str) {
			let button = self
				.world_mut()
				.run_system_once_with(find_button_system, word.to_owned())
				.expect("System should have all necessary objects.")
				.expect("Button should exist");
			self.world_mut()
				.entity_mut(button)
				.insert(Interaction::Pressed);
			self.update();
		}

		fn prop(&mut self, name: &str) -> Option<Entity> {
			self.world_mut()
				.run_system_once_with(find_prop_system, name.to_owned())
				.expect("System should have all necessary objects.")
		}

		fn input_text(&mut self) -> String {
			self.world_mut()
				.run_system_once(read_input_system)
				.expect("System should have all necessary objects.")
		}

		fn progress(&self, session: Entity) -> usize {
			self.world()
				.get::<LevelSession>(session)
				.expect("Entity should be a level session")
				.matcher
				.progress()
				.len()
		}

		fn solved_levels(&self) -> &[u32] {
			&self.world().resource::<SolvedLevels>().0
		}

		fn run_frames(&mut self, frames: usize) {
			for _ in 0..frames {
				self.update();
			}
		}

		fn pending_triggers(&self, prop: Entity) -> Vec<String> {
			self.world()
				.get::<SolveAnimator>(prop)
				.expect("Prop should have an animator")
				.pending_triggers()
				.to_vec()
		}
	}
}

use bevy::prelude::*;
use itertools::Itertools;
use utils::*;

use super::solve::{PlaybackState, SolveSequencePlayer};

const DOOR_LEVEL: &str = r"
name=The Door
number=1
sentence=go to the door
WORDS go to the door run
PROP door 0 0 120 200 amber
STEP door open door
";

fn playback_state(app: &App, session: Entity) -> PlaybackState {
	app.world()
		.get::<SolveSequencePlayer>(session)
		.expect("Session should have a solve sequence player")
		.state()
}

/// Metatest for asserting that loading a level works.
#[test]
fn test_level_spawns() {
	let (mut app, session) = app_with_level(DOOR_LEVEL);
	assert!(app.prop("door").is_some(), "Door prop should be spawned");
	assert_eq!(app.progress(session), 0);
	assert_eq!(playback_state(&app, session), PlaybackState::Idle);
	app.run_frames(5);
	assert!(app.solved_levels().is_empty());
}

#[test]
fn test_solving_plays_steps_then_waits() {
	let (mut app, session) = app_with_level(DOOR_LEVEL);
	let door = app.prop("door").expect("Door prop should be spawned");

	for word in ["go", "to", "the"] {
		app.select_word(session, word);
	}
	assert_eq!(app.progress(session), 3);
	assert_eq!(playback_state(&app, session), PlaybackState::Idle);

	app.select_word(session, "door");
	assert_eq!(playback_state(&app, session), PlaybackState::Waiting);
	assert_eq!(app.pending_triggers(door), vec!["open"]);

	app.run_frames(10);
	assert!(
		app.solved_levels().is_empty(),
		"Completion should not be signalled before the wait is over"
	);
	assert!(app.pending_triggers(door).is_empty(), "Trigger should be consumed");

	app.run_frames(20);
	assert_eq!(app.solved_levels(), &[1]);
	assert_eq!(playback_state(&app, session), PlaybackState::Done);

	app.run_frames(30);
	assert_eq!(app.solved_levels(), &[1], "Completion is signalled once");
}

#[test]
fn test_wrong_word_does_not_reset_progress() {
	let (mut app, session) = app_with_level(DOOR_LEVEL);
	app.select_word(session, "go");
	app.select_word(session, "run");
	assert_eq!(app.progress(session), 1);
	app.select_word(session, "the");
	assert_eq!(app.progress(session), 1);
	app.select_word(session, "to");
	assert_eq!(app.progress(session), 2);
}

#[test]
fn test_words_after_completion_are_ignored() {
	let (mut app, session) = app_with_level(DOOR_LEVEL);
	for word in ["go", "to", "the", "door", "go", "door"] {
		app.select_word(session, word);
	}
	assert_eq!(app.progress(session), 4);
	app.run_frames(30);
	assert_eq!(app.solved_levels(), &[1]);
}

#[test]
fn test_unresolvable_steps_are_skipped() {
	let (mut app, session) = app_with_level(
		r"
number=7
sentence=open sesame
WORDS open sesame
PROP gate 0 0 100 100
STEP door open cave
STEP _ open gate
STEP nonexistent open gate
STEP door _ gate
STEP spinner spin gate
",
	);
	let gate = app.prop("gate").expect("Gate should be spawned");
	app.select_word(session, "open");
	app.select_word(session, "sesame");
	assert_eq!(app.pending_triggers(gate), vec!["spin"]);
	app.run_frames(30);
	assert_eq!(app.solved_levels(), &[7]);
}

#[test]
fn test_each_step_fires_on_its_own_prop() {
	let (mut app, session) = app_with_level(
		r"
number=8
sentence=wake up
WORDS up wake
PROP wheel -100 0 80 80 teal
PROP lamp 100 0 40 40 yellow
STEP spinner spin wheel
STEP popper pop lamp
",
	);
	let wheel = app.prop("wheel").expect("Wheel should be spawned");
	let lamp = app.prop("lamp").expect("Lamp should be spawned");
	app.select_word(session, "wake");
	app.select_word(session, "up");
	// Both triggers fire before the wait starts
	assert_eq!(playback_state(&app, session), PlaybackState::Waiting);
	assert_eq!(app.pending_triggers(wheel), vec!["spin"]);
	assert_eq!(app.pending_triggers(lamp), vec!["pop"]);
	assert!(app.solved_levels().is_empty());
	app.run_frames(30);
	assert_eq!(app.solved_levels(), &[8]);
}

#[test]
fn test_level_without_steps_still_completes() {
	let (mut app, session) = app_with_level("number=3\nsentence=hello\nWORDS hello");
	app.select_word(session, "hello");
	app.run_frames(30);
	assert_eq!(app.solved_levels(), &[3]);
}

#[test]
fn test_empty_sentence_is_never_solved() {
	let (mut app, session) = app_with_level("number=2\nWORDS a b");
	app.select_word(session, "a");
	app.select_word(session, "b");
	assert_eq!(app.progress(session), 0);
	app.run_frames(30);
	assert!(app.solved_levels().is_empty());
}

#[test]
fn test_leaving_during_wait_cancels_completion() {
	let (mut app, session) = app_with_level(DOOR_LEVEL);
	let door = app.prop("door").expect("Door prop should be spawned");
	for word in ["go", "to", "the", "door"] {
		app.select_word(session, word);
	}
	app.run_frames(5);
	app.world_mut().entity_mut(session).despawn();
	app.run_frames(40);
	assert!(app.solved_levels().is_empty());
	assert!(
		app.world().get_entity(door).is_err(),
		"Props should be despawned along with the session"
	);
}

#[test]
fn test_pressing_buttons_selects_words() {
	let (mut app, session) = app_with_level(DOOR_LEVEL);
	assert_eq!(app.input_text(), "");
	app.press_button("go");
	app.press_button("to");
	assert_eq!(app.input_text(), "go to ");
	assert_eq!(app.progress(session), 2);
	app.press_button("run");
	assert_eq!(app.input_text(), "go to run ");
	assert_eq!(app.progress(session), 2);
}

#[test]
fn test_every_word_gets_a_button() {
	let (mut app, _) = app_with_level(
		r"
number=5
sentence=a b
shuffle=true
WORDS a b c d e f g
",
	);
	let words = app
		.world_mut()
		.query::<&super::board::WordButton>()
		.iter(app.world())
		.map(|button| button.word.clone())
		.sorted()
		.collect_vec();
	assert_eq!(words, vec!["a", "b", "c", "d", "e", "f", "g"]);
}
