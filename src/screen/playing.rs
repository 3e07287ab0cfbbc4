//! The screen state for the main game loop.

use bevy::prelude::*;

use super::{QueueScreenTransition, Screen};
use crate::{
	game::{
		events::{LevelSolved, SpawnLevel},
		level::registry::LevelRegistry,
	},
	ui::prelude::*,
};

pub(super) fn plugin(app: &mut App) {
	app.add_computed_state::<PlayingLevel>();
	app.add_observer(load_level);
	app.add_observer(go_to_next_level);
	app.add_systems(
		Update,
		enter_level.run_if(state_changed::<PlayingLevel>),
	);
}

/// Index of the level being played, exists only on the playing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayingLevel(pub usize);

impl ComputedStates for PlayingLevel {
	type SourceStates = Screen;

	fn compute(sources: Screen) -> Option<Self> {
		match sources {
			Screen::Playing(index) => Some(Self(index)),
			_ => None,
		}
	}
}

/// Switches the playing screen to the level with the given index in the [`LevelRegistry`]
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadLevel(pub usize);

fn load_level(
	trigger: Trigger<LoadLevel>,
	registry: Res<LevelRegistry>,
	mut next_screen: EventWriter<QueueScreenTransition>,
) {
	let LoadLevel(index) = *trigger.event();
	if registry.get(index).is_none() {
		warn!("Level with index {index} does not exist.");
		return;
	}
	next_screen.write(QueueScreenTransition(Screen::Playing(index)));
}

fn enter_level(
	level: Option<Res<State<PlayingLevel>>>,
	registry: Res<LevelRegistry>,
	mut commands: Commands,
) {
	let Some(level) = level else {
		return;
	};
	let PlayingLevel(index) = *level.get();
	let Some(entry) = registry.get(index) else {
		warn!("Level with index {index} does not exist.");
		return;
	};
	let session = commands
		.spawn((
			Name::new(format!("Level {}", entry.number)),
			StateScoped(Screen::Playing(index)),
		))
		.id();
	commands.trigger_targets(SpawnLevel(entry.data.clone()), session);
	commands.spawn((
		widgets::ui_root_justified(JustifyContent::End),
		StateScoped(Screen::Playing(index)),
		children![widgets::label("Press Esc to return to level select")],
	));
}

fn go_to_next_level(
	trigger: Trigger<LevelSolved>,
	registry: Res<LevelRegistry>,
	mut next_screen: EventWriter<QueueScreenTransition>,
	mut commands: Commands,
) {
	let LevelSolved { number } = *trigger.event();
	match registry.next_after(number) {
		Some(index) => commands.trigger(LoadLevel(index)),
		None => {
			info!("All levels completed!");
			next_screen.write(QueueScreenTransition(Screen::Finished));
		}
	}
}

#[cfg(test)]
mod test {
	use bevy::state::app::StatesPlugin;

	use super::*;
	use crate::game::level::registry::RegistryEntry;

	fn setup_app(numbers: &[u32]) -> App {
		let mut app = App::new();
		app.add_plugins((MinimalPlugins, StatesPlugin))
			.init_state::<Screen>()
			.add_event::<QueueScreenTransition>()
			.add_systems(Update, super::super::process_enqueued_transitions)
			.add_plugins(plugin);
		let mut registry = LevelRegistry::default();
		for &number in numbers {
			registry.insert(RegistryEntry {
				number,
				name: format!("Level {number}"),
				identifier: format!("level{number}"),
				data: Handle::default(),
			});
		}
		app.insert_resource(registry);
		app.update();
		app
	}

	fn screen(app: &App) -> Screen {
		*app.world().resource::<State<Screen>>().get()
	}

	#[test]
	fn solving_a_level_loads_the_next_one() {
		let mut app = setup_app(&[2, 1, 3]);
		app.world_mut().trigger(LevelSolved { number: 1 });
		for _ in 0..3 {
			app.update();
		}
		assert_eq!(screen(&app), Screen::Playing(0));
		assert_eq!(
			*app.world().resource::<State<PlayingLevel>>().get(),
			PlayingLevel(0)
		);
	}

	#[test]
	fn solving_the_last_level_finishes_the_game() {
		let mut app = setup_app(&[1, 2]);
		app.world_mut().trigger(LevelSolved { number: 2 });
		for _ in 0..3 {
			app.update();
		}
		assert_eq!(screen(&app), Screen::Finished);
	}

	#[test]
	fn loading_a_missing_level_is_ignored() {
		let mut app = setup_app(&[1]);
		app.world_mut().trigger(LoadLevel(5));
		for _ in 0..3 {
			app.update();
		}
		assert_eq!(screen(&app), Screen::Loading);
	}
}
