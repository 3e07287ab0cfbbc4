//! A loading screen during which the level list and all levels are loaded.

use bevy::prelude::*;
use itertools::Itertools as _;

use super::{QueueScreenTransition, Screen};
use crate::{
	assets::{LevelListLoadState, LoadedLevelList, LEVEL_LIST_PATH},
	game::level::{list::LevelList, registry::LevelRegistry, LevelData},
	ui::prelude::*,
};

pub(super) fn plugin(app: &mut App) {
	app.add_systems(OnEnter(Screen::Loading), enter_loading);
	app.add_systems(
		Update,
		check_level_list.run_if(in_state(Screen::Loading).and(not(resource_exists::<LoadingFailed>))),
	);
}

/// Inserted once loading the levels has failed, the game stays on the loading screen
#[derive(Resource, Debug)]
struct LoadingFailed;

#[derive(Component, Debug)]
struct LoadingLabel;

fn enter_loading(mut commands: Commands) {
	commands.spawn((
		widgets::ui_root(),
		StateScoped(Screen::Loading),
		children![(widgets::label("Loading..."), LoadingLabel)],
	));
}

fn check_level_list(
	asset_server: Res<AssetServer>,
	level_list: Res<LoadedLevelList>,
	lists: Res<Assets<LevelList>>,
	levels: Res<Assets<LevelData>>,
	labels: Query<&Children, With<LoadingLabel>>,
	mut texts: Query<&mut Text>,
	mut next_screen: EventWriter<QueueScreenTransition>,
	mut commands: Commands,
) {
	match level_list.load_state(&asset_server) {
		LevelListLoadState::Loading => {}
		LevelListLoadState::Failed => {
			error!("Failed to load the levels from {LEVEL_LIST_PATH}.");
			commands.insert_resource(LoadingFailed);
			for children in &labels {
				let mut iter = texts.iter_many_mut(children);
				while let Some(mut text) = iter.fetch_next() {
					text.0 = "Failed to load levels.".to_owned();
				}
			}
		}
		LevelListLoadState::Loaded => {
			let Some(list) = lists.get(&level_list.0) else {
				return;
			};
			let registry = LevelRegistry::from_list(list, &levels);
			if registry.is_empty() {
				warn!("No playable levels were found.");
			}
			info!(
				"Loaded {} levels: {}",
				registry.len(),
				registry.iter().map(|(_, entry)| &entry.identifier).join(", ")
			);
			commands.insert_resource(registry);
			next_screen.write(QueueScreenTransition(Screen::Title));
		}
	}
}
