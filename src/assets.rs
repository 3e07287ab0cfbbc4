use bevy::{asset::RecursiveDependencyLoadState, prelude::*};

use crate::game::level::list::LevelList;

/// Path of the level list file, relative to the asset directory
pub const LEVEL_LIST_PATH: &str = "levels/list.levels";

pub(super) fn plugin(app: &mut App) {
	app.init_resource::<LoadedLevelList>();
}

/// Handle of the level list, keeps the list and all its levels loaded
#[derive(Resource, Debug)]
pub struct LoadedLevelList(pub Handle<LevelList>);

impl FromWorld for LoadedLevelList {
	fn from_world(world: &mut World) -> Self {
		let asset_server = world.resource::<AssetServer>();
		Self(asset_server.load(LEVEL_LIST_PATH))
	}
}

/// Progress of loading the level list together with its levels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelListLoadState {
	Loading,
	Loaded,
	Failed,
}

impl LoadedLevelList {
	pub fn load_state(&self, asset_server: &AssetServer) -> LevelListLoadState {
		match asset_server.get_recursive_dependency_load_state(&self.0) {
			Some(RecursiveDependencyLoadState::Loaded) => LevelListLoadState::Loaded,
			Some(RecursiveDependencyLoadState::Failed(_)) => LevelListLoadState::Failed,
			_ => LevelListLoadState::Loading,
		}
	}
}
