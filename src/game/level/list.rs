//! The level list and construction thereof

use super::LevelData;
use bevy::{asset::*, platform::collections::HashSet, reflect::TypePath};

/// Ordered list of the levels of the game, as declared in the list file
#[derive(Clone, Debug, TypePath, Asset)]
pub struct LevelList {
	/// Levels in the list
	pub levels: Vec<LevelInfo>,
}

/// Information about a single level
#[derive(Clone, Debug)]
pub struct LevelInfo {
	/// Path to the level asset
	pub path: AssetPath<'static>,
	/// Unique identifier, the file name of the level without its extension
	pub identifier: String,
	/// Handle to the level data asset in the level file
	pub data_handle: Handle<LevelData>,
}

/// Helper object for construction of a level list
pub struct LevelListBuilder {
	/// The level list that is being built
	list: LevelList,
	/// Identifiers that have been declared so far
	identifiers: HashSet<String>,
}

impl LevelListBuilder {
	pub fn new() -> Self {
		Self {
			list: LevelList { levels: Vec::new() },
			identifiers: HashSet::new(),
		}
	}

	/// Declares a level by its identifier, the level file is expected
	/// to be named `<identifier>.level` and sit next to the list file
	pub fn add_level(&mut self, identifier: &str) -> Result<usize, LevelListBuildError> {
		if !self.identifiers.insert(identifier.to_owned()) {
			return Err(LevelListBuildError::DuplicateLevel(identifier.to_owned()));
		}
		let path = format!("{identifier}.level");
		self.list.levels.push(LevelInfo {
			path: AssetPath::try_parse(&path)
				.map_err(|err| LevelListBuildError::BadAssetPath(path.clone(), err))?
				.into_owned(),
			identifier: identifier.to_owned(),
			data_handle: Handle::default(),
		});
		Ok(self.list.levels.len() - 1)
	}

	pub fn build(
		mut self,
		asset_load_context: &mut LoadContext,
	) -> Result<LevelList, LevelListBuildError> {
		if self.list.levels.is_empty() {
			return Err(LevelListBuildError::NoLevels);
		}
		self.load_level_assets(asset_load_context);
		Ok(self.list)
	}

	fn load_level_assets(&mut self, load_context: &mut LoadContext) {
		for level in &mut self.list.levels {
			// Level paths are relative to the list file
			let path = load_context
				.asset_path()
				.resolve_embed(&level.path.to_string())
				.unwrap_or_else(|_| level.path.clone());
			level.data_handle = load_context.load(path.clone());
			level.path = path;
		}
	}
}

#[derive(Debug)]
pub enum LevelListBuildError {
	/// Asset path has an invalid format
	BadAssetPath(String, ParseAssetPathError),
	/// The same level is declared twice
	DuplicateLevel(String),
	/// The list does not declare any levels
	NoLevels,
}

impl std::error::Error for LevelListBuildError {}

impl std::fmt::Display for LevelListBuildError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadAssetPath(path, reason) => write!(f, "'{path}' is not a valid path to an asset: {reason}"),
			Self::DuplicateLevel(identifier) => write!(f, "level {identifier} is declared more than once"),
			Self::NoLevels => f.write_str("level list does not contain any levels"),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn duplicate_levels_are_rejected() {
		let mut builder = LevelListBuilder::new();
		assert_eq!(builder.add_level("intro").ok(), Some(0));
		assert_eq!(builder.add_level("door").ok(), Some(1));
		assert!(matches!(
			builder.add_level("intro"),
			Err(LevelListBuildError::DuplicateLevel(id)) if id == "intro"
		));
	}
}
