//! Level content: the data a designer writes for a single puzzle
//! and the registry that orders levels into a campaign.

pub mod asset;
pub mod lex;
pub mod list;
pub mod list_asset;
pub mod parser;
pub mod registry;
#[cfg(test)]
mod test;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
	app.add_plugins((asset::plugin, list_asset::plugin));
}

/// Everything needed to set up and solve one level
#[derive(Asset, TypePath, Debug, Clone, Default)]
pub struct LevelData {
	/// Position of the level in the campaign, used to find the level that follows
	pub number: u32,
	/// Name shown to the player
	pub name: String,
	/// The sentence the player has to assemble
	pub sentence: String,
	/// Pool of selectable words, including distractors
	pub words: Vec<String>,
	/// Whether the word buttons should be presented in random order
	pub shuffle: bool,
	/// Scene objects that solve steps can animate
	pub props: Vec<PropData>,
	/// Animations played once the sentence is complete, in order
	pub solve_steps: Vec<SolveStep>,
}

impl LevelData {
	/// The target sentence split into words
	pub fn expected_words(&self) -> Vec<String> {
		self.sentence.split_whitespace().map(str::to_owned).collect()
	}
}

/// One (controller, trigger, target) triple played back when a level is solved.
///
/// Any part may be missing, in which case the step is skipped at playback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStep {
	/// Name of an animation controller in [`crate::game::animation::AnimationLibrary`]
	pub controller: Option<String>,
	/// Name of the trigger to fire, empty if none
	pub trigger: String,
	/// Name of the [`PropData`] the step animates
	pub target: Option<String>,
}

/// A scene object spawned alongside the level
#[derive(Debug, Clone, PartialEq)]
pub struct PropData {
	pub name: String,
	pub position: Vec2,
	pub size: Vec2,
	pub color: Color,
}
