use bevy::prelude::*;

use super::level::LevelData;

/// Sent to a level session entity to set up the level described by the data
#[derive(Event, Debug, Clone)]
pub struct SpawnLevel(pub Handle<LevelData>);

/// Sent to a level session entity when the player selects a word
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct WordSelected(pub String);

/// Sent to a level session entity once its solve sequence has played out
#[derive(Event, Debug, Clone, Copy)]
pub struct SolveSequenceFinished;

/// Sent globally when a level has been solved and is ready to be left
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSolved {
	/// Number of the solved level
	pub number: u32,
}
