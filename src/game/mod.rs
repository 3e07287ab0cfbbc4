//! Game mechanics and content.

pub mod animation;
pub mod board;
pub mod events;
pub mod level;
pub mod matcher;
pub mod session;
pub mod solve;

#[cfg(test)]
mod test;

pub mod prelude {
	pub use super::events::*;
	pub use super::level::LevelData;
	pub use super::matcher::{MatchResult, SentenceMatcher};
	pub use super::session::{LevelSession, SessionMember};
	pub use bevy::prelude::*;
}

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
	app.add_plugins((
		level::plugin,
		animation::plugin,
		solve::plugin,
		session::plugin,
		board::plugin,
	));
	app.add_event::<events::LevelSolved>();
}
