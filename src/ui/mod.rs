//! Reusable UI widgets & theming.

pub mod consts;
pub mod interaction;
pub mod palette;
pub mod widgets;

#[allow(unused_imports)]
pub mod prelude {
	pub use super::{
		interaction::{InteractionPalette, InteractionQuery},
		widgets,
	};
}

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
	app.insert_resource(ClearColor(palette::SCREEN_BACKGROUND));
	app.add_plugins(interaction::plugin);
}
