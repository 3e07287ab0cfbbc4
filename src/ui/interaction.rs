use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
	app.add_systems(Update, apply_interaction_palette);
}

pub type InteractionQuery<'w, 's, T, F = ()> =
	Query<'w, 's, (&'static Interaction, T), (Changed<Interaction>, F)>;

/// Palette for widget interactions.
#[derive(Component, Clone, Copy, Debug)]
pub struct InteractionPalette {
	pub none: Color,
	pub hovered: Color,
	pub pressed: Color,
}

fn apply_interaction_palette(
	mut palette_query: InteractionQuery<(&InteractionPalette, &mut BackgroundColor)>,
) {
	for (interaction, (palette, mut background)) in &mut palette_query {
		*background = match interaction {
			Interaction::None => palette.none,
			Interaction::Hovered => palette.hovered,
			Interaction::Pressed => palette.pressed,
		}
		.into();
	}
}
