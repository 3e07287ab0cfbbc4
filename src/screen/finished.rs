//! Shown once the last level has been solved.

use bevy::prelude::*;

use super::{QueueScreenTransition, Screen};
use crate::ui::prelude::*;

pub(super) fn plugin(app: &mut App) {
	app.add_systems(OnEnter(Screen::Finished), enter_finished);
	app.add_systems(
		Update,
		handle_finished_action.run_if(in_state(Screen::Finished)),
	);
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
struct BackToTitle;

fn enter_finished(mut commands: Commands) {
	commands.spawn((
		widgets::ui_root(),
		StateScoped(Screen::Finished),
		children![
			widgets::header("All levels completed!"),
			(widgets::menu_button("Title"), BackToTitle),
		],
	));
}

fn handle_finished_action(
	query: InteractionQuery<(), With<BackToTitle>>,
	mut next_screen: EventWriter<QueueScreenTransition>,
) {
	for (interaction, ()) in &query {
		if *interaction == Interaction::Pressed {
			next_screen.write(QueueScreenTransition(Screen::Title));
		}
	}
}
