//! The title screen that appears when the game starts.

use bevy::prelude::*;

use super::{QueueScreenTransition, Screen};
use crate::ui::prelude::*;

pub(super) fn plugin(app: &mut App) {
	app.add_systems(OnEnter(Screen::Title), enter_title);

	app.register_type::<TitleAction>();
	app.add_systems(Update, handle_title_action.run_if(in_state(Screen::Title)));
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
enum TitleAction {
	Play,
	/// Exit doesn't work well with embedded applications.
	#[cfg(not(target_family = "wasm"))]
	Exit,
}

fn enter_title(mut commands: Commands) {
	let _root = commands
		.spawn((
			widgets::ui_root(),
			StateScoped(Screen::Title),
			children![
				widgets::header("Word Order"),
				(widgets::menu_button("Play"), TitleAction::Play),
			],
		))
		.id();
	#[cfg(not(target_family = "wasm"))]
	commands.spawn((
		widgets::menu_button("Exit"),
		TitleAction::Exit,
		ChildOf(_root),
	));
}

fn handle_title_action(
	button_query: InteractionQuery<&TitleAction>,
	mut next_screen: EventWriter<QueueScreenTransition>,
	#[cfg(not(target_family = "wasm"))] mut app_exit: EventWriter<AppExit>,
) {
	for (interaction, action) in &button_query {
		if matches!(interaction, Interaction::Pressed) {
			match action {
				TitleAction::Play => {
					next_screen.write(QueueScreenTransition(Screen::LevelSelect));
				}
				#[cfg(not(target_family = "wasm"))]
				TitleAction::Exit => {
					app_exit.write(AppExit::Success);
				}
			}
		}
	}
}
