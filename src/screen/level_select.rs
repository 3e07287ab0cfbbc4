use bevy::prelude::*;

use super::*;
use crate::{
	game::level::registry::LevelRegistry,
	ui::{consts::*, prelude::*},
};

pub(super) fn plugin(app: &mut App) {
	app.add_systems(OnEnter(Screen::LevelSelect), spawn_screen)
		.add_systems(
			Update,
			handle_level_select_screen_action.run_if(in_state(Screen::LevelSelect)),
		);
}

#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
enum LevelSelectAction {
	Back,
	PlayLevel(usize),
}

fn spawn_screen(mut commands: Commands, registry: Res<LevelRegistry>) {
	let grid = commands
		.spawn((
			Name::new("Level Grid"),
			Node {
				display: Display::Grid,
				column_gap: COMMON_GAP,
				row_gap: COMMON_GAP,
				justify_content: JustifyContent::Center,
				align_content: AlignContent::Center,
				grid_template_columns: vec![RepeatedGridTrack::auto(LEVEL_SELECT_COLUMNS)],
				..default()
			},
		))
		.id();
	for (index, entry) in registry.iter() {
		commands.spawn((
			widgets::grid_button(format!("{}. {}", entry.number, entry.name)),
			LevelSelectAction::PlayLevel(index),
			ChildOf(grid),
		));
	}
	let back = commands
		.spawn((widgets::menu_button("Back"), LevelSelectAction::Back))
		.id();
	commands
		.spawn((
			widgets::ui_root(),
			StateScoped(Screen::LevelSelect),
			children![widgets::header("Level Select")],
		))
		.add_children(&[grid, back]);
}

fn handle_level_select_screen_action(
	mut next_screen: EventWriter<QueueScreenTransition>,
	query: InteractionQuery<&LevelSelectAction>,
	mut commands: Commands,
) {
	for (interaction, action) in &query {
		if *interaction != Interaction::Pressed {
			continue;
		}
		match action {
			LevelSelectAction::Back => {
				next_screen.write(QueueScreenTransition(Screen::Title));
			}
			LevelSelectAction::PlayLevel(index) => {
				commands.trigger(LoadLevel(*index));
			}
		}
	}
}
