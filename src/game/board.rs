//! The word board: an input field showing the selected words
//! and a grid of buttons, one per word of the level's word pool

use bevy::{prelude::*, ui::Val::*};
use rand::seq::SliceRandom as _;

use super::{
	events::{SpawnLevel, WordSelected},
	level::LevelData,
	session::{LevelSession, SessionMember},
};
use crate::{
	ui::{consts::*, palette::*, prelude::*},
	AppSet,
};

pub(super) fn plugin(app: &mut App) {
	app.register_type::<WordBoardLayout>();
	app.init_resource::<WordBoardLayout>();
	app.add_observer(spawn_word_board);
	app.add_systems(
		Update,
		(
			press_word_buttons.in_set(AppSet::ExecuteInput),
			refresh_boards_on_level_change.in_set(AppSet::GameLogic),
			update_input_text.in_set(AppSet::UpdateVisuals),
		),
	);
}

/// Text shown in the input field while no word has been selected
pub const INPUT_PLACEHOLDER: &str = "Enter words here...";

/// Placement of the word board on screen, in logical pixels
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct WordBoardLayout {
	/// Width and height of each button
	pub button_size: Vec2,
	/// Number of buttons per row
	pub buttons_per_row: usize,
	/// Spacing between buttons
	pub spacing: Vec2,
	/// Offset of the board from the top-left corner of the screen
	pub start_offset: Vec2,
}

impl Default for WordBoardLayout {
	fn default() -> Self {
		Self {
			button_size: Vec2::new(100.0, 50.0),
			buttons_per_row: 3,
			spacing: Vec2::new(10.0, 10.0),
			start_offset: Vec2::new(50.0, 50.0),
		}
	}
}

impl WordBoardLayout {
	/// Top-left corner of the button with the given index, relative to the board.
	/// The grid starts right below the input field.
	pub fn button_position(&self, index: usize) -> Vec2 {
		let per_row = self.buttons_per_row.max(1);
		let row = (index / per_row) as f32;
		let column = (index % per_row) as f32;
		Vec2::new(
			column * (self.button_size.x + self.spacing.x),
			row * (self.button_size.y + self.spacing.y) + self.button_size.y,
		)
	}
}

/// Root of a word board, spawned for each level session
#[derive(Component, Debug, Clone, Copy)]
pub struct WordBoard {
	/// Session that receives the selected words
	pub session: Entity,
	/// Entity with the [`InputField`]
	pub input: Entity,
	/// Parent of the word buttons
	pub panel: Entity,
}

/// A button that selects a word when pressed
#[derive(Component, Debug, Clone)]
pub struct WordButton {
	pub word: String,
	/// The [`WordBoard`] the button belongs to
	pub board: Entity,
}

/// Text of the input field, every selected word gets appended
#[derive(Component, Debug, Clone, Default)]
pub struct InputField {
	pub contents: String,
}

fn spawn_word_board(
	trigger: Trigger<SpawnLevel>,
	levels: Res<Assets<LevelData>>,
	layout: Res<WordBoardLayout>,
	mut commands: Commands,
) {
	let session = trigger.target();
	let SpawnLevel(handle) = trigger.event();
	let Some(level) = levels.get(handle) else {
		warn!("LevelData or word list is missing, the word board will be empty.");
		return;
	};
	if session == Entity::PLACEHOLDER {
		return;
	}
	if level.words.is_empty() {
		warn!("Level {} has an empty word list.", level.number);
	}

	let input = commands
		.spawn((
			Name::new("Input Text"),
			InputField::default(),
			Text::new(INPUT_PLACEHOLDER),
			TextFont {
				font_size: INPUT_TEXT_SIZE,
				..default()
			},
			TextColor(PLACEHOLDER_TEXT),
		))
		.id();
	let input_field = commands
		.spawn((
			Name::new("Input Field"),
			Node {
				position_type: PositionType::Absolute,
				left: Px(layout.start_offset.x),
				right: Px(layout.start_offset.x),
				top: Px(layout.start_offset.y),
				height: Px(layout.button_size.y),
				align_items: AlignItems::Center,
				padding: INPUT_PADDING,
				..default()
			},
			BackgroundColor(INPUT_FIELD_BACKGROUND),
		))
		.add_child(input)
		.id();
	let panel = commands
		.spawn((
			Name::new("Panel"),
			Node {
				position_type: PositionType::Absolute,
				left: Px(layout.start_offset.x),
				top: Px(layout.start_offset.y),
				..default()
			},
		))
		.id();
	let title = commands
		.spawn((
			Name::new("Level Title"),
			Node {
				position_type: PositionType::Absolute,
				bottom: Px(layout.start_offset.y),
				width: Percent(100.0),
				justify_content: JustifyContent::Center,
				..default()
			},
			children![(
				Text::new(format!("{}. {}", level.number, level.name)),
				TextFont {
					font_size: LEVEL_TITLE_SIZE,
					..default()
				},
				TextColor(LABEL_TEXT),
			)],
		))
		.id();
	let board = commands
		.spawn((
			Name::new("Word Board"),
			Node {
				width: Percent(100.0),
				height: Percent(100.0),
				position_type: PositionType::Absolute,
				..default()
			},
			SessionMember(session),
		))
		.add_children(&[input_field, panel, title])
		.id();
	commands.entity(board).insert(WordBoard {
		session,
		input,
		panel,
	});
	populate_buttons(&mut commands, board, panel, level, &layout);
}

/// Spawns one button per word of the level under the panel
fn populate_buttons(
	commands: &mut Commands,
	board: Entity,
	panel: Entity,
	level: &LevelData,
	layout: &WordBoardLayout,
) {
	let mut words = level.words.clone();
	if level.shuffle {
		words.shuffle(&mut rand::thread_rng());
	}
	for (i, word) in words.into_iter().enumerate() {
		commands.spawn((
			widgets::word_button(word.clone(), layout.button_position(i), layout.button_size),
			WordButton { word, board },
			ChildOf(panel),
		));
	}
}

fn press_word_buttons(
	buttons: InteractionQuery<&WordButton>,
	boards: Query<&WordBoard>,
	mut inputs: Query<&mut InputField>,
	mut commands: Commands,
) {
	for (interaction, button) in &buttons {
		if *interaction != Interaction::Pressed {
			continue;
		}
		let Ok(board) = boards.get(button.board) else {
			warn!("Word button {} does not belong to a board.", button.word);
			continue;
		};
		if let Ok(mut input) = inputs.get_mut(board.input) {
			input.contents.push_str(&button.word);
			input.contents.push(' ');
		}
		commands.trigger_targets(WordSelected(button.word.clone()), board.session);
	}
}

fn update_input_text(mut query: Query<(&InputField, &mut Text, &mut TextColor), Changed<InputField>>) {
	for (input, mut text, mut color) in &mut query {
		if input.contents.is_empty() {
			text.0 = INPUT_PLACEHOLDER.to_owned();
			color.0 = PLACEHOLDER_TEXT;
		} else {
			text.0.clone_from(&input.contents);
			color.0 = INPUT_TEXT;
		}
	}
}

/// Rebuilds the buttons of boards whose level data has been modified,
/// so that edits to level files show up without restarting the level
fn refresh_boards_on_level_change(
	mut events: EventReader<AssetEvent<LevelData>>,
	boards: Query<(Entity, &WordBoard)>,
	sessions: Query<&LevelSession>,
	levels: Res<Assets<LevelData>>,
	layout: Res<WordBoardLayout>,
	mut commands: Commands,
) {
	for event in events.read() {
		let AssetEvent::Modified { id } = event else {
			continue;
		};
		for (board_id, board) in &boards {
			let Ok(session) = sessions.get(board.session) else {
				continue;
			};
			if session.level.id() != *id {
				continue;
			}
			let Some(level) = levels.get(*id) else {
				continue;
			};
			info!("Level {} changed, refreshing word buttons.", level.number);
			commands.entity(board.panel).despawn_related::<Children>();
			populate_buttons(&mut commands, board_id, board.panel, level, &layout);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn buttons_fill_rows_below_the_input_field() {
		let layout = WordBoardLayout::default();
		assert_eq!(layout.button_position(0), Vec2::new(0.0, 50.0));
		assert_eq!(layout.button_position(2), Vec2::new(220.0, 50.0));
		assert_eq!(layout.button_position(3), Vec2::new(0.0, 110.0));
		assert_eq!(layout.button_position(7), Vec2::new(110.0, 170.0));
	}

	#[test]
	fn zero_buttons_per_row_is_treated_as_one() {
		let layout = WordBoardLayout {
			buttons_per_row: 0,
			..default()
		};
		assert_eq!(layout.button_position(2), Vec2::new(0.0, 170.0));
	}
}
