//! Helper functions for creating common widgets.

use super::{consts::*, interaction::InteractionPalette, palette::*};
use bevy::{prelude::*, ui::Val::*};

/// Largest type of buttons, use for menus
pub fn menu_button(text: impl Into<String>) -> impl Bundle {
	(
		Name::new("Button"),
		Button,
		Node {
			width: WIDE_BUTTON_WIDTH,
			height: MENU_BUTTON_HEIGHT,
			justify_content: JustifyContent::Center,
			align_items: AlignItems::Center,
			..default()
		},
		BackgroundColor(NODE_BACKGROUND),
		InteractionPalette {
			none: NODE_BACKGROUND,
			hovered: BUTTON_HOVERED_BACKGROUND,
			pressed: BUTTON_PRESSED_BACKGROUND,
		},
		children![(
			Name::new("Button Text"),
			Text::new(text),
			TextFont {
				font_size: MENU_BUTTON_TEXT_SIZE,
				..default()
			},
			TextColor(BUTTON_TEXT),
		)],
	)
}

/// Large buttons for grids
pub fn grid_button(text: impl Into<String>) -> impl Bundle {
	(
		Name::new("Button"),
		Button,
		Node {
			width: GRID_BUTTON_WIDTH,
			height: GRID_BUTTON_HEIGHT,
			justify_content: JustifyContent::Center,
			align_items: AlignItems::Center,
			..default()
		},
		BackgroundColor(NODE_BACKGROUND),
		InteractionPalette {
			none: NODE_BACKGROUND,
			hovered: BUTTON_HOVERED_BACKGROUND,
			pressed: BUTTON_PRESSED_BACKGROUND,
		},
		children![(
			Name::new("Button Text"),
			Text::new(text),
			TextFont {
				font_size: COMMON_BUTTON_TEXT_SIZE,
				..default()
			},
			TextColor(BUTTON_TEXT),
		)],
	)
}

/// Button carrying a selectable word, placed absolutely within its parent.
///
/// Long words get a smaller font so that they fit the button.
pub fn word_button(word: impl Into<String>, position: Vec2, size: Vec2) -> impl Bundle {
	let word = word.into();
	let font_size = word_font_size(&word, size);
	(
		Name::new(format!("Word Button {word}")),
		Button,
		Node {
			position_type: PositionType::Absolute,
			left: Px(position.x),
			top: Px(position.y),
			width: Px(size.x),
			height: Px(size.y),
			justify_content: JustifyContent::Center,
			align_items: AlignItems::Center,
			overflow: Overflow::clip(),
			..default()
		},
		BackgroundColor(WORD_BUTTON_BACKGROUND),
		InteractionPalette {
			none: WORD_BUTTON_BACKGROUND,
			hovered: WORD_BUTTON_HOVERED_BACKGROUND,
			pressed: WORD_BUTTON_PRESSED_BACKGROUND,
		},
		children![(
			Name::new("Button Text"),
			Text::new(word),
			TextFont {
				font_size,
				..default()
			},
			TextColor(WORD_BUTTON_TEXT),
		)],
	)
}

/// Largest font size between [`WORD_TEXT_MIN_SIZE`] and [`WORD_TEXT_MAX_SIZE`]
/// at which the word roughly fits into a button of the given size
pub fn word_font_size(word: &str, button_size: Vec2) -> f32 {
	// Glyphs of the default font are about 0.6 em wide
	let characters = word.chars().count().max(1) as f32;
	let fit_width = button_size.x * 0.9 / (characters * 0.6);
	let fit_height = button_size.y * 0.7;
	fit_width
		.min(fit_height)
		.clamp(WORD_TEXT_MIN_SIZE, WORD_TEXT_MAX_SIZE)
}

/// Header label. Bigger than [`label`]
pub fn header(text: impl Into<String>) -> impl Bundle {
	(
		Name::new("Header"),
		Node {
			width: LABEL_WIDTH,
			height: HEADING_HEIGHT,
			justify_content: JustifyContent::Center,
			align_items: AlignItems::Center,
			..default()
		},
		BackgroundColor(NODE_BACKGROUND),
		children![(
			Name::new("Header Text"),
			Text::new(text),
			TextFont {
				font_size: HEADING_TEXT_SIZE,
				..default()
			},
			TextColor(HEADER_TEXT),
		)],
	)
}

/// Simple text label
pub fn label(text: impl Into<String>) -> impl Bundle {
	(
		Name::new("Label"),
		Node {
			width: LABEL_WIDTH,
			justify_content: JustifyContent::Center,
			align_items: AlignItems::Center,
			..default()
		},
		children![(
			Name::new("Label Text"),
			Text::new(text),
			TextFont {
				font_size: COMMON_TEXT_SIZE,
				..default()
			},
			TextColor(LABEL_TEXT),
		)],
	)
}

/// Root node that covers the full screen
/// and centers its content horizontally and vertically
pub fn ui_root() -> impl Bundle {
	ui_root_justified(JustifyContent::Center)
}

pub fn ui_root_justified(justify_content: JustifyContent) -> impl Bundle {
	(
		Name::new("UI Root"),
		Node {
			width: Percent(100.0),
			height: Percent(100.0),
			justify_content,
			align_items: AlignItems::Center,
			flex_direction: FlexDirection::Column,
			row_gap: COMMON_GAP,
			position_type: PositionType::Absolute,
			..default()
		},
	)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn word_font_size_is_clamped() {
		let size = Vec2::new(100.0, 50.0);
		assert_eq!(word_font_size("a", size), WORD_TEXT_MAX_SIZE);
		assert_eq!(
			word_font_size("pneumonoultramicroscopicsilicovolcanoconiosis", size),
			WORD_TEXT_MIN_SIZE
		);
		let medium = word_font_size("doorway", size);
		assert!(medium > WORD_TEXT_MIN_SIZE && medium < WORD_TEXT_MAX_SIZE);
	}
}
