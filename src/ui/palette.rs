use bevy::{color::palettes::tailwind::*, prelude::*};

pub const BUTTON_HOVERED_BACKGROUND: Color = Color::Srgba(SLATE_500);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::Srgba(SLATE_300);

pub const BUTTON_TEXT: Color = Color::Srgba(SLATE_50);
pub const LABEL_TEXT: Color = Color::Srgba(SLATE_800);
pub const HEADER_TEXT: Color = BUTTON_TEXT;

pub const NODE_BACKGROUND: Color = Color::Srgba(SLATE_400);

pub const WORD_BUTTON_BACKGROUND: Color = Color::Srgba(AMBER_400);
pub const WORD_BUTTON_HOVERED_BACKGROUND: Color = Color::Srgba(AMBER_500);
pub const WORD_BUTTON_PRESSED_BACKGROUND: Color = Color::Srgba(AMBER_600);
pub const WORD_BUTTON_TEXT: Color = Color::Srgba(SLATE_900);

pub const INPUT_FIELD_BACKGROUND: Color = Color::Srgba(SLATE_50);
pub const INPUT_TEXT: Color = Color::Srgba(SLATE_900);
pub const PLACEHOLDER_TEXT: Color = Color::Srgba(SLATE_400);

pub const SCREEN_BACKGROUND: Color = Color::Srgba(SLATE_200);
