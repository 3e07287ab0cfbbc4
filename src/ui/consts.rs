//! Global UI measurements

use bevy::prelude::*;
use Val::*;

// Common
pub const HEADING_HEIGHT: Val = Px(65.0);
pub const HEADING_TEXT_SIZE: f32 = 40.0;
pub const MENU_BUTTON_HEIGHT: Val = HEADING_HEIGHT;
pub const MENU_BUTTON_TEXT_SIZE: f32 = HEADING_TEXT_SIZE;
pub const WIDE_BUTTON_WIDTH: Val = Px(200.0);
pub const COMMON_BUTTON_TEXT_SIZE: f32 = 30.0;
pub const LABEL_WIDTH: Val = Px(500.0);
pub const COMMON_GAP_PX: f32 = 10.0;
pub const COMMON_GAP: Val = Px(COMMON_GAP_PX);
pub const COMMON_TEXT_SIZE: f32 = 24.0;

// Level select
pub const GRID_BUTTON_WIDTH: Val = Px(260.0);
pub const GRID_BUTTON_HEIGHT: Val = Px(45.0);
pub const LEVEL_SELECT_COLUMNS: u16 = 3;

// Word board
pub const INPUT_TEXT_SIZE: f32 = 24.0;
pub const INPUT_PADDING: UiRect = UiRect::horizontal(Px(10.0));
pub const WORD_TEXT_MIN_SIZE: f32 = 8.0;
pub const WORD_TEXT_MAX_SIZE: f32 = 30.0;
/// Size of the level title label on the playing screen
pub const LEVEL_TITLE_SIZE: f32 = 35.0;
