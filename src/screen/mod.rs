//! The game's main screen states and transitions between them.

mod finished;
mod level_select;
mod loading;
mod playing;
mod title;

use bevy::{input::common_conditions::input_just_pressed, prelude::*};

pub use playing::{LoadLevel, PlayingLevel};

pub(super) fn plugin(app: &mut App) {
	app.init_state::<Screen>();
	app.add_event::<QueueScreenTransition>();
	app.enable_state_scoped_entities::<Screen>();

	app.add_plugins((
		loading::plugin,
		title::plugin,
		level_select::plugin,
		playing::plugin,
		finished::plugin,
	));

	app.add_systems(Update, process_enqueued_transitions);
	app.add_systems(
		Update,
		go_to_return_screen.run_if(input_just_pressed(KeyCode::Escape)),
	);
}

fn go_to_return_screen(
	current_screen: Res<State<Screen>>,
	mut next_screen: EventWriter<QueueScreenTransition>,
) {
	if let Some(next) = current_screen.return_screen() {
		next_screen.write(QueueScreenTransition(next));
	}
}

fn process_enqueued_transitions(
	mut in_events: EventReader<QueueScreenTransition>,
	mut state: ResMut<NextState<Screen>>,
) {
	// Only the last request of a frame counts
	if let Some(QueueScreenTransition(next)) = in_events.read().last() {
		state.set(*next);
	}
}

/// Request to change the screen at the end of the frame
#[derive(Event, PartialEq, Eq, Clone, Copy, Debug)]
pub struct QueueScreenTransition(pub Screen);

/// The game's main screen states.
/// # To change a screenstate, `write` a [`QueueScreenTransition`] instead
#[derive(States, Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub enum Screen {
	#[default]
	Loading,
	Title,
	LevelSelect,
	/// Playing the level with the given index in the [`crate::game::level::registry::LevelRegistry`]
	Playing(usize),
	/// Every level has been solved
	Finished,
}

impl Screen {
	/// Which screen should we return to
	fn return_screen(self) -> Option<Self> {
		match self {
			Self::LevelSelect | Self::Finished => Some(Self::Title),
			Self::Playing(_) => Some(Self::LevelSelect),
			_ => None,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn escape_leads_back_to_menus() {
		assert_eq!(Screen::Playing(4).return_screen(), Some(Screen::LevelSelect));
		assert_eq!(Screen::LevelSelect.return_screen(), Some(Screen::Title));
		assert_eq!(Screen::Finished.return_screen(), Some(Screen::Title));
		assert_eq!(Screen::Title.return_screen(), None);
		assert_eq!(Screen::Loading.return_screen(), None);
	}
}
