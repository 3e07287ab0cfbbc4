//! Development tools for the game. This plugin is only enabled in dev builds.

use std::time::Duration;

use bevy::{
	dev_tools::{
		fps_overlay::{FpsOverlayConfig, FpsOverlayPlugin},
		states::log_transitions,
	},
	input::common_conditions::input_just_pressed,
	prelude::*,
	window::WindowMode,
};
use itertools::Itertools as _;

use crate::{
	game::{level::LevelData, session::LevelSession, solve::SolveTiming},
	screen::{PlayingLevel, Screen},
};

pub(super) fn plugin(app: &mut App) {
	// Print state transitions in dev builds
	app.add_systems(
		Update,
		(
			log_transitions::<Screen>,
			log_transitions::<PlayingLevel>,
			print_level_session.run_if(input_just_pressed(KeyCode::KeyY)),
			toggle_solve_wait.run_if(input_just_pressed(KeyCode::KeyT)),
			toggle_fps_diagnostic.run_if(input_just_pressed(KeyCode::KeyF)),
			toggle_full_screen.run_if(input_just_pressed(KeyCode::F11)),
		),
	);
	app.init_resource::<SolveWaitState>();
	app.add_plugins(FpsOverlayPlugin {
		config: FpsOverlayConfig {
			text_color: Color::WHITE,
			text_config: TextFont {
				font_size: 12.0,
				..default()
			},
			enabled: false,
			..default()
		},
	});
}

#[derive(Resource, Clone, Copy, PartialEq, Eq, Deref, DerefMut, Debug, Default)]
struct SolveWaitState(pub usize);

fn print_level_session(sessions: Query<&LevelSession>, levels: Res<Assets<LevelData>>) {
	for session in &sessions {
		log::info!(
			"Level {}: '{}' of '{}'",
			session.number,
			session.matcher.progress().iter().join(" "),
			session.matcher.expected().iter().join(" "),
		);
		log::info!("{:?}", levels.get(&session.level));
	}
}

fn toggle_solve_wait(mut timing: ResMut<SolveTiming>, mut current_setting: ResMut<SolveWaitState>) {
	const OPTIONS: [Duration; 3] = [
		Duration::from_secs(2),
		Duration::from_millis(200),
		Duration::from_secs(10),
	];
	**current_setting = (**current_setting + 1) % OPTIONS.len();
	timing.post_solve_wait = OPTIONS[**current_setting];
	log::info!("Solve wait set to {:?}", timing.post_solve_wait);
}

fn toggle_fps_diagnostic(mut config: ResMut<FpsOverlayConfig>) {
	config.enabled = !config.enabled;
	config.frame_time_graph_config.enabled = config.enabled;
}

fn toggle_full_screen(mut window: Single<&mut Window>) {
	if window.mode == WindowMode::Windowed {
		window.mode = WindowMode::BorderlessFullscreen(MonitorSelection::Current);
	} else {
		window.mode = WindowMode::Windowed;
	}
}
