//! Playback of the animations that accompany a solved level

use std::time::Duration;

use bevy::prelude::*;

use super::{
	animation::{ControllerId, SolveAnimator},
	events::SolveSequenceFinished,
};
use crate::AppSet;

pub(super) fn plugin(app: &mut App) {
	app.register_type::<SolveTiming>();
	app.init_resource::<SolveTiming>();
	app.add_systems(
		Update,
		(
			tick_solve_sequences.in_set(AppSet::TickTimers),
			finish_solve_sequences.in_set(AppSet::GameLogic),
		),
	);
}

/// Timing of solve sequences
#[derive(Resource, Debug, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct SolveTiming {
	/// How long to wait after all solve animations have been triggered
	/// before the sequence counts as finished.
	/// This is not derived from the lengths of the triggered clips.
	pub post_solve_wait: Duration,
}

impl Default for SolveTiming {
	fn default() -> Self {
		Self {
			post_solve_wait: Duration::from_secs(2),
		}
	}
}

/// Lifecycle of a [`SolveSequencePlayer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
	#[default]
	Idle,
	/// Triggers are being fired
	Playing,
	/// All triggers have been fired, waiting for the animations to play out
	Waiting,
	/// Completion has been signalled
	Done,
}

/// A solve step whose controller has been looked up in the animation library
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStep {
	pub controller: Option<ControllerId>,
	pub trigger: String,
}

/// Reason a solve step could not be played
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepUnresolvable {
	MissingController,
	MissingTrigger,
	MissingTarget,
	MissingAnimator(Entity),
}

impl std::error::Error for StepUnresolvable {}

impl std::fmt::Display for StepUnresolvable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::MissingController => f.write_str("animation controller is missing"),
			Self::MissingTrigger => f.write_str("trigger name is missing"),
			Self::MissingTarget => f.write_str("target object is missing"),
			Self::MissingAnimator(entity) => write!(f, "animator not found on {entity}"),
		}
	}
}

/// Plays the solve steps of a level once, then signals
/// [`SolveSequenceFinished`] on its own entity after a fixed wait.
///
/// Dropping the player (by despawning its entity) during the wait
/// means the completion is never signalled.
#[derive(Component, Debug, Clone)]
pub struct SolveSequencePlayer {
	state: PlaybackState,
	wait: Timer,
}

impl SolveSequencePlayer {
	pub fn new(wait: Duration) -> Self {
		Self {
			state: PlaybackState::Idle,
			wait: Timer::new(wait, TimerMode::Once),
		}
	}

	pub fn state(&self) -> PlaybackState {
		self.state
	}

	/// Fires the trigger of each step on the animator of the target with the same index.
	///
	/// Only as many steps as there are targets are played (and vice versa).
	/// Steps that cannot be resolved are skipped with a warning.
	/// Returns the number of triggers that were fired.
	pub fn play(
		&mut self,
		steps: &[ResolvedStep],
		targets: &[Option<Entity>],
		animators: &mut Query<&mut SolveAnimator>,
	) -> usize {
		if self.state != PlaybackState::Idle {
			warn!("Solve sequence has already been played.");
			return 0;
		}
		self.state = PlaybackState::Playing;
		let mut fired = 0;
		for (i, (step, target)) in steps.iter().zip(targets).enumerate() {
			match issue_step(step, *target, animators) {
				Ok(()) => fired += 1,
				Err(reason) => warn!("Skipping solve step {i}: {reason}."),
			}
		}
		self.state = PlaybackState::Waiting;
		self.wait.reset();
		fired
	}

	/// Advances the wait, players that are not waiting are left alone
	pub fn tick(&mut self, delta: Duration) {
		if self.state == PlaybackState::Waiting {
			self.wait.tick(delta);
		}
	}

	/// Moves the player to [`PlaybackState::Done`] once the wait is over.
	/// Returns `true` exactly once, when that happens.
	pub fn finish(&mut self) -> bool {
		if self.state != PlaybackState::Waiting || !self.wait.finished() {
			return false;
		}
		self.state = PlaybackState::Done;
		true
	}
}

fn issue_step(
	step: &ResolvedStep,
	target: Option<Entity>,
	animators: &mut Query<&mut SolveAnimator>,
) -> Result<(), StepUnresolvable> {
	let controller = step.controller.ok_or(StepUnresolvable::MissingController)?;
	if step.trigger.is_empty() {
		return Err(StepUnresolvable::MissingTrigger);
	}
	let target = target.ok_or(StepUnresolvable::MissingTarget)?;
	let mut animator = animators
		.get_mut(target)
		.map_err(|_| StepUnresolvable::MissingAnimator(target))?;
	if animator.controller() != Some(controller) {
		animator.set_controller(controller);
	}
	animator.set_trigger(&step.trigger);
	Ok(())
}

fn tick_solve_sequences(mut query: Query<&mut SolveSequencePlayer>, time: Res<Time>) {
	for mut player in &mut query {
		player.tick(time.delta());
	}
}

fn finish_solve_sequences(
	mut query: Query<(Entity, &mut SolveSequencePlayer)>,
	mut commands: Commands,
) {
	for (entity, mut player) in &mut query {
		if player.finish() {
			commands.trigger_targets(SolveSequenceFinished, entity);
		}
	}
}
