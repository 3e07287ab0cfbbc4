//! Trigger driven animations of level props

pub mod library;
mod playback;

use crate::AppSet;
use bevy::prelude::*;
pub use library::{AnimationLibrary, ControllerId};
use playback::ClipPlayback;

pub fn plugin(app: &mut App) {
	app.register_type::<AnimationLibrary>();
	app.init_resource::<AnimationLibrary>();
	app.add_plugins(playback::plugin);
	app.add_systems(
		Update,
		start_triggered_clips
			.in_set(AppSet::UpdateVisuals)
			.before(playback::tick_clip_playback),
	);
}

fn animation_easing_function(t: f32) -> f32 {
	// Linear first half, quadratic ease-out in the second half
	if t > 0.5 {
		1.0 - (1.0 - t).powi(2) * 4.0 / 3.0
	} else {
		t * 4.0 / 3.0
	}
}

/// Plays clips of an animation controller when triggers are fired on it
#[derive(Component, Clone, Debug, Default)]
pub struct SolveAnimator {
	controller: Option<ControllerId>,
	/// Triggers fired since the last frame, in order
	pending_triggers: Vec<String>,
}

impl SolveAnimator {
	pub fn controller(&self) -> Option<ControllerId> {
		self.controller
	}

	pub fn set_controller(&mut self, controller: ControllerId) {
		self.controller = Some(controller);
	}

	pub fn set_trigger(&mut self, trigger: &str) {
		self.pending_triggers.push(trigger.to_owned());
	}

	pub fn pending_triggers(&self) -> &[String] {
		&self.pending_triggers
	}
}

fn start_triggered_clips(
	mut query: Query<(Entity, &mut SolveAnimator, &Transform, Option<&Sprite>), Changed<SolveAnimator>>,
	library: Res<AnimationLibrary>,
	mut commands: Commands,
) {
	for (entity, mut animator, transform, sprite) in &mut query {
		if animator.pending_triggers.is_empty() {
			continue;
		}
		let triggers = std::mem::take(&mut animator.pending_triggers);
		let Some(controller) = animator.controller else {
			warn!("Triggers {triggers:?} fired on {entity} without an animation controller.");
			continue;
		};
		// Like a state machine with one layer, a later trigger overrides an earlier one
		for trigger in triggers {
			let Some(clip) = library.clip(controller, &trigger) else {
				debug!("Controller {controller:?} has no clip for trigger {trigger}.");
				continue;
			};
			let alpha = sprite.map_or(1.0, |sprite| sprite.color.alpha());
			commands
				.entity(entity)
				.insert(ClipPlayback::new(*clip, *transform, alpha));
		}
	}
}
