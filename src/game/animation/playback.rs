//! Playback of a single clip on a prop

use std::f32::consts::{PI, TAU};

use super::{animation_easing_function, library::*};
use crate::AppSet;
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
	app.add_systems(Update, tick_clip_playback.in_set(AppSet::UpdateVisuals));
}

/// A clip currently playing on an entity.
///
/// Removed once the clip finishes, the entity keeps the final pose.
#[derive(Component, Clone, Copy, Debug)]
pub struct ClipPlayback {
	clip: Clip,
	elapsed: f32,
	origin: Transform,
	origin_alpha: f32,
}

impl ClipPlayback {
	pub fn new(clip: Clip, origin: Transform, origin_alpha: f32) -> Self {
		Self {
			clip,
			elapsed: 0.0,
			origin,
			origin_alpha,
		}
	}

	/// Relative progress of the clip \[0, 1]
	pub fn progress(&self) -> f32 {
		if self.clip.duration <= 0.0 {
			return 1.0;
		}
		(self.elapsed / self.clip.duration).clamp(0.0, 1.0)
	}

	pub fn is_finished(&self) -> bool {
		self.progress() >= 1.0
	}

	/// Pose of the entity at the current progress
	pub fn sample(&self) -> (Transform, f32) {
		let t = self.progress();
		let eased = animation_easing_function(t);
		let mut transform = self.origin;
		let mut alpha = self.origin_alpha;
		match self.clip.motion {
			ClipMotion::Slide(offset) => {
				transform.translation += (offset * eased).extend(0.0);
			}
			ClipMotion::Spin(turns) => {
				transform.rotation = self.origin.rotation * Quat::from_rotation_z(TAU * turns * eased);
			}
			ClipMotion::Pop(scale) => {
				transform.scale = self.origin.scale * (1.0 + (scale - 1.0) * (PI * t).sin());
			}
			ClipMotion::Fade(target) => {
				alpha = self.origin_alpha.lerp(target, eased);
			}
		}
		(transform, alpha)
	}
}

pub(super) fn tick_clip_playback(
	mut query: Query<(Entity, &mut ClipPlayback, &mut Transform, Option<&mut Sprite>)>,
	time: Res<Time>,
	mut commands: Commands,
) {
	for (entity, mut playback, mut transform, sprite) in &mut query {
		playback.elapsed += time.delta_secs();
		let (pose, alpha) = playback.sample();
		*transform = pose;
		if let Some(mut sprite) = sprite {
			sprite.color.set_alpha(alpha);
		}
		if playback.is_finished() {
			commands.entity(entity).remove::<ClipPlayback>();
		}
	}
}
