//! Named animation controllers that map trigger names to clips

use bevy::prelude::*;

/// Handle to a controller stored in the [`AnimationLibrary`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub struct ControllerId(usize);

/// A motion played on a prop for a fixed amount of time
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct Clip {
	pub motion: ClipMotion,
	/// Length of the clip in seconds
	pub duration: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub enum ClipMotion {
	/// Move by an offset
	Slide(Vec2),
	/// Rotate by a number of full turns, counterclockwise
	Spin(f32),
	/// Grow to a scale factor and back
	Pop(f32),
	/// Change opacity to the given alpha
	Fade(f32),
}

/// Set of clips that can be triggered by name
#[derive(Clone, Debug, Reflect)]
pub struct AnimationController {
	pub name: String,
	pub clips: Vec<(String, Clip)>,
}

impl AnimationController {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			clips: Vec::new(),
		}
	}

	pub fn with_clip(mut self, trigger: impl Into<String>, motion: ClipMotion, duration: f32) -> Self {
		self.clips.push((trigger.into(), Clip { motion, duration }));
		self
	}

	pub fn clip(&self, trigger: &str) -> Option<&Clip> {
		self.clips
			.iter()
			.find_map(|(name, clip)| (name == trigger).then_some(clip))
	}
}

/// All animation controllers that levels can refer to by name
#[derive(Resource, Clone, Debug, Reflect)]
#[reflect(Resource)]
pub struct AnimationLibrary {
	controllers: Vec<AnimationController>,
}

impl AnimationLibrary {
	pub fn empty() -> Self {
		Self {
			controllers: Vec::new(),
		}
	}

	/// Adds a controller, replacing any controller of the same name
	pub fn add(&mut self, controller: AnimationController) -> ControllerId {
		if let Some(id) = self.find(&controller.name) {
			self.controllers[id.0] = controller;
			return id;
		}
		self.controllers.push(controller);
		ControllerId(self.controllers.len() - 1)
	}

	pub fn find(&self, name: &str) -> Option<ControllerId> {
		self.controllers
			.iter()
			.position(|controller| controller.name == name)
			.map(ControllerId)
	}

	pub fn get(&self, id: ControllerId) -> Option<&AnimationController> {
		self.controllers.get(id.0)
	}

	pub fn clip(&self, id: ControllerId, trigger: &str) -> Option<&Clip> {
		self.get(id).and_then(|controller| controller.clip(trigger))
	}
}

impl Default for AnimationLibrary {
	fn default() -> Self {
		use ClipMotion::*;
		let mut library = Self::empty();
		library.add(
			AnimationController::new("door")
				.with_clip("open", Slide(Vec2::new(0.0, 220.0)), 1.5)
				.with_clip("close", Slide(Vec2::new(0.0, -220.0)), 1.5),
		);
		library.add(
			AnimationController::new("slider")
				.with_clip("left", Slide(Vec2::new(-200.0, 0.0)), 1.0)
				.with_clip("right", Slide(Vec2::new(200.0, 0.0)), 1.0),
		);
		library.add(AnimationController::new("spinner").with_clip("spin", Spin(1.0), 1.2));
		library.add(AnimationController::new("popper").with_clip("pop", Pop(1.5), 0.6));
		library.add(
			AnimationController::new("fader")
				.with_clip("fade_out", Fade(0.0), 1.0)
				.with_clip("fade_in", Fade(1.0), 1.0),
		);
		library
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn clips_are_found_by_controller_and_trigger() {
		let library = AnimationLibrary::default();
		let door = library.find("door").expect("Door controller should exist");
		assert_eq!(
			library.clip(door, "open").map(|clip| clip.motion),
			Some(ClipMotion::Slide(Vec2::new(0.0, 220.0)))
		);
		assert!(library.clip(door, "spin").is_none());
		assert!(library.find("trapdoor").is_none());
	}

	#[test]
	fn adding_a_controller_twice_replaces_it() {
		let mut library = AnimationLibrary::empty();
		let first = library.add(AnimationController::new("lamp").with_clip("on", ClipMotion::Fade(1.0), 0.5));
		let second = library.add(AnimationController::new("lamp").with_clip("off", ClipMotion::Fade(0.0), 0.5));
		assert_eq!(first, second);
		assert!(library.clip(first, "on").is_none());
		assert!(library.clip(first, "off").is_some());
	}
}
