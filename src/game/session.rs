//! The level session: runtime owner of one level's match state and solve playback

use bevy::{platform::collections::HashMap, prelude::*};

use super::{
	animation::{AnimationLibrary, SolveAnimator},
	events::*,
	level::LevelData,
	matcher::{MatchResult, SentenceMatcher},
	solve::{ResolvedStep, SolveSequencePlayer, SolveTiming},
};

pub(super) fn plugin(app: &mut App) {
	app.add_observer(spawn_level);
}

/// Marks an entity that belongs to a level session
/// and is despawned together with it
#[derive(Component, Debug)]
#[relationship(relationship_target = SessionEntities)]
pub struct SessionMember(pub Entity);

/// Entities that belong to a level session
#[derive(Component, Debug, Default)]
#[relationship_target(relationship = SessionMember, linked_spawn)]
pub struct SessionEntities(Vec<Entity>);

/// State of the level being played, lives on the session entity
#[derive(Component, Debug)]
pub struct LevelSession {
	/// Data of the level being played
	pub level: Handle<LevelData>,
	/// Number of the level being played
	pub number: u32,
	/// Progress of the player through the sentence
	pub matcher: SentenceMatcher,
	/// Spawned props by name
	props: HashMap<String, Entity>,
}

impl LevelSession {
	pub fn prop(&self, name: &str) -> Option<Entity> {
		self.props.get(name).copied()
	}

	/// Looks up the controllers and targets of the level's solve steps
	fn resolve_steps(
		&self,
		level: &LevelData,
		library: &AnimationLibrary,
	) -> (Vec<ResolvedStep>, Vec<Option<Entity>>) {
		level
			.solve_steps
			.iter()
			.map(|step| {
				let controller = step.controller.as_deref().and_then(|name| {
					let id = library.find(name);
					if id.is_none() {
						warn!("Animation controller {name} does not exist.");
					}
					id
				});
				let target = step.target.as_deref().and_then(|name| self.prop(name));
				(
					ResolvedStep {
						controller,
						trigger: step.trigger.clone(),
					},
					target,
				)
			})
			.unzip()
	}
}

/// A scene object of a level that solve steps can animate
#[derive(Component, Debug, Clone)]
pub struct LevelProp {
	pub name: String,
}

fn spawn_level(
	trigger: Trigger<SpawnLevel>,
	levels: Res<Assets<LevelData>>,
	timing: Res<SolveTiming>,
	mut commands: Commands,
) {
	let session = trigger.target();
	if session == Entity::PLACEHOLDER {
		warn!("SpawnLevel has to target a session entity.");
		return;
	}
	let SpawnLevel(handle) = trigger.event();
	let Some(level) = levels.get(handle) else {
		warn!("LevelData is missing, the level is not playable.");
		return;
	};

	let matcher = SentenceMatcher::new(level.expected_words());
	if matcher.expected().is_empty() {
		warn!(
			"Level {} has an empty sentence and can never be solved.",
			level.number
		);
	}

	let mut props = HashMap::new();
	for prop in &level.props {
		let id = commands
			.spawn((
				Name::new(format!("Prop {}", prop.name)),
				LevelProp {
					name: prop.name.clone(),
				},
				SolveAnimator::default(),
				Sprite::from_color(prop.color, prop.size),
				Transform::from_translation(prop.position.extend(0.0)),
				SessionMember(session),
			))
			.id();
		props.insert(prop.name.clone(), id);
	}

	info!("Starting level {}: {}", level.number, level.name);
	commands
		.entity(session)
		.insert((
			LevelSession {
				level: handle.clone(),
				number: level.number,
				matcher,
				props,
			},
			SolveSequencePlayer::new(timing.post_solve_wait),
		))
		.observe(on_word_selected)
		.observe(on_solve_sequence_finished);
}

fn on_word_selected(
	trigger: Trigger<WordSelected>,
	mut sessions: Query<(&mut LevelSession, &mut SolveSequencePlayer)>,
	mut animators: Query<&mut SolveAnimator>,
	levels: Res<Assets<LevelData>>,
	library: Res<AnimationLibrary>,
) {
	let Ok((mut session, mut player)) = sessions.get_mut(trigger.target()) else {
		warn!("Word selected for an entity that is not a level session.");
		return;
	};
	let WordSelected(word) = trigger.event();
	match session.matcher.submit(word) {
		MatchResult::Accepted => info!("Correct word selected: {word}"),
		MatchResult::Rejected => info!("Incorrect word selected or wrong order: {word}. Try again."),
		MatchResult::Completed => {
			info!("Sentence completed correctly! Puzzle solved.");
			let (steps, targets) = match levels.get(&session.level) {
				Some(level) => session.resolve_steps(level, &library),
				None => {
					warn!("LevelData is missing, no solve animations will play.");
					default()
				}
			};
			let fired = player.play(&steps, &targets, &mut animators);
			debug!("Fired {fired} of {} solve steps.", steps.len());
		}
	}
}

fn on_solve_sequence_finished(
	trigger: Trigger<SolveSequenceFinished>,
	sessions: Query<&LevelSession>,
	mut commands: Commands,
) {
	let Ok(session) = sessions.get(trigger.target()) else {
		return;
	};
	commands.trigger(LevelSolved {
		number: session.number,
	});
}
