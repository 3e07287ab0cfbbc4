//! Turns lexed level description statements into [`LevelData`]
//!
//! ```text
//! name=First Steps
//! number=1
//! sentence=go to the door
//! WORDS go to the door run
//! PROP door 0 -40 120 200 amber
//! STEP door open door
//! ```

use bevy::{color::palettes::tailwind, platform::collections::HashSet, prelude::*};

use super::{
	lex::{self, LexError, RawActionStatement, RawAssignmentStatement, RawStatement},
	LevelData, PropData, SolveStep,
};

/// Placeholder for a missing part of a solve step
const MISSING: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelParseError {
	Lex(LexError),
	/// Assignment to a key that levels do not have
	UnknownAssignmentKey(usize, String),
	/// The same key was assigned twice
	DuplicateAssignment(usize, String),
	/// Action verb that levels do not have
	UnknownKeyword(usize, String),
	/// A value could not be read as a number
	InvalidNumber(usize, String),
	/// A value could not be read as a boolean
	InvalidBool(usize, String),
	/// An action was given a wrong amount of values
	WrongArgumentCount {
		line: usize,
		verb: &'static str,
		expected: &'static str,
		found: usize,
	},
	/// A prop color that is not in the palette
	UnknownColor(usize, String),
	/// Two props share a name
	DuplicateProp(usize, String),
	/// `number` was never assigned
	MissingNumber,
}

/// Problems that do not prevent the level from loading,
/// but likely make it misbehave
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelParseWarning {
	/// The sentence has no words, the level cannot be solved
	EmptySentence,
	/// A word of the sentence cannot be selected from the pool
	WordMissingFromPool(String),
	/// A solve step targets a prop that is not declared
	UnknownStepTarget(usize, String),
}

/// Parses a level description, reporting non-fatal problems to `on_warning`
pub fn parse(
	source: &str,
	mut on_warning: impl FnMut(LevelParseWarning),
) -> Result<LevelData, LevelParseError> {
	let mut builder = LevelDataBuilder::default();
	for line in lex::parse(source) {
		let (line_number, statement) = line.map_err(LevelParseError::Lex)?;
		match statement {
			RawStatement::Assignment(statement) => builder.assign(line_number, statement)?,
			RawStatement::Action(statement) => builder.act(line_number, statement)?,
		}
	}
	builder.build(&mut on_warning)
}

#[derive(Default)]
struct LevelDataBuilder {
	data: LevelData,
	assigned: HashSet<String>,
	number: Option<u32>,
	prop_names: HashSet<String>,
	step_lines: Vec<usize>,
}

impl LevelDataBuilder {
	fn assign(
		&mut self,
		line: usize,
		statement: RawAssignmentStatement,
	) -> Result<(), LevelParseError> {
		let key = statement.key.to_ascii_lowercase();
		if !self.assigned.insert(key.clone()) {
			return Err(LevelParseError::DuplicateAssignment(line, key));
		}
		match key.as_str() {
			"name" => self.data.name = statement.value.to_owned(),
			"sentence" => self.data.sentence = statement.value.to_owned(),
			"number" => {
				self.number = Some(statement.value.parse().map_err(|_| {
					LevelParseError::InvalidNumber(line, statement.value.to_owned())
				})?);
			}
			"shuffle" => {
				self.data.shuffle = statement.value.parse().map_err(|_| {
					LevelParseError::InvalidBool(line, statement.value.to_owned())
				})?;
			}
			_ => return Err(LevelParseError::UnknownAssignmentKey(line, key)),
		}
		Ok(())
	}

	fn act(&mut self, line: usize, statement: RawActionStatement) -> Result<(), LevelParseError> {
		match statement.verb {
			"WORDS" => {
				self.data
					.words
					.extend(statement.values.iter().map(|&word| word.to_owned()));
			}
			"PROP" => self.add_prop(line, &statement.values)?,
			"STEP" => {
				let &[controller, trigger, target] = statement.values.as_slice() else {
					return Err(LevelParseError::WrongArgumentCount {
						line,
						verb: "STEP",
						expected: "3",
						found: statement.values.len(),
					});
				};
				self.data.solve_steps.push(SolveStep {
					controller: optional(controller),
					trigger: optional(trigger).unwrap_or_default(),
					target: optional(target),
				});
				self.step_lines.push(line);
			}
			other => return Err(LevelParseError::UnknownKeyword(line, other.to_owned())),
		}
		Ok(())
	}

	fn add_prop(&mut self, line: usize, values: &[&str]) -> Result<(), LevelParseError> {
		let (name, numbers, color) = match values {
			[name, x, y, w, h] => (*name, [*x, *y, *w, *h], None),
			[name, x, y, w, h, color] => (*name, [*x, *y, *w, *h], Some(*color)),
			_ => {
				return Err(LevelParseError::WrongArgumentCount {
					line,
					verb: "PROP",
					expected: "5 or 6",
					found: values.len(),
				})
			}
		};
		let [x, y, w, h] = numbers.map(|value| {
			value
				.parse::<f32>()
				.map_err(|_| LevelParseError::InvalidNumber(line, value.to_owned()))
		});
		let color = match color {
			None => tailwind::SLATE_500.into(),
			Some(name) => {
				palette_color(name).ok_or_else(|| LevelParseError::UnknownColor(line, name.to_owned()))?
			}
		};
		if !self.prop_names.insert(name.to_owned()) {
			return Err(LevelParseError::DuplicateProp(line, name.to_owned()));
		}
		self.data.props.push(PropData {
			name: name.to_owned(),
			position: Vec2::new(x?, y?),
			size: Vec2::new(w?, h?),
			color,
		});
		Ok(())
	}

	fn build(
		mut self,
		on_warning: &mut impl FnMut(LevelParseWarning),
	) -> Result<LevelData, LevelParseError> {
		self.data.number = self.number.ok_or(LevelParseError::MissingNumber)?;

		let expected = self.data.expected_words();
		if expected.is_empty() {
			on_warning(LevelParseWarning::EmptySentence);
		}
		for word in expected {
			if !self.data.words.contains(&word) {
				on_warning(LevelParseWarning::WordMissingFromPool(word));
			}
		}
		for (step, line) in self.data.solve_steps.iter().zip(&self.step_lines) {
			if let Some(target) = &step.target {
				if !self.prop_names.contains(target) {
					on_warning(LevelParseWarning::UnknownStepTarget(*line, target.clone()));
				}
			}
		}
		Ok(self.data)
	}
}

fn optional(value: &str) -> Option<String> {
	(value != MISSING).then(|| value.to_owned())
}

fn palette_color(name: &str) -> Option<Color> {
	use tailwind as p;
	let color = match name.to_ascii_lowercase().as_str() {
		"slate" => p::SLATE_500,
		"red" => p::RED_500,
		"orange" => p::ORANGE_500,
		"amber" => p::AMBER_500,
		"yellow" => p::YELLOW_500,
		"green" => p::GREEN_500,
		"teal" => p::TEAL_500,
		"sky" => p::SKY_500,
		"blue" => p::BLUE_500,
		"indigo" => p::INDIGO_500,
		"purple" => p::PURPLE_500,
		"pink" => p::PINK_500,
		"rose" => p::ROSE_500,
		_ => return None,
	};
	Some(color.into())
}

impl std::error::Error for LevelParseError {}

impl std::fmt::Display for LevelParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Lex(e) => e.fmt(f),
			Self::UnknownAssignmentKey(line, key) => {
				write!(f, "Line {}: Cannot assign to unknown key {key}.", line + 1)
			}
			Self::DuplicateAssignment(line, key) => {
				write!(f, "Line {}: Key {key} is assigned more than once.", line + 1)
			}
			Self::UnknownKeyword(line, kw) => write!(f, "Line {}: Unknown keyword {kw}.", line + 1),
			Self::InvalidNumber(line, value) => {
				write!(f, "Line {}: '{value}' is not a valid number.", line + 1)
			}
			Self::InvalidBool(line, value) => {
				write!(f, "Line {}: '{value}' is neither true nor false.", line + 1)
			}
			Self::WrongArgumentCount {
				line,
				verb,
				expected,
				found,
			} => write!(
				f,
				"Line {}: {verb} takes {expected} values, but {found} were given.",
				line + 1
			),
			Self::UnknownColor(line, color) => {
				write!(f, "Line {}: Unknown color {color}.", line + 1)
			}
			Self::DuplicateProp(line, name) => {
				write!(f, "Line {}: Prop {name} is declared more than once.", line + 1)
			}
			Self::MissingNumber => f.write_str("Level is missing a number."),
		}
	}
}

impl std::fmt::Display for LevelParseWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::EmptySentence => f.write_str("Sentence is empty, the level can never be solved."),
			Self::WordMissingFromPool(word) => {
				write!(f, "Word '{word}' of the sentence is not in the word pool.")
			}
			Self::UnknownStepTarget(line, target) => {
				write!(f, "Line {}: Solve step targets unknown prop {target}.", line + 1)
			}
		}
	}
}
