use super::{parser::*, *};

fn parse_quietly(source: &str) -> Result<LevelData, LevelParseError> {
	parse(source, |_| {})
}

fn parse_with_warnings(source: &str) -> (LevelData, Vec<LevelParseWarning>) {
	let mut warnings = Vec::new();
	let level = parse(source, |w| warnings.push(w)).expect("Level should parse");
	(level, warnings)
}

#[test]
fn test_full_level() {
	let (level, warnings) = parse_with_warnings(
		r"
# The first level
name=First Steps
number=1
sentence=go to the door
WORDS go to the
WORDS door run
PROP door 0 -40 120 200 amber
PROP lamp 200 100 40 40
STEP door open door
STEP _ _ lamp
",
	);
	assert!(warnings.is_empty(), "Unexpected warnings: {warnings:?}");
	assert_eq!(level.number, 1);
	assert_eq!(level.name, "First Steps");
	assert_eq!(level.expected_words(), vec!["go", "to", "the", "door"]);
	assert_eq!(level.words, vec!["go", "to", "the", "door", "run"]);
	assert!(!level.shuffle);
	assert_eq!(level.props.len(), 2);
	assert_eq!(level.props[0].position, Vec2::new(0.0, -40.0));
	assert_eq!(level.props[0].size, Vec2::new(120.0, 200.0));
	assert_eq!(
		level.solve_steps,
		vec![
			SolveStep {
				controller: Some("door".to_owned()),
				trigger: "open".to_owned(),
				target: Some("door".to_owned()),
			},
			SolveStep {
				controller: None,
				trigger: String::new(),
				target: Some("lamp".to_owned()),
			},
		]
	);
}

#[test]
fn test_sentence_splits_on_any_whitespace() {
	let level = parse_quietly("number=4\nsentence=  the   cat\tsat ").expect("Level should parse");
	assert_eq!(level.expected_words(), vec!["the", "cat", "sat"]);
}

#[test]
fn test_missing_number() {
	assert_eq!(
		parse_quietly("sentence=a b").unwrap_err(),
		LevelParseError::MissingNumber
	);
}

#[test]
fn test_invalid_values() {
	assert_eq!(
		parse_quietly("number=one").unwrap_err(),
		LevelParseError::InvalidNumber(0, "one".to_owned())
	);
	assert_eq!(
		parse_quietly("number=1\nshuffle=maybe").unwrap_err(),
		LevelParseError::InvalidBool(1, "maybe".to_owned())
	);
	assert_eq!(
		parse_quietly("number=1\nPROP door 0 x 10 10").unwrap_err(),
		LevelParseError::InvalidNumber(1, "x".to_owned())
	);
	assert_eq!(
		parse_quietly("number=1\nPROP door 0 0 10 10 chartreuse").unwrap_err(),
		LevelParseError::UnknownColor(1, "chartreuse".to_owned())
	);
}

#[test]
fn test_structural_errors() {
	assert_eq!(
		parse_quietly("number=1\nnumber=2").unwrap_err(),
		LevelParseError::DuplicateAssignment(1, "number".to_owned())
	);
	assert_eq!(
		parse_quietly("number=1\nscene=intro").unwrap_err(),
		LevelParseError::UnknownAssignmentKey(1, "scene".to_owned())
	);
	assert_eq!(
		parse_quietly("number=1\nJUMP high").unwrap_err(),
		LevelParseError::UnknownKeyword(1, "JUMP".to_owned())
	);
	assert_eq!(
		parse_quietly("number=1\nSTEP door open").unwrap_err(),
		LevelParseError::WrongArgumentCount {
			line: 1,
			verb: "STEP",
			expected: "3",
			found: 2,
		}
	);
	assert_eq!(
		parse_quietly("number=1\nPROP door 0 0 1 1\nPROP door 5 5 1 1").unwrap_err(),
		LevelParseError::DuplicateProp(2, "door".to_owned())
	);
}

#[test]
fn test_configuration_hazards_are_warnings() {
	let (level, warnings) = parse_with_warnings(
		r"
number=9
WORDS go
STEP door open gate
",
	);
	assert!(level.expected_words().is_empty());
	assert_eq!(
		warnings,
		vec![
			LevelParseWarning::EmptySentence,
			LevelParseWarning::UnknownStepTarget(3, "gate".to_owned()),
		]
	);

	let (_, warnings) = parse_with_warnings("number=9\nsentence=go home\nWORDS go");
	assert_eq!(
		warnings,
		vec![LevelParseWarning::WordMissingFromPool("home".to_owned())]
	);
}
