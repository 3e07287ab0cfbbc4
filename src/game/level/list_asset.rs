use bevy::asset::{io::Reader, AssetLoader, LoadContext};

use super::{list::*, *};

pub fn plugin(app: &mut App) {
	app.init_asset::<LevelList>();
	app.init_asset_loader::<LevelListLoader>();
}

#[derive(Default)]
struct LevelListLoader;

#[derive(Debug)]
enum LevelListLoadError {
	IO(std::io::Error),
	Encoding(std::string::FromUtf8Error),
	Lex(lex::LexError),
	Build(LevelListBuildError),
	UnknownAssignmentKey(String),
	UnknownKeyword(String),
}

impl std::error::Error for LevelListLoadError {}

impl std::fmt::Display for LevelListLoadError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::IO(e) => e.fmt(f),
			Self::Encoding(e) => e.fmt(f),
			Self::Lex(e) => e.fmt(f),
			Self::Build(e) => e.fmt(f),
			Self::UnknownAssignmentKey(key) => write!(f, "Cannot assign to unknown key {key}."),
			Self::UnknownKeyword(kw) => write!(f, "Unknown keyword {kw}."),
		}
	}
}

impl From<std::io::Error> for LevelListLoadError {
	fn from(value: std::io::Error) -> Self {
		Self::IO(value)
	}
}

impl From<std::string::FromUtf8Error> for LevelListLoadError {
	fn from(value: std::string::FromUtf8Error) -> Self {
		Self::Encoding(value)
	}
}

impl From<lex::LexError> for LevelListLoadError {
	fn from(value: lex::LexError) -> Self {
		Self::Lex(value)
	}
}

impl From<LevelListBuildError> for LevelListLoadError {
	fn from(value: LevelListBuildError) -> Self {
		Self::Build(value)
	}
}

impl AssetLoader for LevelListLoader {
	type Asset = LevelList;
	type Error = LevelListLoadError;
	type Settings = ();

	async fn load(
		&self,
		reader: &mut dyn Reader,
		_settings: &Self::Settings,
		load_context: &mut LoadContext<'_>,
	) -> Result<Self::Asset, Self::Error> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes).await?;
		let s = String::from_utf8(bytes)?;
		let mut builder = LevelListBuilder::new();
		for line in lex::parse(&s) {
			let (_, statement) = line?;
			match statement {
				lex::RawStatement::Action(statement) => match statement.verb {
					"LEVEL" => {
						for arg in &statement.values {
							builder.add_level(arg)?;
						}
					}
					other => return Err(LevelListLoadError::UnknownKeyword(other.to_owned())),
				},
				lex::RawStatement::Assignment(statement) => {
					return Err(LevelListLoadError::UnknownAssignmentKey(
						statement.key.to_owned(),
					));
				}
			}
		}
		Ok(builder.build(load_context)?)
	}

	fn extensions(&self) -> &[&str] {
		&["levels"]
	}
}
