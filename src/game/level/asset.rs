use bevy::asset::{io::Reader, AssetLoader, LoadContext};

use super::{parser::LevelParseError, *};

pub fn plugin(app: &mut App) {
	app.init_asset::<LevelData>();
	app.init_asset_loader::<LevelLoader>();
}

#[derive(Default)]
struct LevelLoader;

#[derive(Debug)]
enum LevelLoadingError {
	IO(std::io::Error),
	Encoding(std::string::FromUtf8Error),
	Parsing(LevelParseError),
}

impl From<std::io::Error> for LevelLoadingError {
	fn from(value: std::io::Error) -> Self {
		Self::IO(value)
	}
}

impl From<std::string::FromUtf8Error> for LevelLoadingError {
	fn from(value: std::string::FromUtf8Error) -> Self {
		Self::Encoding(value)
	}
}

impl From<LevelParseError> for LevelLoadingError {
	fn from(value: LevelParseError) -> Self {
		Self::Parsing(value)
	}
}

impl std::fmt::Display for LevelLoadingError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LevelLoadingError::IO(e) => f.write_fmt(format_args!(
				"Level could not be loaded because of an IO error: {}",
				e
			)),
			LevelLoadingError::Encoding(e) => f.write_fmt(format_args!(
				"Level could not be loaded because it is not valid UTF-8: {}",
				e
			)),
			LevelLoadingError::Parsing(e) => f.write_fmt(format_args!(
				"Level could not be loaded because of a parsing error: {}",
				e
			)),
		}
	}
}

impl std::error::Error for LevelLoadingError {}

impl AssetLoader for LevelLoader {
	type Asset = LevelData;
	type Error = LevelLoadingError;
	type Settings = ();

	async fn load(
		&self,
		reader: &mut dyn Reader,
		_settings: &Self::Settings,
		load_context: &mut LoadContext<'_>,
	) -> Result<Self::Asset, Self::Error> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes).await?;
		let source = String::from_utf8(bytes)?;
		let path = load_context.asset_path().clone();
		let level = parser::parse(&source, |w| warn!("{path}: {w}"))?;
		Ok(level)
	}

	fn extensions(&self) -> &[&str] {
		&["level"]
	}
}
