//! Loader for RON level and tuning files.

use std::fs;
use std::path::Path;

use ron::Options;
use serde::de::DeserializeOwned;

use super::data::LevelDef;
use super::validation::{ValidationError, validate_level};
use crate::physics::PhysicsTuning;

/// Built-in level used when no level file can be loaded.
pub const DEMO_LEVEL: &str = include_str!("../../assets/levels/forest_temple.ron");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("level '{level}' failed validation with {} problem(s)", .problems.len())]
    Invalid {
        level: String,
        problems: Vec<ValidationError>,
    },
}

/// Optional fields in level and tuning files may be written without `Some(..)`.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn parse<T: DeserializeOwned>(source: &str, file: &str) -> Result<T, ContentError> {
    ron_options()
        .from_str(source)
        .map_err(|source| ContentError::Parse {
            file: file.to_string(),
            source,
        })
}

fn read(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        file: path.display().to_string(),
        source,
    })
}

/// Parse and validate a level from RON text. `file` only labels errors.
pub fn parse_level(source: &str, file: &str) -> Result<LevelDef, ContentError> {
    let level: LevelDef = parse(source, file)?;
    let problems = validate_level(&level);
    if problems.is_empty() {
        Ok(level)
    } else {
        Err(ContentError::Invalid {
            level: level.id,
            problems,
        })
    }
}

pub fn load_level(path: &Path) -> Result<LevelDef, ContentError> {
    let source = read(path)?;
    parse_level(&source, &path.display().to_string())
}

/// Fields missing from the file keep their default values.
pub fn load_tuning(path: &Path) -> Result<PhysicsTuning, ContentError> {
    let source = read(path)?;
    parse(&source, &path.display().to_string())
}

/// The built-in demo level.
pub fn demo_level() -> Result<LevelDef, ContentError> {
    parse_level(DEMO_LEVEL, "<built-in demo level>")
}
