//! Content domain: RON level and tuning files, their loader and validation.

mod data;
mod loader;
mod validation;


pub use data::{HazardDef, LevelDef, LeverDef, RectDef, SpawnDef};
pub use loader::{
    ContentError, DEMO_LEVEL, demo_level, load_level, load_tuning, parse_level,
};
pub use validation::{ValidationError, validate_level};
