//! Fire and water heroes in a tile-based temple: per-frame character
//! kinematics, axis-separated tile collision, hazards and pickups, plus the
//! Bevy shell that drives them.

pub mod content;
pub mod game;
pub mod physics;
pub mod player;
pub mod world;

pub use game::GamePlugin;
