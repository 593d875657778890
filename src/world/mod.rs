//! World domain: the map contract the character simulates against, pickups,
//! and a grid-backed map implementation.

mod level;
mod pickups;
mod tile_map;

#[cfg(test)]
pub(crate) mod stub;
#[cfg(test)]
mod tests;

pub use level::{Level, Spawn};
pub use pickups::{Diamond, Lever};
pub use tile_map::{HazardRegion, TileKind, TileMap};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Playable rectangle of a map, in the same top-left/y-down space as bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl MapBounds {
    pub fn contains(&self, rect: Rect) -> bool {
        rect.min.x >= self.left
            && rect.max.x <= self.right
            && rect.min.y >= self.top
            && rect.max.y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub rect: Rect,
    pub passable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Environment {
    Fire,
    Water,
}

/// One hazard the character is standing in this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentOverlap {
    pub kind: Environment,
    /// Fraction of the queried rectangle covered by the hazard, `0..=1`.
    pub area: f32,
}

/// What the character needs from a level.
pub trait GameMap {
    fn bounds(&self) -> MapBounds;

    /// Broad-phase lookup: every tile that overlaps `rect` must be returned,
    /// extra tiles are allowed.
    fn candidate_tiles(&self, rect: Rect) -> Vec<Tile>;

    fn environment_overlaps(&self, rect: Rect) -> Vec<EnvironmentOverlap>;
}
