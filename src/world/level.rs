//! World domain: a playable level assembled from content.

use bevy::prelude::*;

use crate::player::Variant;
use crate::world::{Diamond, Lever, TileMap};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub variant: Variant,
    /// Top-left corner of the character's rectangle.
    pub position: Vec2,
    pub size: Vec2,
}

/// Map plus the pickups that live on it. The characters are separate entities.
#[derive(Resource, Debug, Clone)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub map: TileMap,
    pub diamonds: Vec<Diamond>,
    pub levers: Vec<Lever>,
    pub spawns: Vec<Spawn>,
}

impl Level {
    pub fn spawn_for(&self, variant: Variant) -> Option<&Spawn> {
        self.spawns.iter().find(|spawn| spawn.variant == variant)
    }

    pub fn diamonds_remaining(&self) -> usize {
        self.diamonds.iter().filter(|d| !d.is_collected()).count()
    }
}
