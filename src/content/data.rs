//! Serialized level definitions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player::Variant;
use crate::world::{
    Diamond, Environment, HazardRegion, Level, Lever, Spawn, TileMap,
};

/// Axis-aligned rectangle in level pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectDef {
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HazardDef {
    pub kind: Environment,
    pub rect: RectDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeverDef {
    pub rect: RectDef,
    #[serde(default)]
    pub on: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpawnDef {
    pub variant: Variant,
    pub x: f32,
    pub y: f32,
}

fn default_character_size() -> (f32, f32) {
    (32.0, 48.0)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub tile_size: f32,
    /// Width and height shared by both heroes.
    #[serde(default = "default_character_size")]
    pub character_size: (f32, f32),
    /// Glyph rows, top to bottom: `#` stone, `.` backdrop, space empty.
    pub rows: Vec<String>,
    #[serde(default)]
    pub hazards: Vec<HazardDef>,
    #[serde(default)]
    pub diamonds: Vec<RectDef>,
    #[serde(default)]
    pub levers: Vec<LeverDef>,
    pub spawns: Vec<SpawnDef>,
}

impl LevelDef {
    pub fn character_size(&self) -> Vec2 {
        Vec2::new(self.character_size.0, self.character_size.1)
    }

    pub fn build(&self) -> Level {
        let hazards = self
            .hazards
            .iter()
            .map(|hazard| HazardRegion {
                kind: hazard.kind,
                rect: hazard.rect.to_rect(),
            })
            .collect();
        let size = self.character_size();

        Level {
            id: self.id.clone(),
            name: self.name.clone(),
            map: TileMap::from_rows(self.tile_size, &self.rows, hazards),
            diamonds: self
                .diamonds
                .iter()
                .map(|rect| Diamond::new(rect.to_rect()))
                .collect(),
            levers: self
                .levers
                .iter()
                .map(|lever| Lever::new(lever.rect.to_rect(), lever.on))
                .collect(),
            spawns: self
                .spawns
                .iter()
                .map(|spawn| Spawn {
                    variant: spawn.variant,
                    position: Vec2::new(spawn.x, spawn.y),
                    size,
                })
                .collect(),
        }
    }
}
