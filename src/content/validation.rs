//! Structural checks for level definitions.

use std::collections::HashSet;

use bevy::prelude::*;

use super::data::{LevelDef, RectDef};
use crate::physics::overlaps;
use crate::world::{GameMap, TileKind, TileMap};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub level_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "level '{}' field '{}': {}",
            self.level_id, self.field, self.message
        )
    }
}

/// Validate a level definition.
/// Returns every problem found, empty if the level is playable.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut push = |field: &'static str, message: String| {
        errors.push(ValidationError {
            level_id: level.id.clone(),
            field,
            message,
        });
    };

    if !(level.tile_size.is_finite() && level.tile_size > 0.0) {
        push("tile_size", format!("must be positive, got {}", level.tile_size));
    }

    let (width, height) = level.character_size;
    if !(width > 0.0 && height > 0.0) {
        push(
            "character_size",
            format!("must be positive, got ({width}, {height})"),
        );
    }

    match level.rows.first() {
        None => push("rows", "level has no rows".to_string()),
        Some(first) => {
            let expected = first.chars().count();
            for (row, line) in level.rows.iter().enumerate() {
                let cells = line.chars().count();
                if cells != expected {
                    push(
                        "rows",
                        format!("row {row} has {cells} cells, expected {expected}"),
                    );
                }
                for (column, glyph) in line.chars().enumerate() {
                    if TileKind::from_glyph(glyph).is_none() {
                        push(
                            "rows",
                            format!("row {row} column {column}: unknown glyph '{glyph}'"),
                        );
                    }
                }
            }
        }
    }

    for (index, hazard) in level.hazards.iter().enumerate() {
        if !has_area(hazard.rect) {
            push("hazards", format!("hazard {index} has no area"));
        }
    }
    for (index, diamond) in level.diamonds.iter().enumerate() {
        if !has_area(*diamond) {
            push("diamonds", format!("diamond {index} has no area"));
        }
    }
    for (index, lever) in level.levers.iter().enumerate() {
        if !has_area(lever.rect) {
            push("levers", format!("lever {index} has no area"));
        }
    }

    if level.spawns.is_empty() {
        push("spawns", "level has no spawn points".to_string());
    }

    let map = TileMap::from_rows(level.tile_size.max(f32::EPSILON), &level.rows, Vec::new());
    let bounds = map.bounds();
    let size = level.character_size();
    let mut seen = HashSet::new();
    for spawn in &level.spawns {
        let label = spawn.variant.label();
        if !seen.insert(spawn.variant) {
            push("spawns", format!("{label} spawn is defined more than once"));
        }

        let origin = Vec2::new(spawn.x, spawn.y);
        let rect = Rect::from_corners(origin, origin + size);
        if !bounds.contains(rect) {
            push(
                "spawns",
                format!("{label} spawn at ({}, {}) is outside the map", spawn.x, spawn.y),
            );
        } else if map
            .candidate_tiles(rect)
            .iter()
            .any(|tile| !tile.passable && overlaps(rect, tile.rect))
        {
            push(
                "spawns",
                format!("{label} spawn at ({}, {}) is inside stone", spawn.x, spawn.y),
            );
        }
    }

    errors
}

fn has_area(rect: RectDef) -> bool {
    rect.w > 0.0 && rect.h > 0.0
}
