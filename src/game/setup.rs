//! Game domain: level loading and entity spawning at startup.

use bevy::prelude::*;

use crate::content::{ContentError, LevelDef, demo_level, load_level, load_tuning};
use crate::game::presentation::{
    CHARACTER_Z, HAZARD_Z, PICKUP_Z, TILE_Z, lever_color, placed, variant_color,
};
use crate::game::{DiamondSprite, GameSettings, KeyBindings, LeverReach, LeverSprite, SpawnPoint};
use crate::physics::PhysicsTuning;
use crate::player::Character;
use crate::world::{Environment, GameMap};

fn report(error: &ContentError) {
    error!("{error}");
    if let ContentError::Invalid { problems, .. } = error {
        for problem in problems {
            error!("  - {problem}");
        }
    }
}

/// Configured level file, then the built-in demo level.
fn resolve_level(settings: &GameSettings) -> Option<LevelDef> {
    match load_level(&settings.level_path) {
        Ok(level) => return Some(level),
        Err(e) => {
            report(&e);
            warn!("Falling back to the built-in demo level");
        }
    }
    match demo_level() {
        Ok(level) => Some(level),
        Err(e) => {
            report(&e);
            None
        }
    }
}

pub(crate) fn setup_level(mut commands: Commands, settings: Res<GameSettings>) {
    let tuning = match load_tuning(&settings.tuning_path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{e}; using default physics tuning");
            PhysicsTuning::default()
        }
    };

    let Some(def) = resolve_level(&settings) else {
        error!("No playable level, nothing to spawn");
        return;
    };
    let level = def.build();
    let bounds = level.map.bounds();
    info!(
        "Loaded level '{}' ({}): {} diamonds, {} levers, {} spawns",
        level.name,
        level.id,
        level.diamonds.len(),
        level.levers.len(),
        level.spawns.len()
    );

    commands.spawn((
        Camera2d,
        Transform::from_xyz(
            (bounds.left + bounds.right) / 2.0,
            -(bounds.top + bounds.bottom) / 2.0,
            10.0,
        ),
    ));

    for tile in level.map.tiles() {
        let color = if tile.passable {
            Color::srgb(0.22, 0.3, 0.22)
        } else {
            Color::srgb(0.35, 0.38, 0.3)
        };
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(tile.rect.size()),
                ..default()
            },
            placed(tile.rect, TILE_Z),
        ));
    }

    for hazard in level.map.hazards() {
        let color = match hazard.kind {
            Environment::Fire => Color::srgba(0.95, 0.3, 0.1, 0.8),
            Environment::Water => Color::srgba(0.2, 0.45, 0.95, 0.8),
        };
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(hazard.rect.size()),
                ..default()
            },
            placed(hazard.rect, HAZARD_Z),
        ));
    }

    for (index, diamond) in level.diamonds.iter().enumerate() {
        commands.spawn((
            DiamondSprite(index),
            Sprite {
                color: Color::srgb(0.85, 0.95, 1.0),
                custom_size: Some(diamond.rect.size()),
                ..default()
            },
            placed(diamond.rect, PICKUP_Z),
        ));
    }

    for (index, lever) in level.levers.iter().enumerate() {
        commands.spawn((
            LeverSprite(index),
            Sprite {
                color: lever_color(lever.is_on()),
                custom_size: Some(lever.bounds().size()),
                ..default()
            },
            placed(lever.bounds(), PICKUP_Z),
        ));
    }

    for spawn in &level.spawns {
        let character = Character::new(spawn.variant, spawn.position, spawn.size, tuning.clone());
        let transform = placed(character.rect(), CHARACTER_Z);
        info!(
            "Spawning {} hero at ({}, {}) with {} hp",
            spawn.variant.label(),
            spawn.position.x,
            spawn.position.y,
            character.hp()
        );
        commands.spawn((
            character,
            SpawnPoint(spawn.position),
            KeyBindings::for_variant(spawn.variant),
            LeverReach::default(),
            Sprite {
                color: variant_color(spawn.variant),
                custom_size: Some(spawn.size),
                ..default()
            },
            transform,
        ));
    }

    commands.insert_resource(tuning);
    commands.insert_resource(level);
}
