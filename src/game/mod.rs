//! Game domain: the Bevy shell around the character simulation. Loads a
//! level, routes keys to intents, steps heroes on the fixed clock, keeps score
//! and respawns the dead.

#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod input;
mod manager;
mod presentation;
mod setup;
mod step;


pub use events::{CharacterDiedEvent, DiamondCollectedEvent, LeverToggledEvent};
pub use input::{Stride, stride};

use std::path::PathBuf;

use bevy::prelude::*;

use crate::game::input::read_input;
use crate::game::manager::{schedule_respawns, tally_diamonds, tick_respawns};
use crate::game::presentation::{sync_character_sprites, sync_pickup_sprites};
use crate::game::setup::setup_level;
use crate::game::step::step_characters;
use crate::player::Variant;

#[derive(Resource, Debug, Clone)]
pub struct GameSettings {
    pub level_path: PathBuf,
    pub tuning_path: PathBuf,
    /// Seconds a dead hero stays down before respawning.
    pub respawn_delay: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            level_path: PathBuf::from("assets/levels/forest_temple.ron"),
            tuning_path: PathBuf::from("assets/data/physics.ron"),
            respawn_delay: 1.5,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct Score {
    pub diamonds: u32,
    pub deaths: u32,
}

/// Keys driving one hero.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub interact: KeyCode,
}

impl KeyBindings {
    pub fn arrows() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            jump: KeyCode::ArrowUp,
            interact: KeyCode::ArrowDown,
        }
    }

    pub fn wasd() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::KeyW,
            interact: KeyCode::KeyS,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Fire => Self::arrows(),
            Variant::Water => Self::wasd(),
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);

/// First lever the hero overlapped during the last simulation step.
#[derive(Component, Debug, Default)]
pub struct LeverReach(pub Option<usize>);

#[derive(Component, Debug)]
pub struct RespawnTimer(pub Timer);

#[derive(Component, Debug)]
pub struct DiamondSprite(pub usize);

#[derive(Component, Debug)]
pub struct LeverSprite(pub usize);

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSettings>()
            .init_resource::<Score>()
            .add_message::<DiamondCollectedEvent>()
            .add_message::<CharacterDiedEvent>()
            .add_message::<LeverToggledEvent>()
            .add_systems(Startup, setup_level)
            .add_systems(FixedUpdate, step_characters)
            .add_systems(
                Update,
                (
                    read_input,
                    (tally_diamonds, schedule_respawns),
                    tick_respawns,
                    sync_character_sprites,
                    sync_pickup_sprites,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::log_character_state);
    }
}
