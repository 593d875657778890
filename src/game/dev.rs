//! Game domain: developer diagnostics (dev-tools feature).

use bevy::prelude::*;

use crate::game::Score;
use crate::physics::PhysicsTuning;
use crate::player::Character;

/// F3 dumps every hero's simulation state to the log.
pub(crate) fn log_character_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Option<Res<PhysicsTuning>>,
    score: Res<Score>,
    query: Query<&Character>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    if let Some(tuning) = tuning {
        info!(
            "Tuning: gravity={}, jump={}, jump height={:.1}px, with air jump={:.1}px",
            tuning.gravity,
            tuning.jump_speed,
            tuning.single_jump_height(),
            tuning.max_reachable_height()
        );
    }
    info!("Score: {} diamonds, {} deaths", score.diamonds, score.deaths);

    for character in &query {
        info!(
            "{} hero: pos={:?} vel={:?} jump={:?} hp={} life={:?}",
            character.variant().label(),
            character.position(),
            character.velocity(),
            character.jump_state(),
            character.hp(),
            character.life()
        );
    }
}
