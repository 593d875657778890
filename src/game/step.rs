//! Game domain: fixed-timestep character simulation.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::game::{CharacterDiedEvent, DiamondCollectedEvent, LeverReach};
use crate::player::{Character, CharacterEvent};
use crate::world::Level;

/// Runs one core update per living character and forwards what happened.
pub(crate) fn step_characters(
    time: Res<Time>,
    level: Option<ResMut<Level>>,
    mut query: Query<(Entity, &mut Character, &mut LeverReach)>,
    mut collected: MessageWriter<DiamondCollectedEvent>,
    mut deaths: MessageWriter<CharacterDiedEvent>,
) {
    let Some(mut level) = level else {
        return;
    };
    let dt = time.delta_secs();
    let Level {
        map,
        diamonds,
        levers,
        ..
    } = &mut *level;

    for (entity, mut character, mut reach) in &mut query {
        // Dead heroes wait for the respawn timer.
        if character.is_dead() {
            continue;
        }

        character.update(dt, &*map, diamonds.as_mut_slice(), levers.as_slice());

        reach.0 = None;
        let variant = character.variant();
        for event in character.drain_events() {
            match event {
                CharacterEvent::DiamondCollected { index } => {
                    collected.write(DiamondCollectedEvent {
                        character: entity,
                        variant,
                        index,
                    });
                }
                CharacterEvent::LeverInReach { index } => {
                    reach.0.get_or_insert(index);
                }
                CharacterEvent::Died => {
                    deaths.write(CharacterDiedEvent {
                        character: entity,
                        variant,
                    });
                }
                other => {
                    debug!("{} hero: {:?}", variant.label(), other);
                }
            }
        }
    }
}
