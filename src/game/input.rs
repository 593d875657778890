//! Game domain: keyboard routing into character intents.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::game::{KeyBindings, LeverReach, LeverToggledEvent};
use crate::player::Character;
use crate::world::Level;

/// Horizontal intent resolved from held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stride {
    Left,
    Right,
    Still,
}

/// Holding both directions cancels out.
pub fn stride(keyboard: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> Stride {
    match (
        keyboard.pressed(bindings.left),
        keyboard.pressed(bindings.right),
    ) {
        (true, false) => Stride::Left,
        (false, true) => Stride::Right,
        _ => Stride::Still,
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    level: Option<ResMut<Level>>,
    mut query: Query<(&mut Character, &KeyBindings, &LeverReach)>,
    mut toggles: MessageWriter<LeverToggledEvent>,
) {
    let Some(mut level) = level else {
        return;
    };

    for (mut character, bindings, reach) in &mut query {
        if character.is_dead() {
            continue;
        }

        match stride(&keyboard, bindings) {
            Stride::Left => character.move_left(),
            Stride::Right => character.move_right(),
            Stride::Still => character.stop_moving(),
        }

        if keyboard.just_pressed(bindings.jump) {
            character.try_jump();
        }

        if keyboard.just_pressed(bindings.interact) {
            let lever = match reach.0 {
                Some(index) => level.levers.get_mut(index),
                None => None,
            };
            character.interact_lever(lever);

            let Some(index) = reach.0 else {
                continue;
            };
            if let Some(lever) = level.levers.get(index) {
                info!(
                    "{} hero switched lever {} {}",
                    character.variant().label(),
                    index,
                    if lever.is_on() { "on" } else { "off" }
                );
                toggles.write(LeverToggledEvent {
                    index,
                    on: lever.is_on(),
                });
            }
        }
    }
}
