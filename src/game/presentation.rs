//! Game domain: placeholder sprites driven by simulation state.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::game::{DiamondCollectedEvent, DiamondSprite, LeverSprite, LeverToggledEvent};
use crate::player::{Character, Facing, Variant};

pub(crate) const TILE_Z: f32 = 0.0;
pub(crate) const HAZARD_Z: f32 = 0.5;
pub(crate) const PICKUP_Z: f32 = 1.0;
pub(crate) const CHARACTER_Z: f32 = 2.0;

/// Level space is top-left/y-down; Bevy sprites are centred and y-up.
pub(crate) fn placed(rect: Rect, z: f32) -> Transform {
    let center = rect.center();
    Transform::from_xyz(center.x, -center.y, z)
}

pub(crate) fn variant_color(variant: Variant) -> Color {
    match variant {
        Variant::Fire => Color::srgb(0.95, 0.45, 0.2),
        Variant::Water => Color::srgb(0.3, 0.6, 0.95),
    }
}

pub(crate) fn lever_color(on: bool) -> Color {
    if on {
        Color::srgb(0.9, 0.85, 0.3)
    } else {
        Color::srgb(0.45, 0.4, 0.3)
    }
}

pub(crate) fn sync_character_sprites(
    mut query: Query<(&Character, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    for (character, mut transform, mut sprite, mut visibility) in &mut query {
        transform.translation = placed(character.rect(), CHARACTER_Z).translation;
        sprite.flip_x = character.facing() == Facing::Left;
        *visibility = if character.is_dead() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
    }
}

pub(crate) fn sync_pickup_sprites(
    mut collected: MessageReader<DiamondCollectedEvent>,
    mut toggles: MessageReader<LeverToggledEvent>,
    mut diamonds: Query<(&DiamondSprite, &mut Visibility)>,
    mut levers: Query<(&LeverSprite, &mut Sprite)>,
) {
    for event in collected.read() {
        for (marker, mut visibility) in &mut diamonds {
            if marker.0 == event.index {
                *visibility = Visibility::Hidden;
            }
        }
    }
    for event in toggles.read() {
        for (marker, mut sprite) in &mut levers {
            if marker.0 == event.index {
                sprite.color = lever_color(event.on);
            }
        }
    }
}
