//! Player domain: which element is home and which one kills.

use serde::{Deserialize, Serialize};

use crate::player::Character;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Variant {
    Fire,
    Water,
}

/// Reaction to standing in a hazard covering `area` of the character.
pub type HazardReaction = fn(&mut Character, f32);

#[derive(Debug, Clone, Copy)]
pub struct HazardPolicy {
    pub on_fire: HazardReaction,
    pub on_water: HazardReaction,
}

impl Variant {
    pub fn policy(self) -> HazardPolicy {
        match self {
            Self::Fire => HazardPolicy {
                on_fire: immerse,
                on_water: perish,
            },
            Self::Water => HazardPolicy {
                on_fire: perish,
                on_water: immerse,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
        }
    }
}

fn immerse(_character: &mut Character, _area: f32) {
    // Home element never hurts. Deep immersion (area > 0.5) is where a
    // regeneration bonus would go.
}

fn perish(character: &mut Character, area: f32) {
    if area > 0.0 {
        let hp = character.hp();
        character.take_damage(hp);
    }
}
