//! Player domain: ground contact and double-jump availability.

use crate::physics::PhysicsTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    Grounded,
    /// Left the ground by jumping or falling; one air jump remains.
    AirborneSingle,
    /// Air jump spent. Only a landing restores jumping.
    #[default]
    AirborneExhausted,
}

impl JumpState {
    pub fn on_ground(self) -> bool {
        self == Self::Grounded
    }

    pub fn can_double_jump(self) -> bool {
        self == Self::AirborneSingle
    }

    /// Consumes a jump if one is available and returns the upward speed to apply.
    pub fn jump(&mut self, tuning: &PhysicsTuning) -> Option<f32> {
        match *self {
            Self::Grounded => {
                *self = Self::AirborneSingle;
                Some(tuning.jump_speed)
            }
            Self::AirborneSingle => {
                *self = Self::AirborneExhausted;
                Some(tuning.double_jump_speed())
            }
            Self::AirborneExhausted => None,
        }
    }

    /// Downward motion was stopped. Returns true if this ended an airborne phase.
    pub fn land(&mut self) -> bool {
        let was_airborne = !self.on_ground();
        *self = Self::Grounded;
        was_airborne
    }

    /// Vertical motion went unblocked.
    pub fn leave_ground(&mut self) {
        if *self == Self::Grounded {
            *self = Self::AirborneSingle;
        }
    }
}
