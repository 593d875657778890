//! Player domain: the fire and water heroes, their jumping, hit points and
//! reactions to hazards.

mod character;
mod events;
mod jump;
mod variant;
mod vitality;


pub use character::{Character, Facing};
pub use events::CharacterEvent;
pub use jump::JumpState;
pub use variant::{HazardPolicy, HazardReaction, Variant};
pub use vitality::{DamageOutcome, Life, Vitality};
