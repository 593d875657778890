//! Player domain: notifications raised while a character is simulated.

/// Collected on the character and handed out by [`Character::drain_events`].
///
/// [`Character::drain_events`]: crate::player::Character::drain_events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterEvent {
    Jumped { air: bool },
    Landed,
    FellOutOfMap,
    DiamondCollected { index: usize },
    /// The character overlaps this lever this frame. Nothing is toggled.
    LeverInReach { index: usize },
    LeverToggled { on: bool },
    Hurt { hp: u32 },
    Died,
}
