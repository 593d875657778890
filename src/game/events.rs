//! Game domain: messages raised from character simulation.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::player::Variant;

#[derive(Debug)]
pub struct DiamondCollectedEvent {
    pub character: Entity,
    pub variant: Variant,
    pub index: usize,
}

impl Message for DiamondCollectedEvent {}

#[derive(Debug)]
pub struct CharacterDiedEvent {
    pub character: Entity,
    pub variant: Variant,
}

impl Message for CharacterDiedEvent {}

#[derive(Debug)]
pub struct LeverToggledEvent {
    pub index: usize,
    pub on: bool,
}

impl Message for LeverToggledEvent {}
