//! Game domain: scoring, death bookkeeping and respawns.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::game::{
    CharacterDiedEvent, DiamondCollectedEvent, GameSettings, RespawnTimer, Score, SpawnPoint,
};
use crate::player::Character;
use crate::world::Level;

pub(crate) fn tally_diamonds(
    mut events: MessageReader<DiamondCollectedEvent>,
    mut score: ResMut<Score>,
    level: Option<Res<Level>>,
) {
    for event in events.read() {
        score.diamonds += 1;
        let remaining = level.as_ref().map_or(0, |level| level.diamonds_remaining());
        info!(
            "{} hero collected diamond {} ({} total, {} left)",
            event.variant.label(),
            event.index,
            score.diamonds,
            remaining
        );
    }
}

pub(crate) fn schedule_respawns(
    mut commands: Commands,
    mut events: MessageReader<CharacterDiedEvent>,
    settings: Res<GameSettings>,
    mut score: ResMut<Score>,
) {
    for event in events.read() {
        score.deaths += 1;
        info!(
            "{} hero died, respawning in {:.1}s",
            event.variant.label(),
            settings.respawn_delay
        );
        commands.entity(event.character).insert(RespawnTimer(Timer::from_seconds(
            settings.respawn_delay,
            TimerMode::Once,
        )));
    }
}

pub(crate) fn tick_respawns(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Character, &SpawnPoint, &mut RespawnTimer)>,
) {
    for (entity, mut character, spawn, mut timer) in &mut query {
        if !timer.0.tick(time.delta()).just_finished() {
            continue;
        }
        let hp = character.tuning().starting_hp;
        character.respawn_at(spawn.0, hp);
        commands.entity(entity).remove::<RespawnTimer>();
        info!("{} hero respawned with {} hp", character.variant().label(), hp);
    }
}
