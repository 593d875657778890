//! Player domain: the simulated character and its per-frame update.

use bevy::prelude::*;

use crate::physics::{
    KinematicBody, PhysicsTuning, VerticalOutcome, clamp_to_bounds, overlaps, resolve_horizontal,
    resolve_vertical,
};
use crate::player::{CharacterEvent, DamageOutcome, JumpState, Life, Variant, Vitality};
use crate::world::{Diamond, Environment, GameMap, Lever};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// One platformer hero. Owns its kinematics, jump state and hit points; the
/// map, diamonds and levers are borrowed for the duration of each update.
#[derive(Component, Debug, Clone)]
pub struct Character {
    variant: Variant,
    body: KinematicBody,
    facing: Facing,
    jump: JumpState,
    vitality: Vitality,
    tuning: PhysicsTuning,
    events: Vec<CharacterEvent>,
}

impl Character {
    pub fn new(variant: Variant, position: Vec2, size: Vec2, tuning: PhysicsTuning) -> Self {
        Self {
            variant,
            body: KinematicBody::new(position, size),
            facing: Facing::default(),
            jump: JumpState::default(),
            vitality: Vitality::new(tuning.starting_hp),
            tuning,
            events: Vec::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn size(&self) -> Vec2 {
        self.body.size()
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump
    }

    pub fn on_ground(&self) -> bool {
        self.jump.on_ground()
    }

    pub fn can_double_jump(&self) -> bool {
        self.jump.can_double_jump()
    }

    pub fn hp(&self) -> u32 {
        self.vitality.hp()
    }

    pub fn set_hp(&mut self, hp: u32) {
        if self.vitality.set_hp(hp) {
            debug!("{} character died", self.variant.label());
            self.events.push(CharacterEvent::Died);
        }
    }

    pub fn life(&self) -> Life {
        self.vitality.life()
    }

    pub fn is_dead(&self) -> bool {
        self.vitality.life() == Life::Dead
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }

    /// Hands out everything raised since the previous call.
    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }

    // --- intents ---

    pub fn move_left(&mut self) {
        self.body.velocity.x = -self.tuning.move_speed;
        self.facing = Facing::Left;
    }

    pub fn move_right(&mut self) {
        self.body.velocity.x = self.tuning.move_speed;
        self.facing = Facing::Right;
    }

    pub fn stop_moving(&mut self) {
        self.body.velocity.x = 0.0;
    }

    pub fn try_jump(&mut self) {
        let Some(speed) = self.jump.jump(&self.tuning) else {
            return;
        };
        self.body.velocity.y = -speed;
        let air = self.jump == JumpState::AirborneExhausted;
        debug!("{} jump: air={}, vy={}", self.variant.label(), air, -speed);
        self.events.push(CharacterEvent::Jumped { air });
    }

    pub fn interact_lever(&mut self, lever: Option<&mut Lever>) {
        let Some(lever) = lever else {
            return;
        };
        lever.toggle();
        self.events.push(CharacterEvent::LeverToggled { on: lever.is_on() });
    }

    // --- damage ---

    pub fn take_damage(&mut self, amount: u32) {
        match self.vitality.take_damage(amount) {
            DamageOutcome::Hurt => {
                self.events.push(CharacterEvent::Hurt {
                    hp: self.vitality.hp(),
                });
            }
            DamageOutcome::Died => {
                debug!("{} character died", self.variant.label());
                self.events.push(CharacterEvent::Died);
            }
            DamageOutcome::Ignored => {}
        }
    }

    pub fn on_enter_fire(&mut self, area: f32) {
        let react = self.variant.policy().on_fire;
        react(self, area);
    }

    pub fn on_enter_water(&mut self, area: f32) {
        let react = self.variant.policy().on_water;
        react(self, area);
    }

    /// Puts the character back at `position` standing still with `hp`.
    pub fn respawn_at(&mut self, position: Vec2, hp: u32) {
        self.body = KinematicBody::new(position, self.body.size());
        self.jump = JumpState::default();
        self.set_hp(hp);
    }

    // --- simulation ---

    /// Advances the character by `dt` seconds.
    ///
    /// Order is fixed: gravity, horizontal pass, vertical pass, boundary clamp,
    /// diamonds, levers, hazards.
    pub fn update<M: GameMap + ?Sized>(
        &mut self,
        dt: f32,
        map: &M,
        diamonds: &mut [Diamond],
        levers: &[Lever],
    ) {
        debug_assert!(
            dt.is_finite() && dt >= 0.0,
            "frame delta must be finite and non-negative, got {dt}"
        );

        let next = self.body.integrate(dt, &self.tuning);
        resolve_horizontal(&mut self.body, next.x, map);
        match resolve_vertical(&mut self.body, next.y, map) {
            VerticalOutcome::Free => self.jump.leave_ground(),
            VerticalOutcome::Landed => self.land(),
            VerticalOutcome::HitCeiling | VerticalOutcome::Stalled => {}
        }

        // The bottom edge is both a floor and a pit: landing and lethal at once.
        if clamp_to_bounds(&mut self.body, map.bounds()).bottom {
            if self.is_dead() {
                // A body left lying on the edge only settles.
                self.jump.land();
            } else {
                self.land();
                self.fall_out_of_map();
            }
        }

        self.collect_diamonds(diamonds);
        self.scan_levers(levers);
        self.dispatch_hazards(map);
    }

    fn land(&mut self) {
        if self.jump.land() {
            debug!(
                "{} landed at ({}, {})",
                self.variant.label(),
                self.body.position.x,
                self.body.position.y
            );
            self.events.push(CharacterEvent::Landed);
        }
    }

    fn fall_out_of_map(&mut self) {
        self.events.push(CharacterEvent::FellOutOfMap);
        let hp = self.hp();
        self.take_damage(hp);
    }

    fn collect_diamonds(&mut self, diamonds: &mut [Diamond]) {
        let rect = self.body.rect();
        for (index, diamond) in diamonds.iter_mut().enumerate() {
            if !diamond.is_collected() && overlaps(rect, diamond.rect) {
                diamond.collect();
                self.events.push(CharacterEvent::DiamondCollected { index });
            }
        }
    }

    fn scan_levers(&mut self, levers: &[Lever]) {
        let rect = self.body.rect();
        for (index, lever) in levers.iter().enumerate() {
            if overlaps(rect, lever.bounds()) {
                self.events.push(CharacterEvent::LeverInReach { index });
            }
        }
    }

    fn dispatch_hazards<M: GameMap + ?Sized>(&mut self, map: &M) {
        for overlap in map.environment_overlaps(self.body.rect()) {
            match overlap.kind {
                Environment::Fire => self.on_enter_fire(overlap.area),
                Environment::Water => self.on_enter_water(overlap.area),
            }
        }
    }
}
