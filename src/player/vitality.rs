//! Player domain: hit points and the alive/dead lifecycle.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Life {
    Alive,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Hurt,
    Died,
    /// Already dead; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitality {
    hp: u32,
    life: Life,
}

impl Vitality {
    pub fn new(hp: u32) -> Self {
        Self {
            hp,
            life: if hp > 0 { Life::Alive } else { Life::Dead },
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn life(&self) -> Life {
        self.life
    }

    /// hp stops at zero and a dead character takes no further damage, so the
    /// death transition happens exactly once per life.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        if self.life == Life::Dead {
            return DamageOutcome::Ignored;
        }
        self.hp = self.hp.saturating_sub(amount);
        if self.hp == 0 {
            self.life = Life::Dead;
            DamageOutcome::Died
        } else {
            DamageOutcome::Hurt
        }
    }

    /// Overwrites hp. A positive value brings a dead character back and zero
    /// kills a living one. Returns true when this call caused the death.
    pub fn set_hp(&mut self, hp: u32) -> bool {
        self.hp = hp;
        if hp > 0 {
            self.life = Life::Alive;
            false
        } else if self.life == Life::Alive {
            self.life = Life::Dead;
            true
        } else {
            false
        }
    }
}
