//! World domain: diamonds and levers the character interacts with.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Diamond {
    pub rect: Rect,
    collected: bool,
}

impl Diamond {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks the diamond as picked up. There is no way back.
    pub fn collect(&mut self) {
        self.collected = true;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lever {
    rect: Rect,
    on: bool,
}

impl Lever {
    pub fn new(rect: Rect, on: bool) -> Self {
        Self { rect, on }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
    }
}
