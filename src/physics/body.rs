//! Physics domain: kinematic state and the gravity integration step.

use bevy::prelude::*;

use crate::physics::PhysicsTuning;

/// Position, velocity and extent of one axis-aligned body.
///
/// Coordinates are screen-style: `position` is the top-left corner and y grows
/// downward, so gravity adds to `velocity.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    size: Vec2,
}

impl KinematicBody {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rect(&self) -> Rect {
        self.rect_at(self.position)
    }

    /// The body's rectangle if its top-left corner were at `position`.
    pub fn rect_at(&self, position: Vec2) -> Rect {
        Rect::from_corners(position, position + self.size)
    }

    /// Applies gravity for `dt` seconds and returns the tentative position.
    /// The body itself does not move; the collision passes decide that.
    pub fn integrate(&mut self, dt: f32, tuning: &PhysicsTuning) -> Vec2 {
        self.velocity.y = (self.velocity.y + tuning.gravity * dt).min(tuning.max_fall_speed);
        self.position + self.velocity * dt
    }
}

/// Strict AABB overlap: rectangles that only share an edge do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Fraction of `subject`'s area covered by `region`, in `[0, 1]`.
pub fn coverage(subject: Rect, region: Rect) -> f32 {
    let area = subject.width() * subject.height();
    if area <= 0.0 {
        return 0.0;
    }
    let w = (subject.max.x.min(region.max.x) - subject.min.x.max(region.min.x)).max(0.0);
    let h = (subject.max.y.min(region.max.y) - subject.min.y.max(region.min.y)).max(0.0);
    (w * h / area).clamp(0.0, 1.0)
}
