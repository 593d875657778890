//! Physics domain: axis-separated tile collision and map boundary clamping.
//!
//! Each axis is resolved on its own: the horizontal pass tests the tentative x
//! at the old y, then the vertical pass tests the tentative y at whatever x the
//! horizontal pass produced. Diagonal approaches into a corner therefore settle
//! one axis at a time rather than through a swept rectangle.

use bevy::prelude::*;

use crate::physics::{KinematicBody, overlaps};
use crate::world::{GameMap, MapBounds, Tile};

/// How the vertical pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalOutcome {
    /// Nothing in the way; the move committed.
    Free,
    /// Falling body snapped onto the top of a tile.
    Landed,
    /// Rising body snapped under the bottom of a tile.
    HitCeiling,
    /// Blocked with no vertical speed; the body stays put.
    Stalled,
}

/// Map edges the body was pushed back from during clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

/// First impassable tile, in candidate order, that strictly overlaps `trial`.
fn first_blocking<M: GameMap + ?Sized>(map: &M, trial: Rect) -> Option<Tile> {
    map.candidate_tiles(trial)
        .into_iter()
        .find(|tile| !tile.passable && overlaps(trial, tile.rect))
}

/// Moves the body to `next_x` unless an impassable tile is in the way, in which
/// case x is kept and horizontal speed is zeroed. Returns whether it was blocked.
pub fn resolve_horizontal<M: GameMap + ?Sized>(
    body: &mut KinematicBody,
    next_x: f32,
    map: &M,
) -> bool {
    let trial = body.rect_at(Vec2::new(next_x, body.position.y));
    let blocked = first_blocking(map, trial).is_some();
    if blocked {
        body.velocity.x = 0.0;
    } else {
        body.position.x = next_x;
    }
    blocked
}

/// Moves the body to `next_y`, snapping to the first blocking tile's top or
/// bottom face depending on the direction of travel.
pub fn resolve_vertical<M: GameMap + ?Sized>(
    body: &mut KinematicBody,
    next_y: f32,
    map: &M,
) -> VerticalOutcome {
    let trial = body.rect_at(Vec2::new(body.position.x, next_y));
    let Some(tile) = first_blocking(map, trial) else {
        body.position.y = next_y;
        return VerticalOutcome::Free;
    };

    if body.velocity.y > 0.0 {
        body.position.y = tile.rect.min.y - body.size().y;
        body.velocity.y = 0.0;
        VerticalOutcome::Landed
    } else if body.velocity.y < 0.0 {
        body.position.y = tile.rect.max.y;
        body.velocity.y = 0.0;
        VerticalOutcome::HitCeiling
    } else {
        VerticalOutcome::Stalled
    }
}

/// Pushes the body back inside `bounds`, zeroing velocity on each clamped axis.
pub fn clamp_to_bounds(body: &mut KinematicBody, bounds: MapBounds) -> BoundaryContact {
    let size = body.size();
    let mut contact = BoundaryContact::default();

    if body.position.x < bounds.left {
        body.position.x = bounds.left;
        body.velocity.x = 0.0;
        contact.left = true;
    } else if body.position.x + size.x > bounds.right {
        body.position.x = bounds.right - size.x;
        body.velocity.x = 0.0;
        contact.right = true;
    }

    if body.position.y < bounds.top {
        body.position.y = bounds.top;
        body.velocity.y = 0.0;
        contact.top = true;
    } else if body.position.y + size.y > bounds.bottom {
        body.position.y = bounds.bottom - size.y;
        body.velocity.y = 0.0;
        contact.bottom = true;
    }

    contact
}
