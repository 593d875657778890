//! Physics domain: kinematic integration, tile collision and map clamping.

mod body;
mod resolve;
mod tuning;


pub use body::{KinematicBody, coverage, overlaps};
pub use resolve::{
    BoundaryContact, VerticalOutcome, clamp_to_bounds, resolve_horizontal, resolve_vertical,
};
pub use tuning::PhysicsTuning;
