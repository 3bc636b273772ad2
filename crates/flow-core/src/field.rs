//! Deterministic pseudo-noise vector field.
//!
//! A true noise function would be overkill for a backdrop; summing two
//! low-frequency trig waves gives smooth, seamless large-scale flow cells
//! with no state and no dependency.

use crate::constants::{FIELD_FREQUENCY, FIELD_STRENGTH};
use glam::Vec2;
use std::f32::consts::PI;

/// Flow direction (radians) at a surface position. Pure and stateless.
#[inline]
pub fn field_angle(x: f32, y: f32) -> f32 {
    ((x * FIELD_FREQUENCY).cos() + (y * FIELD_FREQUENCY).sin()) * PI
}

/// Per-tick force contribution of the field at `pos`, before the speed
/// multiplier is applied.
#[inline]
pub fn field_force(pos: Vec2) -> Vec2 {
    let angle = field_angle(pos.x, pos.y);
    Vec2::new(angle.cos(), angle.sin()) * FIELD_STRENGTH
}
