//! Fixed-speed movement clamped to the window.
use raylib::prelude::*;

use crate::core::process_events::Movement;

/// Moves `pos` by `movement * speed` and keeps an entity of `size` inside
/// a `bounds_w` x `bounds_h` window. Each axis clamps independently.
pub fn apply_motion(
    pos: Vector2,
    movement: Movement,
    speed: f32,
    bounds_w: f32,
    bounds_h: f32,
    size: f32,
) -> Vector2 {
    let new_x = pos.x + movement.dx as f32 * speed;
    let new_y = pos.y + movement.dy as f32 * speed;
    Vector2::new(clamp_axis(new_x, bounds_w - size), clamp_axis(new_y, bounds_h - size))
}

#[inline]
fn clamp_axis(v: f32, max: f32) -> f32 {
    v.min(max).max(0.0)
}
