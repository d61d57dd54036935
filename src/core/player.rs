//! Player data and defaults.
use raylib::prelude::*;

use crate::config::GameConfig;
use crate::core::collision::BoundingBox;
use crate::core::motion::apply_motion;
use crate::core::process_events::Movement;

pub struct Player {
    pub pos: Vector2,
    pub spawn: Vector2,
    pub size: f32,
    pub speed: f32,   // px per frame
}

impl Player {
    pub fn new(spawn: Vector2, size: f32, speed: f32) -> Self {
        Self { pos: spawn, spawn, size, speed }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.player_spawn, config.player_size, config.player_speed)
    }

    pub fn reset_position(&mut self) {
        self.pos = self.spawn;
    }

    pub fn step(&mut self, movement: Movement, bounds_w: f32, bounds_h: f32) {
        self.pos = apply_motion(self.pos, movement, self.speed, bounds_w, bounds_h, self.size);
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::square(self.pos, self.size)
    }
}
