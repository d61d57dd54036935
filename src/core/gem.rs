//! The gem the player is chasing.
use raylib::prelude::*;

use crate::config::GameConfig;
use crate::core::collision::BoundingBox;

pub struct Gem {
    pub pos: Vector2,
    pub spawn: Vector2,
    pub size: f32,
}

impl Gem {
    pub fn new(spawn: Vector2, size: f32) -> Self {
        Self { pos: spawn, spawn, size }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.gem_spawn, config.gem_size)
    }

    pub fn reset_position(&mut self) {
        self.pos = self.spawn;
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::square(self.pos, self.size)
    }
}
