//! Game configuration.
//!
//! Everything that used to be a module-level constant lives here and is passed
//! by value into the game state.
use anyhow::{Result, bail};
use raylib::prelude::*;

use crate::core::collision::BoundingBox;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub title: String,
    pub fps: f64,

    pub player_size: f32,
    pub player_speed: f32,
    pub player_spawn: Vector2,

    pub gem_size: f32,
    pub gem_spawn: Vector2,

    pub background_color: Color,
    pub player_color: Color,
    pub gem_color: Color,
    pub text_color: Color,

    pub level_label_x: i32,
    pub level_label_y: i32,
    pub level_font_size: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let window = 800;
        let cell = 40.0;
        Self {
            window_width: window,
            window_height: window,
            title: "Maze Arrow Game".to_string(),
            fps: 60.0,
            player_size: 30.0,
            player_speed: 5.0,
            player_spawn: Vector2::new(cell, cell),
            gem_size: 20.0,
            gem_spawn: Vector2::new(window as f32 - cell * 2.0, window as f32 - cell * 2.0),
            background_color: Color::WHITE,
            player_color: Color::RED,
            gem_color: Color::YELLOW,
            text_color: Color::BLACK,
            level_label_x: 10,
            level_label_y: 10,
            level_font_size: 36,
        }
    }
}

impl GameConfig {
    pub fn player_spawn_box(&self) -> BoundingBox {
        BoundingBox::square(self.player_spawn, self.player_size)
    }

    pub fn gem_spawn_box(&self) -> BoundingBox {
        BoundingBox::square(self.gem_spawn, self.gem_size)
    }

    /// Rejects configurations the frame loop can't run with.
    pub fn validate(&self) -> Result<()> {
        if self.window_width <= 0 || self.window_height <= 0 {
            bail!(
                "window must have a positive size, got {}x{}",
                self.window_width,
                self.window_height
            );
        }
        if !(self.fps > 0.0) {
            bail!("fps must be positive, got {}", self.fps);
        }
        if !(self.player_size > 0.0) || !(self.gem_size > 0.0) {
            bail!(
                "entity sizes must be positive (player {}, gem {})",
                self.player_size,
                self.gem_size
            );
        }
        if !(self.player_speed > 0.0) {
            bail!("player speed must be positive, got {}", self.player_speed);
        }
        self.check_in_window("player", self.player_spawn_box())?;
        self.check_in_window("gem", self.gem_spawn_box())?;
        if self.player_spawn_box().overlaps(&self.gem_spawn_box()) {
            bail!("player and gem spawn points overlap");
        }
        Ok(())
    }

    fn check_in_window(&self, name: &str, b: BoundingBox) -> Result<()> {
        let w = self.window_width as f32;
        let h = self.window_height as f32;
        if b.x < 0.0 || b.y < 0.0 || b.x + b.width > w || b.y + b.height > h {
            bail!(
                "{} spawn ({}, {}) size {} does not fit in a {}x{} window",
                name,
                b.x,
                b.y,
                b.width,
                self.window_width,
                self.window_height
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 800);
        assert_eq!((config.player_spawn.x, config.player_spawn.y), (40.0, 40.0));
        assert_eq!((config.gem_spawn.x, config.gem_spawn.y), (720.0, 720.0));
        assert_eq!(config.player_size, 30.0);
        assert_eq!(config.gem_size, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_overlapping_spawns() {
        let config = GameConfig {
            gem_spawn: Vector2::new(50.0, 50.0),
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("overlap"));
    }

    #[test]
    fn rejects_spawn_outside_window() {
        let config = GameConfig {
            gem_spawn: Vector2::new(790.0, 100.0),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            player_spawn: Vector2::new(-1.0, 40.0),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_values() {
        let zero_speed = GameConfig {
            player_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(zero_speed.validate().is_err());

        let no_fps = GameConfig {
            fps: 0.0,
            ..GameConfig::default()
        };
        assert!(no_fps.validate().is_err());

        let no_window = GameConfig {
            window_width: 0,
            ..GameConfig::default()
        };
        assert!(no_window.validate().is_err());
    }
}
