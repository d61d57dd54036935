//! Game state: the two entities, the level counter and the per-frame update.
use log::info;

use crate::config::GameConfig;
use crate::core::gem::Gem;
use crate::core::player::Player;
use crate::core::process_events::HeldKeys;

pub struct Game {
    pub config: GameConfig,
    pub player: Player,
    pub gem: Gem,
    pub level: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let player = Player::from_config(&config);
        let gem = Gem::from_config(&config);
        Self { config, player, gem, level: 1 }
    }

    /// Advances one frame. Returns true when the player reached the gem.
    pub fn update(&mut self, keys: HeldKeys) -> bool {
        self.player.step(
            keys.movement(),
            self.config.window_width as f32,
            self.config.window_height as f32,
        );
        self.check_gem_collision()
    }

    /// Level up and respawn both entities on overlap. The reset happens in
    /// the same call, so one overlap can't count twice.
    pub fn check_gem_collision(&mut self) -> bool {
        if !self.player.bounding_box().overlaps(&self.gem.bounding_box()) {
            return false;
        }
        self.level += 1;
        self.player.reset_position();
        self.gem.reset_position();
        info!("gem collected, now on level {}", self.level);
        true
    }
}
