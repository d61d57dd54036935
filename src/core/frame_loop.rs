//! Frame loop: input, motion, collision, render, frame cap.
use log::info;

use crate::audio_manager::AudioManager;
use crate::core::frame_limiter::FrameLimiter;
use crate::core::game::Game;
use crate::core::process_events::InputSource;
use crate::render::renderer::Renderer;
use crate::render::scene::draw_game;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    pub state: LoopState,
    pub leveled_up: bool,
}

pub struct FrameLoop {
    pub game: Game,
    state: LoopState,
}

impl FrameLoop {
    pub fn new(game: Game) -> Self {
        Self { game, state: LoopState::Running }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// One iteration without the frame cap. A quit seen while draining
    /// events ends the loop before anything is updated or drawn.
    pub fn step<P>(&mut self, platform: &mut P) -> FrameOutcome
    where
        P: InputSource + Renderer,
    {
        if self.state == LoopState::Terminated {
            return FrameOutcome { state: self.state, leveled_up: false };
        }
        if platform.poll_quit() {
            self.state = LoopState::Terminated;
            return FrameOutcome { state: self.state, leveled_up: false };
        }

        let keys = platform.held_keys();
        let leveled_up = self.game.update(keys);

        draw_game(&self.game, platform);
        platform.present();

        FrameOutcome { state: self.state, leveled_up }
    }

    /// Runs until a quit signal. Returns the level reached.
    pub fn run<P>(&mut self, platform: &mut P, audio: Option<&AudioManager>) -> u64
    where
        P: InputSource + Renderer,
    {
        let mut limiter = FrameLimiter::new(self.game.config.fps);
        let mut frames: u64 = 0;
        loop {
            let outcome = self.step(platform);
            if outcome.state == LoopState::Terminated {
                break;
            }
            if outcome.leveled_up {
                if let Some(audio) = audio {
                    audio.play_level_up(self.game.level);
                }
            }
            frames += 1;
            limiter.wait();
        }
        info!("{:?} after {} frames on level {}", self.state(), frames, self.game.level);
        self.game.level
    }
}
