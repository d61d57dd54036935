// main.rs
mod audio_manager;
mod config;
mod core;
mod render;

use anyhow::{Context, Result, anyhow};
use log::{error, info};

use crate::audio_manager::AudioManager;
use crate::config::GameConfig;
use crate::core::frame_loop::FrameLoop;
use crate::core::game::Game;
use crate::render::window::GameWindow;

fn main() -> Result<()> {
    scrub_log::init_with_filter_string("info")
        .map_err(|e| anyhow!("failed to initialize logging: {:?}", e))?;

    if let Err(e) = run() {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run() -> Result<()> {
    let config = GameConfig::default();
    config.validate().context("invalid game configuration")?;
    info!("starting {} v{}", config.title, env!("CARGO_PKG_VERSION"));

    let mut window = GameWindow::open(&config)?;
    let audio = AudioManager::new();

    let mut frame_loop = FrameLoop::new(Game::new(config));
    let level = frame_loop.run(&mut window, audio.as_ref());

    // release audio before the window goes away
    drop(audio);
    drop(window);
    info!("finished on level {}", level);
    Ok(())
}
