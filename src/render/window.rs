//! The raylib window: display and keyboard for the frame loop.
use std::any::Any;
use std::panic;

use anyhow::{Result, anyhow};
use log::info;
use raylib::prelude::*;

use crate::config::GameConfig;
use crate::core::collision::BoundingBox;
use crate::core::process_events::{HeldKeys, InputSource, read_held_keys};
use crate::render::framebuffer::Framebuffer;
use crate::render::renderer::Renderer;

pub struct GameWindow {
    rl: RaylibHandle,
    thread: RaylibThread,
    framebuffer: Framebuffer,
}

impl GameWindow {
    pub fn open(config: &GameConfig) -> Result<Self> {
        let (width, height) = (config.window_width, config.window_height);
        let title = config.title.clone();
        // raylib panics when the window can't be created
        let (mut rl, thread) = panic::catch_unwind(move || {
            raylib::init().size(width, height).title(&title).build()
        })
        .map_err(|cause| anyhow!("could not create the game window: {}", panic_message(&*cause)))?;

        // only closing the window quits
        rl.set_exit_key(None);
        info!("opened {}x{} window", width, height);

        Ok(Self { rl, thread, framebuffer: Framebuffer::new() })
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown error".to_string()
    }
}

impl InputSource for GameWindow {
    fn poll_quit(&mut self) -> bool {
        self.rl.window_should_close()
    }

    fn held_keys(&self) -> HeldKeys {
        read_held_keys(&self.rl)
    }
}

impl Renderer for GameWindow {
    fn clear(&mut self, color: Color) {
        self.framebuffer.clear(color);
    }

    fn draw_rect(&mut self, rect: BoundingBox, color: Color) {
        self.framebuffer.push_rect(rect, color);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        self.framebuffer.push_text(text, x, y, size, color);
    }

    fn present(&mut self) {
        let mut d = self.rl.begin_drawing(&self.thread);
        self.framebuffer.flush_to(&mut d);
    }
}

impl Drop for GameWindow {
    fn drop(&mut self) {
        info!("closing window");
    }
}
