//! Rendering.
//!
//! Re-exports:
//! - `renderer`: the draw-rect / draw-text / present capability
//! - `framebuffer`: per-frame draw command buffer
//! - `scene`: what one frame of the game looks like
//! - `window`: raylib window backing both rendering and input

pub mod framebuffer;
pub mod renderer;
pub mod scene;
pub mod window;

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use raylib::prelude::*;

    use crate::core::collision::BoundingBox;
    use crate::core::process_events::{HeldKeys, InputSource};
    use crate::render::framebuffer::Framebuffer;
    use crate::render::renderer::{DrawCommand, Renderer};

    /// Plays back a fixed key script. `None` in the script is a quit event,
    /// and running out of script also quits.
    #[derive(Default)]
    pub struct ScriptedPlatform {
        pub script: VecDeque<Option<HeldKeys>>,
        pub current: HeldKeys,
        pub polls: usize,
        pub framebuffer: Framebuffer,
        pub frames: Vec<Vec<DrawCommand>>,
    }

    impl ScriptedPlatform {
        pub fn new<S: IntoIterator<Item = Option<HeldKeys>>>(script: S) -> Self {
            Self { script: script.into_iter().collect(), ..Default::default() }
        }
    }

    impl InputSource for ScriptedPlatform {
        fn poll_quit(&mut self) -> bool {
            self.polls += 1;
            match self.script.pop_front() {
                Some(Some(keys)) => {
                    self.current = keys;
                    false
                }
                _ => true,
            }
        }

        fn held_keys(&self) -> HeldKeys {
            self.current
        }
    }

    impl Renderer for ScriptedPlatform {
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
            let frame = self.framebuffer.take();
            self.frames.push(frame);
        }
    }
}
