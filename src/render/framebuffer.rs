//! CPU-side frame: draw calls are recorded here and flushed by the window
//! in a single `begin_drawing` scope.
use raylib::prelude::*;

use crate::core::collision::BoundingBox;
use crate::render::renderer::DrawCommand;

#[derive(Debug, Default)]
pub struct Framebuffer {
    commands: Vec<DrawCommand>,
}

impl Framebuffer {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    #[inline]
    pub fn clear(&mut self, color: Color) {
        // anything before a clear would be painted over anyway
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    #[inline]
    pub fn push_rect(&mut self, rect: BoundingBox, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    #[inline]
    pub fn push_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, size, color });
    }

    /// Hands over the recorded frame and leaves the buffer empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Replays the recorded frame onto a raylib draw handle.
    pub fn flush_to<D: RaylibDraw>(&mut self, d: &mut D) {
        for cmd in self.take() {
            match cmd {
                DrawCommand::Clear(color) => d.clear_background(color),
                DrawCommand::Rect(r, color) => d.draw_rectangle(
                    r.x.round() as i32,
                    r.y.round() as i32,
                    r.width.round() as i32,
                    r.height.round() as i32,
                    color,
                ),
                DrawCommand::Text { text, x, y, size, color } => {
                    d.draw_text(&text, x, y, size, color)
                }
            }
        }
    }
}
