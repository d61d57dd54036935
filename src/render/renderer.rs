//! Minimal drawing capability the frame loop renders through.
use raylib::prelude::*;

use crate::core::collision::BoundingBox;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(BoundingBox, Color),
    Text { text: String, x: i32, y: i32, size: i32, color: Color },
}

pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, rect: BoundingBox, color: Color);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);
    /// Shows everything drawn since the last call.
    fn present(&mut self);
}
