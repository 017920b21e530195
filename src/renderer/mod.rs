//! Rendering module
//!
//! The simulation records draw commands into an off-screen [`Frame`]; the
//! frame is then composited onto whatever [`Surface`] the host provides.

pub mod frame;

pub use frame::Frame;

use glam::Vec2;

use crate::assets::ImageHandle;

pub type Color = [f32; 4];

/// Solid fill for sprites whose image never resolved
pub const PLACEHOLDER_COLOR: Color = [1.0, 0.0, 1.0, 1.0];

pub const SCORE_COLOR: Color = [1.0, 1.0, 1.0, 1.0];

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image {
        image: ImageHandle,
        /// Region of the sheet
        src: Rect,
        dest: Rect,
        flip_x: bool,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Same command shifted by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        match self {
            DrawCommand::Image {
                image,
                src,
                dest,
                flip_x,
            } => DrawCommand::Image {
                image: *image,
                src: *src,
                dest: dest.translated(offset),
                flip_x: *flip_x,
            },
            DrawCommand::FillRect { rect, color } => DrawCommand::FillRect {
                rect: rect.translated(offset),
                color: *color,
            },
            DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } => DrawCommand::Text {
                text: text.clone(),
                pos: *pos + offset,
                size: *size,
                color: *color,
            },
        }
    }

    fn replay(&self, surface: &mut dyn Surface) {
        match self {
            DrawCommand::Image {
                image,
                src,
                dest,
                flip_x,
            } => surface.draw_image(*image, *src, *dest, *flip_x),
            DrawCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color),
            DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } => surface.fill_text(text, *pos, *size, *color),
        }
    }
}

/// The visible drawing target (canvas, window, test recorder)
pub trait Surface {
    fn clear(&mut self);
    fn draw_image(&mut self, image: ImageHandle, src: Rect, dest: Rect, flip_x: bool);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}
