//! Off-screen frame buffer
//!
//! World-space commands are translated by the camera when composited;
//! overlay commands (score) are drawn as-is on top.

use glam::Vec2;

use super::{DrawCommand, PLACEHOLDER_COLOR, Rect, SCORE_COLOR, Surface};
use crate::sim::sprite::SpriteDraw;

const SCORE_POS: Vec2 = Vec2::new(10.0, 24.0);
const SCORE_SIZE: f32 = 20.0;

#[derive(Debug, Default)]
pub struct Frame {
    world: Vec<DrawCommand>,
    overlay: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded for the previous tick
    pub fn clear(&mut self) {
        self.world.clear();
        self.overlay.clear();
    }

    pub fn draw_sprite(&mut self, draw: &SpriteDraw) {
        let (w, h) = (draw.width as f32, draw.height as f32);
        let dest = Rect::new(draw.dest.x as f32, draw.dest.y as f32, w, h);
        let command = match draw.image {
            Some(image) => DrawCommand::Image {
                image,
                src: Rect::new(draw.frame as f32 * w, 0.0, w, h),
                dest,
                flip_x: draw.flip_x,
            },
            None => DrawCommand::FillRect {
                rect: dest,
                color: PLACEHOLDER_COLOR,
            },
        };
        self.world.push(command);
    }

    pub fn score(&mut self, score: u64) {
        self.overlay.push(DrawCommand::Text {
            text: format!("Score: {score}"),
            pos: SCORE_POS,
            size: SCORE_SIZE,
            color: SCORE_COLOR,
        });
    }

    pub fn world_commands(&self) -> &[DrawCommand] {
        &self.world
    }

    pub fn overlay_commands(&self) -> &[DrawCommand] {
        &self.overlay
    }

    /// Present onto `surface` with the view's top edge at world `camera_y`
    pub fn composite(&self, surface: &mut dyn Surface, camera_y: f32) {
        surface.clear();
        let offset = Vec2::new(0.0, -camera_y);
        for command in &self.world {
            command.translated(offset).replay(surface);
        }
        for command in &self.overlay {
            command.replay(surface);
        }
    }
}
