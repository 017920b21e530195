//! Sprite animation model
//!
//! A sprite sheet is a horizontal strip of equally-sized frames. Animations
//! name an ordered subset of those frames and loop forever.

use std::collections::HashMap;
use std::sync::Arc;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Opaque handle to an image issued by an asset provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle(pub u32);

/// Which way a sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// A looping sequence of sheet frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAnimation {
    /// Sheet frame indices, in display order
    pub frames: Vec<usize>,
    /// Length of one full cycle in milliseconds
    pub duration_ms: f64,
}

impl SpriteAnimation {
    pub fn new(frames: Vec<usize>, duration_ms: f64) -> Self {
        Self { frames, duration_ms }
    }

    #[inline]
    pub fn millis_per_frame(&self) -> f64 {
        self.duration_ms / self.frames.len().max(1) as f64
    }

    /// Sheet frame to show `elapsed_ms` after the animation started
    pub fn frame_at(&self, elapsed_ms: f64) -> usize {
        if self.frames.is_empty() {
            return 0;
        }
        let mpf = self.millis_per_frame();
        if mpf <= 0.0 {
            return self.frames[0];
        }
        let step = (elapsed_ms.max(0.0) / mpf).floor() as u64;
        self.frames[(step % self.frames.len() as u64) as usize]
    }
}

/// Immutable description of one sprite sheet, shared by every actor of a kind
#[derive(Debug, Clone)]
pub struct SpriteMeta {
    pub image: Option<ImageHandle>,
    pub frame_width: i32,
    pub frame_height: i32,
    /// Offset from the actor position to where the frame is drawn
    pub draw_offset: IVec2,
    pub animations: HashMap<String, SpriteAnimation>,
}

impl SpriteMeta {
    pub fn new(image: Option<ImageHandle>, frame_width: i32, frame_height: i32) -> Self {
        Self {
            image,
            frame_width,
            frame_height,
            draw_offset: IVec2::ZERO,
            animations: HashMap::new(),
        }
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.draw_offset = IVec2::new(x, y);
        self
    }

    pub fn with_animation(mut self, name: impl Into<String>, frames: Vec<usize>, duration_ms: f64) -> Self {
        self.animations
            .insert(name.into(), SpriteAnimation::new(frames, duration_ms));
        self
    }
}

/// Where and what a sprite wants drawn this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub image: Option<ImageHandle>,
    /// Sheet frame index
    pub frame: usize,
    pub width: i32,
    pub height: i32,
    /// Top-left of the frame in world space
    pub dest: IVec2,
    pub flip_x: bool,
}

/// Per-actor render state
#[derive(Debug, Clone)]
pub struct Sprite {
    pub meta: Arc<SpriteMeta>,
    pub pos: IVec2,
    animation: Option<String>,
    /// Set lazily on the first draw after an animation change
    animation_start: Option<f64>,
    pub facing: Facing,
}

impl Sprite {
    pub fn new(meta: Arc<SpriteMeta>) -> Self {
        Self {
            meta,
            pos: IVec2::ZERO,
            animation: None,
            animation_start: None,
            facing: Facing::default(),
        }
    }

    pub fn animation(&self) -> Option<&str> {
        self.animation.as_deref()
    }

    /// Switch animations. Re-selecting the current one keeps its timing.
    pub fn set_animation(&mut self, name: &str) {
        if self.animation.as_deref() != Some(name) {
            self.animation = Some(name.to_string());
            self.animation_start = None;
        }
    }

    /// Frame to show at `now_ms`, starting the animation clock if needed
    pub fn current_frame(&mut self, now_ms: f64) -> usize {
        let Some(anim) = self
            .animation
            .as_deref()
            .and_then(|name| self.meta.animations.get(name))
        else {
            return 0;
        };
        let start = *self.animation_start.get_or_insert(now_ms);
        anim.frame_at(now_ms - start)
    }

    pub fn draw(&mut self, now_ms: f64) -> SpriteDraw {
        let frame = self.current_frame(now_ms);
        SpriteDraw {
            image: self.meta.image,
            frame,
            width: self.meta.frame_width,
            height: self.meta.frame_height,
            dest: self.pos + self.meta.draw_offset,
            flip_x: self.facing == Facing::Left,
        }
    }
}
