//! Actor model and base physics
//!
//! Every simulated entity is an [`Actor`]. The variant set is closed: see
//! [`ActorKind`]. Positions come in two flavours: `real` is the unrounded
//! position that velocity integrates into, `(x, y)` is its rounding and is
//! what collision and drawing use.

use std::sync::Arc;

use glam::{IVec2, Vec2};

use super::behavior::{PlayerState, RainbowState, StarState};
use super::sprite::{Facing, Sprite, SpriteMeta};
use crate::consts::OUT_OF_BOUNDS_FALLBACK;

/// Stable identity of a live actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub u64);

/// Variant tag plus per-variant state
#[derive(Debug, Clone)]
pub enum ActorKind {
    Player(PlayerState),
    Platform,
    Rainbow(RainbowState),
    Star(StarState),
}

/// Bare variant tag, for comparisons that don't need the variant state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorTag {
    Player,
    Platform,
    Rainbow,
    Star,
}

impl ActorKind {
    pub fn tag(&self) -> ActorTag {
        match self {
            ActorKind::Player(_) => ActorTag::Player,
            ActorKind::Platform => ActorTag::Platform,
            ActorKind::Rainbow(_) => ActorTag::Rainbow,
            ActorKind::Star(_) => ActorTag::Star,
        }
    }
}

/// Axis-aligned box in integer world space (edges inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Aabb {
    /// Touching edges count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub x: i32,
    pub y: i32,
    pub real: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Clamped to the viewport and takes part in interaction queries
    pub interactable: bool,
    pub sprite: Sprite,
}

impl Actor {
    pub fn new(id: ActorId, kind: ActorKind, meta: Arc<SpriteMeta>, x: i32, y: i32, interactable: bool) -> Self {
        let mut sprite = Sprite::new(meta);
        sprite.pos = IVec2::new(x, y);
        Self {
            id,
            kind,
            x,
            y,
            real: Vec2::new(x as f32, y as f32),
            vel: Vec2::ZERO,
            interactable,
            sprite,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.sprite.meta.frame_width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.sprite.meta.frame_height
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            left: self.x,
            top: self.y,
            right: self.x + self.width(),
            bottom: self.y + self.height(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Place the actor exactly, bypassing integration
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.real = Vec2::new(x as f32, y as f32);
        self.x = x;
        self.y = y;
        self.sprite.pos = IVec2::new(x, y);
    }

    /// Integrate velocity over `dt_ms`, clamp, and round.
    ///
    /// Returns the Y the actor had before the step so the caller can refile
    /// it in the spatial index.
    pub fn integrate(&mut self, dt_ms: f32, viewport: Vec2) -> i32 {
        let previous_y = self.y;

        self.real += self.vel * (dt_ms / 1000.0);

        if self.interactable {
            let max_x = (viewport.x - self.width() as f32).max(0.0);
            self.real.x = self.real.x.clamp(0.0, max_x);
            if self.real.y > viewport.y {
                self.real.y = viewport.y - OUT_OF_BOUNDS_FALLBACK;
            }
        }

        self.x = self.real.x.round() as i32;
        self.y = self.real.y.round() as i32;

        self.sprite.pos = IVec2::new(self.x, self.y);
        // Only a strictly positive vx faces right; everything else is left
        self.sprite.facing = if self.vel.x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        };

        previous_y
    }
}
