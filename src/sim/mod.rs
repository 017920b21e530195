//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Time only advances by the dt handed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (by actor ID)
//! - No platform dependencies; drawing goes to an off-screen `Frame`

pub mod actor;
pub mod behavior;
pub mod camera;
pub mod level;
pub mod spatial;
pub mod sprite;
pub mod state;
pub mod tick;

pub use actor::{Aabb, Actor, ActorId, ActorKind, ActorTag};
pub use behavior::{PlayerAnim, PlayerState, RainbowState, STAR_COLORS, StarState};
pub use camera::Camera;
pub use level::generate_level;
pub use spatial::{SpatialIndex, band_of};
pub use sprite::{Facing, Sprite, SpriteAnimation, SpriteDraw, SpriteMeta};
pub use state::World;
pub use tick::{TickInput, tick};
