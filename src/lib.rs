//! Pony Run - a small side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, physics, collisions, camera)
//! - `renderer`: Draw commands, off-screen frame buffer and compositing
//! - `assets`: Sprite sheet resolution and the shared sprite catalog
//! - `input`: Abstract keyboard/gamepad state
//! - `game`: Fixed-interval loop driver
//! - `settings`: Data-driven configuration

pub mod assets;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Player gravity (units/ms², applied as `vy += G * dt_ms`)
    pub const GRAVITY: f32 = 0.5;

    /// Height of one collision band in the spatial index
    pub const BAND_HEIGHT: i32 = 200;

    /// Fallback Y when an interactable actor drops below the viewport.
    /// Measured up from the viewport bottom; not tied to the sprite height.
    pub const OUT_OF_BOUNDS_FALLBACK: f32 = 200.0;

    /// Distance the player must travel before dropping another star
    pub const TRAIL_SPACING: f32 = 25.0;
    /// Horizontal distance behind the player where stars are dropped
    pub const TRAIL_BEHIND: f32 = 10.0;
    /// Initial vertical velocity of a trail star (units/s, upward)
    pub const STAR_LAUNCH_VELOCITY: f32 = -60.0;
    /// Star gravity (units/ms²), gentler than the player's
    pub const STAR_GRAVITY: f32 = 0.2;
    /// Star lifetime in milliseconds
    pub const STAR_LIFETIME_MS: f32 = 500.0;

    /// How far below a platform's top the player's feet may be and still land
    pub const LANDING_TOLERANCE: i32 = 20;

    /// Rainbow bobbing period divisor (`sin(t / 250)`) and amplitude
    pub const RAINBOW_BOB_DIVISOR: f64 = 250.0;
    pub const RAINBOW_BOB_AMPLITUDE: f32 = 10.0;

    /// Player is destroyed once it falls past this Y
    pub const DEATH_Y: i32 = 1000;

    /// Smallest camera correction per tick once the player leaves the dead zone
    pub const CAMERA_MIN_STEP: f32 = 2.0;
}
