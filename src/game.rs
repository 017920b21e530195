//! Loop driver
//!
//! The host calls [`Game::step`] on a timer (roughly every `tick_ms`) with the
//! current time. Each call runs exactly one tick with the elapsed time since
//! the previous call, clamped, and presents the result.

use crate::assets::SpriteCatalog;
use crate::input::InputState;
use crate::renderer::{Frame, Surface};
use crate::settings::Settings;
use crate::sim::{World, tick};

pub struct Game {
    world: World,
    frame: Frame,
    last_time: Option<f64>,
    max_step_ms: f32,
}

impl Game {
    /// New game on a freshly generated level
    pub fn new(settings: &Settings, catalog: SpriteCatalog) -> Self {
        log::info!("Starting game with seed {}", settings.seed);
        Self::from_world(World::with_level(settings, catalog))
    }

    /// Drive an already populated world
    pub fn from_world(world: World) -> Self {
        let max_step_ms = world.settings.max_step_ms;
        Self {
            world,
            frame: Frame::new(),
            last_time: None,
            max_step_ms,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The pony has fallen out of the world
    pub fn is_over(&self) -> bool {
        self.world.player().is_none()
    }

    /// Elapsed time since the last step, clamped to `[0, max_step_ms]`
    fn elapsed(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        dt.min(self.max_step_ms)
    }

    /// Run one tick and composite it onto `surface`. Returns the dt used.
    pub fn step(&mut self, now_ms: f64, input: &InputState, surface: &mut dyn Surface) -> f32 {
        let dt = self.elapsed(now_ms);

        self.frame.clear();
        tick(&mut self.world, &input.controls(), dt, &mut self.frame);
        self.frame.composite(surface, self.world.camera.y);

        dt
    }
}
