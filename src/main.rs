//! Pony Run entry point
//!
//! Native builds run headless: a software timer drives the loop, a small
//! autopilot holds the keys, and frames go to a surface that only counts
//! what it is asked to draw. `RUST_LOG=info` shows the lifecycle,
//! `RUST_LOG=debug` every pickup.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;
    use std::time::{Duration, Instant};

    use glam::Vec2;
    use pony_run::assets::{ImageHandle, SpriteCatalog};
    use pony_run::input::{InputState, Key};
    use pony_run::renderer::{Color, Rect, Surface};
    use pony_run::sim::ActorKind;
    use pony_run::{Game, Settings};

    const SETTINGS_PATH: &str = "pony-run.json";
    const RUN_SECONDS: u64 = 30;

    #[derive(Default)]
    struct StatsSurface {
        frames: u64,
        commands: u64,
    }

    impl Surface for StatsSurface {
        fn clear(&mut self) {
            self.frames += 1;
        }

        fn draw_image(&mut self, _image: ImageHandle, _src: Rect, _dest: Rect, _flip_x: bool) {
            self.commands += 1;
        }

        fn fill_rect(&mut self, _rect: Rect, _color: Color) {
            self.commands += 1;
        }

        fn fill_text(&mut self, _text: &str, _pos: Vec2, _size: f32, _color: Color) {
            self.commands += 1;
        }
    }

    /// Gallop from wall to wall, jumping whenever on the ground
    fn autopilot(game: &Game, input: &mut InputState) {
        let world = game.world();
        let Some(player) = world.player() else {
            return;
        };

        if player.x <= 0 {
            input.release(Key::ArrowLeft);
            input.press(Key::ArrowRight);
        } else if player.x + player.width() >= world.viewport.x as i32 {
            input.release(Key::ArrowRight);
            input.press(Key::ArrowLeft);
        } else if !input.is_held(Key::ArrowLeft) {
            input.press(Key::ArrowRight);
        }

        let grounded = matches!(&player.kind, ActorKind::Player(state) if state.grounded);
        if grounded {
            input.press(Key::Space);
        } else {
            input.release(Key::Space);
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Pony Run (native, headless) starting...");

        let path = std::env::args().nth(1).unwrap_or_else(|| SETTINGS_PATH.to_string());
        let settings = if Path::new(&path).exists() {
            Settings::load(&path)
        } else {
            log::info!("No settings at {}, using defaults", path);
            Settings::default()
        };

        let mut game = Game::new(&settings, SpriteCatalog::headless());
        let mut input = InputState::new();
        let mut surface = StatsSurface::default();

        let interval = Duration::from_secs_f64(f64::from(settings.tick_ms.max(1.0)) / 1000.0);
        let limit = Duration::from_secs(RUN_SECONDS);
        let start = Instant::now();
        let mut next = start;

        while start.elapsed() < limit && !game.is_over() {
            let now_ms = start.elapsed().as_secs_f64() * 1000.0;
            autopilot(&game, &mut input);
            game.step(now_ms, &input, &mut surface);

            next += interval;
            if let Some(wait) = next.checked_duration_since(Instant::now()) {
                std::thread::sleep(wait);
            }
        }

        let world = game.world();
        log::info!(
            "Stopped after {} ticks ({} frames, {} draw calls), camera at y={:.0}",
            world.time_ticks,
            surface.frames,
            surface.commands,
            world.camera.y
        );
        println!("Score: {}", world.score);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page drives `Game::step` directly
}
