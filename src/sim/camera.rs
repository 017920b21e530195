//! Vertical follow camera
//!
//! `y` is the world Y shown at the top of the screen. The world only extends
//! upward from the starting view, so `y` never goes above zero.

/// Damped vertical tracking of the player
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub y: f32,
    /// Fraction of the distance outside the dead zone corrected per tick
    pub gain: f32,
}

impl Camera {
    pub fn new(gain: f32) -> Self {
        Self { y: 0.0, gain }
    }

    /// Ease toward keeping `target_y` inside the middle third of the view
    pub fn follow(&mut self, target_y: i32, viewport_height: f32) {
        let relative = target_y as f32 - self.y;
        let upper = viewport_height / 3.0;
        let lower = viewport_height * 2.0 / 3.0;

        if relative < upper {
            self.y -= self.step(upper - relative);
        } else if relative > lower {
            self.y += self.step(relative - lower);
        }

        self.y = self.y.min(0.0);
    }

    /// Proportional step, at least the minimum but never past the target
    fn step(&self, distance: f32) -> f32 {
        // Capped at `distance` so the camera never overshoots the dead zone
        (distance * self.gain)
            .max(crate::consts::CAMERA_MIN_STEP)
            .min(distance)
    }
}
