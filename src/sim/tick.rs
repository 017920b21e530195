//! Per-tick simulation step
//!
//! Order within a tick: controls, interaction pass, physics + draw for every
//! actor, score overlay, camera follow, death check.

use super::actor::{Actor, ActorKind};
use super::behavior;
use super::state::World;
use crate::consts::DEATH_Y;
use crate::renderer::Frame;

/// Controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl TickInput {
    /// -1, 0 or 1. Opposing directions cancel out.
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the world by `dt_ms` and record what to draw into `frame`
pub fn tick(world: &mut World, input: &TickInput, dt_ms: f32, frame: &mut Frame) {
    world.time_ticks += 1;
    world.time_ms += dt_ms as f64;

    apply_controls(world, input, dt_ms);

    world.resolve_interactions();

    for id in world.actor_ids() {
        if let Some(draw) = world.physics_step(id, dt_ms) {
            frame.draw_sprite(&draw);
        }
    }

    frame.score(world.score);

    let viewport_height = world.viewport.y;
    if let Some(player_y) = world.player().map(|p| p.y) {
        world.camera.follow(player_y, viewport_height);
    }

    if let Some(player) = world.player() {
        if player.y > DEATH_Y {
            log::info!("Player fell to y={} at tick {}, score {}", player.y, world.time_ticks, world.score);
            let id = player.id;
            world.destroy(id);
        }
    }
}

/// Run/jump from input, then the pony's start-of-tick gravity
fn apply_controls(world: &mut World, input: &TickInput, dt_ms: f32) {
    let run_speed = world.settings.run_speed;
    let jump_velocity = world.settings.jump_velocity;
    let Some(player) = world.player_mut() else {
        return;
    };

    let Actor { kind, vel, .. } = player;
    let ActorKind::Player(state) = kind else {
        return;
    };

    vel.x = input.horizontal() * run_speed;
    if state.grounded && input.jump {
        vel.y = -jump_velocity;
        state.grounded = false;
    }
    behavior::begin_player_tick(state, vel, dt_ms);
}
