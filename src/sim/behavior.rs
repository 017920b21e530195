//! Per-variant behavior: the pony's controls and animation, one-way
//! platforms, bobbing rainbows and trail stars.

use glam::{IVec2, Vec2};

use super::actor::{Actor, ActorKind};
use super::sprite::Facing;
use crate::consts::*;

/// Colors the trail cycles through, in order. Each is an animation on the
/// star sheet.
pub const STAR_COLORS: [&str; 7] = ["red", "orange", "yellow", "green", "blue", "indigo", "violet"];

/// Pony animation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerAnim {
    #[default]
    Stand,
    Gallop,
    Fly,
}

impl PlayerAnim {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAnim::Stand => "stand",
            PlayerAnim::Gallop => "gallop",
            PlayerAnim::Fly => "fly",
        }
    }

    /// Next state given the current velocity
    pub fn next(self, vel: Vec2) -> Self {
        let moving_x = vel.x != 0.0;
        let moving_y = vel.y != 0.0;
        match self {
            PlayerAnim::Stand if moving_y => PlayerAnim::Fly,
            PlayerAnim::Stand if moving_x => PlayerAnim::Gallop,
            PlayerAnim::Stand => PlayerAnim::Stand,
            _ if !moving_x && !moving_y => PlayerAnim::Stand,
            _ if moving_y => PlayerAnim::Fly,
            _ => PlayerAnim::Gallop,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Landed on a platform during this tick
    pub grounded: bool,
    pub anim: PlayerAnim,
    /// Where the last trail star was dropped
    pub last_drop: Vec2,
    /// Stars dropped so far; picks the next trail color
    pub stars_dropped: u32,
}

impl PlayerState {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            grounded: false,
            anim: PlayerAnim::Stand,
            last_drop: spawn,
            stars_dropped: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RainbowState {
    /// Center of the bobbing motion
    pub initial_y: f32,
}

#[derive(Debug, Clone)]
pub struct StarState {
    pub life_left: f32,
}

impl StarState {
    pub fn new() -> Self {
        Self {
            life_left: STAR_LIFETIME_MS,
        }
    }

    /// Burn `dt_ms` of life. Returns true once the star has expired.
    pub fn age(&mut self, dt_ms: f32) -> bool {
        self.life_left -= dt_ms;
        self.life_left <= 0.0
    }
}

impl Default for StarState {
    fn default() -> Self {
        Self::new()
    }
}

/// A star the trail wants spawned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarDrop {
    /// Center of the new star
    pub center: IVec2,
    pub color: &'static str,
}

/// Start-of-tick reset for the pony: clears `grounded` and, now airborne,
/// applies gravity. A platform landing later in the tick cancels it.
/// A zero-length tick leaves the pony exactly as it was.
pub fn begin_player_tick(state: &mut PlayerState, vel: &mut Vec2, dt_ms: f32) {
    if dt_ms <= 0.0 {
        return;
    }
    state.grounded = false;
    vel.y += GRAVITY * dt_ms;
}

/// Reconcile the pony's animation with its velocity
pub fn update_player_animation(actor: &mut Actor) {
    let vel = actor.vel;
    let Actor { kind, sprite, .. } = actor;
    if let ActorKind::Player(state) = kind {
        state.anim = state.anim.next(vel);
        sprite.set_animation(state.anim.as_str());
    }
}

/// Drop a star once the pony has moved far enough from the last one
pub fn trail_drop(actor: &mut Actor) -> Option<StarDrop> {
    let pos = actor.pos();
    let (width, height) = (actor.width(), actor.height());
    let facing = actor.sprite.facing;
    let (x, y) = (actor.x, actor.y);

    let ActorKind::Player(state) = &mut actor.kind else {
        return None;
    };
    if pos.distance(state.last_drop) <= TRAIL_SPACING {
        return None;
    }

    let behind_x = match facing {
        Facing::Right => x - TRAIL_BEHIND as i32,
        Facing::Left => x + width + TRAIL_BEHIND as i32,
    };
    let color = STAR_COLORS[state.stars_dropped as usize % STAR_COLORS.len()];
    state.stars_dropped = state.stars_dropped.wrapping_add(1);
    state.last_drop = pos;

    Some(StarDrop {
        center: IVec2::new(behind_x, y + height / 2),
        color,
    })
}

/// One-way platform landing. The pony only lands while falling with its
/// feet no deeper than the tolerance below the platform top.
pub fn land_on_platform(player: &mut Actor, platform_y: i32) -> bool {
    let player_bottom = player.y + player.height();
    if player.vel.y <= 0.0 || player_bottom >= platform_y + LANDING_TOLERANCE {
        return false;
    }
    // Only Y snaps; sub-unit horizontal progress in `real.x` is kept
    let y = platform_y - player.height();
    player.y = y;
    player.real.y = y as f32;
    player.sprite.pos.y = y;
    player.vel.y = 0.0;
    if let ActorKind::Player(state) = &mut player.kind {
        state.grounded = true;
    }
    true
}

/// Move a rainbow along its sine bob. Ignores velocity entirely.
pub fn bob_rainbow(actor: &mut Actor, now_ms: f64) {
    let ActorKind::Rainbow(state) = &actor.kind else {
        return;
    };
    let offset = (now_ms / RAINBOW_BOB_DIVISOR).sin() as f32 * RAINBOW_BOB_AMPLITUDE;
    actor.real.y = state.initial_y - offset;
    actor.y = actor.real.y.round() as i32;
    actor.sprite.pos.y = actor.y;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::ActorId;
    use crate::sim::sprite::SpriteMeta;
    use std::sync::Arc;

    fn pony(x: i32, y: i32) -> Actor {
        let meta = Arc::new(
            SpriteMeta::new(None, 80, 64)
                .with_animation("stand", vec![0], 1000.0)
                .with_animation("gallop", vec![1, 2, 3, 4], 400.0)
                .with_animation("fly", vec![5, 6], 200.0),
        );
        let state = PlayerState::new(Vec2::new(x as f32, y as f32));
        Actor::new(ActorId(1), ActorKind::Player(state), meta, x, y, true)
    }

    fn player_state(actor: &Actor) -> &PlayerState {
        match &actor.kind {
            ActorKind::Player(state) => state,
            _ => panic!("not a player"),
        }
    }

    #[test]
    fn test_anim_transitions() {
        use PlayerAnim::*;
        let still = Vec2::ZERO;
        let run = Vec2::new(300.0, 0.0);
        let jump = Vec2::new(0.0, -450.0);
        let arc = Vec2::new(300.0, 100.0);

        assert_eq!(Stand.next(still), Stand);
        assert_eq!(Stand.next(run), Gallop);
        assert_eq!(Stand.next(jump), Fly);
        assert_eq!(Stand.next(arc), Fly);

        assert_eq!(Gallop.next(still), Stand);
        assert_eq!(Gallop.next(arc), Fly);
        assert_eq!(Gallop.next(run), Gallop);

        assert_eq!(Fly.next(still), Stand);
        assert_eq!(Fly.next(run), Gallop);
        assert_eq!(Fly.next(jump), Fly);
    }

    #[test]
    fn test_update_player_animation_sets_sprite() {
        let mut actor = pony(100, 100);
        actor.vel = Vec2::new(300.0, 0.0);
        update_player_animation(&mut actor);
        assert_eq!(actor.sprite.animation(), Some("gallop"));
        assert_eq!(player_state(&actor).anim, PlayerAnim::Gallop);

        actor.vel = Vec2::ZERO;
        update_player_animation(&mut actor);
        assert_eq!(actor.sprite.animation(), Some("stand"));
    }

    #[test]
    fn test_begin_tick_applies_gravity() {
        let mut state = PlayerState::new(Vec2::ZERO);
        state.grounded = true;
        let mut vel = Vec2::ZERO;
        begin_player_tick(&mut state, &mut vel, 10.0);
        assert!(!state.grounded);
        assert_eq!(vel.y, 5.0);
    }

    #[test]
    fn test_zero_length_tick_keeps_grounded() {
        let mut state = PlayerState::new(Vec2::ZERO);
        state.grounded = true;
        let mut vel = Vec2::ZERO;
        begin_player_tick(&mut state, &mut vel, 0.0);
        assert!(state.grounded);
        assert_eq!(vel, Vec2::ZERO);
    }

    #[test]
    fn test_platform_landing_snaps_on_top() {
        let platform_y = 400;
        // Feet 5 units above the platform top, falling
        let mut actor = pony(100, platform_y - 64 - 5);
        actor.vel = Vec2::new(0.0, 100.0);

        assert!(land_on_platform(&mut actor, platform_y));
        assert_eq!(actor.vel.y, 0.0);
        assert_eq!(actor.y, platform_y - 64);
        assert_eq!(actor.real.y, (platform_y - 64) as f32);
        assert!(player_state(&actor).grounded);
    }

    #[test]
    fn test_platform_ignores_rising_or_deep_player() {
        let platform_y = 400;
        let mut rising = pony(100, platform_y - 60);
        rising.vel = Vec2::new(0.0, -100.0);
        assert!(!land_on_platform(&mut rising, platform_y));
        assert_eq!(rising.y, platform_y - 60);

        // Feet already 30 below the top: approached from the side or below
        let mut deep = pony(100, platform_y - 64 + 30);
        deep.vel = Vec2::new(0.0, 100.0);
        assert!(!land_on_platform(&mut deep, platform_y));
        assert!(!player_state(&deep).grounded);
    }

    #[test]
    fn test_trail_drops_after_spacing() {
        let mut actor = pony(100, 100);
        assert!(trail_drop(&mut actor).is_none());

        actor.set_position(120, 100);
        assert!(trail_drop(&mut actor).is_none());

        actor.set_position(126, 100);
        actor.sprite.facing = Facing::Right;
        let drop = trail_drop(&mut actor).expect("should drop");
        assert_eq!(drop.color, "red");
        assert_eq!(drop.center, IVec2::new(116, 132));
        assert_eq!(player_state(&actor).last_drop, Vec2::new(126.0, 100.0));

        // Facing left drops behind the right edge, next palette color
        actor.set_position(200, 100);
        actor.sprite.facing = Facing::Left;
        let drop = trail_drop(&mut actor).expect("should drop");
        assert_eq!(drop.color, "orange");
        assert_eq!(drop.center.x, 200 + 80 + 10);
    }

    #[test]
    fn test_trail_colors_wrap() {
        let mut actor = pony(0, 0);
        let mut colors = Vec::new();
        for i in 1..=8 {
            actor.set_position(i * 30, 0);
            colors.push(trail_drop(&mut actor).expect("drop").color);
        }
        assert_eq!(colors[0], "red");
        assert_eq!(colors[6], "violet");
        assert_eq!(colors[7], "red");
    }

    #[test]
    fn test_star_lifetime() {
        let mut star = StarState::new();
        let mut elapsed = 0.0;
        while elapsed < 490.0 {
            assert!(!star.age(10.0));
            elapsed += 10.0;
        }
        assert!(star.age(10.0));
    }

    #[test]
    fn test_rainbow_bobs_around_initial_y() {
        let meta = Arc::new(SpriteMeta::new(None, 48, 32));
        let state = RainbowState { initial_y: 200.0 };
        let mut actor = Actor::new(ActorId(2), ActorKind::Rainbow(state), meta, 10, 200, false);

        bob_rainbow(&mut actor, 0.0);
        assert_eq!(actor.y, 200);

        // Quarter period: sin(pi/2) = 1, so the rainbow sits at its highest
        bob_rainbow(&mut actor, 250.0 * std::f64::consts::FRAC_PI_2);
        assert_eq!(actor.y, 190);
        assert_eq!(actor.x, 10);
    }
}
