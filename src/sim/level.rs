//! Procedural level layout
//!
//! A base platform under the spawn point, then a staircase of platforms
//! climbing upward at random horizontal positions. Some platforms get a
//! rainbow floating above them. Layout is a pure function of the seed.

use rand::Rng;

use super::state::World;

/// Gap between the pony's feet and the base platform at spawn
const BASE_PLATFORM_DROP: i32 = 40;

/// Lay out platforms and rainbows for `world`
pub fn generate_level(world: &mut World) {
    let settings = world.settings.clone();
    let viewport = world.viewport;

    let (pony_w, pony_h) = {
        let pony = &world.catalog().pony;
        (pony.frame_width, pony.frame_height)
    };
    let (platform_w, rainbow_w, rainbow_h) = {
        let catalog = world.catalog();
        (
            catalog.platform.frame_width,
            catalog.rainbow.frame_width,
            catalog.rainbow.frame_height,
        )
    };

    let max_x = (viewport.x as i32 - platform_w).max(0);
    let min_gap = settings.min_platform_gap.max(1);
    let max_gap = settings.max_platform_gap.max(min_gap);
    let rainbow_chance = settings.rainbow_chance.clamp(0.0, 1.0);

    // Base platform centered under the spawn point
    let spawn = settings.player_spawn;
    let base_x = (spawn.x + pony_w / 2 - platform_w / 2).clamp(0, max_x);
    let base_y = spawn.y + pony_h + BASE_PLATFORM_DROP;
    world.spawn_platform(base_x, base_y);

    let mut y = base_y;
    let mut rainbows = 0u32;
    for _ in 0..settings.platform_count {
        y -= world.rng.random_range(min_gap..=max_gap);
        let x = world.rng.random_range(0..=max_x);
        world.spawn_platform(x, y);

        if world.rng.random_bool(rainbow_chance) {
            let rainbow_x = x + (platform_w - rainbow_w) / 2;
            let rainbow_y = y - settings.rainbow_float_height - rainbow_h;
            world.spawn_rainbow(rainbow_x, rainbow_y);
            rainbows += 1;
        }
    }

    log::info!(
        "Level seed {}: {} platforms up to y={}, {} rainbows",
        settings.seed,
        settings.platform_count + 1,
        y,
        rainbows
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteCatalog;
    use crate::settings::Settings;
    use crate::sim::actor::{Actor, ActorTag};

    fn layout(world: &World) -> Vec<(ActorTag, i32, i32)> {
        world
            .actors()
            .map(|a: &Actor| (a.kind.tag(), a.x, a.y))
            .collect()
    }

    #[test]
    fn test_level_is_deterministic_per_seed() {
        let settings = Settings::default();
        let a = World::with_level(&settings, SpriteCatalog::headless());
        let b = World::with_level(&settings, SpriteCatalog::headless());
        assert_eq!(layout(&a), layout(&b));

        let other = Settings {
            seed: settings.seed + 1,
            ..settings.clone()
        };
        let c = World::with_level(&other, SpriteCatalog::headless());
        assert_ne!(layout(&a), layout(&c));
    }

    #[test]
    fn test_platforms_climb_within_gaps() {
        let settings = Settings::default();
        let world = World::with_level(&settings, SpriteCatalog::headless());
        let platforms: Vec<_> = world
            .actors()
            .filter(|a| a.kind.tag() == ActorTag::Platform)
            .collect();
        assert_eq!(platforms.len() as u32, settings.platform_count + 1);

        let platform_w = world.catalog().platform.frame_width;
        for pair in platforms.windows(2) {
            let gap = pair[0].y - pair[1].y;
            assert!(gap >= settings.min_platform_gap && gap <= settings.max_platform_gap);
            assert!(pair[1].x >= 0 && pair[1].x + platform_w <= world.viewport.x as i32);
        }
    }

    #[test]
    fn test_base_platform_under_spawn() {
        let settings = Settings::default();
        let world = World::with_level(&settings, SpriteCatalog::headless());
        let player = world.player().expect("player");
        let base = world
            .actors()
            .find(|a| a.kind.tag() == ActorTag::Platform)
            .expect("base platform");
        assert!(base.y > player.y + player.height());
        assert!(base.aabb().left <= player.x && base.aabb().right >= player.x + player.width());
    }

    #[test]
    fn test_rainbow_chance_extremes() {
        let none = Settings {
            rainbow_chance: 0.0,
            ..Settings::default()
        };
        let world = World::with_level(&none, SpriteCatalog::headless());
        assert_eq!(world.count(ActorTag::Rainbow), 0);

        let all = Settings {
            rainbow_chance: 1.0,
            ..Settings::default()
        };
        let world = World::with_level(&all, SpriteCatalog::headless());
        assert_eq!(world.count(ActorTag::Rainbow) as u32, all.platform_count);
    }
}
