//! World state
//!
//! One owner for everything a tick mutates: the live actors, the collision
//! index, camera, score and clock.

use std::collections::BTreeMap;

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::{Actor, ActorId, ActorKind, ActorTag};
use super::behavior::{self, PlayerState, RainbowState, StarDrop, StarState};
use super::camera::Camera;
use super::spatial::SpatialIndex;
use super::sprite::SpriteDraw;
use crate::assets::SpriteCatalog;
use crate::consts::STAR_GRAVITY;
use crate::settings::Settings;

pub struct World {
    pub settings: Settings,
    /// Viewport size, fixed at creation
    pub viewport: Vec2,
    /// Live actors, iterated in id order
    actors: BTreeMap<ActorId, Actor>,
    index: SpatialIndex,
    pub camera: Camera,
    pub score: u64,
    /// Simulation clock (ms), advanced by each tick's dt
    pub time_ms: f64,
    pub time_ticks: u64,
    player: Option<ActorId>,
    catalog: SpriteCatalog,
    pub(crate) rng: Pcg32,
    next_id: u64,
}

impl World {
    /// Empty world: no actors, camera at the origin
    pub fn new(settings: &Settings, catalog: SpriteCatalog) -> Self {
        Self {
            settings: settings.clone(),
            viewport: settings.viewport(),
            actors: BTreeMap::new(),
            index: SpatialIndex::new(),
            camera: Camera::new(settings.camera_gain),
            score: 0,
            time_ms: 0.0,
            time_ticks: 0,
            player: None,
            catalog,
            rng: Pcg32::seed_from_u64(settings.seed),
            next_id: 1,
        }
    }

    /// World with the pony at its spawn point and a generated level
    pub fn with_level(settings: &Settings, catalog: SpriteCatalog) -> Self {
        let mut world = Self::new(settings, catalog);
        let spawn = settings.player_spawn;
        world.spawn_player(spawn.x, spawn.y);
        super::level::generate_level(&mut world);
        world
    }

    fn next_entity_id(&mut self) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn catalog(&self) -> &SpriteCatalog {
        &self.catalog
    }

    fn insert(&mut self, actor: Actor, indexed: bool) -> ActorId {
        let id = actor.id;
        if indexed {
            self.index.upsert(id, actor.y, actor.y);
        }
        self.actors.insert(id, actor);
        id
    }

    /// Spawn the pony. Replaces any existing one.
    pub fn spawn_player(&mut self, x: i32, y: i32) -> ActorId {
        if let Some(old) = self.player {
            log::warn!("Replacing existing player {:?}", old);
            self.destroy(old);
        }
        let id = self.next_entity_id();
        let state = PlayerState::new(Vec2::new(x as f32, y as f32));
        let meta = self.catalog.pony.clone();
        let mut actor = Actor::new(id, ActorKind::Player(state), meta, x, y, true);
        actor.sprite.set_animation("stand");
        self.player = Some(id);
        self.insert(actor, true)
    }

    pub fn spawn_platform(&mut self, x: i32, y: i32) -> ActorId {
        let id = self.next_entity_id();
        let meta = self.catalog.platform.clone();
        let actor = Actor::new(id, ActorKind::Platform, meta, x, y, true);
        self.insert(actor, true)
    }

    /// Rainbows never refile themselves, but stay in the index as targets
    pub fn spawn_rainbow(&mut self, x: i32, y: i32) -> ActorId {
        let id = self.next_entity_id();
        let meta = self.catalog.rainbow.clone();
        let state = RainbowState { initial_y: y as f32 };
        let mut actor = Actor::new(id, ActorKind::Rainbow(state), meta, x, y, false);
        actor.sprite.set_animation("shimmer");
        self.insert(actor, true)
    }

    /// Trail star centered on `center`
    pub fn spawn_star(&mut self, center: IVec2, color: &str) -> ActorId {
        let id = self.next_entity_id();
        let meta = self.catalog.star.clone();
        let x = center.x - meta.frame_width / 2;
        let y = center.y - meta.frame_height / 2;
        let mut actor = Actor::new(id, ActorKind::Star(StarState::new()), meta, x, y, false);
        actor.vel = Vec2::new(0.0, crate::consts::STAR_LAUNCH_VELOCITY);
        actor.sprite.set_animation(color);
        self.insert(actor, false)
    }

    /// Remove from the live set and the index. Idempotent.
    pub fn destroy(&mut self, id: ActorId) -> bool {
        self.index.remove(id);
        if self.player == Some(id) {
            self.player = None;
        }
        self.actors.remove(&id).is_some()
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Snapshot of live ids in iteration order
    pub fn actor_ids(&self) -> Vec<ActorId> {
        self.actors.keys().copied().collect()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn count(&self, tag: ActorTag) -> usize {
        self.actors.values().filter(|a| a.kind.tag() == tag).count()
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    pub fn player_id(&self) -> Option<ActorId> {
        self.player
    }

    pub fn player(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actors.get(&id))
    }

    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        self.player.and_then(|id| self.actors.get_mut(&id))
    }

    /// `target` reacts to touching `other`. Only platforms and rainbows
    /// react, and only to the pony.
    pub fn interact(&mut self, target: ActorId, other: ActorId) {
        let Some(target_actor) = self.actors.get(&target) else {
            return;
        };
        let target_tag = target_actor.kind.tag();
        let target_y = target_actor.y;

        let other_tag = self.actors.get(&other).map(|a| a.kind.tag());
        if other_tag != Some(ActorTag::Player) {
            return;
        }

        match target_tag {
            ActorTag::Platform => {
                if let Some(player) = self.actors.get_mut(&other) {
                    if behavior::land_on_platform(player, target_y) {
                        log::trace!("Player landed on platform {:?} at y={}", target, target_y);
                    }
                }
            }
            ActorTag::Rainbow => {
                self.score += 1;
                self.destroy(target);
                log::debug!("Rainbow {:?} collected, score {}", target, self.score);
            }
            ActorTag::Player | ActorTag::Star => {}
        }
    }

    /// Broad phase through the index, exact AABB test, then `interact` on
    /// every overlapping candidate.
    pub fn resolve_interactions(&mut self) {
        for id in self.actor_ids() {
            let Some(actor) = self.actors.get(&id) else {
                continue;
            };
            if !actor.interactable {
                continue;
            }
            for candidate in self.index.query(id, actor.y) {
                // Re-read: an earlier interaction may have moved or removed us
                let Some(actor) = self.actors.get(&id) else {
                    break;
                };
                let overlaps = self
                    .actors
                    .get(&candidate)
                    .is_some_and(|other| other.aabb().overlaps(&actor.aabb()));
                if overlaps {
                    self.interact(candidate, id);
                }
            }
        }
    }

    /// Physics for one actor followed by its variant post-step.
    /// Returns what to draw, or `None` if the actor is gone.
    pub fn physics_step(&mut self, id: ActorId, dt_ms: f32) -> Option<SpriteDraw> {
        let now = self.time_ms;
        let viewport = self.viewport;
        let actor = self.actors.get_mut(&id)?;

        if let ActorKind::Star(_) = actor.kind {
            actor.vel.y += STAR_GRAVITY * dt_ms;
        }

        let previous_y = actor.integrate(dt_ms, viewport);
        if actor.interactable {
            self.index.upsert(id, previous_y, actor.y);
        }

        let mut drop: Option<StarDrop> = None;
        let mut expired = false;
        match actor.kind.tag() {
            ActorTag::Player => {
                behavior::update_player_animation(actor);
                drop = behavior::trail_drop(actor);
            }
            ActorTag::Rainbow => behavior::bob_rainbow(actor, now),
            ActorTag::Star => {
                if let ActorKind::Star(star) = &mut actor.kind {
                    expired = star.age(dt_ms);
                }
            }
            ActorTag::Platform => {}
        }

        if expired {
            self.destroy(id);
            return None;
        }

        let draw = actor.sprite.draw(now);
        if let Some(drop) = drop {
            self.spawn_star(drop.center, drop.color);
        }
        Some(draw)
    }
}
