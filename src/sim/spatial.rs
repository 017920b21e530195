//! Band-bucketed broad phase
//!
//! Actors are bucketed by `floor(y / BAND_HEIGHT)`. Every sprite is shorter
//! than a band, so any real overlap partner sits in the same band or one of
//! the two neighbours. Queries may return false positives; callers still do
//! the exact AABB test.

use std::collections::{BTreeSet, HashMap};

use super::actor::ActorId;
use crate::consts::BAND_HEIGHT;

pub type BandKey = i32;

/// Band containing a given Y coordinate
#[inline]
pub fn band_of(y: i32) -> BandKey {
    y.div_euclid(BAND_HEIGHT)
}

/// Band key → actors currently in that band
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    bands: HashMap<BandKey, BTreeSet<ActorId>>,
    /// Band each actor was last filed under
    members: HashMap<ActorId, BandKey>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `id` from the band of `previous_y` into the band of `y`.
    /// Safe to call for actors that were never inserted.
    pub fn upsert(&mut self, id: ActorId, previous_y: i32, y: i32) {
        let old = self.members.get(&id).copied().unwrap_or(band_of(previous_y));
        let new = band_of(y);
        if old == new && self.members.contains_key(&id) {
            return;
        }
        self.remove_from_band(id, old);
        self.bands.entry(new).or_default().insert(id);
        self.members.insert(id, new);
    }

    /// Drop `id` from the index. No-op if absent.
    pub fn remove(&mut self, id: ActorId) {
        if let Some(band) = self.members.remove(&id) {
            self.remove_from_band(id, band);
        }
    }

    fn remove_from_band(&mut self, id: ActorId, band: BandKey) {
        if let Some(set) = self.bands.get_mut(&band) {
            set.remove(&id);
            if set.is_empty() {
                self.bands.remove(&band);
            }
        }
    }

    /// Candidates near `y`: the union of the bands around it, minus `id`.
    /// Ordered by id so that resolution order is deterministic.
    pub fn query(&self, id: ActorId, y: i32) -> Vec<ActorId> {
        let center = band_of(y);
        let mut out = BTreeSet::new();
        for band in center - 1..=center + 1 {
            if let Some(set) = self.bands.get(&band) {
                out.extend(set.iter().copied().filter(|&other| other != id));
            }
        }
        out.into_iter().collect()
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.members.contains_key(&id)
    }

    /// Band `id` is currently filed under
    pub fn band_for(&self, id: ActorId) -> Option<BandKey> {
        self.members.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
