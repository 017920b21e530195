//! Sprite sheets and their metadata
//!
//! Image loading belongs to the host. The simulation only needs a handle per
//! sheet, obtained through an [`AssetProvider`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::sim::behavior::STAR_COLORS;
use crate::sim::sprite::SpriteMeta;

pub use crate::sim::sprite::ImageHandle;

/// Sheet names looked up through the provider
pub const PONY_SHEET: &str = "pony";
pub const PLATFORM_SHEET: &str = "platform";
pub const RAINBOW_SHEET: &str = "rainbow";
pub const STAR_SHEET: &str = "stars";

/// Resolves sheet names to loaded images
pub trait AssetProvider {
    fn resolve(&self, sheet: &str) -> Option<ImageHandle>;
}

/// Resolves nothing. Every sprite draws as a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetProvider for NoAssets {
    fn resolve(&self, _sheet: &str) -> Option<ImageHandle> {
        None
    }
}

impl AssetProvider for HashMap<String, ImageHandle> {
    fn resolve(&self, sheet: &str) -> Option<ImageHandle> {
        self.get(sheet).copied()
    }
}

/// Shared metadata for each actor kind
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    pub pony: Arc<SpriteMeta>,
    pub platform: Arc<SpriteMeta>,
    pub rainbow: Arc<SpriteMeta>,
    pub star: Arc<SpriteMeta>,
}

impl SpriteCatalog {
    pub fn load(provider: &dyn AssetProvider) -> Self {
        let resolve = |sheet: &str| {
            let image = provider.resolve(sheet);
            if image.is_none() {
                log::warn!("Sprite sheet '{}' not available, drawing placeholders", sheet);
            }
            image
        };

        let pony = SpriteMeta::new(resolve(PONY_SHEET), 80, 64)
            .with_animation("stand", vec![0], 1000.0)
            .with_animation("gallop", vec![1, 2, 3, 4], 400.0)
            .with_animation("fly", vec![5, 6], 300.0);

        let platform = SpriteMeta::new(resolve(PLATFORM_SHEET), 120, 16);

        let rainbow = SpriteMeta::new(resolve(RAINBOW_SHEET), 48, 32)
            .with_offset(0, -4)
            .with_animation("shimmer", vec![0, 1, 2, 3], 800.0);

        // One frame per palette color, in palette order
        let star = STAR_COLORS
            .iter()
            .enumerate()
            .fold(SpriteMeta::new(resolve(STAR_SHEET), 12, 12), |meta, (i, color)| {
                meta.with_animation(*color, vec![i], 100.0)
            });

        Self {
            pony: Arc::new(pony),
            platform: Arc::new(platform),
            rainbow: Arc::new(rainbow),
            star: Arc::new(star),
        }
    }

    /// Catalog with no images at all
    pub fn headless() -> Self {
        Self::load(&NoAssets)
    }
}
