// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by the previews and the gallery viewer.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Ref-keyed**: entries are indexed by [`ImageRef`]
//! - **Load tracking**: an entry exists as soon as a load is requested, so
//!   the same image is never decoded twice concurrently
//! - **Failures are cached**: a broken image stays broken for the session
//!   instead of being retried on every frame

use crate::domain::gallery::ImageRef;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// State of one cached image.
#[derive(Debug, Clone)]
pub enum Entry {
    Loading,
    Ready(ImageData),
    Failed(Arc<crate::error::Error>),
}

impl Entry {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Entry::Loading)
    }
}

/// Cache statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub requested: u64,
    pub loaded: u64,
    pub failed: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    cache: LruCache<ImageRef, Entry>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(crate::config::IMAGE_CACHE_CAPACITY)
    }
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Looks up an entry without touching LRU order, for use from `view`.
    #[must_use]
    pub fn peek(&self, image: &ImageRef) -> Option<&Entry> {
        self.cache.peek(image)
    }

    /// Marks every unknown image in `images` as loading and returns them.
    ///
    /// Known images are promoted in LRU order so the visible set survives
    /// eviction.
    pub fn request<'a>(&mut self, images: impl IntoIterator<Item = &'a ImageRef>) -> Vec<ImageRef> {
        let mut missing = Vec::new();
        for image in images {
            if self.cache.get(image).is_some() {
                continue;
            }
            if self.cache.push(image.clone(), Entry::Loading).is_some() {
                self.stats.evictions += 1;
            }
            self.stats.requested += 1;
            missing.push(image.clone());
        }
        missing
    }

    /// Stores the outcome of a load.
    pub fn finish(&mut self, image: ImageRef, result: Result<ImageData, Arc<crate::error::Error>>) {
        let entry = match result {
            Ok(data) => {
                self.stats.loaded += 1;
                Entry::Ready(data)
            }
            Err(error) => {
                tracing::warn!(image = %image, %error, "failed to load image");
                self.stats.failed += 1;
                Entry::Failed(error)
            }
        };
        if let Some((evicted, _)) = self.cache.push(image.clone(), entry) {
            if evicted != image {
                self.stats.evictions += 1;
            }
        }
    }

    /// Whether any requested image is still being decoded.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.cache.iter().any(|(_, entry)| entry.is_loading())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
