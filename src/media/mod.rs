// SPDX-License-Identifier: MPL-2.0
//! Image loading for previews and the gallery viewer.
//!
//! Pixels never reach the viewer state machine: the app asks the
//! [`ImageCache`] which references are missing, loads them off the update
//! loop with [`load_image_ref`], and feeds results back into the cache.

pub mod cache;
pub mod image;

use crate::content::ContentRoot;
use crate::domain::gallery::ImageRef;
use std::sync::Arc;

pub use cache::{Entry, ImageCache};
pub use image::{decode, ImageData};

/// Outcome of a background load, cloneable so it can travel in a message.
pub type LoadResult = std::result::Result<ImageData, Arc<crate::error::Error>>;

/// Reads and decodes `image` from `root`.
///
/// Decoding is CPU-bound and runs on the blocking pool.
pub async fn load_image_ref(root: ContentRoot, image: ImageRef) -> (ImageRef, LoadResult) {
    let result = read_and_decode(&root, &image).await.map_err(Arc::new);
    (image, result)
}

async fn read_and_decode(root: &ContentRoot, image: &ImageRef) -> crate::error::Result<ImageData> {
    let bytes = root.read_async(image.as_str()).await?;
    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|err| crate::error::Error::Io(std::io::Error::other(err.to_string())))?
}
