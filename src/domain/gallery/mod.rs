// SPDX-License-Identifier: MPL-2.0
//! Gallery value objects.
//!
//! An [`ImageSet`] is the ordered, non-empty list of images the gallery viewer
//! navigates. Emptiness is ruled out at construction so every index check
//! downstream can assume `len() >= 1`.

use std::fmt;
use std::sync::Arc;

/// Opaque reference to an image, as written in portfolio content.
///
/// The reference is resolved to pixels by the media layer; the viewer only
/// compares and displays it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(Arc::from(path.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

/// Ordered, non-empty, immutable sequence of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet(Arc<[ImageRef]>);

impl ImageSet {
    /// Builds a set from `images`, or `None` when the list is empty.
    #[must_use]
    pub fn new(images: impl IntoIterator<Item = ImageRef>) -> Option<Self> {
        let images: Arc<[ImageRef]> = images.into_iter().collect();
        if images.is_empty() {
            None
        } else {
            Some(Self(images))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.0.get(index)
    }

    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.0.len()
    }

    /// Index of the last image.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ImageSet {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A titled image set, the unit the gallery viewer opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub title: String,
    pub images: ImageSet,
}

impl Gallery {
    #[must_use]
    pub fn new(title: impl Into<String>, images: ImageSet) -> Self {
        Self {
            title: title.into(),
            images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<ImageRef> {
        names.iter().copied().map(ImageRef::from).collect()
    }

    #[test]
    fn empty_image_set_is_rejected() {
        assert!(ImageSet::new(Vec::new()).is_none());
    }

    #[test]
    fn image_set_preserves_order() {
        let set = ImageSet::new(refs(&["a.png", "b.png", "c.png"])).unwrap();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.get(1).map(ImageRef::as_str), Some("b.png"));
        assert_eq!(set.last_index(), 2);
        let names: Vec<_> = set.iter().map(ImageRef::as_str).collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn contains_index_checks_bounds() {
        let set = ImageSet::new(refs(&["only.png"])).unwrap();
        assert!(set.contains_index(0));
        assert!(!set.contains_index(1));
        assert_eq!(set.last_index(), 0);
    }

    #[test]
    fn image_ref_displays_its_path() {
        let image = ImageRef::new("shots/one.png");
        assert_eq!(image.to_string(), "shots/one.png");
        assert_eq!(image, ImageRef::from(String::from("shots/one.png")));
    }
}
