// SPDX-License-Identifier: MPL-2.0
//! Page-wide side effects held by the gallery viewer while it is open.
//!
//! [`PageEffects`] hands out guard objects. A [`ScrollLock`] suspends page
//! scrolling and a [`ListenerHandle`] marks the viewer keyboard listener as
//! attached. Both are released when the guard is dropped, whichever path
//! drops it (explicit close, re-open, or the owning state going away).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counters {
    scroll_locks: AtomicUsize,
    listeners: AtomicUsize,
}

/// Shared registry of page-wide effects. Cloning shares the same counters.
#[derive(Debug, Clone, Default)]
pub struct PageEffects {
    counters: Arc<Counters>,
}

impl PageEffects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends page scrolling until the returned guard is dropped.
    #[must_use = "the page unlocks as soon as the guard is dropped"]
    pub fn lock_scroll(&self) -> ScrollLock {
        self.counters.scroll_locks.fetch_add(1, Ordering::SeqCst);
        ScrollLock {
            counters: Arc::clone(&self.counters),
        }
    }

    /// Registers a keyboard listener until the returned guard is dropped.
    #[must_use = "the listener detaches as soon as the handle is dropped"]
    pub fn attach_listener(&self) -> ListenerHandle {
        self.counters.listeners.fetch_add(1, Ordering::SeqCst);
        ListenerHandle {
            counters: Arc::clone(&self.counters),
        }
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock_count() > 0
    }

    #[must_use]
    pub fn scroll_lock_count(&self) -> usize {
        self.counters.scroll_locks.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.counters.listeners.load(Ordering::SeqCst)
    }
}

/// Keeps the page from scrolling while alive.
#[derive(Debug)]
pub struct ScrollLock {
    counters: Arc<Counters>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.counters.scroll_locks.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Keeps the viewer keyboard listener attached while alive.
#[derive(Debug)]
pub struct ListenerHandle {
    counters: Arc<Counters>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.counters.listeners.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_registry_is_idle() {
        let effects = PageEffects::new();
        assert!(!effects.is_scroll_locked());
        assert_eq!(effects.listener_count(), 0);
    }

    #[test]
    fn guards_release_on_drop() {
        let effects = PageEffects::new();
        let lock = effects.lock_scroll();
        let listener = effects.attach_listener();
        assert!(effects.is_scroll_locked());
        assert_eq!(effects.listener_count(), 1);

        drop(lock);
        drop(listener);
        assert_eq!(effects.scroll_lock_count(), 0);
        assert_eq!(effects.listener_count(), 0);
    }

    #[test]
    fn nested_locks_are_counted() {
        let effects = PageEffects::new();
        let first = effects.lock_scroll();
        let second = effects.lock_scroll();
        assert_eq!(effects.scroll_lock_count(), 2);
        drop(first);
        assert!(effects.is_scroll_locked());
        drop(second);
        assert!(!effects.is_scroll_locked());
    }

    #[test]
    fn clones_share_counters() {
        let effects = PageEffects::new();
        let observer = effects.clone();
        let _lock = effects.lock_scroll();
        assert!(observer.is_scroll_locked());
    }
}
