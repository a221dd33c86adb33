/// Page-level resources a lightbox holds while it is open
///
/// The page scroll lock and the global key capture are counters. Each
/// acquisition returns a guard that decrements its counter when dropped.
/// Only the UI thread touches them.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Surface {
    scroll_locks: Rc<Cell<usize>>,
    key_captures: Rc<Cell<usize>>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable page scrolling until the returned guard is dropped
    pub fn lock_scroll(&self) -> ScrollLock {
        log::debug!("page scroll locked");
        ScrollLock {
            hold: Hold::acquire(&self.scroll_locks),
        }
    }

    /// Route navigation keys to the holder until the guard is dropped
    pub fn capture_keys(&self) -> KeyCapture {
        log::debug!("keyboard captured");
        KeyCapture {
            hold: Hold::acquire(&self.key_captures),
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks.get() > 0
    }

    pub fn keys_captured(&self) -> bool {
        self.key_captures.get() > 0
    }

    pub fn scroll_lock_count(&self) -> usize {
        self.scroll_locks.get()
    }

    pub fn key_capture_count(&self) -> usize {
        self.key_captures.get()
    }
}

/// One outstanding increment on a counter
#[derive(Debug)]
struct Hold(Rc<Cell<usize>>);

impl Hold {
    fn acquire(counter: &Rc<Cell<usize>>) -> Self {
        counter.set(counter.get() + 1);
        Hold(counter.clone())
    }
}

impl Drop for Hold {
    fn drop(&mut self) {
        let before = self.0.get();
        debug_assert!(before > 0, "surface counter released more often than acquired");
        self.0.set(before.saturating_sub(1));
    }
}

/// Held while the page must not scroll
#[derive(Debug)]
pub struct ScrollLock {
    hold: Hold,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        log::debug!("page scroll released ({} holders before)", self.hold.0.get());
    }
}

/// Held while arrow/escape keys belong to the lightbox
#[derive(Debug)]
pub struct KeyCapture {
    hold: Hold,
}

impl Drop for KeyCapture {
    fn drop(&mut self) {
        log::debug!("keyboard released ({} holders before)", self.hold.0.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_surface_is_free() {
        let surface = Surface::new();
        assert!(!surface.is_scroll_locked());
        assert!(!surface.keys_captured());
    }

    #[test]
    fn test_guards_release_on_drop() {
        let surface = Surface::new();
        let lock = surface.lock_scroll();
        let keys = surface.capture_keys();
        assert!(surface.is_scroll_locked());
        assert!(surface.keys_captured());

        drop(lock);
        assert!(!surface.is_scroll_locked());
        assert!(surface.keys_captured());

        drop(keys);
        assert!(!surface.keys_captured());
    }

    #[test]
    fn test_clones_observe_same_counters() {
        let surface = Surface::new();
        let view = surface.clone();
        let _lock = surface.lock_scroll();
        let _second = view.lock_scroll();
        assert_eq!(surface.scroll_lock_count(), 2);
        assert_eq!(view.key_capture_count(), 0);
    }

    #[test]
    fn test_each_guard_counts_exactly_once() {
        let surface = Surface::new();
        let first = surface.capture_keys();
        let second = surface.capture_keys();
        assert_eq!(surface.key_capture_count(), 2);

        drop(second);
        assert_eq!(surface.key_capture_count(), 1);
        drop(first);
        assert_eq!(surface.key_capture_count(), 0);
        assert_eq!(surface.scroll_lock_count(), 0);
    }
}
