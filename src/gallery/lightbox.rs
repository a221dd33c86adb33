/// Full-screen lightbox over a snapshot of one project's images
///
/// The lightbox is either closed or holds a [`Session`]. A session owns its
/// own copy of the active index, so navigating here never moves the carousel
/// it was opened from. While a session exists it keeps the page scroll lock
/// and the key capture from the [`Surface`]; dropping the session gives both
/// back.

use std::time::Instant;

use super::fade::Fade;
use super::sequence::{wrap_index, wrap_next, wrap_previous, ImageSequence};
use super::surface::{KeyCapture, ScrollLock, Surface};

/// Keys the lightbox reacts to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Cancel,
}

#[derive(Debug)]
pub struct Session {
    sequence: ImageSequence,
    active: usize,
    title: String,
    fade: Option<Fade>,
    _scroll_lock: ScrollLock,
    _keys: KeyCapture,
}

impl Session {
    pub fn sequence(&self) -> &ImageSequence {
        &self.sequence
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_image(&self) -> &str {
        self.sequence.get(self.active).unwrap_or_else(|| self.sequence.first())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fade(&self) -> Option<&Fade> {
        self.fade.as_ref()
    }

    fn show(&mut self, index: usize) {
        if index == self.active {
            return;
        }
        log::trace!("lightbox slide {} -> {}", self.active, index);
        self.fade = Some(Fade::start(self.active, Instant::now()));
        self.active = index;
    }
}

#[derive(Debug, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(Session),
}

impl Lightbox {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Show `sequence` starting at `start`, titled `title`.
    ///
    /// Opening over an existing session replaces it; the old session's
    /// guards are released before the new ones are taken.
    pub fn open(&mut self, surface: &Surface, sequence: ImageSequence, start: usize, title: String) {
        self.close();

        let active = wrap_index(start, sequence.len());
        log::info!("lightbox open: \"{}\" at {}/{}", title, active + 1, sequence.len());

        *self = Lightbox::Open(Session {
            sequence,
            active,
            title,
            fade: None,
            _scroll_lock: surface.lock_scroll(),
            _keys: surface.capture_keys(),
        });
    }

    /// Close from any control: the close button, the backdrop, or the cancel key
    pub fn close(&mut self) {
        if let Lightbox::Open(session) = std::mem::take(self) {
            log::info!("lightbox closed: \"{}\"", session.title);
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Lightbox::Open(session) => Some(session),
            Lightbox::Closed => None,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.session().map(Session::active_index)
    }

    pub fn next(&mut self) {
        if let Lightbox::Open(session) = self {
            let index = wrap_next(session.active, session.sequence.len());
            session.show(index);
        }
    }

    pub fn previous(&mut self) {
        if let Lightbox::Open(session) = self {
            let index = wrap_previous(session.active, session.sequence.len());
            session.show(index);
        }
    }

    pub fn go_to_slide(&mut self, index: usize) {
        if let Lightbox::Open(session) = self {
            let index = wrap_index(index, session.sequence.len());
            session.show(index);
        }
    }

    /// Apply a key press. Returns false when the key was ignored (lightbox closed).
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            NavKey::Left => self.previous(),
            NavKey::Right => self.next(),
            NavKey::Cancel => self.close(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(n: usize) -> ImageSequence {
        ImageSequence::new((0..n).map(|i| format!("img-{}", i)).collect()).unwrap()
    }

    fn open(surface: &Surface, n: usize, start: usize) -> Lightbox {
        let mut lightbox = Lightbox::new();
        lightbox.open(surface, sequence(n), start, "Weather Moments".to_string());
        lightbox
    }

    #[test]
    fn test_starts_closed_without_holding_surface() {
        let surface = Surface::new();
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert!(lightbox.session().is_none());
        assert!(!surface.is_scroll_locked());
        assert!(!surface.keys_captured());
    }

    #[test]
    fn test_open_sets_state_and_acquires_surface() {
        let surface = Surface::new();
        let lightbox = open(&surface, 3, 2);

        let session = lightbox.session().unwrap();
        assert_eq!(session.active_index(), 2);
        assert_eq!(session.active_image(), "img-2");
        assert_eq!(session.title(), "Weather Moments");
        assert_eq!(surface.scroll_lock_count(), 1);
        assert_eq!(surface.key_capture_count(), 1);
    }

    #[test]
    fn test_open_then_close_releases_once() {
        let surface = Surface::new();
        let mut lightbox = open(&surface, 2, 0);
        lightbox.close();

        assert!(!lightbox.is_open());
        assert_eq!(surface.scroll_lock_count(), 0);
        assert_eq!(surface.key_capture_count(), 0);

        // A second close has nothing left to release
        lightbox.close();
        assert_eq!(surface.scroll_lock_count(), 0);
        assert_eq!(surface.key_capture_count(), 0);
    }

    #[test]
    fn test_reopen_does_not_leak_guards() {
        let surface = Surface::new();
        let mut lightbox = open(&surface, 2, 0);
        lightbox.open(&surface, sequence(4), 3, "Edmodo".to_string());

        assert_eq!(lightbox.active_index(), Some(3));
        assert_eq!(surface.scroll_lock_count(), 1);
        assert_eq!(surface.key_capture_count(), 1);
    }

    #[test]
    fn test_dropping_open_lightbox_releases_surface() {
        let surface = Surface::new();
        let lightbox = open(&surface, 2, 1);
        drop(lightbox);
        assert!(!surface.is_scroll_locked());
        assert!(!surface.keys_captured());
    }

    #[test]
    fn test_right_key_walks_and_wraps() {
        let surface = Surface::new();
        let mut lightbox = open(&surface, 4, 0);
        for _ in 0..3 {
            assert!(lightbox.handle_key(NavKey::Right));
        }
        assert_eq!(lightbox.active_index(), Some(3));

        lightbox.handle_key(NavKey::Right);
        assert_eq!(lightbox.active_index(), Some(0));

        lightbox.handle_key(NavKey::Left);
        assert_eq!(lightbox.active_index(), Some(3));
    }

    #[test]
    fn test_single_image_navigation_is_noop() {
        let surface = Surface::new();
        let mut lightbox = open(&surface, 1, 0);
        for _ in 0..5 {
            lightbox.next();
            lightbox.previous();
        }
        assert_eq!(lightbox.active_index(), Some(0));
    }

    #[test]
    fn test_go_to_slide_sets_index_directly() {
        let surface = Surface::new();
        let mut lightbox = open(&surface, 5, 0);
        lightbox.go_to_slide(3);
        assert_eq!(lightbox.active_index(), Some(3));
        lightbox.go_to_slide(6);
        assert_eq!(lightbox.active_index(), Some(1));
    }

    #[test]
    fn test_every_close_path_lands_in_same_state() {
        let surface = Surface::new();

        // Close button and backdrop both call close(); cancel goes through the key map
        let mut by_button = open(&surface, 3, 1);
        by_button.close();
        let mut by_backdrop = open(&surface, 3, 2);
        by_backdrop.close();
        let mut by_key = open(&surface, 3, 0);
        assert!(by_key.handle_key(NavKey::Cancel));

        for lightbox in [&by_button, &by_backdrop, &by_key] {
            assert!(!lightbox.is_open());
            assert!(lightbox.session().is_none());
            assert_eq!(lightbox.active_index(), None);
        }
        assert_eq!(surface.scroll_lock_count(), 0);
        assert_eq!(surface.key_capture_count(), 0);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.handle_key(NavKey::Right));
        assert!(!lightbox.handle_key(NavKey::Cancel));
        lightbox.next();
        assert!(!lightbox.is_open());
    }
}
