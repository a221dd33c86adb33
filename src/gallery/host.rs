/// Gallery host: one carousel per project plus the shared lightbox
///
/// Clicking a carousel's active slide opens the lightbox on a snapshot of
/// that carousel. From then on the two move independently; the host never
/// copies an index back in either direction.

use std::time::Instant;

use super::carousel::Carousel;
use super::lightbox::{Lightbox, NavKey};
use super::sequence::ImageSequence;
use super::surface::Surface;
use crate::state::catalog::{Catalog, Project};
use crate::state::i18n::Language;

/// Navigation events from the carousel and lightbox views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryMessage {
    CarouselNext(usize),
    CarouselPrevious(usize),
    CarouselGoTo { project: usize, index: usize },
    /// The active slide of a project's carousel was clicked
    Activate(usize),
    LightboxNext,
    LightboxPrevious,
    LightboxGoTo(usize),
    /// Close button or backdrop
    Close,
    Key(NavKey),
}

#[derive(Debug)]
pub struct ProjectEntry {
    pub project: Project,
    pub carousel: Carousel,
}

#[derive(Debug)]
pub struct GalleryHost {
    entries: Vec<ProjectEntry>,
    lightbox: Lightbox,
    surface: Surface,
}

impl GalleryHost {
    /// Build one carousel per project. Projects without images are skipped.
    pub fn new(catalog: &Catalog) -> Self {
        let entries = catalog
            .projects
            .iter()
            .filter_map(|project| match ImageSequence::new(project.images.clone()) {
                Ok(sequence) => Some(ProjectEntry {
                    project: project.clone(),
                    carousel: Carousel::new(sequence),
                }),
                Err(e) => {
                    log::warn!("Skipping project \"{}\": {}", project.title.en, e);
                    None
                }
            })
            .collect();

        Self {
            entries,
            lightbox: Lightbox::new(),
            surface: Surface::new(),
        }
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn carousel(&self, project: usize) -> Option<&Carousel> {
        self.entries.get(project).map(|entry| &entry.carousel)
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Every image reference across all projects, in display order
    pub fn image_references(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.carousel.sequence().iter())
    }

    /// True while any slide is still cross-fading
    pub fn is_animating(&self, now: Instant) -> bool {
        let carousels = self
            .entries
            .iter()
            .filter_map(|entry| entry.carousel.fade())
            .any(|fade| fade.is_running(now));
        let lightbox = self
            .lightbox
            .session()
            .and_then(|session| session.fade())
            .is_some_and(|fade| fade.is_running(now));
        carousels || lightbox
    }

    pub fn update(&mut self, message: GalleryMessage, language: Language) {
        match message {
            GalleryMessage::CarouselNext(project) => {
                self.with_carousel(project, Carousel::next);
            }
            GalleryMessage::CarouselPrevious(project) => {
                self.with_carousel(project, Carousel::previous);
            }
            GalleryMessage::CarouselGoTo { project, index } => {
                self.with_carousel(project, |carousel| carousel.go_to(index));
            }
            GalleryMessage::Activate(project) => self.activate(project, language),
            GalleryMessage::LightboxNext => self.lightbox.next(),
            GalleryMessage::LightboxPrevious => self.lightbox.previous(),
            GalleryMessage::LightboxGoTo(index) => self.lightbox.go_to_slide(index),
            GalleryMessage::Close => self.lightbox.close(),
            GalleryMessage::Key(key) => {
                self.lightbox.handle_key(key);
            }
        }
    }

    /// Open the lightbox on the clicked project's current slide
    pub fn activate(&mut self, project: usize, language: Language) {
        let Some(entry) = self.entries.get(project) else {
            log::debug!("Ignoring activation of unknown project {}", project);
            return;
        };

        let activation = entry.carousel.activate();
        let title = entry.project.title.resolve(language).to_string();
        self.lightbox
            .open(&self.surface, activation.sequence, activation.index, title);
    }

    fn with_carousel(&mut self, project: usize, action: impl FnOnce(&mut Carousel)) {
        match self.entries.get_mut(project) {
            Some(entry) => action(&mut entry.carousel),
            None => log::debug!("Ignoring navigation for unknown project {}", project),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::i18n::Localized;

    fn project(title: &str, images: usize) -> Project {
        Project {
            title: Localized::new(title, format!("{} (中文)", title)),
            description: Localized::default(),
            tags: Vec::new(),
            live_demo: None,
            github: None,
            images: (0..images).map(|i| format!("{}-{}.webp", title, i)).collect(),
        }
    }

    fn host(sizes: &[usize]) -> GalleryHost {
        let projects = sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| project(&format!("p{}", i), n))
            .collect();
        GalleryHost::new(&Catalog {
            projects,
            ..Catalog::default()
        })
    }

    #[test]
    fn test_projects_without_images_are_skipped() {
        let host = host(&[2, 0, 3]);
        assert_eq!(host.entries().len(), 2);
        assert_eq!(host.entries()[1].project.title.en, "p2");
        assert_eq!(host.image_references().count(), 5);
    }

    #[test]
    fn test_activate_opens_on_carousel_snapshot() {
        let mut host = host(&[3]);
        host.update(GalleryMessage::CarouselNext(0), Language::En);
        host.update(GalleryMessage::Activate(0), Language::Zh);

        let session = host.lightbox().session().unwrap();
        assert_eq!(session.active_index(), 1);
        assert_eq!(session.title(), "p0 (中文)");
        assert_eq!(session.sequence(), host.carousel(0).unwrap().sequence());
        assert!(host.surface().is_scroll_locked());
        assert!(host.surface().keys_captured());
    }

    #[test]
    fn test_lightbox_and_carousel_stay_independent() {
        let mut host = host(&[4]);
        host.update(GalleryMessage::CarouselGoTo { project: 0, index: 2 }, Language::En);
        host.update(GalleryMessage::Activate(0), Language::En);

        host.update(GalleryMessage::LightboxNext, Language::En);
        assert_eq!(host.lightbox().active_index(), Some(3));
        assert_eq!(host.carousel(0).unwrap().active_index(), 2);

        host.update(GalleryMessage::CarouselPrevious(0), Language::En);
        assert_eq!(host.carousel(0).unwrap().active_index(), 1);
        assert_eq!(host.lightbox().active_index(), Some(3));
    }

    #[test]
    fn test_opening_from_second_carousel_leaves_first_alone() {
        let mut host = host(&[3, 2]);
        host.update(GalleryMessage::CarouselNext(0), Language::En);
        host.update(GalleryMessage::CarouselNext(0), Language::En);

        host.update(GalleryMessage::Activate(1), Language::En);
        host.update(GalleryMessage::Key(NavKey::Right), Language::En);

        assert_eq!(host.carousel(0).unwrap().active_index(), 2);
        assert_eq!(host.lightbox().session().unwrap().title(), "p1");
    }

    #[test]
    fn test_keys_drive_lightbox_and_cancel_releases_surface() {
        let mut host = host(&[4]);
        host.update(GalleryMessage::Activate(0), Language::En);
        for _ in 0..3 {
            host.update(GalleryMessage::Key(NavKey::Right), Language::En);
        }
        assert_eq!(host.lightbox().active_index(), Some(3));
        host.update(GalleryMessage::Key(NavKey::Right), Language::En);
        assert_eq!(host.lightbox().active_index(), Some(0));

        host.update(GalleryMessage::Key(NavKey::Cancel), Language::En);
        assert!(!host.lightbox().is_open());
        assert_eq!(host.surface().scroll_lock_count(), 0);
        assert_eq!(host.surface().key_capture_count(), 0);
    }

    #[test]
    fn test_activating_again_replaces_session() {
        let mut host = host(&[2, 3]);
        host.update(GalleryMessage::Activate(0), Language::En);
        host.update(GalleryMessage::Activate(1), Language::En);
        assert_eq!(host.lightbox().session().unwrap().sequence().len(), 3);
        assert_eq!(host.surface().scroll_lock_count(), 1);
    }

    #[test]
    fn test_dropping_host_with_open_lightbox_releases_surface() {
        let mut host = host(&[2]);
        host.update(GalleryMessage::Activate(0), Language::En);
        let surface = host.surface().clone();
        drop(host);
        assert!(!surface.is_scroll_locked());
        assert!(!surface.keys_captured());
    }

    #[test]
    fn test_unknown_project_is_ignored() {
        let mut host = host(&[2]);
        host.update(GalleryMessage::CarouselNext(7), Language::En);
        host.update(GalleryMessage::Activate(7), Language::En);
        assert!(!host.lightbox().is_open());
        assert_eq!(host.carousel(0).unwrap().active_index(), 0);
    }

    #[test]
    fn test_navigation_starts_animation() {
        let mut host = host(&[2]);
        assert!(!host.is_animating(Instant::now()));
        host.update(GalleryMessage::CarouselNext(0), Language::En);
        assert!(host.is_animating(Instant::now()));
    }
}
