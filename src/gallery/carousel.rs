/// Inline preview carousel for one project
///
/// Holds the project's image sequence and the active slide. Navigation wraps
/// at both ends; a single-image carousel never moves.

use std::time::Instant;

use super::fade::Fade;
use super::sequence::{wrap_index, wrap_next, wrap_previous, ImageSequence};

/// Snapshot handed to the gallery host when the active slide is clicked
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub sequence: ImageSequence,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    sequence: ImageSequence,
    active: usize,
    fade: Option<Fade>,
}

impl Carousel {
    pub fn new(sequence: ImageSequence) -> Self {
        Self {
            sequence,
            active: 0,
            fade: None,
        }
    }

    pub fn sequence(&self) -> &ImageSequence {
        &self.sequence
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_image(&self) -> &str {
        self.sequence.get(self.active).unwrap_or_else(|| self.sequence.first())
    }

    pub fn fade(&self) -> Option<&Fade> {
        self.fade.as_ref()
    }

    pub fn next(&mut self) {
        self.show(wrap_next(self.active, self.sequence.len()));
    }

    pub fn previous(&mut self) {
        self.show(wrap_previous(self.active, self.sequence.len()));
    }

    /// Jump straight to an indicator's slide
    pub fn go_to(&mut self, index: usize) {
        self.show(wrap_index(index, self.sequence.len()));
    }

    /// Report the active slide to the host; state is left untouched
    pub fn activate(&self) -> Activation {
        Activation {
            sequence: self.sequence.clone(),
            index: self.active,
        }
    }

    fn show(&mut self, index: usize) {
        if index == self.active {
            return;
        }
        log::trace!("carousel slide {} -> {}", self.active, index);
        self.fade = Some(Fade::start(self.active, Instant::now()));
        self.active = index;
    }
}
