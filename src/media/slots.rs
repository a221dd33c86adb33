/// Load state for every image reference in the catalog

use iced::widget::image::Handle;
use std::collections::HashMap;

use super::loader::{LoadError, LoadedImage};

#[derive(Debug, Clone)]
pub enum Slot {
    Loading,
    Ready(Handle),
    Failed(LoadError),
}

#[derive(Debug, Default)]
pub struct ImageSlots {
    slots: HashMap<String, Slot>,
}

impl ImageSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `reference` as loading. Returns false if it is already known,
    /// so each reference is only requested once.
    pub fn request(&mut self, reference: &str) -> bool {
        if self.slots.contains_key(reference) {
            return false;
        }
        self.slots.insert(reference.to_string(), Slot::Loading);
        true
    }

    pub fn finish(&mut self, reference: String, result: Result<LoadedImage, LoadError>) {
        let slot = match result {
            Ok(image) => Slot::Ready(image.handle),
            Err(e) => {
                log::warn!("Image unavailable: {}", e);
                Slot::Failed(e)
            }
        };
        self.slots.insert(reference, slot);
    }

    /// Unknown references read as loading
    pub fn get(&self, reference: &str) -> &Slot {
        self.slots.get(reference).unwrap_or(&Slot::Loading)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
