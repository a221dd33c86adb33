/// Ordered image references for one project
///
/// A sequence is never empty and never changes after construction.
/// Clones share the same backing storage, so handing a snapshot to the
/// lightbox costs a reference count bump.

use std::sync::Arc;

use super::GalleryError;

/// Immutable, non-empty list of image references (paths or URIs)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSequence {
    images: Arc<[String]>,
}

impl ImageSequence {
    /// Build a sequence, rejecting an empty list
    pub fn new(images: Vec<String>) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::EmptySequence);
        }

        Ok(Self {
            images: images.into(),
        })
    }

    /// Number of images (always at least 1)
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn first(&self) -> &str {
        &self.images[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }
}

/// Index after `index`, wrapping from the last slot back to the first
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Index before `index`, wrapping from the first slot to the last
pub fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + len - 1) % len
}

/// Reduce an arbitrary index into `[0, len)`.
///
/// Direct jumps only ever receive indices from rendered indicators, so this
/// is a no-op in practice; stray values wrap instead of panicking.
pub fn wrap_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index % len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/showcase/{}.webp", i)).collect()
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert_eq!(ImageSequence::new(Vec::new()), Err(GalleryError::EmptySequence));
    }

    #[test]
    fn test_sequence_keeps_order() {
        let seq = ImageSequence::new(refs(3)).unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.first(), "/showcase/0.webp");
        assert_eq!(seq.get(2), Some("/showcase/2.webp"));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.iter().count(), 3);
    }

    #[test]
    fn test_clones_share_storage() {
        let seq = ImageSequence::new(refs(2)).unwrap();
        let snapshot = seq.clone();
        assert!(Arc::ptr_eq(&seq.images, &snapshot.images));
    }

    #[test]
    fn test_wrap_next_closes_cycle() {
        for len in 1..=6 {
            for start in 0..len {
                let mut index = start;
                for _ in 0..len {
                    index = wrap_next(index, len);
                }
                assert_eq!(index, start, "len {} start {}", len, start);
            }
        }
    }

    #[test]
    fn test_wrap_previous_inverts_next() {
        for len in 1..=6 {
            for start in 0..len {
                assert_eq!(wrap_previous(wrap_next(start, len), len), start);
                assert_eq!(wrap_next(wrap_previous(start, len), len), start);
            }
        }
    }

    #[test]
    fn test_wrap_index_reduces_out_of_range() {
        assert_eq!(wrap_index(2, 3), 2);
        assert_eq!(wrap_index(3, 3), 0);
        assert_eq!(wrap_index(7, 3), 1);
        assert_eq!(wrap_index(5, 0), 0);
    }
}
