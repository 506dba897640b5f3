// SPDX-License-Identifier: MPL-2.0
//! Gallery session record: which images are open, which one is current,
//! and the label used to caption them.

/// Visual mode of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Nothing is shown.
    #[default]
    Closed,
    /// Exactly one image at a time, with previous/next navigation.
    Direct,
    /// Every image of the gallery as a clickable thumbnail.
    Grid,
}

/// In-memory record of the open gallery.
///
/// Fields are only reachable through [`GalleryViewer`](super::GalleryViewer)
/// operations, so a session can never be observed half-updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySession {
    images: Vec<String>,
    index: usize,
    label: String,
    mode: Mode,
}

impl GallerySession {
    /// Builds a direct-mode session. `index` must already be in range.
    pub(super) fn direct(images: Vec<String>, index: usize, label: String) -> Self {
        debug_assert!(index < images.len());
        Self {
            images,
            index,
            label,
            mode: Mode::Direct,
        }
    }

    /// Builds a grid-mode session. No image is current until one is chosen.
    pub(super) fn grid(images: Vec<String>, label: String) -> Self {
        Self {
            images,
            index: 0,
            label,
            mode: Mode::Grid,
        }
    }

    pub(super) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Takes the images and label out, leaving a closed session behind.
    pub(super) fn take(&mut self) -> (Vec<String>, String) {
        let taken = std::mem::take(self);
        (taken.images, taken.label)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw index. Only meaningful in [`Mode::Direct`].
    #[must_use]
    pub fn raw_index(&self) -> usize {
        self.index
    }

    /// Returns true if the mode agrees with the image list and index.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self.mode {
            Mode::Closed => self.images.is_empty(),
            Mode::Direct => !self.images.is_empty() && self.index < self.images.len(),
            Mode::Grid => !self.images.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{i}.jpg")).collect()
    }

    #[test]
    fn default_session_is_closed_and_consistent() {
        let session = GallerySession::default();
        assert_eq!(session.mode(), Mode::Closed);
        assert!(session.images().is_empty());
        assert!(session.is_consistent());
    }

    #[test]
    fn direct_and_grid_sessions_are_consistent() {
        assert!(GallerySession::direct(images(3), 2, String::new()).is_consistent());
        assert!(GallerySession::grid(images(2), "News".into()).is_consistent());
    }

    #[test]
    fn empty_grid_is_inconsistent() {
        assert!(!GallerySession::grid(Vec::new(), String::new()).is_consistent());
    }

    #[test]
    fn take_leaves_closed_session() {
        let mut session = GallerySession::grid(images(2), "News".into());
        let (taken, label) = session.take();
        assert_eq!(taken.len(), 2);
        assert_eq!(label, "News");
        assert_eq!(session, GallerySession::default());
    }
}
