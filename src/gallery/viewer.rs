// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine: `Closed`, `Direct` and `Grid`.
//!
//! All operations are synchronous and total. Invalid input (an empty image
//! list, an out-of-range start index, navigation while not in direct mode)
//! never errors: it is either clamped or ignored.

use super::session::{GallerySession, Mode};
use tracing::debug;

/// Label used for captions and thumbnails when the gallery has none.
pub const DEFAULT_IMAGE_LABEL: &str = "Image";

/// One entry of the grid surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    /// Zero-based position in the gallery. Choosing this thumbnail opens
    /// direct mode at exactly this index.
    pub position: usize,
    pub src: &'a str,
    /// `"{label} {position + 1}"`.
    pub label: String,
}

/// Owner of the single gallery session of a page.
#[derive(Debug, Clone, Default)]
pub struct GalleryViewer {
    session: GallerySession,
}

impl GalleryViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> &GallerySession {
        &self.session
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.mode() != Mode::Closed
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        self.session.images()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.session.label()
    }

    /// Current image index, only defined in direct mode.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.mode() {
            Mode::Direct => Some(self.session.raw_index()),
            Mode::Closed | Mode::Grid => None,
        }
    }

    /// Source of the image shown in direct mode.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.index()
            .and_then(|index| self.images().get(index))
            .map(String::as_str)
    }

    /// Accessible text for the displayed image.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        match self.mode() {
            Mode::Closed => "",
            Mode::Direct | Mode::Grid => label_or_default(self.label()),
        }
    }

    /// `"{position}/{count}"` for galleries of more than one image, empty otherwise.
    #[must_use]
    pub fn caption(&self) -> String {
        let count = self.images().len();
        match self.index() {
            Some(index) if count > 1 => format!("{}/{}", index + 1, count),
            _ => String::new(),
        }
    }

    /// Thumbnails of the grid surface. Empty unless in grid mode.
    pub fn thumbnails(&self) -> impl Iterator<Item = Thumbnail<'_>> + '_ {
        let in_grid = self.mode() == Mode::Grid;
        let label = label_or_default(self.label());
        self.images()
            .iter()
            .enumerate()
            .filter(move |_| in_grid)
            .map(move |(position, src)| Thumbnail {
                position,
                src: src.as_str(),
                label: format!("{} {}", label, position + 1),
            })
    }

    /// Shows `images` one at a time starting at `start_index`.
    ///
    /// Out-of-range start indices are clamped into `[0, len - 1]`. An empty
    /// list leaves the viewer untouched and returns `false`.
    pub fn open_direct(&mut self, images: Vec<String>, start_index: i64, label: &str) -> bool {
        if images.is_empty() {
            return false;
        }
        let last = images.len() - 1;
        let index = usize::try_from(start_index.max(0)).map_or(last, |index| index.min(last));
        debug!(count = images.len(), index, "gallery opened in direct mode");
        self.session = GallerySession::direct(images, index, label.to_string());
        true
    }

    /// Shows every image of `images` as a thumbnail. An empty list is ignored.
    pub fn open_grid(&mut self, images: Vec<String>, label: &str) -> bool {
        if images.is_empty() {
            return false;
        }
        debug!(count = images.len(), "gallery opened in grid mode");
        self.session = GallerySession::grid(images, label.to_string());
        true
    }

    /// Leaves grid mode for direct mode at `position`.
    ///
    /// Behaves exactly like [`open_direct`](Self::open_direct) with the grid's
    /// own images and label. Ignored outside grid mode.
    pub fn choose_thumbnail(&mut self, position: usize) -> bool {
        if self.mode() != Mode::Grid {
            return false;
        }
        let (images, label) = self.session.take();
        let start = i64::try_from(position).unwrap_or(i64::MAX);
        self.open_direct(images, start, &label)
    }

    /// Steps back one image, wrapping from the first to the last.
    pub fn previous(&mut self) -> bool {
        let Some(index) = self.index() else {
            return false;
        };
        let count = self.images().len();
        self.session.set_index((index + count - 1) % count);
        true
    }

    /// Steps forward one image, wrapping from the last to the first.
    pub fn next(&mut self) -> bool {
        let Some(index) = self.index() else {
            return false;
        };
        let count = self.images().len();
        self.session.set_index((index + 1) % count);
        true
    }

    /// Clears the session. Closing a closed viewer does nothing.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        debug!("gallery closed");
        self.session = GallerySession::default();
        true
    }
}

fn label_or_default(label: &str) -> &str {
    if label.is_empty() {
        DEFAULT_IMAGE_LABEL
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img{i}.jpg")).collect()
    }

    #[test]
    fn starts_closed() {
        let viewer = GalleryViewer::new();
        assert_eq!(viewer.mode(), Mode::Closed);
        assert_eq!(viewer.index(), None);
        assert_eq!(viewer.current_image(), None);
        assert_eq!(viewer.caption(), "");
        assert_eq!(viewer.alt_text(), "");
    }

    #[test]
    fn open_direct_clamps_start_index() {
        let mut viewer = GalleryViewer::new();
        viewer.open_direct(images(&["a.jpg", "b.jpg", "c.jpg"]), 5, "X");

        assert_eq!(viewer.mode(), Mode::Direct);
        assert_eq!(viewer.index(), Some(2));
        assert_eq!(viewer.caption(), "3/3");
        assert_eq!(viewer.current_image(), Some("c.jpg"));
        assert_eq!(viewer.alt_text(), "X");
    }

    #[test]
    fn open_direct_clamps_for_every_start_index() {
        for len in 1..=5usize {
            for start in -3i64..8 {
                let mut viewer = GalleryViewer::new();
                viewer.open_direct(numbered(len), start, "");
                let expected = start.clamp(0, len as i64 - 1) as usize;
                assert_eq!(viewer.index(), Some(expected), "len={len} start={start}");
                assert!(viewer.session().is_consistent());
            }
        }
    }

    #[test]
    fn open_direct_handles_extreme_start_indices() {
        let mut viewer = GalleryViewer::new();
        viewer.open_direct(numbered(4), i64::MAX, "");
        assert_eq!(viewer.index(), Some(3));

        viewer.open_direct(numbered(4), i64::MIN, "");
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn grid_thumbnail_choice_opens_direct_at_same_position() {
        let mut viewer = GalleryViewer::new();
        viewer.open_grid(images(&["a.jpg", "b.jpg"]), "News");
        assert_eq!(viewer.mode(), Mode::Grid);
        assert_eq!(viewer.index(), None);

        assert!(viewer.choose_thumbnail(1));
        assert_eq!(viewer.mode(), Mode::Direct);
        assert_eq!(viewer.index(), Some(1));
        assert_eq!(viewer.caption(), "2/2");
        assert_eq!(viewer.label(), "News");
    }

    #[test]
    fn every_thumbnail_maps_to_its_own_index() {
        for len in 1..=6usize {
            for position in 0..len {
                let mut viewer = GalleryViewer::new();
                viewer.open_grid(numbered(len), "G");
                viewer.choose_thumbnail(position);
                assert_eq!(viewer.index(), Some(position));
                assert_eq!(viewer.current_image(), Some(format!("img{position}.jpg").as_str()));
            }
        }
    }

    #[test]
    fn thumbnails_are_labelled_one_based() {
        let mut viewer = GalleryViewer::new();
        viewer.open_grid(numbered(3), "");
        let labels: Vec<_> = viewer.thumbnails().map(|t| t.label).collect();
        assert_eq!(labels, ["Image 1", "Image 2", "Image 3"]);

        viewer.open_grid(numbered(2), "Derby day");
        let thumbs: Vec<_> = viewer.thumbnails().collect();
        assert_eq!(thumbs[1].label, "Derby day 2");
        assert_eq!(thumbs[1].position, 1);
        assert_eq!(thumbs[1].src, "img1.jpg");
    }

    #[test]
    fn thumbnails_are_empty_outside_grid() {
        let mut viewer = GalleryViewer::new();
        assert_eq!(viewer.thumbnails().count(), 0);
        viewer.open_direct(numbered(3), 0, "");
        assert_eq!(viewer.thumbnails().count(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut viewer = GalleryViewer::new();
        viewer.open_direct(numbered(3), 0, "");
        assert!(viewer.previous());
        assert_eq!(viewer.index(), Some(2));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut viewer = GalleryViewer::new();
        viewer.open_direct(numbered(3), 2, "");
        viewer.next();
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn next_then_previous_round_trips() {
        for len in 1..=5usize {
            for start in 0..len {
                let mut viewer = GalleryViewer::new();
                viewer.open_direct(numbered(len), start as i64, "");
                viewer.next();
                viewer.previous();
                assert_eq!(viewer.index(), Some(start));
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=5usize {
            let mut viewer = GalleryViewer::new();
            viewer.open_direct(numbered(len), 1, "");
            let start = viewer.index();
            for _ in 0..len {
                viewer.next();
            }
            assert_eq!(viewer.index(), start);
            for _ in 0..len {
                viewer.previous();
            }
            assert_eq!(viewer.index(), start);
        }
    }

    #[test]
    fn navigation_is_ignored_outside_direct_mode() {
        let mut viewer = GalleryViewer::new();
        assert!(!viewer.next());
        assert!(!viewer.previous());
        assert_eq!(viewer.mode(), Mode::Closed);

        viewer.open_grid(numbered(3), "");
        assert!(!viewer.next());
        assert!(!viewer.previous());
        assert_eq!(viewer.mode(), Mode::Grid);
    }

    #[test]
    fn choose_thumbnail_is_ignored_outside_grid() {
        let mut viewer = GalleryViewer::new();
        assert!(!viewer.choose_thumbnail(0));

        viewer.open_direct(numbered(3), 2, "");
        assert!(!viewer.choose_thumbnail(0));
        assert_eq!(viewer.index(), Some(2));
    }

    #[test]
    fn close_is_idempotent() {
        let mut viewer = GalleryViewer::new();
        viewer.open_direct(numbered(2), 0, "X");
        assert!(viewer.close());
        let once = viewer.session().clone();
        assert!(!viewer.close());
        assert_eq!(viewer.session(), &once);
        assert!(viewer.images().is_empty());
        assert_eq!(viewer.label(), "");
    }

    #[test]
    fn empty_open_keeps_previous_state() {
        let mut viewer = GalleryViewer::new();
        assert!(!viewer.open_direct(Vec::new(), 0, ""));
        assert_eq!(viewer.mode(), Mode::Closed);

        viewer.open_direct(numbered(3), 1, "keep");
        let before = viewer.session().clone();
        assert!(!viewer.open_direct(Vec::new(), 0, "other"));
        assert!(!viewer.open_grid(Vec::new(), "other"));
        assert_eq!(viewer.session(), &before);

        viewer.open_grid(numbered(2), "grid");
        let before = viewer.session().clone();
        viewer.open_direct(Vec::new(), 0, "");
        assert_eq!(viewer.session(), &before);
    }

    #[test]
    fn caption_is_empty_for_single_image() {
        let mut viewer = GalleryViewer::new();
        viewer.open_direct(images(&["solo.jpg"]), 0, "Captain");
        assert_eq!(viewer.caption(), "");
        viewer.next();
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn caption_tracks_position() {
        let mut viewer = GalleryViewer::new();
        viewer.open_direct(numbered(4), 0, "");
        for expected in ["1/4", "2/4", "3/4", "4/4", "1/4"] {
            assert_eq!(viewer.caption(), expected);
            viewer.next();
        }
    }

    #[test]
    fn new_open_supersedes_current_session() {
        let mut viewer = GalleryViewer::new();
        viewer.open_grid(numbered(5), "old");
        viewer.open_direct(images(&["new.jpg"]), 0, "new");
        assert_eq!(viewer.mode(), Mode::Direct);
        assert_eq!(viewer.images(), ["new.jpg"]);
        assert_eq!(viewer.label(), "new");
    }

    #[test]
    fn alt_text_falls_back_to_default_label() {
        let mut viewer = GalleryViewer::new();
        viewer.open_direct(numbered(1), 0, "");
        assert_eq!(viewer.alt_text(), DEFAULT_IMAGE_LABEL);
    }
}
