// SPDX-License-Identifier: MPL-2.0
//! Click arbitration for the single delegated click entry point.
//!
//! [`classify`] turns a clicked [`MarkedElement`] into a [`ClickTarget`];
//! [`arbitrate`] applies that target to the viewer. Neither needs a running
//! UI, so both are tested directly.

use super::markers::{attr, class, decode_list, parse_index, MarkedElement};
use super::viewer::GalleryViewer;

/// Label used for news galleries whose image has no alt text.
pub const DEFAULT_NEWS_LABEL: &str = "News image";

/// What a click on an element means for the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A portrait, or a news item with a single image.
    SingleImage { src: String, label: String },
    /// A news item with several images. `start_index` is the image the
    /// element was showing when clicked.
    MultiImage {
        images: Vec<String>,
        start_index: usize,
        label: String,
    },
    CloseBackdrop,
    NavPrevious,
    NavNext,
    /// Anything else. Must not be intercepted.
    None,
}

/// Outcome of applying a click to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arbitration {
    /// No state change.
    Ignored,
    Handled,
    /// A grid was opened and the thumbnail at this position should be
    /// scrolled into view.
    RevealThumbnail(usize),
}

impl Arbitration {
    #[must_use]
    pub fn is_handled(self) -> bool {
        !matches!(self, Arbitration::Ignored)
    }

    #[must_use]
    pub fn reveal(self) -> Option<usize> {
        match self {
            Arbitration::RevealThumbnail(position) => Some(position),
            Arbitration::Ignored | Arbitration::Handled => None,
        }
    }
}

/// Classifies a clicked element by its marker classes and attributes.
#[must_use]
pub fn classify(element: &MarkedElement) -> ClickTarget {
    if element.has_class(class::PLAYER_IMAGE) || element.has_class(class::OWNER_IMAGE) {
        return match element.attribute(attr::SRC) {
            Some(src) if !src.is_empty() => ClickTarget::SingleImage {
                src: src.to_string(),
                label: element.attribute(attr::ALT).unwrap_or_default().to_string(),
            },
            _ => ClickTarget::None,
        };
    }

    if element.has_class(class::NEWS_IMAGE) {
        let mut images = decode_list(element.attribute(attr::IMAGES).unwrap_or_default());
        let start_index = element.attribute(attr::IMAGE_INDEX).map_or(0, parse_index);
        let label = match element.attribute(attr::ALT) {
            Some(alt) if !alt.is_empty() => alt.to_string(),
            _ => DEFAULT_NEWS_LABEL.to_string(),
        };
        return match images.len() {
            0 => ClickTarget::None,
            1 => ClickTarget::SingleImage {
                src: images.remove(0),
                label,
            },
            _ => ClickTarget::MultiImage {
                images,
                start_index,
                label,
            },
        };
    }

    if element.has_class(class::BACKDROP) {
        ClickTarget::CloseBackdrop
    } else if element.has_class(class::PREVIOUS) {
        ClickTarget::NavPrevious
    } else if element.has_class(class::NEXT) {
        ClickTarget::NavNext
    } else {
        ClickTarget::None
    }
}

/// Applies a classified click to the viewer.
pub fn arbitrate(viewer: &mut GalleryViewer, target: ClickTarget) -> Arbitration {
    let changed = match target {
        ClickTarget::SingleImage { src, label } => viewer.open_direct(vec![src], 0, &label),
        ClickTarget::MultiImage {
            images,
            start_index,
            label,
        } => {
            return if viewer.open_grid(images, &label) {
                Arbitration::RevealThumbnail(start_index)
            } else {
                Arbitration::Ignored
            };
        }
        ClickTarget::CloseBackdrop => viewer.close(),
        ClickTarget::NavPrevious => viewer.previous(),
        ClickTarget::NavNext => viewer.next(),
        ClickTarget::None => false,
    };

    if changed {
        Arbitration::Handled
    } else {
        Arbitration::Ignored
    }
}
