// SPDX-License-Identifier: MPL-2.0
//! Marker attributes carried by renderer-produced image elements.
//!
//! Renderers describe what an image means with a typed [`ImageMarkers`] and
//! turn it into a [`MarkedElement`] when they build the page. The click
//! classifier only ever sees the element, never the renderer, so the two
//! sides share nothing but the class and attribute names below.
//!
//! Multi-image galleries are flattened to a pipe-delimited string here and
//! nowhere else. Sources containing `|` cannot be represented.

use std::collections::BTreeMap;

/// Class names the click classifier recognizes.
pub mod class {
    pub const PLAYER_IMAGE: &str = "player-img";
    pub const OWNER_IMAGE: &str = "owner-img";
    pub const NEWS_IMAGE: &str = "news-image";
    pub const BACKDROP: &str = "image-lightbox-backdrop";
    pub const PREVIOUS: &str = "lightbox-prev";
    pub const NEXT: &str = "lightbox-next";
}

/// Attribute names the click classifier reads.
pub mod attr {
    pub const SRC: &str = "src";
    pub const ALT: &str = "alt";
    pub const IMAGES: &str = "data-images";
    pub const IMAGE_INDEX: &str = "data-img-index";
}

/// Separator used by [`attr::IMAGES`].
pub const LIST_DELIMITER: char = '|';

/// Opaque reference to a clickable element: a set of classes plus string
/// attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedElement {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl MarkedElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element carrying a single class, e.g. the lightbox backdrop.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// What a renderer-produced image stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// Squad member portrait.
    Player,
    /// Club owner portrait.
    Owner,
    /// News item image, possibly one of several.
    News,
}

impl ImageRole {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ImageRole::Player => class::PLAYER_IMAGE,
            ImageRole::Owner => class::OWNER_IMAGE,
            ImageRole::News => class::NEWS_IMAGE,
        }
    }
}

/// Typed markers for one image element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMarkers {
    role: ImageRole,
    alt: String,
    gallery: Vec<String>,
    preferred_index: usize,
}

impl ImageMarkers {
    /// Markers for a single-subject portrait.
    #[must_use]
    pub fn single(role: ImageRole, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            role,
            alt: alt.into(),
            gallery: vec![src.into()],
            preferred_index: 0,
        }
    }

    /// Markers for a news image that belongs to `gallery`, currently showing
    /// `preferred_index`. The index is clamped into the gallery.
    #[must_use]
    pub fn news(gallery: Vec<String>, preferred_index: usize, alt: impl Into<String>) -> Self {
        let preferred_index = preferred_index.min(gallery.len().saturating_sub(1));
        Self {
            role: ImageRole::News,
            alt: alt.into(),
            gallery,
            preferred_index,
        }
    }

    #[must_use]
    pub fn role(&self) -> ImageRole {
        self.role
    }

    /// Source of the image the element displays.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.gallery.get(self.preferred_index).map(String::as_str)
    }

    #[must_use]
    pub fn gallery(&self) -> &[String] {
        &self.gallery
    }

    #[must_use]
    pub fn preferred_index(&self) -> usize {
        self.preferred_index
    }

    /// Encodes the markers as element classes and attributes.
    #[must_use]
    pub fn to_element(&self) -> MarkedElement {
        let mut element = MarkedElement::new()
            .with_class(self.role.class())
            .with_attribute(attr::ALT, self.alt.clone());
        if let Some(src) = self.src() {
            element = element.with_attribute(attr::SRC, src);
        }
        if self.role == ImageRole::News {
            element = element
                .with_attribute(attr::IMAGES, encode_list(&self.gallery))
                .with_attribute(attr::IMAGE_INDEX, self.preferred_index.to_string());
        }
        element
    }
}

/// Joins sources with [`LIST_DELIMITER`].
#[must_use]
pub fn encode_list(images: &[String]) -> String {
    let mut encoded = String::new();
    for (i, image) in images.iter().enumerate() {
        if i > 0 {
            encoded.push(LIST_DELIMITER);
        }
        encoded.push_str(image);
    }
    encoded
}

/// Splits a delimited list, trimming entries and dropping empty ones.
#[must_use]
pub fn decode_list(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the leading decimal integer of `raw`. Anything unparseable or
/// negative yields 0.
#[must_use]
pub fn parse_index(raw: &str) -> usize {
    let trimmed = raw.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}
