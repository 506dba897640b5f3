// SPDX-License-Identifier: MPL-2.0
//! Lightbox installation against the page's surface layout.
//!
//! The root surface and its backdrop are mandatory. When either is absent
//! the lightbox is never installed and the page runs without one; this is
//! decided once, at startup, instead of being rechecked on every event.

use super::input::{self, Arbitration};
use super::keyboard::{self, KeyCommand};
use super::markers::MarkedElement;
use super::request::OpenGalleryRequest;
use super::viewer::GalleryViewer;
use tracing::{info, warn};

/// Which lightbox surfaces the page provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    /// Root viewer surface. Mandatory.
    pub root: bool,
    /// Click-to-close backdrop. Mandatory.
    pub backdrop: bool,
    /// Caption under the displayed image.
    pub caption: bool,
    /// Previous/next buttons.
    pub controls: bool,
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self {
            root: true,
            backdrop: true,
            caption: true,
            controls: true,
        }
    }
}

impl SurfaceLayout {
    #[must_use]
    pub fn is_installable(self) -> bool {
        self.root && self.backdrop
    }
}

/// An installed lightbox: the gallery viewer plus the surfaces it renders into.
#[derive(Debug, Clone)]
pub struct Lightbox {
    viewer: GalleryViewer,
    layout: SurfaceLayout,
}

impl Lightbox {
    /// Installs a lightbox, or returns `None` if a mandatory surface is missing.
    #[must_use]
    pub fn install(layout: SurfaceLayout) -> Option<Self> {
        if !layout.is_installable() {
            warn!(
                root = layout.root,
                backdrop = layout.backdrop,
                "lightbox surfaces missing, lightbox disabled"
            );
            return None;
        }
        info!(
            caption = layout.caption,
            controls = layout.controls,
            "lightbox installed"
        );
        Some(Self {
            viewer: GalleryViewer::new(),
            layout,
        })
    }

    #[must_use]
    pub fn viewer(&self) -> &GalleryViewer {
        &self.viewer
    }

    #[must_use]
    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    /// Delegated click entry point.
    pub fn click(&mut self, element: &MarkedElement) -> Arbitration {
        input::arbitrate(&mut self.viewer, input::classify(element))
    }

    pub fn key(&mut self, command: KeyCommand) -> bool {
        keyboard::apply(&mut self.viewer, command)
    }

    pub fn choose_thumbnail(&mut self, position: usize) -> bool {
        self.viewer.choose_thumbnail(position)
    }

    pub fn request(&mut self, request: OpenGalleryRequest) -> bool {
        request.apply(&mut self.viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::markers::{class, ImageMarkers, ImageRole};
    use crate::gallery::Mode;

    #[test]
    fn default_layout_installs() {
        let lightbox = Lightbox::install(SurfaceLayout::default()).expect("installable");
        assert_eq!(lightbox.viewer().mode(), Mode::Closed);
    }

    #[test]
    fn missing_backdrop_or_root_disables_lightbox() {
        let no_backdrop = SurfaceLayout {
            backdrop: false,
            ..SurfaceLayout::default()
        };
        let no_root = SurfaceLayout {
            root: false,
            ..SurfaceLayout::default()
        };
        assert!(Lightbox::install(no_backdrop).is_none());
        assert!(Lightbox::install(no_root).is_none());
    }

    #[test]
    fn optional_surfaces_do_not_block_install() {
        let bare = SurfaceLayout {
            caption: false,
            controls: false,
            ..SurfaceLayout::default()
        };
        let lightbox = Lightbox::install(bare).expect("installable");
        assert!(!lightbox.layout().caption);
    }

    #[test]
    fn click_then_backdrop_round_trip() {
        let mut lightbox = Lightbox::install(SurfaceLayout::default()).expect("installable");
        let portrait = ImageMarkers::single(ImageRole::Player, "p.jpg", "Jo").to_element();

        assert!(lightbox.click(&portrait).is_handled());
        assert!(lightbox.is_open());

        let backdrop = MarkedElement::new().with_class(class::BACKDROP);
        assert!(lightbox.click(&backdrop).is_handled());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn request_and_keys_reach_viewer() {
        let mut lightbox = Lightbox::install(SurfaceLayout::default()).expect("installable");
        lightbox.request(OpenGalleryRequest::new(vec!["a".into(), "b".into()]));
        assert!(lightbox.key(KeyCommand::Next));
        assert_eq!(lightbox.viewer().index(), Some(1));
        assert!(lightbox.key(KeyCommand::Close));
        assert!(!lightbox.key(KeyCommand::Close));
    }
}
