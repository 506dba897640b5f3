// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::{KeyCommand, MarkedElement, OpenGalleryRequest, RequestEvent};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A marked element was pressed, on the page or inside the lightbox.
    Clicked(MarkedElement),
    /// A grid thumbnail was chosen.
    ThumbnailChosen(usize),
    /// Lightbox key press not captured by any widget.
    Key(KeyCommand),
    /// Event from the external open-gallery channel.
    GalleryRequest(RequestEvent),
    News(NewsMessage),
    /// An external link was activated.
    OpenLink(String),
    Tick(Instant), // Periodic tick for carousel rotation
}

/// News carousel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsMessage {
    Previous,
    Next,
    Select(usize),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-AU`).
    pub lang: Option<String>,
    /// Optional site directory holding `data/` and `assets/`.
    /// Takes precedence over the `[site]` section of the settings file.
    pub site_dir: Option<String>,
    /// Gallery to open through the request channel once it is ready.
    pub open: Option<OpenGalleryRequest>,
}
