// SPDX-License-Identifier: MPL-2.0
//! Image lightbox with direct and grid modes.
//!
//! - [`viewer`] - the `Closed`/`Direct`/`Grid` state machine
//! - [`markers`] - marker attributes renderers put on clickable images
//! - [`input`] - click classification and arbitration
//! - [`keyboard`] - `Escape` and arrow keys
//! - [`request`] - external open-gallery requests
//! - [`surface`] - installation against the page's surface layout

pub mod input;
pub mod keyboard;
pub mod markers;
pub mod request;
pub mod session;
pub mod surface;
pub mod viewer;

pub use input::{arbitrate, classify, Arbitration, ClickTarget};
pub use keyboard::KeyCommand;
pub use markers::{ImageMarkers, ImageRole, MarkedElement};
pub use request::{GalleryRequestSender, OpenGalleryRequest, RequestEvent};
pub use session::{GallerySession, Mode};
pub use surface::{Lightbox, SurfaceLayout};
pub use viewer::{GalleryViewer, Thumbnail, DEFAULT_IMAGE_LABEL};
