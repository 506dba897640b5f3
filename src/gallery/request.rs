// SPDX-License-Identifier: MPL-2.0
//! External "open gallery" requests.
//!
//! Any part of the program (or an embedding application) holding a
//! [`GalleryRequestSender`] can ask the lightbox to open a gallery without
//! knowing anything about it. Requests travel over an unbounded `tokio`
//! channel that an Iced subscription drains into the update loop.

use super::viewer::GalleryViewer;
use futures_util::{SinkExt, Stream};
use iced::futures::channel::mpsc as mpsc_sink;
use iced::Subscription;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Request to open `images` in direct mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGalleryRequest {
    pub images: Vec<String>,
    #[serde(default)]
    pub start_index: Option<i64>,
    #[serde(default)]
    pub label: Option<String>,
}

impl OpenGalleryRequest {
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_start_index(mut self, start_index: i64) -> Self {
        self.start_index = Some(start_index);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Opens the request in `viewer`. Empty requests are ignored.
    pub fn apply(self, viewer: &mut GalleryViewer) -> bool {
        let label = self.label.unwrap_or_default();
        viewer.open_direct(self.images, self.start_index.unwrap_or(0), &label)
    }
}

/// Cloneable handle used to submit [`OpenGalleryRequest`]s.
#[derive(Debug, Clone)]
pub struct GalleryRequestSender(mpsc::UnboundedSender<OpenGalleryRequest>);

impl GalleryRequestSender {
    /// Queues a request. Returns `false` if the lightbox is gone.
    pub fn open(&self, request: OpenGalleryRequest) -> bool {
        self.0.send(request).is_ok()
    }
}

/// Receiving half, owned by the subscription.
#[derive(Debug)]
pub struct GalleryRequestReceiver(mpsc::UnboundedReceiver<OpenGalleryRequest>);

impl GalleryRequestReceiver {
    pub async fn recv(&mut self) -> Option<OpenGalleryRequest> {
        self.0.recv().await
    }
}

/// Creates a connected sender/receiver pair.
#[must_use]
pub fn channel() -> (GalleryRequestSender, GalleryRequestReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (GalleryRequestSender(sender), GalleryRequestReceiver(receiver))
}

/// Events produced by [`subscription`].
#[derive(Debug, Clone)]
pub enum RequestEvent {
    /// The channel is up; hand this sender to whoever needs it.
    Ready(GalleryRequestSender),
    Open(OpenGalleryRequest),
}

/// Long-lived subscription owning the request channel.
pub fn subscription() -> Subscription<RequestEvent> {
    Subscription::run(listen)
}

fn listen() -> impl Stream<Item = RequestEvent> {
    iced::stream::channel(16, |mut output: mpsc_sink::Sender<RequestEvent>| async move {
        let (sender, mut receiver) = channel();
        if output.send(RequestEvent::Ready(sender)).await.is_err() {
            return;
        }
        info!("gallery request channel ready");

        while let Some(request) = receiver.recv().await {
            debug!(count = request.images.len(), "external gallery request");
            if output.send(RequestEvent::Open(request)).await.is_err() {
                break;
            }
        }
        info!("gallery request channel closed");
    })
}
