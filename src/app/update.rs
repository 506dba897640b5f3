// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers borrow only the parts of the application state they need through
//! [`UpdateContext`], which keeps them testable without a running window.

use super::opener::{self, LinkOpener};
use super::{Message, NewsMessage};
use crate::gallery::{
    Arbitration, GalleryRequestSender, KeyCommand, Lightbox, MarkedElement, OpenGalleryRequest,
    RequestEvent,
};
use crate::site::NewsCarousel;
use crate::ui::lightbox::{reveal_offset, GRID_COLUMNS, THUMBS_ID};
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;
use tracing::{debug, warn};

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    /// `None` when the lightbox could not be installed.
    pub lightbox: &'a mut Option<Lightbox>,
    pub carousel: &'a mut NewsCarousel,
    pub request_sender: &'a mut Option<GalleryRequestSender>,
    /// Requests queued before the channel came up.
    pub pending_requests: &'a mut Vec<OpenGalleryRequest>,
    pub opener: &'a dyn LinkOpener,
}

/// Routes a click through the lightbox's click arbitration.
pub fn handle_click(ctx: &mut UpdateContext<'_>, element: &MarkedElement) -> Task<Message> {
    let Some(lightbox) = ctx.lightbox.as_mut() else {
        return Task::none();
    };
    match lightbox.click(element) {
        Arbitration::RevealThumbnail(position) => {
            reveal_thumbnail(position, lightbox.viewer().images().len())
        }
        Arbitration::Handled | Arbitration::Ignored => Task::none(),
    }
}

/// Scrolls the thumbnail grid so `position` is visible.
fn reveal_thumbnail(position: usize, count: usize) -> Task<Message> {
    operation::snap_to(
        Id::new(THUMBS_ID),
        reveal_offset(position, count, GRID_COLUMNS),
    )
}

pub fn handle_thumbnail(ctx: &mut UpdateContext<'_>, position: usize) -> Task<Message> {
    if let Some(lightbox) = ctx.lightbox.as_mut() {
        lightbox.choose_thumbnail(position);
    }
    Task::none()
}

pub fn handle_key(ctx: &mut UpdateContext<'_>, command: KeyCommand) -> Task<Message> {
    if let Some(lightbox) = ctx.lightbox.as_mut() {
        let consumed = lightbox.key(command);
        debug!(?command, consumed, "lightbox key");
    }
    Task::none()
}

pub fn handle_gallery_request(ctx: &mut UpdateContext<'_>, event: RequestEvent) -> Task<Message> {
    match event {
        RequestEvent::Ready(sender) => {
            for request in ctx.pending_requests.drain(..) {
                if !sender.open(request) {
                    warn!("gallery request channel closed before startup request was sent");
                }
            }
            *ctx.request_sender = Some(sender);
        }
        RequestEvent::Open(request) => {
            if let Some(lightbox) = ctx.lightbox.as_mut() {
                lightbox.request(request);
            }
        }
    }
    Task::none()
}

pub fn handle_news(ctx: &mut UpdateContext<'_>, message: NewsMessage) -> Task<Message> {
    let now = Instant::now();
    match message {
        NewsMessage::Previous => ctx.carousel.previous(now),
        NewsMessage::Next => ctx.carousel.next(now),
        NewsMessage::Select(slide) => ctx.carousel.select(slide, now),
    }
    Task::none()
}

pub fn handle_open_link(ctx: &mut UpdateContext<'_>, href: &str) -> Task<Message> {
    if !opener::is_openable(href) {
        warn!(href, "link not opened, unsupported scheme");
        return Task::none();
    }
    match ctx.opener.open(href) {
        Ok(()) => debug!(href, "link opened"),
        Err(err) => warn!(href, error = %err, "failed to open link"),
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.carousel.tick(now);
    Task::none()
}

/// Dispatches a message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Clicked(element) => handle_click(ctx, &element),
        Message::ThumbnailChosen(position) => handle_thumbnail(ctx, position),
        Message::Key(command) => handle_key(ctx, command),
        Message::GalleryRequest(event) => handle_gallery_request(ctx, event),
        Message::News(news_message) => handle_news(ctx, news_message),
        Message::OpenLink(href) => handle_open_link(ctx, &href),
        Message::Tick(now) => handle_tick(ctx, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::markers::class;
    use crate::gallery::{ImageMarkers, Mode, SurfaceLayout};
    use std::cell::RefCell;
    use std::io;
    use std::time::Duration;

    /// Records links instead of launching anything.
    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, href: &str) -> io::Result<()> {
            self.opened.borrow_mut().push(href.to_string());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::NotFound, "no handler"))
            } else {
                Ok(())
            }
        }
    }

    struct Fixture {
        lightbox: Option<Lightbox>,
        carousel: NewsCarousel,
        request_sender: Option<GalleryRequestSender>,
        pending_requests: Vec<OpenGalleryRequest>,
        opener: RecordingOpener,
    }

    impl Fixture {
        fn new(layout: SurfaceLayout) -> Self {
            Self {
                lightbox: Lightbox::install(layout),
                carousel: NewsCarousel::new(
                    vec![1, 3],
                    Duration::from_secs(7),
                    Duration::from_secs(2),
                    Instant::now(),
                ),
                request_sender: None,
                pending_requests: Vec::new(),
                opener: RecordingOpener::default(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                lightbox: &mut self.lightbox,
                carousel: &mut self.carousel,
                request_sender: &mut self.request_sender,
                pending_requests: &mut self.pending_requests,
                opener: &self.opener,
            }
        }

        fn mode(&self) -> Option<Mode> {
            self.lightbox.as_ref().map(|lightbox| lightbox.viewer().mode())
        }
    }

    fn news_element(images: &[&str], index: usize) -> MarkedElement {
        ImageMarkers::news(
            images.iter().map(|s| (*s).to_string()).collect(),
            index,
            "Final",
        )
        .to_element()
    }

    #[test]
    fn news_click_opens_grid_then_thumbnail_opens_direct() {
        let mut fixture = Fixture::new(SurfaceLayout::default());
        let _ = update(
            &mut fixture.ctx(),
            Message::Clicked(news_element(&["a.jpg", "b.jpg"], 1)),
        );
        assert_eq!(fixture.mode(), Some(Mode::Grid));

        let _ = update(&mut fixture.ctx(), Message::ThumbnailChosen(1));
        assert_eq!(fixture.mode(), Some(Mode::Direct));
        let viewer = fixture.lightbox.as_ref().map(Lightbox::viewer);
        assert_eq!(viewer.and_then(|v| v.index()), Some(1));
    }

    #[test]
    fn escape_closes_and_backdrop_click_is_idempotent() {
        let mut fixture = Fixture::new(SurfaceLayout::default());
        let _ = update(
            &mut fixture.ctx(),
            Message::Clicked(news_element(&["a.jpg"], 0)),
        );
        assert_eq!(fixture.mode(), Some(Mode::Direct));

        let _ = update(&mut fixture.ctx(), Message::Key(KeyCommand::Close));
        assert_eq!(fixture.mode(), Some(Mode::Closed));

        let backdrop = MarkedElement::new().with_class(class::BACKDROP);
        let _ = update(&mut fixture.ctx(), Message::Clicked(backdrop));
        assert_eq!(fixture.mode(), Some(Mode::Closed));
    }

    #[test]
    fn messages_are_ignored_without_a_lightbox() {
        let mut fixture = Fixture::new(SurfaceLayout {
            backdrop: false,
            ..SurfaceLayout::default()
        });
        assert!(fixture.lightbox.is_none());
        let _ = update(
            &mut fixture.ctx(),
            Message::Clicked(news_element(&["a.jpg", "b.jpg"], 0)),
        );
        let _ = update(&mut fixture.ctx(), Message::Key(KeyCommand::Next));
        assert!(fixture.lightbox.is_none());
    }

    #[test]
    fn external_request_opens_direct_mode() {
        let mut fixture = Fixture::new(SurfaceLayout::default());
        let request = OpenGalleryRequest::new(vec!["x.jpg".into(), "y.jpg".into()])
            .with_start_index(9);
        let _ = update(
            &mut fixture.ctx(),
            Message::GalleryRequest(RequestEvent::Open(request)),
        );
        let viewer = fixture.lightbox.as_ref().map(Lightbox::viewer);
        assert_eq!(viewer.map(|v| v.caption()), Some("2/2".to_string()));
    }

    #[test]
    fn news_controls_move_the_carousel_only() {
        let mut fixture = Fixture::new(SurfaceLayout::default());
        let _ = update(&mut fixture.ctx(), Message::News(NewsMessage::Previous));
        assert_eq!(fixture.carousel.current(), 1);
        let _ = update(&mut fixture.ctx(), Message::News(NewsMessage::Select(0)));
        assert_eq!(fixture.carousel.current(), 0);
        assert_eq!(fixture.mode(), Some(Mode::Closed));
    }

    #[test]
    fn open_link_hands_web_and_mail_links_to_the_opener() {
        let mut fixture = Fixture::new(SurfaceLayout::default());
        let _ = update(
            &mut fixture.ctx(),
            Message::OpenLink("https://facebook.example/club".into()),
        );
        let _ = update(
            &mut fixture.ctx(),
            Message::OpenLink("mailto:secretary@example.org".into()),
        );
        assert_eq!(
            *fixture.opener.opened.borrow(),
            ["https://facebook.example/club", "mailto:secretary@example.org"]
        );
        assert_eq!(fixture.mode(), Some(Mode::Closed));
    }

    #[test]
    fn open_link_skips_local_targets_and_survives_opener_failure() {
        let mut fixture = Fixture::new(SurfaceLayout::default());
        let _ = update(
            &mut fixture.ctx(),
            Message::OpenLink("file:///etc/passwd".into()),
        );
        assert!(fixture.opener.opened.borrow().is_empty());

        fixture.opener.fail = true;
        let _ = update(
            &mut fixture.ctx(),
            Message::OpenLink("https://example.org".into()),
        );
        assert_eq!(*fixture.opener.opened.borrow(), ["https://example.org"]);
    }
}
