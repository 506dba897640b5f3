// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Lightbox keys are only listened to while the lightbox is open, so arrows
//! and `Escape` keep their normal meaning on the page otherwise.

use super::Message;
use crate::gallery::{keyboard, request};
use crate::site::NewsCarousel;
use iced::{time, Subscription};
use std::time::Duration;

/// Granularity of carousel deadline polling.
pub const HEARTBEAT: Duration = Duration::from_millis(250);

/// Keyboard routing for an open lightbox.
pub fn create_keyboard_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        keyboard::subscription().map(Message::Key)
    } else {
        Subscription::none()
    }
}

/// The external open-gallery channel. Only installed alongside a lightbox.
pub fn create_request_subscription(lightbox_installed: bool) -> Subscription<Message> {
    if lightbox_installed {
        request::subscription().map(Message::GalleryRequest)
    } else {
        Subscription::none()
    }
}

/// Periodic tick driving the news carousel, while any of its timers is armed.
pub fn create_tick_subscription(carousel: &NewsCarousel) -> Subscription<Message> {
    if carousel.needs_ticks() {
        time::every(HEARTBEAT).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
