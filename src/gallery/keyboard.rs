// SPDX-License-Identifier: MPL-2.0
//! Keyboard arbitration: `Escape` closes, arrows navigate.

use super::viewer::GalleryViewer;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Lightbox action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Previous,
    Next,
}

impl KeyCommand {
    /// Maps a pressed key to its lightbox action, if any.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(Named::Escape) => Some(KeyCommand::Close),
            Key::Named(Named::ArrowLeft) => Some(KeyCommand::Previous),
            Key::Named(Named::ArrowRight) => Some(KeyCommand::Next),
            _ => None,
        }
    }
}

/// Applies `command` if the lightbox is open.
///
/// Returns `false`, leaving the key to the rest of the page, when the
/// viewer is closed.
pub fn apply(viewer: &mut GalleryViewer, command: KeyCommand) -> bool {
    if !viewer.is_open() {
        return false;
    }
    match command {
        KeyCommand::Close => viewer.close(),
        KeyCommand::Previous => viewer.previous(),
        KeyCommand::Next => viewer.next(),
    }
}

/// Key presses no widget captured, mapped to lightbox commands.
///
/// Only subscribe while the lightbox is open.
pub fn subscription() -> Subscription<KeyCommand> {
    event::listen_with(|event, status, _window| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => KeyCommand::from_key(&key),
        _ => None,
    })
}
