// SPDX-License-Identifier: MPL-2.0
//! User interface: the club page and the lightbox drawn over it.
//!
//! Views follow the Elm-style "state down, messages up" pattern. They only
//! read state and emit [`crate::app::Message`]s.
//!
//! - [`page`] - Squad, owners, news carousel, fixtures, tournament and links
//! - [`lightbox`] - Backdrop, direct image view and thumbnail grid
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod lightbox;
pub mod page;
pub mod styles;
pub mod theming;
