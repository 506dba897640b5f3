// SPDX-License-Identifier: MPL-2.0
//! `pitchside` is a cricket club website built with the Iced GUI framework.
//!
//! Its core is an image lightbox: a gallery viewer with direct and grid
//! modes driven by click, keyboard and external open requests. Around it,
//! the page renders the squad, owners, news, fixtures and links from the
//! site's JSON documents, with Fluent localization and persisted settings.

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod site;
pub mod ui;
