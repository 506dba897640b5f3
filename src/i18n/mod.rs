// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Translation files are embedded at
//! build time; the locale is resolved from the CLI, the settings file, then
//! the OS, falling back to `en-AU`. Keys missing from the active locale are
//! looked up in `en-AU` before being reported as missing.

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
