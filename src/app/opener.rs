// SPDX-License-Identifier: MPL-2.0
//! Hands external links to the platform's default handler.

use std::io;
use std::process::Command;

/// Link prefixes the system opener is allowed to receive.
const OPENABLE_PREFIXES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Opens a link outside the application.
pub trait LinkOpener {
    fn open(&self, href: &str) -> io::Result<()>;
}

/// Opens links with `open`, `explorer` or `xdg-open`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, href: &str) -> io::Result<()> {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        };
        Command::new(program).arg(href).spawn().map(|_| ())
    }
}

/// Web and mail links only; anything else stays inside the page.
#[must_use]
pub fn is_openable(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    OPENABLE_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}
