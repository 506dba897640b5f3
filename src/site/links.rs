// SPDX-License-Identifier: MPL-2.0
//! External social and contact links from the `[links]` settings section.

use crate::app::config::LinksConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Facebook,
    WhatsApp,
    Instagram,
    Email,
}

impl LinkKind {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LinkKind::Facebook => "link-facebook",
            LinkKind::WhatsApp => "link-whatsapp",
            LinkKind::Instagram => "link-instagram",
            LinkKind::Email => "link-email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub kind: LinkKind,
    pub href: String,
}

/// Turns a bare address into a `mailto:` link.
#[must_use]
pub fn email_href(raw: &str) -> String {
    if raw.to_ascii_lowercase().starts_with("mailto:") {
        raw.to_string()
    } else {
        format!("mailto:{}", raw)
    }
}

/// Links to show, in footer order. Empty entries are left out.
#[must_use]
pub fn collect(config: &LinksConfig) -> Vec<ExternalLink> {
    [
        (LinkKind::Facebook, config.facebook.as_deref()),
        (LinkKind::WhatsApp, config.whatsapp.as_deref()),
        (LinkKind::Instagram, config.instagram.as_deref()),
        (LinkKind::Email, config.email.as_deref()),
    ]
    .into_iter()
    .filter_map(|(kind, raw)| {
        let raw = raw.map(str::trim).filter(|raw| !raw.is_empty())?;
        let href = match kind {
            LinkKind::Email => email_href(raw),
            _ => raw.to_string(),
        };
        Some(ExternalLink { kind, href })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_links_are_hidden() {
        let config = LinksConfig {
            facebook: Some("https://facebook.example/club".into()),
            instagram: Some("  ".into()),
            ..LinksConfig::default()
        };
        let links = collect(&config);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::Facebook);
    }

    #[test]
    fn bare_email_becomes_mailto() {
        assert_eq!(email_href("club@example.org"), "mailto:club@example.org");
        assert_eq!(email_href("mailto:club@example.org"), "mailto:club@example.org");

        let config = LinksConfig {
            email: Some("club@example.org".into()),
            ..LinksConfig::default()
        };
        assert_eq!(collect(&config)[0].href, "mailto:club@example.org");
    }
}
