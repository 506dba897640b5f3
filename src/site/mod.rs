// SPDX-License-Identifier: MPL-2.0
//! Page content read from the site directory.
//!
//! Every region loads its own document and degrades on its own. The
//! lightbox only ever sees the marked image elements these regions render.

pub mod carousel;
pub mod document;
pub mod embed;
pub mod fixtures;
pub mod links;
pub mod news;
pub mod owners;
pub mod squad;

pub use carousel::{NewsCarousel, RotationTimer};
pub use document::Region;

use crate::app::config::{LinksConfig, NewsConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Everything the page renders.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub squad: Region<squad::Squad>,
    pub owners: Region<Vec<owners::Owner>>,
    pub news: Region<Vec<news::NewsItem>>,
    pub carousel: NewsCarousel,
    pub fixtures: Region<fixtures::Schedule>,
    pub tournament: Option<embed::Tournament>,
    pub links: Vec<links::ExternalLink>,
}

impl Site {
    /// Loads every region under `root`.
    #[must_use]
    pub fn load(root: &Path, news_config: &NewsConfig, links_config: &LinksConfig) -> Self {
        let news = news::load(root);
        let image_counts = news
            .ready()
            .map(|items| items.iter().map(|item| item.images.len()).collect())
            .unwrap_or_default();
        let carousel = NewsCarousel::new(
            image_counts,
            news_config.auto_rotate(),
            news_config.image_rotate(),
            Instant::now(),
        );

        let site = Self {
            root: root.to_path_buf(),
            squad: squad::load(root),
            owners: owners::load(root),
            news,
            carousel,
            fixtures: fixtures::load(root),
            tournament: embed::load(root),
            links: links::collect(links_config),
        };
        info!(
            root = %root.display(),
            slides = site.carousel.len(),
            tournament = site.tournament.is_some(),
            "site loaded"
        );
        site
    }
}
