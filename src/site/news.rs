// SPDX-License-Identifier: MPL-2.0
//! News items from `data/news.json`.

use super::document::{lenient_list, load_region, non_empty, resolve_asset, Region, DATA_DIR};
use crate::gallery::input::DEFAULT_NEWS_LABEL;
use crate::gallery::ImageMarkers;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::path::Path;

pub const NEWS_FILE: &str = "news.json";

/// Title shown for items without one.
pub const DEFAULT_NEWS_TITLE: &str = "News item";

#[derive(Debug, Default, Deserialize)]
pub struct NewsDocument {
    #[serde(default, deserialize_with = "lenient_list")]
    items: Vec<NewsRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct NewsRecord {
    title: Option<String>,
    date: Option<String>,
    summary: Option<String>,
    link: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    /// Alt text of the slide image; the title if there is one.
    pub alt: String,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub images: Vec<String>,
}

impl NewsItem {
    /// Number of photos for the badge, shown only for multi-image items.
    #[must_use]
    pub fn photo_count(&self) -> Option<usize> {
        (self.images.len() > 1).then_some(self.images.len())
    }

    /// Markers for the slide image while it displays `displayed`.
    #[must_use]
    pub fn markers(&self, displayed: usize) -> Option<ImageMarkers> {
        (!self.images.is_empty())
            .then(|| ImageMarkers::news(self.images.clone(), displayed, self.alt.clone()))
    }
}

/// Formats a news date as `dd Mon yyyy`, or returns it verbatim if it
/// cannot be parsed.
#[must_use]
pub fn format_news_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|dt| dt.date())
        });
    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

#[must_use]
pub fn build(document: NewsDocument, site_root: &Path) -> Region<Vec<NewsItem>> {
    if document.items.is_empty() {
        return Region::Empty {
            message: "news-empty",
        };
    }
    let items = document
        .items
        .into_iter()
        .map(|record| {
            let title = non_empty(record.title.as_deref()).map(str::to_string);
            NewsItem {
                alt: title.clone().unwrap_or_else(|| DEFAULT_NEWS_LABEL.to_string()),
                title: title.unwrap_or_else(|| DEFAULT_NEWS_TITLE.to_string()),
                date: non_empty(record.date.as_deref()).map(format_news_date),
                summary: record.summary.filter(|summary| !summary.is_empty()),
                link: record.link.filter(|link| !link.is_empty()),
                images: record
                    .images
                    .iter()
                    .map(|image| image.trim())
                    .filter(|image| !image.is_empty())
                    .map(|image| resolve_asset(site_root, image))
                    .collect(),
            }
        })
        .collect();
    Region::Ready(items)
}

/// Loads `data/news.json` under `site_root`.
#[must_use]
pub fn load(site_root: &Path) -> Region<Vec<NewsItem>> {
    let path = site_root.join(DATA_DIR).join(NEWS_FILE);
    load_region(&path, "news-load-failed", |document| build(document, site_root))
}
