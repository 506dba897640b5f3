// SPDX-License-Identifier: MPL-2.0
//! Match fixtures from `data/fixtures.json`.

use super::document::{lenient_list, load_region, non_empty, Region, DATA_DIR};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Deserialize;
use std::path::Path;

pub const FIXTURES_FILE: &str = "fixtures.json";

const NOTE_SEPARATOR: &str = " • ";

#[derive(Debug, Default, Deserialize)]
pub struct FixturesDocument {
    #[serde(default, deserialize_with = "lenient_list")]
    fixtures: Vec<FixtureRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureRecord {
    date_time: Option<String>,
    opponent: Option<String>,
    ground: Option<String>,
    location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Kick-off in local time, `None` when the date could not be parsed.
    pub starts_at: Option<DateTime<Local>>,
    pub opponent: Option<String>,
    pub ground: Option<String>,
    pub location: Option<String>,
}

impl Fixture {
    /// `vs {opponent} • {ground} • {location}` over the parts present,
    /// `None` when there are none.
    #[must_use]
    pub fn note(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.opponent.as_ref().map(|opponent| format!("vs {}", opponent)),
            self.ground.clone(),
            self.location.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!parts.is_empty()).then(|| parts.join(NOTE_SEPARATOR))
    }

    /// `dd Mon h:mm AM`, or `None` for an unparseable date.
    #[must_use]
    pub fn date_label(&self) -> Option<String> {
        self.starts_at
            .map(|starts_at| starts_at.format("%d %b %-I:%M %p").to_string())
    }
}

/// Fixtures in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub fixtures: Vec<Fixture>,
}

impl Schedule {
    /// The first fixture at or after `now`; when every fixture is in the
    /// past, the most recent one.
    #[must_use]
    pub fn next_match(&self, now: DateTime<Local>) -> Option<&Fixture> {
        let dated = self.fixtures.iter().filter(|f| f.starts_at.is_some());
        dated
            .clone()
            .find(|fixture| fixture.starts_at.is_some_and(|at| at >= now))
            .or_else(|| dated.last())
            .or_else(|| self.fixtures.first())
    }
}

/// Parses a fixture date/time in local time.
#[must_use]
pub fn parse_date_time(raw: &str) -> Option<DateTime<Local>> {
    let trimmed = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.with_timezone(&Local));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

#[must_use]
pub fn build(document: FixturesDocument) -> Region<Schedule> {
    if document.fixtures.is_empty() {
        return Region::Empty {
            message: "fixtures-empty",
        };
    }
    let mut fixtures: Vec<Fixture> = document
        .fixtures
        .into_iter()
        .map(|record| Fixture {
            starts_at: record.date_time.as_deref().and_then(parse_date_time),
            opponent: non_empty(record.opponent.as_deref()).map(str::to_string),
            ground: non_empty(record.ground.as_deref()).map(str::to_string),
            location: non_empty(record.location.as_deref()).map(str::to_string),
        })
        .collect();
    // Undated fixtures sort last; the sort is stable.
    fixtures.sort_by_key(|fixture| (fixture.starts_at.is_none(), fixture.starts_at));
    Region::Ready(Schedule { fixtures })
}

/// Loads `data/fixtures.json` under `site_root`.
#[must_use]
pub fn load(site_root: &Path) -> Region<Schedule> {
    let path = site_root.join(DATA_DIR).join(FIXTURES_FILE);
    load_region(&path, "fixtures-load-failed", build)
}
