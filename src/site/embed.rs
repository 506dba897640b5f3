// SPDX-License-Identifier: MPL-2.0
//! Tournament section fed by `data/cricheroes.json`.
//!
//! Unlike the other regions this one has no placeholder: without a usable
//! document the whole section is hidden.

use super::document::{load_document, non_empty, DATA_DIR};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

pub const EMBED_FILE: &str = "cricheroes.json";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmbedDocument {
    tournament_name: Option<String>,
    tournament_url: Option<String>,
    team_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    pub name: Option<String>,
    pub url: Option<String>,
    /// Team profile link; its row is hidden when absent.
    pub team_url: Option<String>,
}

impl From<EmbedDocument> for Tournament {
    fn from(document: EmbedDocument) -> Self {
        Tournament {
            name: non_empty(document.tournament_name.as_deref()).map(str::to_string),
            url: non_empty(document.tournament_url.as_deref()).map(str::to_string),
            team_url: non_empty(document.team_url.as_deref()).map(str::to_string),
        }
    }
}

/// Loads the tournament section, or `None` to hide it.
#[must_use]
pub fn load(site_root: &Path) -> Option<Tournament> {
    let path = site_root.join(DATA_DIR).join(EMBED_FILE);
    match load_document::<EmbedDocument>(&path) {
        Ok(document) => Some(document.into()),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "tournament section hidden");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_embed(json: &str) -> tempfile::TempDir {
        let dir = tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join(DATA_DIR)).expect("mkdir");
        fs::write(dir.path().join(DATA_DIR).join(EMBED_FILE), json).expect("write");
        dir
    }

    #[test]
    fn full_document_shows_section_and_team_row() {
        let dir = write_embed(
            r#"{"tournamentName": "Summer Bash", "tournamentUrl": "https://t.example/1", "teamUrl": "https://t.example/team"}"#,
        );
        let tournament = load(dir.path()).expect("section shown");
        assert_eq!(tournament.name.as_deref(), Some("Summer Bash"));
        assert_eq!(tournament.team_url.as_deref(), Some("https://t.example/team"));
    }

    #[test]
    fn team_row_hidden_without_team_url() {
        let dir = write_embed(r#"{"tournamentName": "Summer Bash", "teamUrl": ""}"#);
        let tournament = load(dir.path()).expect("section shown");
        assert_eq!(tournament.team_url, None);
        assert_eq!(tournament.url, None);
    }

    #[test]
    fn missing_or_invalid_document_hides_section() {
        let dir = tempdir().expect("temp dir");
        assert_eq!(load(dir.path()), None);

        let dir = write_embed("[1, 2");
        assert_eq!(load(dir.path()), None);
    }
}
