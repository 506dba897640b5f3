// SPDX-License-Identifier: MPL-2.0
//! Player roster from `data/squad.json`.

use super::document::{
    first_set, lenient_list, load_region, non_empty, truthy, Region, Scalar, DATA_DIR,
};
use crate::gallery::{ImageMarkers, ImageRole};
use serde::Deserialize;
use std::path::Path;

pub const SQUAD_FILE: &str = "squad.json";

#[derive(Debug, Default, Deserialize)]
pub struct SquadDocument {
    #[serde(default)]
    season: Option<Scalar>,
    #[serde(default)]
    year: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_list")]
    players: Vec<PlayerRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRecord {
    number: Option<Scalar>,
    id: Option<Scalar>,
    player: Option<Scalar>,
    name: Option<String>,
    role: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    is_captain: bool,
    #[serde(default, deserialize_with = "truthy")]
    is_vice_captain: bool,
    #[serde(default, deserialize_with = "truthy")]
    is_keeper: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Captain,
    ViceCaptain,
    Wicketkeeper,
}

impl Badge {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Badge::Captain => "badge-captain",
            Badge::ViceCaptain => "badge-vice-captain",
            Badge::Wicketkeeper => "badge-wicketkeeper",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub badges: Vec<Badge>,
    /// Portrait path, `None` when the file is not there.
    pub photo: Option<String>,
}

impl Player {
    #[must_use]
    pub fn is_captain(&self) -> bool {
        self.badges.contains(&Badge::Captain)
    }

    /// Markers for the portrait, if there is one.
    #[must_use]
    pub fn markers(&self) -> Option<ImageMarkers> {
        self.photo
            .as_ref()
            .map(|photo| ImageMarkers::single(ImageRole::Player, photo.clone(), self.name.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Squad {
    pub season: Option<String>,
    pub players: Vec<Player>,
}

/// Relative portrait path for a player id.
#[must_use]
pub fn photo_path(id: &str) -> String {
    format!("assets/players/player{}.jpg", id)
}

impl PlayerRecord {
    fn into_player(self, site_root: &Path) -> Player {
        let id = first_set(&[self.number.as_ref(), self.id.as_ref(), self.player.as_ref()]);
        let name = match non_empty(self.name.as_deref()) {
            Some(name) => name.to_string(),
            None => format!("Player {}", id),
        };

        let mut badges = Vec::new();
        if self.is_captain {
            badges.push(Badge::Captain);
        } else if self.is_vice_captain {
            badges.push(Badge::ViceCaptain);
        }
        if self.is_keeper {
            badges.push(Badge::Wicketkeeper);
        }

        let photo = site_root.join(photo_path(&id));
        Player {
            photo: photo.is_file().then(|| photo.to_string_lossy().into_owned()),
            role: self.role.filter(|role| !role.is_empty()),
            id,
            name,
            badges,
        }
    }
}

/// Builds the squad region from a parsed document.
#[must_use]
pub fn build(document: SquadDocument, site_root: &Path) -> Region<Squad> {
    if document.players.is_empty() {
        return Region::Empty {
            message: "squad-empty",
        };
    }
    let season = [document.season.as_ref(), document.year.as_ref()]
        .into_iter()
        .flatten()
        .find(|scalar| scalar.is_set())
        .map(ToString::to_string);
    let players = document
        .players
        .into_iter()
        .map(|record| record.into_player(site_root))
        .collect();
    Region::Ready(Squad { season, players })
}

/// Loads `data/squad.json` under `site_root`.
#[must_use]
pub fn load(site_root: &Path) -> Region<Squad> {
    let path = site_root.join(DATA_DIR).join(SQUAD_FILE);
    load_region(&path, "squad-load-failed", |document| build(document, site_root))
}
