// SPDX-License-Identifier: MPL-2.0
//! Club owners from `data/owners.json`.

use super::document::{first_set, lenient_list, load_region, non_empty, Region, Scalar, DATA_DIR};
use crate::gallery::{ImageMarkers, ImageRole};
use serde::Deserialize;
use std::path::Path;

pub const OWNERS_FILE: &str = "owners.json";

#[derive(Debug, Default, Deserialize)]
pub struct OwnersDocument {
    #[serde(default, deserialize_with = "lenient_list")]
    owners: Vec<OwnerRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct OwnerRecord {
    number: Option<Scalar>,
    id: Option<Scalar>,
    name: Option<String>,
    title: Option<String>,
    about: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub about: Option<String>,
    pub photo: Option<String>,
}

impl Owner {
    #[must_use]
    pub fn markers(&self) -> Option<ImageMarkers> {
        self.photo
            .as_ref()
            .map(|photo| ImageMarkers::single(ImageRole::Owner, photo.clone(), self.name.clone()))
    }
}

#[must_use]
pub fn photo_path(id: &str) -> String {
    format!("assets/owners/owner{}.jpg", id)
}

#[must_use]
pub fn build(document: OwnersDocument, site_root: &Path) -> Region<Vec<Owner>> {
    if document.owners.is_empty() {
        return Region::Empty {
            message: "owners-empty",
        };
    }
    let owners = document
        .owners
        .into_iter()
        .map(|record| {
            let id = first_set(&[record.number.as_ref(), record.id.as_ref()]);
            let photo = site_root.join(photo_path(&id));
            Owner {
                name: non_empty(record.name.as_deref())
                    .map_or_else(|| format!("Owner {}", id), str::to_string),
                title: record.title.filter(|title| !title.is_empty()),
                about: record.about.filter(|about| !about.is_empty()),
                photo: photo.is_file().then(|| photo.to_string_lossy().into_owned()),
                id,
            }
        })
        .collect();
    Region::Ready(owners)
}

/// Loads `data/owners.json` under `site_root`.
#[must_use]
pub fn load(site_root: &Path) -> Region<Vec<Owner>> {
    let path = site_root.join(DATA_DIR).join(OWNERS_FILE);
    load_region(&path, "owners-load-failed", |document| build(document, site_root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::markers::class;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn owners_use_number_then_id() {
        let doc: OwnersDocument = serde_json::from_str(
            r#"{"owners": [{"number": 2, "id": 9, "name": "Ari", "title": "Founder"}, {"id": 4, "about": ""}]}"#,
        )
        .expect("valid json");
        let owners = build(doc, Path::new(".")).ready().cloned().expect("ready");

        assert_eq!(owners[0].id, "2");
        assert_eq!(owners[0].title.as_deref(), Some("Founder"));
        assert_eq!(owners[1].name, "Owner 4");
        assert_eq!(owners[1].about, None);
    }

    #[test]
    fn owner_portrait_is_marked_for_lightbox() {
        let dir = tempdir().expect("temp dir");
        let owners_dir = dir.path().join("assets/owners");
        fs::create_dir_all(&owners_dir).expect("mkdir");
        fs::write(owners_dir.join("owner1.jpg"), b"jpg").expect("write");

        let doc: OwnersDocument =
            serde_json::from_str(r#"{"owners": [{"number": 1, "name": "Pat"}]}"#).expect("valid");
        let owners = build(doc, dir.path()).ready().cloned().expect("ready");
        let element = owners[0].markers().expect("photo").to_element();

        assert!(element.has_class(class::OWNER_IMAGE));
        assert_eq!(element.attribute("alt"), Some("Pat"));
    }

    #[test]
    fn empty_and_missing_documents_degrade() {
        let empty: OwnersDocument = serde_json::from_str("{}").expect("valid");
        assert_eq!(build(empty, Path::new(".")).placeholder(), Some("owners-empty"));

        let dir = tempdir().expect("temp dir");
        assert_eq!(load(dir.path()).placeholder(), Some("owners-load-failed"));
    }
}
