// SPDX-License-Identifier: MPL-2.0
use pitchside::app::config::{self, Config};
use pitchside::error::DocumentError;
use pitchside::gallery::{Lightbox, Mode, SurfaceLayout};
use pitchside::i18n::fluent::I18n;
use pitchside::site::{Region, Site};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_document(root: &Path, name: &str, content: &str) {
    let data = root.join("data");
    fs::create_dir_all(&data).expect("create data dir");
    fs::write(data.join(name), content).expect("write document");
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create asset dir");
    }
    fs::write(path, b"jpeg").expect("write asset");
}

#[test]
fn complete_site_loads_every_region() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let root = dir.path();

    write_document(
        root,
        "squad.json",
        r#"{ "season": 2025, "players": [
            { "number": 7, "name": "Sam Jones", "role": "Batter", "isCaptain": true },
            { "id": "12", "isViceCaptain": true, "isKeeper": true }
        ] }"#,
    );
    write_document(
        root,
        "owners.json",
        r#"{ "owners": [ { "number": 1, "name": "Pat Lee", "title": "Founder" } ] }"#,
    );
    write_document(
        root,
        "news.json",
        r#"{ "items": [
            { "title": "Final", "date": "2025-03-05", "images": ["assets/news/a.jpg", "assets/news/b.jpg"] },
            { "title": "", "images": [] }
        ] }"#,
    );
    write_document(
        root,
        "fixtures.json",
        r#"{ "fixtures": [
            { "dateTime": "2099-12-14T16:00:00", "opponent": "Rovers", "ground": "Oval 2" },
            { "dateTime": "soon" }
        ] }"#,
    );
    write_document(
        root,
        "cricheroes.json",
        r#"{ "tournamentName": "Summer Bash", "tournamentUrl": "https://example.org/t/1" }"#,
    );
    touch(root, "assets/players/player7.jpg");

    let config = Config::default();
    let site = Site::load(root, &config.news, &config.links);

    let squad = site.squad.ready().expect("squad ready");
    assert_eq!(squad.season.as_deref(), Some("2025"));
    assert_eq!(squad.players.len(), 2);
    assert!(squad.players[0].photo.is_some());
    assert_eq!(squad.players[1].name, "Player 12");
    assert!(squad.players[1].photo.is_none());

    let owners = site.owners.ready().expect("owners ready");
    assert_eq!(owners[0].title.as_deref(), Some("Founder"));

    let news = site.news.ready().expect("news ready");
    assert_eq!(news[0].date.as_deref(), Some("05 Mar 2025"));
    assert_eq!(news[0].photo_count(), Some(2));
    assert_eq!(news[1].title, "News item");
    assert_eq!(site.carousel.len(), 2);
    assert!(site.carousel.needs_ticks());

    let schedule = site.fixtures.ready().expect("fixtures ready");
    assert_eq!(schedule.fixtures.len(), 2);
    assert!(schedule.fixtures[1].starts_at.is_none());
    let next = schedule
        .next_match(chrono::Local::now())
        .expect("next match");
    assert_eq!(next.opponent.as_deref(), Some("Rovers"));
    assert_eq!(next.date_label().as_deref(), Some("14 Dec 4:00 PM"));

    let tournament = site.tournament.as_ref().expect("tournament shown");
    assert_eq!(tournament.name.as_deref(), Some("Summer Bash"));
    assert!(tournament.team_url.is_none());
}

#[test]
fn broken_documents_degrade_their_own_region_only() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let root = dir.path();

    write_document(root, "squad.json", "{ not json");
    write_document(root, "owners.json", r#"{ "owners": [] }"#);
    write_document(root, "cricheroes.json", "{ broken");

    let config = Config::default();
    let site = Site::load(root, &config.news, &config.links);

    assert!(matches!(
        site.squad,
        Region::Failed {
            message: "squad-load-failed",
            cause: DocumentError::Malformed(_),
        }
    ));
    assert_eq!(site.owners.placeholder(), Some("owners-empty"));
    assert!(matches!(
        site.news,
        Region::Failed {
            cause: DocumentError::Missing,
            ..
        }
    ));
    assert_eq!(site.fixtures.placeholder(), Some("fixtures-load-failed"));
    assert!(site.tournament.is_none());
    assert!(site.carousel.is_empty());
    assert!(!site.carousel.needs_ticks());
}

#[test]
fn news_click_opens_the_grid_at_the_displayed_image() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let root = dir.path();
    write_document(
        root,
        "news.json",
        r#"{ "items": [ { "title": "Final", "images": ["a.jpg", "b.jpg", "c.jpg"] } ] }"#,
    );

    let config = Config::default();
    let site = Site::load(root, &config.news, &config.links);
    let item = &site.news.ready().expect("news ready")[0];
    let displayed = site.carousel.image_index(0);
    let markers = item.markers(displayed).expect("slide has images");

    let mut lightbox = Lightbox::install(SurfaceLayout::default()).expect("installable");
    let arbitration = lightbox.click(&markers.to_element());
    assert_eq!(arbitration.reveal(), Some(displayed));
    assert_eq!(lightbox.viewer().mode(), Mode::Grid);
    assert_eq!(lightbox.viewer().label(), "Final");
    assert_eq!(lightbox.viewer().images().len(), 3);
}

#[test]
fn settings_round_trip_drives_language_and_lightbox_layout() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = dir.path().join("settings.toml");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    french.lightbox.controls = false;
    french.news.auto_rotate_ms = Some(10);
    let content = toml::to_string_pretty(&french).expect("Failed to serialize config");
    fs::write(&settings, content).expect("Failed to write config file");

    let loaded = config::load_from_path(&settings).expect("Failed to load config from path");
    assert_eq!(loaded, french);
    assert_eq!(loaded.news.auto_rotate_ms(), config::MIN_AUTO_ROTATE_MS);

    let layout = SurfaceLayout::from(&loaded.lightbox);
    assert!(layout.is_installable());
    assert!(!layout.controls);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn unreadable_settings_fall_back_to_defaults_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "general = [").expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("warning-config-load-error"));
}
