// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the lightbox.
//!
//! The `App` struct wires together the site content, the lightbox, the news
//! carousel and localization, and translates messages into state changes.

pub mod config;
mod message;
pub mod opener;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, NewsMessage};

use crate::gallery::{GalleryRequestSender, Lightbox, OpenGalleryRequest, SurfaceLayout};
use crate::i18n::fluent::I18n;
use crate::site::Site;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    site: Site,
    /// `None` when the configured surfaces cannot host a lightbox.
    lightbox: Option<Lightbox>,
    /// Sender of the external open-gallery channel, once it is up. Holding
    /// it keeps the channel open for the lifetime of the window.
    request_sender: Option<GalleryRequestSender>,
    /// Requests from the command line, sent as soon as the channel is up.
    pending_requests: Vec<OpenGalleryRequest>,
    /// i18n key of a startup warning shown above the page.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("site_root", &self.site.root)
            .field("lightbox_installed", &self.lightbox.is_some())
            .field(
                "lightbox_open",
                &self.lightbox.as_ref().is_some_and(Lightbox::is_open),
            )
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the
    // first call and later calls boot from defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, localization and site content, and installs the
    /// lightbox against the configured surfaces.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let site_root = flags
            .site_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| config.site.root_or_default());
        let site = Site::load(&site_root, &config.news, &config.links);

        let lightbox = Lightbox::install(SurfaceLayout::from(&config.lightbox));

        let pending_requests = flags.open.into_iter().collect::<Vec<_>>();
        if !pending_requests.is_empty() && lightbox.is_none() {
            info!("startup gallery request dropped, no lightbox installed");
        }

        let app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            site,
            lightbox,
            request_sender: None,
            pending_requests,
            config_warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = subscription::create_keyboard_subscription(
            self.lightbox.as_ref().is_some_and(Lightbox::is_open),
        );
        let request_sub = subscription::create_request_subscription(self.lightbox.is_some());
        let tick_sub = subscription::create_tick_subscription(&self.site.carousel);

        Subscription::batch([keyboard_sub, request_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            lightbox: &mut self.lightbox,
            carousel: &mut self.site.carousel,
            request_sender: &mut self.request_sender,
            pending_requests: &mut self.pending_requests,
            opener: &opener::SystemOpener,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            site: &self.site,
            lightbox: self.lightbox.as_ref(),
            warning: self.config_warning.as_deref(),
        })
    }
}
