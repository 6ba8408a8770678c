// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the preview
//! carousels and the gallery viewer.
//!
//! The `App` struct wires together content, localization and configuration
//! and translates component effects into side effects such as image loading
//! or saving the resume. Policy decisions (preview pausing, which images to
//! decode) live in `update` next to the message handlers.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content::Content;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::gallery_viewer;
use crate::ui::notifications::{self, Notification};
use crate::ui::page::PageMetrics;
use crate::ui::preview;
use crate::ui::state::PageEffects;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    content: Content,
    /// One carousel per project, in project order.
    previews: Vec<preview::State>,
    viewer: gallery_viewer::State,
    /// Project whose gallery is open in the viewer.
    viewer_card: Option<usize>,
    images: ImageCache,
    page_metrics: Option<PageMetrics>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("projects", &self.previews.len())
            .field("viewer_open", &self.viewer.is_open())
            .field("images", &self.images)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once
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
    /// Loads configuration and content, reporting fallbacks as toasts, and
    /// starts decoding the first preview images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let (content, content_warning) = Content::load(flags.content.as_deref());

        let mut app = Self::boot(config, content, flags.lang);
        for key in [config_warning, content_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let task = app.request_images();
        (app, task)
    }

    /// Builds the application state from already loaded inputs.
    fn boot(config: Config, content: Content, lang: Option<String>) -> Self {
        let i18n = I18n::new(lang, &config);
        let interval = config.gallery.preview_interval();
        let previews = content
            .portfolio
            .projects
            .iter()
            .map(|project| preview::State::new(project.image_refs(), interval))
            .collect();
        let viewer = gallery_viewer::State::new(PageEffects::new())
            .with_close_on_backdrop(config.gallery.close_on_backdrop());

        tracing::info!(
            projects = content.portfolio.projects.len(),
            locale = %i18n.current_locale(),
            "portfolio ready"
        );

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            content,
            previews,
            viewer,
            viewer_card: None,
            images: ImageCache::default(),
            page_metrics: None,
            notifications: notifications::Manager::new(),
            spinner_rotation: 0.0,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.session() {
            Some(session) => format!("{} - {app_name}", session.title()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let viewer_sub = subscription::create_viewer_subscription(&self.viewer);
        let preview_sub = subscription::create_preview_subscription(&self.previews);
        let tick_sub = subscription::create_tick_subscription(
            self.images.has_pending(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([viewer_sub, preview_sub, tick_sub])
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            content: &self.content,
            previews: &mut self.previews,
            viewer: &mut self.viewer,
            viewer_card: &mut self.viewer_card,
            images: &mut self.images,
            page_metrics: &mut self.page_metrics,
            notifications: &mut self.notifications,
            spinner_rotation: &mut self.spinner_rotation,
        }
    }

    fn request_images(&mut self) -> Task<Message> {
        update::request_images(&mut self.context())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, notification_message)
            }
            Message::ImageLoaded { image, result } => {
                update::handle_image_loaded(&mut ctx, image, result)
            }
            Message::SpinnerTick(_) => update::handle_spinner_tick(&mut ctx),
            Message::ResumeDestination(destination) => {
                update::handle_resume_destination(&mut ctx, destination)
            }
            Message::ResumeSaved(result) => update::handle_resume_saved(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            portfolio: &self.content.portfolio,
            previews: &self.previews,
            viewer: &self.viewer,
            images: &self.images,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
