use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::{button, column, container, opaque, row, scrollable, stack, text, Column, Space};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use env_logger::{Builder, Target};
use log::LevelFilter;

mod gallery;
mod media;
mod state;
mod ui;

use gallery::{GalleryHost, GalleryMessage, NavKey};
use media::{ImageSlots, LoadError, LoadedImage};
use state::catalog::{Catalog, Profile, Service};
use state::config::{AppConfig, ThemeChoice};
use state::i18n::{Labels, Language};

/// Main application state
struct PortfolioGallery {
    /// Carousels, the shared lightbox and the page surface
    gallery: GalleryHost,
    /// Decoded slide images keyed by reference
    slots: ImageSlots,
    /// Greeting, bio and principles above the projects
    profile: Option<Profile>,
    services: Vec<Service>,
    language: Language,
    theme: ThemeChoice,
    /// Frame time used for cross-fades
    now: Instant,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Carousel, lightbox and keyboard navigation
    Gallery(GalleryMessage),
    /// Background decode of one slide finished
    ImageLoaded(String, Result<LoadedImage, LoadError>),
    /// Animation frame while a cross-fade runs
    Tick(Instant),
    ToggleTheme,
    ToggleLanguage,
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// Background folder scan completed
    FolderScanned(Result<Catalog, String>),
}

impl PortfolioGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::from_environment();
        let mut app = Self::with_catalog(config.load_catalog(), config.language, config.theme);

        log::info!("Portfolio gallery started with {} projects", app.gallery.entries().len());

        let task = app.load_images();
        (app, task)
    }

    fn with_catalog(catalog: Catalog, language: Language, theme: ThemeChoice) -> Self {
        PortfolioGallery {
            gallery: GalleryHost::new(&catalog),
            slots: ImageSlots::new(),
            profile: catalog.profile,
            services: catalog.services,
            language,
            theme,
            now: Instant::now(),
            status: String::new(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                self.gallery.update(message, self.language);
                self.now = Instant::now();
                Task::none()
            }
            Message::ImageLoaded(reference, result) => {
                self.slots.finish(reference, result);
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme = self.theme.toggle();
                Task::none()
            }
            Message::ToggleLanguage => {
                self.language = self.language.toggle();
                Task::none()
            }
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select a Showcase Folder")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Scanning {}...", folder_path.display());
                    return Task::perform(scan_folder_async(folder_path), Message::FolderScanned);
                }

                Task::none()
            }
            Message::FolderScanned(Ok(catalog)) => {
                // A scanned folder only brings projects; profile and services stay.
                // Replacing the host drops any open lightbox session with it.
                self.gallery = GalleryHost::new(&catalog);
                self.slots.clear();
                self.status = format!("Showing {} projects.", self.gallery.entries().len());
                self.load_images()
            }
            Message::FolderScanned(Err(e)) => {
                log::warn!("Folder scan failed: {}", e);
                self.status = e;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let labels = Labels::for_language(self.language);

        let name = self
            .profile
            .as_ref()
            .map(|profile| profile.name.resolve(self.language))
            .unwrap_or(labels.projects);

        let header = row![
            text(name).size(32),
            Space::with_width(Length::Fill),
            text(&self.status).size(13),
            button(text(labels.open_folder))
                .on_press(Message::OpenFolder)
                .padding([6, 12])
                .style(button::secondary),
            button(text(self.language.switch_label()))
                .on_press(Message::ToggleLanguage)
                .padding([6, 12])
                .style(button::secondary),
            button(text(labels.theme))
                .on_press(Message::ToggleTheme)
                .padding([6, 12])
                .style(button::secondary),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let intro = ui::profile::view(
            self.profile.as_ref(),
            &self.services,
            self.language,
            labels,
        );

        let mut cards = Column::new().spacing(64);
        for (index, entry) in self.gallery.entries().iter().enumerate() {
            cards = cards.push(ui::project::view(
                index,
                entry,
                &self.slots,
                self.language,
                labels,
                self.now,
            ));
        }
        if self.gallery.entries().is_empty() {
            cards = cards.push(text(labels.empty));
        }

        let page = scrollable(
            container(
                column![header, intro, text(labels.projects).size(28), cards]
                    .spacing(40)
                    .max_width(1100),
            )
                .padding(40)
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        if !self.gallery.surface().is_scroll_locked() {
            return page.into();
        }

        let overlay = match self.gallery.lightbox().session() {
            Some(session) => ui::lightbox::view(session, &self.slots, labels, self.now),
            None => opaque(Space::new(Length::Fill, Length::Fill)),
        };

        stack![page, overlay].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        // Navigation keys are only listened for while the lightbox holds them
        if self.gallery.surface().keys_captured() {
            subscriptions.push(keyboard::on_key_press(lightbox_key));
        }

        if self.needs_frames() {
            subscriptions.push(iced::window::frames().map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    /// Cross-fades are judged on the same clock `view()` renders with, so frames
    /// keep coming until one has drawn the finished fade
    fn needs_frames(&self) -> bool {
        self.gallery.is_animating(self.now)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }

    /// Request every slide image not yet known
    fn load_images(&mut self) -> Task<Message> {
        let references: HashSet<String> = self
            .gallery
            .image_references()
            .map(str::to_string)
            .collect();

        let tasks: Vec<Task<Message>> = references
            .into_iter()
            .filter(|reference| self.slots.request(reference))
            .map(|reference| {
                let key = reference.clone();
                Task::perform(
                    async move { (key, media::load_image(reference).await) },
                    |(reference, result)| Message::ImageLoaded(reference, result),
                )
            })
            .collect();

        log::debug!("Loading {} slide images", tasks.len());
        Task::batch(tasks)
    }
}

/// Arrow keys navigate, Escape closes
fn lightbox_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    let key = match key {
        Key::Named(Named::ArrowLeft) => NavKey::Left,
        Key::Named(Named::ArrowRight) => NavKey::Right,
        Key::Named(Named::Escape) => NavKey::Cancel,
        _ => return None,
    };
    Some(Message::Gallery(GalleryMessage::Key(key)))
}

/// Scan a picked folder into a catalog on the blocking pool
async fn scan_folder_async(folder_path: PathBuf) -> Result<Catalog, String> {
    tokio::task::spawn_blocking(move || Catalog::scan_folder(&folder_path))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map_err(|e| e.to_string())
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("portfolio_gallery", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    iced::application(
        "Portfolio Gallery",
        PortfolioGallery::update,
        PortfolioGallery::view,
    )
    .subscription(PortfolioGallery::subscription)
    .theme(PortfolioGallery::theme)
    .centered()
    .run_with(PortfolioGallery::new)
}
