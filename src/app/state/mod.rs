mod constants;

use crate::config::AppConfig;
use crate::gallery::{Gallery, SurfaceModel};
use crate::manifest::{ManifestSource, is_remote};
use iced::Task;
use iced::widget::image::Handle;
use std::collections::{HashMap, HashSet};

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;

/// Core application state.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) source: ManifestSource,
    pub(super) gallery: Gallery<SurfaceModel>,
    pub(super) loading: bool,
    /// Decoded handles for images served over HTTP, keyed by source URL.
    pub(super) remote_images: HashMap<String, Handle>,
    pub(super) pending_images: HashSet<String>,
}

impl App {
    /// Build the initial state and the task that loads the manifest. The
    /// gallery stays uninitialized until `Message::ManifestLoaded` arrives.
    pub(super) fn bootstrap(config: AppConfig, source: ManifestSource) -> (App, Task<Message>) {
        let gallery = Gallery::new(SurfaceModel::default(), config.image_base.clone());
        let mut app = App {
            config,
            source,
            gallery,
            loading: true,
            remote_images: HashMap::new(),
            pending_images: HashSet::new(),
        };
        tracing::info!(
            source = %app.source,
            image_base = %app.config.image_base,
            "Initialized gallery state"
        );
        let init_task = app.run_effect(Effect::LoadManifest);
        (app, init_task)
    }

    pub(super) fn image_handle(&self, src: &str) -> Option<Handle> {
        if src.is_empty() {
            return None;
        }
        if is_remote(src) {
            self.remote_images.get(src).cloned()
        } else {
            Some(Handle::from_path(src))
        }
    }

    /// Remote sources that are neither cached nor already being fetched.
    pub(super) fn missing_remote_images(&self) -> Vec<String> {
        self.gallery
            .surface()
            .cards
            .iter()
            .map(|card| card.src.clone())
            .filter(|src| is_remote(src))
            .filter(|src| {
                !self.remote_images.contains_key(src) && !self.pending_images.contains(src)
            })
            .collect()
    }

    pub(super) fn status_label(&self) -> String {
        if self.loading {
            return "Loading…".to_string();
        }
        match self.gallery.images().len() {
            1 => "1 image".to_string(),
            count => format!("{count} images"),
        }
    }
}
