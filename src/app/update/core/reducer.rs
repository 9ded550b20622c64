use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::gallery::Input;
use iced::widget::image::Handle;
use tracing::{debug, info};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ManifestLoaded(images) => self.handle_manifest_loaded(images, &mut effects),
            Message::ReloadRequested => self.handle_reload_requested(&mut effects),
            Message::CardPressed(index) => self.gallery.route(Input::CardPressed(index)),
            Message::ClosePressed => self.gallery.route(Input::ClosePressed),
            Message::PreviousPressed => self.gallery.route(Input::PreviousPressed),
            Message::NextPressed => self.gallery.route(Input::NextPressed),
            Message::BackdropPressed => self.gallery.route(Input::BackdropPressed),
            Message::BackdropScrolled => {}
            Message::Navigate(key) => self.gallery.route(Input::Key(key)),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::ImageFetched { src, handle } => self.handle_image_fetched(src, handle),
        }

        effects
    }

    fn handle_manifest_loaded(&mut self, images: Vec<String>, effects: &mut Vec<Effect>) {
        self.loading = false;
        let cards = self.gallery.initialize(images);
        info!(cards, "Gallery ready");
        effects.push(Effect::ResetScroll);

        let missing = self.missing_remote_images();
        if !missing.is_empty() {
            effects.push(Effect::FetchImages(missing));
        }
    }

    fn handle_reload_requested(&mut self, effects: &mut Vec<Effect>) {
        if self.loading {
            debug!("Reload ignored; manifest load already in flight");
            return;
        }
        info!(source = %self.source, "Reloading manifest");
        self.gallery.close();
        self.loading = true;
        effects.push(Effect::LoadManifest);
    }

    fn handle_image_fetched(&mut self, src: String, handle: Option<Handle>) {
        self.pending_images.remove(&src);
        if let Some(handle) = handle {
            self.remote_images.insert(src, handle);
        }
    }
}
