use super::super::super::messages::Message;
use super::super::super::state::{App, GALLERY_SCROLL_ID};
use super::super::Effect;
use crate::manifest::{fetch_bytes, load_image_list};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::image::Handle;
use iced::widget::scrollable::RelativeOffset;
use iced::window;
use tracing::{info, warn};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadManifest => {
                let source = self.source.clone();
                info!(source = %source, "Dispatching manifest load task");
                Task::perform(
                    async move { load_image_list(&source).await },
                    Message::ManifestLoaded,
                )
            }
            Effect::FetchImages(srcs) => {
                info!(count = srcs.len(), "Fetching remote images");
                self.pending_images.extend(srcs.iter().cloned());
                Task::batch(srcs.into_iter().map(|src| {
                    Task::perform(
                        async move {
                            let handle = match fetch_bytes(&src).await {
                                Ok(bytes) => Some(Handle::from_bytes(bytes)),
                                Err(err) => {
                                    warn!(%src, "Failed to fetch image: {err:#}");
                                    None
                                }
                            };
                            Message::ImageFetched { src, handle }
                        },
                        |message| message,
                    )
                }))
            }
            Effect::ResetScroll => {
                iced::widget::scrollable::snap_to(GALLERY_SCROLL_ID.clone(), RelativeOffset::START)
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::{Code, Named, Physical};
    use iced::keyboard::{Key, Location, Modifiers};

    fn arrow_right() -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::ArrowRight),
            modified_key: Key::Named(Named::ArrowRight),
            physical_key: Physical::Code(Code::ArrowRight),
            location: Location::Standard,
            modifiers: Modifiers::SHIFT,
            text: None,
        })
    }

    #[test]
    fn key_presses_become_messages() {
        let message =
            runtime_event_to_message(arrow_right(), event::Status::Ignored, window::Id::unique());
        match message {
            Some(Message::KeyPressed { key, modifiers }) => {
                assert_eq!(key, Key::Named(Named::ArrowRight));
                assert_eq!(modifiers, Modifiers::SHIFT);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn captured_events_are_dropped() {
        let message =
            runtime_event_to_message(arrow_right(), event::Status::Captured, window::Id::unique());
        assert!(message.is_none());
    }
}
