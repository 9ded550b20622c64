use crate::gallery::NavKey;
use iced::keyboard::{Key, Modifiers};
use iced::widget::image::Handle;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    ManifestLoaded(Vec<String>),
    ReloadRequested,
    CardPressed(usize),
    ClosePressed,
    PreviousPressed,
    NextPressed,
    BackdropPressed,
    /// Wheel input over the open lightbox; swallowed so the grid stays put.
    BackdropScrolled,
    Navigate(NavKey),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    ImageFetched {
        src: String,
        handle: Option<Handle>,
    },
}
