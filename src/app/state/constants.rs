use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Layout constants for the grid and the lightbox.
pub(crate) const GRID_SPACING_PX: f32 = 12.0;
pub(crate) const CARD_PADDING_PX: u16 = 8;
pub(crate) const CARD_META_FONT_SIZE_PX: f32 = 13.0;
pub(crate) const LIGHTBOX_MARGIN_PX: u16 = 48;
pub(crate) const BACKDROP_ALPHA: f32 = 0.85;
pub(crate) static GALLERY_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("gallery-scroll"));
