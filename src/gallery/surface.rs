use super::card::Card;

/// Display capabilities the gallery writes to.
///
/// The gallery never reads back from the surface; it only pushes state.
pub trait GallerySurface {
    /// Remove every card and any placeholder.
    fn clear(&mut self);
    fn show_placeholder(&mut self, text: &str);
    fn append_card(&mut self, card: Card);
    fn set_visible(&mut self, visible: bool);
    fn set_image(&mut self, src: &str, alt: &str);
    fn set_caption(&mut self, text: &str);
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Plain view model the iced window is drawn from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceModel {
    pub cards: Vec<Card>,
    pub placeholder: Option<String>,
    pub lightbox_visible: bool,
    pub image_src: String,
    pub image_alt: String,
    pub caption: String,
    pub scroll_locked: bool,
}

impl SurfaceModel {
    /// Accessibility-style visibility flag for the lightbox overlay.
    pub fn aria_hidden(&self) -> bool {
        !self.lightbox_visible
    }
}

impl GallerySurface for SurfaceModel {
    fn clear(&mut self) {
        self.cards.clear();
        self.placeholder = None;
    }

    fn show_placeholder(&mut self, text: &str) {
        self.placeholder = Some(text.to_string());
    }

    fn append_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn set_visible(&mut self, visible: bool) {
        self.lightbox_visible = visible;
    }

    fn set_image(&mut self, src: &str, alt: &str) {
        self.image_src = src.to_string();
        self.image_alt = alt.to_string();
    }

    fn set_caption(&mut self, text: &str) {
        self.caption = text.to_string();
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
