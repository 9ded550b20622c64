use super::{Direction, Gallery, GallerySurface};

/// Navigation keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Left,
    Right,
}

/// External events routed into the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    CardPressed(usize),
    ClosePressed,
    PreviousPressed,
    NextPressed,
    Key(NavKey),
    /// Press on the overlay background, outside the lightbox content.
    BackdropPressed,
}

impl<S: GallerySurface> Gallery<S> {
    /// Dispatch an input. Nothing is routed until the gallery is initialized.
    pub fn route(&mut self, input: Input) {
        if !self.is_initialized() {
            tracing::debug!(?input, "Dropping input before gallery initialization");
            return;
        }
        match input {
            Input::CardPressed(index) => self.open(index),
            Input::ClosePressed | Input::BackdropPressed => self.close(),
            Input::PreviousPressed => self.advance(Direction::Previous),
            Input::NextPressed => self.advance(Direction::Next),
            Input::Key(key) => {
                if !self.is_open() {
                    return;
                }
                match key {
                    NavKey::Escape => self.close(),
                    NavKey::Left => self.advance(Direction::Previous),
                    NavKey::Right => self.advance(Direction::Next),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::surface::SurfaceModel;

    fn ready_gallery(items: &[&str]) -> Gallery<SurfaceModel> {
        let mut gallery = Gallery::new(SurfaceModel::default(), "images/");
        gallery.initialize(items.iter().map(|s| s.to_string()).collect());
        gallery
    }

    #[test]
    fn card_click_then_keys_walk_the_scenario() {
        let mut gallery = ready_gallery(&["a.jpg", "b.jpg", "c.jpg"]);

        gallery.route(Input::CardPressed(1));
        assert_eq!(gallery.viewer_state(), Some(1));
        assert_eq!(gallery.surface().caption, "b.jpg");

        gallery.route(Input::Key(NavKey::Right));
        assert_eq!(gallery.viewer_state(), Some(2));
        assert_eq!(gallery.surface().caption, "c.jpg");

        gallery.route(Input::Key(NavKey::Escape));
        assert_eq!(gallery.viewer_state(), None);
        assert!(gallery.surface().aria_hidden());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut gallery = ready_gallery(&["a.jpg", "b.jpg"]);
        gallery.route(Input::Key(NavKey::Right));
        gallery.route(Input::Key(NavKey::Left));
        assert_eq!(gallery.viewer_state(), None);
        assert!(!gallery.surface().lightbox_visible);
    }

    #[test]
    fn controls_and_backdrop_map_to_operations() {
        let mut gallery = ready_gallery(&["a.jpg", "b.jpg", "c.jpg"]);
        gallery.route(Input::CardPressed(0));
        gallery.route(Input::PreviousPressed);
        assert_eq!(gallery.viewer_state(), Some(2));
        gallery.route(Input::NextPressed);
        assert_eq!(gallery.viewer_state(), Some(0));
        gallery.route(Input::BackdropPressed);
        assert_eq!(gallery.viewer_state(), None);

        gallery.route(Input::CardPressed(2));
        gallery.route(Input::ClosePressed);
        assert_eq!(gallery.viewer_state(), None);
    }

    #[test]
    fn inputs_before_initialization_are_dropped() {
        let mut gallery = Gallery::new(SurfaceModel::default(), "images/");
        gallery.route(Input::NextPressed);
        gallery.route(Input::CardPressed(0));
        assert_eq!(gallery.viewer_state(), None);
        assert!(!gallery.surface().lightbox_visible);
    }
}
