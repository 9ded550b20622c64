//! Gallery core: thumbnail rendering and the lightbox state machine.
//!
//! Nothing in here knows about iced. `Gallery` owns the image list and the
//! viewer state and pushes every visual change through a [`GallerySurface`].

mod card;
mod input;
mod renderer;
mod surface;

pub use card::Card;
pub use input::{Input, NavKey};
pub use renderer::{PLACEHOLDER_TEXT, build_gallery};
pub use surface::{GallerySurface, SurfaceModel};

use card::image_source;
use tracing::debug;

/// Step direction for lightbox navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

pub struct Gallery<S> {
    surface: S,
    image_base: String,
    images: Vec<String>,
    /// Index shown in the lightbox; `None` while it is closed.
    current: Option<usize>,
    initialized: bool,
}

impl<S: GallerySurface> Gallery<S> {
    pub fn new(surface: S, image_base: impl Into<String>) -> Self {
        Gallery {
            surface,
            image_base: image_base.into(),
            images: Vec::new(),
            current: None,
            initialized: false,
        }
    }

    /// Take a resolved image list, render it, and start accepting input.
    /// Returns the number of cards rendered.
    pub fn initialize(&mut self, images: Vec<String>) -> usize {
        self.close();
        self.images = images;
        build_gallery(&mut self.surface, &self.image_base, &self.images);
        self.initialized = true;
        self.images.len()
    }

    pub fn open(&mut self, index: usize) {
        let Some(name) = self.images.get(index) else {
            debug!(index, len = self.images.len(), "Ignoring out-of-range open");
            return;
        };
        self.current = Some(index);
        let src = image_source(&self.image_base, name);
        self.surface.set_image(&src, name);
        self.surface.set_caption(name);
        self.surface.set_visible(true);
        self.surface.set_scroll_locked(true);
    }

    pub fn close(&mut self) {
        self.surface.set_visible(false);
        self.surface.set_image("", "");
        self.surface.set_scroll_locked(false);
        self.current = None;
    }

    /// Step with wraparound. A closed lightbox counts as position -1, so
    /// `Next` opens the first image and `Previous` opens the second to last.
    pub fn advance(&mut self, direction: Direction) {
        if self.images.is_empty() {
            return;
        }
        let len = self.images.len() as isize;
        let current = self.current.map_or(-1, |idx| idx as isize);
        let next = (current + direction.offset() + len).rem_euclid(len);
        self.open(next as usize);
    }

    pub fn viewer_state(&self) -> Option<usize> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
