use super::card::Card;
use super::surface::GallerySurface;

pub const PLACEHOLDER_TEXT: &str =
    "No images found. Add images to the images/ folder and update images.json.";

/// Rebuild the whole grid: clear, then one card per filename in order, or the
/// placeholder when there is nothing to show.
pub fn build_gallery<S: GallerySurface>(surface: &mut S, image_base: &str, images: &[String]) {
    surface.clear();
    if images.is_empty() {
        surface.show_placeholder(PLACEHOLDER_TEXT);
        return;
    }

    let total = images.len();
    for (index, name) in images.iter().enumerate() {
        surface.append_card(Card::new(image_base, name, index, total));
    }
    tracing::debug!(cards = total, "Rendered gallery cards");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::surface::SurfaceModel;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_card_per_entry_in_manifest_order() {
        let mut surface = SurfaceModel::default();
        build_gallery(&mut surface, "images/", &names(&["a.jpg", "b.jpg", "c.jpg"]));

        let positions: Vec<&str> = surface.cards.iter().map(|c| c.position.as_str()).collect();
        let order: Vec<&str> = surface.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(positions, vec!["1/3", "2/3", "3/3"]);
        assert_eq!(order, vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert!(surface.placeholder.is_none());
    }

    #[test]
    fn empty_list_renders_only_the_placeholder() {
        let mut surface = SurfaceModel::default();
        build_gallery(&mut surface, "images/", &[]);
        assert!(surface.cards.is_empty());
        assert_eq!(surface.placeholder.as_deref(), Some(PLACEHOLDER_TEXT));
    }

    #[test]
    fn rebuilding_replaces_previous_content() {
        let mut surface = SurfaceModel::default();
        let images = names(&["a.jpg", "b.jpg"]);
        build_gallery(&mut surface, "images/", &[]);
        build_gallery(&mut surface, "images/", &images);
        let first = surface.clone();
        build_gallery(&mut surface, "images/", &images);

        assert_eq!(surface, first);
        assert_eq!(surface.cards.len(), 2);
        assert!(surface.placeholder.is_none());
    }
}
