/// One thumbnail in the grid, derived from a manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub name: String,
    pub src: String,
    pub alt: String,
    pub position: String,
    pub label: String,
}

impl Card {
    pub fn new(image_base: &str, name: &str, index: usize, total: usize) -> Self {
        Card {
            index,
            name: name.to_string(),
            src: image_source(image_base, name),
            alt: name.to_string(),
            position: format!("{}/{}", index + 1, total),
            label: format!("Open {name}"),
        }
    }
}

/// Location of an image: the configured base with the filename appended.
pub fn image_source(image_base: &str, name: &str) -> String {
    format!("{image_base}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_fields_come_from_its_own_filename() {
        let card = Card::new("images/", "b.jpg", 1, 3);
        assert_eq!(card.src, "images/b.jpg");
        assert_eq!(card.alt, "b.jpg");
        assert_eq!(card.position, "2/3");
        assert_eq!(card.label, "Open b.jpg");
    }

    #[test]
    fn base_is_concatenated_verbatim() {
        assert_eq!(
            image_source("https://cdn.example.com/g/", "x.png"),
            "https://cdn.example.com/g/x.png"
        );
        assert_eq!(image_source("", "x.png"), "x.png");
    }
}
