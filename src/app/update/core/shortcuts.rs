use super::super::super::messages::Message;
use super::super::super::state::App;
use crate::gallery::NavKey;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Named(key::Named::ArrowLeft) => "arrowleft".to_string(),
            Key::Named(key::Named::ArrowRight) => "arrowright".to_string(),
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::Enter) => "enter".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_close, "escape", &pressed, modifiers) {
            Some(Message::Navigate(NavKey::Escape))
        } else if Self::shortcut_matches(
            &self.config.key_previous,
            "arrowleft",
            &pressed,
            modifiers,
        ) {
            Some(Message::Navigate(NavKey::Left))
        } else if Self::shortcut_matches(&self.config.key_next, "arrowright", &pressed, modifiers)
        {
            Some(Message::Navigate(NavKey::Right))
        } else if Self::shortcut_matches(&self.config.key_reload, "ctrl+r", &pressed, modifiers) {
            Some(Message::ReloadRequested)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return fallback.to_string();
        }
        normalized
            .split('+')
            .map(|token| match token.trim() {
                "esc" => "escape",
                "left" => "arrowleft",
                "right" => "arrowright",
                other => other,
            })
            .collect::<Vec<_>>()
            .join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn short_key_names_are_accepted() {
        assert_eq!(App::normalize_shortcut_token(" Left ", "x"), "arrowleft");
        assert_eq!(App::normalize_shortcut_token("ArrowRight", "x"), "arrowright");
        assert_eq!(App::normalize_shortcut_token("shift+Esc", "x"), "shift+escape");
    }

    #[test]
    fn matches_plain_escape() {
        assert!(App::shortcut_matches(
            "escape",
            "x",
            "escape",
            Modifiers::empty()
        ));
    }

    #[test]
    fn matches_ctrl_r_shortcut() {
        assert!(App::shortcut_matches("ctrl+r", "x", "r", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "arrowright",
            "x",
            "arrowright",
            Modifiers::SHIFT,
        ));
    }

    #[test]
    fn empty_binding_uses_fallback() {
        assert!(App::shortcut_matches(
            "  ",
            "arrowleft",
            "arrowleft",
            Modifiers::empty()
        ));
    }
}
