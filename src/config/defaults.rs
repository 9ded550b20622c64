pub(crate) fn default_manifest_location() -> String {
    "images.json".to_string()
}

pub(crate) fn default_image_base() -> String {
    "images/".to_string()
}

pub(crate) fn default_columns() -> usize {
    4
}

pub(crate) fn default_thumbnail_height() -> f32 {
    160.0
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_close() -> String {
    "escape".to_string()
}

pub(crate) fn default_key_previous() -> String {
    "arrowleft".to_string()
}

pub(crate) fn default_key_next() -> String {
    "arrowright".to_string()
}

pub(crate) fn default_key_reload() -> String {
    "ctrl+r".to_string()
}
