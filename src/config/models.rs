use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_manifest_location")]
    pub manifest_location: String,
    #[serde(default = "crate::config::defaults::default_image_base")]
    pub image_base: String,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_columns")]
    pub columns: usize,
    #[serde(default = "crate::config::defaults::default_thumbnail_height")]
    pub thumbnail_height: f32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_close")]
    pub key_close: String,
    #[serde(default = "crate::config::defaults::default_key_previous")]
    pub key_previous: String,
    #[serde(default = "crate::config::defaults::default_key_next")]
    pub key_next: String,
    #[serde(default = "crate::config::defaults::default_key_reload")]
    pub key_reload: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            manifest_location: crate::config::defaults::default_manifest_location(),
            image_base: crate::config::defaults::default_image_base(),
            theme: ThemeMode::Night,
            columns: crate::config::defaults::default_columns(),
            thumbnail_height: crate::config::defaults::default_thumbnail_height(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
            key_close: crate::config::defaults::default_key_close(),
            key_previous: crate::config::defaults::default_key_previous(),
            key_next: crate::config::defaults::default_key_next(),
            key_reload: crate::config::defaults::default_key_reload(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
