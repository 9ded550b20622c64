use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`, grouped into tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    manifest: ManifestConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            manifest_location: tables.manifest.location,
            image_base: tables.manifest.image_base,
            theme: tables.appearance.theme,
            columns: tables.appearance.columns,
            thumbnail_height: tables.appearance.thumbnail_height,
            window_width: tables.window.width,
            window_height: tables.window.height,
            log_level: tables.logging.log_level,
            key_close: tables.keys.close,
            key_previous: tables.keys.previous,
            key_next: tables.keys.next,
            key_reload: tables.keys.reload,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ManifestConfig {
    #[serde(default = "defaults::default_manifest_location")]
    location: String,
    #[serde(default = "defaults::default_image_base")]
    image_base: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            location: defaults::default_manifest_location(),
            image_base: defaults::default_image_base(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_columns")]
    columns: usize,
    #[serde(default = "defaults::default_thumbnail_height")]
    thumbnail_height: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            columns: defaults::default_columns(),
            thumbnail_height: defaults::default_thumbnail_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_close")]
    close: String,
    #[serde(default = "defaults::default_key_previous")]
    previous: String,
    #[serde(default = "defaults::default_key_next")]
    next: String,
    #[serde(default = "defaults::default_key_reload")]
    reload: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            close: defaults::default_key_close(),
            previous: defaults::default_key_previous(),
            next: defaults::default_key_next(),
            reload: defaults::default_key_reload(),
        }
    }
}
