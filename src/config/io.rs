use super::defaults;
use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const MIN_COLUMNS: usize = 1;
const MAX_COLUMNS: usize = 12;

/// Load the config from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            info!(
                path = %path.display(),
                "No config file found ({err}); using defaults"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            debug!(path = %path.display(), ?config, "Loaded config");
            config
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Invalid config TOML; falling back to defaults: {err:#}"
            );
            AppConfig::default()
        }
    }
}

/// Parse the table layout of `conf/config.toml` and clamp the result.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config tables")?;
    let mut config = AppConfig::from(tables);
    clamp_config(&mut config);
    Ok(config)
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: String) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback;
        } else {
            *value = normalized;
        }
    }

    if config.manifest_location.trim().is_empty() {
        config.manifest_location = defaults::default_manifest_location();
    }
    config.columns = config.columns.clamp(MIN_COLUMNS, MAX_COLUMNS);
    if !config.thumbnail_height.is_finite() {
        config.thumbnail_height = defaults::default_thumbnail_height();
    }
    config.thumbnail_height = config.thumbnail_height.clamp(48.0, 1024.0);
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    normalize_key_binding(&mut config.key_close, defaults::default_key_close());
    normalize_key_binding(&mut config.key_previous, defaults::default_key_previous());
    normalize_key_binding(&mut config.key_next, defaults::default_key_next());
    normalize_key_binding(&mut config.key_reload, defaults::default_key_reload());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};
    use std::path::PathBuf;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_values_from_tables() {
        let config = parse_config(
            r#"
            [manifest]
            location = "https://example.com/gallery/images.json"
            image_base = "https://example.com/gallery/images/"

            [appearance]
            theme = "day"
            columns = 3

            [logging]
            log_level = "warn"

            [keys]
            close = " Q "
            "#,
        )
        .expect("valid config");

        assert_eq!(
            config.manifest_location,
            "https://example.com/gallery/images.json"
        );
        assert_eq!(config.image_base, "https://example.com/gallery/images/");
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.columns, 3);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.key_close, "q");
        assert_eq!(config.key_next, "arrowright");
    }

    #[test]
    fn clamps_out_of_range_values() {
        let config = parse_config(
            r#"
            [manifest]
            location = "   "

            [appearance]
            columns = 0
            thumbnail_height = 5000.0

            [window]
            width = 10.0

            [keys]
            previous = ""
            "#,
        )
        .expect("valid config");

        assert_eq!(config.manifest_location, "images.json");
        assert_eq!(config.columns, MIN_COLUMNS);
        assert_eq!(config.thumbnail_height, 1024.0);
        assert_eq!(config.window_width, 320.0);
        assert_eq!(config.key_previous, "arrowleft");
    }

    #[test]
    fn rejects_unknown_enum_values() {
        assert!(parse_config("[appearance]\ntheme = \"sepia\"\n").is_err());
    }

    #[test]
    fn missing_or_invalid_file_falls_back_to_defaults() {
        let missing = PathBuf::from(format!(
            "/tmp/gallery-config-missing-{}.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&missing), AppConfig::default());

        let invalid = std::env::temp_dir().join(format!(
            "gallery-config-invalid-{}.toml",
            std::process::id()
        ));
        fs::write(&invalid, "[appearance\ncolumns = ").expect("write temp config");
        assert_eq!(load_config(&invalid), AppConfig::default());
        let _ = fs::remove_file(invalid);
    }
}
