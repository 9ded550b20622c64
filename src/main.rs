//! Entry point for the gallery viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI, which loads the manifest and builds the gallery.

mod app;
mod config;
mod gallery;
mod manifest;

use crate::app::run_app;
use crate::config::load_config;
use crate::manifest::ManifestSource;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
const USAGE: &str = "Usage: gallery [MANIFEST] [--config PATH] [--image-base BASE]";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    manifest: Option<String>,
    config_path: Option<PathBuf>,
    image_base: Option<String>,
    help: bool,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    let config_path = args
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config = load_config(&config_path);
    if let Some(manifest) = args.manifest {
        config.manifest_location = manifest;
    }
    if let Some(image_base) = args.image_base {
        config.image_base = image_base;
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let source = ManifestSource::parse(&config.manifest_location);
    info!(
        config = %config_path.display(),
        manifest = %source,
        image_base = %config.image_base,
        level = %config.log_level,
        "Starting gallery"
    );
    run_app(config, source).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--config needs a path\n{USAGE}"))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--image-base" => {
                let base = args
                    .next()
                    .ok_or_else(|| anyhow!("--image-base needs a value\n{USAGE}"))?;
                parsed.image_base = Some(base);
            }
            "-h" | "--help" => {
                parsed.help = true;
                return Ok(parsed);
            }
            flag if flag.starts_with("--") => {
                return Err(anyhow!("Unknown option {flag}\n{USAGE}"));
            }
            other => {
                if parsed.manifest.is_some() {
                    return Err(anyhow!("Unexpected argument {other}\n{USAGE}"));
                }
                parsed.manifest = Some(other.to_string());
            }
        }
    }
    Ok(parsed)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        info!("RUST_LOG is set; keeping it over config.log_level");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_use_config() {
        assert_eq!(parse_args(args(&[])).expect("parsed"), CliArgs::default());
    }

    #[test]
    fn positional_manifest_and_options() {
        let parsed = parse_args(args(&[
            "https://example.com/images.json",
            "--config",
            "alt.toml",
            "--image-base",
            "https://example.com/images/",
        ]))
        .expect("parsed");
        assert_eq!(
            parsed.manifest.as_deref(),
            Some("https://example.com/images.json")
        );
        assert_eq!(parsed.config_path, Some(PathBuf::from("alt.toml")));
        assert_eq!(
            parsed.image_base.as_deref(),
            Some("https://example.com/images/")
        );
    }

    #[test]
    fn help_is_not_an_error() {
        for flag in ["--help", "-h"] {
            let parsed = parse_args(args(&["images.json", flag, "--bogus"])).expect("help");
            assert!(parsed.help);
        }
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
    }
}
