//! Loads the ordered list of image filenames from the gallery manifest.
//!
//! The manifest is a JSON array of strings, either on the local filesystem or
//! behind an `http(s)` URL. Loading never fails from the caller's point of
//! view: any problem is logged and the gallery starts empty.
//!
//! Remote image bytes are fetched here as well so all HTTP access shares one
//! place.

use anyhow::{Context, Result, anyhow};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Where the manifest lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Remote(String),
    Local(PathBuf),
}

impl ManifestSource {
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if is_remote(trimmed) {
            ManifestSource::Remote(trimmed.to_string())
        } else {
            ManifestSource::Local(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::Remote(url) => f.write_str(url),
            ManifestSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// True for locations that must be fetched over HTTP.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Load the image list, degrading to an empty list on any failure.
pub async fn load_image_list(source: &ManifestSource) -> Vec<String> {
    match fetch_image_list(source).await {
        Ok(images) => {
            info!(source = %source, count = images.len(), "Loaded image manifest");
            images
        }
        Err(err) => {
            warn!(
                source = %source,
                "Could not load image manifest; update the file or add filenames to it: {err:#}"
            );
            Vec::new()
        }
    }
}

pub async fn fetch_image_list(source: &ManifestSource) -> Result<Vec<String>> {
    let body = match source {
        ManifestSource::Remote(url) => fetch_remote(url).await?,
        ManifestSource::Local(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read manifest {}", path.display()))?,
    };
    parse_image_list(&body)
}

async fn fetch_remote(url: &str) -> Result<String> {
    debug!(%url, "Fetching manifest without cache");
    let response = reqwest::Client::new()
        .get(url)
        .header(CACHE_CONTROL, "no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .with_context(|| format!("Failed to request manifest {url}"))?
        .error_for_status()
        .with_context(|| format!("Manifest request to {url} was not successful"))?;
    response
        .text()
        .await
        .with_context(|| format!("Failed to read manifest body from {url}"))
}

/// Download a remote image. Unlike the manifest, images may come from cache.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to request {url}"))?
        .error_for_status()
        .with_context(|| format!("Request to {url} was not successful"))?;
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read body from {url}"))?;
    Ok(bytes.to_vec())
}

/// Strictly decode a JSON array of filename strings.
pub fn parse_image_list(body: &str) -> Result<Vec<String>> {
    let value: serde_json::Value =
        serde_json::from_str(body).context("Manifest is not valid JSON")?;
    let serde_json::Value::Array(entries) = value else {
        return Err(anyhow!("Manifest must be a JSON array of filenames"));
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| match entry {
            serde_json::Value::String(name) => Ok(name),
            other => Err(anyhow!("Manifest entry {idx} is not a string: {other}")),
        })
        .collect()
}
