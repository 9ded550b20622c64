mod core;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    LoadManifest,
    FetchImages(Vec<String>),
    ResetScroll,
}
