//! Built-in dependency option overrides.

use crate::core::dependency::DependencyOptionSet;
use crate::core::manifest::Manifest;

/// The static default option set.
///
/// Independent of platform: the windowing library's wayland backend is
/// disabled for every configuration. Projects extend or override these
/// via the manifest's `[options]` table.
pub fn default_dependency_options() -> DependencyOptionSet {
    let mut options = DependencyOptionSet::new();
    options.set("sdl", "wayland", false);
    options
}

/// Merge the manifest's `[options]` over the built-in defaults.
pub fn effective_dependency_options(manifest: &Manifest) -> DependencyOptionSet {
    let mut options = default_dependency_options();
    options.merge(&manifest.options);
    options
}
