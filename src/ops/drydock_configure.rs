//! The configure operation.
//!
//! Runs the whole configuration pipeline for one platform: validate,
//! resolve layout and dependency options, create the layout
//! directories, and write the generator configuration consumed by the
//! external package-resolution and build-file-generation tools.
//!
//! Validation failure aborts before anything is written; an
//! unsupported platform leaves the filesystem untouched.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use semver::Version;
use serde::Serialize;

use crate::core::dependency::DependencyOptionSet;
use crate::core::manifest::Manifest;
use crate::core::platform::PlatformDescriptor;
use crate::resolver::{
    effective_dependency_options, resolve_layout, validate, LayoutPlan, LayoutStrategy,
};
use crate::util::fs::{ensure_dir, write_string};

/// File name of the generator configuration written for external tooling.
pub const GENERATOR_CONFIG_FILE: &str = "drydock.toml";

/// The generator configuration handed to external tooling.
///
/// Everything downstream tools need in one declarative file: resolved
/// paths, the platform facts they were resolved from, and the
/// dependency table verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorConfig {
    /// Platform the run was configured for
    pub platform: PlatformDescriptor,

    /// Layout strategy and resolved paths (relative to the project root)
    pub layout: LayoutSection,

    /// Exact dependency pins for the package-resolution tool
    pub dependencies: BTreeMap<String, Version>,

    /// Development-only pins
    #[serde(rename = "dev-dependencies", skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, Version>,

    /// Build-tool pins, passed through verbatim
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tools: BTreeMap<String, Version>,

    /// Merged dependency build options
    pub options: DependencyOptionSet,
}

/// Layout section of the generator configuration.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutSection {
    /// Selected layout strategy
    pub strategy: LayoutStrategy,

    /// Directory for build output
    pub build_dir: PathBuf,

    /// Directory for generated build-system configuration
    pub generators_dir: PathBuf,
}

/// Result of a configure run.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigureOutcome {
    /// Platform the run was configured for
    pub platform: PlatformDescriptor,

    /// Selected layout strategy
    pub strategy: LayoutStrategy,

    /// Resolved layout, rooted at the project directory
    pub layout: LayoutPlan,

    /// Merged dependency build options
    pub options: DependencyOptionSet,

    /// Path of the written generator configuration
    pub generator_config: PathBuf,
}

/// Configure a project for one platform.
pub fn configure(manifest: &Manifest, platform: &PlatformDescriptor) -> Result<ConfigureOutcome> {
    // Fail fast: nothing may be written for an unsupported platform.
    validate(platform).into_result()?;

    let strategy = LayoutStrategy::for_platform(platform);
    let relative = resolve_layout(platform);
    let layout = relative.rooted_at(&manifest.manifest_dir);
    let options = effective_dependency_options(manifest);

    tracing::info!(
        "configuring {} for {} ({:?} layout)",
        manifest.package.name,
        platform,
        strategy
    );

    ensure_dir(&layout.build_dir)?;
    ensure_dir(&layout.generators_dir)?;

    let config = GeneratorConfig {
        platform: platform.clone(),
        layout: LayoutSection {
            strategy,
            build_dir: relative.build_dir,
            generators_dir: relative.generators_dir,
        },
        dependencies: manifest.dependencies.clone(),
        dev_dependencies: manifest.dev_dependencies.clone(),
        tools: manifest.tools.clone(),
        options: options.clone(),
    };

    let generator_config = layout.generators_dir.join(GENERATOR_CONFIG_FILE);
    let content =
        toml::to_string_pretty(&config).context("failed to serialize generator configuration")?;
    write_string(&generator_config, &content)?;

    tracing::info!("wrote generator configuration: {}", generator_config.display());

    Ok(ConfigureOutcome {
        platform: platform.clone(),
        strategy,
        layout,
        options,
        generator_config,
    })
}
