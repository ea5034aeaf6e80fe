//! Drydock.toml manifest parsing and schema.
//!
//! The manifest is the declarative description of a project's
//! third-party surface: exact dependency pins, per-dependency build
//! options, and optional build-tool pins. Drydock never interprets the
//! pins beyond validation; they are data for the external
//! package-resolution tool.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::core::dependency::{DependencyOptionSet, DependencyPin};

/// Canonical manifest file name.
pub const MANIFEST_FILE: &str = "Drydock.toml";

/// Package metadata from the [package] section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Package name
    pub name: String,

    /// Package version (semver)
    pub version: String,

    /// Package description
    #[serde(default)]
    pub description: Option<String>,
}

impl PackageMetadata {
    /// Parse the version string as semver.
    pub fn version(&self) -> Result<Version> {
        self.version
            .parse()
            .with_context(|| format!("invalid version: {}", self.version))
    }
}

/// Raw manifest as deserialized from TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    package: PackageMetadata,

    #[serde(default)]
    dependencies: BTreeMap<String, Version>,

    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: BTreeMap<String, Version>,

    #[serde(default)]
    options: DependencyOptionSet,

    #[serde(default)]
    tools: BTreeMap<String, Version>,
}

/// The parsed Drydock.toml manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Package metadata
    pub package: PackageMetadata,

    /// Exact dependency pins
    pub dependencies: BTreeMap<String, Version>,

    /// Development-only dependency pins
    pub dev_dependencies: BTreeMap<String, Version>,

    /// Per-dependency build-option overrides
    pub options: DependencyOptionSet,

    /// Build-tool pins passed through to the orchestrator.
    /// Empty means the orchestrator's ambient toolchain is used.
    pub tools: BTreeMap<String, Version>,

    /// The directory containing this manifest
    pub manifest_dir: PathBuf,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| {
            format!(
                "failed to read manifest: {}\n\
                 help: Run `drydock` from a directory containing {}",
                path.display(),
                MANIFEST_FILE
            )
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest = toml::from_str(content)
            .with_context(|| format!("failed to parse {}", MANIFEST_FILE))?;

        let manifest_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

        // Validate: [options] may only name declared dependencies.
        for dependency in raw.options.dependencies() {
            if !raw.dependencies.contains_key(dependency)
                && !raw.dev_dependencies.contains_key(dependency)
            {
                anyhow::bail!(
                    "manifest at {} sets options for undeclared dependency `{}`\n\
                     help: Add `{}` to [dependencies] or remove its [options] entry",
                    path.display(),
                    dependency,
                    dependency
                );
            }
        }

        Ok(Manifest {
            package: raw.package,
            dependencies: raw.dependencies,
            dev_dependencies: raw.dev_dependencies,
            options: raw.options,
            tools: raw.tools,
            manifest_dir,
        })
    }

    /// Find a manifest by walking up from a starting directory.
    pub fn find(start: &Path) -> Result<PathBuf> {
        let mut dir = Some(start);
        while let Some(current) = dir {
            let candidate = current.join(MANIFEST_FILE);
            if candidate.is_file() {
                return Ok(candidate);
            }
            dir = current.parent();
        }

        anyhow::bail!(
            "could not find {} in {} or any parent directory",
            MANIFEST_FILE,
            start.display()
        )
    }

    /// Flatten the pin tables for external tooling, dev pins last.
    pub fn pins(&self) -> Vec<DependencyPin> {
        let regular = self
            .dependencies
            .iter()
            .map(|(name, version)| DependencyPin::new(name.clone(), version.clone()));
        let dev = self
            .dev_dependencies
            .iter()
            .map(|(name, version)| DependencyPin::new(name.clone(), version.clone()).dev(true));
        regular.chain(dev).collect()
    }
}
