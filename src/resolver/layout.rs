//! Build-layout resolution.
//!
//! The layout decides where generated build files and artifacts live.
//! The invariant it must uphold: paths are unique per
//! (operating system, compiler family, build variant) combination, so
//! parallel configuration runs for different variants never collide on
//! disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::platform::PlatformDescriptor;

/// Root directory for everything the configuration run generates.
const BUILD_ROOT: &str = "build";

/// Subdirectory for generator configuration files.
const GENERATORS_DIR: &str = "generators";

/// How the toolchain handles build variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    /// The toolchain generates one project that multiplexes every
    /// variant internally; the variant stays out of generated paths.
    MultiConfig,
    /// One generated project per variant; the variant becomes a
    /// directory level so variants get disjoint trees.
    SingleConfig,
}

impl LayoutStrategy {
    /// Select the strategy for a platform via the compiler capability.
    ///
    /// Unknown or absent compiler identities fall back to
    /// single-configuration, the conservative choice: it never relies
    /// on the generated project to keep variants apart.
    pub fn for_platform(platform: &PlatformDescriptor) -> Self {
        match platform.compiler_family() {
            Some(family) if family.multiplexes_variants() => LayoutStrategy::MultiConfig,
            _ => LayoutStrategy::SingleConfig,
        }
    }
}

/// Resolved on-disk layout for a configuration run.
///
/// Paths are relative to the project root; the configure operation
/// joins them onto the manifest directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Directory for build output
    pub build_dir: PathBuf,

    /// Directory for generated build-system configuration
    pub generators_dir: PathBuf,
}

impl LayoutPlan {
    /// Resolve the plan against a project root directory.
    pub fn rooted_at(&self, root: &Path) -> LayoutPlan {
        LayoutPlan {
            build_dir: root.join(&self.build_dir),
            generators_dir: root.join(&self.generators_dir),
        }
    }
}

/// Resolve the on-disk layout for a platform.
///
/// Total over well-formed descriptors; validation is a separate,
/// earlier step.
pub fn resolve_layout(platform: &PlatformDescriptor) -> LayoutPlan {
    let build_dir = match LayoutStrategy::for_platform(platform) {
        LayoutStrategy::MultiConfig => PathBuf::from(BUILD_ROOT),
        LayoutStrategy::SingleConfig => Path::new(BUILD_ROOT).join(platform.variant.as_str()),
    };
    let generators_dir = build_dir.join(GENERATORS_DIR);

    LayoutPlan {
        build_dir,
        generators_dir,
    }
}
