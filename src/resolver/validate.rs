//! Platform support validation.
//!
//! Validation is the gate in front of everything else: an unsupported
//! platform must abort the configuration run before any artifact is
//! written.

use thiserror::Error;

use crate::core::platform::{Architecture, OperatingSystem, PlatformDescriptor};

/// Fatal error for platforms outside the supported set.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct UnsupportedConfiguration {
    /// Human-readable reason naming the unsupported combination
    pub reason: String,
}

/// Outcome of platform validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The platform is in the supported set.
    Supported,
    /// The platform is outside the supported set.
    Unsupported {
        /// Human-readable reason naming the unsupported combination
        reason: String,
    },
}

impl ValidationResult {
    /// Check if the platform was accepted.
    pub fn is_supported(&self) -> bool {
        matches!(self, ValidationResult::Supported)
    }

    /// Convert into a `Result`, turning `Unsupported` into the fatal error.
    pub fn into_result(self) -> Result<(), UnsupportedConfiguration> {
        match self {
            ValidationResult::Supported => Ok(()),
            ValidationResult::Unsupported { reason } => Err(UnsupportedConfiguration { reason }),
        }
    }
}

/// Check whether the target platform is supported.
///
/// Supported means Linux on x86_64; compiler and build variant never
/// affect the verdict. Total over all descriptors.
pub fn validate(platform: &PlatformDescriptor) -> ValidationResult {
    if platform.os == OperatingSystem::Linux && platform.arch == Architecture::X86_64 {
        ValidationResult::Supported
    } else {
        ValidationResult::Unsupported {
            reason: format!(
                "Only Linux and x86_64 currently supported (got {}/{})",
                platform.os, platform.arch
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::BuildVariant;

    fn platform(os: OperatingSystem, arch: Architecture) -> PlatformDescriptor {
        PlatformDescriptor::new(os, arch, BuildVariant::Debug)
    }

    #[test]
    fn test_linux_x86_64_supported_regardless_of_compiler_and_variant() {
        for variant in [
            BuildVariant::Debug,
            BuildVariant::Release,
            BuildVariant::RelWithDebInfo,
            BuildVariant::MinSizeRel,
        ] {
            for compiler in ["gcc", "clang", "msvc", "tcc"] {
                let platform = PlatformDescriptor::new(
                    OperatingSystem::Linux,
                    Architecture::X86_64,
                    variant,
                )
                .with_compiler(compiler);
                assert!(validate(&platform).is_supported());
            }
        }
    }

    #[test]
    fn test_non_linux_unsupported() {
        for os in [
            OperatingSystem::Windows,
            OperatingSystem::Macos,
            OperatingSystem::FreeBsd,
        ] {
            let result = validate(&platform(os, Architecture::X86_64));
            assert!(!result.is_supported());
        }
    }

    #[test]
    fn test_non_x86_64_unsupported() {
        for arch in [Architecture::Arm64, Architecture::X86] {
            let result = validate(&platform(OperatingSystem::Linux, arch));
            assert!(!result.is_supported());
        }
    }

    #[test]
    fn test_unsupported_reason_names_combination() {
        let result = validate(&platform(OperatingSystem::Windows, Architecture::X86_64));
        match result {
            ValidationResult::Unsupported { reason } => {
                assert!(reason.contains("Only Linux and x86_64 currently supported"));
                assert!(reason.contains("windows"));
            }
            ValidationResult::Supported => panic!("expected unsupported"),
        }
    }

    #[test]
    fn test_into_result() {
        assert!(validate(&platform(OperatingSystem::Linux, Architecture::X86_64))
            .into_result()
            .is_ok());

        let err = validate(&platform(OperatingSystem::Linux, Architecture::Arm64))
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("arm64"));
    }
}
