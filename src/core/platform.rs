//! Target platform description.
//!
//! A `PlatformDescriptor` carries the facts the invoking build
//! orchestrator knows about the target: operating system, architecture,
//! build variant, and compiler identity. It is assembled once per
//! configuration run and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a platform value from a string.
#[derive(Debug, Clone, Error)]
#[error("invalid {kind} '{value}', valid values: {valid}")]
pub struct PlatformParseError {
    kind: &'static str,
    value: String,
    valid: &'static str,
}

impl PlatformParseError {
    fn new(kind: &'static str, value: &str, valid: &'static str) -> Self {
        PlatformParseError {
            kind,
            value: value.to_string(),
            valid,
        }
    }
}

/// Target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    /// Linux
    Linux,
    /// Microsoft Windows
    Windows,
    /// Apple macOS
    Macos,
    /// FreeBSD
    FreeBsd,
}

impl OperatingSystem {
    /// Get the operating system name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Linux => "linux",
            OperatingSystem::Windows => "windows",
            OperatingSystem::Macos => "macos",
            OperatingSystem::FreeBsd => "freebsd",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(OperatingSystem::Linux),
            "windows" => Ok(OperatingSystem::Windows),
            "macos" | "darwin" => Ok(OperatingSystem::Macos),
            "freebsd" => Ok(OperatingSystem::FreeBsd),
            _ => Err(PlatformParseError::new(
                "operating system",
                s,
                "linux, windows, macos, freebsd",
            )),
        }
    }
}

/// Target CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// x86-64 (64-bit)
    #[serde(rename = "x86_64")]
    X86_64,
    /// ARM 64-bit
    Arm64,
    /// x86 (32-bit)
    X86,
}

impl Architecture {
    /// Get the architecture name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::X86_64 => "x86_64",
            Architecture::Arm64 => "arm64",
            Architecture::X86 => "x86",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x86_64" | "amd64" => Ok(Architecture::X86_64),
            "arm64" | "aarch64" => Ok(Architecture::Arm64),
            "x86" | "i686" => Ok(Architecture::X86),
            _ => Err(PlatformParseError::new(
                "architecture",
                s,
                "x86_64, arm64, x86",
            )),
        }
    }
}

/// Build variant (optimization/debug-info profile).
///
/// The vocabulary is the downstream build-file generator's: the variant
/// name flows verbatim into generated paths and generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildVariant {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildVariant {
    /// Get the variant name as the downstream generator spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "Debug",
            BuildVariant::Release => "Release",
            BuildVariant::RelWithDebInfo => "RelWithDebInfo",
            BuildVariant::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildVariant {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildVariant::Debug),
            "release" => Ok(BuildVariant::Release),
            "relwithdebinfo" => Ok(BuildVariant::RelWithDebInfo),
            "minsizerel" => Ok(BuildVariant::MinSizeRel),
            _ => Err(PlatformParseError::new(
                "build variant",
                s,
                "Debug, Release, RelWithDebInfo, MinSizeRel",
            )),
        }
    }
}

/// The family of a compiler toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerFamily {
    /// GCC (GNU Compiler Collection)
    Gcc,
    /// Clang/LLVM
    Clang,
    /// Apple Clang (macOS)
    #[serde(rename = "apple-clang")]
    AppleClang,
    /// Microsoft Visual C++
    Msvc,
}

impl CompilerFamily {
    /// Get the family name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerFamily::Gcc => "gcc",
            CompilerFamily::Clang => "clang",
            CompilerFamily::AppleClang => "apple-clang",
            CompilerFamily::Msvc => "msvc",
        }
    }

    /// Whether this toolchain multiplexes build variants internally.
    ///
    /// A multi-configuration toolchain generates a single project able
    /// to produce every build variant without re-generating, so the
    /// variant must not be baked into generated paths. Capability fact,
    /// not configuration.
    pub fn multiplexes_variants(&self) -> bool {
        matches!(self, CompilerFamily::Msvc)
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compiler identity as supplied by the orchestrator.
///
/// The identity is an open string ("gcc", "msvc-19.3", "clang-17");
/// the recognized family prefix is what drives layout decisions.
/// Unrecognized spellings are kept verbatim and behave as
/// single-configuration toolchains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompilerId(String);

impl CompilerId {
    /// Create a compiler identity from its spelling.
    pub fn new(id: impl Into<String>) -> Self {
        CompilerId(id.into())
    }

    /// Get the identity as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the compiler family, if the spelling is recognized.
    pub fn family(&self) -> Option<CompilerFamily> {
        let id = self.0.to_lowercase();
        if id.starts_with("apple-clang") {
            Some(CompilerFamily::AppleClang)
        } else if id.starts_with("clang") {
            Some(CompilerFamily::Clang)
        } else if id.starts_with("gcc") || id.starts_with("g++") || id == "cc" {
            Some(CompilerFamily::Gcc)
        } else if id.starts_with("msvc") || id == "cl" || id.starts_with("visual-studio") {
            Some(CompilerFamily::Msvc)
        } else {
            None
        }
    }
}

impl fmt::Display for CompilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CompilerId {
    fn from(s: &str) -> Self {
        CompilerId::new(s)
    }
}

/// The facts the orchestrator supplies about the target platform.
///
/// Immutable once assembled; every resolver function takes it by
/// reference and derives its answer without side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    /// Target operating system
    pub os: OperatingSystem,

    /// Target CPU architecture
    pub arch: Architecture,

    /// Build variant
    pub variant: BuildVariant,

    /// Compiler identity, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CompilerId>,
}

impl PlatformDescriptor {
    /// Create a descriptor with no compiler identity.
    pub fn new(os: OperatingSystem, arch: Architecture, variant: BuildVariant) -> Self {
        PlatformDescriptor {
            os,
            arch,
            variant,
            compiler: None,
        }
    }

    /// Set the compiler identity.
    pub fn with_compiler(mut self, compiler: impl Into<CompilerId>) -> Self {
        self.compiler = Some(compiler.into());
        self
    }

    /// Resolve the compiler family, if a recognized compiler is set.
    pub fn compiler_family(&self) -> Option<CompilerFamily> {
        self.compiler.as_ref().and_then(CompilerId::family)
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}", self.os, self.arch, self.variant)?;
        if let Some(ref compiler) = self.compiler {
            write!(f, ", {}", compiler)?;
        }
        write!(f, ")")
    }
}
