//! Host platform probing.
//!
//! Fills in platform facts the orchestrator did not supply: OS and
//! architecture from the running process, compiler by searching PATH.

use crate::core::platform::{Architecture, CompilerId, OperatingSystem};

/// The operating system this process runs on.
pub fn host_os() -> OperatingSystem {
    if cfg!(target_os = "windows") {
        OperatingSystem::Windows
    } else if cfg!(target_os = "macos") {
        OperatingSystem::Macos
    } else if cfg!(target_os = "freebsd") {
        OperatingSystem::FreeBsd
    } else {
        OperatingSystem::Linux
    }
}

/// The architecture this process runs on.
pub fn host_arch() -> Architecture {
    if cfg!(target_arch = "aarch64") {
        Architecture::Arm64
    } else if cfg!(target_arch = "x86") {
        Architecture::X86
    } else {
        Architecture::X86_64
    }
}

/// Probe PATH for a compiler and report its identity.
///
/// Searches in host-dependent order: `cl` first on Windows, then
/// `gcc`, `clang`, `cc`. A miss is not an error; the caller proceeds
/// with an unknown compiler and the layout falls back to
/// single-configuration.
pub fn detect_compiler() -> Option<CompilerId> {
    use which::which;

    if host_os() == OperatingSystem::Windows && which("cl").is_ok() {
        tracing::debug!("detected compiler: cl (msvc)");
        return Some(CompilerId::new("msvc"));
    }

    if which("gcc").is_ok() {
        tracing::debug!("detected compiler: gcc");
        return Some(CompilerId::new("gcc"));
    }

    if which("clang").is_ok() {
        let id = if host_os() == OperatingSystem::Macos {
            "apple-clang"
        } else {
            "clang"
        };
        tracing::debug!("detected compiler: clang ({})", id);
        return Some(CompilerId::new(id));
    }

    if which("cc").is_ok() {
        tracing::debug!("detected compiler: cc (gcc family)");
        return Some(CompilerId::new("cc"));
    }

    tracing::warn!("no C compiler found on PATH; layout will assume single-configuration");
    None
}
