//! Command implementations

use anyhow::Result;
use drydock::core::platform::{Architecture, BuildVariant, OperatingSystem, PlatformDescriptor};
use drydock::util::host;

use crate::cli::PlatformArgs;

pub mod completions;
pub mod configure;
pub mod deps;
pub mod layout;
pub mod validate;

/// Assemble the platform descriptor from flags, defaulting from the host.
pub fn resolve_platform(args: &PlatformArgs) -> Result<PlatformDescriptor> {
    let os = match &args.os {
        Some(os) => os.parse::<OperatingSystem>().map_err(|e| anyhow::anyhow!("{}", e))?,
        None => host::host_os(),
    };

    let arch = match &args.arch {
        Some(arch) => arch.parse::<Architecture>().map_err(|e| anyhow::anyhow!("{}", e))?,
        None => host::host_arch(),
    };

    let variant = args
        .variant
        .parse::<BuildVariant>()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let mut platform = PlatformDescriptor::new(os, arch, variant);
    platform.compiler = match &args.compiler {
        Some(compiler) => Some(compiler.as_str().into()),
        None => host::detect_compiler(),
    };

    Ok(platform)
}
