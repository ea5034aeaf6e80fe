//! `drydock configure` command

use anyhow::Result;
use drydock::core::manifest::Manifest;
use drydock::ops::configure;

use crate::cli::{ConfigureArgs, OutputFormat};
use crate::commands::resolve_platform;

pub fn execute(args: ConfigureArgs) -> Result<()> {
    let platform = resolve_platform(&args.platform)?;

    let manifest_path = match args.manifest_path {
        Some(path) => path,
        None => Manifest::find(&std::env::current_dir()?)?,
    };
    let manifest = Manifest::load(&manifest_path)?;

    let outcome = configure(&manifest, &platform)?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Text => {
            eprintln!("    Configured {} for {}", manifest.package.name, outcome.platform);
            eprintln!("       build dir: {}", outcome.layout.build_dir.display());
            eprintln!("      generators: {}", outcome.layout.generators_dir.display());
        }
    }

    Ok(())
}
