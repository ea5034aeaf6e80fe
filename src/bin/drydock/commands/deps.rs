//! `drydock deps` command
//!
//! Prints the dependency pin table and merged option set exactly as
//! they are handed to the external package-resolution tool.

use anyhow::Result;
use drydock::core::manifest::Manifest;
use drydock::resolver::effective_dependency_options;

use crate::cli::{DepsArgs, OutputFormat};

pub fn execute(args: DepsArgs) -> Result<()> {
    let manifest_path = match args.manifest_path {
        Some(path) => path,
        None => Manifest::find(&std::env::current_dir()?)?,
    };
    let manifest = Manifest::load(&manifest_path)?;

    let pins = manifest.pins();
    let options = effective_dependency_options(&manifest);

    match args.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "dependencies": pins,
                "options": options,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            for pin in &pins {
                if pin.is_dev() {
                    println!("{} (dev)", pin);
                } else {
                    println!("{}", pin);
                }
            }
            if !options.is_empty() {
                println!();
                for (dependency, opts) in options.iter() {
                    for (option, value) in opts {
                        println!("{}.{} = {}", dependency, option, value);
                    }
                }
            }
        }
    }

    Ok(())
}
