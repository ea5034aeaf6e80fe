//! `drydock layout` command
//!
//! Resolves the build layout for a platform without creating anything.

use anyhow::Result;
use drydock::resolver::{resolve_layout, LayoutStrategy};

use crate::cli::{LayoutArgs, OutputFormat};
use crate::commands::resolve_platform;

pub fn execute(args: LayoutArgs) -> Result<()> {
    let platform = resolve_platform(&args.platform)?;

    let strategy = LayoutStrategy::for_platform(&platform);
    let plan = resolve_layout(&platform);

    match args.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "platform": platform,
                "strategy": strategy,
                "layout": plan,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!("strategy:   {:?}", strategy);
            println!("build:      {}", plan.build_dir.display());
            println!("generators: {}", plan.generators_dir.display());
        }
    }

    Ok(())
}
