//! `drydock validate` command

use anyhow::Result;
use drydock::resolver::validate;

use crate::cli::ValidateArgs;
use crate::commands::resolve_platform;

pub fn execute(args: ValidateArgs) -> Result<()> {
    let platform = resolve_platform(&args.platform)?;

    validate(&platform).into_result()?;

    eprintln!("    Supported {}", platform);
    Ok(())
}
