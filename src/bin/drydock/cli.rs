//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Drydock - build-configuration front-end for C/C++ projects
#[derive(Parser)]
#[command(name = "drydock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure the project for a target platform
    Configure(ConfigureArgs),

    /// Check whether a target platform is supported
    Validate(ValidateArgs),

    /// Print the resolved build layout without touching the filesystem
    Layout(LayoutArgs),

    /// Print the dependency table handed to the package resolver
    Deps(DepsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Target platform flags shared by several commands.
#[derive(Args)]
pub struct PlatformArgs {
    /// Target operating system (defaults to the host)
    #[arg(long)]
    pub os: Option<String>,

    /// Target architecture (defaults to the host)
    #[arg(long)]
    pub arch: Option<String>,

    /// Build variant
    #[arg(long, default_value = "Debug")]
    pub variant: String,

    /// Compiler identity (defaults to probing PATH)
    #[arg(long)]
    pub compiler: Option<String>,
}

#[derive(Args)]
pub struct ConfigureArgs {
    #[command(flatten)]
    pub platform: PlatformArgs,

    /// Path to Drydock.toml (defaults to searching parent directories)
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub platform: PlatformArgs,
}

#[derive(Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub platform: PlatformArgs,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct DepsArgs {
    /// Path to Drydock.toml (defaults to searching parent directories)
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Output format for machine- or human-facing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON on stdout
    Json,
}
