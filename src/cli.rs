//! CLI argument surface

use std::path::PathBuf;

use clap::Parser;

/// sitepush - publish a local artifact to a remote web host
#[derive(Parser, Debug)]
#[command(name = "sitepush")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the publish-settings profile document
    pub publish_settings: PathBuf,

    /// Local artifact to publish: a file, a .zip package, or a directory
    pub source: PathBuf,

    /// JSON result output for scripting
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Delete destination items that are absent at the source
    #[arg(long)]
    pub allow_delete: bool,

    /// Resolve and print the plan without synchronizing
    #[arg(long)]
    pub dry_run: bool,
}
