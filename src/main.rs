//! sitepush CLI
//!
//! Usage: sitepush <publish_settings> <source>
//!
//! Publishes a file, a .zip package, or a directory tree to the remote host
//! described by a publish-settings profile.

use std::process;

use clap::Parser;

use sitepush::cli::Cli;
use sitepush::commands;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Every failure, argument errors included, exits with code 1
            let _ = err.print();
            process::exit(1);
        }
    };

    if let Err(err) = commands::publish::run(&cli) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
