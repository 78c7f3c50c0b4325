#![deny(missing_docs)]

//! # sdk-scribe CLI
//!
//! Scaffolds kubb SDK generation from a swagger/OpenAPI file.
//!
//! Supported Commands:
//! - `init`: writes the generator config, records dependencies, installs
//!   them, repairs the OpenAPI document and runs the generator.
//! - `repair`: runs only the document repair step.

use clap::{Parser, Subcommand};

use crate::error::CliResult;
use crate::exec::ShellExecutor;

mod error;
mod exec;
mod init;
mod installer;
mod pkg_manager;
mod repair;
mod scaffold;
mod ui;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates kubb SDK hooks from a swagger file")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffold the generator setup and produce the SDK.
    Init(init::InitArgs),
    /// Repair an OpenAPI document without scaffolding anything.
    Repair(repair::RepairArgs),
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init(args) => {
            // Injecting the real process runner
            let executor = ShellExecutor;
            init::execute(args, &executor)?;
        }
        Commands::Repair(args) => {
            repair::execute(args)?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        ui::error(&format!("{}", err));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
