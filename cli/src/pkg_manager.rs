#![deny(missing_docs)]

//! # Package Manager Detection
//!
//! Figures out which JavaScript package manager invoked the CLI (npm, pnpm,
//! yarn or bun) from the `npm_config_user_agent` environment variable, and
//! exposes the command lines the init flow needs: install, generator run,
//! version query and the next-steps hints.

use crate::error::CliResult;
use crate::exec::{run_checked, CommandExecutor};
use std::fmt;
use std::path::Path;

/// The supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// npm (the default when detection fails).
    Npm,
    /// pnpm.
    Pnpm,
    /// Yarn (classic).
    Yarn,
    /// Bun.
    Bun,
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl PackageManager {
    /// Parses a `npm_config_user_agent` value (e.g. `pnpm/8.15.1 npm/? node/v20`).
    /// An empty or unrecognized agent falls back to npm.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.starts_with("yarn") {
            PackageManager::Yarn
        } else if user_agent.starts_with("pnpm") {
            PackageManager::Pnpm
        } else if user_agent.starts_with("bun") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    /// The executable name.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments for installing dependencies. Bare `yarn` installs.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Yarn => &[],
            _ => &["install"],
        }
    }

    /// Arguments for running the `kubb` generator script.
    pub fn generate_args(&self) -> &'static [&'static str] {
        &["kubb"]
    }

    /// The dev-server hint printed in the next-steps log.
    pub fn run_dev_hint(&self) -> String {
        match self {
            PackageManager::Npm | PackageManager::Bun => format!("{} run dev", self),
            _ => format!("{} dev", self),
        }
    }

    /// Queries the package manager's version (`<pm> -v`).
    pub fn version<E: CommandExecutor>(&self, executor: &E, cwd: &Path) -> CliResult<String> {
        let output = run_checked(executor, self.command(), &["-v"], cwd, "version query")?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Yarn 3 is known to crash the scaffold flow; callers warn and continue.
pub fn is_unsupported_yarn(user_agent: &str) -> bool {
    user_agent.starts_with("yarn/3")
}
