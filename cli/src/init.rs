#![deny(missing_docs)]

//! # Init Command
//!
//! The full scaffold flow:
//! 1. Detect the user's package manager (warning on Yarn 3).
//! 2. Resolve options (flags, or prompts on an attended terminal).
//! 3. Write the generator config pointing at the `_updated` document.
//! 4. Record the selected bundles' dependencies in `package.json`.
//! 5. Record init metadata and the package manager version.
//! 6. Install dependencies unless `--no-install`.
//! 7. Repair the OpenAPI document.
//! 8. Run the kubb generator.
//! 9. Log next steps.

use crate::error::{CliError, CliResult};
use crate::exec::{run_checked, CommandExecutor};
use crate::installer::{add_package_dependencies, record_init_metadata, AvailablePackage};
use crate::pkg_manager::{is_unsupported_yarn, PackageManager};
use crate::{scaffold, ui};
use std::env;
use std::path::PathBuf;

/// Arguments for the init command.
#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    /// Path to the swagger/OpenAPI YAML file to import.
    #[clap(long)]
    pub swagger_path: PathBuf,

    /// Optional blacklist JSON file of parameters to force-remove.
    #[clap(long)]
    pub blacklist_path: Option<PathBuf>,

    /// Project directory holding the package.json to scaffold into.
    #[clap(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Explicitly tell the CLI to not run the package manager's install command.
    #[clap(long)]
    pub no_install: bool,

    /// Bypass the prompts and use all default options.
    #[clap(short = 'y', long = "default")]
    pub use_defaults: bool,

    /// Import alias used by the generated code.
    #[clap(long, default_value = "~/")]
    pub import_alias: String,
}

/// Options after flags and prompts have been reconciled.
#[derive(Debug, Clone, PartialEq)]
struct ResolvedOptions {
    packages: Vec<AvailablePackage>,
    no_install: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            packages: vec![AvailablePackage::KubbTanstack],
            no_install: false,
        }
    }
}

/// Executes the scaffold flow.
///
/// # Arguments
///
/// * `args` - Command arguments including all paths.
/// * `executor` - The command runner (use `ShellExecutor` for real execution).
pub fn execute<E: CommandExecutor>(args: &InitArgs, executor: &E) -> CliResult<()> {
    validate_import_alias(&args.import_alias)?;

    // 1. Package manager, from a single read of the user agent
    let user_agent = env::var("npm_config_user_agent").unwrap_or_default();
    let pkg_manager = PackageManager::from_user_agent(&user_agent);
    if is_unsupported_yarn(&user_agent) {
        ui::warn(
            "WARNING: Yarn 3 is currently not supported and likely to crash. \
             Please use pnpm, npm, or Yarn Classic.",
        );
    }
    ui::info(&format!("Using: {}", pkg_manager));

    // 2. Resolve options
    let options = resolve_options(args, pkg_manager)?;

    // 3. Generator config, pointed at the repaired document's future path
    let updated_path = scribe_core::derive_updated_path(&args.swagger_path);
    scaffold::write_kubb_config(&args.project_dir, &updated_path, &options.packages)?;
    ui::info(&format!("Scaffolding in: {}", args.project_dir.display()));

    // 4. Dependency bookkeeping per selected bundle
    for package in &options.packages {
        add_package_dependencies(&args.project_dir, package.dependencies(), false)?;
        ui::success(&format!("Added boilerplate for {}", package.label()));
    }

    // 5. Init metadata. Bun reports no usable version, matching upstream behavior.
    let manager_field = if pkg_manager == PackageManager::Bun {
        None
    } else {
        let version = pkg_manager.version(executor, &args.project_dir)?;
        Some(format!("{}@{}", pkg_manager, version))
    };
    record_init_metadata(
        &args.project_dir,
        env!("CARGO_PKG_VERSION"),
        manager_field.as_deref(),
    )?;

    // 6. Install
    if options.no_install {
        ui::info("Skipping dependency installation.");
    } else {
        ui::info(&format!("Running {} install...", pkg_manager));
        run_checked(
            executor,
            pkg_manager.command(),
            pkg_manager.install_args(),
            &args.project_dir,
            "dependency installation",
        )?;
        ui::success("Successfully installed dependencies!");
    }

    // 7. Document repair
    ui::info(&format!(
        "Running the schema validation for {}...",
        args.swagger_path.display()
    ));
    let destination =
        scribe_core::repair_document(&args.swagger_path, args.blacklist_path.as_deref())?;
    ui::success(&format!(
        "OpenAPI document processed. Unmatched path parameters removed: {}",
        destination.display()
    ));

    // 8. Generator run
    ui::info("Creating the API hooks...");
    run_checked(
        executor,
        pkg_manager.command(),
        pkg_manager.generate_args(),
        &args.project_dir,
        "kubb generation",
    )?;
    ui::success("Successfully created the APIs!");

    // 9. Next steps
    log_next_steps(pkg_manager, options.no_install);

    Ok(())
}

fn resolve_options(args: &InitArgs, pkg_manager: PackageManager) -> CliResult<ResolvedOptions> {
    if args.use_defaults {
        return Ok(ResolvedOptions {
            no_install: args.no_install,
            ..ResolvedOptions::default()
        });
    }

    if !ui::is_interactive() {
        ui::warn("sdk-scribe needs an interactive terminal to provide options; continuing with defaults.");
        return Ok(ResolvedOptions {
            no_install: args.no_install,
            ..ResolvedOptions::default()
        });
    }

    let mut packages = Vec::new();
    for package in AvailablePackage::ALL {
        let default_yes = package == AvailablePackage::KubbTanstack;
        if ui::confirm(&format!("Add the {} bundle?", package.label()), default_yes)? {
            packages.push(package);
        }
    }
    if packages.is_empty() {
        return Err(CliError::General(
            "No generator bundle selected; nothing to scaffold".to_string(),
        ));
    }

    let no_install = if args.no_install {
        true
    } else {
        let question = match pkg_manager {
            PackageManager::Yarn => format!("Should we run '{}' for you?", pkg_manager),
            _ => format!("Should we run '{} install' for you?", pkg_manager),
        };
        !ui::confirm(&question, true)?
    };

    Ok(ResolvedOptions {
        packages,
        no_install,
    })
}

fn validate_import_alias(alias: &str) -> CliResult<()> {
    if alias.is_empty() || alias.chars().any(char::is_whitespace) {
        return Err(CliError::General(format!(
            "Invalid import alias '{}': must be non-empty and contain no whitespace",
            alias
        )));
    }
    Ok(())
}

fn log_next_steps(pkg_manager: PackageManager, no_install: bool) {
    ui::info("Next steps:");
    if no_install {
        match pkg_manager {
            PackageManager::Yarn => ui::info("  yarn"),
            _ => ui::info(&format!("  {} install", pkg_manager)),
        }
    }
    ui::info(&format!("  {}", pkg_manager.run_dev_hint()));
}
