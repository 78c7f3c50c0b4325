#![deny(missing_docs)]

//! # Repair Command
//!
//! Standalone invocation of the document repair engine: no scaffolding, no
//! dependency installation, no generator run.

use crate::error::CliResult;
use crate::ui;
use std::path::PathBuf;

/// Arguments for the repair command.
#[derive(clap::Args, Debug, Clone)]
pub struct RepairArgs {
    /// Path to the OpenAPI YAML document to repair.
    #[clap(long, default_value = "openapi.yaml")]
    pub swagger_path: PathBuf,

    /// Optional blacklist JSON file of parameters to force-remove.
    #[clap(long)]
    pub blacklist_path: Option<PathBuf>,
}

/// Runs the repair and reports the written destination.
pub fn execute(args: &RepairArgs) -> CliResult<()> {
    let destination =
        scribe_core::repair_document(&args.swagger_path, args.blacklist_path.as_deref())?;

    ui::success(&format!(
        "OpenAPI document processed. Unmatched path parameters removed: {}",
        destination.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::AppError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_repair_command_writes_updated_document() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("openapi.yaml");
        fs::write(
            &source,
            r#"
paths:
  /pets/{petId}:
    get:
      parameters:
        - { name: petId, in: path }
        - { name: ghost, in: path }
"#,
        )
        .unwrap();

        let args = RepairArgs {
            swagger_path: source,
            blacklist_path: None,
        };
        execute(&args).unwrap();

        let updated = dir.path().join("openapi_updated.yaml");
        assert!(updated.exists());
        let content = fs::read_to_string(updated).unwrap();
        assert!(content.contains("petId"));
        assert!(!content.contains("ghost"));
    }

    #[test]
    fn test_repair_command_missing_source() {
        let args = RepairArgs {
            swagger_path: PathBuf::from("/nonexistent/openapi.yaml"),
            blacklist_path: None,
        };
        let res = execute(&args);
        assert!(matches!(
            res,
            Err(crate::error::CliError::Core(AppError::NotFound(_)))
        ));
    }
}
