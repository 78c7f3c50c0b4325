#![deny(missing_docs)]

//! # Process Invocation
//!
//! Handles the invocation of external tools: the user's package manager
//! (for `install` and for running the `kubb` generator script).
//!
//! Abstracted behind a trait so command execution can be mocked in tests
//! without requiring npm/pnpm/yarn/bun to be installed.

use crate::error::{CliError, CliResult};
use std::path::Path;
use std::process::{Command, Output};

/// Interface for executing an external command.
pub trait CommandExecutor {
    /// Executes the command in the given working directory and returns its output.
    fn execute(&self, program: &str, args: &[&str], cwd: &Path) -> CliResult<Output>;
}

/// Standard executor using `std::process::Command`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str], cwd: &Path) -> CliResult<Output> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;
        Ok(output)
    }
}

/// Runs a command and turns a non-zero exit into a `CliError::General`
/// carrying the captured stderr and the failing step's name.
pub fn run_checked<E: CommandExecutor>(
    executor: &E,
    program: &str,
    args: &[&str],
    cwd: &Path,
    step: &str,
) -> CliResult<Output> {
    let output = executor.execute(program, args, cwd)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::General(format!(
            "{} failed with status {}: {}",
            step, output.status, stderr
        )));
    }

    Ok(output)
}


#[cfg(test)]
mod tests {
    use super::testing::MockExecutor;
    use super::*;

    #[test]
    fn test_run_checked_success() {
        let executor = MockExecutor::new(false);
        let res = run_checked(&executor, "npm", &["install"], Path::new("."), "install");
        assert!(res.is_ok());

        let calls = executor.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "npm");
        assert_eq!(calls[0].1, vec!["install"]);
    }

    #[test]
    fn test_run_checked_failure_names_step() {
        let executor = MockExecutor::new(true);
        let res = run_checked(&executor, "npm", &["kubb"], Path::new("."), "kubb generation");

        match res.unwrap_err() {
            CliError::General(msg) => {
                assert!(msg.contains("kubb generation failed"));
                assert!(msg.contains("Mock Error"));
            }
            other => panic!("Wrong error type: {:?}", other),
        }
    }

    #[test]
    fn test_shell_executor_structure() {
        // Verify the trait impl wires through to a real process. `echo`
        // exists on any unix; a missing binary still exercises the IO path.
        let exec = ShellExecutor;
        let res = exec.execute("echo", &["test"], Path::new("."));
        match res {
            Ok(output) => assert!(output.status.success()),
            Err(CliError::Io(_)) => {}
            Err(other) => panic!("Unexpected error: {:?}", other),
        }
    }
}
