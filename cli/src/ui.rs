#![deny(missing_docs)]

//! # Console Output
//!
//! Styled terminal output and the single confirm prompt the init flow
//! uses. Interactivity is gated on an attended terminal; non-TTY runs fall
//! back to defaults upstream.

use crate::error::CliResult;
use console::{style, user_attended, Term};

/// Plain informational line.
pub fn info(msg: &str) {
    println!("{}", msg);
}

/// Warning line (yellow).
pub fn warn(msg: &str) {
    println!("{}", style(msg).yellow());
}

/// Success line (green).
pub fn success(msg: &str) {
    println!("{}", style(msg).green());
}

/// Error line (red, to stderr).
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).red().bold());
}

/// Whether prompts may be shown at all.
pub fn is_interactive() -> bool {
    user_attended()
}

/// Asks a yes/no question on the terminal. An empty answer picks the
/// default; anything other than `y`/`yes` is a no.
pub fn confirm(question: &str, default_yes: bool) -> CliResult<bool> {
    let term = Term::stdout();
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    term.write_str(&format!("{} {} ", style(question).cyan().bold(), hint))?;

    let answer = term.read_line()?;
    Ok(match answer.trim().to_lowercase().as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    })
}
