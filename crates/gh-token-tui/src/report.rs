//! User-facing result lines and exit codes.

use gh_token_core::{Error, Outcome};
use std::io::{self, Write};

/// Print the success line and return the exit code.
pub fn success(outcome: &Outcome, out: &mut impl Write) -> io::Result<i32> {
    writeln!(out, "SUCCESS: {}", outcome.verb())?;
    Ok(0)
}

/// Print a workflow failure and return the exit code for it.
pub fn failure(error: &Error, out: &mut impl Write) -> io::Result<i32> {
    match error {
        // The user backed out of the picker; nothing to add.
        Error::Cancelled => {}
        Error::Keychain { stdout, stderr, .. } => {
            writeln!(out, "{error}")?;
            if !stdout.is_empty() {
                writeln!(out, "{stdout}")?;
            }
            if !stderr.is_empty() {
                writeln!(out, "{stderr}")?;
            }
        }
        _ => writeln!(out, "{error}")?,
    }
    Ok(error.exit_code())
}
