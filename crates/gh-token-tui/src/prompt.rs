//! Master password prompt.

use gh_token_core::PasswordPrompt;
use std::path::Path;

/// Reads the password from the terminal without echo.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn prompt(&mut self, database: &Path, key_file: Option<&Path>) -> std::io::Result<String> {
        let password = rpassword::prompt_password(format!("[{}] password: ", database.display()))?;
        if let Some(key_file) = key_file {
            println!("Using key file: {}", key_file.display());
        }
        Ok(password)
    }
}
