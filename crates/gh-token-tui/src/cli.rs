//! Argument and mode resolution.

use clap::Parser;
use gh_token_core::Request;
use std::ffi::OsString;
use std::path::PathBuf;

pub const PGM_NAME: &str = "gh-token";
pub const PGM_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PGM_URL: &str = env!("CARGO_PKG_HOMEPAGE");

/// Install or remove a GitHub token from a KeePass database in the macOS keychain
#[derive(Parser, Debug)]
#[command(name = "gh-token", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Path to the KeePass database file
    database: PathBuf,

    /// GitHub username
    account: String,

    /// Keychain operation: add or rm
    operation: String,
}

/// What the invocation asks for.
#[derive(Debug)]
pub enum Mode {
    Version,
    Usage,
    Run(Request),
}

/// Resolve the raw argument list, program name first.
///
/// Positionals are bound by count alone: `-v` (or `--version`) on its own
/// prints the version, exactly three arguments run, anything else is usage.
pub fn resolve<I, T>(args: I) -> Mode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from(PGM_NAME));
    let rest: Vec<OsString> = args.collect();

    match rest.as_slice() {
        [flag] if flag == "-v" || flag == "--version" => return Mode::Version,
        [_, _, _] => {}
        _ => return Mode::Usage,
    }

    // Everything after `--` is a value, so dash-prefixed arguments bind verbatim.
    let argv = [program, OsString::from("--")].into_iter().chain(rest);
    match Args::try_parse_from(argv) {
        Ok(args) => Mode::Run(Request {
            database: args.database,
            account: args.account,
            operation: args.operation,
        }),
        Err(e) => {
            tracing::debug!("Argument parsing failed: {:?}", e.kind());
            Mode::Usage
        }
    }
}

pub fn version() -> String {
    format!("{PGM_NAME} v{PGM_VERSION}\n{PGM_URL}\n")
}

pub fn usage() -> String {
    let usage_msg = format!("{PGM_NAME} <KeePass file> <GitHub username> [add|rm]");
    format!(
        "\nUsage:\n{usage_msg}\n\nIf you want to use a key file, then use:\nKEY_FILE=My-KeePass-KeyFile {usage_msg}\n\n"
    )
}
