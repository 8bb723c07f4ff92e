//! gh-token - install a GitHub token from KeePass into the macOS keychain
//!
//! Picks an entry with a Ratatui fuzzy picker and hands its password to the
//! `security` program.

mod app;
mod cli;
mod config;
mod handlers;
mod picker;
mod prompt;
mod report;
mod ui;

use anyhow::Result;
use cli::Mode;
use gh_token_core::{HttpProbe, Outcome, Request, SystemRunner, Workflow};
use tracing_subscriber::EnvFilter;

fn main() {
    // Write logs to stderr to not interfere with the picker or stdout messages
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let code = match cli::resolve(std::env::args_os()) {
        Mode::Version => {
            print!("{}", cli::version());
            0
        }
        Mode::Usage => {
            print!("{}", cli::usage());
            1
        }
        Mode::Run(request) => match run(&request) {
            Ok(Ok(outcome)) => report::success(&outcome, &mut std::io::stdout()).unwrap_or(1),
            Ok(Err(e)) => report::failure(&e, &mut std::io::stdout()).unwrap_or_else(|_| e.exit_code()),
            Err(e) => {
                println!("Error: {e:#}");
                1
            }
        },
    };

    std::process::exit(code);
}

/// Outer error: startup problems before the workflow begins.
/// Inner error: a workflow failure with its own exit code.
fn run(request: &Request) -> Result<gh_token_core::Result<Outcome>> {
    let settings = config::Config::load()?.into_settings(config::key_file_from_env());
    tracing::debug!("Running {:?} with {:?}", request, settings);

    let probe = HttpProbe::new(settings.probe_timeout)?;
    let mut prompt = prompt::TerminalPrompt;
    let mut selector = picker::FuzzyPicker;
    let runner = SystemRunner;

    let mut workflow = Workflow::new(&settings, &probe, &mut prompt, &mut selector, &runner);
    Ok(workflow.run(request))
}
