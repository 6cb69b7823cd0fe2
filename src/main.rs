//! wedit - A write-only word editor
//!
//! This is the main entry point. It parses CLI arguments, builds the
//! configuration, and hands stdin/stdout to the session driver.

use std::io::IsTerminal;
use std::process::ExitCode;

use wedit::cli::{Cli, USAGE};
use wedit::config::{Config, QUIET, VERBOSITY};
use wedit::error::EXIT_USAGE;
use wedit::{logging, run, user_config};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("wedit: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    if cli.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    // Load configuration
    let mut config = Config::default();
    user_config::configure(&mut config);

    // Piped input gets no banner or prompts
    if !std::io::stdin().is_terminal() {
        config.set(QUIET, true);
    }

    // Apply CLI overrides
    cli.apply_to_config(&mut config);

    logging::init(config.get_int(VERBOSITY).unwrap_or(0));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run::run_session(stdin.lock(), stdout.lock(), &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
