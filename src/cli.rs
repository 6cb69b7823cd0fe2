//! Command-line argument parsing for wedit.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and methods for parsing them.

use crate::config::{
    COLOR, Config, DEFAULT_FILENAME, MAX_UNDO_DEPTH, OUTPUT_PATH, QUIET, VERBOSITY,
};
use std::path::PathBuf;
use thiserror::Error;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
wedit - A write-only word editor with undo/redo

Usage: wedit [OPTIONS]

Words typed on standard input are appended to the document.
Commands: ':undo', ':redo', ':history', ':exit'

Options:
  -h, --help              Show this help message
  -o, --output FILE       Save to FILE without prompting
  -d, --default-name FILE Fallback filename at the save prompt (output.txt)
  -m, --max-undo N        Undo depth bound, 0 for unbounded (10000)
  -q, --quiet             No banner or prompts
  -c, --color             Colored status messages
  -v, --verbose           More log output on stderr (repeatable)";

/// Command-line usage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("Unknown argument: {0}. Use --help for usage.")]
    Unknown(String),
}

/// Command-line interface configuration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cli {
    /// Save destination; skips the filename prompt
    pub output: Option<PathBuf>,

    /// Fallback filename at the save prompt
    pub default_name: Option<String>,

    /// Undo depth bound
    pub max_undo: Option<usize>,

    /// Suppress banner and prompts
    pub quiet: bool,

    /// Force colored status output
    pub color: bool,

    /// Number of `-v` flags
    pub verbose: u8,

    /// Print usage and exit
    pub help: bool,
}

impl Cli {
    /// Parse the process arguments.
    pub fn parse() -> Result<Self, CliError> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse an argument list (without the program name).
    pub fn parse_from<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cli = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => cli.help = true,
                "-q" | "--quiet" => cli.quiet = true,
                "-c" | "--color" => cli.color = true,
                "-v" | "--verbose" => cli.verbose = cli.verbose.saturating_add(1),
                "-o" | "--output" => {
                    let path = args.next().ok_or(CliError::MissingValue("--output"))?;
                    cli.output = Some(PathBuf::from(path));
                }
                "-d" | "--default-name" => {
                    let name = args.next().ok_or(CliError::MissingValue("--default-name"))?;
                    if name.trim().is_empty() {
                        return Err(CliError::InvalidValue {
                            flag: "--default-name",
                            value: name,
                        });
                    }
                    cli.default_name = Some(name);
                }
                "-m" | "--max-undo" => {
                    let value = args.next().ok_or(CliError::MissingValue("--max-undo"))?;
                    let depth = value.parse::<usize>().map_err(|_| CliError::InvalidValue {
                        flag: "--max-undo",
                        value: value.clone(),
                    })?;
                    cli.max_undo = Some(depth);
                }
                other => return Err(CliError::Unknown(other.to_string())),
            }
        }

        Ok(cli)
    }

    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.set(OUTPUT_PATH, output.to_string_lossy().into_owned());
        }
        if let Some(name) = &self.default_name {
            config.set(DEFAULT_FILENAME, name.clone());
        }
        if let Some(depth) = self.max_undo {
            config.set(MAX_UNDO_DEPTH, i64::try_from(depth).unwrap_or(i64::MAX));
        }
        if self.quiet {
            config.set(QUIET, true);
        }
        if self.color {
            config.set(COLOR, true);
        }
        if self.verbose > 0 {
            config.set(VERBOSITY, i64::from(self.verbose));
        }
    }
}
