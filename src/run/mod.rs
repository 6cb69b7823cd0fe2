//! Session driver for wedit.
//!
//! Reads whitespace-delimited tokens, dispatches them against an
//! [`EditorSession`], renders each outcome, and runs the save step when the
//! input ends. The driver is generic over its input and output so the whole
//! session can run against in-memory streams.

pub mod render;
pub mod save;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{COLOR, Config, DEFAULT_FILENAME, MAX_UNDO_DEPTH, OUTPUT_PATH, QUIET};
use crate::core::dispatcher::{DispatchResult, Dispatcher};
use crate::core::session::{DEFAULT_MAX_UNDO_DEPTH, EditorSession};
use crate::error::SessionError;

pub use render::Renderer;
pub use save::{save_buffer, validate_target_path};

/// Fallback when the configuration names no default file
const FALLBACK_FILENAME: &str = "output.txt";

/// Settings the driver reads from [`Config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub default_filename: String,
    pub output_path: Option<PathBuf>,
    pub max_undo_depth: usize,
    pub quiet: bool,
    pub color: bool,
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        let max_undo_depth = config
            .get_int(MAX_UNDO_DEPTH)
            .and_then(|d| usize::try_from(d).ok())
            .unwrap_or(DEFAULT_MAX_UNDO_DEPTH);

        Self {
            default_filename: config
                .get_string(DEFAULT_FILENAME)
                .unwrap_or(FALLBACK_FILENAME)
                .to_string(),
            output_path: config.get_string(OUTPUT_PATH).map(PathBuf::from),
            max_undo_depth,
            quiet: config.get_bool(QUIET).unwrap_or(false),
            color: config.get_bool(COLOR).unwrap_or(false),
        }
    }
}

/// How the input loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The exit command was entered
    Exit,
    /// The input stream closed
    EndOfInput,
    /// Reading the input failed
    InputError,
}

/// Final state of a completed session
#[derive(Debug)]
pub struct SessionReport {
    pub session: EditorSession,
    pub end: SessionEnd,
    /// Where the document was written, if it was non-empty
    pub saved_to: Option<PathBuf>,
}

/// Run one editing session from `input` to `output`.
///
/// Returns the final state on success. Save failures come back as
/// [`SessionError`]s carrying the exit code the process should use.
pub fn run_session<R, W>(
    mut input: R,
    output: W,
    config: &Config,
) -> Result<SessionReport, SessionError>
where
    R: BufRead,
    W: Write,
{
    let options = SessionOptions::from_config(config);
    let dispatcher = Dispatcher::new(config.bindings.clone());
    let mut session = EditorSession::with_max_undo_depth(options.max_undo_depth);
    let mut renderer = Renderer::new(output, options.color);

    if !options.quiet {
        renderer.banner(config)?;
    }

    let end = input_loop(&mut input, &mut renderer, &dispatcher, &mut session, options.quiet)?;
    tracing::info!(?end, words = session.word_count(), "input finished");

    renderer.summary(session.word_count())?;
    if session.buffer().is_empty() {
        return Ok(SessionReport {
            session,
            end,
            saved_to: None,
        });
    }

    let path = match &options.output_path {
        Some(path) => path.clone(),
        None => {
            if !options.quiet {
                renderer.save_prompt()?;
            }
            read_filename(&mut input, &options.default_filename)
        }
    };

    let saved = save_buffer(&path, session.buffer())?;
    renderer.saved(&path)?;

    Ok(SessionReport {
        session,
        end,
        saved_to: Some(saved),
    })
}

fn input_loop<R, W>(
    input: &mut R,
    renderer: &mut Renderer<W>,
    dispatcher: &Dispatcher,
    session: &mut EditorSession,
    quiet: bool,
) -> Result<SessionEnd, SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        if !quiet {
            renderer.prompt()?;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(SessionEnd::EndOfInput),
            Ok(_) => {}
            Err(e) => {
                let err = SessionError::Input(e);
                tracing::warn!(error = %err, "input stream failed, ending session");
                renderer.warning(&err.to_string())?;
                return Ok(SessionEnd::InputError);
            }
        }

        for token in line.split_whitespace() {
            let result = dispatcher.dispatch(session, token);
            renderer.result(&result, session.buffer())?;
            if result == DispatchResult::Exit {
                // Anything after the exit command on the same line is dropped
                return Ok(SessionEnd::Exit);
            }
        }
    }
}

/// Read the save filename; blank input, end of input, or a read error fall
/// back to `default`.
fn read_filename<R: BufRead>(input: &mut R, default: &str) -> PathBuf {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) if !line.trim().is_empty() => PathBuf::from(line.trim()),
        Ok(_) => PathBuf::from(default),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read filename, using default");
            PathBuf::from(default)
        }
    }
}
