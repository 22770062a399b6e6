//! The interactive read-eval loop.
//!
//! Single-threaded and strictly synchronous: the loop blocks on operator
//! input, then blocks on the network round trip for each command. Only the
//! `exit` command and end-of-input terminate it; malformed input and
//! transport errors are printed and the loop keeps running.

use std::io::{self, Write};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use tracing::{debug, warn};

use crate::client::DebugService;
use crate::commands::{parameter, position, Command, HELP_TEXT};
use crate::error::ShellError;

/// Fixed prompt literal.
pub const PROMPT: &str = "cvra >";

/// History is truncated to this many most recent entries on flush.
const HISTORY_CAP: usize = 1000;

/// Loop state after handling one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading commands.
    Running,
    /// Leave the loop; the operator asked to exit.
    Terminated,
}

/// Handle one input line: parse, execute, report.
///
/// Local usage errors and transport errors are written to `writer` and the
/// loop stays [`Control::Running`]; no failure of a command is fatal to the
/// session.
///
/// # Errors
///
/// Returns an error only if `writer` itself fails.
pub async fn dispatch<S: DebugService, W: Write>(
    service: &mut S,
    writer: &mut W,
    line: &str,
) -> io::Result<Control> {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(message) => {
            writeln!(writer, "{message}")?;
            return Ok(Control::Running);
        }
    };

    let result = match command {
        Command::Empty => return Ok(Control::Running),
        Command::Exit => return Ok(Control::Terminated),
        Command::Help => {
            writeln!(writer, "{HELP_TEXT}")?;
            return Ok(Control::Running);
        }
        Command::Parameter(args) => parameter::run_list(service, writer, &args).await,
        Command::ParameterSet(args) => parameter::run_set(service, &args).await,
        Command::Position => position::run_position(service, writer).await,
    };

    if let Err(err) = result {
        match err {
            ShellError::Io(io_err) => return Err(io_err),
            other => writeln!(writer, "{other}")?,
        }
    }
    Ok(Control::Running)
}

/// The interactive session: line editor, history, dispatch loop.
pub struct Shell<S> {
    service: S,
    history_path: PathBuf,
}

impl<S: DebugService> Shell<S> {
    /// Create a session over the given service.
    #[must_use]
    pub fn new(service: S, history_path: PathBuf) -> Self {
        Self {
            service,
            history_path,
        }
    }

    /// Run the loop until `exit` or end-of-input.
    ///
    /// History is loaded before the first prompt and flushed on every exit
    /// path, the error ones included.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor cannot be set up or the
    /// operator output stream fails.
    pub fn run(mut self, runtime: &tokio::runtime::Runtime) -> Result<(), ShellError> {
        let config = Config::builder().max_history_size(HISTORY_CAP)?.build();
        let mut editor = DefaultEditor::with_config(config)?;

        if self.history_path.exists() {
            if let Err(err) = editor.load_history(&self.history_path) {
                warn!(error = %err, path = %self.history_path.display(), "failed to load history");
            }
        }

        let mut stdout = io::stdout();
        let mut failure = None;

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    match runtime.block_on(dispatch(&mut self.service, &mut stdout, &line)) {
                        Ok(Control::Running) => {}
                        Ok(Control::Terminated) => break,
                        Err(err) => {
                            failure = Some(ShellError::Io(err));
                            break;
                        }
                    }
                }
                // Ctrl-C cancels the current line, not the session.
                Err(ReadlineError::Interrupted) => {}
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    failure = Some(ShellError::Readline(err));
                    break;
                }
            }
        }

        debug!(path = %self.history_path.display(), "flushing history");
        if let Err(err) = editor.save_history(&self.history_path) {
            warn!(error = %err, path = %self.history_path.display(), "failed to write history file");
        }

        failure.map_or(Ok(()), Err)
    }
}
