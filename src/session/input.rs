//! Line sources for the session: an interactive editor and a plain reader for
//! piped input.

use std::io::{self, BufRead};

use crossterm::event;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::*;

pub trait LineSource {
    /// Shows `prompt` and reads one line. `Ok(None)` means the stream closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Input is suspended while an operation is outstanding.
    fn pause(&mut self) {}

    /// Input is accepted again. Anything typed while paused is dropped.
    fn resume(&mut self) {}
}

pub struct TerminalInput {
    editor: DefaultEditor,
    paused: bool,
}

impl TerminalInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("create line editor")?;
        Ok(Self {
            editor,
            paused: false,
        })
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !self.paused && !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Ok(Some(line));
                }
                // Ctrl-C abandons the current line only.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
                    tracing::warn!(error = %err, "undecodable input line skipped");
                    continue;
                }
                Err(err) => return Err(err).context("read line"),
            }
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        if let Err(err) = discard_typeahead() {
            tracing::debug!(error = %err, "could not drop pending input");
        }
    }
}

fn discard_typeahead() -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let drained = (|| -> io::Result<usize> {
        let mut n = 0;
        while event::poll(Duration::ZERO)? {
            event::read()?;
            n += 1;
        }
        Ok(n)
    })();
    disable_raw_mode().context("disable raw mode")?;
    let n = drained.context("drain pending input")?;
    if n > 0 {
        tracing::debug!(events = n, "dropped input typed while busy");
    }
    Ok(())
}

/// Reads from any buffered reader, echoing the prompt to stdout.
pub struct PipedInput<R> {
    reader: R,
    echo_prompt: bool,
}

impl<R: BufRead> PipedInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_prompt: true,
        }
    }

    pub fn quiet(reader: R) -> Self {
        Self {
            reader,
            echo_prompt: false,
        }
    }
}

impl<R: BufRead> LineSource for PipedInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.echo_prompt && !prompt.is_empty() {
            let mut stdout = io::stdout();
            write!(stdout, "{}", prompt).context("write prompt")?;
            stdout.flush().context("flush prompt")?;
        }
        // Raw bytes so a line that is not UTF-8 cannot end the session.
        let mut buf = Vec::new();
        let n = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("read stdin")?;
        if n == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/session/input_tests.rs"]
mod tests;
