//! Console output in text or JSON form

use crate::config::OutputFormat;
use reel_player::{CommandError, Notice, OutputSink};
use serde::Serialize;
use std::io::{self, Write};

/// One rendered outcome
#[derive(Debug, Serialize)]
struct Report<'a> {
    ok: bool,
    lines: &'a [String],
}

/// Writes outcomes to an output stream
///
/// Write failures are held until [`Console::finish`] so that command
/// execution itself never deals with I/O errors.
pub struct Console<W: Write> {
    out: W,
    format: OutputFormat,
    error: Option<io::Error>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Write one outcome
    pub fn report(&mut self, ok: bool, lines: &[String]) {
        let result = match self.format {
            OutputFormat::Text => lines.iter().try_for_each(|line| writeln!(self.out, "{line}")),
            OutputFormat::Json => serde_json::to_writer(&mut self.out, &Report { ok, lines })
                .map_err(io::Error::from)
                .and_then(|()| writeln!(self.out)),
        };
        self.hold(result);
    }

    /// Write a single informational line
    pub fn say(&mut self, line: &str) {
        self.report(true, &[line.to_string()]);
    }

    /// Show the input prompt (text mode only)
    pub fn prompt(&mut self, prompt: &str) {
        if self.format == OutputFormat::Text {
            let result = write!(self.out, "{prompt}");
            self.hold(result);
        }
        let result = self.out.flush();
        self.hold(result);
    }

    /// Flush, surfacing the first write failure since the last call
    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()
    }

    /// Consume the console, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn hold(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }
}

impl<W: Write> OutputSink for Console<W> {
    fn notice(&mut self, notice: &Notice) {
        self.report(true, &notice.lines());
    }

    fn failure(&mut self, error: &CommandError) {
        tracing::debug!(action = ?error.action(), error = %error.error(), "command failed");
        self.report(false, &error.lines());
    }
}
