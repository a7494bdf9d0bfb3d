//! Output sinks the spinner can write to directly.
//!
//! Without a sink every spinner operation returns its escape string and the
//! caller writes it; with one, the same bytes go to the sink and the operation
//! returns an empty string.

use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::error::{Result, SpinnerError};

/// Raw string sink. Implementations must not add anything to `text`.
pub trait SpinnerOutput: Send {
    fn write(&mut self, text: &str, newline: bool);
}

/// Sink over any writer, flushed after every write.
#[derive(Debug)]
pub struct WriterOutput<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> SpinnerOutput for WriterOutput<W> {
    fn write(&mut self, text: &str, newline: bool) {
        if let Err(e) = write_flushed(&mut self.writer, text, newline) {
            tracing::debug!(error = %e, "spinner output write failed");
        }
    }
}

fn write_flushed(writer: &mut impl Write, text: &str, newline: bool) -> std::io::Result<()> {
    writer.write_all(text.as_bytes())?;
    if newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// In-memory sink whose contents stay readable through cloned handles.
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    buffer: Arc<Mutex<String>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns the contents and empties the buffer.
    pub fn take(&self) -> String {
        std::mem::take(
            &mut *self
                .buffer
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

impl SpinnerOutput for BufferOutput {
    fn write(&mut self, text: &str, newline: bool) {
        let mut buffer = self
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        buffer.push_str(text);
        if newline {
            buffer.push('\n');
        }
    }
}

/// Where a spinner sends what it renders.
#[derive(Default)]
pub enum Output {
    /// Return every string to the caller.
    #[default]
    None,
    Stdout,
    Stderr,
    Sink(Box<dyn SpinnerOutput>),
}

impl Output {
    pub fn sink(sink: impl SpinnerOutput + 'static) -> Self {
        Output::Sink(Box::new(sink))
    }

    pub(crate) fn into_sink(self) -> Option<Box<dyn SpinnerOutput>> {
        match self {
            Output::None => None,
            Output::Stdout => Some(Box::new(WriterOutput::new(std::io::stdout()))),
            Output::Stderr => Some(Box::new(WriterOutput::new(std::io::stderr()))),
            Output::Sink(sink) => Some(sink),
        }
    }
}

impl FromStr for Output {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "false" | "off" => Ok(Output::None),
            "stdout" => Ok(Output::Stdout),
            "stderr" => Ok(Output::Stderr),
            other => Err(SpinnerError::config(format!(
                "incorrect output \"{other}\", expected none, stdout or stderr"
            ))),
        }
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::None => write!(f, "Output::None"),
            Output::Stdout => write!(f, "Output::Stdout"),
            Output::Stderr => write!(f, "Output::Stderr"),
            Output::Sink(_) => write!(f, "Output::Sink(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_handles_share_contents() {
        let buffer = BufferOutput::new();
        let mut handle = buffer.clone();
        handle.write("⠋\x1b[1D", false);
        handle.write("done", true);
        assert_eq!(buffer.contents(), "⠋\x1b[1Ddone\n");
        assert_eq!(buffer.take(), "⠋\x1b[1Ddone\n");
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn writer_output_passes_bytes_through() {
        let mut out = WriterOutput::new(Vec::new());
        out.write("\x1b[?25l", false);
        out.write("x", true);
        assert_eq!(out.into_inner(), b"\x1b[?25lx\n");
    }

    #[test]
    fn parse_output_targets() {
        assert!(matches!("none".parse::<Output>().unwrap(), Output::None));
        assert!(matches!("False".parse::<Output>().unwrap(), Output::None));
        assert!(matches!("stderr".parse::<Output>().unwrap(), Output::Stderr));
        let err = "true".parse::<Output>().unwrap_err();
        assert!(err.is_config());
    }
}
