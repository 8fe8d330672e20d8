//! Response side of the protocol.

use std::io::{self, BufWriter, Stdout, Write};

/// Sink for protocol lines; one call per line, flushed before returning.
pub trait Writeln {
    fn writeln(&mut self, line: &str) -> io::Result<()>;
}

/// Line writer over stdout, flushed per line so a GUI sees responses
/// immediately.
pub struct StdoutWriter {
    writer: BufWriter<Stdout>,
}

impl StdoutWriter {
    #[must_use]
    pub fn new() -> Self {
        StdoutWriter {
            writer: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writeln for StdoutWriter {
    fn writeln(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

/// Writes engine responses. `info string` output is gated by debug mode.
pub struct Sender {
    writer: Box<dyn Writeln + Send>,
    debug_mode: bool,
}

impl Sender {
    #[must_use]
    pub fn new(writer: Box<dyn Writeln + Send>) -> Self {
        Sender {
            writer,
            debug_mode: false,
        }
    }

    pub fn set_debug_mode(&mut self, on: bool) {
        self.debug_mode = on;
    }

    pub fn toggle_debug_mode(&mut self) {
        self.debug_mode = !self.debug_mode;
    }

    #[must_use]
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn id(&mut self, name: &str, author: &str) -> io::Result<()> {
        self.writer.writeln(&format!("id name {name}"))?;
        self.writer.writeln(&format!("id author {author}"))
    }

    pub fn uci_ok(&mut self) -> io::Result<()> {
        self.writer.writeln("uciok")
    }

    pub fn ready_ok(&mut self) -> io::Result<()> {
        self.writer.writeln("readyok")
    }

    /// Diagnostic line, written only in debug mode.
    pub fn debug(&mut self, message: &str) -> io::Result<()> {
        if self.debug_mode {
            self.writer.writeln(&format!("info string {message}"))?;
        }
        Ok(())
    }
}
