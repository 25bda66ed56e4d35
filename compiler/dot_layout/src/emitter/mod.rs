//! Output Emitter
//!
//! Abstraction over the sink a document renders into. Supports in-memory
//! strings and any [`io::Write`].

use std::convert::Infallible;
use std::io;

use crate::config::INDENT_GLYPH;

/// Sink for rendered output.
///
/// Only [`emit`](Emitter::emit) is required; the rest default to it. The
/// first error returned aborts rendering.
pub trait Emitter {
    /// Error produced by the underlying sink.
    type Error;

    /// Emit a text fragment.
    fn emit(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self) -> Result<(), Self::Error> {
        self.emit("\n")
    }

    /// Emit one [`INDENT_GLYPH`] per level.
    fn emit_indent(&mut self, level: usize) -> Result<(), Self::Error> {
        let mut glyph = [0; 4];
        let glyph = INDENT_GLYPH.encode_utf8(&mut glyph);
        for _ in 0..level {
            self.emit(glyph)?;
        }
        Ok(())
    }

    /// Emit a single space.
    fn emit_space(&mut self) -> Result<(), Self::Error> {
        self.emit(" ")
    }
}

/// String-based emitter for in-memory rendering. Never fails.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    type Error = Infallible;

    fn emit(&mut self, text: &str) -> Result<(), Infallible> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn emit_newline(&mut self) -> Result<(), Infallible> {
        self.buffer.push('\n');
        Ok(())
    }

    fn emit_indent(&mut self, level: usize) -> Result<(), Infallible> {
        self.buffer.extend(std::iter::repeat(INDENT_GLYPH).take(level));
        Ok(())
    }

    fn emit_space(&mut self) -> Result<(), Infallible> {
        self.buffer.push(' ');
        Ok(())
    }
}

/// Emitter writing straight through to an [`io::Write`].
///
/// Does not buffer; wrap the writer in a `BufWriter` for files or sockets.
pub struct WriteEmitter<W: io::Write> {
    writer: W,
}

impl<W: io::Write> WriteEmitter<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Emitter for WriteEmitter<W> {
    type Error = io::Error;

    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }
}
