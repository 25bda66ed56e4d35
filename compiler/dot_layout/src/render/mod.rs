//! Render Pass
//!
//! Top-down walk writing a laid out document to an [`Emitter`].
//!
//! # Whitespace
//!
//! - A space is never written immediately. It is held as pending and written
//!   just before the next text, or dropped by the next break.
//! - Breaks merge: consecutive breaks with no text between them write
//!   `max(counts)` newlines, not their sum.
//! - Indentation is written lazily, before the first text of a line, so
//!   blank lines carry no indentation.
//!
//! Together these guarantee no output line ends in whitespace.

use std::convert::Infallible;
use std::fmt;
use std::io;
use std::ops::Range;
use std::str::FromStr;

use dot_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::column;
use crate::document::{Cursor, Document, Mode, Node, Tag};
use crate::emitter::{Emitter, StringEmitter, WriteEmitter};
use crate::error::{FormatParseError, RenderError};

/// Output form of [`Document::render`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// The laid out text.
    #[default]
    Default,
    /// Structural dump of the laid out node tree. Also parsed from `debug`.
    Layout,
    /// Rust builder calls reconstructing the document.
    Source,
}

impl Format {
    /// Name used by [`FromStr`] and [`Display`](fmt::Display).
    pub fn name(self) -> &'static str {
        match self {
            Format::Default => "default",
            Format::Layout => "layout",
            Format::Source => "source",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "default" => Ok(Format::Default),
            "layout" | "debug" => Ok(Format::Layout),
            "source" => Ok(Format::Source),
            _ => Err(FormatParseError {
                name: name.to_owned(),
            }),
        }
    }
}

impl Document {
    /// Lay out the document and write it to `writer` in `format`.
    ///
    /// Consumes the document: layout results are cached in the nodes, so
    /// [`clone`](Clone::clone) first to render more than once.
    pub fn render<W: io::Write>(self, writer: &mut W, format: Format) -> Result<(), RenderError> {
        let mut emitter = WriteEmitter::new(writer);
        self.render_to(&mut emitter, format)?;
        Ok(())
    }

    /// Lay out the document and write it to an arbitrary emitter.
    ///
    /// Stops at the first error the emitter returns.
    pub fn render_to<E: Emitter>(mut self, emitter: &mut E, format: Format) -> Result<(), E::Error> {
        debug!(%format, nodes = self.nodes.len(), "rendering document");
        match format {
            Format::Default => {
                self.measure();
                self.layout();
                self.print(emitter)
            }
            Format::Layout => {
                self.measure();
                self.layout();
                self.write_layout(emitter)
            }
            Format::Source => self.write_source(emitter),
        }
    }

    /// Lay out the document and return it as a string.
    pub fn render_to_string(self, format: Format) -> String {
        let mut emitter = StringEmitter::with_capacity(self.nodes.len() * 4);
        let result: Result<(), Infallible> = self.render_to(&mut emitter, format);
        match result {
            Ok(()) => emitter.output(),
            Err(never) => match never {},
        }
    }

    fn print<E: Emitter>(&self, emitter: &mut E) -> Result<(), E::Error> {
        let mut printer = Printer {
            nodes: &self.nodes,
            emitter,
            depth: 0,
            pending_space: false,
            newlines: 0,
        };
        printer.scope(0..self.nodes.len(), Mode::Broken)
    }
}

impl fmt::Display for Document {
    /// Renders an independent copy in [`Format::Default`].
    ///
    /// Only meaningful outside `group` and `indent` bodies. A scope still
    /// being built has no recorded span, so it renders as empty and the
    /// children added so far render as its siblings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clone().render_to_string(Format::Default))
    }
}

struct Printer<'a, E: Emitter> {
    nodes: &'a [Node],
    emitter: &'a mut E,
    /// Current indentation level.
    depth: usize,
    pending_space: bool,
    /// Newlines written since the last text.
    newlines: usize,
}

impl<E: Emitter> Printer<'_, E> {
    /// Render the children in `range`, whose nearest group resolved to `mode`.
    fn scope(&mut self, range: Range<usize>, mode: Mode) -> Result<(), E::Error> {
        ensure_sufficient_stack(|| {
            let nodes = self.nodes;
            let mut cursor = Cursor::new(range);
            while let Some((index, children)) = cursor.advance(nodes) {
                let node = &nodes[index];
                if !node.condition.renders_in(mode) {
                    continue;
                }
                match node.tag {
                    // Unresolved groups sit inside a flat group.
                    Tag::Group => self.scope(children, node.mode.unwrap_or(Mode::Flat))?,
                    Tag::Indent(delta) => {
                        let outer = self.depth;
                        self.depth = column::shift(outer, delta);
                        self.scope(children, mode)?;
                        self.depth = outer;
                    }
                    Tag::Text(ref content) => self.text(content)?,
                    Tag::Space => self.pending_space = true,
                    // A flat-only break is a no-op: flat content stays on one line.
                    Tag::Break(count) if mode == Mode::Broken => self.newlines(count)?,
                    Tag::Break(_) => {}
                }
            }
            Ok(())
        })
    }

    fn text(&mut self, content: &str) -> Result<(), E::Error> {
        if content.is_empty() {
            return Ok(());
        }
        if self.pending_space {
            self.emitter.emit_space()?;
            self.pending_space = false;
        }
        if self.newlines > 0 {
            self.emitter.emit_indent(self.depth)?;
        }
        self.emitter.emit(content)?;
        self.newlines = 0;
        Ok(())
    }

    fn newlines(&mut self, count: usize) -> Result<(), E::Error> {
        self.pending_space = false;
        while self.newlines < count {
            self.emitter.emit_newline()?;
            self.newlines += 1;
        }
        Ok(())
    }
}
