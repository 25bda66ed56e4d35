//! Alternate Output Forms
//!
//! Read-only views of the node tree, for debugging layout decisions and for
//! turning a captured document into a standalone reproduction:
//!
//! - **Layout**: one line per node with its condition, and its measure and
//!   resolved mode once those passes have run
//! - **Source**: the import and builder calls that rebuild the document
//!
//! Neither runs measurement or layout itself.

use std::io;
use std::ops::Range;

use dot_stack::ensure_sufficient_stack;

use crate::document::{Condition, Document, Node, Stage, Tag};
use crate::emitter::{Emitter, WriteEmitter};
use crate::error::RenderError;

/// Indentation of generated Rust source.
const SOURCE_INDENT: &str = "    ";

/// First line of generated Rust source.
const SOURCE_PRELUDE: &str = "use dot_layout::{Condition, Document};";

impl Document {
    /// Write the node tree as it currently stands.
    ///
    /// Before rendering this shows structure and conditions only. The
    /// [`Format::Layout`](crate::Format::Layout) render form shows the same
    /// tree after measurement and layout.
    pub fn dump<W: io::Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        let mut emitter = WriteEmitter::new(writer);
        self.write_layout(&mut emitter)?;
        Ok(())
    }

    pub(crate) fn write_layout<E: Emitter>(&self, emitter: &mut E) -> Result<(), E::Error> {
        emitter.emit(&format!("document max_column={} {{", self.config.max_column))?;
        emitter.emit_newline()?;
        self.layout_scope(emitter, 0..self.nodes.len(), 1)?;
        emitter.emit("}")?;
        emitter.emit_newline()
    }

    fn layout_scope<E: Emitter>(
        &self,
        emitter: &mut E,
        range: Range<usize>,
        depth: usize,
    ) -> Result<(), E::Error> {
        ensure_sufficient_stack(|| {
            for (node, children) in self.children(range) {
                emitter.emit_indent(depth)?;
                emitter.emit(&describe(node, self.stage))?;
                if node.span > 0 {
                    emitter.emit(" {")?;
                    emitter.emit_newline()?;
                    self.layout_scope(emitter, children, depth + 1)?;
                    emitter.emit_indent(depth)?;
                    emitter.emit("}")?;
                } else if node.tag.is_composite() {
                    emitter.emit(" {}")?;
                }
                emitter.emit_newline()?;
            }
            Ok(())
        })
    }

    pub(crate) fn write_source<E: Emitter>(&self, emitter: &mut E) -> Result<(), E::Error> {
        emitter.emit(SOURCE_PRELUDE)?;
        emitter.emit_newline()?;
        emitter.emit(&format!(
            "let mut doc = Document::new({});",
            self.config.max_column
        ))?;
        emitter.emit_newline()?;
        self.source_scope(emitter, 0..self.nodes.len(), 0)
    }

    fn source_scope<E: Emitter>(
        &self,
        emitter: &mut E,
        range: Range<usize>,
        depth: usize,
    ) -> Result<(), E::Error> {
        ensure_sufficient_stack(|| {
            for (node, children) in self.children(range) {
                emitter.emit(&SOURCE_INDENT.repeat(depth))?;
                let open = match node.tag {
                    Tag::Text(ref content) => leaf_call("text", &format!("{content:?}"), node),
                    Tag::Space => leaf_call("space", "", node),
                    Tag::Break(count) => leaf_call("break_lines", &count.to_string(), node),
                    Tag::Group if node.span == 0 => "doc.group(|_| {});".to_owned(),
                    Tag::Group => "doc.group(|doc| {".to_owned(),
                    Tag::Indent(columns) if node.span == 0 => {
                        format!("doc.indent({columns}, |_| {{}});")
                    }
                    Tag::Indent(columns) => format!("doc.indent({columns}, |doc| {{"),
                };
                emitter.emit(&open)?;
                emitter.emit_newline()?;
                if node.span > 0 {
                    self.source_scope(emitter, children, depth + 1)?;
                    emitter.emit(&SOURCE_INDENT.repeat(depth))?;
                    emitter.emit("});")?;
                    emitter.emit_newline()?;
                }
            }
            Ok(())
        })
    }
}

/// One line of the layout dump, without indentation or braces.
fn describe(node: &Node, stage: Stage) -> String {
    let mut line = match node.tag {
        Tag::Text(ref content) => format!("text {content:?}"),
        Tag::Space => "space".to_owned(),
        Tag::Break(count) => format!("break {count}"),
        Tag::Group => "group".to_owned(),
        Tag::Indent(columns) => format!("indent {columns:+}"),
    };
    if node.condition != Condition::Always {
        line.push_str(&format!(" if={}", node.condition));
    }
    if stage >= Stage::Measured {
        line.push_str(&format!(" [{}]", node.measure));
    }
    if let Some(mode) = node.mode {
        line.push_str(&format!(" mode={mode}"));
    }
    line
}

/// Builder call for a leaf, using the conditional variant when needed.
fn leaf_call(method: &str, args: &str, node: &Node) -> String {
    match (node.condition, args.is_empty()) {
        (Condition::Always, _) => format!("doc.{method}({args});"),
        (condition, true) => format!("doc.{method}_if(Condition::{condition:?});"),
        (condition, false) => format!("doc.{method}_if({args}, Condition::{condition:?});"),
    }
}
