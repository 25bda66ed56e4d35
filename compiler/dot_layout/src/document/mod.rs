//! Document Model and Builder
//!
//! A [`Document`] is a tree of tagged nodes stored as a flat array in
//! pre-order. Composite nodes (groups and indents) record their *span*: the
//! number of descendants immediately following them. Tree walks re-derive
//! the shape from spans with a [`Cursor`], so there are no child pointers and
//! copying a document is copying a `Vec`.
//!
//! # Conditions
//!
//! Every node carries a [`Condition`] gating it on the resolved [`Mode`] of
//! the nearest enclosing group. The document root behaves like a broken
//! group.

use std::fmt;
use std::ops::Range;

use dot_stack::ensure_sufficient_stack;

use crate::config::LayoutConfig;
use crate::measure::Measure;

/// When a node renders, relative to its nearest enclosing group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Renders in either mode.
    #[default]
    Always,
    /// Renders only if the enclosing group fits on one line.
    Flat,
    /// Renders only if the enclosing group is broken across lines.
    Broken,
}

impl Condition {
    /// Whether a node with this condition renders inside a scope resolved to `mode`.
    #[inline]
    pub fn renders_in(self, mode: Mode) -> bool {
        match self {
            Condition::Always => true,
            Condition::Flat => mode == Mode::Flat,
            Condition::Broken => mode == Mode::Broken,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Condition::Always => "always",
            Condition::Flat => "flat",
            Condition::Broken => "broken",
        })
    }
}

/// Resolved state of a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// All children on the current line.
    Flat,
    /// Breaks inside the group are active.
    Broken,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Flat => "flat",
            Mode::Broken => "broken",
        })
    }
}

/// Node kind and payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Tag {
    Text(Box<str>),
    Space,
    /// Number of newlines, always positive.
    Break(usize),
    Group,
    /// Signed change of the indentation level for the children.
    Indent(isize),
}

impl Tag {
    #[inline]
    pub(crate) fn is_composite(&self) -> bool {
        matches!(self, Tag::Group | Tag::Indent(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) tag: Tag,
    pub(crate) condition: Condition,
    /// Descendant count; zero for leaves.
    pub(crate) span: usize,
    /// Written by the measure pass.
    pub(crate) measure: Measure,
    /// Written by the layout pass, groups only.
    pub(crate) mode: Option<Mode>,
}

impl Node {
    fn new(tag: Tag, condition: Condition) -> Self {
        Self {
            tag,
            condition,
            span: 0,
            measure: Measure::default(),
            mode: None,
        }
    }

    /// Copy of this node with the pass caches cleared.
    fn pristine(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            condition: self.condition,
            span: self.span,
            measure: Measure::default(),
            mode: None,
        }
    }
}

/// How far a document has been processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Stage {
    Built,
    Measured,
    LaidOut,
}

/// A layout document: content plus the line width it is laid out against.
///
/// Built once with the chained builder methods, then consumed by
/// [`Document::render`]. Measurement and layout write their results into the
/// nodes, so a document renders exactly once; [`Clone`] produces an
/// independent copy with those caches reset.
///
/// ```
/// use dot_layout::{Condition, Document, Format};
///
/// let mut doc = Document::new(10);
/// doc.group(|doc| {
///     doc.text("01234")
///         .break_lines_if(3, Condition::Broken)
///         .text("56789");
/// });
/// assert_eq!(doc.render_to_string(Format::Default), "0123456789");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Document {
    pub(crate) config: LayoutConfig,
    pub(crate) nodes: Vec<Node>,
    /// Most recently appended direct child of the scope being built.
    last_sibling: Option<usize>,
    pub(crate) stage: Stage,
}

impl Document {
    /// Create an empty document laid out against `max_column`.
    ///
    /// # Panics
    ///
    /// Panics if `max_column` is zero.
    pub fn new(max_column: usize) -> Self {
        Self::with_config(LayoutConfig::with_max_column(max_column))
    }

    /// Create an empty document with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.max_column` is zero.
    pub fn with_config(config: LayoutConfig) -> Self {
        assert!(config.max_column > 0, "max column must be positive");
        Self {
            config,
            nodes: Vec::new(),
            last_sibling: None,
            stage: Stage::Built,
        }
    }

    /// Maximum line width this document is laid out against.
    pub fn max_column(&self) -> usize {
        self.config.max_column
    }

    /// Total number of nodes, composites and leaves alike.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append literal text.
    pub fn text(&mut self, content: &str) -> &mut Self {
        self.text_if(content, Condition::Always)
    }

    /// Append literal text rendered only under `condition`.
    pub fn text_if(&mut self, content: &str, condition: Condition) -> &mut Self {
        self.push_leaf(Tag::Text(content.into()), condition)
    }

    /// Append a candidate space.
    pub fn space(&mut self) -> &mut Self {
        self.space_if(Condition::Always)
    }

    /// Append a candidate space rendered only under `condition`.
    ///
    /// Directly follows a sibling space of the same condition: no-op.
    pub fn space_if(&mut self, condition: Condition) -> &mut Self {
        if let Some(last) = self.last_sibling {
            let node = &self.nodes[last];
            if node.tag == Tag::Space && node.condition == condition {
                return self;
            }
        }
        self.push_leaf(Tag::Space, condition)
    }

    /// Append `count` candidate newlines.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn break_lines(&mut self, count: usize) -> &mut Self {
        self.break_lines_if(count, Condition::Always)
    }

    /// Append `count` candidate newlines rendered only under `condition`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn break_lines_if(&mut self, count: usize, condition: Condition) -> &mut Self {
        assert!(count > 0, "break count must be positive");
        self.push_leaf(Tag::Break(count), condition)
    }

    /// Append a group whose content `body` builds.
    ///
    /// The group renders on one line if it fits, otherwise its breaks are
    /// active.
    pub fn group(&mut self, body: impl FnOnce(&mut Document)) -> &mut Self {
        self.push_scope(Tag::Group, body)
    }

    /// Append content built by `body`, indented by `columns` levels relative
    /// to the surrounding content. `columns` may be negative.
    pub fn indent(&mut self, columns: isize, body: impl FnOnce(&mut Document)) -> &mut Self {
        self.push_scope(Tag::Indent(columns), body)
    }

    fn push_leaf(&mut self, tag: Tag, condition: Condition) -> &mut Self {
        self.last_sibling = Some(self.nodes.len());
        self.nodes.push(Node::new(tag, condition));
        self
    }

    fn push_scope(&mut self, tag: Tag, body: impl FnOnce(&mut Document)) -> &mut Self {
        let index = self.nodes.len();
        self.nodes.push(Node::new(tag, Condition::Always));
        self.last_sibling = None;
        ensure_sufficient_stack(|| body(self));
        self.nodes[index].span = self.nodes.len() - index - 1;
        self.last_sibling = Some(index);
        self
    }

    /// Top-level nodes and their spans.
    pub(crate) fn children(&self, range: Range<usize>) -> Children<'_> {
        Children {
            nodes: &self.nodes,
            cursor: Cursor::new(range),
        }
    }
}

impl Clone for Document {
    /// Deep copy with every measure and mode cache reset.
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            nodes: self.nodes.iter().map(Node::pristine).collect(),
            last_sibling: self.last_sibling,
            stage: Stage::Built,
        }
    }
}

/// Steps over the direct children of one scope in the flat node array.
///
/// Holds no borrow between steps so passes can write into the nodes while
/// walking them.
pub(crate) struct Cursor {
    next: usize,
    end: usize,
}

impl Cursor {
    pub(crate) fn new(range: Range<usize>) -> Self {
        Self {
            next: range.start,
            end: range.end,
        }
    }

    /// The next child's index and the range of its descendants.
    ///
    /// # Panics
    ///
    /// Panics if a span runs past the end of its enclosing scope, or a leaf
    /// records a span.
    pub(crate) fn advance(&mut self, nodes: &[Node]) -> Option<(usize, Range<usize>)> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        let node = &nodes[index];
        assert!(
            node.span == 0 || node.tag.is_composite(),
            "leaf node {index} records a span of {}",
            node.span
        );
        let first = index + 1;
        let last = match first.checked_add(node.span) {
            Some(last) if last <= self.end => last,
            _ => panic!(
                "node {index} spans {} nodes but its scope ends at {}",
                node.span, self.end
            ),
        };
        self.next = last;
        Some((index, first..last))
    }
}

/// Read-only iterator over the direct children of one scope.
pub(crate) struct Children<'a> {
    nodes: &'a [Node],
    cursor: Cursor,
}

impl<'a> Iterator for Children<'a> {
    type Item = (&'a Node, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.cursor
            .advance(nodes)
            .map(|(index, span)| (&nodes[index], span))
    }
}

#[cfg(test)]
mod tests;
