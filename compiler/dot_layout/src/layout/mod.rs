//! Layout Pass
//!
//! Top-down walk deciding, group by group, whether content stays flat.
//!
//! # Algorithm
//!
//! The walk threads the current indentation level and column through the
//! document. It only ever runs in a broken context: the root is broken, and
//! a flat group is stepped over as a whole.
//!
//! 1. A group that measured broken, or whose flat width would run past
//!    `max_column`, is resolved broken and walked into at the same position
//! 2. Any other group is resolved flat and advances the column by its width
//! 3. Text advances the column by its length, a space by one
//! 4. A break returns the column to the indentation level
//!
//! Column accounting is approximate around spaces. A bare space counts one
//! column even if it turns out trailing. A flat group measured as nothing
//! but a pending space advances by zero, although its space is written when
//! text follows, so the line can end up one column past `max_column`.
//!
//! Nothing inside a flat group can be broken (an unconditional break would
//! have measured the group broken), so flat groups are never walked into and
//! the groups nested in them stay unresolved. The render pass treats those
//! as flat.

use std::ops::Range;

use dot_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::column;
use crate::document::{Cursor, Document, Mode, Node, Stage, Tag};

impl Document {
    /// Resolve the mode of every group reachable in a broken context.
    pub(crate) fn layout(&mut self) {
        debug_assert_eq!(self.stage, Stage::Measured, "layout before measure");
        let end = self.nodes.len();
        let mut walk = LayoutWalk {
            nodes: &mut self.nodes,
            max_column: self.config.max_column,
        };
        let column = walk.scope(0..end, 0, 0);
        self.stage = Stage::LaidOut;
        debug!(
            max_column = self.config.max_column,
            column, "laid out document"
        );
    }
}

struct LayoutWalk<'a> {
    nodes: &'a mut [Node],
    max_column: usize,
}

impl LayoutWalk<'_> {
    /// Walk the children in `range` starting at `column`, returning the
    /// column after the last one.
    fn scope(&mut self, range: Range<usize>, indent: usize, column: usize) -> usize {
        ensure_sufficient_stack(|| {
            let mut column = column;
            let mut cursor = Cursor::new(range);
            while let Some((index, children)) = cursor.advance(self.nodes) {
                if !self.nodes[index].condition.renders_in(Mode::Broken) {
                    continue;
                }
                column = match self.nodes[index].tag {
                    Tag::Group => self.group(index, children, indent, column),
                    Tag::Indent(delta) => self.scope(children, column::shift(indent, delta), column),
                    Tag::Text(ref content) => column::advance(column, content.chars().count()),
                    Tag::Space => column::advance(column, 1),
                    Tag::Break(_) => indent,
                };
            }
            column
        })
    }

    fn group(&mut self, index: usize, children: Range<usize>, indent: usize, column: usize) -> usize {
        let measure = self.nodes[index].measure;
        if !measure.broken {
            let end = column::advance(column, measure.width);
            if end <= self.max_column {
                trace!(index, column, width = measure.width, "group stays flat");
                self.nodes[index].mode = Some(Mode::Flat);
                return end;
            }
        }
        trace!(index, column, %measure, "group breaks");
        self.nodes[index].mode = Some(Mode::Broken);
        self.scope(children, indent, column)
    }
}
