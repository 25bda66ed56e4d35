//! Measure Pass
//!
//! Bottom-up traversal computing how wide each node would be if its
//! enclosing group rendered flat, and whether it can never be flat.
//!
//! # Trailing Spaces
//!
//! A space only takes up room if content follows it on the same line. It is
//! therefore measured as a *pending* space, and only becomes a column of
//! width when a later sibling (or a later node after the enclosing scope)
//! adds real width. This mirrors the render pass, which drops spaces that
//! end up before a newline or at the end of output.
//!
//! # Fold
//!
//! | Accumulated | Child | Result |
//! |-------------|-------|--------|
//! | broken | any | broken |
//! | any | broken | broken |
//! | `w`, pending `p` | width `c > 0`, pending `q` | `w + p + c`, pending `q` |
//! | `w`, pending `p` | width 0, pending `q` | `w`, pending `p \|\| q` |

use std::fmt;
use std::ops::Range;

use dot_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::column;
use crate::document::{Condition, Cursor, Document, Node, Stage, Tag};

/// Flat width of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measure {
    /// Single-line width; meaningful only when `broken` is false.
    pub width: usize,
    /// Contains an unconditional break, so cannot render flat.
    pub broken: bool,
    /// Ends in a space not yet known to be followed by content.
    pub pending_space: bool,
}

impl Measure {
    /// Measure of content that forces its group to break.
    pub const BROKEN: Measure = Measure {
        width: 0,
        broken: true,
        pending_space: false,
    };

    /// Measure of a lone space.
    pub const SPACE: Measure = Measure {
        width: 0,
        broken: false,
        pending_space: true,
    };

    /// Measure of content `width` characters wide.
    pub fn of_width(width: usize) -> Measure {
        Measure {
            width,
            broken: false,
            pending_space: false,
        }
    }

    /// Measure of `self` immediately followed by `next` on the same line.
    #[must_use = "then returns the combined measure"]
    pub fn then(self, next: Measure) -> Measure {
        if self.broken || next.broken {
            return Measure::BROKEN;
        }
        if next.width == 0 {
            return Measure {
                width: self.width,
                broken: false,
                pending_space: self.pending_space || next.pending_space,
            };
        }
        let before = column::advance(self.width, usize::from(self.pending_space));
        Measure {
            width: column::advance(before, next.width),
            broken: false,
            pending_space: next.pending_space,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.broken {
            return f.write_str("broken");
        }
        write!(f, "width={}", self.width)?;
        if self.pending_space {
            f.write_str("+space")?;
        }
        Ok(())
    }
}

impl Document {
    /// Measure every node, writing the result into its cache.
    pub(crate) fn measure(&mut self) {
        debug_assert_eq!(self.stage, Stage::Built, "document measured twice");
        let end = self.nodes.len();
        let root = measure_scope(&mut self.nodes, 0..end);
        self.stage = Stage::Measured;
        debug!(nodes = end, %root, "measured document");
    }
}

/// Measure the children in `range`, returning their combined measure.
fn measure_scope(nodes: &mut [Node], range: Range<usize>) -> Measure {
    ensure_sufficient_stack(|| {
        let mut total = Measure::default();
        let mut cursor = Cursor::new(range);
        while let Some((index, children)) = cursor.advance(nodes) {
            let measure = match leaf_measure(&nodes[index]) {
                Some(measure) => measure,
                None => measure_scope(nodes, children),
            };
            nodes[index].measure = measure;
            // Broken-only content never shares a line with a flat group.
            if nodes[index].condition != Condition::Broken {
                total = total.then(measure);
            }
        }
        total
    })
}

/// Measure of a leaf node, `None` for composites.
fn leaf_measure(node: &Node) -> Option<Measure> {
    match node.tag {
        Tag::Text(ref content) => Some(Measure::of_width(content.chars().count())),
        Tag::Space => Some(Measure::SPACE),
        // Flat-only breaks never emit a newline, see `render`.
        Tag::Break(_) if node.condition == Condition::Always => Some(Measure::BROKEN),
        Tag::Break(_) => Some(Measure::default()),
        Tag::Group | Tag::Indent(_) => None,
    }
}
