//! DOT Layout Engine
//!
//! Grammar-independent pretty printer used to format DOT graph
//! descriptions. A printer walks a parsed graph and describes its output as
//! a [`Document`] of text, candidate spaces, candidate line breaks, groups
//! and indentation; this crate decides where lines actually break.
//!
//! # Architecture
//!
//! Rendering runs three passes over the document:
//!
//! 1. **Measure**: bottom-up, the single-line width of every node and
//!    whether it contains an unconditional break
//! 2. **Layout**: top-down, each group stays flat if it fits in the columns
//!    left on the current line, otherwise it breaks
//! 3. **Render**: top-down, writes text, indentation and newlines honoring
//!    those decisions, dropping trailing spaces and merging adjacent breaks
//!
//! Measurement is context-free; layout depends on how much of the line
//! preceding siblings consumed. The passes cannot be fused.
//!
//! # Modules
//!
//! - [`document`]: node model and builder
//! - [`measure`]: measure pass
//! - [`layout`]: break-decision pass
//! - [`render`]: text output and [`Format`] dispatch
//! - [`emitter`]: output sinks
//! - `dump`: structural and source output forms

mod column;
pub mod config;
pub mod document;
mod dump;
pub mod emitter;
pub mod error;
pub mod layout;
pub mod measure;
pub mod render;

pub use config::{LayoutConfig, DEFAULT_MAX_COLUMN, INDENT_GLYPH};
pub use document::{Condition, Document, Mode};
pub use emitter::{Emitter, StringEmitter, WriteEmitter};
pub use error::{FormatParseError, RenderError};
pub use measure::Measure;
pub use render::Format;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber if `RUST_LOG` is
/// set, e.g. `RUST_LOG=dot_layout=trace` to log every group decision.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
