//! Recoverable errors.
//!
//! Misuse of the builder (zero break counts, runaway indentation) panics;
//! only failures of the output sink and of parsing user-facing names are
//! reported as values.

use std::io;

use thiserror::Error;

/// Rendering to an [`io::Write`] failed.
///
/// The sink holds whatever was written before the failure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write layout output: {0}")]
    Write(#[from] io::Error),
}

/// A name did not match any [`Format`](crate::Format).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format `{name}`, expected one of: default, layout, source")]
pub struct FormatParseError {
    pub name: String,
}
