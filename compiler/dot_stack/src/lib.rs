//! Stack growth for deep recursive walks.
//!
//! The layout engine walks its flattened document tree recursively: one
//! native frame per nested group or indent. Printers that translate deeply
//! nested graphs (subgraphs inside subgraphs, long attribute chains wrapped
//! in groups) can produce nesting far beyond what a default thread stack
//! holds, so every recursive step goes through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On
//! `wasm32` the closure runs directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn walk(&mut self, range: Range<usize>) {
///     ensure_sufficient_stack(|| {
///         for child in children(range) {
///             self.walk(child.span());
///         }
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
