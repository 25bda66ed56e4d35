//! Overflow-checked column and indentation arithmetic.
//!
//! Overflow, or indentation dropping below zero, means the document was
//! built wrong. Both panic.

/// Advance `column` by `width` characters.
#[inline]
pub(crate) fn advance(column: usize, width: usize) -> usize {
    match column.checked_add(width) {
        Some(next) => next,
        None => panic!("column overflow: {column} + {width}"),
    }
}

/// Shift an indentation level by a signed delta.
///
/// Panics if the result would be negative or overflow.
#[inline]
pub(crate) fn shift(indent: usize, delta: isize) -> usize {
    match indent.checked_add_signed(delta) {
        Some(next) => next,
        None => panic!("indentation out of range: {indent} {delta:+}"),
    }
}
