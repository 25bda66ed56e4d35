use super::*;

/// Models a walk over `depth` nested scopes, summing a width per level.
fn nested_width(depth: usize) -> usize {
    ensure_sufficient_stack(|| {
        if depth == 0 {
            0
        } else {
            nested_width(depth - 1) + 1
        }
    })
}

#[test]
fn shallow_nesting() {
    assert_eq!(nested_width(16), 16);
}

#[test]
fn deep_nesting_does_not_overflow() {
    // 200k frames would exhaust a default 8MB main thread stack
    assert_eq!(nested_width(200_000), 200_000);
}

#[test]
fn propagates_results() {
    let written: Result<usize, std::io::Error> = ensure_sufficient_stack(|| Ok(3));
    assert_eq!(written.ok(), Some(3));
}
