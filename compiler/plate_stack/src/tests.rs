use super::*;

/// Mimics clause nesting: each level wraps the next in a fresh `Vec`.
fn nest(depth: usize) -> Vec<usize> {
    ensure_sufficient_stack(|| {
        if depth == 0 {
            Vec::new()
        } else {
            let mut inner = nest(depth - 1);
            inner.push(depth);
            inner
        }
    })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(nest(3), vec![1, 2, 3]);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    // 50k levels is far beyond the default 8MB main thread stack
    // for a frame of this size.
    assert_eq!(nest(50_000).len(), 50_000);
}

#[test]
fn test_passes_result_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("missing }"));
    assert_eq!(result, Err("missing }"));
}
