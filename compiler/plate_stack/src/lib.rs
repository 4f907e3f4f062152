//! Stack growth for deeply nested programs.
//!
//! Building a `WHILE` body recurses once per nesting level. Programs are
//! user-written text, so nesting depth is unbounded; [`ensure_sufficient_stack`]
//! grows the native stack on demand instead of overflowing.
//!
//! On `wasm32` the guard is a passthrough.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn build_body(&mut self) -> Result<Vec<Node>, ParseError> {
///     ensure_sufficient_stack(|| self.build_sequence())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
