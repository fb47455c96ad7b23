//! Stack growth for deeply nested expressions.
//!
//! The parser and the interpreter recurse once per nesting level, and a
//! chunk read from stdin can nest as deep as it likes: `((((1))))` a
//! hundred thousand times, or a long `1 + 1 + ...` chain whose left-leaning
//! tree the interpreter walks recursively. Wrap each recursive step in
//! [`ensure_sufficient_stack`] and the stack grows on demand instead of
//! overflowing.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
