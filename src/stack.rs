//! Stack growth for the recursive parts of the interpreter.
//!
//! Parsing nested groups and blocks, and executing nested conditionals,
//! recurse once per nesting level. Those entry points run inside
//! [`ensure_sufficient_stack`], which moves onto a freshly allocated segment
//! when the remaining stack gets low, so nesting depth is bounded by memory
//! rather than by the caller's thread stack.

/// Minimum stack space to keep available before recursing (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, growing the stack first if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
