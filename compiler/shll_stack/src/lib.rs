//! Stack growth for recursion over nested terms.
//!
//! Nesting depth is limited only by memory. Every function that recurses
//! once per nesting level (the parser, printing, tree walks, comparisons)
//! wraps its body in [`ensure_sufficient_stack`]. On native targets this
//! checks the remaining stack and switches to a fresh segment when it runs
//! low. On `wasm32` it is a passthrough.

/// Grow when less than this remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
