//! Stack safety for deep recursion.
//!
//! The parser descends once per nesting level and the evaluator once per tree
//! level. Both run on whatever thread the foreign caller owns, which may have
//! a small stack, so each recursive step goes through
//! [`ensure_sufficient_stack`]. On native targets `stacker` switches to a
//! freshly allocated segment when the red zone is reached; on WASM the call
//! is a passthrough.
//!
//! - **Red zone**: 64KB. One parser frame is a few hundred bytes, so this
//!   leaves room for the frames between two guarded calls.
//! - **Growth size**: 1MB per new segment.

/// Minimum stack space to keep available before recursing.
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
