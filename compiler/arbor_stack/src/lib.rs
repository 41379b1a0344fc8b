//! Stack growth guard for recursive tree traversal.
//!
//! Expression trees are owned `Box` chains, and every walk over them
//! (structural visitors, strategy dispatch, drop) recurses once per level.
//! A left-leaning chain of a few hundred thousand additions is enough to
//! exhaust a default thread stack, so each recursive step is routed through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack falls below [`RED_ZONE`]. On `wasm32` the guard is a plain
//! call.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn depth(node: &Node) -> usize {
///     ensure_sufficient_stack(|| {
///         1 + node.children().iter().map(|c| depth(c)).max().unwrap_or(0)
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` has no growable stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes of stack left on the current thread, if the platform reports it.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// Bytes of stack left on the current thread, if the platform reports it.
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests;
