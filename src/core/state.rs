//! State identifiers and the end-of-table sentinel.
//!
//! States are plain integers so transition tables stay `const`-friendly and
//! map one-to-one onto the enums or `#define`s of the embedding firmware.

/// Identifier of a state in a transition table.
pub type StateId = i32;

/// Reserved state value marking the end of a table or an invalid slot.
pub const SENTINEL: StateId = -1;

/// Check whether `state` is the reserved sentinel.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{is_sentinel, SENTINEL};
///
/// assert!(is_sentinel(SENTINEL));
/// assert!(!is_sentinel(0));
/// ```
pub const fn is_sentinel(state: StateId) -> bool {
    state == SENTINEL
}

/// Check whether an origin value ends the fire scan.
///
/// Any negative origin terminates the scan, not only [`SENTINEL`].
pub const fn is_terminator(origin: StateId) -> bool {
    origin < 0
}
