//! Table validation errors.

use thiserror::Error;

/// Problems found in a transition table.
///
/// Construction only ever reports the first-entry variants
/// (`Empty`, `SentinelOrigin`, `SentinelDestination { index: 0 }`,
/// `MissingGuard { index: 0 }`). The rest come from [`lint`](super::lint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Transition table is empty")]
    Empty,

    #[error("First transition is the end-of-table sentinel")]
    SentinelOrigin,

    #[error("Transition {index} targets the sentinel state")]
    SentinelDestination { index: usize },

    #[error("Transition {index} has no guard")]
    MissingGuard { index: usize },

    #[error("First transition has origin {origin}, which ends the table before any transition")]
    DeadHead { origin: i32 },

    #[error("Transition table is not closed by the end-of-table sentinel")]
    MissingTerminator,

    #[error("Transition {index} follows the end-of-table sentinel and is unreachable")]
    TrailingEntries { index: usize },
}
