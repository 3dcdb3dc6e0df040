//! Engine errors.

use crate::table::TableError;
use thiserror::Error;

/// Errors reported when creating or binding a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("Invalid transition table: {0}")]
    InvalidTable(#[from] TableError),

    #[error("Allocator could not provide storage for the machine")]
    AllocationFailed,
}
