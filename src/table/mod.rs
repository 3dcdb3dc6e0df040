//! Transition table validation and authoring helpers.
//!
//! Construction relies on [`validate_head`], which only inspects the first
//! entry. [`lint`] is the opt-in full check for authors who want every
//! malformed row reported before flashing a table.

pub mod error;
pub mod macros;
pub mod validate;

pub use error::TableError;
pub use validate::{lint, live_len, validate_head};
