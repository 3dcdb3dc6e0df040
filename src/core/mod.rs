//! Core data model of a transition table.
//!
//! This module contains the plain data a table is made of:
//! - State identifiers and the `-1` sentinel
//! - Guard predicates and output actions over the machine's owner
//! - Transition entries
//!
//! Nothing here allocates; every type is `Copy` and usable in `static` tables.

mod action;
mod guard;
mod state;
mod transition;

pub use action::Action;
pub use guard::Guard;
pub use state::{is_sentinel, is_terminator, StateId, SENTINEL};
pub use transition::Transition;
