//! The FSM engine.
//!
//! - [`Fsm`]: a borrowed table plus the current state, embeddable anywhere
//! - [`Machine`]: implemented by the owner of an `Fsm`, provides `fire`
//! - [`SimpleFsm`]: an owner for machines without application data

mod error;
mod machine;

pub use error::FsmError;
pub use machine::{Fsm, Machine, SimpleFsm};
