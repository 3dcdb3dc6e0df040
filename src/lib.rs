//! tablefsm: a minimal table-driven finite state machine runtime
//!
//! A state machine here is a small value, [`Fsm`], meant to be embedded in
//! the structure it controls. Behavior lives in a transition table authored
//! once, usually as a `static`, and shared by any number of machines.
//!
//! # Core Concepts
//!
//! - **Transition table**: ordered rows `(origin, guard, destination, action)`
//!   closed by [`Transition::END`]
//! - **Guards**: predicates over the machine's owner deciding whether a row fires
//! - **Actions**: optional side effects run after a row fired
//! - **Fire**: one pass over the table applying at most one transition
//!
//! # Example
//!
//! ```rust
//! use tablefsm::core::Transition;
//! use tablefsm::engine::{Fsm, Machine};
//! use tablefsm::transition_table;
//!
//! const OFF: i32 = 0;
//! const ON: i32 = 1;
//!
//! struct Lamp {
//!     fsm: Fsm<'static, Lamp>,
//!     button: bool,
//!     lit: bool,
//! }
//!
//! impl Machine<'static> for Lamp {
//!     fn fsm(&self) -> &Fsm<'static, Self> {
//!         &self.fsm
//!     }
//!
//!     fn fsm_mut(&mut self) -> &mut Fsm<'static, Self> {
//!         &mut self.fsm
//!     }
//! }
//!
//! fn pressed(lamp: &Lamp) -> bool {
//!     lamp.button
//! }
//!
//! fn light(lamp: &mut Lamp) {
//!     lamp.lit = true;
//! }
//!
//! fn darken(lamp: &mut Lamp) {
//!     lamp.lit = false;
//! }
//!
//! static LAMP: [Transition<Lamp>; 3] = transition_table![
//!     (OFF, pressed, ON, light),
//!     (ON, pressed, OFF, darken),
//! ];
//!
//! let mut lamp = Lamp {
//!     fsm: Fsm::new(&LAMP).unwrap(),
//!     button: true,
//!     lit: false,
//! };
//!
//! lamp.fire();
//! assert_eq!(lamp.state(), ON);
//! assert!(lamp.lit);
//! ```

pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod storage;
pub mod table;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Action, Guard, StateId, Transition, SENTINEL};
pub use engine::{Fsm, FsmError, Machine, SimpleFsm};
pub use storage::{FsmAllocator, OwnedFsm, SystemAllocator};
pub use table::TableError;
