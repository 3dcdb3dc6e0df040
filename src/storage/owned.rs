//! Heap-allocated machines.

use super::allocator::{FsmAllocator, SystemAllocator};
use crate::core::Transition;
use crate::engine::{Fsm, FsmError, Machine, SimpleFsm};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A machine living in storage obtained from an [`FsmAllocator`].
///
/// The handle dereferences to the machine. Dropping it, or calling
/// [`destroy`](Self::destroy), returns the storage to the same allocator
/// exactly once. The transition table is never released.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Guard, Transition};
/// use tablefsm::engine::{Machine, SimpleFsm};
///
/// fn always(_: &SimpleFsm<'_>) -> bool {
///     true
/// }
///
/// let table = [Transition::new(0, Guard::new(always), 1, None), Transition::END];
///
/// let mut machine = SimpleFsm::construct(&table).unwrap();
/// assert_eq!(machine.state(), 0);
///
/// machine.fire();
/// assert_eq!(machine.state(), 1);
///
/// machine.destroy();
/// ```
pub struct OwnedFsm<M, A: FsmAllocator = SystemAllocator> {
    machine: Option<Box<M>>,
    allocator: A,
}

impl<M, A: FsmAllocator> OwnedFsm<M, A> {
    /// Validate `table`, then allocate and initialize one machine.
    ///
    /// The allocator is not touched when the table is rejected, and is
    /// asked for storage exactly once otherwise.
    pub fn construct<'t>(table: &'t [Transition<M>], allocator: A) -> Result<Self, FsmError>
    where
        M: Machine<'t> + From<Fsm<'t, M>>,
    {
        let fsm = Fsm::new(table)?;

        let Some(machine) = allocator.allocate(M::from(fsm)) else {
            tracing::debug!("Allocator refused storage for a new machine");
            return Err(FsmError::AllocationFailed);
        };

        Ok(OwnedFsm {
            machine: Some(machine),
            allocator,
        })
    }

    /// Release the machine's storage.
    pub fn destroy(self) {
        drop(self);
    }

    /// The allocator that will release this machine's storage.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }
}

impl<'t> SimpleFsm<'t> {
    /// Heap-allocate a machine with the global allocator.
    pub fn construct(table: &'t [Transition<Self>]) -> Result<OwnedFsm<Self>, FsmError> {
        OwnedFsm::construct(table, SystemAllocator)
    }
}

impl<M, A: FsmAllocator> Deref for OwnedFsm<M, A> {
    type Target = M;

    fn deref(&self) -> &M {
        self.machine
            .as_deref()
            .expect("machine storage is only released on drop")
    }
}

impl<M, A: FsmAllocator> DerefMut for OwnedFsm<M, A> {
    fn deref_mut(&mut self) -> &mut M {
        self.machine
            .as_deref_mut()
            .expect("machine storage is only released on drop")
    }
}

impl<M, A: FsmAllocator> Drop for OwnedFsm<M, A> {
    fn drop(&mut self) {
        if let Some(machine) = self.machine.take() {
            self.allocator.deallocate(machine);
        }
    }
}

impl<M: fmt::Debug, A: FsmAllocator> fmt::Debug for OwnedFsm<M, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnedFsm").field(&self.machine).finish()
    }
}
