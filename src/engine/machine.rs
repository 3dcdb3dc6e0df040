//! Machine instances and the fire algorithm.

use crate::core::{StateId, Transition, SENTINEL};
use crate::engine::error::FsmError;
use crate::table::validate_head;
use std::fmt;

/// A machine instance: a borrowed transition table plus the current state.
///
/// `Fsm` is meant to be embedded by value in an owner type `M` that
/// implements [`Machine`]. Guards and actions of the table receive that
/// owner, so they can reach whatever application data sits next to the
/// machine. The table is never owned: `'t` ties every instance to a table
/// that outlives it.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Guard, Transition};
/// use tablefsm::engine::{Fsm, Machine};
///
/// struct Button {
///     fsm: Fsm<'static, Button>,
///     pressed: bool,
/// }
///
/// impl Machine<'static> for Button {
///     fn fsm(&self) -> &Fsm<'static, Self> {
///         &self.fsm
///     }
///
///     fn fsm_mut(&mut self) -> &mut Fsm<'static, Self> {
///         &mut self.fsm
///     }
/// }
///
/// fn pressed(b: &Button) -> bool {
///     b.pressed
/// }
///
/// static TABLE: [Transition<Button>; 2] = [
///     Transition::new(0, Guard::new(pressed), 1, None),
///     Transition::END,
/// ];
///
/// let mut button = Button {
///     fsm: Fsm::new(&TABLE).unwrap(),
///     pressed: false,
/// };
///
/// assert!(!button.fire());
/// assert_eq!(button.state(), 0);
///
/// button.pressed = true;
/// assert!(button.fire());
/// assert_eq!(button.state(), 1);
/// ```
pub struct Fsm<'t, M> {
    table: &'t [Transition<M>],
    current_state: StateId,
}

impl<'t, M> Fsm<'t, M> {
    /// Storage that has not been bound to a table yet.
    ///
    /// Usable in `static` items; call [`init`](Self::init) before relying on
    /// its state. Firing an unbound machine never changes anything.
    pub const fn unbound() -> Self {
        Fsm {
            table: &[],
            current_state: SENTINEL,
        }
    }

    /// Create a machine bound to `table`, starting in the origin of its
    /// first entry.
    pub fn new(table: &'t [Transition<M>]) -> Result<Self, FsmError> {
        let mut fsm = Self::unbound();
        fsm.init(table)?;
        Ok(fsm)
    }

    /// Bind existing storage to `table`.
    ///
    /// Only the first entry of the table is validated. On failure the
    /// machine is left exactly as it was.
    pub fn init(&mut self, table: &'t [Transition<M>]) -> Result<(), FsmError> {
        if let Err(e) = validate_head(table) {
            tracing::debug!("Rejected transition table: {}", e);
            return Err(e.into());
        }

        self.table = table;
        if let Some(first) = table.first() {
            self.current_state = first.origin;
        }
        Ok(())
    }

    /// Current state, without side effects.
    pub fn state(&self) -> StateId {
        self.current_state
    }

    /// Overwrite the current state, bypassing the table.
    pub fn set_state(&mut self, state: StateId) {
        self.current_state = state;
    }

    /// The table this machine was bound to.
    pub fn table(&self) -> &'t [Transition<M>] {
        self.table
    }

    /// Whether a table has been bound by `new` or `init`.
    pub fn is_bound(&self) -> bool {
        !self.table.is_empty()
    }
}

impl<M> Default for Fsm<'_, M> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<M> Clone for Fsm<'_, M> {
    fn clone(&self) -> Self {
        Fsm {
            table: self.table,
            current_state: self.current_state,
        }
    }
}

impl<M> fmt::Debug for Fsm<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fsm")
            .field("transitions", &self.table.len())
            .field("current_state", &self.current_state)
            .finish()
    }
}

/// Owner of an embedded [`Fsm`].
///
/// Implementors only expose where their machine lives; state queries and
/// [`fire`](Machine::fire) come for free and hand `self` to guards and
/// actions.
pub trait Machine<'t>: Sized + 't {
    fn fsm(&self) -> &Fsm<'t, Self>;

    fn fsm_mut(&mut self) -> &mut Fsm<'t, Self>;

    /// Rebind the embedded machine to `table`. See [`Fsm::init`].
    fn init(&mut self, table: &'t [Transition<Self>]) -> Result<(), FsmError> {
        self.fsm_mut().init(table)
    }

    fn state(&self) -> StateId {
        self.fsm().state()
    }

    fn set_state(&mut self, state: StateId) {
        self.fsm_mut().set_state(state);
    }

    /// Apply at most one transition.
    ///
    /// Entries are scanned in table order up to the end-of-table sentinel.
    /// Only entries leaving the current state have their guard evaluated,
    /// and the first guard returning `true` wins: the state moves to its
    /// destination, then its action runs. Returns whether a transition
    /// fired.
    fn fire(&mut self) -> bool {
        let table = self.fsm().table();
        let state = self.fsm().state();

        for (index, transition) in table.iter().take_while(|t| !t.is_end()).enumerate() {
            if transition.origin != state {
                continue;
            }
            if transition.guard.is_none() {
                tracing::warn!(
                    "Transition {} from state {} has no guard and cannot fire",
                    index,
                    state
                );
                continue;
            }
            if !transition.can_fire(state, self) {
                continue;
            }

            self.fsm_mut().current_state = transition.destination;
            tracing::trace!(
                "Transition {} fired: {} -> {}",
                index,
                state,
                transition.destination
            );

            if let Some(action) = transition.action {
                action.run(self);
            }
            return true;
        }

        false
    }
}

/// A machine with no application data of its own.
///
/// Guards and actions only see the machine itself.
#[derive(Debug, Clone, Default)]
pub struct SimpleFsm<'t> {
    fsm: Fsm<'t, SimpleFsm<'t>>,
}

impl<'t> SimpleFsm<'t> {
    pub fn new(table: &'t [Transition<Self>]) -> Result<Self, FsmError> {
        Ok(SimpleFsm {
            fsm: Fsm::new(table)?,
        })
    }

    pub const fn unbound() -> Self {
        SimpleFsm {
            fsm: Fsm::unbound(),
        }
    }
}

impl<'t> Machine<'t> for SimpleFsm<'t> {
    fn fsm(&self) -> &Fsm<'t, Self> {
        &self.fsm
    }

    fn fsm_mut(&mut self) -> &mut Fsm<'t, Self> {
        &mut self.fsm
    }
}

impl<'t> From<Fsm<'t, SimpleFsm<'t>>> for SimpleFsm<'t> {
    fn from(fsm: Fsm<'t, SimpleFsm<'t>>) -> Self {
        SimpleFsm { fsm }
    }
}
