//! Transition table entries.

use super::action::Action;
use super::guard::Guard;
use super::state::{is_terminator, StateId, SENTINEL};
use std::fmt;

/// One edge of a machine whose owner type is `M`.
///
/// Tables are ordered slices of transitions closed by [`Transition::END`].
/// All constructors are `const`, so tables can be `static` items.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Action, Guard, Transition};
///
/// struct Pump {
///     pressure: u32,
///     starts: u32,
/// }
///
/// fn low_pressure(p: &Pump) -> bool {
///     p.pressure < 5
/// }
///
/// fn start_motor(p: &mut Pump) {
///     p.starts += 1;
/// }
///
/// const IDLE: i32 = 0;
/// const RUNNING: i32 = 1;
///
/// static TABLE: [Transition<Pump>; 2] = [
///     Transition::new(IDLE, Guard::new(low_pressure), RUNNING, Some(Action::new(start_motor))),
///     Transition::END,
/// ];
///
/// assert_eq!(TABLE[0].origin, IDLE);
/// assert!(TABLE[1].is_end());
/// ```
pub struct Transition<M> {
    /// State the transition leaves; negative values end the table
    pub origin: StateId,
    /// Predicate deciding whether the transition fires
    pub guard: Option<Guard<M>>,
    /// State the transition enters
    pub destination: StateId,
    /// Effect run after the state changed
    pub action: Option<Action<M>>,
}

impl<M> Transition<M> {
    /// End-of-table marker.
    pub const END: Self = Transition {
        origin: SENTINEL,
        guard: None,
        destination: SENTINEL,
        action: None,
    };

    /// Create a guarded transition.
    pub const fn new(
        origin: StateId,
        guard: Guard<M>,
        destination: StateId,
        action: Option<Action<M>>,
    ) -> Self {
        Transition {
            origin,
            guard: Some(guard),
            destination,
            action,
        }
    }

    /// Whether this entry terminates the table.
    pub const fn is_end(&self) -> bool {
        is_terminator(self.origin)
    }

    /// Whether the transition leaves `state` and its guard lets it fire.
    ///
    /// The guard is only evaluated when the origin matches.
    pub fn can_fire(&self, state: StateId, owner: &M) -> bool {
        if self.origin != state {
            return false;
        }

        self.guard.as_ref().is_some_and(|g| g.check(owner))
    }
}

impl<M> Clone for Transition<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Transition<M> {}

impl<M> fmt::Debug for Transition<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("origin", &self.origin)
            .field("guard", &self.guard)
            .field("destination", &self.destination)
            .field("action", &self.action)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Probe {
        answer: bool,
        calls: Cell<u32>,
    }

    fn answer(p: &Probe) -> bool {
        p.calls.set(p.calls.get() + 1);
        p.answer
    }

    #[test]
    fn can_fire_matches_origin_state() {
        let t = Transition::new(0, Guard::new(answer), 1, None);
        let probe = Probe {
            answer: true,
            calls: Cell::new(0),
        };

        assert!(t.can_fire(0, &probe));
        assert!(!t.can_fire(1, &probe));
    }

    #[test]
    fn guard_not_called_for_other_origin() {
        let t = Transition::new(3, Guard::new(answer), 4, None);
        let probe = Probe {
            answer: true,
            calls: Cell::new(0),
        };

        assert!(!t.can_fire(2, &probe));
        assert_eq!(probe.calls.get(), 0);
    }

    #[test]
    fn can_fire_respects_guard() {
        let t = Transition::new(0, Guard::new(answer), 1, None);
        let probe = Probe {
            answer: false,
            calls: Cell::new(0),
        };

        assert!(!t.can_fire(0, &probe));
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn unguarded_entry_never_fires() {
        let t: Transition<Probe> = Transition {
            origin: 0,
            guard: None,
            destination: 1,
            action: None,
        };
        let probe = Probe {
            answer: true,
            calls: Cell::new(0),
        };

        assert!(!t.can_fire(0, &probe));
    }

    #[test]
    fn end_marker_terminates() {
        let end: Transition<Probe> = Transition::END;
        assert!(end.is_end());
        assert!(end.guard.is_none());
        assert!(end.action.is_none());
        assert_eq!(end.destination, SENTINEL);
    }
}
