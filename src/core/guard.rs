//! Guard predicates for controlling transitions.
//!
//! A guard decides whether a transition fires. It receives the owner of the
//! machine, so it can read any application data embedded next to the `Fsm`.

use std::fmt;

/// Predicate that determines if a transition can fire.
///
/// Guards wrap plain function pointers so they can live in `static` tables
/// and be shared across threads.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::Guard;
///
/// struct Door {
///     open: bool,
/// }
///
/// fn is_open(door: &Door) -> bool {
///     door.open
/// }
///
/// let guard = Guard::new(is_open);
///
/// assert!(guard.check(&Door { open: true }));
/// assert!(!guard.check(&Door { open: false }));
/// ```
pub struct Guard<M> {
    predicate: fn(&M) -> bool,
}

impl<M> Guard<M> {
    /// Create a guard from a predicate function.
    pub const fn new(predicate: fn(&M) -> bool) -> Self {
        Guard { predicate }
    }

    /// Evaluate the guard against the owner of the machine.
    pub fn check(&self, owner: &M) -> bool {
        (self.predicate)(owner)
    }
}

impl<M> Clone for Guard<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Guard<M> {}

impl<M> fmt::Debug for Guard<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard")
            .field(&(self.predicate as *const ()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Sensor {
        level: u32,
        reads: Cell<u32>,
    }

    fn above_threshold(sensor: &Sensor) -> bool {
        sensor.reads.set(sensor.reads.get() + 1);
        sensor.level > 10
    }

    #[test]
    fn guard_reads_owner_data() {
        let guard = Guard::new(above_threshold);

        let low = Sensor {
            level: 3,
            reads: Cell::new(0),
        };
        let high = Sensor {
            level: 42,
            reads: Cell::new(0),
        };

        assert!(!guard.check(&low));
        assert!(guard.check(&high));
    }

    #[test]
    fn check_calls_predicate_once() {
        let guard = Guard::new(above_threshold);
        let sensor = Sensor {
            level: 11,
            reads: Cell::new(0),
        };

        guard.check(&sensor);

        assert_eq!(sensor.reads.get(), 1);
    }

    #[test]
    fn copies_share_the_predicate() {
        let guard = Guard::new(above_threshold);
        let copy = guard;
        let sensor = Sensor {
            level: 20,
            reads: Cell::new(0),
        };

        assert_eq!(guard.check(&sensor), copy.check(&sensor));
    }
}
