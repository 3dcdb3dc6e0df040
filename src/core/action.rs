//! Output actions run after a transition fires.

use std::fmt;

/// Side effect invoked with the owner of the machine once a transition wins.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::Action;
///
/// struct Led {
///     lit: bool,
/// }
///
/// fn switch_on(led: &mut Led) {
///     led.lit = true;
/// }
///
/// let mut led = Led { lit: false };
/// Action::new(switch_on).run(&mut led);
/// assert!(led.lit);
/// ```
pub struct Action<M> {
    effect: fn(&mut M),
}

impl<M> Action<M> {
    pub const fn new(effect: fn(&mut M)) -> Self {
        Action { effect }
    }

    pub fn run(&self, owner: &mut M) {
        (self.effect)(owner)
    }
}

impl<M> Clone for Action<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Action<M> {}

impl<M> fmt::Debug for Action<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Action")
            .field(&(self.effect as *const ()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        hits: u32,
    }

    fn bump(counter: &mut Counter) {
        counter.hits += 1;
    }

    #[test]
    fn run_mutates_owner() {
        let action = Action::new(bump);
        let mut counter = Counter { hits: 0 };

        action.run(&mut counter);
        action.run(&mut counter);

        assert_eq!(counter.hits, 2);
    }
}
