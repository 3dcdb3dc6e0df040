//! Macros for authoring transition tables.

/// Write a transition table literal closed by [`Transition::END`].
///
/// Each row reads `(origin, guard, destination)` or
/// `(origin, guard, destination, action)`, the same order as the fields of
/// [`Transition`]. The expansion is a `const`-evaluable array, so it can
/// initialize a `static`.
///
/// [`Transition`]: crate::core::Transition
/// [`Transition::END`]: crate::core::Transition::END
///
/// # Example
///
/// ```
/// use tablefsm::core::Transition;
/// use tablefsm::transition_table;
///
/// struct Valve {
///     demand: bool,
///     cycles: u32,
/// }
///
/// fn demand(v: &Valve) -> bool {
///     v.demand
/// }
///
/// fn no_demand(v: &Valve) -> bool {
///     !v.demand
/// }
///
/// fn count_cycle(v: &mut Valve) {
///     v.cycles += 1;
/// }
///
/// static TABLE: [Transition<Valve>; 3] = transition_table![
///     (0, demand, 1, count_cycle),
///     (1, no_demand, 0),
/// ];
///
/// assert!(TABLE[0].action.is_some());
/// assert!(TABLE[1].action.is_none());
/// assert!(TABLE[2].is_end());
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            ($origin:expr, $guard:expr, $destination:expr $(, $action:expr)?)
        ),* $(,)?
    ) => {
        [
            $(
                $crate::core::Transition::new(
                    $origin,
                    $crate::core::Guard::new($guard),
                    $destination,
                    $crate::__transition_action!($($action)?),
                ),
            )*
            $crate::core::Transition::END,
        ]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __transition_action {
    () => {
        None
    };
    ($action:expr) => {
        Some($crate::core::Action::new($action))
    };
}
