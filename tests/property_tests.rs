//! Property-based tests for the fire algorithm.
//!
//! These tests use proptest to compare the engine against a direct model
//! of the scan over many randomly generated tables.

use std::cell::RefCell;

use proptest::prelude::*;
use tablefsm::core::{Guard, StateId, Transition};
use tablefsm::engine::{Fsm, FsmError, Machine, SimpleFsm};
use tablefsm::table::{lint, TableError};

const ROWS: usize = 8;

/// Owner whose guard for row `i` answers `answers[i]` and logs `i`.
struct Oracle<'t> {
    fsm: Fsm<'t, Oracle<'t>>,
    answers: Vec<bool>,
    calls: RefCell<Vec<usize>>,
}

impl<'t> Machine<'t> for Oracle<'t> {
    fn fsm(&self) -> &Fsm<'t, Self> {
        &self.fsm
    }

    fn fsm_mut(&mut self) -> &mut Fsm<'t, Self> {
        &mut self.fsm
    }
}

macro_rules! row_guards {
    ($($name:ident = $index:literal),* $(,)?) => {
        $(
            fn $name(o: &Oracle<'_>) -> bool {
                o.calls.borrow_mut().push($index);
                o.answers[$index]
            }
        )*

        fn guard_for<'t>(index: usize) -> fn(&Oracle<'t>) -> bool {
            match index {
                $($index => $name as fn(&Oracle<'t>) -> bool,)*
                _ => unreachable!("at most {} rows", ROWS),
            }
        }
    };
}

row_guards!(g0 = 0, g1 = 1, g2 = 2, g3 = 3, g4 = 4, g5 = 5, g6 = 6, g7 = 7);

prop_compose! {
    fn arbitrary_rows()(
        rows in prop::collection::vec((0..4i32, 0..4i32, any::<bool>()), 1..=ROWS)
    ) -> Vec<(StateId, StateId, bool)> {
        rows
    }
}

fn build_table<'t>(rows: &[(StateId, StateId, bool)]) -> Vec<Transition<Oracle<'t>>> {
    let mut table: Vec<Transition<Oracle<'t>>> = rows
        .iter()
        .enumerate()
        .map(|(i, (origin, destination, _))| {
            Transition::new(*origin, Guard::new(guard_for(i)), *destination, None)
        })
        .collect();
    table.push(Transition::END);
    table
}

/// Expected guard calls, final state and fired flag for one fire.
fn model(rows: &[(StateId, StateId, bool)], state: StateId) -> (Vec<usize>, StateId, bool) {
    let mut calls = Vec::new();
    for (i, (origin, destination, answer)) in rows.iter().enumerate() {
        if *origin != state {
            continue;
        }
        calls.push(i);
        if *answer {
            return (calls, *destination, true);
        }
    }
    (calls, state, false)
}

fn always(_: &SimpleFsm<'_>) -> bool {
    true
}

proptest! {
    #[test]
    fn fire_matches_model(rows in arbitrary_rows(), start in 0..4i32) {
        let table = build_table(&rows);
        let mut oracle = Oracle {
            fsm: Fsm::new(&table).unwrap(),
            answers: rows.iter().map(|r| r.2).collect(),
            calls: RefCell::new(Vec::new()),
        };
        oracle.set_state(start);

        let fired = oracle.fire();

        let (expected_calls, expected_state, expected_fired) = model(&rows, start);
        prop_assert_eq!(oracle.calls.borrow().clone(), expected_calls);
        prop_assert_eq!(oracle.state(), expected_state);
        prop_assert_eq!(fired, expected_fired);
    }

    #[test]
    fn repeated_fires_follow_model(rows in arbitrary_rows(), steps in 1..6usize) {
        let table = build_table(&rows);
        let mut oracle = Oracle {
            fsm: Fsm::new(&table).unwrap(),
            answers: rows.iter().map(|r| r.2).collect(),
            calls: RefCell::new(Vec::new()),
        };
        let mut expected = rows[0].0;

        for _ in 0..steps {
            oracle.calls.borrow_mut().clear();
            oracle.fire();
            let (calls, next, _) = model(&rows, expected);
            prop_assert_eq!(oracle.calls.borrow().clone(), calls);
            expected = next;
            prop_assert_eq!(oracle.state(), expected);
        }
    }

    #[test]
    fn init_starts_in_first_origin(rows in arbitrary_rows()) {
        let table = build_table(&rows);
        let fsm = Fsm::new(&table).unwrap();
        prop_assert_eq!(fsm.state(), rows[0].0);
    }

    #[test]
    fn set_state_is_read_back(state in any::<i32>()) {
        let table = [Transition::new(0, Guard::new(always), 1, None), Transition::END];
        let mut fsm = SimpleFsm::new(&table).unwrap();

        fsm.set_state(state);

        prop_assert_eq!(fsm.state(), state);
    }

    #[test]
    fn head_validation_checks_sentinels(origin in -1..3i32, destination in -1..3i32) {
        let table = [Transition::new(origin, Guard::new(always), destination, None), Transition::END];

        let result = SimpleFsm::new(&table);

        if origin == -1 {
            prop_assert_eq!(result.err(), Some(FsmError::InvalidTable(TableError::SentinelOrigin)));
        } else if destination == -1 {
            prop_assert_eq!(
                result.err(),
                Some(FsmError::InvalidTable(TableError::SentinelDestination { index: 0 }))
            );
        } else {
            let fsm = result.unwrap();
            prop_assert_eq!(fsm.state(), origin);
        }
    }

    #[test]
    fn generated_tables_pass_lint(rows in arbitrary_rows()) {
        let table = build_table(&rows);
        prop_assert!(lint(&table).is_success());
    }
}
