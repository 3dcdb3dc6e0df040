//! Validation of transition tables.

use super::error::TableError;
use crate::core::{is_sentinel, Transition};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check the first entry of a table.
///
/// This is the only check Construct and Initialize perform: the table must
/// be non-empty and its first entry must have a non-sentinel origin, a
/// non-sentinel destination and a guard. Later entries are not looked at.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Guard, Transition};
/// use tablefsm::table::{validate_head, TableError};
///
/// fn always(_: &()) -> bool {
///     true
/// }
///
/// let good = [Transition::new(0, Guard::new(always), 1, None), Transition::END];
/// assert!(validate_head(&good).is_ok());
///
/// let bad = [Transition::new(0, Guard::new(always), -1, None), Transition::END];
/// assert_eq!(
///     validate_head(&bad),
///     Err(TableError::SentinelDestination { index: 0 })
/// );
/// ```
pub fn validate_head<M>(table: &[Transition<M>]) -> Result<(), TableError> {
    let first = table.first().ok_or(TableError::Empty)?;

    if is_sentinel(first.origin) {
        return Err(TableError::SentinelOrigin);
    }
    if first.guard.is_none() {
        return Err(TableError::MissingGuard { index: 0 });
    }
    if is_sentinel(first.destination) {
        return Err(TableError::SentinelDestination { index: 0 });
    }

    Ok(())
}

/// Number of entries scanned by fire, i.e. the entries before the terminator.
pub fn live_len<M>(table: &[Transition<M>]) -> usize {
    table
        .iter()
        .position(|t| t.is_end())
        .unwrap_or(table.len())
}

/// Scan the whole table and report every problem at once.
///
/// This is an opt-in authoring aid. Construction does not call it, so tables
/// that only pass [`validate_head`] are still accepted by the engine.
pub fn lint<M>(table: &[Transition<M>]) -> Validation<(), NonEmptyVec<TableError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<TableError>>> = Vec::new();

    checks.push(match validate_head(table) {
        Ok(()) => Validation::success(()),
        Err(e) => Validation::fail(e),
    });

    let live = live_len(table);

    if live == 0 && !table.is_empty() && !is_sentinel(table[0].origin) {
        checks.push(Validation::fail(TableError::DeadHead {
            origin: table[0].origin,
        }));
    }

    // The head was covered above
    for (index, t) in table.iter().enumerate().take(live).skip(1) {
        if t.guard.is_none() {
            checks.push(Validation::fail(TableError::MissingGuard { index }));
        }
        if is_sentinel(t.destination) {
            checks.push(Validation::fail(TableError::SentinelDestination { index }));
        }
    }

    if live == table.len() && !table.is_empty() {
        checks.push(Validation::fail(TableError::MissingTerminator));
    }

    if live > 0 && live + 1 < table.len() {
        checks.push(Validation::fail(TableError::TrailingEntries { index: live + 1 }));
    }

    Validation::all_vec(checks).map(|_| ())
}
