// File: crates/daycount-core/src/partition.rs
// Summary: Year-level partitioning of elements (distinct years, last occupied time, totals).

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Utc};

/// Ascending, deduplicated years that at least one element falls in.
pub fn distinct_years<E, F>(elements: &[E], time_of: F) -> Vec<i32>
where
    F: Fn(&E) -> DateTime<Utc>,
{
    let set: BTreeSet<i32> = elements.iter().map(|e| time_of(e).year()).collect();
    set.into_iter().collect()
}

/// Latest timestamp within `year`, or `None` when nothing falls in it.
pub fn last_occupied<E, F>(year: i32, elements: &[E], time_of: F) -> Option<DateTime<Utc>>
where
    F: Fn(&E) -> DateTime<Utc>,
{
    elements.iter().map(time_of).filter(|t| t.year() == year).max()
}

/// Number of elements whose timestamp falls in `year`.
pub fn year_total<E, F>(year: i32, elements: &[E], time_of: F) -> usize
where
    F: Fn(&E) -> DateTime<Utc>,
{
    elements.iter().filter(|e| time_of(*e).year() == year).count()
}
