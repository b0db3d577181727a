// File: crates/daycount-core/src/chart.rs
// Summary: Year assembly: partition, grid, colorize and total, one chart per year.

use chrono::{DateTime, Utc};

use crate::calendar::{build_grid, Day};
use crate::colorize::colorize;
use crate::config::Configuration;
use crate::element::Timestamped;
use crate::partition::distinct_years;

/// Computed grid for one calendar year, ready for a renderer.
#[derive(Debug, PartialEq)]
pub struct YearChart<'a, E> {
    pub year: i32,
    /// Elements that fall in `year`.
    pub total: usize,
    /// Jan 1 through the last occupied day, ascending.
    pub days: Vec<Day<'a, E>>,
}

impl<E> Clone for YearChart<'_, E> {
    fn clone(&self) -> Self {
        Self { year: self.year, total: self.total, days: self.days.clone() }
    }
}

impl<'a, E> YearChart<'a, E> {
    /// Number of week columns in the grid.
    pub fn weeks(&self) -> u32 {
        self.days.last().map_or(0, Day::grid_column)
    }

    /// The most active day; the earliest one on ties.
    pub fn busiest_day(&self) -> Option<&Day<'a, E>> {
        // max_by_key keeps the last maximum, so walk backwards
        self.days.iter().filter(|d| !d.is_empty()).rev().max_by_key(|d| d.count())
    }
}

/// Build one chart per year present in `elements`, ascending by year.
pub fn build<'a, E: Timestamped>(elements: &'a [E], config: &Configuration<E>) -> Vec<YearChart<'a, E>> {
    build_with(elements, config, |e: &E| Timestamped::timestamp(e))
}

/// Like [`build`], with the timestamp read through `time_of`.
pub fn build_with<'a, E, F>(elements: &'a [E], config: &Configuration<E>, time_of: F) -> Vec<YearChart<'a, E>>
where
    F: Fn(&E) -> DateTime<Utc>,
{
    distinct_years(elements, &time_of)
        .into_iter()
        .map(|year| {
            let mut days = build_grid(year, elements, &time_of);
            colorize(&mut days, config.empty_day_color, |min, max, n| config.color_for(min, max, n));
            let total: usize = days.iter().map(Day::count).sum();
            log::debug!("assembled {year}: {} days, {total} elements", days.len());
            YearChart { year, total, days }
        })
        .collect()
}
