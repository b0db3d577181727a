// File: crates/daycount-core/src/colorize.rs
// Summary: Assign each day of a grid its color from the year's occupancy bounds.

use crate::calendar::Day;
use crate::color::Color;

/// Smallest and largest bucket size across `days`, empty days included.
///
/// Starts from `(usize::MAX, 0)`, so an empty slice returns `min > max`.
pub fn occupancy_bounds<E>(days: &[Day<'_, E>]) -> (usize, usize) {
    days.iter().fold((usize::MAX, 0), |(min, max), d| (min.min(d.count()), max.max(d.count())))
}

/// Color every day in place.
///
/// Empty days get `empty`; occupied days get `color_fn(min, max, count)`.
/// A grid with no occupied day never reaches `color_fn`.
pub fn colorize<E, C>(days: &mut [Day<'_, E>], empty: Color, color_fn: C)
where
    C: Fn(usize, usize, usize) -> Color,
{
    let (min, max) = occupancy_bounds(days);
    if max == 0 {
        days.iter_mut().for_each(|d| d.set_color(empty));
        return;
    }
    for day in days.iter_mut() {
        let color = if day.is_empty() { empty } else { color_fn(min, max, day.count()) };
        day.set_color(color);
    }
}
