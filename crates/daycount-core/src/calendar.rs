// File: crates/daycount-core/src/calendar.rs
// Summary: Per-year day grid: one cell per date from Jan 1 to the last occupied day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

use crate::color::{Color, EMPTY_DAY_COLOR};
use crate::partition::last_occupied;

/// One calendar day of a year's grid.
///
/// Columns are week numbers starting at 1 on Jan 1 and rolling over after
/// each Saturday; rows are weekdays with Sunday = 1 .. Saturday = 7.
#[derive(Debug, PartialEq)]
pub struct Day<'a, E> {
    date: NaiveDate,
    week: u32,
    elements: Vec<&'a E>,
    color: Color,
}

// Manual impl: cloning borrows never needs `E: Clone`.
impl<E> Clone for Day<'_, E> {
    fn clone(&self) -> Self {
        Self { date: self.date, week: self.week, elements: self.elements.clone(), color: self.color }
    }
}

impl<'a, E> Day<'a, E> {
    pub fn date(&self) -> NaiveDate { self.date }

    /// Midnight UTC of this day.
    pub fn timestamp(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::MIN))
    }

    /// Week column, 1-based.
    pub fn grid_column(&self) -> u32 { self.week }

    /// Weekday row, Sunday = 1.
    pub fn grid_row(&self) -> u32 { self.date.weekday().num_days_from_sunday() + 1 }

    pub fn weekday(&self) -> Weekday { self.date.weekday() }

    /// Elements on this day, in input order.
    pub fn elements(&self) -> &[&'a E] { &self.elements }

    pub fn count(&self) -> usize { self.elements.len() }

    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    pub fn color(&self) -> Color { self.color }

    pub(crate) fn set_color(&mut self, color: Color) { self.color = color; }
}

/// Build the uncolored grid for `year`.
///
/// Spans Jan 1 through the date of the latest element in `year`, inclusive,
/// and is empty when no element falls in `year`. Elements are bucketed in
/// one pass by day-of-year, keeping input order inside each bucket.
pub fn build_grid<E, F>(year: i32, elements: &[E], time_of: F) -> Vec<Day<'_, E>>
where
    F: Fn(&E) -> DateTime<Utc>,
{
    let Some(last) = last_occupied(year, elements, &time_of) else { return Vec::new() };
    let Some(jan_first) = NaiveDate::from_ymd_opt(year, 1, 1) else { return Vec::new() };
    let last_day = last.date_naive();

    let mut days = Vec::with_capacity(last_day.ordinal() as usize);
    let mut week = 1;
    for date in jan_first.iter_days().take_while(|d| d.year() == year && *d <= last_day) {
        days.push(Day { date, week, elements: Vec::new(), color: EMPTY_DAY_COLOR });
        if date.weekday() == Weekday::Sat {
            week += 1;
        }
    }

    for e in elements {
        let t = time_of(e);
        if t.year() != year {
            continue;
        }
        if let Some(day) = days.get_mut(t.ordinal0() as usize) {
            day.elements.push(e);
        }
    }
    days
}
