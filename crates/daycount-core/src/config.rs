// File: crates/daycount-core/src/config.rs
// Summary: Chart configuration (colors and label callbacks) with sensible defaults.

use std::fmt;

use crate::calendar::Day;
use crate::color::{hue_scale, Color, ColorFn, DEFAULT_HUE, EMPTY_DAY_COLOR};

/// Per-day label callback.
pub type DayLabelFn<E> = Box<dyn for<'a> Fn(&Day<'a, E>) -> String + Send + Sync>;
/// Per-year heading callback.
pub type HeadingFn = Box<dyn Fn(i32) -> String + Send + Sync>;

pub struct Configuration<E> {
    /// Color of days without elements.
    pub empty_day_color: Color,
    /// `(min, max, n) -> Color` for occupied days.
    pub color_fn: ColorFn,
    pub data_value_label: Option<DayLabelFn<E>>,
    pub title_label: Option<DayLabelFn<E>>,
    pub chart_heading_title: Option<HeadingFn>,
}

impl<E> Default for Configuration<E> {
    fn default() -> Self {
        Self {
            empty_day_color: EMPTY_DAY_COLOR,
            color_fn: hue_scale(DEFAULT_HUE),
            data_value_label: None,
            title_label: None,
            chart_heading_title: None,
        }
    }
}

impl<E> fmt::Debug for Configuration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("empty_day_color", &self.empty_day_color)
            .field("data_value_label", &self.data_value_label.is_some())
            .field("title_label", &self.title_label.is_some())
            .field("chart_heading_title", &self.chart_heading_title.is_some())
            .finish_non_exhaustive()
    }
}

impl<E> Configuration<E> {
    pub fn new() -> Self { Self::default() }

    /// Use `config` when present, defaults otherwise.
    pub fn or_default(config: Option<Self>) -> Self {
        config.unwrap_or_default()
    }

    pub fn with_empty_day_color(mut self, color: Color) -> Self {
        self.empty_day_color = color;
        self
    }

    pub fn with_color_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, usize) -> Color + Send + Sync + 'static,
    {
        self.color_fn = Box::new(f);
        self
    }

    /// Shorthand for the default scale on another hue.
    pub fn with_hue(mut self, hue: u16) -> Self {
        self.color_fn = hue_scale(hue);
        self
    }

    pub fn with_data_value_label<F>(mut self, f: F) -> Self
    where
        F: for<'a> Fn(&Day<'a, E>) -> String + Send + Sync + 'static,
    {
        self.data_value_label = Some(Box::new(f));
        self
    }

    pub fn with_title_label<F>(mut self, f: F) -> Self
    where
        F: for<'a> Fn(&Day<'a, E>) -> String + Send + Sync + 'static,
    {
        self.title_label = Some(Box::new(f));
        self
    }

    pub fn with_chart_heading_title<F>(mut self, f: F) -> Self
    where
        F: Fn(i32) -> String + Send + Sync + 'static,
    {
        self.chart_heading_title = Some(Box::new(f));
        self
    }

    /// Color for an occupied day given the year's bounds.
    pub fn color_for(&self, min: usize, max: usize, n: usize) -> Color {
        (self.color_fn)(min, max, n)
    }

    /// "Data value" attribute of a cell; the bucket size by default.
    pub fn data_value_label(&self, day: &Day<'_, E>) -> String {
        match &self.data_value_label {
            Some(f) => f(day),
            None => day.count().to_string(),
        }
    }

    /// Tooltip text of a cell; `2023-03-15 [1]` by default.
    pub fn title_label(&self, day: &Day<'_, E>) -> String {
        match &self.title_label {
            Some(f) => f(day),
            None => format!("{} [{}]", day.date().format("%Y-%m-%d"), day.count()),
        }
    }

    /// Heading shown above a year's grid, if any.
    pub fn chart_heading(&self, year: i32) -> Option<String> {
        self.chart_heading_title.as_ref().map(|f| f(year))
    }
}
