// File: crates/daycount-core/tests/render.rs
// Purpose: Renderer hand-off: label callbacks, output ordering, first-failure abort.

use anyhow::{bail, Result};
use chrono::{DateTime, TimeZone, Utc};
use daycount_core::{render, render_with, ChartError, Configuration, Renderer, YearChart};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
}

/// Lists occupied cells as `column/row color title value` lines.
struct TextRenderer;

impl<E> Renderer<E> for TextRenderer {
    type Output = String;

    fn render(&self, chart: &YearChart<'_, E>, config: &Configuration<E>) -> Result<String> {
        let mut out = String::new();
        if let Some(h) = config.chart_heading(chart.year) {
            out.push_str(&h);
            out.push('\n');
        }
        for day in chart.days.iter().filter(|d| !d.is_empty()) {
            out.push_str(&format!(
                "{}/{} {} {} {}\n",
                day.grid_column(),
                day.grid_row(),
                day.color(),
                config.title_label(day),
                config.data_value_label(day),
            ));
        }
        Ok(out)
    }
}

struct FailOn(i32);

impl<E> Renderer<E> for FailOn {
    type Output = i32;

    fn render(&self, chart: &YearChart<'_, E>, _config: &Configuration<E>) -> Result<i32> {
        if chart.year == self.0 {
            bail!("template exploded");
        }
        Ok(chart.year)
    }
}

#[test]
fn default_labels() {
    let v = vec![at(2023, 3, 15)];
    let out = render(&v, &Configuration::default(), TextRenderer).expect("render");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].year, 2023);
    // 2023-03-15 is a Wednesday in week column 11
    assert_eq!(out[0].output, "11/4 hsl(127, 50%, 20.0000%) 2023-03-15 [1] 1\n");
}

#[test]
fn custom_labels_and_heading() {
    let v = vec![("a", at(2022, 1, 1)), ("b", at(2022, 1, 1)), ("c", at(2022, 1, 2))];
    let cfg = Configuration::<(&str, DateTime<Utc>)>::new()
        .with_chart_heading_title(|y| format!("Releases in {y}"))
        .with_title_label(|day| {
            let names: Vec<&str> = day.elements().iter().map(|e| e.0).collect();
            names.join(",")
        })
        .with_data_value_label(|day| format!("n={}", day.count()));
    let out = render_with(&v, &cfg, &TextRenderer, |e| e.1).expect("render");
    // No empty day in the grid, so min is 1 and the single-element day is palest
    assert_eq!(
        out[0].output,
        "Releases in 2022\n1/7 hsl(127, 50%, 20.0000%) a,b n=2\n2/1 hsl(127, 50%, 80.0000%) c n=1\n"
    );
}

#[test]
fn outputs_follow_year_order() {
    let v = vec![at(2021, 5, 1), at(2019, 5, 1), at(2020, 5, 1)];
    let out = render(&v, &Configuration::default(), FailOn(0)).expect("render");
    assert_eq!(out.iter().map(|c| c.output).collect::<Vec<_>>(), vec![2019, 2020, 2021]);
}

#[test]
fn first_failure_aborts_with_year() {
    let v = vec![at(2021, 5, 1), at(2019, 5, 1), at(2020, 5, 1)];
    let err = render(&v, &Configuration::default(), FailOn(2020)).unwrap_err();
    assert_eq!(err.year(), 2020);
    assert!(matches!(err, ChartError::Render { year: 2020, .. }));
    assert_eq!(err.to_string(), "failed to render chart for 2020");
    let source = std::error::Error::source(&err).expect("source");
    assert_eq!(source.to_string(), "template exploded");
}

#[test]
fn empty_input_renders_nothing() {
    let v: Vec<DateTime<Utc>> = Vec::new();
    let out = render(&v, &Configuration::default(), FailOn(0)).expect("render");
    assert!(out.is_empty());
}
