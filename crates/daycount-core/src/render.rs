// File: crates/daycount-core/src/render.rs
// Summary: Renderer trait (markup/image backends live outside this crate) and the hand-off loop.

use chrono::{DateTime, Utc};

use crate::chart::{build_with, YearChart};
use crate::config::Configuration;
use crate::element::Timestamped;
use crate::error::ChartError;

/// Turns one computed year into a visual form (HTML, SVG, text, ...).
///
/// Implementations only lay out what they are given: `grid_column`,
/// `grid_row`, `color`, `count` and the configuration's label callbacks.
pub trait Renderer<E> {
    type Output;

    fn render(&self, chart: &YearChart<'_, E>, config: &Configuration<E>) -> anyhow::Result<Self::Output>;
}

impl<E, R: Renderer<E> + ?Sized> Renderer<E> for &R {
    type Output = R::Output;

    fn render(&self, chart: &YearChart<'_, E>, config: &Configuration<E>) -> anyhow::Result<Self::Output> {
        (**self).render(chart, config)
    }
}

/// Rendered output for one year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedChart<O> {
    pub year: i32,
    pub output: O,
}

/// Build every year and hand each to `renderer`, ascending by year.
///
/// Stops at the first failure and returns only the error (naming the year);
/// charts rendered before it are discarded.
pub fn render<E, R>(elements: &[E], config: &Configuration<E>, renderer: R) -> Result<Vec<RenderedChart<R::Output>>, ChartError>
where
    E: Timestamped,
    R: Renderer<E>,
{
    render_with(elements, config, renderer, |e: &E| Timestamped::timestamp(e))
}

/// Like [`render`], with the timestamp read through `time_of`.
pub fn render_with<E, R, F>(
    elements: &[E],
    config: &Configuration<E>,
    renderer: R,
    time_of: F,
) -> Result<Vec<RenderedChart<R::Output>>, ChartError>
where
    R: Renderer<E>,
    F: Fn(&E) -> DateTime<Utc>,
{
    build_with(elements, config, time_of)
        .iter()
        .map(|chart| match renderer.render(chart, config) {
            Ok(output) => Ok(RenderedChart { year: chart.year, output }),
            Err(source) => {
                log::error!("rendering {} failed: {source:#}", chart.year);
                Err(ChartError::Render { year: chart.year, source })
            }
        })
        .collect()
}
