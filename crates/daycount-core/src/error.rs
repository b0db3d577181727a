// File: crates/daycount-core/src/error.rs
// Summary: Library error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The external renderer failed on one year; no charts are returned.
    #[error("failed to render chart for {year}")]
    Render {
        year: i32,
        #[source]
        source: anyhow::Error,
    },
}

impl ChartError {
    /// Year whose rendering failed.
    pub fn year(&self) -> i32 {
        match self {
            ChartError::Render { year, .. } => *year,
        }
    }
}
