// File: crates/daycount-core/src/lib.rs
// Summary: Core library entry point; bins timestamped elements into per-year day grids with activity colors.

pub mod calendar;
pub mod chart;
pub mod color;
pub mod colorize;
pub mod config;
pub mod element;
pub mod error;
pub mod partition;
pub mod render;
pub mod scale;

pub use calendar::{build_grid, Day};
pub use chart::{build, build_with, YearChart};
pub use color::{hue_scale, Color, ColorFn, HueScale, DEFAULT_HUE, EMPTY_DAY_COLOR};
pub use colorize::{colorize, occupancy_bounds};
pub use config::Configuration;
pub use element::Timestamped;
pub use error::ChartError;
pub use partition::{distinct_years, last_occupied, year_total};
pub use render::{render, render_with, RenderedChart, Renderer};
pub use scale::{map_range, LinearScale};
