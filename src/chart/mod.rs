//! Chart Renderer
//!
//! - **figure**: Plotly figure model serialized to `{data, layout}` JSON
//! - **render**: `PlotlyRenderer` and the tagged `ChartOutcome`
//! - **stats**: correlation and normalisation helpers

pub mod figure;
pub mod render;
pub mod stats;

pub use figure::{Figure, Layout, Palette, Trace};
pub use render::{ChartOutcome, EmptyChart, IndicatorRenderer, PlotlyRenderer};
