//! Chart Renderer
//!
//! Pure functions from a table to a `ChartOutcome`. A chart that cannot be
//! drawn is reported as `ChartOutcome::Empty` with the reason; callers
//! branch on the tag and nothing here panics or returns an error.

use thiserror::Error;

use super::figure::{
    Axis, BarTrace, ColorBar, Figure, Font, HeatmapTrace, Layout, Legend, Line, Marker,
    Polar, PolarTrace, ScatterTrace, Title, Trace,
};
use super::figure::Palette;
use super::stats::{correlation_matrix, min_max_normalize};
use crate::data::{Indicator, IndicatorTable, RegionalTable};

/// Why a chart was replaced by the empty figure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmptyChart {
    #[error("Indicator '{0}' is not in the dataset")]
    UnknownIndicator(String),

    #[error("Column '{0}' is not in the regional table")]
    MissingColumn(String),

    #[error("No series were requested")]
    NoSeries,

    #[error("Indicator '{0}' contains a non-finite value")]
    NonFinite(String),

    #[error("At least {needed} rows are required, found {found}")]
    TooFewRows { needed: usize, found: usize },

    #[error("Correlation is undefined for a constant column")]
    UndefinedCorrelation,
}

/// Result of a render: a figure or the reason there is none
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Ready(Figure),
    Empty(EmptyChart),
}

impl ChartOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, ChartOutcome::Ready(_))
    }

    /// Figure to display; the empty sentinel when rendering failed
    pub fn figure(&self) -> Figure {
        match self {
            ChartOutcome::Ready(figure) => figure.clone(),
            ChartOutcome::Empty(_) => Figure::empty(),
        }
    }

    pub fn reason(&self) -> Option<&EmptyChart> {
        match self {
            ChartOutcome::Ready(_) => None,
            ChartOutcome::Empty(reason) => Some(reason),
        }
    }

    pub fn figure_json(&self) -> String {
        match self {
            ChartOutcome::Ready(figure) => figure.to_json(),
            ChartOutcome::Empty(_) => Figure::empty().to_json(),
        }
    }
}

impl From<Result<Figure, EmptyChart>> for ChartOutcome {
    fn from(result: Result<Figure, EmptyChart>) -> Self {
        match result {
            Ok(figure) => ChartOutcome::Ready(figure),
            Err(reason) => {
                tracing::debug!(reason = %reason, "Chart replaced by empty figure");
                ChartOutcome::Empty(reason)
            }
        }
    }
}

/// Renders one named indicator of a table
///
/// The seam the indicator dropdown draws through.
pub trait IndicatorRenderer: Send + Sync {
    fn render_indicator(&self, table: &IndicatorTable, name: &str) -> ChartOutcome;
}

/// Builds Plotly figures in the dashboard's visual style
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    palette: Palette,
    font_family: String,
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl IndicatorRenderer for PlotlyRenderer {
    fn render_indicator(&self, table: &IndicatorTable, name: &str) -> ChartOutcome {
        self.line(table, name)
    }
}

impl PlotlyRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            font_family: "Roboto".to_string(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Single indicator evolution over the years
    pub fn line(&self, table: &IndicatorTable, name: &str) -> ChartOutcome {
        let result = series(table, name).map(|indicator| {
            let (first, last) = indicator.span();
            let trace = self.scatter(indicator, 0, None);

            let mut layout = self.base_layout(format!(
                "Evolución de {} en Chile ({}-{})",
                indicator.name(),
                first,
                last
            ));
            layout.xaxis = Some(self.axis(Some("Año")));
            layout.yaxis = Some(self.axis(Some(indicator.name())));
            layout.legend = None;

            Figure::new(vec![trace], layout)
        });

        result.into()
    }

    /// Several indicators sharing one y axis
    pub fn multi_line(&self, table: &IndicatorTable, names: &[&str], title: &str) -> ChartOutcome {
        let result = (|| -> Result<Figure, EmptyChart> {
            if names.is_empty() {
                return Err(EmptyChart::NoSeries);
            }

            let traces = names
                .iter()
                .enumerate()
                .map(|(idx, name)| series(table, name).map(|s| self.scatter(s, idx, None)))
                .collect::<Result<Vec<_>, _>>()?;

            let mut layout = self.base_layout(title);
            layout.xaxis = Some(self.axis(Some("Año")));
            layout.yaxis = Some(self.axis(None));
            Ok(Figure::new(traces, layout))
        })();

        result.into()
    }

    /// Two indicators on independent y axes
    pub fn dual_axis(
        &self,
        table: &IndicatorTable,
        left: &str,
        right: &str,
        title: &str,
    ) -> ChartOutcome {
        let result = (|| -> Result<Figure, EmptyChart> {
            let left_series = series(table, left)?;
            let right_series = series(table, right)?;

            let traces = vec![
                self.scatter(left_series, 0, Some("y")),
                self.scatter(right_series, 1, Some("y2")),
            ];

            let mut layout = self.base_layout(title);
            layout.xaxis = Some(self.axis(Some("Año")));
            layout.yaxis = Some(self.axis(Some(left)));
            layout.yaxis2 = Some(Axis {
                title: Some(Title::new(right)),
                overlaying: Some("y".to_string()),
                side: Some("right".to_string()),
                ..Axis::default()
            });
            Ok(Figure::new(traces, layout))
        })();

        result.into()
    }

    /// One indicator as bars with others drawn as lines on top
    pub fn bars_with_lines(
        &self,
        table: &IndicatorTable,
        bars: &str,
        lines: &[&str],
        title: &str,
    ) -> ChartOutcome {
        let result = (|| -> Result<Figure, EmptyChart> {
            let bar_series = series(table, bars)?;
            let mut traces = vec![Trace::Bar(BarTrace {
                x: bar_series.years(),
                y: bar_series.values(),
                name: bar_series.name().to_string(),
                marker: Marker {
                    size: None,
                    color: self.palette.accent.to_string(),
                },
                opacity: Some(0.7),
            })];

            for (idx, name) in lines.iter().enumerate() {
                traces.push(self.scatter(series(table, name)?, idx, None));
            }

            let mut layout = self.base_layout(title);
            layout.xaxis = Some(self.axis(Some("Año")));
            layout.yaxis = Some(self.axis(None));
            Ok(Figure::new(traces, layout))
        })();

        result.into()
    }

    /// Regions compared across every normalised indicator
    pub fn radar(&self, regional: &RegionalTable, title: &str) -> ChartOutcome {
        let result = (|| -> Result<Figure, EmptyChart> {
            let found = regional.rows().len();
            if found < 2 {
                return Err(EmptyChart::TooFewRows { needed: 2, found });
            }

            let normalized = normalized_columns(regional)?;
            let columns = regional.columns();

            let traces = regional
                .rows()
                .iter()
                .enumerate()
                .map(|(row, region)| {
                    let mut r: Vec<f64> = normalized.iter().map(|col| col[row]).collect();
                    let mut theta = columns.to_vec();
                    // Close the polygon
                    r.push(r[0]);
                    theta.push(columns[0].clone());

                    Trace::Scatterpolar(PolarTrace {
                        r,
                        theta,
                        fill: "toself".to_string(),
                        name: region.region.clone(),
                    })
                })
                .collect();

            let mut layout = self.base_layout(title);
            layout.legend = None;
            layout.showlegend = Some(true);
            layout.polar = Some(Polar {
                radialaxis: Axis {
                    visible: Some(true),
                    range: Some([0.0, 1.0]),
                    ..Axis::default()
                },
            });
            Ok(Figure::new(traces, layout))
        })();

        result.into()
    }

    /// Pearson correlation between every pair of regional columns
    pub fn correlation_heatmap(&self, regional: &RegionalTable, title: &str) -> ChartOutcome {
        let result = (|| -> Result<Figure, EmptyChart> {
            let found = regional.rows().len();
            if found < 3 {
                return Err(EmptyChart::TooFewRows { needed: 3, found });
            }

            let columns = raw_columns(regional)?;
            let z = correlation_matrix(&columns).ok_or(EmptyChart::UndefinedCorrelation)?;
            let labels = regional.columns().to_vec();

            let trace = Trace::Heatmap(HeatmapTrace {
                z,
                x: labels.clone(),
                y: labels,
                colorscale: "RdBu".to_string(),
                zmin: -1.0,
                zmax: 1.0,
                colorbar: ColorBar {
                    title: Title::new("Correlación"),
                },
            });

            let mut layout = self.base_layout(title);
            layout.legend = None;
            Ok(Figure::new(vec![trace], layout))
        })();

        result.into()
    }

    fn scatter(&self, indicator: &Indicator, idx: usize, yaxis: Option<&str>) -> Trace {
        let color = self.palette.series(idx);
        let marker_color = if idx == 0 && yaxis.is_none() {
            self.palette.secondary
        } else {
            color
        };

        Trace::Scatter(ScatterTrace {
            x: indicator.years(),
            y: indicator.values(),
            name: indicator.name().to_string(),
            mode: "lines+markers".to_string(),
            yaxis: yaxis.map(str::to_string),
            line: Line {
                color: color.to_string(),
                width: Some(2),
            },
            marker: Marker {
                size: Some(8),
                color: marker_color.to_string(),
            },
        })
    }

    fn axis(&self, title: Option<&str>) -> Axis {
        Axis {
            title: title.map(Title::new),
            gridcolor: Some(self.palette.grid.to_string()),
            ..Axis::default()
        }
    }

    fn base_layout(&self, title: impl Into<String>) -> Layout {
        Layout {
            title: Some(Title::new(title)),
            legend: Some(Legend::below()),
            font: Some(Font {
                family: self.font_family.clone(),
                size: 12,
                color: self.palette.text.to_string(),
            }),
            plot_bgcolor: Some(self.palette.background.to_string()),
            paper_bgcolor: Some(self.palette.background.to_string()),
            ..Layout::default()
        }
    }
}

/// Look up an indicator and reject non-finite values
fn series<'a>(table: &'a IndicatorTable, name: &str) -> Result<&'a Indicator, EmptyChart> {
    let indicator = table
        .get(name)
        .ok_or_else(|| EmptyChart::UnknownIndicator(name.to_string()))?;

    if indicator.observations().iter().any(|o| !o.value.is_finite()) {
        return Err(EmptyChart::NonFinite(name.to_string()));
    }

    Ok(indicator)
}

fn raw_columns(regional: &RegionalTable) -> Result<Vec<Vec<f64>>, EmptyChart> {
    regional
        .columns()
        .iter()
        .map(|name| {
            let values = regional
                .column(name)
                .ok_or_else(|| EmptyChart::MissingColumn(name.clone()))?;
            if values.iter().any(|v| !v.is_finite()) {
                return Err(EmptyChart::NonFinite(name.clone()));
            }
            Ok(values)
        })
        .collect()
}

fn normalized_columns(regional: &RegionalTable) -> Result<Vec<Vec<f64>>, EmptyChart> {
    Ok(raw_columns(regional)?
        .iter()
        .map(|values| min_max_normalize(values))
        .collect())
}
