//! Plotly figure description
//!
//! Serializes to the `{data, layout}` JSON that `Plotly.newPlot` accepts.
//! Only the attributes the dashboard uses are modelled.

use serde::Serialize;

/// Colour palette shared by every chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1C3D5A",
            secondary: "#3E7CB1",
            accent: "#A3D5FF",
            background: "#FFFFFF",
            text: "#333333",
            grid: "lightgrey",
        }
    }
}

impl Palette {
    /// Cycle through the series colours
    pub fn series(&self, idx: usize) -> &'static str {
        let colors = [self.primary, self.secondary, self.accent];
        colors[idx % colors.len()]
    }
}

/// A complete chart
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// The blank figure shown when a chart cannot be drawn
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn to_json(&self) -> String {
        // Every field is a plain string, number or vector
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"data":[],"layout":{}}"#.to_string())
    }
}

/// One data series
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Scatterpolar(PolarTrace),
    Heatmap(HeatmapTrace),
}

/// Line/marker series over years
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterTrace {
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub name: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    pub line: Line,
    pub marker: Marker,
}

/// Bar series over years
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarTrace {
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub name: String,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Closed polygon on polar axes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PolarTrace {
    pub r: Vec<f64>,
    pub theta: Vec<String>,
    pub fill: String,
    pub name: String,
}

/// Matrix of values with labelled axes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapTrace {
    pub z: Vec<Vec<f64>>,
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub colorscale: String,
    pub zmin: f64,
    pub zmax: f64,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Line {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: u32,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub orientation: String,
    pub yanchor: String,
    pub y: f64,
    pub xanchor: String,
    pub x: f64,
}

impl Legend {
    /// Horizontal legend centred under the plot
    pub fn below() -> Self {
        Self {
            orientation: "h".to_string(),
            yanchor: "bottom".to_string(),
            y: -0.3,
            xanchor: "center".to_string(),
            x: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Polar {
    pub radialaxis: Axis,
}

/// Figure layout
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar: Option<Polar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_figure_json() {
        assert_eq!(Figure::empty().to_json(), r#"{"data":[],"layout":{}}"#);
        assert!(Figure::empty().is_empty());
    }

    #[test]
    fn test_trace_type_tag() {
        let trace = Trace::Scatter(ScatterTrace {
            x: vec![2010],
            y: vec![1.0],
            name: "PIB".to_string(),
            mode: "lines+markers".to_string(),
            yaxis: None,
            line: Line {
                color: "#1C3D5A".to_string(),
                width: Some(2),
            },
            marker: Marker {
                size: Some(8),
                color: "#3E7CB1".to_string(),
            },
        });

        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "scatter");
        assert_eq!(json["mode"], "lines+markers");
        assert!(json.get("yaxis").is_none());
    }

    #[test]
    fn test_palette_cycles() {
        let palette = Palette::default();
        assert_eq!(palette.series(0), palette.primary);
        assert_eq!(palette.series(3), palette.primary);
        assert_eq!(palette.series(2), palette.accent);
    }
}
