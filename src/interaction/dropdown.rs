//! Indicator dropdown
//!
//! Holds the selected indicator of one page's dropdown and the chart and
//! analysis text last produced for it.

use crate::chart::{ChartOutcome, EmptyChart, IndicatorRenderer};
use crate::data::{IndicatorTable, TableId};
use crate::pages::router::Page;

/// Static configuration of a page's indicator dropdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownPanel {
    pub page: Page,
    /// Table the options and series come from
    pub table: TableId,
    /// Selection on first render
    pub default: &'static str,
    /// Canned analysis per indicator name
    pub analyses: &'static [(&'static str, &'static str)],
}

impl DropdownPanel {
    /// Analysis text for an indicator, or the generic fallback naming it
    pub fn analysis_for(&self, name: &str) -> String {
        let body = self
            .analyses
            .iter()
            .find(|(indicator, _)| *indicator == name)
            .map(|(_, prose)| prose.to_string())
            .unwrap_or_else(|| fallback_analysis(name));

        format!("Análisis crítico para {}:\n\n{}", name, body)
    }
}

fn fallback_analysis(name: &str) -> String {
    format!(
        "No se encuentra un análisis específico para el indicador: {}",
        name
    )
}

/// What the page shows for the current selection
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOutput {
    /// Indicator the output was computed for, which may lie outside the table
    pub requested: String,
    pub chart: ChartOutcome,
    pub analysis: String,
}

impl DropdownOutput {
    /// Recompute chart and analysis for one indicator name
    pub fn compute(
        panel: &DropdownPanel,
        table: &IndicatorTable,
        renderer: &dyn IndicatorRenderer,
        name: &str,
    ) -> Self {
        if !table.contains(name) {
            return Self {
                requested: name.to_string(),
                chart: ChartOutcome::Empty(EmptyChart::UnknownIndicator(name.to_string())),
                analysis: format!("Análisis crítico para {}:\n\n{}", name, fallback_analysis(name)),
            };
        }

        Self {
            requested: name.to_string(),
            chart: renderer.render_indicator(table, name),
            analysis: panel.analysis_for(name),
        }
    }
}

/// Selection state machine of one dropdown
#[derive(Debug, Clone)]
pub struct IndicatorDropdown {
    panel: DropdownPanel,
    selected: String,
    output: DropdownOutput,
}

impl IndicatorDropdown {
    /// Start at the panel's default selection
    pub fn new(
        panel: DropdownPanel,
        table: &IndicatorTable,
        renderer: &dyn IndicatorRenderer,
    ) -> Self {
        let output = DropdownOutput::compute(&panel, table, renderer, panel.default);
        Self {
            panel,
            selected: panel.default.to_string(),
            output,
        }
    }

    pub fn panel(&self) -> &DropdownPanel {
        &self.panel
    }

    /// Currently selected indicator
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Output of the last accepted event
    pub fn output(&self) -> &DropdownOutput {
        &self.output
    }

    /// Handle a selection-changed event
    ///
    /// An empty or missing value is suppressed and returns `None` with
    /// state and output untouched. A name outside the table produces the
    /// degraded output but leaves the selection unchanged.
    pub fn on_select(
        &mut self,
        value: Option<&str>,
        table: &IndicatorTable,
        renderer: &dyn IndicatorRenderer,
    ) -> Option<&DropdownOutput> {
        let name = match value {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::trace!(page = %self.panel.page, "Empty selection suppressed");
                return None;
            }
        };

        let output = DropdownOutput::compute(&self.panel, table, renderer, name);
        if table.contains(name) {
            self.selected = name.to_string();
        } else {
            tracing::debug!(
                page = %self.panel.page,
                indicator = %name,
                "Selection outside the dataset, showing fallback"
            );
        }

        self.output = output;
        Some(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlotlyRenderer;
    use crate::data::tables;

    const ANALYSES: &[(&str, &str)] = &[("Índice de Gini", "El Gini bajó.")];

    fn panel() -> DropdownPanel {
        DropdownPanel {
            page: Page::Sociedad,
            table: TableId::Social,
            default: "Índice de Gini",
            analyses: ANALYSES,
        }
    }

    /// Renderer that fails every chart
    struct BrokenRenderer;

    impl IndicatorRenderer for BrokenRenderer {
        fn render_indicator(&self, _table: &IndicatorTable, _name: &str) -> ChartOutcome {
            ChartOutcome::Empty(EmptyChart::NoSeries)
        }
    }

    #[test]
    fn test_initial_state_is_default() {
        let table = tables::social().unwrap();
        let dropdown = IndicatorDropdown::new(panel(), &table, &PlotlyRenderer::default());

        assert_eq!(dropdown.selected(), "Índice de Gini");
        assert!(dropdown.output().chart.is_ready());
        assert_eq!(
            dropdown.output().analysis,
            "Análisis crítico para Índice de Gini:\n\nEl Gini bajó."
        );
    }

    #[test]
    fn test_select_known_without_canned_text() {
        let table = tables::social().unwrap();
        let renderer = PlotlyRenderer::default();
        let mut dropdown = IndicatorDropdown::new(panel(), &table, &renderer);

        let output = dropdown
            .on_select(Some("Tasa de Pobreza (%)"), &table, &renderer)
            .unwrap();
        assert!(output.chart.is_ready());
        assert!(output
            .analysis
            .ends_with("No se encuentra un análisis específico para el indicador: Tasa de Pobreza (%)"));
        assert_eq!(dropdown.selected(), "Tasa de Pobreza (%)");
    }

    #[test]
    fn test_select_unknown_degrades() {
        let table = tables::social().unwrap();
        let renderer = PlotlyRenderer::default();
        let mut dropdown = IndicatorDropdown::new(panel(), &table, &renderer);

        let output = dropdown.on_select(Some("Felicidad"), &table, &renderer).unwrap();
        assert_eq!(
            output.chart,
            ChartOutcome::Empty(EmptyChart::UnknownIndicator("Felicidad".to_string()))
        );
        assert!(output.analysis.contains("Felicidad"));
        assert!(output.analysis.contains("No se encuentra un análisis específico"));
        assert_eq!(output.requested, "Felicidad");
        assert_eq!(dropdown.selected(), "Índice de Gini");
    }

    #[test]
    fn test_empty_selection_is_suppressed() {
        let table = tables::social().unwrap();
        let renderer = PlotlyRenderer::default();
        let mut dropdown = IndicatorDropdown::new(panel(), &table, &renderer);
        dropdown.on_select(Some("Años de Educación"), &table, &renderer);
        let before = dropdown.output().clone();

        assert!(dropdown.on_select(Some(""), &table, &renderer).is_none());
        assert!(dropdown.on_select(None, &table, &renderer).is_none());
        assert_eq!(dropdown.selected(), "Años de Educación");
        assert_eq!(dropdown.output(), &before);
    }

    #[test]
    fn test_repeated_selection_is_identical() {
        let table = tables::social().unwrap();
        let renderer = PlotlyRenderer::default();
        let mut dropdown = IndicatorDropdown::new(panel(), &table, &renderer);

        let first = dropdown
            .on_select(Some("Tasa de Migración (%)"), &table, &renderer)
            .cloned()
            .unwrap();
        let second = dropdown
            .on_select(Some("Tasa de Migración (%)"), &table, &renderer)
            .cloned()
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.chart.figure_json(), second.chart.figure_json());
    }

    #[test]
    fn test_renderer_failure_keeps_analysis() {
        let table = tables::social().unwrap();
        let mut dropdown = IndicatorDropdown::new(panel(), &table, &BrokenRenderer);

        let output = dropdown
            .on_select(Some("Índice de Gini"), &table, &BrokenRenderer)
            .unwrap();
        assert!(!output.chart.is_ready());
        assert!(output.analysis.contains("El Gini bajó."));
        assert_eq!(dropdown.selected(), "Índice de Gini");
    }
}
