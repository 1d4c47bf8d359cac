//! Page Layout Builder
//!
//! Composes the content tree of each page from the catalog and the chart
//! renderer. Composition is deterministic: the same page over the same
//! catalog always produces the same markup.

pub mod components;
pub mod markup;
pub mod router;
pub mod widget;

mod comercio;
mod macroeconomia;
mod politicas;
mod resumen;
mod sectorial;
mod sociedad;

pub use markup::{el, Element, Node};
pub use router::{Page, Resolved, RouteEntry, RouteTable, DEFAULT_BASE_PATH};
pub use widget::{ShellWidget, Widget, WidgetId};

use thiserror::Error;

use crate::chart::PlotlyRenderer;
use crate::data::{Catalog, IndicatorTable, TableId};
use crate::interaction::{DropdownPanel, IndicatorDropdown};

/// Page composition errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("Dataset '{0}' is not in the catalog")]
    MissingTable(TableId),
}

/// Everything a layout may read
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub catalog: &'a Catalog,
    pub renderer: &'a PlotlyRenderer,
}

impl<'a> PageContext<'a> {
    pub fn new(catalog: &'a Catalog, renderer: &'a PlotlyRenderer) -> Self {
        Self { catalog, renderer }
    }

    /// Look up a dataset the layout depends on
    pub fn table(&self, id: TableId) -> Result<&'a IndicatorTable, PageError> {
        self.catalog.table(id).ok_or(PageError::MissingTable(id))
    }
}

/// Build the content tree of a page
pub fn compose(page: Page, ctx: &PageContext<'_>) -> Result<Node, PageError> {
    tracing::debug!(page = %page, "Composing page");

    match page {
        Page::Resumen => resumen::layout(ctx),
        Page::Macroeconomia => macroeconomia::layout(ctx),
        Page::Sectorial => sectorial::layout(ctx),
        Page::Comercio => comercio::layout(ctx),
        Page::Sociedad => sociedad::layout(ctx),
        Page::Politicas => politicas::layout(ctx),
    }
}

/// The indicator dropdown a page carries, if any
pub fn dropdown_panel(page: Page) -> Option<DropdownPanel> {
    match page {
        Page::Sociedad => Some(sociedad::PANEL),
        Page::Macroeconomia => Some(macroeconomia::PANEL),
        _ => None,
    }
}

/// Dropdown, chart and analysis of a panel at its default selection
fn indicator_panel(ctx: &PageContext<'_>, panel: &DropdownPanel) -> Result<Node, PageError> {
    let table = ctx.table(panel.table)?;
    let dropdown = IndicatorDropdown::new(*panel, table, ctx.renderer);
    let output = dropdown.output();

    let left = vec![
        components::dropdown(
            WidgetId::new(panel.page, Widget::IndicatorDropdown),
            &table.names(),
            dropdown.selected(),
        ),
        components::graph(
            WidgetId::new(panel.page, Widget::IndicatorGraph),
            &output.chart,
        ),
    ];
    let right = vec![el("div")
        .id(WidgetId::new(panel.page, Widget::IndicatorAnalysis).dom_id())
        .class("analysis-text")
        .child(components::prose(&output.analysis, "analysis-body"))
        .into()];

    Ok(components::two_columns(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tables;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_every_page_composes() {
        let catalog = catalog();
        let renderer = PlotlyRenderer::default();
        let ctx = PageContext::new(&catalog, &renderer);

        for page in Page::all() {
            let node = compose(*page, &ctx).unwrap();
            let Node::Element(root) = &node else {
                panic!("expected element for {}", page);
            };
            assert_eq!(root.get_attr("class"), Some("page-content"));
        }
    }

    #[test]
    fn test_composition_is_deterministic() {
        let catalog = catalog();
        let renderer = PlotlyRenderer::default();
        let ctx = PageContext::new(&catalog, &renderer);

        for page in Page::all() {
            let first = compose(*page, &ctx).unwrap().render();
            let second = compose(*page, &ctx).unwrap().render();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_sociedad_panel_at_default() {
        let catalog = catalog();
        let renderer = PlotlyRenderer::default();
        let ctx = PageContext::new(&catalog, &renderer);
        let node = compose(Page::Sociedad, &ctx).unwrap();

        let select = node.find_by_id("sociedad-indicator-dropdown").unwrap();
        assert_eq!(select.children.len(), 7);
        let selected: Vec<String> = select
            .children
            .iter()
            .filter_map(|child| match child {
                Node::Element(option) if option.get_attr("selected").is_some() => {
                    Some(option.text_content())
                }
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec!["Índice de Gini".to_string()]);

        let analysis = node.find_by_id("sociedad-indicator-analysis").unwrap();
        let text = analysis.text_content();
        assert!(text.starts_with("Análisis crítico para Índice de Gini:"));
        assert!(text.contains("pasando de 0.51 en 2010 a 0.445 en 2023"));

        let graph = node.find_by_id("sociedad-indicator-graph").unwrap();
        assert!(graph
            .get_attr("data-figure")
            .unwrap()
            .contains("Evolución de Índice de Gini en Chile (2010-2023)"));
    }

    #[test]
    fn test_missing_table_is_reported() {
        let mut catalog = Catalog::new(tables::regional().unwrap());
        catalog.insert(TableId::Resumen, tables::summary().unwrap());
        let renderer = PlotlyRenderer::default();
        let ctx = PageContext::new(&catalog, &renderer);

        assert!(compose(Page::Resumen, &ctx).is_ok());
        assert_eq!(
            compose(Page::Sociedad, &ctx).unwrap_err(),
            PageError::MissingTable(TableId::Social)
        );
    }

    #[test]
    fn test_dropdown_panels() {
        assert_eq!(dropdown_panel(Page::Sociedad).unwrap().default, "Índice de Gini");
        assert_eq!(
            dropdown_panel(Page::Macroeconomia).unwrap().table,
            TableId::Macroeconomia
        );
        assert!(dropdown_panel(Page::Comercio).is_none());
    }
}
