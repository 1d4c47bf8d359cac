//! Typed widget identifiers
//!
//! Every interactive or chart element is addressed by a `(Page, Widget)`
//! pair. The DOM id is derived from the pair, so the page script and the
//! callback handlers never build ids by hand.

use super::router::Page;

/// Kinds of widget placed on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    IndicatorDropdown,
    IndicatorGraph,
    IndicatorAnalysis,
    RadarChart,
    CorrelationHeatmap,
    /// A fixed chart, numbered in page order
    StaticGraph(u8),
}

impl Widget {
    fn slug(&self) -> String {
        match self {
            Widget::IndicatorDropdown => "indicator-dropdown".to_string(),
            Widget::IndicatorGraph => "indicator-graph".to_string(),
            Widget::IndicatorAnalysis => "indicator-analysis".to_string(),
            Widget::RadarChart => "radar-chart".to_string(),
            Widget::CorrelationHeatmap => "correlation-heatmap".to_string(),
            Widget::StaticGraph(n) => format!("graph-{}", n),
        }
    }
}

/// A widget on a specific page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId {
    pub page: Page,
    pub widget: Widget,
}

impl WidgetId {
    pub fn new(page: Page, widget: Widget) -> Self {
        Self { page, widget }
    }

    pub fn dom_id(&self) -> String {
        format!("{}-{}", self.page.slug(), self.widget.slug())
    }
}

/// Widgets owned by the header and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellWidget {
    Subtitle,
    MenuToggle,
    NavMenu,
    PageContent,
}

impl ShellWidget {
    pub fn dom_id(&self) -> &'static str {
        match self {
            ShellWidget::Subtitle => "subtitle",
            ShellWidget::MenuToggle => "menu-toggle",
            ShellWidget::NavMenu => "nav-menu",
            ShellWidget::PageContent => "page-content",
        }
    }
}
