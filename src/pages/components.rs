//! Shared content components
//!
//! Building blocks used by every page layout.

use super::markup::{el, Element, Node};
use super::widget::WidgetId;
use crate::chart::ChartOutcome;
use crate::data::IndicatorTable;

/// Titled content section
pub fn section(title: &str, content: Vec<Node>, extra_class: &str) -> Node {
    let class = format!("content-section {}", extra_class);
    el("div")
        .class(class.trim())
        .child(el("h2").class("section-title").child(title))
        .child(el("div").class("section-content").children(content))
        .into()
}

/// Highlighted summary box with optional trailing content
pub fn executive_summary(text: &str, extra: Vec<Node>) -> Node {
    el("div")
        .class("executive-summary-box")
        .child(el("p").class("executive-summary-text").child(collapse(text)))
        .children(extra)
        .into()
}

/// Chart with a heading and a short analysis above it
pub fn graph_container(title: &str, analysis: &str, graph: Node) -> Node {
    el("div")
        .class("graph-container")
        .child(el("h3").class("graph-title").child(title))
        .child(el("p").class("analysis-text").child(collapse(analysis)))
        .child(graph)
        .into()
}

/// Placeholder the page script turns into a Plotly chart
pub fn graph(id: WidgetId, outcome: &ChartOutcome) -> Node {
    let mut element = el("div")
        .id(id.dom_id())
        .class("graph")
        .attr("data-figure", outcome.figure_json());

    if let Some(reason) = outcome.reason() {
        element = element.attr("data-empty-reason", reason.to_string());
    }

    element.into()
}

/// Select control listing every indicator of a table
pub fn dropdown(id: WidgetId, options: &[&str], selected: &str) -> Node {
    let options = options.iter().map(|name| {
        let option = el("option").attr("value", *name).child(*name);
        if *name == selected {
            option.attr("selected", "selected")
        } else {
            option
        }
    });

    el("select")
        .id(id.dom_id())
        .class("indicator-dropdown")
        .attr("data-page", id.page.slug())
        .children(options)
        .into()
}

/// Unordered list of short items
pub fn bullet_list(items: &[&str]) -> Node {
    el("ul")
        .children(items.iter().map(|item| el("li").child(*item)))
        .into()
}

/// Block of prose: blank lines separate paragraphs, `- ` lines form lists
pub fn prose(text: &str, class: &str) -> Node {
    el("div").class(class).children(prose_blocks(text)).into()
}

fn prose_blocks(text: &str) -> Vec<Node> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    let flush_paragraph = |paragraph: &mut Vec<&str>, blocks: &mut Vec<Node>| {
        if !paragraph.is_empty() {
            blocks.push(el("p").child(paragraph.join(" ")).into());
            paragraph.clear();
        }
    };
    let flush_items = |items: &mut Vec<String>, blocks: &mut Vec<Node>| {
        if !items.is_empty() {
            blocks.push(el("ul").children(items.drain(..).map(|i| el("li").child(i))).into());
        }
    };

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_items(&mut items, &mut blocks);
        } else if let Some(item) = line.strip_prefix("- ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            items.push(item.to_string());
        } else if let Some(last) = items.last_mut().filter(|_| paragraph.is_empty()) {
            // Continuation of a list item
            last.push(' ');
            last.push_str(line);
        } else {
            paragraph.push(line);
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);
    flush_items(&mut items, &mut blocks);

    blocks
}

/// Year-by-indicator table
pub fn data_table(table: &IndicatorTable) -> Node {
    let names = table.names();
    let header = el("tr")
        .child(el("th").child("Año"))
        .children(names.iter().map(|name| el("th").child(*name)));

    let rows = table.years().into_iter().map(|year| {
        let cells = table.indicators().iter().map(|indicator| {
            let value = indicator
                .value_at(year)
                .map(|v| v.to_string())
                .unwrap_or_default();
            el("td").child(value)
        });
        el("tr").child(el("td").child(year.to_string())).children(cells)
    });

    el("table")
        .class("data-table")
        .child(el("thead").child(header))
        .child(el("tbody").children(rows))
        .into()
}

/// Two side-by-side columns
pub fn two_columns(left: Vec<Node>, right: Vec<Node>) -> Node {
    el("div")
        .class("two-column-layout")
        .child(el("div").class("column-left").children(left))
        .child(el("div").class("column-right").children(right))
        .into()
}

/// Sub-heading inside a section
pub fn subsection_title(text: &str) -> Element {
    el("h4").class("subsection-title").child(text)
}

/// Join indented multi-line text into a single line
pub fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{EmptyChart, Figure};
    use crate::pages::router::Page;
    use crate::pages::widget::Widget;

    #[test]
    fn test_section_classes() {
        let node = section("Título", vec![Node::text("x")], "");
        let html = node.render();
        assert!(html.starts_with(r#"<div class="content-section">"#));

        let node = section("Título", vec![], "destacado");
        assert!(node.render().starts_with(r#"<div class="content-section destacado">"#));
    }

    #[test]
    fn test_prose_paragraphs_and_lists() {
        let node = prose(
            "
            Primera línea
            continúa aquí.

            - uno
              sigue
            - dos

            Cierre.
            ",
            "analysis-text",
        );
        assert_eq!(
            node.render(),
            "<div class=\"analysis-text\"><p>Primera línea continúa aquí.</p>\
             <ul><li>uno sigue</li><li>dos</li></ul><p>Cierre.</p></div>"
        );
    }

    #[test]
    fn test_dropdown_marks_selection() {
        let id = WidgetId::new(Page::Sociedad, Widget::IndicatorDropdown);
        let node = dropdown(id, &["A", "B"], "B");
        let html = node.render();
        assert!(html.contains(r#"<option value="A">A</option>"#));
        assert!(html.contains(r#"<option value="B" selected="selected">B</option>"#));
        assert!(html.contains(r#"data-page="sociedad""#));
    }

    #[test]
    fn test_graph_carries_empty_reason() {
        let id = WidgetId::new(Page::Sociedad, Widget::IndicatorGraph);
        let node = graph(id, &ChartOutcome::Empty(EmptyChart::NoSeries));
        let Node::Element(element) = &node else {
            panic!("expected element");
        };
        assert_eq!(element.get_attr("data-figure"), Some(Figure::empty().to_json().as_str()));
        assert_eq!(element.get_attr("data-empty-reason"), Some("No series were requested"));
    }

    #[test]
    fn test_data_table_rows() {
        let table = IndicatorTable::from_columns(
            "t",
            &[2010, 2011],
            &[("Gini", "índice", &[0.51, 0.505])],
        )
        .unwrap();
        let html = data_table(&table).render();
        assert!(html.contains("<th>Año</th><th>Gini</th>"));
        assert!(html.contains("<tr><td>2011</td><td>0.505</td></tr>"));
    }

    #[test]
    fn test_collapse() {
        assert_eq!(collapse("  a\n   b  c \n"), "a b c");
    }
}
