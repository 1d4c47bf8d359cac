//! Foreign trade page

use super::components::{data_table, executive_summary, graph, graph_container, prose, section};
use super::markup::{el, Node};
use super::router::Page;
use super::widget::{Widget, WidgetId};
use super::{PageContext, PageError};
use crate::data::TableId;

const SUMMARY: &str = "
    El comercio exterior chileno continúa concentrado en pocos productos y destinos. Las
    exportaciones alcanzaron máximos históricos en 2022, pero la balanza comercial se ha vuelto
    volátil y la dependencia del cobre no muestra señales de disminuir.
";

const TRENDS: &str = "
    Tendencias principales:

    - Las exportaciones crecieron de 71.1 a 94.9 mil millones de dólares entre 2010 y 2023.
    - Las importaciones alcanzaron un máximo de 104.5 mil millones en 2022, generando el mayor
      déficit comercial del período.
    - El cobre representa cerca de la mitad de las exportaciones en todo el período.

    La concentración exportadora expone al país a los vaivenes de la demanda china y del precio
    de los commodities.
";

pub fn layout(ctx: &PageContext<'_>) -> Result<Node, PageError> {
    let table = ctx.table(TableId::Comercio)?;

    let balance = ctx.renderer.bars_with_lines(
        table,
        "Balanza Comercial (MMUS$)",
        &["Exportaciones (MMUS$)", "Importaciones (MMUS$)"],
        "Exportaciones, Importaciones y Balanza Comercial",
    );
    let copper_share = ctx.renderer.line(table, "Cobre en Exportaciones (%)");

    Ok(el("div")
        .class("page-content")
        .child(executive_summary(SUMMARY, Vec::new()))
        .child(section(
            "Balanza Comercial",
            vec![graph_container(
                "Flujos de Comercio Exterior",
                "La balanza comercial ha oscilado entre superávits y déficits, reflejando la \
                 sensibilidad de las cuentas externas al precio del cobre y al ciclo de consumo interno.",
                graph(WidgetId::new(Page::Comercio, Widget::StaticGraph(1)), &balance),
            )],
            "",
        ))
        .child(section(
            "Dependencia del Cobre",
            vec![graph_container(
                "Participación del Cobre en las Exportaciones",
                "La participación del cobre en las exportaciones no ha bajado del 45% en ningún año, \
                 confirmando el bajo grado de diversificación de la canasta exportadora.",
                graph(WidgetId::new(Page::Comercio, Widget::StaticGraph(2)), &copper_share),
            )],
            "",
        ))
        .child(section(
            "Datos de Comercio Exterior",
            vec![data_table(table), prose(TRENDS, "analysis-text")],
            "",
        ))
        .into())
}
