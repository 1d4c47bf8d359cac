//! Productive sectors page

use super::components::{executive_summary, graph, graph_container, prose, section, two_columns};
use super::markup::{el, Node};
use super::router::Page;
use super::widget::{Widget, WidgetId};
use super::{PageContext, PageError};
use crate::data::TableId;

const SUMMARY: &str = "
    La estructura productiva de Chile muestra una dependencia persistente de la minería y un
    retroceso sostenido de la industria manufacturera. La falta de diversificación deja a la
    economía expuesta a los ciclos del precio del cobre.
";

const SHARES: [&str; 5] = [
    "Minería (% PIB)",
    "Industria Manufacturera (% PIB)",
    "Comercio (% PIB)",
    "Servicios Financieros (% PIB)",
    "Agropecuario-Silvícola (% PIB)",
];

const CHALLENGES: &str = "
    Desafíos sectoriales:

    - La manufactura perdió 2.5 puntos del PIB entre 2010 y 2023, reflejando una desindustrialización
      temprana.
    - La producción de cobre se ha estancado en torno a 5.5 millones de toneladas, con leyes de
      mineral cada vez más bajas.
    - El sector agropecuario-silvícola mantiene una participación marginal pese a su peso en el
      empleo regional.
";

const OPPORTUNITIES: &str = "
    Oportunidades:

    - El litio y el hidrógeno verde abren espacio para encadenamientos productivos de mayor valor.
    - Los servicios financieros y el comercio muestran un crecimiento estable que puede apoyar la
      diversificación.
";

pub fn layout(ctx: &PageContext<'_>) -> Result<Node, PageError> {
    let table = ctx.table(TableId::Sectorial)?;

    let shares = ctx.renderer.multi_line(
        table,
        &SHARES,
        "Participación Sectorial en el PIB",
    );
    let copper = ctx.renderer.line(table, "Producción de Cobre (millones de t)");

    Ok(el("div")
        .class("page-content")
        .child(executive_summary(SUMMARY, Vec::new()))
        .child(section(
            "Composición Sectorial del PIB",
            vec![graph_container(
                "Participación de los Principales Sectores",
                "La minería sigue siendo el sector de mayor peso, con fuertes oscilaciones que \
                 dependen del precio internacional del cobre, mientras la industria manufacturera \
                 retrocede año tras año.",
                graph(WidgetId::new(Page::Sectorial, Widget::StaticGraph(1)), &shares),
            )],
            "",
        ))
        .child(section(
            "Minería del Cobre",
            vec![graph_container(
                "Producción de Cobre",
                "La producción de cobre no ha crecido en más de una década, lo que evidencia el \
                 envejecimiento de los yacimientos y la falta de nuevas inversiones.",
                graph(WidgetId::new(Page::Sectorial, Widget::StaticGraph(2)), &copper),
            )],
            "",
        ))
        .child(section(
            "Desafíos y Oportunidades",
            vec![two_columns(
                vec![prose(CHALLENGES, "analysis-text")],
                vec![prose(OPPORTUNITIES, "analysis-text")],
            )],
            "",
        ))
        .into())
}
