//! Public policy page

use super::components::{bullet_list, executive_summary, graph, graph_container, prose, section};
use super::markup::{el, Node};
use super::router::Page;
use super::widget::{Widget, WidgetId};
use super::{PageContext, PageError};
use crate::data::TableId;

const SUMMARY: &str = "
    La política fiscal chilena ha transitado desde la responsabilidad fiscal de comienzos de la
    década hacia déficits estructurales persistentes. El aumento del gasto no ha ido acompañado
    de una recaudación suficiente ni de mejoras visibles en la calidad de los servicios públicos.
";

const PROPOSALS: [&str; 4] = [
    "Revisar la eficiencia del gasto público antes de ampliar programas.",
    "Ampliar la base tributaria y reducir la evasión.",
    "Restablecer una regla de balance estructural creíble.",
    "Focalizar el gasto social en los hogares más vulnerables.",
];

const ASSESSMENT: &str = "
    El gasto social alcanzó 22.2% del PIB en 2021 producto de las transferencias de emergencia,
    para luego retroceder a 17.3% en 2023. Este vaivén revela una política social reactiva antes
    que estructural.

    La carga tributaria se ha mantenido en torno al 20% del PIB, muy por debajo del promedio de la
    OCDE, lo que limita el financiamiento permanente de los compromisos sociales.
";

pub fn layout(ctx: &PageContext<'_>) -> Result<Node, PageError> {
    let table = ctx.table(TableId::Politicas)?;

    let fiscal = ctx.renderer.multi_line(
        table,
        &["Gasto Público (% PIB)", "Carga Tributaria (% PIB)"],
        "Gasto Público y Carga Tributaria",
    );
    let balance = ctx.renderer.bars_with_lines(
        table,
        "Balance Fiscal (% PIB)",
        &["Gasto Social (% PIB)"],
        "Balance Fiscal y Gasto Social",
    );

    Ok(el("div")
        .class("page-content")
        .child(executive_summary(SUMMARY, vec![bullet_list(&PROPOSALS)]))
        .child(section(
            "Ingresos y Gastos del Estado",
            vec![graph_container(
                "Gasto Público vs. Carga Tributaria",
                "La brecha entre gasto y recaudación se amplió con fuerza a partir de 2014 y alcanzó \
                 su punto máximo durante la pandemia.",
                graph(WidgetId::new(Page::Politicas, Widget::StaticGraph(1)), &fiscal),
            )],
            "",
        ))
        .child(section(
            "Balance Fiscal y Gasto Social",
            vec![
                graph_container(
                    "Balance Fiscal y Gasto Social",
                    "Los déficits de 2020 y 2021 superaron el 7% del PIB, financiando un aumento \
                     transitorio del gasto social.",
                    graph(WidgetId::new(Page::Politicas, Widget::StaticGraph(2)), &balance),
                ),
                prose(ASSESSMENT, "analysis-text"),
            ],
            "",
        ))
        .into())
}
