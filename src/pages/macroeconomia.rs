//! Macroeconomic page

use super::components::{executive_summary, graph_container, graph, prose, section};
use super::markup::{el, Node};
use super::router::Page;
use super::widget::{Widget, WidgetId};
use super::{indicator_panel, PageContext, PageError};
use crate::data::TableId;
use crate::interaction::DropdownPanel;

/// Indicator dropdown of the macroeconomic page
pub const PANEL: DropdownPanel = DropdownPanel {
    page: Page::Macroeconomia,
    table: TableId::Macroeconomia,
    default: "Crecimiento del PIB (%)",
    analyses: ANALYSES,
};

const ANALYSES: &[(&str, &str)] = &[
    (
        "Crecimiento del PIB (%)",
        "El crecimiento del PIB pasó de 5.8% en 2010 a apenas 0.2% en 2023. Descontando el rebote \
         de 11.7% en 2021, que solo compensó la caída de 5.8% de 2020, la economía chilena promedia \
         un crecimiento cercano al 2% durante la última década. Este estancamiento revela el agotamiento \
         de un modelo basado en la exportación de materias primas.",
    ),
    (
        "Inflación (%)",
        "La inflación se mantuvo dentro del rango meta del Banco Central durante buena parte de la década, \
         pero se disparó a 11.6% en 2022. El aumento de precios erosionó el poder adquisitivo de los hogares \
         y golpeó con mayor fuerza a los sectores de menores ingresos, que destinan una mayor proporción \
         de su gasto a alimentos y energía.",
    ),
    (
        "Tasa de Desempleo (%)",
        "La tasa de desempleo llegó a 10.8% en 2020 y no ha vuelto a los niveles previos a la pandemia, \
         cerrando 2023 en 8.7%. Estas cifras no capturan la magnitud de la informalidad laboral ni el \
         subempleo, que afectan especialmente a mujeres y jóvenes.",
    ),
    (
        "Deuda Pública (% PIB)",
        "La deuda pública aumentó de 8.6% del PIB en 2010 a 39.4% en 2023, más que cuadruplicándose en \
         poco más de una década. Aunque el nivel sigue siendo moderado en comparación internacional, la \
         velocidad del endeudamiento compromete la capacidad fiscal para enfrentar futuras crisis.",
    ),
    (
        "Tasa de Política Monetaria (%)",
        "La tasa de política monetaria pasó de un mínimo de 0.5% en 2020 a 11.25% en 2022, uno de los \
         ciclos de alzas más agresivos de la región. El encarecimiento del crédito contuvo la inflación \
         a costa de frenar la inversión y el consumo.",
    ),
];

const SUMMARY: &str = "
    La economía chilena enfrenta un escenario de bajo crecimiento, inflación persistente y un
    deterioro del mercado laboral. Las cifras agregadas esconden una creciente fragilidad
    macroeconómica que limita el margen de acción de la política fiscal y monetaria.
";

const OUTLOOK: &str = "
    Perspectivas:

    - El crecimiento potencial se ha reducido de manera sostenida y se ubica por debajo del 2%.
    - La política monetaria restrictiva ha contenido la inflación, pero con un alto costo en actividad.
    - El aumento de la deuda pública reduce el espacio para políticas contracíclicas.

    Sin reformas que impulsen la productividad y diversifiquen la matriz productiva, Chile
    arriesga una década de estancamiento.
";

pub fn layout(ctx: &PageContext<'_>) -> Result<Node, PageError> {
    let table = ctx.table(TableId::Macroeconomia)?;

    let prices = ctx.renderer.dual_axis(
        table,
        "Inflación (%)",
        "Tasa de Política Monetaria (%)",
        "Inflación y Tasa de Política Monetaria",
    );
    let debt = ctx.renderer.multi_line(
        table,
        &["Deuda Pública (% PIB)", "Tasa de Desempleo (%)"],
        "Deuda Pública y Desempleo",
    );

    Ok(el("div")
        .class("page-content")
        .child(executive_summary(SUMMARY, Vec::new()))
        .child(section(
            "Indicadores Macroeconómicos Clave",
            vec![indicator_panel(ctx, &PANEL)?],
            "",
        ))
        .child(section(
            "Precios y Política Monetaria",
            vec![graph_container(
                "Inflación vs. Tasa de Política Monetaria",
                "El Banco Central respondió tarde al alza de precios de 2021 y 2022, obligándose a \
                 elevar la tasa de política monetaria a niveles no vistos en décadas.",
                graph(WidgetId::new(Page::Macroeconomia, Widget::StaticGraph(1)), &prices),
            )],
            "",
        ))
        .child(section(
            "Sostenibilidad Fiscal y Empleo",
            vec![
                graph_container(
                    "Deuda Pública y Desempleo",
                    "El mayor endeudamiento no se ha traducido en una mejora del empleo, que sigue \
                     por encima de los niveles previos a la pandemia.",
                    graph(WidgetId::new(Page::Macroeconomia, Widget::StaticGraph(2)), &debt),
                ),
                prose(OUTLOOK, "analysis-text"),
            ],
            "",
        ))
        .into())
}
