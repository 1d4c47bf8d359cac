//! Executive summary page

use super::components::{bullet_list, executive_summary, graph, section};
use super::markup::{el, Node};
use super::router::Page;
use super::widget::{Widget, WidgetId};
use super::{PageContext, PageError};
use crate::data::TableId;

const SUMMARY: &str = "
    El presente informe analiza en profundidad la macroeconomía, los sectores productivos, el comercio internacional,
    los indicadores sociales y las políticas públicas de Chile. El análisis revela una situación crítica en la economía
    y sociedad chilena, sugiriendo la necesidad urgente de reformas estructurales tales como:
";

const REFORMS: [&str; 4] = [
    "Implementar políticas que fomenten la libertad económica y estimulen el crecimiento del PIB.",
    "Mejorar la calidad y accesibilidad de los sistemas de salud y educación.",
    "Reforzar las políticas de seguridad pública para reducir la tasa de criminalidad.",
    "Desarrollar estrategias para aumentar el poder adquisitivo de los ciudadanos.",
];

pub fn layout(ctx: &PageContext<'_>) -> Result<Node, PageError> {
    let table = ctx.table(TableId::Resumen)?;
    let renderer = ctx.renderer;

    let freedom = renderer.dual_axis(
        table,
        "Índice de Libertad Económica",
        "Crecimiento del PIB (%)",
        "Libertad Económica vs. Crecimiento del PIB",
    );
    let quality = renderer.multi_line(
        table,
        &[
            "Poder Adquisitivo (Índice)",
            "Satisfacción con el Sistema de Salud (%)",
            "Calidad de la Educación (Índice)",
        ],
        "Evolución de Indicadores de Calidad de Vida",
    );
    let crime = renderer.multi_line(
        table,
        &["Tasa de Criminalidad (por 100,000 hab.)"],
        "Evolución de la Tasa de Criminalidad en Chile",
    );

    Ok(el("div")
        .class("page-content")
        .child(
            el("div")
                .class("executive-summary-container content-section")
                .child(executive_summary(SUMMARY, vec![bullet_list(&REFORMS)])),
        )
        .child(section(
            "Libertad Económica y Crecimiento del PIB",
            vec![
                analysis(
                    "La relación entre la libertad económica y el crecimiento del PIB en Chile muestra una tendencia preocupante. \
                     La disminución de la libertad económica parece estar teniendo un impacto negativo en el crecimiento económico del país.",
                ),
                graph(WidgetId::new(Page::Resumen, Widget::StaticGraph(1)), &freedom),
            ],
            "",
        ))
        .child(section(
            "Indicadores de Calidad de Vida",
            vec![
                analysis(
                    "Los indicadores de calidad de vida en Chile muestran una tendencia preocupante. Se observa un deterioro \
                     generalizado en la calidad de vida de los chilenos, a pesar del supuesto progreso económico.",
                ),
                graph(WidgetId::new(Page::Resumen, Widget::StaticGraph(2)), &quality),
            ],
            "",
        ))
        .child(section(
            "Criminalidad y Seguridad",
            vec![
                analysis(
                    "La tasa de criminalidad en Chile ha aumentado de manera alarmante. Este aumento significativo en la \
                     criminalidad sugiere un deterioro en la seguridad pública y plantea serias preguntas sobre la efectividad \
                     de las políticas de seguridad actuales.",
                ),
                graph(WidgetId::new(Page::Resumen, Widget::StaticGraph(3)), &crime),
            ],
            "",
        ))
        .into())
}

fn analysis(text: &str) -> Node {
    el("p").class("analysis-text").child(text).into()
}
