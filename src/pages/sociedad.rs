//! Social indicators page

use super::components::{executive_summary, graph, prose, section, subsection_title};
use super::markup::{el, Node};
use super::router::Page;
use super::widget::{Widget, WidgetId};
use super::{indicator_panel, PageContext, PageError};
use crate::data::TableId;
use crate::interaction::DropdownPanel;

/// Indicator dropdown of the social page
pub const PANEL: DropdownPanel = DropdownPanel {
    page: Page::Sociedad,
    table: TableId::Social,
    default: "Índice de Gini",
    analyses: ANALYSES,
};

const ANALYSES: &[(&str, &str)] = &[
    (
        "Índice de Gini",
        "El Índice de Gini ha mostrado una leve mejoría, pasando de 0.51 en 2010 a 0.445 en 2023. \
         Sin embargo, esta reducción es insuficiente considerando que Chile sigue siendo uno de los \
         países más desiguales de la OCDE. La persistencia de esta desigualdad sugiere que las \
         políticas redistributivas han sido ineficaces para abordar las brechas estructurales en la sociedad chilena.",
    ),
    (
        "Tasa de Pobreza (%)",
        "La tasa de pobreza ha disminuido significativamente, de 25.3% en 2010 a 11.9% en 2023. \
         Aunque esto parece ser un logro importante, es crucial considerar la calidad de vida de \
         quienes han superado la línea de pobreza. Muchos chilenos viven en una situación de \
         vulnerabilidad económica, apenas por encima del umbral de pobreza.",
    ),
    (
        "Años de Educación",
        "El promedio de años de educación ha aumentado marginalmente de 9.7 a 11 años entre 2010 y 2023. \
         Este incremento de solo 1.3 años en más de una década es preocupantemente bajo. Refleja un \
         estancamiento en el desarrollo educativo del país y sugiere que el sistema educativo no está \
         evolucionando al ritmo necesario para preparar a la población para los desafíos de una economía moderna.",
    ),
    (
        "Gasto en Salud (% PIB)",
        "El gasto en salud como porcentaje del PIB ha aumentado modestamente del 6.8% al 8.1% entre 2010 y 2023. \
         Este incremento es insuficiente considerando el envejecimiento de la población y los crecientes \
         desafíos en salud pública. La pandemia de COVID-19 expuso las deficiencias del sistema de salud \
         chileno, evidenciando la necesidad de una inversión mucho más significativa.",
    ),
    (
        "Tasa de Criminalidad (por 100,000 hab.)",
        "La tasa de criminalidad ha aumentado alarmantemente de 2,800 a 4,100 por 100,000 habitantes entre 2010 y 2023. \
         Este incremento del 46% refleja un deterioro significativo en la seguridad ciudadana. El aumento de \
         la delincuencia no solo afecta la calidad de vida de los chilenos, sino que también puede tener \
         implicaciones negativas para la inversión y el desarrollo económico del país.",
    ),
    (
        "Tasa de Victimización (%)",
        "La tasa de victimización ha aumentado de 28.2% en 2010 a 36.2% en 2023. Este incremento refleja \
         una creciente percepción de inseguridad entre la población chilena. La discrepancia entre la tasa \
         de criminalidad y la tasa de victimización sugiere que la percepción de inseguridad puede estar \
         aumentando más rápidamente que el crimen real.",
    ),
    (
        "Tasa de Migración (%)",
        "La tasa de migración ha aumentado sustancialmente del 1.3% al 5.1% entre 2010 y 2023. Este cambio \
         demográfico significativo presenta desafíos importantes en términos de integración social, presión \
         sobre los servicios públicos y potenciales tensiones culturales. La falta de políticas migratorias \
         adecuadas y de planificación para este influjo ha exacerbado estos desafíos.",
    ),
];

const SUMMARY: &str = "
    El análisis enriquecido de los indicadores sociales de Chile revela una sociedad compleja,
    con desigualdades persistentes y nuevos desafíos emergentes. Este estudio profundiza en
    aspectos como vivienda, empleo, acceso a servicios básicos, vulnerabilidad y protección social,
    ofreciendo una visión más holística de la realidad social chilena.
";

const RADAR_NOTE: &str = "
    Este gráfico de radar muestra la comparación multidimensional de indicadores sociales
    entre las diferentes regiones de Chile. Cada eje representa un indicador social
    normalizado, permitiendo una comparación directa entre regiones. Las áreas más grandes
    indican un mejor desempeño general en los indicadores sociales.
";

const CORRELATION_NOTE: &str = "
    La matriz de correlación revela relaciones importantes entre los diferentes indicadores sociales:

    - Existe una fuerte correlación negativa entre el Índice de Pobreza y el Acceso a Servicios Básicos,
      lo que subraya cómo la pobreza se manifiesta en múltiples dimensiones.
    - La correlación positiva entre Años de Escolaridad e Ingreso Medio refuerza la idea de que la
      educación sigue siendo un factor clave en la movilidad social, a pesar de sus deficiencias.
    - El Déficit Habitacional muestra una correlación significativa con el Índice de Vulnerabilidad,
      destacando cómo la falta de vivienda adecuada amplifica otras formas de precariedad social.
";

const CRITICAL_ANALYSIS: &str = "
    1. Desigualdad Regional Persistente:
       Los datos revelan una marcada disparidad entre regiones, con la Región Metropolitana mostrando
       consistentemente mejores indicadores que el resto del país. Esta centralización del desarrollo
       perpetúa un ciclo de desigualdad que las políticas públicas han sido incapaces de romper.

    2. Déficit Habitacional Crónico:
       Con tasas de déficit habitacional que oscilan entre 10% y 30%, es evidente que el derecho a la
       vivienda digna sigue siendo una promesa incumplida. La especulación inmobiliaria y la falta de
       regulación efectiva han priorizado el lucro sobre las necesidades básicas de la población.

    3. Precariedad Laboral Enmascarada:
       Las tasas de desempleo (5-15%) no reflejan la realidad del subempleo y la informalidad. El modelo
       económico neoliberal ha generado empleos de baja calidad y alta inestabilidad, erosionando la
       seguridad social y perpetuando la vulnerabilidad económica.

    4. Acceso a Servicios Básicos: Una Falsa Victoria:
       Aunque las cifras de acceso a agua potable y electricidad parecen altas (85-100%), estas estadísticas
       enmascaran problemas de calidad y continuidad del servicio, especialmente en zonas rurales y periurbanas.

    5. Vulnerabilidad Social Estructural:
       Los índices de vulnerabilidad (20-50%) demuestran que una parte significativa de la población vive
       en constante riesgo de caer en la pobreza. Este \"éxito\" del modelo chileno se sostiene sobre una
       base frágil de endeudamiento y precariedad.

    Conclusión:
    El análisis revela un Chile profundamente desigual, donde los aparentes avances macroeconómicos
    enmascaran realidades sociales precarias y vulnerables. El modelo de desarrollo chileno, alabado
    internacionalmente, se sustenta sobre bases frágiles de desigualdad estructural y exclusión sistemática.

    La persistencia de estas brechas, a pesar de décadas de políticas supuestamente progresistas, evidencia
    el fracaso del enfoque neoliberal para abordar problemas sociales complejos. Se requiere una
    reconstrucción radical del contrato social chileno, priorizando la equidad, la sostenibilidad y la
    dignidad humana por encima de los indicadores macroeconómicos superficiales.
";

pub fn layout(ctx: &PageContext<'_>) -> Result<Node, PageError> {
    let regional = ctx.catalog.regional();
    let radar = ctx.renderer.radar(
        regional,
        "Comparación Multidimensional de Indicadores Sociales por Región",
    );
    let heatmap = ctx.renderer.correlation_heatmap(
        regional,
        "Matriz de Correlación entre Indicadores Sociales",
    );

    Ok(el("div")
        .class("page-content")
        .child(
            el("h2")
                .class("section-title")
                .child("Sociedad Chilena: Desigualdades Persistentes y Nuevos Desafíos"),
        )
        .child(executive_summary(SUMMARY, Vec::new()))
        .child(section(
            "Indicadores Sociales Clave",
            vec![indicator_panel(ctx, &PANEL)?],
            "",
        ))
        .child(section(
            "Análisis Regional de Indicadores Sociales",
            vec![
                graph(WidgetId::new(Page::Sociedad, Widget::RadarChart), &radar),
                el("div")
                    .child(subsection_title("Interpretación del Gráfico de Radar"))
                    .child(prose(RADAR_NOTE, "analysis-text"))
                    .into(),
            ],
            "",
        ))
        .child(section(
            "Correlaciones entre Indicadores Sociales",
            vec![
                graph(WidgetId::new(Page::Sociedad, Widget::CorrelationHeatmap), &heatmap),
                el("div")
                    .child(subsection_title("Análisis de Correlaciones"))
                    .child(prose(CORRELATION_NOTE, "analysis-text"))
                    .into(),
            ],
            "",
        ))
        .child(section(
            "Análisis Crítico de la Situación Social en Chile",
            vec![prose(CRITICAL_ANALYSIS, "analysis-text")],
            "",
        ))
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlotlyRenderer;
    use crate::data::{tables, Catalog};

    #[test]
    fn test_every_social_indicator_has_analysis() {
        let table = tables::social().unwrap();
        for name in table.names() {
            assert!(
                ANALYSES.iter().any(|(indicator, _)| *indicator == name),
                "missing analysis for {}",
                name
            );
        }
        assert!(table.contains(PANEL.default));
    }

    #[test]
    fn test_layout_has_regional_charts() {
        let catalog = Catalog::builtin().unwrap();
        let renderer = PlotlyRenderer::default();
        let ctx = PageContext::new(&catalog, &renderer);
        let node = layout(&ctx).unwrap();

        let radar = node.find_by_id("sociedad-radar-chart").unwrap();
        assert!(radar.get_attr("data-empty-reason").is_none());
        let heatmap = node.find_by_id("sociedad-correlation-heatmap").unwrap();
        assert!(heatmap.get_attr("data-figure").unwrap().contains("heatmap"));
        assert!(node
            .text_content()
            .contains("Análisis Crítico de la Situación Social en Chile"));
    }
}
