//! Hand-authored indicator tables
//!
//! Yearly series for 2010-2023 and the regional cross-section used by the
//! social page. Values are fixed; nothing is loaded at runtime.

use super::error::DataResult;
use super::types::{IndicatorTable, RegionRow, RegionalTable};

/// Years covered by every yearly table
pub const YEARS: [i32; 14] = [
    2010, 2011, 2012, 2013, 2014, 2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023,
];

/// Executive summary series
pub fn summary() -> DataResult<IndicatorTable> {
    IndicatorTable::from_columns(
        "Resumen",
        &YEARS,
        &[
            (
                "Índice de Libertad Económica",
                "índice",
                &[78.0, 77.0, 76.0, 75.0, 73.0, 72.0, 70.0, 68.0, 66.0, 64.0, 62.0, 60.0, 58.0, 56.0],
            ),
            (
                "Crecimiento del PIB (%)",
                "%",
                &[5.8, 6.1, 5.3, 4.0, 1.8, 2.3, 1.7, 1.2, 3.9, 1.1, -5.8, 11.7, 2.4, 0.2],
            ),
            (
                "Poder Adquisitivo (Índice)",
                "índice",
                &[100.0, 102.0, 104.0, 105.0, 106.0, 107.0, 108.0, 109.0, 110.0, 111.0, 105.0, 102.0, 95.0, 90.0],
            ),
            (
                "Tasa de Criminalidad (por 100,000 hab.)",
                "por 100.000 hab.",
                &[2800.0, 2900.0, 3000.0, 3100.0, 3200.0, 3300.0, 3400.0, 3500.0, 3600.0, 3700.0, 3800.0, 3700.0, 3900.0, 4100.0],
            ),
            (
                "Satisfacción con el Sistema de Salud (%)",
                "%",
                &[70.0, 68.0, 66.0, 64.0, 62.0, 60.0, 58.0, 56.0, 54.0, 52.0, 50.0, 48.0, 46.0, 44.0],
            ),
            (
                "Calidad de la Educación (Índice)",
                "índice",
                &[75.0, 74.0, 73.0, 72.0, 71.0, 70.0, 69.0, 68.0, 67.0, 66.0, 65.0, 64.0, 63.0, 62.0],
            ),
        ],
    )
}

/// Macroeconomic series
pub fn macroeconomic() -> DataResult<IndicatorTable> {
    IndicatorTable::from_columns(
        "Macroeconomía",
        &YEARS,
        &[
            (
                "Crecimiento del PIB (%)",
                "%",
                &[5.8, 6.1, 5.3, 4.0, 1.8, 2.3, 1.7, 1.2, 3.9, 1.1, -5.8, 11.7, 2.4, 0.2],
            ),
            (
                "Inflación (%)",
                "%",
                &[1.4, 3.3, 3.0, 1.8, 4.7, 4.3, 3.8, 2.2, 2.3, 2.6, 3.0, 4.5, 11.6, 7.6],
            ),
            (
                "Tasa de Desempleo (%)",
                "%",
                &[8.4, 7.2, 6.5, 6.0, 6.5, 6.3, 6.7, 7.0, 7.4, 7.2, 10.8, 9.1, 7.9, 8.7],
            ),
            (
                "Deuda Pública (% PIB)",
                "% PIB",
                &[8.6, 11.1, 11.9, 12.7, 15.0, 17.3, 21.0, 23.6, 25.6, 28.3, 32.4, 36.3, 37.9, 39.4],
            ),
            (
                "Tasa de Política Monetaria (%)",
                "%",
                &[3.25, 5.25, 5.0, 4.5, 3.0, 3.5, 3.5, 2.5, 2.75, 1.75, 0.5, 4.0, 11.25, 8.25],
            ),
        ],
    )
}

/// Share of GDP per productive sector
pub fn sectoral() -> DataResult<IndicatorTable> {
    IndicatorTable::from_columns(
        "Sectorial",
        &YEARS,
        &[
            (
                "Minería (% PIB)",
                "% PIB",
                &[14.6, 15.0, 13.2, 11.9, 10.9, 8.9, 7.9, 9.2, 9.6, 9.5, 11.6, 14.6, 13.8, 12.1],
            ),
            (
                "Industria Manufacturera (% PIB)",
                "% PIB",
                &[11.6, 11.2, 11.0, 10.8, 10.6, 10.4, 10.2, 9.9, 9.7, 9.5, 9.3, 9.6, 9.4, 9.1],
            ),
            (
                "Comercio (% PIB)",
                "% PIB",
                &[9.0, 9.4, 9.6, 9.8, 9.7, 9.8, 9.9, 10.0, 10.1, 10.0, 9.6, 11.2, 10.8, 10.4],
            ),
            (
                "Servicios Financieros (% PIB)",
                "% PIB",
                &[5.2, 5.4, 5.6, 5.8, 5.9, 6.0, 6.1, 6.1, 6.2, 6.3, 6.4, 6.0, 6.1, 6.2],
            ),
            (
                "Agropecuario-Silvícola (% PIB)",
                "% PIB",
                &[3.2, 3.3, 3.1, 3.0, 3.2, 3.4, 3.5, 3.3, 3.4, 3.3, 3.6, 3.5, 3.3, 3.2],
            ),
            (
                "Producción de Cobre (millones de t)",
                "millones de t",
                &[5.42, 5.26, 5.43, 5.78, 5.76, 5.76, 5.55, 5.50, 5.83, 5.79, 5.73, 5.62, 5.33, 5.25],
            ),
        ],
    )
}

/// Foreign trade flows
pub fn trade() -> DataResult<IndicatorTable> {
    IndicatorTable::from_columns(
        "Comercio",
        &YEARS,
        &[
            (
                "Exportaciones (MMUS$)",
                "MMUS$",
                &[71.1, 81.4, 78.0, 76.8, 75.1, 62.0, 60.7, 68.9, 75.5, 69.9, 74.1, 94.7, 98.5, 94.9],
            ),
            (
                "Importaciones (MMUS$)",
                "MMUS$",
                &[59.4, 74.9, 79.3, 79.6, 72.3, 63.0, 59.0, 65.1, 74.6, 69.9, 59.2, 92.2, 104.5, 79.5],
            ),
            (
                "Balanza Comercial (MMUS$)",
                "MMUS$",
                &[11.7, 6.5, -1.3, -2.8, 2.8, -1.0, 1.7, 3.8, 0.9, 0.0, 14.9, 2.5, -6.0, 15.4],
            ),
            (
                "Cobre en Exportaciones (%)",
                "%",
                &[57.0, 55.0, 53.0, 52.0, 50.0, 49.0, 45.0, 49.0, 50.0, 48.0, 53.0, 56.0, 50.0, 48.0],
            ),
        ],
    )
}

/// Core social indicators behind the social dropdown
pub fn social() -> DataResult<IndicatorTable> {
    IndicatorTable::from_columns(
        "Sociedad",
        &YEARS,
        &[
            (
                "Índice de Gini",
                "índice",
                &[0.51, 0.505, 0.505, 0.495, 0.495, 0.485, 0.48, 0.475, 0.47, 0.465, 0.46, 0.455, 0.45, 0.445],
            ),
            (
                "Tasa de Pobreza (%)",
                "%",
                &[25.3, 22.8, 20.8, 18.7, 17.2, 15.1, 13.7, 12.7, 11.4, 10.8, 10.8, 11.7, 12.5, 11.9],
            ),
            (
                "Años de Educación",
                "años",
                &[9.7, 9.8, 9.9, 10.0, 10.1, 10.2, 10.3, 10.4, 10.5, 10.6, 10.7, 10.8, 10.9, 11.0],
            ),
            (
                "Gasto en Salud (% PIB)",
                "% PIB",
                &[6.8, 6.9, 7.0, 7.1, 7.2, 7.3, 7.4, 7.5, 7.6, 7.7, 7.8, 7.9, 8.0, 8.1],
            ),
            (
                "Tasa de Criminalidad (por 100,000 hab.)",
                "por 100.000 hab.",
                &[2800.0, 2900.0, 3000.0, 3100.0, 3200.0, 3300.0, 3400.0, 3500.0, 3600.0, 3700.0, 3800.0, 3700.0, 3900.0, 4100.0],
            ),
            (
                "Tasa de Victimización (%)",
                "%",
                &[28.2, 28.8, 29.4, 30.0, 30.6, 31.2, 31.8, 32.4, 33.0, 33.6, 34.2, 33.8, 35.0, 36.2],
            ),
            (
                "Tasa de Migración (%)",
                "%",
                &[1.3, 1.5, 1.8, 2.1, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.2, 4.5, 4.8, 5.1],
            ),
        ],
    )
}

/// Fiscal policy series
pub fn public_policy() -> DataResult<IndicatorTable> {
    IndicatorTable::from_columns(
        "Políticas Públicas",
        &YEARS,
        &[
            (
                "Gasto Público (% PIB)",
                "% PIB",
                &[21.2, 21.4, 21.7, 22.3, 23.0, 23.9, 24.4, 24.7, 24.6, 25.2, 28.2, 31.1, 25.3, 25.5],
            ),
            (
                "Carga Tributaria (% PIB)",
                "% PIB",
                &[19.5, 21.2, 21.5, 19.9, 19.6, 20.4, 20.1, 20.2, 21.1, 20.9, 19.3, 22.2, 23.9, 21.4],
            ),
            (
                "Balance Fiscal (% PIB)",
                "% PIB",
                &[-0.4, 1.3, 0.6, -0.6, -1.6, -2.1, -2.7, -2.8, -1.6, -2.9, -7.3, -7.7, 1.1, -2.4],
            ),
            (
                "Gasto Social (% PIB)",
                "% PIB",
                &[13.1, 13.0, 13.2, 13.5, 14.0, 14.6, 15.1, 15.4, 15.6, 16.0, 19.8, 22.2, 16.9, 17.3],
            ),
        ],
    )
}

/// Column labels of the regional cross-section
pub const REGIONAL_COLUMNS: [&str; 9] = [
    "Índice de Pobreza",
    "Desempleo",
    "Déficit Habitacional",
    "Acceso a Agua Potable",
    "Acceso a Electricidad",
    "Índice de Vulnerabilidad",
    "Cobertura de Salud",
    "Años de Escolaridad",
    "Ingreso Medio",
];

const REGIONAL_ROWS: [(&str, [f64; 9]); 16] = [
    ("Arica y Parinacota", [12.5, 10.1, 22.4, 93.2, 98.7, 38.2, 78.4, 10.6, 512_000.0]),
    ("Tarapacá", [9.8, 9.4, 25.7, 94.8, 99.1, 35.6, 80.2, 10.9, 598_000.0]),
    ("Antofagasta", [6.2, 8.8, 27.9, 97.5, 99.6, 27.4, 86.5, 11.4, 786_000.0]),
    ("Atacama", [8.9, 9.9, 21.3, 95.1, 99.0, 31.8, 82.1, 10.8, 641_000.0]),
    ("Coquimbo", [13.4, 10.7, 18.6, 92.4, 98.2, 39.5, 77.9, 10.2, 468_000.0]),
    ("Valparaíso", [11.1, 11.2, 17.2, 96.3, 99.3, 34.1, 81.6, 11.1, 552_000.0]),
    ("Metropolitana", [7.1, 9.2, 19.8, 99.1, 99.8, 26.3, 88.9, 11.8, 744_000.0]),
    ("O'Higgins", [12.2, 8.1, 15.9, 91.7, 98.5, 36.9, 79.8, 10.1, 471_000.0]),
    ("Maule", [16.7, 8.6, 14.7, 89.3, 97.6, 42.8, 76.1, 9.6, 402_000.0]),
    ("Ñuble", [19.8, 9.7, 13.9, 87.6, 96.9, 46.3, 74.2, 9.3, 356_000.0]),
    ("Biobío", [15.9, 10.4, 16.4, 92.9, 98.4, 41.2, 79.3, 10.3, 447_000.0]),
    ("Araucanía", [23.6, 10.8, 20.5, 85.4, 95.8, 49.1, 71.5, 9.2, 331_000.0]),
    ("Los Ríos", [18.1, 8.9, 17.8, 88.2, 97.3, 44.0, 75.6, 9.8, 389_000.0]),
    ("Los Lagos", [15.2, 7.4, 18.9, 88.9, 97.8, 40.6, 77.2, 9.9, 436_000.0]),
    ("Aysén", [8.4, 6.3, 12.1, 91.2, 96.4, 30.2, 84.8, 10.5, 662_000.0]),
    ("Magallanes", [5.3, 5.6, 10.6, 98.4, 99.5, 22.7, 91.3, 11.3, 705_000.0]),
];

/// Regional cross-section of social indicators
pub fn regional() -> DataResult<RegionalTable> {
    let columns = REGIONAL_COLUMNS.iter().map(|c| c.to_string()).collect();
    let rows = REGIONAL_ROWS
        .iter()
        .map(|(region, values)| RegionRow {
            region: region.to_string(),
            values: values.to_vec(),
        })
        .collect();

    RegionalTable::new("Indicadores Sociales por Región", columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_validate() {
        assert!(summary().is_ok());
        assert!(macroeconomic().is_ok());
        assert!(sectoral().is_ok());
        assert!(trade().is_ok());
        assert!(social().is_ok());
        assert!(public_policy().is_ok());
        assert!(regional().is_ok());
    }

    #[test]
    fn test_social_table_shape() {
        let table = social().unwrap();
        assert_eq!(table.indicators().len(), 7);
        assert_eq!(table.names()[0], "Índice de Gini");
        let gini = table.get("Índice de Gini").unwrap();
        assert_eq!(gini.value_at(2010), Some(0.51));
        assert_eq!(gini.value_at(2023), Some(0.445));
    }

    #[test]
    fn test_trade_balance_matches_flows() {
        let table = trade().unwrap();
        let exports = table.get("Exportaciones (MMUS$)").unwrap().values();
        let imports = table.get("Importaciones (MMUS$)").unwrap().values();
        let balance = table.get("Balanza Comercial (MMUS$)").unwrap().values();
        for ((x, m), b) in exports.iter().zip(&imports).zip(&balance) {
            assert!((x - m - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_regional_table_shape() {
        let table = regional().unwrap();
        assert_eq!(table.rows().len(), 16);
        assert_eq!(table.columns().len(), 9);
        assert!(table.regions().contains(&"Metropolitana"));
    }
}
