//! Core data types for the indicator dataset
//!
//! - `Observation`: one yearly value
//! - `Indicator`: a named yearly series with a unit
//! - `IndicatorTable`: the indicators shown together on one page
//! - `RegionalTable`: cross-sectional values per Chilean region

use serde::Serialize;

use super::error::{DataError, DataResult};

/// A single yearly measurement
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

/// A named indicator with its yearly series
///
/// Years are strictly increasing and the series is never empty.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Indicator {
    name: String,
    unit: String,
    observations: Vec<Observation>,
}

impl Indicator {
    /// Build an indicator, validating the series invariants
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        observations: Vec<Observation>,
    ) -> DataResult<Self> {
        let name = name.into();

        if observations.is_empty() {
            return Err(DataError::EmptySeries(name));
        }

        for pair in observations.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(DataError::NonIncreasingYears {
                    name,
                    year: pair[1].year,
                });
            }
        }

        Ok(Self {
            name,
            unit: unit.into(),
            observations,
        })
    }

    /// Build an indicator from parallel year and value columns
    pub fn from_columns(
        name: impl Into<String>,
        unit: impl Into<String>,
        years: &[i32],
        values: &[f64],
    ) -> DataResult<Self> {
        let name = name.into();
        if years.len() != values.len() {
            return Err(DataError::LengthMismatch {
                name,
                expected: years.len(),
                actual: values.len(),
            });
        }

        let observations = years
            .iter()
            .zip(values)
            .map(|(&year, &value)| Observation { year, value })
            .collect();

        Self::new(name, unit, observations)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn years(&self) -> Vec<i32> {
        self.observations.iter().map(|o| o.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// First and last year covered by the series
    pub fn span(&self) -> (i32, i32) {
        // Non-empty by construction
        let first = self.observations[0].year;
        let last = self.observations[self.observations.len() - 1].year;
        (first, last)
    }

    /// Value recorded for a given year
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.observations
            .iter()
            .find(|o| o.year == year)
            .map(|o| o.value)
    }
}

/// Ordered set of indicators shown together
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndicatorTable {
    title: String,
    indicators: Vec<Indicator>,
}

impl IndicatorTable {
    /// Create a table, rejecting duplicate names and empty tables
    pub fn new(title: impl Into<String>, indicators: Vec<Indicator>) -> DataResult<Self> {
        let title = title.into();
        if indicators.is_empty() {
            return Err(DataError::EmptyTable(title));
        }

        for (idx, indicator) in indicators.iter().enumerate() {
            if indicators[..idx].iter().any(|i| i.name == indicator.name) {
                return Err(DataError::DuplicateIndicator(indicator.name.clone()));
            }
        }

        Ok(Self { title, indicators })
    }

    /// Build a table from a shared year column and `(name, unit, values)` columns
    pub fn from_columns(
        title: impl Into<String>,
        years: &[i32],
        columns: &[(&str, &str, &[f64])],
    ) -> DataResult<Self> {
        let indicators = columns
            .iter()
            .map(|(name, unit, values)| Indicator::from_columns(*name, *unit, years, values))
            .collect::<DataResult<Vec<_>>>()?;

        Self::new(title, indicators)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Look up an indicator by its exact name
    pub fn get(&self, name: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Indicator names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.indicators.iter().map(|i| i.name.as_str()).collect()
    }

    /// Union of all years covered by the table, ascending
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .indicators
            .iter()
            .flat_map(|i| i.observations.iter().map(|o| o.year))
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// One region's row in a regional table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionRow {
    pub region: String,
    pub values: Vec<f64>,
}

/// Cross-sectional indicators per region
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionalTable {
    title: String,
    columns: Vec<String>,
    rows: Vec<RegionRow>,
}

impl RegionalTable {
    /// Create a regional table; every row must have one value per column
    pub fn new(
        title: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<RegionRow>,
    ) -> DataResult<Self> {
        let title = title.into();
        if columns.is_empty() || rows.is_empty() {
            return Err(DataError::EmptyTable(title));
        }

        if let Some(row) = rows.iter().find(|r| r.values.len() != columns.len()) {
            return Err(DataError::RaggedRow {
                region: row.region.clone(),
                expected: columns.len(),
                actual: row.values.len(),
            });
        }

        Ok(Self {
            title,
            columns,
            rows,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[RegionRow] {
        &self.rows
    }

    /// All values of one column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|r| r.values[idx]).collect())
    }

    pub fn regions(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.region.as_str()).collect()
    }
}
