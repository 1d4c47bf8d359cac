//! Dataset catalog
//!
//! Holds every table the dashboard draws from. Built once at start-up and
//! shared read-only afterwards.

use serde::Serialize;
use std::collections::HashMap;

use super::error::DataResult;
use super::tables;
use super::types::{IndicatorTable, RegionalTable};

/// Identifier of a yearly indicator table
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TableId {
    Resumen,
    Macroeconomia,
    Sectorial,
    Comercio,
    Social,
    Politicas,
}

impl TableId {
    /// Get all table ids for iteration
    pub fn all() -> &'static [TableId] {
        &[
            TableId::Resumen,
            TableId::Macroeconomia,
            TableId::Sectorial,
            TableId::Comercio,
            TableId::Social,
            TableId::Politicas,
        ]
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableId::Resumen => write!(f, "resumen"),
            TableId::Macroeconomia => write!(f, "macroeconomia"),
            TableId::Sectorial => write!(f, "sectorial"),
            TableId::Comercio => write!(f, "comercio"),
            TableId::Social => write!(f, "social"),
            TableId::Politicas => write!(f, "politicas"),
        }
    }
}

/// Immutable set of dashboard tables
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: HashMap<TableId, IndicatorTable>,
    regional: RegionalTable,
}

impl Catalog {
    /// Build the catalog from the bundled tables
    pub fn builtin() -> DataResult<Self> {
        let mut catalog = Self::new(tables::regional()?);
        catalog.insert(TableId::Resumen, tables::summary()?);
        catalog.insert(TableId::Macroeconomia, tables::macroeconomic()?);
        catalog.insert(TableId::Sectorial, tables::sectoral()?);
        catalog.insert(TableId::Comercio, tables::trade()?);
        catalog.insert(TableId::Social, tables::social()?);
        catalog.insert(TableId::Politicas, tables::public_policy()?);

        tracing::debug!(tables = catalog.tables.len(), "Dataset catalog loaded");
        Ok(catalog)
    }

    /// Create a catalog holding only the regional table
    pub fn new(regional: RegionalTable) -> Self {
        Self {
            tables: HashMap::new(),
            regional,
        }
    }

    /// Register or replace a yearly table
    pub fn insert(&mut self, id: TableId, table: IndicatorTable) {
        self.tables.insert(id, table);
    }

    pub fn table(&self, id: TableId) -> Option<&IndicatorTable> {
        self.tables.get(&id)
    }

    pub fn regional(&self) -> &RegionalTable {
        &self.regional
    }

    /// Whether every known table id is loaded
    pub fn is_complete(&self) -> bool {
        TableId::all().iter().all(|id| self.tables.contains_key(id))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.is_complete());
        assert_eq!(catalog.len(), TableId::all().len());
        assert!(catalog.table(TableId::Social).unwrap().contains("Índice de Gini"));
    }

    #[test]
    fn test_partial_catalog() {
        let catalog = Catalog::new(tables::regional().unwrap());
        assert!(!catalog.is_complete());
        assert!(catalog.table(TableId::Resumen).is_none());
    }
}
