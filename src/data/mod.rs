//! Indicator Dataset
//!
//! Small, hand-authored in-memory tables:
//!
//! - **types**: `Indicator`, `IndicatorTable`, `RegionalTable`
//! - **tables**: the bundled yearly and regional values
//! - **catalog**: lookup of every table by `TableId`
//! - **error**: validation errors

pub mod catalog;
pub mod error;
pub mod tables;
pub mod types;

pub use catalog::{Catalog, TableId};
pub use error::{DataError, DataResult};
pub use types::{Indicator, IndicatorTable, Observation, RegionRow, RegionalTable};
