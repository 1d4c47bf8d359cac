//! Dataset error types
//!
//! Errors raised while building the in-memory indicator tables.

use thiserror::Error;

/// Errors that can occur while validating a dataset
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// An indicator was declared without any observation
    #[error("Indicator '{0}' has no observations")]
    EmptySeries(String),

    /// Years must be strictly increasing within one indicator
    #[error("Indicator '{name}' has a non-increasing year at {year}")]
    NonIncreasingYears { name: String, year: i32 },

    /// A value column does not line up with the year column
    #[error("Indicator '{name}' has {actual} values for {expected} years")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Two indicators in the same table share a name
    #[error("Duplicate indicator: {0}")]
    DuplicateIndicator(String),

    /// A regional row does not have one value per column
    #[error("Region '{region}' has {actual} values for {expected} columns")]
    RaggedRow {
        region: String,
        expected: usize,
        actual: usize,
    },

    /// A table was declared without rows or columns
    #[error("Table '{0}' is empty")]
    EmptyTable(String),
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::EmptySeries("Índice de Gini".to_string());
        assert_eq!(err.to_string(), "Indicator 'Índice de Gini' has no observations");

        let err = DataError::NonIncreasingYears {
            name: "PIB".to_string(),
            year: 2012,
        };
        assert_eq!(
            err.to_string(),
            "Indicator 'PIB' has a non-increasing year at 2012"
        );
    }
}
