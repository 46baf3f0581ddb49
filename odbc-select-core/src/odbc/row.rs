//! ODBC row definition.

use crate::odbc::{OdbcColumn, OdbcValue};
use std::sync::Arc;

/// A row from an ODBC result set.
///
/// All rows of one result set share the same column list.
#[derive(Debug, Clone)]
pub struct OdbcRow {
    pub(crate) columns: Arc<[OdbcColumn]>,
    pub(crate) values: Vec<OdbcValue>,
}

impl OdbcRow {
    /// Create a new row with the given columns and values
    pub fn new(columns: impl Into<Arc<[OdbcColumn]>>, values: Vec<OdbcValue>) -> Self {
        let columns = columns.into();
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Get the number of columns in this row
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the row is empty
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[OdbcColumn] {
        &self.columns
    }

    pub fn values(&self) -> &[OdbcValue] {
        &self.values
    }

    /// Get a value by index
    pub fn get_value(&self, index: usize) -> Option<&OdbcValue> {
        self.values.get(index)
    }

    /// Get a column by index
    pub fn get_column(&self, index: usize) -> Option<&OdbcColumn> {
        self.columns.get(index)
    }

    /// Get a value by column name. The first column with that name wins.
    pub fn get_by_name(&self, name: &str) -> Option<&OdbcValue> {
        self.columns
            .iter()
            .position(|col| col.name == name)
            .and_then(|index| self.values.get(index))
    }
}
