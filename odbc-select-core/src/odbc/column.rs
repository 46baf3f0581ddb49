//! ODBC column definition.

use crate::odbc::OdbcTypeInfo;

/// A column of an ODBC result set.
#[derive(Debug, Clone)]
pub struct OdbcColumn {
    pub(crate) name: String,
    pub(crate) type_info: OdbcTypeInfo,
}

impl OdbcColumn {
    pub fn new(name: impl Into<String>, type_info: OdbcTypeInfo) -> Self {
        Self {
            name: name.into(),
            type_info,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_info(&self) -> &OdbcTypeInfo {
        &self.type_info
    }
}
