//! ODBC value types.

use crate::odbc::OdbcTypeInfo;

/// Owned data of a single fetched field.
///
/// Binary columns are kept as raw bytes, every other column is fetched in its
/// textual form as produced by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OdbcValueData {
    /// Null value
    Null,
    /// Text as rendered by the driver
    Text(String),
    /// Binary data
    Binary(Vec<u8>),
}

/// An owned value from an ODBC result.
#[derive(Debug, Clone)]
pub struct OdbcValue {
    pub(crate) data: OdbcValueData,
    pub(crate) type_info: OdbcTypeInfo,
}

impl OdbcValue {
    /// Create a new owned value
    pub fn new(data: OdbcValueData, type_info: OdbcTypeInfo) -> Self {
        Self { data, type_info }
    }

    /// Get the underlying data
    pub fn data(&self) -> &OdbcValueData {
        &self.data
    }

    pub fn type_info(&self) -> &OdbcTypeInfo {
        &self.type_info
    }

    pub fn is_null(&self) -> bool {
        matches!(self.data, OdbcValueData::Null)
    }

    /// The textual form, if this is a non-null text value
    pub fn as_str(&self) -> Option<&str> {
        match &self.data {
            OdbcValueData::Text(s) => Some(s),
            _ => None,
        }
    }
}

// Conversion helpers
impl From<String> for OdbcValueData {
    fn from(v: String) -> Self {
        OdbcValueData::Text(v)
    }
}

impl From<&str> for OdbcValueData {
    fn from(v: &str) -> Self {
        OdbcValueData::Text(v.to_string())
    }
}

impl From<Vec<u8>> for OdbcValueData {
    fn from(v: Vec<u8>) -> Self {
        OdbcValueData::Binary(v)
    }
}

impl From<&[u8]> for OdbcValueData {
    fn from(v: &[u8]) -> Self {
        OdbcValueData::Binary(v.to_vec())
    }
}

impl<T: Into<OdbcValueData>> From<Option<T>> for OdbcValueData {
    fn from(v: Option<T>) -> Self {
        v.map_or(OdbcValueData::Null, Into::into)
    }
}
