//! ODBC type information.

use odbc_api::DataType;
use std::num::NonZero;

/// Type of a result column, as described by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OdbcTypeInfo {
    pub(crate) data_type: DataType,
}

impl OdbcTypeInfo {
    pub const fn new(data_type: DataType) -> Self {
        Self { data_type }
    }

    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    pub const fn bit() -> Self {
        Self::new(DataType::Bit)
    }

    pub const fn integer() -> Self {
        Self::new(DataType::Integer)
    }

    pub const fn double() -> Self {
        Self::new(DataType::Double)
    }

    pub fn varchar(length: usize) -> Self {
        Self::new(DataType::Varchar { length: NonZero::new(length) })
    }

    pub fn decimal(precision: usize, scale: i16) -> Self {
        Self::new(DataType::Decimal { precision, scale })
    }

    pub fn varbinary(length: usize) -> Self {
        Self::new(DataType::Varbinary { length: NonZero::new(length) })
    }
}

/// How a column is fetched and printed.
pub trait DataTypeExt {
    /// Fetched as raw bytes instead of text
    fn is_binary(self) -> bool;

    /// Printed unquoted
    fn is_numeric(self) -> bool;

    /// Printed as `true`/`false`
    fn is_bit(self) -> bool;
}

impl DataTypeExt for DataType {
    fn is_binary(self) -> bool {
        matches!(
            self,
            DataType::Binary { .. } | DataType::Varbinary { .. } | DataType::LongVarbinary { .. }
        )
    }

    fn is_numeric(self) -> bool {
        matches!(
            self,
            DataType::TinyInt
                | DataType::SmallInt
                | DataType::Integer
                | DataType::BigInt
                | DataType::Real
                | DataType::Float { .. }
                | DataType::Double
                | DataType::Decimal { .. }
                | DataType::Numeric { .. }
        )
    }

    fn is_bit(self) -> bool {
        self == DataType::Bit
    }
}
