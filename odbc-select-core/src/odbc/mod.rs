//! ODBC access for `odbc-select`.
//!
//! ## Connection Strings
//!
//! ODBC connections use standard ODBC connection strings:
//!
//! ```text
//! // DSN-based connection
//! DSN=MyDataSource;UID=myuser;PWD=mypassword
//!
//! // Driver-based connection
//! Driver={ODBC Driver 17 for SQL Server};Server=localhost;Database=test
//!
//! // URL-style (converted internally)
//! odbc://MyDataSource/mydb?UID=user&PWD=pass
//! ```
//!
//! ## Lifecycle
//!
//! A [`OdbcConnection`] hands out an [`OdbcCursor`] that borrows it, so a
//! cursor can never outlive its connection. Rows fetched from the cursor are
//! owned values and survive both.

mod column;
mod connection;
mod cursor;
mod error;
mod options;
mod render;
mod row;
mod type_info;
mod value;

pub use column::OdbcColumn;
pub use connection::OdbcConnection;
pub use cursor::OdbcCursor;
pub use error::{Error, OdbcDatabaseError};
pub use options::OdbcConnectOptions;
pub use render::{print_rows, render_row, write_row};
pub use row::OdbcRow;
pub use type_info::{DataTypeExt, OdbcTypeInfo};
pub use value::{OdbcValue, OdbcValueData};

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
