//! Core of `odbc-select`.
//!
//! Opens a connection to an ODBC data source, runs a statement through a
//! cursor, materialises the result set and renders rows as text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use odbc_select_core::odbc::{OdbcConnectOptions, OdbcConnection, print_rows};
//!
//! # fn example() -> Result<(), odbc_select_core::odbc::Error> {
//! let options = OdbcConnectOptions::new("DSN=MyDSN;UID=user;PWD=pass");
//! let conn = OdbcConnection::establish(&options)?;
//! let rows = conn.execute("SELECT * FROM your_table")?;
//! print_rows(&rows, &mut std::io::stdout().lock())?;
//! conn.close();
//! # Ok(())
//! # }
//! ```

pub mod odbc;

// Re-export main types at crate root for convenience
pub use odbc::{
    Error, OdbcColumn, OdbcConnectOptions, OdbcConnection, OdbcCursor, OdbcDatabaseError,
    OdbcRow, OdbcTypeInfo, OdbcValue, OdbcValueData, print_rows, render_row, write_row,
};

// Re-export odbc_api for downstream use
pub use odbc_api;
