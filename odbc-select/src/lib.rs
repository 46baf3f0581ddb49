//! odbc-select
//!
//! Connects to an ODBC data source, runs one query and prints every row of the
//! result on its own line.
//!
//! ## Example
//!
//! ```rust,no_run
//! use odbc_select::{Config, run};
//!
//! # fn example() -> anyhow::Result<()> {
//! let printed = run(&Config::default(), &mut std::io::stdout().lock())?;
//! eprintln!("{} rows", printed);
//! # Ok(())
//! # }
//! ```

mod config;

pub use config::{Config, DEFAULT_CONNECTION_STRING, DEFAULT_QUERY};

// Re-export everything from odbc-select-core
pub use odbc_select_core::*;

use anyhow::Context;
use std::io::Write;

/// Connect, execute the configured query, print every row to `out` and close.
///
/// Returns the number of rows printed. The connection is released on every
/// path, including errors.
pub fn run<W: Write + ?Sized>(config: &Config, out: &mut W) -> anyhow::Result<usize> {
    let conn = OdbcConnection::establish(&config.connect_options)
        .context("could not open ODBC connection")?;

    let rows = {
        let mut cursor = conn.cursor();
        cursor
            .execute(&config.query)
            .context("query failed")?;
        let rows = cursor.fetch_all().context("could not fetch result rows")?;
        cursor.close();
        rows
    };

    let printed = print_rows(&rows, out).context("could not print rows")?;
    log::info!("printed {} rows", printed);

    conn.close();
    Ok(printed)
}
