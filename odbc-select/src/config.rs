//! Run configuration.
//!
//! The connection string and query are fixed in code.

use odbc_select_core::OdbcConnectOptions;

/// Data source, user and password the run connects with.
pub const DEFAULT_CONNECTION_STRING: &str = "DSN=Your_DSN_Name;UID=your_username;PWD=your_password";

/// The statement the run executes.
pub const DEFAULT_QUERY: &str = "SELECT * FROM your_table";

/// Everything a run needs.
#[derive(Clone)]
pub struct Config {
    pub connect_options: OdbcConnectOptions,
    pub query: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("connection_string", &self.connect_options.redacted())
            .field("query", &self.query)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_options: OdbcConnectOptions::new(DEFAULT_CONNECTION_STRING),
            query: DEFAULT_QUERY.to_string(),
        }
    }
}
