//! ODBC connection implementation.

use crate::odbc::{Error, OdbcConnectOptions, OdbcCursor, OdbcDatabaseError, OdbcRow, Result};
use odbc_api::{ConnectionOptions, Environment};
use std::sync::OnceLock;

// Global ODBC environment, one per process
static ODBC_ENV: OnceLock<Environment> = OnceLock::new();

fn odbc_environment() -> Result<&'static Environment> {
    if let Some(env) = ODBC_ENV.get() {
        return Ok(env);
    }
    let env = Environment::new().map_err(|e| Error::Environment(OdbcDatabaseError::new(e)))?;
    // A concurrent initialiser may have won; its environment is used and ours dropped.
    Ok(ODBC_ENV.get_or_init(|| env))
}

/// An open connection to an ODBC data source.
///
/// The connection is closed when dropped; [`close`](Self::close) does the same
/// and logs it.
pub struct OdbcConnection {
    pub(crate) inner: odbc_api::Connection<'static>,
    pub(crate) options: OdbcConnectOptions,
}

impl std::fmt::Debug for OdbcConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdbcConnection")
            .field("connection_string", &self.options.redacted())
            .finish()
    }
}

impl OdbcConnection {
    /// Establish a new connection with the given options
    pub fn establish(options: &OdbcConnectOptions) -> Result<Self> {
        let env = odbc_environment()?;

        let mut connection_options = ConnectionOptions::default();
        connection_options.login_timeout_sec = options
            .login_timeout
            .map(|t| u32::try_from(t.as_secs()).unwrap_or(u32::MAX));

        log::debug!("connecting to {}", options.redacted());

        let inner = env
            .connect_with_connection_string(&options.connection_string, connection_options)
            .map_err(|e| Error::Connect {
                connection_string: options.redacted(),
                source: OdbcDatabaseError::new(e),
            })?;

        log::info!("connected to {}", options.redacted());

        Ok(Self {
            inner,
            options: options.clone(),
        })
    }

    /// Obtain a cursor bound to this connection
    pub fn cursor(&self) -> OdbcCursor<'_> {
        OdbcCursor::new(self)
    }

    /// Run `sql` and fetch its whole result set
    pub fn execute(&self, sql: &str) -> Result<Vec<OdbcRow>> {
        let mut cursor = self.cursor();
        cursor.execute(sql)?;
        let rows = cursor.fetch_all()?;
        cursor.close();
        Ok(rows)
    }

    /// Close the connection.
    ///
    /// The driver handle disconnects when dropped, which also covers early
    /// returns on error paths. `odbc-api` panics if the driver reports a
    /// failure while disconnecting, so there is no error to return here.
    pub fn close(self) {
        let redacted = self.options.redacted();
        drop(self.inner);
        log::info!("closed connection to {}", redacted);
    }
}
