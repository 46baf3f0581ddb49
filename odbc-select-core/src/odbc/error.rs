//! ODBC error types.

use odbc_api::Error as OdbcApiError;
use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors produced while connecting, executing or fetching.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process-wide ODBC environment could not be allocated.
    #[error("failed to create ODBC environment: {0}")]
    Environment(#[source] OdbcDatabaseError),

    #[error("failed to connect to `{connection_string}`: {source}")]
    Connect {
        /// Connection string with secrets masked.
        connection_string: String,
        #[source]
        source: OdbcDatabaseError,
    },

    #[error("failed to execute `{sql}`: {source}")]
    Execute {
        sql: String,
        #[source]
        source: OdbcDatabaseError,
    },

    #[error("failed to fetch rows: {0}")]
    Fetch(#[source] OdbcDatabaseError),

    /// A fetch was attempted while no result set was active.
    #[error("no result set: nothing was executed or the statement was not a query")]
    NoResultSet,

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The database error behind this error, if any
    pub fn as_database_error(&self) -> Option<&OdbcDatabaseError> {
        match self {
            Error::Environment(e) | Error::Fetch(e) => Some(e),
            Error::Connect { source, .. } | Error::Execute { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// An error returned from an ODBC driver or driver manager.
#[derive(Debug)]
pub struct OdbcDatabaseError {
    pub(crate) inner: OdbcApiError,
    pub(crate) message: String,
    pub(crate) sqlstate: Option<String>,
}

impl OdbcDatabaseError {
    /// Create a new OdbcDatabaseError from an odbc_api::Error
    pub fn new(error: OdbcApiError) -> Self {
        let message = error.to_string();
        let sqlstate = extract_sqlstate(&error);
        Self {
            inner: error,
            message,
            sqlstate,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the SQLSTATE code if available
    pub fn sqlstate(&self) -> Option<&str> {
        self.sqlstate.as_deref()
    }
}

impl Display for OdbcDatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)
    }
}

impl StdError for OdbcDatabaseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.inner)
    }
}

impl From<OdbcApiError> for OdbcDatabaseError {
    fn from(error: OdbcApiError) -> Self {
        Self::new(error)
    }
}

/// Extract SQLSTATE from an ODBC error if available
fn extract_sqlstate(error: &OdbcApiError) -> Option<String> {
    if let OdbcApiError::Diagnostics { record, .. } = error {
        if let Ok(state) = std::str::from_utf8(&record.state.0) {
            if is_sqlstate(state) {
                return Some(state.to_string());
            }
        }
    }
    sqlstate_from_message(&error.to_string())
}

/// Diagnostics render as `State: 08001, Native error: ...`; drivers that only
/// report a message often embed the state in brackets, e.g. `[HY000]`.
fn sqlstate_from_message(msg: &str) -> Option<String> {
    if let Some(start) = msg.find("State: ") {
        let rest = &msg[start + "State: ".len()..];
        if let Some(state) = rest.get(..5).filter(|s| is_sqlstate(s)) {
            return Some(state.to_string());
        }
    }

    let mut rest = msg;
    while let Some(start) = rest.find('[') {
        rest = &rest[start + 1..];
        if let Some(end) = rest.find(']') {
            let state = &rest[..end];
            if is_sqlstate(state) {
                return Some(state.to_string());
            }
        }
    }

    None
}

fn is_sqlstate(s: &str) -> bool {
    s.len() == 5 && s.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlstate_from_diagnostic_text() {
        let msg = "ODBC emitted an error calling 'SQLDriverConnect':\n\
                   State: 08001, Native error: 0, Message: [unixODBC]Could not connect";
        assert_eq!(sqlstate_from_message(msg).as_deref(), Some("08001"));
    }

    #[test]
    fn sqlstate_from_brackets_skips_vendor_tags() {
        let msg = "[unixODBC][Driver Manager][42S02] Invalid object name 'your_table'";
        assert_eq!(sqlstate_from_message(msg).as_deref(), Some("42S02"));
        assert_eq!(sqlstate_from_message("[unixODBC] nothing here"), None);
        assert_eq!(sqlstate_from_message("no state at all"), None);
    }

    #[test]
    fn no_result_set_has_no_database_error() {
        assert!(Error::NoResultSet.as_database_error().is_none());
        assert!(Error::Configuration("x".into()).to_string().contains("x"));
    }
}
