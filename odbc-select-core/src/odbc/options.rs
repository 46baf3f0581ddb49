//! ODBC connection options.

use crate::odbc::{Error, OdbcConnection, Result};
use log::LevelFilter;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Keys whose values are masked by [`OdbcConnectOptions::redacted`].
const SECRET_KEYS: &[&str] = &["PWD", "PASSWORD"];

/// Options for connecting to an ODBC data source.
#[derive(Clone)]
pub struct OdbcConnectOptions {
    /// The ODBC connection string
    pub(crate) connection_string: String,
    /// Login timeout handed to the driver
    pub(crate) login_timeout: Option<Duration>,
    /// Statement logging level
    pub(crate) log_statements: LevelFilter,
    /// Slow statement threshold
    pub(crate) log_slow_statements: (LevelFilter, Duration),
}

impl std::fmt::Debug for OdbcConnectOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdbcConnectOptions")
            .field("connection_string", &self.redacted())
            .field("login_timeout", &self.login_timeout)
            .field("log_statements", &self.log_statements)
            .field("log_slow_statements", &self.log_slow_statements)
            .finish()
    }
}

impl Default for OdbcConnectOptions {
    fn default() -> Self {
        Self {
            connection_string: String::new(),
            login_timeout: None,
            log_statements: LevelFilter::Debug,
            log_slow_statements: (LevelFilter::Warn, Duration::from_secs(1)),
        }
    }
}

impl OdbcConnectOptions {
    /// Create new options with the given connection string
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            ..Default::default()
        }
    }

    /// Create options from a DSN
    pub fn from_dsn(dsn: impl Into<String>) -> Self {
        let dsn = dsn.into();
        Self::new(format!("DSN={}", dsn))
    }

    /// Set the connection string
    pub fn connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = connection_string.into();
        self
    }

    /// Get the connection string
    pub fn get_connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Set the login timeout
    pub fn login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = Some(timeout);
        self
    }

    pub fn get_login_timeout(&self) -> Option<Duration> {
        self.login_timeout
    }

    /// Level at which every executed statement is logged
    pub fn log_statements(mut self, level: LevelFilter) -> Self {
        self.log_statements = level;
        self
    }

    /// Level at which statements slower than `duration` are logged
    pub fn log_slow_statements(mut self, level: LevelFilter, duration: Duration) -> Self {
        self.log_slow_statements = (level, duration);
        self
    }

    /// Add a username to the connection string
    pub fn username(self, username: &str) -> Self {
        self.push_attribute("UID", username)
    }

    /// Add a password to the connection string
    pub fn password(self, password: &str) -> Self {
        self.push_attribute("PWD", password)
    }

    /// Add a driver to the connection string
    pub fn driver(self, driver: &str) -> Self {
        self.push_attribute("Driver", &format!("{{{}}}", driver))
    }

    /// Add a server to the connection string
    pub fn server(self, server: &str) -> Self {
        self.push_attribute("Server", server)
    }

    /// Add a database to the connection string
    pub fn database(self, database: &str) -> Self {
        self.push_attribute("Database", database)
    }

    fn push_attribute(mut self, key: &str, value: &str) -> Self {
        if !self.connection_string.is_empty() && !self.connection_string.ends_with(';') {
            self.connection_string.push(';');
        }
        self.connection_string.push_str(key);
        self.connection_string.push('=');
        self.connection_string.push_str(value);
        self
    }

    /// The connection string with password values replaced by `***`.
    ///
    /// Values wrapped in braces may contain `;`, so the whole braced value is
    /// masked.
    pub fn redacted(&self) -> String {
        split_attributes(&self.connection_string)
            .into_iter()
            .map(|attr| match attr.split_once('=') {
                Some((key, _)) if SECRET_KEYS.contains(&key.trim().to_ascii_uppercase().as_str()) => {
                    format!("{}=***", key)
                }
                _ => attr.to_string(),
            })
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Build options from an `odbc://` URL.
    ///
    /// The host names the DSN (or the driver when it is wrapped in braces), the
    /// path names the database, userinfo becomes `UID`/`PWD` and every query
    /// pair is appended as a connection string attribute.
    pub fn from_url(url: &Url) -> Result<Self> {
        if url.scheme() != "odbc" {
            return Err(Error::Configuration(format!(
                "unsupported URL scheme `{}`, expected `odbc`",
                url.scheme()
            )));
        }

        let mut options = Self::default();

        // Extract DSN or driver from host
        if let Some(host) = url.host_str() {
            let host = percent_decode(host);
            options = match host.strip_prefix('{').and_then(|h| h.strip_suffix('}')) {
                Some(driver) => options.driver(driver),
                None => options.push_attribute("DSN", &host),
            };
        }

        // Add database from path
        let db = url.path().trim_start_matches('/');
        if !db.is_empty() {
            options = options.database(&percent_decode(db));
        }

        if !url.username().is_empty() {
            options = options.username(&percent_decode(url.username()));
        }

        if let Some(password) = url.password() {
            options = options.password(&percent_decode(password));
        }

        // Add any query parameters as connection string options
        for (key, value) in url.query_pairs() {
            options = options.push_attribute(&key, &value);
        }

        Ok(options)
    }

    /// Establish a connection with these options
    pub fn connect(&self) -> Result<OdbcConnection> {
        OdbcConnection::establish(self)
    }
}

fn percent_decode(s: &str) -> String {
    percent_encoding::percent_decode_str(s)
        .decode_utf8_lossy()
        .into_owned()
}

/// Split a connection string on the `;` separating attributes.
///
/// A value opened with `{` runs to the matching `}`; inside it `}}` stands for
/// a literal `}` and `;` does not separate.
fn split_attributes(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_braces = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if !in_braces && i > 0 && bytes[i - 1] == b'=' => in_braces = true,
            b'}' if in_braces => {
                if bytes.get(i + 1) == Some(&b'}') {
                    i += 1;
                } else {
                    in_braces = false;
                }
            }
            b';' if !in_braces => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&s[start..]);
    parts
}

impl FromStr for OdbcConnectOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with("odbc://") {
            let url = Url::parse(s).map_err(|e| Error::Configuration(e.to_string()))?;
            Self::from_url(&url)
        } else if let Some(conn_str) = s.strip_prefix("odbc:") {
            Ok(Self::new(conn_str))
        } else if s.is_empty() {
            Err(Error::Configuration("empty connection string".into()))
        } else {
            // Assume it's a raw ODBC connection string
            Ok(Self::new(s))
        }
    }
}
