//! Cursor over an ODBC connection.

use crate::odbc::{
    DataTypeExt, Error, OdbcColumn, OdbcConnection, OdbcDatabaseError, OdbcRow, OdbcTypeInfo,
    OdbcValue, OdbcValueData, Result,
};
use odbc_api::handles::StatementImpl;
use odbc_api::{Cursor, CursorImpl, CursorRow, ResultSetMetadata};
use std::sync::Arc;
use std::time::Instant;

type DriverCursor<'c> = CursorImpl<StatementImpl<'c>>;

/// Executes statements on a borrowed connection and fetches their rows.
///
/// At most one result set is active at a time; executing again replaces it.
pub struct OdbcCursor<'c> {
    conn: &'c OdbcConnection,
    active: Option<DriverCursor<'c>>,
    columns: Arc<[OdbcColumn]>,
    // Reused between fields to avoid an allocation per value
    buf: Vec<u8>,
}

impl std::fmt::Debug for OdbcCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdbcCursor")
            .field("active", &self.active.is_some())
            .field("columns", &self.columns.len())
            .finish()
    }
}

impl<'c> OdbcCursor<'c> {
    pub(crate) fn new(conn: &'c OdbcConnection) -> Self {
        Self {
            conn,
            active: None,
            columns: Arc::from(Vec::new()),
            buf: Vec::new(),
        }
    }

    /// Execute `sql` without parameters.
    ///
    /// If the statement produces a result set it becomes the active one and its
    /// columns are described; otherwise no result set is active afterwards.
    pub fn execute(&mut self, sql: &str) -> Result<()> {
        self.active = None;
        self.columns = Arc::from(Vec::new());

        let started = Instant::now();
        let result = self.conn.inner.execute(sql, (), None);
        self.log_statement(sql, started);

        let map_err = |e| Error::Execute {
            sql: sql.to_string(),
            source: OdbcDatabaseError::new(e),
        };

        if let Some(mut cursor) = result.map_err(map_err)? {
            self.columns = describe_columns(&mut cursor).map_err(map_err)?;
            self.active = Some(cursor);
        }
        Ok(())
    }

    /// Columns of the active result set; empty when none is active
    pub fn columns(&self) -> &[OdbcColumn] {
        &self.columns
    }

    /// Whether a result set is active
    pub fn has_result_set(&self) -> bool {
        self.active.is_some()
    }

    /// Fetch the next row, or `None` once the result set is exhausted
    pub fn fetch_one(&mut self) -> Result<Option<OdbcRow>> {
        let cursor = self.active.as_mut().ok_or(Error::NoResultSet)?;
        read_row(cursor, &self.columns, &mut self.buf)
    }

    /// Fetch up to `n` rows
    pub fn fetch_many(&mut self, n: usize) -> Result<Vec<OdbcRow>> {
        let mut rows = Vec::with_capacity(n.min(1024));
        while rows.len() < n {
            match self.fetch_one()? {
                Some(row) => rows.push(row),
                None => break,
            }
        }
        Ok(rows)
    }

    /// Fetch every remaining row into memory, in driver order
    pub fn fetch_all(&mut self) -> Result<Vec<OdbcRow>> {
        let mut rows = Vec::new();
        while let Some(row) = self.fetch_one()? {
            rows.push(row);
        }
        log::debug!("fetched {} rows", rows.len());
        Ok(rows)
    }

    /// Release the statement handle
    pub fn close(self) {
        drop(self);
    }

    fn log_statement(&self, sql: &str, started: Instant) {
        let elapsed = started.elapsed();
        let options = &self.conn.options;
        let (slow_level, slow_after) = options.log_slow_statements;

        let level = if elapsed >= slow_after {
            slow_level.to_level()
        } else {
            options.log_statements.to_level()
        };

        if let Some(level) = level {
            log::log!(level, "executed `{}` in {:?}", sql, elapsed);
        }
    }
}

fn describe_columns(
    cursor: &mut DriverCursor<'_>,
) -> std::result::Result<Arc<[OdbcColumn]>, odbc_api::Error> {
    let num_cols = cursor.num_result_cols()?.max(0) as u16;

    let mut columns = Vec::with_capacity(num_cols as usize);
    for i in 1..=num_cols {
        let mut desc = odbc_api::ColumnDescription::default();
        cursor.describe_col(i, &mut desc)?;

        let name = cursor.col_name(i)?;
        columns.push(OdbcColumn::new(name, OdbcTypeInfo::new(desc.data_type)));
    }
    Ok(columns.into())
}

fn read_row(
    cursor: &mut DriverCursor<'_>,
    columns: &Arc<[OdbcColumn]>,
    buf: &mut Vec<u8>,
) -> Result<Option<OdbcRow>> {
    let Some(mut row) = cursor.next_row().map_err(fetch_error)? else {
        return Ok(None);
    };

    let mut values = Vec::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        let data = read_field(&mut row, i as u16 + 1, column.type_info, buf)?;
        values.push(OdbcValue::new(data, column.type_info));
    }
    Ok(Some(OdbcRow::new(columns.clone(), values)))
}

fn read_field(
    row: &mut CursorRow<'_>,
    col: u16,
    type_info: OdbcTypeInfo,
    buf: &mut Vec<u8>,
) -> Result<OdbcValueData> {
    buf.clear();
    if type_info.data_type().is_binary() {
        let has_value = row.get_binary(col, buf).map_err(fetch_error)?;
        Ok(if has_value {
            OdbcValueData::Binary(buf.clone())
        } else {
            OdbcValueData::Null
        })
    } else {
        let has_value = row.get_text(col, buf).map_err(fetch_error)?;
        Ok(if has_value {
            OdbcValueData::Text(String::from_utf8_lossy(buf).into_owned())
        } else {
            OdbcValueData::Null
        })
    }
}

fn fetch_error(e: odbc_api::Error) -> Error {
    Error::Fetch(OdbcDatabaseError::new(e))
}
