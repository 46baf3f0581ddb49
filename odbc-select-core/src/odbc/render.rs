//! Textual rendering of rows.
//!
//! A row renders as `(1, "alice", NULL, 0xDEAD, true)` on exactly one line, so
//! a result set of N rows always produces N lines of output.

use crate::odbc::{DataTypeExt, OdbcRow, OdbcValue, OdbcValueData, Result};
use std::fmt::Write as _;
use std::io::Write;

/// Render `row` without a trailing newline.
///
/// Numeric values are printed as the driver formatted them, so DECIMAL and
/// NUMERIC keep every digit.
pub fn render_row(row: &OdbcRow) -> String {
    let mut line = String::from("(");
    for (i, value) in row.values().iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        push_field(&mut line, value);
    }
    line.push(')');
    line
}

/// Write a single row followed by a newline
pub fn write_row<W: Write + ?Sized>(out: &mut W, row: &OdbcRow) -> Result<()> {
    writeln!(out, "{}", render_row(row))?;
    Ok(())
}

/// Write every row on its own line, in order, and return the number of lines
/// written.
pub fn print_rows<W: Write + ?Sized>(rows: &[OdbcRow], out: &mut W) -> Result<usize> {
    for row in rows {
        write_row(out, row)?;
    }
    out.flush()?;
    Ok(rows.len())
}

fn push_field(line: &mut String, value: &OdbcValue) {
    let data_type = value.type_info().data_type();
    match value.data() {
        OdbcValueData::Null => line.push_str("NULL"),
        OdbcValueData::Binary(bytes) => {
            line.push_str("0x");
            for b in bytes {
                let _ = write!(line, "{:02X}", b);
            }
        }
        OdbcValueData::Text(s) if data_type.is_bit() && matches!(s.trim(), "0" | "1") => {
            line.push_str(if s.trim() == "1" { "true" } else { "false" })
        }
        OdbcValueData::Text(s) if data_type.is_numeric() && !s.contains(['\n', '\r']) => {
            line.push_str(s.trim())
        }
        OdbcValueData::Text(s) => {
            let _ = write!(line, "{:?}", s);
        }
    }
}
