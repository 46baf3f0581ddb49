//! Connection and cursor tests.
//!
//! Tests marked `#[ignore]` need a reachable data source. Point `DATABASE_URL`
//! at one (any ODBC connection string) and run them with
//! `cargo test -- --ignored`.

use odbc_select_core::odbc::{
    Error, OdbcConnectOptions, OdbcConnection, OdbcValueData, print_rows,
};

/// Get the connection string from environment or use default for local dev
fn get_connection_string() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        "Driver={ODBC Driver 18 for SQL Server};Server=mssql,1433;Database=master;Uid=sa;Pwd=YourStrong@Passw0rd;TrustServerCertificate=yes".to_string()
    })
}

/// Helper to establish a connection for tests
fn connect() -> OdbcConnection {
    let options: OdbcConnectOptions = get_connection_string().parse().expect("valid connection string");
    OdbcConnection::establish(&options).expect("Failed to connect to database")
}

#[test]
fn test_connect_to_unknown_dsn_fails() {
    let options = OdbcConnectOptions::from_dsn("odbc_select_no_such_dsn")
        .username("nobody")
        .password("hunter2");

    let err = OdbcConnection::establish(&options).expect_err("unknown DSN must not connect");
    match &err {
        Error::Connect { connection_string, .. } => {
            assert!(connection_string.contains("PWD=***"));
            assert!(!connection_string.contains("hunter2"));
        }
        other => panic!("expected a connect error, got {:?}", other),
    }
    assert!(err.as_database_error().is_some());
    assert!(!err.to_string().contains("hunter2"));
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_connection_establish_and_close() {
    let conn = connect();
    conn.close();
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_fetch_before_execute_fails() {
    let conn = connect();
    let mut cursor = conn.cursor();
    assert!(!cursor.has_result_set());
    assert!(matches!(cursor.fetch_all(), Err(Error::NoResultSet)));
    assert!(matches!(cursor.fetch_one(), Err(Error::NoResultSet)));
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_select_single_row() {
    let conn = connect();
    let mut cursor = conn.cursor();
    cursor.execute("SELECT 1 AS one, 'abc' AS txt").expect("query should run");

    let names: Vec<&str> = cursor.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["one", "txt"]);

    let rows = cursor.fetch_all().expect("rows should fetch");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_value(0).and_then(|v| v.as_str()), Some("1"));
    assert_eq!(rows[0].get_by_name("txt").and_then(|v| v.as_str()), Some("abc"));

    // exhausted
    assert!(cursor.fetch_one().expect("fetch after end").is_none());
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_null_values() {
    let conn = connect();
    let rows = conn.execute("SELECT NULL AS nothing").expect("query should run");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_value(0).map(|v| v.data()), Some(&OdbcValueData::Null));
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_fetch_many_in_chunks() {
    let conn = connect();
    let mut cursor = conn.cursor();
    cursor
        .execute("SELECT 1 UNION ALL SELECT 2 UNION ALL SELECT 3")
        .expect("query should run");

    let first = cursor.fetch_many(2).expect("first chunk");
    let rest = cursor.fetch_many(2).expect("second chunk");
    assert_eq!(first.len(), 2);
    assert_eq!(rest.len(), 1);
    assert!(cursor.fetch_many(2).expect("drained").is_empty());
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_empty_result_prints_nothing() {
    let conn = connect();
    let rows = conn.execute("SELECT 1 AS one WHERE 1 = 0").expect("query should run");
    assert!(rows.is_empty());

    let mut out = Vec::new();
    let printed = print_rows(&rows, &mut out).expect("print");
    assert_eq!(printed, 0);
    assert!(out.is_empty());
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_invalid_query_reports_sql() {
    let conn = connect();
    let mut cursor = conn.cursor();
    let err = cursor
        .execute("SELECT * FROM odbc_select_missing_table")
        .expect_err("missing table must fail");
    match err {
        Error::Execute { sql, source } => {
            assert_eq!(sql, "SELECT * FROM odbc_select_missing_table");
            assert!(source.sqlstate().is_some());
        }
        other => panic!("expected an execute error, got {:?}", other),
    }
}
