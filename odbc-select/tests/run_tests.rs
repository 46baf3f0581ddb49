//! End-to-end tests of the one-shot run.
//!
//! Tests marked `#[ignore]` need a data source in `DATABASE_URL`.

use odbc_select::{Config, DEFAULT_QUERY, run};

/// Get the connection string from environment or use default for local dev
fn get_connection_string() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        "Driver={ODBC Driver 18 for SQL Server};Server=mssql,1433;Database=master;Uid=sa;Pwd=YourStrong@Passw0rd;TrustServerCertificate=yes".to_string()
    })
}

fn config(query: &str) -> Config {
    Config {
        connect_options: get_connection_string().parse().expect("valid connection string"),
        query: query.to_string(),
    }
}

fn run_to_string(config: &Config) -> (usize, String) {
    let mut out = Vec::new();
    let printed = run(config, &mut out).expect("run should succeed");
    (printed, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_run_without_data_source_fails_cleanly() {
    let config = Config {
        connect_options: "DSN=odbc_select_no_such_dsn;UID=u;PWD=secret"
            .parse()
            .expect("valid connection string"),
        query: DEFAULT_QUERY.to_string(),
    };

    let mut out = Vec::new();
    let err = run(&config, &mut out).expect_err("unknown DSN must fail");
    assert!(out.is_empty(), "nothing is printed on failure");

    let chain = format!("{:#}", err);
    assert!(chain.contains("could not open ODBC connection"));
    assert!(!chain.contains("secret"));
}

#[test]
fn test_default_query() {
    assert_eq!(Config::default().query, "SELECT * FROM your_table");
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_prints_one_line_per_row() {
    let config = config("SELECT 1 AS n UNION ALL SELECT 2 UNION ALL SELECT 3");
    let (printed, text) = run_to_string(&config);
    assert_eq!(printed, 3);
    assert_eq!(text, "(1)\n(2)\n(3)\n");
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_single_row() {
    let config = config("SELECT 42 AS answer, 'x' AS letter");
    let (printed, text) = run_to_string(&config);
    assert_eq!(printed, 1);
    assert_eq!(text, "(42, \"x\")\n");
}

#[test]
#[ignore = "requires an ODBC data source in DATABASE_URL"]
fn test_empty_table_prints_nothing() {
    let config = config("SELECT 1 AS n WHERE 1 = 0");
    let (printed, text) = run_to_string(&config);
    assert_eq!(printed, 0);
    assert!(text.is_empty());
}
