//! odbc-select - run one query against an ODBC data source and print the rows.

use odbc_select::{Config, run};
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. Records from the `log` facade are captured too.
fn init_logging() {
    let filter = EnvFilter::new("warn");

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::default();
    log::debug!("configuration: {:?}", config);

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())?;
    Ok(())
}
