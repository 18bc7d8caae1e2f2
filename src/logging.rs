//! Logger setup
//!
//! Logging goes through the `log` facade. The logger is built exactly once,
//! at process start, by [`init`]; library code never configures it.

use std::io::Write;

use chrono::Local;
use log::SetLoggerError;

/// Default filter: our own records at `level`, dependencies at `warn`
#[must_use]
pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("warn,statsbot={level}")
}

/// Install the process logger
///
/// `RUST_LOG`, when set, overrides the default filter. Fails if a logger is
/// already installed.
pub fn init(debug: bool) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter(debug)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                Local::now().format("%Y/%m/%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()
}
