use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

use fib_bench::{bench, Error};

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<(), Error> {
    // Diagnostics go to stderr, stdout carries only the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    let report = bench::run();

    bench::write_report(&mut io::stdout().lock(), &report)
}
