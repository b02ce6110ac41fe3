use std::io::{stderr, IsTerminal};

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

pub fn setup_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_ansi(stderr().is_terminal())
        .with_writer(stderr) // Command output goes to stdout, logs to stderr
        .init();
}
