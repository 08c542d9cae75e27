use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() {
    init_tracing();
    branch_sweep::app::cli::run();
}

/// Diagnostics go to stderr so they never mix with workflow commands on stdout.
fn init_tracing() {
    let default_filter = if std::env::var("RUNNER_DEBUG").as_deref() == Ok("1") {
        format!("warn,{}=debug", env!("CARGO_CRATE_NAME"))
    } else {
        "warn".to_string()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
