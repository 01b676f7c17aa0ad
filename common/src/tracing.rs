use std::{env, io::Stdout};

use tracing_subscriber::{fmt::Layer, prelude::*, EnvFilter, Layer as TracingLayer};

/// Initializes a new tracing configuration.
///
/// - `rust_log`: Used to set the RUST_LOG environment variable if it is not provided. You can set the default log level (e.g. `warn`),
///   but you can also configure module-specific log levels using comma-separated entries formatted like `path::to::module=log_level`, e.g.
///   `warn,roles_api=debug`
///
/// Setting the `JSON_LOGS` environment variable switches the output to the
/// JSON format used in production.
pub fn init_tracing(rust_log: &str) {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", rust_log);
    }

    let json_logs = env::var_os("JSON_LOGS").is_some();

    // Conditionally output logs as JSON
    if json_logs {
        let layer = Layer::new()
            .with_writer(std::io::stdout as fn() -> Stdout)
            .with_target(true)
            .json()
            .flatten_event(true)
            .with_span_list(false)
            .with_filter(EnvFilter::from_default_env());

        tracing_subscriber::registry().with(layer).init();
    } else {
        let layer = Layer::new()
            .with_writer(std::io::stdout as fn() -> Stdout)
            .with_target(true)
            .with_filter(EnvFilter::from_default_env());

        tracing_subscriber::registry().with(layer).init();
    }
}
