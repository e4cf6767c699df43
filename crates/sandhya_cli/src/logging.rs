use tracing_subscriber::EnvFilter;

/// The binary plus the library crates that emit spans and events: timezone
/// lookups (`trace`), solar geometry (`debug`), window derivation (`trace`)
/// and calendar upserts (`info` summary, `debug` per key).
const LOG_TARGETS: &[&str] = &[
    "sandhya",
    "sandhya_time",
    "sandhya_solar",
    "sandhya_vedic",
    "sandhya_calendar",
];

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber.
///
/// `-v` shows the per-day sync summary, `-vv` the solar geometry, `-vvv`
/// every resolved offset and window edge. A set `RUST_LOG` replaces these
/// directives entirely. Stdout stays reserved for command output.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
