use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives for the CLI and core crates.
fn log_directives(quiet: bool) -> [&'static str; 2] {
    match quiet {
        true => ["hwnd_pilot=error", "hwnd_pilot_core=error"],
        false => ["hwnd_pilot=info", "hwnd_pilot_core=info"],
    }
}

/// Install the JSON subscriber on stderr so stdout stays clean for command output.
///
/// `quiet` limits both crates to error-level events; otherwise info and
/// above are emitted. `RUST_LOG` directives are applied first.
pub fn init_logging(quiet: bool) {
    let filter = log_directives(quiet)
        .into_iter()
        .fold(EnvFilter::from_default_env(), |filter, directive| {
            filter.add_directive(directive.parse().expect("Invalid log directive"))
        });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
