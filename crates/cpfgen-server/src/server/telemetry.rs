//! Log output for the server.
//!
//! Events are written to the console through `tracing_subscriber::fmt`. The
//! filter comes from `RUST_LOG` when set, otherwise `info` (or `debug` in
//! debug mode). Debug mode also switches to the multi-line pretty format.
//!
//! ```bash
//! RUST_LOG=cpfgen_server=trace,tower_http=debug cargo run -p cpfgen-server
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry(debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "info" };

    let pretty = debug.then(|| {
        fmt::layer()
            .with_thread_ids(true)
            .with_line_number(true)
            .with_target(false)
            .with_timer(fmt::time::ChronoLocal::rfc_3339())
            .with_file(true)
            .pretty()
    });
    let compact = (!debug).then(|| {
        fmt::layer()
            .with_line_number(true)
            .with_timer(fmt::time::ChronoLocal::rfc_3339())
            .compact()
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(pretty)
        .with(compact)
        .try_init()?;

    Ok(())
}
