//! Log setup for the API server.
//!
//! Development gets pretty, line-numbered output. Production gets flat JSON
//! events carrying the current span fields (request id, user id, outcome).
//! `RUST_LOG` overrides the default filter in both modes.

use tracing_subscriber::{
    EnvFilter, Layer,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::Environment;

const DEVELOPMENT_FILTER: &str = "debug,sp_api=debug,tower_http=debug,sqlx=warn";
const PRODUCTION_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Install the global subscriber for `env`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(env: Environment) -> Result<(), TryInitError> {
    let default = if env.is_development() {
        DEVELOPMENT_FILTER
    } else {
        PRODUCTION_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let fmt_layer = if env.is_development() {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .flatten_event(true)
            .with_target(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()?;

    tracing::info!(environment = ?env, "Tracing initialized");
    Ok(())
}
