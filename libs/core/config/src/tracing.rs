use crate::Environment;
use tracing_subscriber::{prelude::*, EnvFilter};

const PRODUCTION_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";
const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sea_orm=info,sqlx=info";

/// Install color-eyre for `main`.
///
/// Shows the error location, hides the environment section. Repeated calls
/// are no-ops.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    }
}

/// Initialize the global subscriber.
///
/// Production writes flattened JSON lines without targets; development
/// pretty-prints. Both carry `tracing_error::ErrorLayer` so eyre reports
/// include span traces. `RUST_LOG` replaces [`default_filter`].
///
/// Only the first call installs a subscriber.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let (json, pretty) = if environment.is_production() {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true);
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .pretty();
        (None, Some(layer))
    };

    let installed = tracing_subscriber::registry()
        .with(json)
        .with(pretty)
        .with(tracing_error::ErrorLayer::default())
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(?environment, "Tracing initialized");
    } else {
        tracing::debug!("Tracing already initialized");
    }
}
