//! Global tracing subscriber setup.

use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::formatter::FrameFormatter;

static SUBSCRIBER_INIT: Once = Once::new();

/// The filter used when `RUST_LOG` is unset: info for this crate, warn elsewhere.
pub fn default_filter() -> String {
    format!("warn,{name}=info", name = env!("CARGO_CRATE_NAME"))
}

/// Installs the global subscriber. Later calls do nothing.
///
/// `RUST_LOG` overrides the default levels.
pub fn setup_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(true).event_format(FrameFormatter))
            .with(filter)
            .with(ErrorLayer::default())
            .try_init();

        if let Err(e) = result {
            eprintln!("Could not install the tracing subscriber: {e}");
        }
    });
}
