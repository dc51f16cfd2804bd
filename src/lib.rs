pub mod barcode;
pub mod config;
pub mod errors;
pub mod export;
pub mod session;
pub mod store;
pub mod types;
pub mod utils;

#[cfg(feature = "gui")]
pub mod entry_display;
#[cfg(feature = "gui")]
pub mod event_handlers;
#[cfg(feature = "gui")]
pub mod ui_setup;

#[cfg(feature = "gui")]
pub mod ui {
    slint::include_modules!();
}

/// Installs the global tracing subscriber. `RUST_LOG` wins over `fallback`.
pub fn init_logging(fallback: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
