pub mod config;
pub mod error;
pub mod models;
pub mod localization;
pub mod advisory;
pub mod report;
pub mod session;

use tracing_subscriber::EnvFilter;

pub use error::{LocaleError, RenderError, SessionError};
pub use models::{AdviceCategory, Gender, LabelKey, Language, SessionForm, SessionInput};
pub use session::{SessionOrchestrator, SessionOutcome};

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
