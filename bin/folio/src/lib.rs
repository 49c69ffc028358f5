//! Folio CLI Library
//!
//! Command implementations for the `folio` binary, which validates the YAML
//! content of a portfolio site before it is rendered.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, validate)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use folio::cmd;
//!
//! // Validate every configured content file
//! cmd::check::run(Path::new("folio.toml"), false).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use folio_content::{Config, ContentKind, SiteContent};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Load the configuration with environment overrides.
///
/// A missing file is not an error: defaults apply, overridden by any
/// `FOLIO__` variables.
pub fn load_config(path: &std::path::Path) -> folio_content::Result<Config> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "configuration file not found, using defaults");
    }
    Config::load_with_env(path)
}
