//! Application initialization and resource setup.
//!
//! Sets up logging, the selector table and the browser session shared by
//! every query of a run.

mod logger;

use log::{debug, info};

use crate::browser::HttpSession;
use crate::config::{Config, Selectors};
use crate::error_handling::InitializationError;

pub use logger::init_logger_with;

/// Opens the browser session used for the whole run.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the underlying client
/// cannot be built.
pub fn init_session(config: &Config) -> Result<HttpSession, InitializationError> {
    let session = HttpSession::new(&config.user_agent, config.navigation_retries)?;
    debug!(
        "Browser session ready (user agent: {}, navigation retries: {})",
        config.user_agent, config.navigation_retries
    );
    Ok(session)
}

/// Resolves the selector table: the `--selectors-file` override if given,
/// otherwise the built-in defaults.
///
/// # Errors
///
/// Returns `InitializationError::SelectorFileError` if the file cannot be read
/// or parsed.
pub fn init_selectors(config: &Config) -> Result<Selectors, InitializationError> {
    match &config.selectors_file {
        Some(path) => {
            let selectors = Selectors::from_json_file(path)?;
            info!("Loaded selector overrides from {}", path.display());
            Ok(selectors)
        }
        None => Ok(config.selectors.clone()),
    }
}
