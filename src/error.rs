pub use thirtyfour::error::WebDriverError;

/// Convenience alias used throughout this crate.
pub type VaadinResult<T> = Result<T, VaadinError>;

/// Errors raised by the Vaadin extensions.
///
/// Failures of the underlying WebDriver session are wrapped unchanged so that
/// callers can still match on the original `WebDriverError`.
#[derive(Debug, thiserror::Error)]
pub enum VaadinError {
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),
    #[error("failed to decode script result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timed out waiting for Vaadin to settle: {0}")]
    Timeout(String),
    #[error("locator '{0}' does not contain the '::' separator")]
    MissingSeparator(String),
    #[error("no client registered for application id '{0}'")]
    UnknownClient(String),
    #[error("an error occurred when locating element for {locator}: {source}")]
    Locate {
        locator: String,
        #[source]
        source: Box<VaadinError>,
    },
    #[error("unrecognised locator type: '{0}'")]
    UnknownLocatorType(String),
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("invalid coordinate string: '{0}'")]
    InvalidCoordinates(String),
    #[error("invalid key sequence: '{0}'")]
    InvalidKeySequence(String),
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),
    #[error("script error: {0}")]
    Script(String),
}

impl VaadinError {
    pub(crate) fn locate(locator: &str, source: VaadinError) -> Self {
        VaadinError::Locate {
            locator: locator.to_string(),
            source: Box::new(source),
        }
    }
}
