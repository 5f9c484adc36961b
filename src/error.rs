use thiserror::Error;

/// Errors raised while locating, scanning or exporting a list
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The browser is not showing the Watch Later list
    #[error("Not the Watch Later page. Open {expected_url} and try again.")]
    WrongPage { expected_url: String },

    /// Anything that went wrong inside the scroll-and-scan loop
    #[error("{0}")]
    Loop(String),

    /// Connecting to or driving the WebDriver session failed
    #[error("WebDriver error: {0}")]
    WebDriver(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

impl From<fantoccini::error::CmdError> for ExtractError {
    fn from(e: fantoccini::error::CmdError) -> Self {
        ExtractError::Loop(e.to_string())
    }
}
