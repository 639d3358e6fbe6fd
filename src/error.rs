use thiserror::Error;

/// Errors that can occur while producing a recipe report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Neither the structured data nor the page layout yielded a recipe
    #[error("No recipe found on this page")]
    NoRecipeFound,

    /// Failed to fetch the page from a URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Fetching {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to read a page from disk or write a report to disk
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Invalid arguments or input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
