mod file;
mod request;

pub use file::FileFetcher;
pub use request::RequestFetcher;

use crate::config::Settings;
use crate::error::ReportError;
use async_trait::async_trait;

/// Source of page markup: the web or the local disk.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, ReportError>;
}

pub fn is_url(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick the fetcher matching `location`: HTTP(S) URLs go over the network,
/// anything else is read as a file path.
pub fn fetcher_for(location: &str, settings: &Settings) -> Result<Box<dyn PageFetcher>, ReportError> {
    if is_url(location) {
        Ok(Box::new(RequestFetcher::new(settings)?))
    } else {
        Ok(Box::new(FileFetcher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/recipe"));
        assert!(is_url("HTTP://example.com"));
        assert!(!is_url("recipes/pie.html"));
        assert!(!is_url("/tmp/https.html"));
    }
}
