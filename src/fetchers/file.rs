use super::PageFetcher;
use crate::error::ReportError;
use async_trait::async_trait;
use log::debug;

/// Reads saved pages from the local file system.
pub struct FileFetcher;

#[async_trait]
impl PageFetcher for FileFetcher {
    async fn fetch(&self, path: &str) -> Result<String, ReportError> {
        debug!("FileFetcher: reading {}", path);
        Ok(tokio::fs::read_to_string(path).await?)
    }
}
