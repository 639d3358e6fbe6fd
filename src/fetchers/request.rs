use super::PageFetcher;
use crate::config::Settings;
use crate::error::ReportError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(settings: &Settings) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for RequestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ReportError> {
        debug!("RequestFetcher: GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        debug!("RequestFetcher: received {} bytes", html.len());
        Ok(html)
    }
}
