pub mod config;
pub mod duration;
pub mod error;
pub mod export;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod report;
pub mod sanitize;

use log::{debug, info};
use serde::Serialize;

pub use crate::config::Settings;
pub use crate::error::ReportError;
pub use crate::extractors::Page;
pub use crate::model::{Instructions, RecipeRecord, Section, StepItem};

use crate::fetchers::fetcher_for;

/// A successfully extracted recipe and its rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub report: String,
    pub record: RecipeRecord,
}

/// Extract the recipe on a page and render it.
///
/// JSON-LD structured data is tried first, then the page layout.
pub fn extract(page: &Page) -> Result<Extraction, ReportError> {
    for extractor in extractors::default_extractors() {
        match extractor.parse(page) {
            Ok(record) => {
                let report = report::render_report(&record);
                return Ok(Extraction { report, record });
            }
            Err(e) => debug!("Extractor did not find a recipe: {}", e),
        }
    }
    Err(ReportError::NoRecipeFound)
}

/// Parse `html` and run [`extract`] on it.
pub fn extract_from_html(html: &str) -> Result<Extraction, ReportError> {
    extract(&Page::parse(html))
}

/// Fetch a page from a URL or file path and extract its recipe.
pub async fn extract_from_location(
    location: &str,
    settings: &Settings,
) -> Result<Extraction, ReportError> {
    let fetcher = fetcher_for(location, settings)?;
    let html = fetcher.fetch(location).await?;
    info!("Fetched {} ({} bytes)", location, html.len());
    extract_from_html(&html)
}

/// Result envelope handed back to a host:
/// `{"success": true, "report": ..., "record": ...}` or `{"success": false, "error": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RecipeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Extraction, ReportError>> for ExtractionResponse {
    fn from(result: Result<Extraction, ReportError>) -> Self {
        match result {
            Ok(Extraction { report, record }) => ExtractionResponse {
                success: true,
                report: Some(report),
                record: Some(record),
                error: None,
            },
            Err(e) => ExtractionResponse {
                success: false,
                report: None,
                record: None,
                error: Some(e.to_string()),
            },
        }
    }
}
