use crate::error::ReportError;
use crate::model::RecipeRecord;
use scraper::{Html, Selector};

mod html_class;
mod json_ld;

pub use html_class::HtmlClassExtractor;
pub use json_ld::{is_recipe, locate_recipe, JsonLdExtractor};

/// One page snapshot: the text of every JSON-LD block plus the parsed DOM.
pub struct Page {
    pub blocks: Vec<String>,
    pub document: Html,
}

impl Page {
    /// Parse markup and collect its `application/ld+json` blocks in document order.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let blocks = match Selector::parse(r#"script[type="application/ld+json"]"#) {
            Ok(selector) => document
                .select(&selector)
                .map(|script| script.text().collect::<String>())
                .collect(),
            Err(_) => Vec::new(),
        };
        Self { blocks, document }
    }
}

pub trait Extractor {
    fn parse(&self, page: &Page) -> Result<RecipeRecord, ReportError>;
}

/// The extractors in the order they are tried.
pub fn default_extractors() -> Vec<Box<dyn Extractor>> {
    vec![Box::new(JsonLdExtractor), Box::new(HtmlClassExtractor)]
}
