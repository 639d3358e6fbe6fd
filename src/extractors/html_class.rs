use super::{Extractor, Page};
use crate::error::ReportError;
use crate::model::{Instructions, RecipeRecord, StepItem};
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Fallback extractor reading the page layout: the first `h1`, and the first
/// ingredient and instruction containers found by class name.
pub struct HtmlClassExtractor;

/// Case-insensitive substrings marking an ingredients container.
const INGREDIENT_PATTERNS: &[&str] = &["ingredient", "ingredients"];

/// Case-insensitive substrings marking an instructions container.
const INSTRUCTION_PATTERNS: &[&str] = &["instruction", "directions", "step"];

/// Shorter instruction candidates are labels or navigation, not steps.
const MIN_INSTRUCTION_CHARS: usize = 10;

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First element in document order whose class attribute contains one of `patterns`.
fn find_container<'a>(document: &'a Html, patterns: &[&str]) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| {
            element.value().attr("class").is_some_and(|class| {
                let class = class.to_ascii_lowercase();
                patterns.iter().any(|pattern| class.contains(pattern))
            })
        })
}

/// Trimmed text of the first `h1`. A blank heading still yields a name.
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1").ok()?;
    document.select(&selector).next().map(element_text)
}

fn extract_ingredients(document: &Html) -> Vec<String> {
    let Some(container) = find_container(document, INGREDIENT_PATTERNS) else {
        return Vec::new();
    };
    let Ok(li_selector) = Selector::parse("li") else {
        return Vec::new();
    };
    container
        .select(&li_selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

fn extract_instructions(document: &Html) -> Vec<StepItem> {
    let Some(container) = find_container(document, INSTRUCTION_PATTERNS) else {
        return Vec::new();
    };
    let Ok(item_selector) = Selector::parse("li, p") else {
        return Vec::new();
    };
    container
        .select(&item_selector)
        .map(element_text)
        .filter(|text| text.chars().count() > MIN_INSTRUCTION_CHARS)
        .map(StepItem::PlainText)
        .collect()
}

impl Extractor for HtmlClassExtractor {
    fn parse(&self, page: &Page) -> Result<RecipeRecord, ReportError> {
        debug!("Attempting to extract recipe using HTML class matchers");
        let document = &page.document;

        let name = extract_title(document);
        let ingredients = extract_ingredients(document);
        let instructions = extract_instructions(document);

        debug!("Recipe name: {:?}", name);
        debug!("Ingredients count: {}", ingredients.len());
        debug!("Instructions count: {}", instructions.len());

        let record = RecipeRecord {
            name,
            ingredients,
            instructions: if instructions.is_empty() {
                None
            } else {
                Some(Instructions::Flat(instructions))
            },
            ..Default::default()
        };

        if record.is_empty() {
            return Err(ReportError::NoRecipeFound);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_container_is_case_insensitive() {
        let document = Html::parse_document(
            r#"<div class="Recipe-INGREDIENTS-list"><ul><li>x</li></ul></div>"#,
        );
        let container = find_container(&document, INGREDIENT_PATTERNS).unwrap();
        assert_eq!(container.value().name(), "div");
    }

    #[test]
    fn test_find_container_takes_first_in_document_order() {
        let document = Html::parse_document(
            r#"
            <section class="steps-outer">
                <div class="instructions-inner"><p>Inner paragraph text</p></div>
            </section>
            "#,
        );
        let container = find_container(&document, INSTRUCTION_PATTERNS).unwrap();
        assert_eq!(container.value().name(), "section");
    }

    #[test]
    fn test_blank_title_still_counts() {
        let document = Html::parse_document("<h1>   </h1>");
        assert_eq!(extract_title(&document), Some(String::new()));

        let document = Html::parse_document("<h2>Not a title</h2>");
        assert_eq!(extract_title(&document), None);
    }

    #[test]
    fn test_short_instruction_lines_are_dropped() {
        let document = Html::parse_document(
            r#"
            <ol class="directions">
                <li>Step 1</li>
                <li>0123456789</li>
                <li>01234567890</li>
            </ol>
            "#,
        );
        let steps = extract_instructions(&document);
        assert_eq!(steps, vec![StepItem::PlainText("01234567890".to_string())]);
    }
}
