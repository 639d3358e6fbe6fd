use serde::Serialize;

/// Unified recipe produced by either extraction path.
///
/// Text fields hold source text as found on the page; entity decoding and
/// duration phrasing happen when the report is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw ISO 8601 duration token, e.g. `PT15M`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    /// First value of the source yield, as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Instructions>,
}

impl RecipeRecord {
    /// True when no field carries any content.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.prep_time.is_none()
            && self.cook_time.is_none()
            && self.total_time.is_none()
            && self.servings.is_none()
            && self.ingredients.is_empty()
            && self.instructions.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "camelCase")]
pub enum Instructions {
    /// Instructions given as one free-form string, rendered unnumbered
    Text(String),
    Flat(Vec<StepItem>),
    Sectioned(Vec<Section>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepItem {
    PlainText(String),
    Step { text: String },
}

impl StepItem {
    pub fn text(&self) -> &str {
        match self {
            StepItem::PlainText(text) => text,
            StepItem::Step { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub steps: Vec<StepItem>,
}
