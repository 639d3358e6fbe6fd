use super::{Extractor, Page};
use crate::error::ReportError;
use crate::model::{Instructions, RecipeRecord, Section, StepItem};
use crate::sanitize::clean_text;
use log::{debug, warn};
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

const RECIPE_TYPE: &str = "Recipe";
const SECTION_TYPE: &str = "HowToSection";

pub struct JsonLdExtractor;

/// Shape of an `@type` declaration.
enum TypeTag<'a> {
    Single(&'a str),
    Multiple(&'a [Value]),
    Other,
}

impl<'a> TypeTag<'a> {
    fn of(value: &'a Value) -> Self {
        match value.get("@type") {
            Some(Value::String(name)) => TypeTag::Single(name),
            Some(Value::Array(names)) => TypeTag::Multiple(names),
            _ => TypeTag::Other,
        }
    }

    fn declares(&self, type_name: &str) -> bool {
        match self {
            TypeTag::Single(name) => *name == type_name,
            TypeTag::Multiple(names) => names.iter().any(|name| name.as_str() == Some(type_name)),
            TypeTag::Other => false,
        }
    }
}

/// Whether a decoded JSON-LD value is an object typed as a schema.org Recipe.
pub fn is_recipe(value: &Value) -> bool {
    value.is_object() && TypeTag::of(value).declares(RECIPE_TYPE)
}

/// Container shape of one decoded JSON-LD block.
enum Container<'a> {
    Graph(&'a [Value]),
    Sequence(&'a [Value]),
    Single(&'a Value),
    Empty,
}

impl<'a> Container<'a> {
    fn classify(json_ld: &'a Value) -> Self {
        match json_ld.get("@graph") {
            Some(graph) if is_truthy(graph) => match graph {
                Value::Array(items) => Container::Graph(items),
                _ => Container::Empty,
            },
            _ => match json_ld {
                Value::Array(items) => Container::Sequence(items),
                _ => Container::Single(json_ld),
            },
        }
    }

    fn find_recipe(&self) -> Option<&'a Value> {
        match self {
            Container::Graph(items) | Container::Sequence(items) => {
                items.iter().find(|item| is_recipe(item))
            }
            Container::Single(value) => Some(*value).filter(|value| is_recipe(value)),
            Container::Empty => None,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Return the first Recipe object found in the given JSON-LD block texts.
///
/// Blocks that are not valid JSON are skipped. Scanning stops at the first match.
pub fn locate_recipe<S: AsRef<str>>(blocks: &[S]) -> Option<Value> {
    for (index, block) in blocks.iter().enumerate() {
        let json_ld = match serde_json::from_str::<Value>(block.as_ref()) {
            Ok(json_ld) => json_ld,
            Err(e) => {
                debug!("JsonLdExtractor: Failed to parse JSON-LD {}: {}", index, e);
                continue;
            }
        };

        let container = Container::classify(&json_ld);
        if let Some(recipe) = container.find_recipe() {
            debug!("JsonLdExtractor: Found Recipe in JSON-LD {}", index);
            return Some(recipe.clone());
        }
        debug!("JsonLdExtractor: No recipe found in JSON-LD {}", index);
    }
    None
}

impl Extractor for JsonLdExtractor {
    fn parse(&self, page: &Page) -> Result<RecipeRecord, ReportError> {
        debug!(
            "JsonLdExtractor: Found {} JSON-LD script tags",
            page.blocks.len()
        );
        let recipe = locate_recipe(&page.blocks).ok_or(ReportError::NoRecipeFound)?;

        let record = match JsonLdRecipe::try_from(&recipe) {
            Ok(json_ld_recipe) => RecipeRecord::from(json_ld_recipe),
            Err(e) => {
                warn!("JsonLdExtractor: Recipe fields could not be read: {}", e);
                RecipeRecord::default()
            }
        };
        Ok(record)
    }
}

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    name: Option<TextValue>,
    description: Option<DescriptionType>,
    #[serde(rename = "prepTime")]
    prep_time: Option<TextValue>,
    #[serde(rename = "cookTime")]
    cook_time: Option<TextValue>,
    #[serde(rename = "totalTime")]
    total_time: Option<TextValue>,
    #[serde(rename = "recipeYield")]
    recipe_yield: Option<RecipeYield>,
    #[serde(rename = "recipeIngredient")]
    recipe_ingredient: Option<RecipeIngredients>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: Option<RecipeInstructions>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextValue {
    String(String),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct TextObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptionType {
    String(String),
    Object(TextObject),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeYield {
    String(String),
    Number(serde_json::Number),
    Array(Vec<Value>),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeIngredients {
    Single(String),
    Multiple(Vec<TextValue>),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    String(String),
    Multiple(Vec<InstructionEntry>),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionEntry {
    String(String),
    // arrays carry no step text of their own
    List(Vec<IgnoredAny>),
    Object(HowTo),
    Other(IgnoredAny),
}

/// A HowToStep, HowToSection or any other step-like object.
#[derive(Debug, Deserialize)]
struct HowTo {
    #[serde(rename = "@type")]
    kind: Option<TextValue>,
    name: Option<TextValue>,
    text: Option<TextValue>,
    #[serde(rename = "itemListElement")]
    item_list_element: Option<StepList>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StepList {
    Multiple(Vec<InstructionEntry>),
    Other(IgnoredAny),
}

impl TryFrom<&Value> for JsonLdRecipe {
    type Error = serde_json::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value.clone())
    }
}

impl TextValue {
    fn into_text(self) -> Option<String> {
        match self {
            TextValue::String(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

fn text_of(value: Option<TextValue>) -> Option<String> {
    value.and_then(TextValue::into_text)
}

impl HowTo {
    fn is_section(&self) -> bool {
        matches!(&self.kind, Some(TextValue::String(kind)) if kind == SECTION_TYPE)
    }

    /// `text` when present, otherwise `name`.
    fn resolved_text(self) -> Option<String> {
        text_of(self.text).or_else(|| text_of(self.name))
    }

    fn into_step(self) -> Option<StepItem> {
        self.resolved_text().map(|text| StepItem::Step { text })
    }

    /// Only objects inside a section carry step text.
    fn into_section(self) -> Section {
        let steps = match self.item_list_element {
            Some(StepList::Multiple(entries)) => entries
                .into_iter()
                .filter_map(|entry| match entry {
                    InstructionEntry::Object(how_to) => how_to.into_step(),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        Section {
            name: text_of(self.name),
            steps,
        }
    }
}

fn step_item(entry: InstructionEntry) -> Option<StepItem> {
    match entry {
        InstructionEntry::String(text) if !text.is_empty() => Some(StepItem::PlainText(text)),
        InstructionEntry::Object(how_to) => how_to.into_step(),
        _ => None,
    }
}

fn convert_instructions(instructions: RecipeInstructions) -> Option<Instructions> {
    let entries = match instructions {
        RecipeInstructions::String(text) if !text.is_empty() => {
            return Some(Instructions::Text(text))
        }
        RecipeInstructions::Multiple(entries) => entries,
        _ => return None,
    };

    let sectioned = entries
        .iter()
        .any(|entry| matches!(entry, InstructionEntry::Object(how_to) if how_to.is_section()));

    if !sectioned {
        let steps: Vec<StepItem> = entries.into_iter().filter_map(step_item).collect();
        return if steps.is_empty() {
            None
        } else {
            Some(Instructions::Flat(steps))
        };
    }

    // Steps outside any section keep their position as unnamed sections
    let mut sections = Vec::new();
    let mut loose = Vec::new();
    for entry in entries {
        match entry {
            InstructionEntry::Object(how_to) if how_to.is_section() => {
                if !loose.is_empty() {
                    sections.push(Section {
                        name: None,
                        steps: std::mem::take(&mut loose),
                    });
                }
                sections.push(how_to.into_section());
            }
            other => loose.extend(step_item(other)),
        }
    }
    if !loose.is_empty() {
        sections.push(Section {
            name: None,
            steps: loose,
        });
    }
    Some(Instructions::Sectioned(sections))
}

/// Whole floats print without a fraction (`4.0` -> `"4"`).
fn number_text(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            (value as i64).to_string()
        }
        _ => number.to_string(),
    }
}

fn convert_servings(recipe_yield: RecipeYield) -> Option<String> {
    let servings = match recipe_yield {
        RecipeYield::String(text) => text,
        // a bare zero yield means none given
        RecipeYield::Number(number) if number.as_f64() == Some(0.0) => return None,
        RecipeYield::Number(number) => number_text(&number),
        // only the first candidate is kept, alternates are dropped
        RecipeYield::Array(values) => match values.into_iter().next()? {
            Value::String(text) => text,
            Value::Number(number) => number_text(&number),
            _ => return None,
        },
        RecipeYield::Other(_) => return None,
    };
    if servings.is_empty() {
        None
    } else {
        Some(servings)
    }
}

fn convert_ingredients(ingredients: RecipeIngredients) -> Vec<String> {
    let raw = match ingredients {
        RecipeIngredients::Single(text) => vec![text],
        RecipeIngredients::Multiple(values) => {
            values.into_iter().filter_map(TextValue::into_text).collect()
        }
        RecipeIngredients::Other(_) => Vec::new(),
    };
    raw.into_iter()
        .filter(|ingredient| !clean_text(ingredient).trim().is_empty())
        .collect()
}

impl From<JsonLdRecipe> for RecipeRecord {
    fn from(json_ld_recipe: JsonLdRecipe) -> Self {
        RecipeRecord {
            name: text_of(json_ld_recipe.name),
            description: json_ld_recipe.description.and_then(|desc| match desc {
                DescriptionType::String(text) => Some(text),
                DescriptionType::Object(obj) => Some(obj.text),
                DescriptionType::Other(_) => None,
            })
            .filter(|text| !text.is_empty()),
            prep_time: text_of(json_ld_recipe.prep_time),
            cook_time: text_of(json_ld_recipe.cook_time),
            total_time: text_of(json_ld_recipe.total_time),
            servings: json_ld_recipe.recipe_yield.and_then(convert_servings),
            ingredients: json_ld_recipe
                .recipe_ingredient
                .map(convert_ingredients)
                .unwrap_or_default(),
            instructions: json_ld_recipe
                .recipe_instructions
                .and_then(convert_instructions),
        }
    }
}
