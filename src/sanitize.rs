use html_escape::decode_html_entities;

/// Decode HTML character references (`&amp;`, `&#39;`, `&#x2F;`, ...) into plain text.
///
/// Markup is left as is; only entities are decoded, once.
pub fn clean_text(text: &str) -> String {
    decode_html_entities(text).into_owned()
}

pub fn clean_optional(text: Option<&str>) -> Option<String> {
    text.map(clean_text)
}
