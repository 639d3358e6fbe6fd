use crate::duration::humanize_duration;
use crate::model::{Instructions, RecipeRecord, StepItem};
use crate::sanitize::clean_text;

const RULE_WIDTH: usize = 80;
const UNKNOWN_RECIPE: &str = "Unknown Recipe";

/// Plain text report builder, one pushed line at a time.
struct Report {
    lines: Vec<String>,
    step: usize,
}

impl Report {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            step: 1,
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn rule(&mut self, c: char) {
        self.push(c.to_string().repeat(RULE_WIDTH));
    }

    fn header(&mut self, title: &str) {
        self.push("");
        self.rule('-');
        self.push(title);
        self.rule('-');
    }

    /// Numbered step line; steps without text are skipped and keep their number free.
    fn step(&mut self, item: &StepItem) {
        let text = item.text();
        if text.is_empty() {
            return;
        }
        let line = format!("{}. {}", self.step, clean_text(text));
        self.push(line);
        self.step += 1;
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Render a recipe as the fixed-layout text report.
pub fn render_report(record: &RecipeRecord) -> String {
    let mut report = Report::new();

    let name = record
        .name
        .as_deref()
        .map(clean_text)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_RECIPE.to_string());
    report.rule('=');
    report.push(format!("RECIPE: {name}"));
    report.rule('=');

    if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
        report.push("");
        report.push(clean_text(description));
        report.push("");
    }

    let times = [
        ("Prep Time", &record.prep_time),
        ("Cook Time", &record.cook_time),
        ("Total Time", &record.total_time),
    ];
    for (label, time) in times {
        if let Some(time) = time.as_deref().filter(|t| !t.is_empty()) {
            report.push(format!("{label}: {}", humanize_duration(time)));
        }
    }

    if let Some(servings) = record.servings.as_deref().filter(|s| !s.is_empty()) {
        report.push(format!("Servings: {servings}"));
    }

    report.header("INGREDIENTS:");
    for (i, ingredient) in record.ingredients.iter().enumerate() {
        report.push(format!("{}. {}", i + 1, clean_text(ingredient)));
    }

    report.header("INSTRUCTIONS:");
    match &record.instructions {
        Some(Instructions::Text(text)) => report.push(clean_text(text)),
        Some(Instructions::Flat(items)) => {
            for item in items {
                report.step(item);
            }
        }
        Some(Instructions::Sectioned(sections)) => {
            for section in sections {
                if let Some(name) = section.name.as_deref().filter(|n| !n.is_empty()) {
                    report.push("");
                    report.push(format!("{}:", clean_text(name)));
                }
                for item in &section.steps {
                    report.step(item);
                }
            }
        }
        None => {}
    }

    report.push("");
    report.rule('=');
    report.finish()
}

/// Render an optional record; nothing in, nothing out.
pub fn render_optional(record: Option<&RecipeRecord>) -> Option<String> {
    record.map(render_report)
}
