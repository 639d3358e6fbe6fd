use crate::error::ReportError;
use log::info;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "recipe.txt";

const NAME_PREFIX: &str = "RECIPE:";

/// Lower-case, hyphen-delimited form of `name` (`"Mom's Pie!"` -> `"mom-s-pie"`).
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// File name for a rendered report, taken from its `RECIPE:` line.
pub fn report_filename(report: &str) -> String {
    let slug = report
        .lines()
        .find_map(|line| line.strip_prefix(NAME_PREFIX))
        .map(|name| slugify(name.trim()))
        .unwrap_or_default();

    if slug.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        format!("{slug}.txt")
    }
}

/// Write the report into `dir` under its derived file name.
pub async fn save_report(report: &str, dir: &Path) -> Result<PathBuf, ReportError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(report_filename(report));
    tokio::fs::write(&path, report).await?;
    info!("Saved recipe report to {}", path.display());
    Ok(path)
}
