/// Convert an ISO 8601 duration token to a human-readable phrase.
///
/// `PT1H30M` becomes `1 hour 30 minutes`, `P1DT2H` becomes `1 day 2 hours`.
/// Only day, hour, minute and second counts are recognized. Tokens that do
/// not start with `P`, or that contain no nonzero unit (e.g. `PT0S`), are
/// returned unchanged.
pub fn humanize_duration(duration: &str) -> String {
    let Some(rest) = duration.strip_prefix('P') else {
        return duration.to_string();
    };

    let mut parts = rest.split('T');
    let date = parts.next().unwrap_or_default();
    let time = parts.next().unwrap_or_default();

    let units = [
        (unit_count(date, 'D'), "day"),
        (unit_count(time, 'H'), "hour"),
        (unit_count(time, 'M'), "minute"),
        (unit_count(time, 'S'), "second"),
    ];

    let phrase = units
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| {
            format!("{} {}{}", count, unit, if *count == 1 { "" } else { "s" })
        })
        .collect::<Vec<_>>()
        .join(" ");

    if phrase.is_empty() {
        duration.to_string()
    } else {
        phrase
    }
}

/// Like [`humanize_duration`], passing absent tokens through.
pub fn humanize_optional(duration: Option<&str>) -> Option<String> {
    duration.map(humanize_duration)
}

/// First run of digits immediately followed by `unit`, or 0.
fn unit_count(portion: &str, unit: char) -> u64 {
    let bytes = portion.as_bytes();
    for (pos, c) in portion.char_indices() {
        if c != unit {
            continue;
        }
        let start = bytes[..pos]
            .iter()
            .rposition(|b| !b.is_ascii_digit())
            .map_or(0, |p| p + 1);
        if start < pos {
            return portion[start..pos].parse().unwrap_or(u64::MAX);
        }
    }
    0
}
