//! Field extractors shared by the line classifier.
//!
//! Each returns `None` when the shape is absent so the caller can fall
//! through to the next rule.

use once_cell::sync::Lazy;
use regex::Regex;

/// `"<name> (<N> Points)"` with nothing after the closing parenthesis.
static POINTS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\((\d+)\s*Points\)$").expect("valid points header regex"));

/// Same shape, anchored at the start only.
static POINTS_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\((\d+)\s*Points\)").expect("valid points prefix regex"));

/// `"<N>x <name>"`: lowercase `x`, at least one space.
static COUNT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)x\s+(.+)$").expect("valid count regex"));

/// Split a full-line unit header into name and points.
pub fn split_points_header(line: &str) -> Option<(&str, u32)> {
    split_name_points(&POINTS_HEADER, line)
}

/// Split a header that only has to start with `"<name> (<N> Points)"`.
///
/// Used for the army header, which exports sometimes follow with extra
/// text such as a battle size.
pub fn split_points_prefix(line: &str) -> Option<(&str, u32)> {
    split_name_points(&POINTS_PREFIX, line)
}

fn split_name_points<'a>(pattern: &Regex, line: &'a str) -> Option<(&'a str, u32)> {
    let caps = pattern.captures(line)?;
    let name = caps.get(1)?.as_str().trim();
    let points = caps.get(2)?.as_str().parse().ok()?;
    if name.is_empty() {
        return None;
    }
    Some((name, points))
}

/// Split bullet text (glyph already stripped) into count and name.
pub fn split_count_name(text: &str) -> Option<(u32, &str)> {
    let caps = COUNT_NAME.captures(text)?;
    let count = caps.get(1)?.as_str().parse().ok()?;
    let name = caps.get(2)?.as_str().trim();
    Some((count, name))
}
