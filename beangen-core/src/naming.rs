//! Identifier transforms for table and column names.

/// Separator between segments in database identifiers.
const SEPARATOR: char = '_';

/// Convert a table identifier to a class name (e.g., "user_accounts" -> "UserAccount").
///
/// Each `_`-separated segment is capitalized and singularized when the
/// heuristic finds a singular form. All-uppercase segments are lowered before
/// capitalization so acronyms come out as "Id" rather than "ID".
pub fn table_name_to_type_name(table_name: &str) -> String {
    table_name.split(SEPARATOR).map(transform_segment).collect()
}

/// Convert a column identifier to a bean field name (e.g., "user_name" -> "userName").
pub fn column_name_to_field_name(column_name: &str) -> String {
    decapitalize(&table_name_to_type_name(column_name))
}

fn transform_segment(segment: &str) -> String {
    if segment.is_empty() {
        return String::new();
    }
    let segment = if segment == segment.to_uppercase() {
        segment.to_lowercase()
    } else {
        segment.to_string()
    };
    let capitalized = capitalize(&segment);
    singularize(&capitalized).unwrap_or(capitalized)
}

/// Uppercase the first letter, leaving the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first letter, leaving the rest unchanged.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Best-effort singular form of a plural identifier segment.
///
/// Suffix rules only, checked in order. Returns `None` when no rule applies
/// or the stem would come out empty; the caller keeps the segment as-is in
/// that case. Non-ASCII segments are never singularized.
pub fn singularize(word: &str) -> Option<String> {
    if !word.is_ascii() {
        return None;
    }
    let lower = word.to_lowercase();

    // classes -> class, ashes -> ash, matches -> match, boxes -> box
    for suffix in ["sses", "shes", "ches", "xes"] {
        if lower.ends_with(suffix) && word.len() > suffix.len() {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    // houses -> house, courses -> course
    if lower.ends_with("ses") && word.len() > 3 {
        return Some(word[..word.len() - 1].to_string());
    }
    // categories -> category, only after a consonant
    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.chars().last().is_some_and(is_consonant) {
            return Some(format!("{}y", &word[..word.len() - 3]));
        }
    }
    // potatoes -> potato
    if lower.ends_with("oes") && word.len() > 3 {
        return Some(word[..word.len() - 2].to_string());
    }
    // accounts -> account; "ss", "us", "is" endings are not plural markers
    if lower.ends_with('s')
        && word.len() > 1
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return Some(word[..word.len() - 1].to_string());
    }
    None
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
