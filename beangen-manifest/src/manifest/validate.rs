//! Post-parse validation for beangen.toml manifests.

use std::collections::HashSet;

use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Java reserved keywords that cannot appear as package segments.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
];

/// Check if a name is a Java reserved keyword.
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    validate_package(&manifest.generator.bean_package, "bean_package", ctx)?;
    validate_package(&manifest.generator.sql_map_package, "sql_map_package", ctx)?;

    if manifest.generator.sql_map_suffix.is_empty() {
        return Err(ctx.validation_error(
            "sql_map_suffix cannot be empty",
            find_key_span(ctx.src(), "sql_map_suffix"),
        ));
    }
    if let Some(template) = &manifest.generator.bean_template {
        if template.trim().is_empty() {
            return Err(ctx.validation_error(
                "bean_template cannot be empty",
                find_key_span(ctx.src(), "bean_template"),
            ));
        }
    }
    if let Some(template) = &manifest.generator.sql_map_template {
        if template.trim().is_empty() {
            return Err(ctx.validation_error(
                "sql_map_template cannot be empty",
                find_key_span(ctx.src(), "sql_map_template"),
            ));
        }
    }

    let mut seen_tables = HashSet::new();
    for table in &manifest.tables {
        validate_name(&table.name, "table", ctx)?;
        if !seen_tables.insert(table.name.as_str()) {
            return Err(ctx.validation_error(
                format!("duplicate table '{}'", table.name),
                find_name_span(ctx.src(), &table.name),
            ));
        }

        let mut seen_columns = HashSet::new();
        for column in &table.columns {
            validate_name(&column.name, &format!("column in '{}'", table.name), ctx)?;
            if column.source_type.is_empty() {
                return Err(ctx.validation_error(
                    format!(
                        "column '{}' in '{}' has an empty type",
                        column.name, table.name
                    ),
                    find_name_span(ctx.src(), &column.name),
                ));
            }
            if !seen_columns.insert(column.name.as_str()) {
                return Err(ctx.validation_error(
                    format!("duplicate column '{}' in '{}'", column.name, table.name),
                    find_name_span(ctx.src(), &column.name),
                ));
            }
        }
    }
    Ok(())
}

/// Validate a dotted package name. Empty is allowed and means the default
/// package; the CLI asks for confirmation before generating into it.
fn validate_package(package: &str, key: &str, ctx: &SourceContext) -> Result<()> {
    if package.is_empty() {
        return Ok(());
    }
    for segment in package.split('.') {
        if is_java_keyword(segment) {
            return Err(ctx.reserved_keyword_error(
                segment,
                key,
                find_name_span(ctx.src(), segment),
            ));
        }
        if let Some(reason) = validate_identifier(segment) {
            return Err(ctx.validation_error(
                format!("invalid {key} segment '{segment}': {reason}"),
                find_key_span(ctx.src(), key),
            ));
        }
    }
    Ok(())
}

fn validate_name(name: &str, context: &str, ctx: &SourceContext) -> Result<()> {
    if let Some(reason) = validate_identifier(name) {
        return Err(ctx.validation_error(
            format!("invalid {context} name '{name}': {reason}"),
            find_name_span(ctx.src(), name),
        ));
    }
    Ok(())
}

/// Validate that a name is a valid identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    // Remaining characters must be alphanumeric or underscore
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }

    None
}

/// Find the span of a name in the TOML source.
/// Searches for `name = "value"` patterns and quoted occurrences.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let name_pattern = format!("name = \"{}\"", name);
    if let Some(pos) = src.find(&name_pattern) {
        // The name starts after 'name = "' (8 characters)
        return Some(SourceSpan::from((pos + 8, name.len())));
    }

    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // Quoted segment inside a dotted package value
    let segment = format!(".{}", name);
    if let Some(pos) = src.find(&segment) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of a `key = ...` assignment in the TOML source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let pattern = format!("{key} =");
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos, key.len())))
}
