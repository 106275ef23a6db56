//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::validate_manifest};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "beangen.toml")
    }
}

impl Manifest {
    /// Parse a beangen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a beangen.toml from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [generator]
        bean_package = "com.example.model"
        sql_map_package = "com.example.sqlmap"
        sql_map_suffix = "-map.xml"

        [[tables]]
        name = "user_accounts"
        columns = [
            { name = "id", type = "java.lang.Long" },
            { name = "user_name", type = "java.lang.String" },
        ]
    "#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = MANIFEST.parse().unwrap();

        assert_eq!(manifest.generator.bean_package, "com.example.model");
        assert_eq!(manifest.generator.sql_map_suffix, "-map.xml");
        assert_eq!(manifest.tables.len(), 1);

        let table = manifest.table("user_accounts").unwrap();
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].name, "id");
        assert_eq!(table.columns[0].source_type, "java.lang.Long");
    }

    #[test]
    fn test_defaults_applied() {
        let manifest: Manifest = r#"
            [[tables]]
            name = "orders"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.generator.bean_package, "");
        assert_eq!(manifest.generator.sql_map_suffix, ".xml");
        assert!(manifest.generator.bean_template.is_none());

        let config = manifest.generator.to_config();
        assert_eq!(config.bean_template, crate::DEFAULT_BEAN_TEMPLATE);
        assert_eq!(config.sql_map_template, crate::DEFAULT_SQL_MAP_TEMPLATE);
    }

    #[test]
    fn test_table_lookup() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        assert!(manifest.table("user_accounts").is_some());
        assert!(manifest.table("missing").is_none());
        assert_eq!(manifest.table_names(), vec!["user_accounts"]);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result: Result<Manifest> = "[generator".parse();
        let err = result.unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let result: Result<Manifest> = r#"
            [[tables]]
            name = "users"

            [[tables]]
            name = "users"
        "#
        .parse();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate table"));
    }

    #[test]
    fn test_invalid_package_rejected() {
        let result: Result<Manifest> = r#"
            [generator]
            bean_package = "com.9model"
        "#
        .parse();
        let err = result.unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_keyword_package_segment_rejected() {
        let result: Result<Manifest> = r#"
            [generator]
            bean_package = "com.class.model"
        "#
        .parse();
        let err = result.unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let result: Result<Manifest> = r#"
            [generator]
            sql_map_suffix = ""
        "#
        .parse();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("sql_map_suffix"));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result: Result<Manifest> = r#"
            [[tables]]
            name = "users"
            columns = [
                { name = "id", type = "INTEGER" },
                { name = "id", type = "INTEGER" },
            ]
        "#
        .parse();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate column"));
    }

    #[test]
    fn test_empty_column_type_rejected() {
        let result: Result<Manifest> = r#"
            [[tables]]
            name = "users"
            columns = [{ name = "id", type = "" }]
        "#
        .parse();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("type"));
    }
}
