//! Manifest types and parsing for beangen.toml files.

mod file;
mod parse;
mod validate;

use beangen_core::{GenerationConfig, TableDescriptor};
pub use file::BeangenToml;
use serde::Deserialize;

use crate::templates::{DEFAULT_BEAN_TEMPLATE, DEFAULT_SQL_MAP_TEMPLATE};

/// Root manifest for beangen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Naming and template configuration
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Table schemas available for generation
    #[serde(default)]
    pub tables: Vec<TableDescriptor>,
}

impl Manifest {
    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableDescriptor> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Names of all tables, in manifest order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}

/// The `[generator]` section of beangen.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSection {
    /// Package the bean class lands in; empty means the default package.
    #[serde(default)]
    pub bean_package: String,

    /// Package the SQL map lands in; empty means the default package.
    #[serde(default)]
    pub sql_map_package: String,

    /// Appended to the class name to form the SQL map file name.
    #[serde(default = "default_sql_map_suffix")]
    pub sql_map_suffix: String,

    /// Bean class template; the built-in template when omitted.
    pub bean_template: Option<String>,

    /// SQL map template; the built-in template when omitted.
    pub sql_map_template: Option<String>,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            bean_package: String::new(),
            sql_map_package: String::new(),
            sql_map_suffix: default_sql_map_suffix(),
            bean_template: None,
            sql_map_template: None,
        }
    }
}

fn default_sql_map_suffix() -> String {
    ".xml".to_string()
}

impl GeneratorSection {
    /// Resolve to the immutable per-run configuration, applying template
    /// defaults.
    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig {
            bean_package: self.bean_package.clone(),
            sql_map_package: self.sql_map_package.clone(),
            sql_map_suffix: self.sql_map_suffix.clone(),
            bean_template: self
                .bean_template
                .clone()
                .unwrap_or_else(|| DEFAULT_BEAN_TEMPLATE.to_string()),
            sql_map_template: self
                .sql_map_template
                .clone()
                .unwrap_or_else(|| DEFAULT_SQL_MAP_TEMPLATE.to_string()),
        }
    }
}
