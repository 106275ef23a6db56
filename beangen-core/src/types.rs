//! Fundamental types shared across the beangen workspace.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of one database table, as supplied by the schema
/// source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Table identifier as it appears in the database.
    pub name: String,

    /// Columns in database order.
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
}

/// One column of a [`TableDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column identifier as it appears in the database.
    pub name: String,

    /// Possibly dot-qualified source type, e.g. "java.lang.String" or "VARCHAR".
    #[serde(rename = "type")]
    pub source_type: String,
}

/// Naming and template configuration for one generation run.
///
/// Immutable for the duration of the run; supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Package the bean class is generated into. Empty means the default
    /// package.
    pub bean_package: String,

    /// Package the SQL map definition is generated into. Empty means the
    /// default package.
    pub sql_map_package: String,

    /// Appended to the class name to form the SQL map file name, e.g. ".xml".
    pub sql_map_suffix: String,

    /// Template text for the bean class artifact.
    pub bean_template: String,

    /// Template text for the SQL map artifact.
    pub sql_map_template: String,
}

/// A bean field derived from one table column.
///
/// Created fresh per generation run, in column order; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedField {
    /// Original column identifier.
    pub column_name: String,

    /// camelCase field identifier, separators fully consumed.
    pub field_name: String,

    /// Simple type name after mapping.
    pub field_type: String,
}
