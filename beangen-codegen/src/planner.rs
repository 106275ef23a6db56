//! Pure planning of the two artifacts for one table.

use std::path::PathBuf;

use beangen_core::{
    ColumnDescriptor, GeneratedField, GenerationConfig, TableDescriptor,
    column_name_to_field_name, map_type, table_name_to_type_name,
};
use serde_json::{Value, json};

use crate::renderer::RenderContext;

/// Extension of generated bean class files.
const BEAN_EXTENSION: &str = "java";

/// One artifact ready for rendering: target path, template text, and render
/// context.
#[derive(Debug, Clone)]
pub struct PlannedArtifact {
    /// Path relative to the output root, package segments as directories.
    pub relative_path: PathBuf,
    /// Template text this artifact renders through.
    pub template: String,
    /// Placeholder bindings for the render.
    pub context: RenderContext,
}

/// The two artifacts planned for one table.
#[derive(Debug, Clone)]
pub struct ArtifactPlan {
    /// Class name derived from the table name.
    pub class_name: String,
    /// The bean class artifact.
    pub bean: PlannedArtifact,
    /// The SQL map artifact.
    pub sql_map: PlannedArtifact,
}

/// Plan both artifacts for `table` under `config`.
///
/// Pure function of its inputs: no existence checks, no I/O. Field order
/// mirrors column order.
pub fn plan(table: &TableDescriptor, config: &GenerationConfig) -> ArtifactPlan {
    let class_name = table_name_to_type_name(&table.name);
    let fields: Vec<GeneratedField> = table.columns.iter().map(derive_field).collect();

    let mut bean_context = RenderContext::new();
    bean_context.insert("package", config.bean_package.as_str());
    bean_context.insert("name", class_name.as_str());
    bean_context.insert("tableName", table.name.as_str());
    bean_context.insert(
        "fieldList",
        Value::Array(fields.iter().map(field_value).collect()),
    );

    let bean = PlannedArtifact {
        relative_path: package_to_path(&config.bean_package)
            .join(format!("{class_name}.{BEAN_EXTENSION}")),
        template: config.bean_template.clone(),
        context: bean_context,
    };

    let mut map_context = RenderContext::new();
    map_context.insert("className", class_name.as_str());
    map_context.insert("FQCN", fqcn(&config.bean_package, &class_name));

    let sql_map = PlannedArtifact {
        relative_path: package_to_path(&config.sql_map_package)
            .join(format!("{class_name}{}", config.sql_map_suffix)),
        template: config.sql_map_template.clone(),
        context: map_context,
    };

    ArtifactPlan {
        class_name,
        bean,
        sql_map,
    }
}

/// Derive the bean field for one column.
pub fn derive_field(column: &ColumnDescriptor) -> GeneratedField {
    GeneratedField {
        column_name: column.name.clone(),
        field_name: column_name_to_field_name(&column.name),
        field_type: map_type(&column.source_type).to_string(),
    }
}

/// Attribute names the templates see: `columnName`, `name`, `type`.
fn field_value(field: &GeneratedField) -> Value {
    json!({
        "columnName": field.column_name,
        "name": field.field_name,
        "type": field.field_type,
    })
}

/// Turn a dotted package into a relative directory path. Empty packages map
/// to the output root.
pub fn package_to_path(package: &str) -> PathBuf {
    if package.is_empty() {
        return PathBuf::new();
    }
    package.split('.').collect()
}

/// Fully qualified class name; the bare class name in the default package.
fn fqcn(package: &str, class_name: &str) -> String {
    if package.is_empty() {
        class_name.to_string()
    } else {
        format!("{package}.{class_name}")
    }
}
