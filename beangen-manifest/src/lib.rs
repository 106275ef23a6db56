//! Manifest parsing and validation for beangen.toml files.
//!
//! The manifest carries everything one generation run needs: the naming and
//! template configuration (`[generator]`) and the table schemas
//! (`[[tables]]`) that stand in for a live database connection.

mod error;
mod manifest;
mod templates;

pub use error::{Error, Result, SourceContext};
pub use manifest::{BeangenToml, GeneratorSection, Manifest};
pub use templates::{DEFAULT_BEAN_TEMPLATE, DEFAULT_SQL_MAP_TEMPLATE};
