//! Core utilities and types for the beangen generator.
//!
//! This crate holds the pure leaves of the generation pipeline: identifier
//! transforms, source type mapping, non-destructive file materialization,
//! and the descriptor types shared across the workspace.

mod file;
mod naming;
mod type_mapper;
mod types;

// File operations
pub use file::{File, WriteResult};
// Identifier transforms
pub use naming::{
    capitalize, column_name_to_field_name, decapitalize, singularize, table_name_to_type_name,
};
// Type mapping
pub use type_mapper::map_type;
// Fundamental types
pub use types::{ColumnDescriptor, GeneratedField, GenerationConfig, TableDescriptor};
