use std::path::PathBuf;

use beangen_codegen::derive_field;
use beangen_core::table_name_to_type_name;
use beangen_manifest::BeangenToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to beangen.toml (defaults to ./beangen.toml)
    #[arg(short, long, default_value = "beangen.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    /// Run the list command
    pub fn run(&self) -> Result<()> {
        let manifest_file = BeangenToml::open(&self.config).unwrap_or_exit();
        let manifest = manifest_file.manifest();

        if manifest.tables.is_empty() {
            println!("No tables defined");
            return Ok(());
        }

        println!("Tables:");
        for table in &manifest.tables {
            println!("  {} -> {}", table.name, table_name_to_type_name(&table.name));
            for column in &table.columns {
                let field = derive_field(column);
                println!(
                    "    {} -> {}: {}",
                    field.column_name, field.field_name, field.field_type
                );
            }
        }

        Ok(())
    }
}
