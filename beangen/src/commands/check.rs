use std::path::PathBuf;

use beangen_manifest::BeangenToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to beangen.toml (defaults to ./beangen.toml)
    #[arg(short, long, default_value = "beangen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest_file = BeangenToml::open(&self.config).unwrap_or_exit();
        let manifest = manifest_file.manifest();

        println!("✓ {} is valid\n", self.config.display());

        println!("  bean package:    {}", display_package(&manifest.generator.bean_package));
        println!(
            "  SQL map package: {}",
            display_package(&manifest.generator.sql_map_package)
        );
        println!("  SQL map suffix:  {}", manifest.generator.sql_map_suffix);
        println!(
            "  bean template:   {}",
            template_source(manifest.generator.bean_template.as_ref())
        );
        println!(
            "  SQL map template: {}",
            template_source(manifest.generator.sql_map_template.as_ref())
        );

        let count = manifest.tables.len();
        println!();
        println!("  {} table{}:", count, if count == 1 { "" } else { "s" });
        for table in &manifest.tables {
            println!("    {} ({} columns)", table.name, table.columns.len());
        }

        Ok(())
    }
}

fn display_package(package: &str) -> &str {
    if package.is_empty() { "(default)" } else { package }
}

fn template_source(template: Option<&String>) -> &'static str {
    if template.is_some() { "custom" } else { "built-in" }
}
