use std::path::{Path, PathBuf};

use beangen_codegen::{
    ArtifactOutcome, GenerateResult, Generator, MiniJinjaEngine, package_to_path,
};
use beangen_core::{GenerationConfig, TableDescriptor};
use beangen_manifest::{BeangenToml, Manifest};
use clap::Args;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use eyre::{Context, Result, bail};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to beangen.toml (defaults to ./beangen.toml)
    #[arg(short, long, default_value = "beangen.toml")]
    pub config: PathBuf,

    /// Output directory for generated sources (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Table to generate; prompts interactively when omitted
    #[arg(short, long)]
    pub table: Option<String>,

    /// Preview generated artifacts without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest_file = BeangenToml::open(&self.config).unwrap_or_exit();
        let manifest = manifest_file.manifest();

        let table = self.resolve_table(manifest)?;
        let config = manifest.generator.to_config();

        let engine = MiniJinjaEngine::new()?;
        let generator = Generator::new(engine);

        if self.dry_run {
            return Self::run_preview(&generator, table, &config);
        }

        if config.bean_package.is_empty() && !Self::confirm_default_package("bean")? {
            return Ok(());
        }
        if config.sql_map_package.is_empty() && !Self::confirm_default_package("SQL map")? {
            return Ok(());
        }

        Self::ensure_package_dir(&self.output, &config.bean_package)?;
        Self::ensure_package_dir(&self.output, &config.sql_map_package)?;

        let result = generator
            .generate(table, &config, &self.output)
            .wrap_err_with(|| format!("Failed to generate artifacts for table '{}'", table.name))?;

        Self::print_summary(&table.name, &result);
        Ok(())
    }

    fn resolve_table<'a>(&self, manifest: &'a Manifest) -> Result<&'a TableDescriptor> {
        if manifest.tables.is_empty() {
            bail!("no tables defined in {}", self.config.display());
        }
        match &self.table {
            Some(name) => manifest.table(name).ok_or_else(|| {
                eyre::eyre!(
                    "unknown table '{}' (available: {})",
                    name,
                    manifest.table_names().join(", ")
                )
            }),
            None => {
                let names = manifest.table_names();
                let selection = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Choose a database table")
                    .items(&names)
                    .default(0)
                    .interact()
                    .wrap_err("Failed to get table selection")?;
                Ok(&manifest.tables[selection])
            }
        }
    }

    fn confirm_default_package(kind: &str) -> Result<bool> {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "The {kind} package is empty, so the file will land in the default package. Continue?"
            ))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")?;
        Ok(confirmed)
    }

    fn ensure_package_dir(output: &Path, package: &str) -> Result<()> {
        let dir = output.join(package_to_path(package));
        std::fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("Failed to create package directory '{}'", dir.display()))?;
        Ok(())
    }

    fn run_preview(
        generator: &Generator<MiniJinjaEngine>,
        table: &TableDescriptor,
        config: &GenerationConfig,
    ) -> Result<()> {
        let files = generator.preview(table, config)?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }

    fn print_summary(table_name: &str, result: &GenerateResult) {
        println!("{} -> {}", table_name, result.class_name);
        println!();
        print_outcome(&result.bean);
        match &result.sql_map {
            Some(outcome) => print_outcome(outcome),
            None => println!("  = SQL map skipped (bean already exists)"),
        }
    }
}

fn print_outcome(outcome: &ArtifactOutcome) {
    if outcome.created {
        println!("  + {}", outcome.path.display());
    } else {
        println!("  = {} (exists, skipped)", outcome.path.display());
    }
}
