use std::path::PathBuf;

use beangen_core::{File, WriteResult};
use clap::Args;
use eyre::{Context, Result};

const STARTER_MANIFEST: &str = r#"[generator]
bean_package = "com.example.model"
sql_map_package = "com.example.sqlmap"
sql_map_suffix = ".xml"

# bean_template and sql_map_template fall back to the built-in templates
# when omitted. Scalars substitute with ${name}; the field list iterates
# with {% for field in fieldList %} ... {% endfor %}.

[[tables]]
name = "user_accounts"
columns = [
    { name = "id", type = "java.lang.Long" },
    { name = "user_name", type = "java.lang.String" },
]
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the manifest in (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        std::fs::create_dir_all(&self.path).wrap_err_with(|| {
            format!("Failed to create directory '{}'", self.path.display())
        })?;

        let manifest_path = self.path.join("beangen.toml");
        let file = File::new(&manifest_path, STARTER_MANIFEST);
        match file.write()? {
            WriteResult::Written => {
                println!("Created {}", manifest_path.display());
                println!();
                println!("Next steps:");
                println!("  edit the [generator] packages and [[tables]] schemas");
                println!("  beangen generate --table user_accounts");
            }
            WriteResult::Skipped => {
                println!(
                    "{} already exists, leaving it untouched",
                    manifest_path.display()
                );
            }
        }
        Ok(())
    }
}
