//! Generation orchestration: plan, render, materialize.

use std::path::{Path, PathBuf};

use beangen_core::{File, GenerationConfig, TableDescriptor, WriteResult};

use crate::{
    error::{GenerateError, Result},
    planner::{self, PlannedArtifact},
    renderer::TemplateEngine,
};

/// A rendered artifact and where it would land, for dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Outcome for one materialized artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOutcome {
    /// Absolute target path under the output directory.
    pub path: PathBuf,
    /// Whether this run created the file. `false` means it already existed
    /// and was left untouched.
    pub created: bool,
}

/// Report for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Class name derived from the table name.
    pub class_name: String,
    /// The bean class artifact.
    pub bean: ArtifactOutcome,
    /// The SQL map artifact; `None` when the stage was skipped because the
    /// bean file already existed.
    pub sql_map: Option<ArtifactOutcome>,
}

/// Sequences the pipeline for one table: plan, render, materialize.
///
/// The template engine is constructed by the caller and passed in, so the
/// templating mechanism stays swappable and no process-wide state is
/// involved. One invocation processes exactly one table to completion;
/// callers serialize concurrent use against the same output directory.
pub struct Generator<E> {
    engine: E,
}

impl<E: TemplateEngine> Generator<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Generate both artifacts for `table` under `output_dir`.
    ///
    /// The bean is planned, rendered, and written first. The SQL map stage
    /// runs only when the bean file was newly created: a pre-existing bean
    /// means the whole generation unit is treated as already done, even when
    /// the map file itself is missing. Artifacts written before a failure
    /// stay on disk.
    pub fn generate(
        &self,
        table: &TableDescriptor,
        config: &GenerationConfig,
        output_dir: &Path,
    ) -> Result<GenerateResult> {
        validate_config(config)?;
        let plan = planner::plan(table, config);

        let bean_result = self.materialize(&plan.bean, "bean", output_dir)?;
        let bean = ArtifactOutcome {
            path: output_dir.join(&plan.bean.relative_path),
            created: bean_result.created(),
        };

        let sql_map = if bean.created {
            let map_result = self.materialize(&plan.sql_map, "sql map", output_dir)?;
            Some(ArtifactOutcome {
                path: output_dir.join(&plan.sql_map.relative_path),
                created: map_result.created(),
            })
        } else {
            None
        };

        Ok(GenerateResult {
            class_name: plan.class_name,
            bean,
            sql_map,
        })
    }

    /// Render both artifacts without touching the filesystem.
    pub fn preview(
        &self,
        table: &TableDescriptor,
        config: &GenerationConfig,
    ) -> Result<Vec<PreviewFile>> {
        validate_config(config)?;
        let plan = planner::plan(table, config);

        Ok(vec![
            PreviewFile {
                path: plan.bean.relative_path.display().to_string(),
                content: self.render(&plan.bean, "bean")?,
            },
            PreviewFile {
                path: plan.sql_map.relative_path.display().to_string(),
                content: self.render(&plan.sql_map, "sql map")?,
            },
        ])
    }

    fn render(&self, artifact: &PlannedArtifact, name: &str) -> Result<String> {
        Ok(self
            .engine
            .render(name, &artifact.template, &artifact.context)?)
    }

    /// Render and write one artifact. Existence gates rendering, not just
    /// writing: nothing is rendered for a file that is already on disk.
    fn materialize(
        &self,
        artifact: &PlannedArtifact,
        name: &str,
        output_dir: &Path,
    ) -> Result<WriteResult> {
        let path = output_dir.join(&artifact.relative_path);
        if path.exists() {
            return Ok(WriteResult::Skipped);
        }
        let content = self.render(artifact, name)?;
        File::new(&path, content)
            .write()
            .map_err(|source| GenerateError::Materialization { path, source })
    }
}

fn validate_config(config: &GenerationConfig) -> Result<()> {
    if config.bean_template.trim().is_empty() {
        return Err(GenerateError::Configuration {
            message: "bean template is empty".to_string(),
        });
    }
    if config.sql_map_template.trim().is_empty() {
        return Err(GenerateError::Configuration {
            message: "sql map template is empty".to_string(),
        });
    }
    if config.sql_map_suffix.is_empty() {
        return Err(GenerateError::Configuration {
            message: "sql map suffix is empty".to_string(),
        });
    }
    Ok(())
}
