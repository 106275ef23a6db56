//! Template rendering behind a swappable engine interface.

use indexmap::IndexMap;
use minijinja::{Environment, UndefinedBehavior, syntax::SyntaxConfig};
use serde::Serialize;
use serde_json::Value;

use crate::error::{GenerateError, TemplateError};

/// Placeholder name to value mapping for one artifact render.
///
/// Insertion order is preserved so context construction stays deterministic.
/// Built per artifact and discarded after rendering.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    entries: IndexMap<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder name to a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a bound value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }
}

/// Rendering interface the orchestrator depends on.
///
/// Implementations perform textual substitution only: no side effects, no
/// file access, no knowledge of naming rules.
pub trait TemplateEngine {
    /// Render `template` against `context`. `name` identifies the artifact
    /// in error reports.
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &RenderContext,
    ) -> std::result::Result<String, TemplateError>;
}

/// minijinja-backed engine speaking the `${placeholder}` template dialect.
///
/// Scalars substitute with `${name}`; list-valued entries iterate with
/// `{% for item in list %}...{% endfor %}` and expose element attributes as
/// `${item.attr}`. Referencing an unknown placeholder is a render error, not
/// silent empty output. A `capfirst` filter is registered for accessor-style
/// names: it uppercases the first letter and leaves the rest of the word
/// alone.
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> std::result::Result<Self, GenerateError> {
        let syntax = SyntaxConfig::builder()
            .variable_delimiters("${", "}")
            .build()
            .map_err(|e| GenerateError::Configuration {
                message: format!("template engine failed to initialize: {e}"),
            })?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("capfirst", capfirst);
        Ok(Self { env })
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &RenderContext,
    ) -> std::result::Result<String, TemplateError> {
        self.env
            .render_str(template, context)
            .map_err(|e| TemplateError {
                name: name.to_string(),
                message: error_chain(&e),
            })
    }
}

fn capfirst(value: String) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Flatten the engine error and its causes into one line; the interesting
/// detail (e.g. which variable was undefined) often sits below the top error.
fn error_chain(error: &minijinja::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(&format!("; {cause}"));
        source = cause.source();
    }
    message
}
