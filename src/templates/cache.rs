//! Name → compiled template mapping.

use std::path::Path;

use tera::Tera;
use thiserror::Error;

/// Errors from building or using the template cache.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template discovery or compilation failed at startup.
    #[error("failed to compile templates: {0}")]
    Build(#[source] tera::Error),

    /// A handler asked for a name the cache does not hold.
    #[error("no template named {name:?}")]
    NotFound { name: String },

    /// A known template failed to render.
    #[error("failed to render template {name:?}: {source}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

/// Compiled templates, built once before the server accepts connections
/// and read-only for the rest of the process lifetime.
pub struct TemplateCache {
    tera: Tera,
}

impl TemplateCache {
    /// Compile every `.html` file under `dir` (recursively). Template
    /// names are paths relative to `dir`.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let pattern = format!("{}/**/*.html", dir.display());
        let tera = Tera::new(&pattern).map_err(TemplateError::Build)?;
        Ok(Self { tera })
    }

    /// Compile templates from in-memory sources.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(sources)
            .map_err(TemplateError::Build)?;
        Ok(Self { tera })
    }

    /// Whether a template with this name was compiled.
    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Names of every compiled template.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tera.get_template_names()
    }

    /// Render `name` with the given values.
    pub fn render(&self, name: &str, values: &tera::Context) -> Result<String, TemplateError> {
        if !self.contains(name) {
            return Err(TemplateError::NotFound {
                name: name.to_string(),
            });
        }
        self.tera.render(name, values).map_err(|source| TemplateError::Render {
            name: name.to_string(),
            source,
        })
    }
}
