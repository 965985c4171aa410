//! Registry of named code templates
//!
//! Generation pipelines keep their snippet templates under stable names,
//! registered programmatically or loaded from a TOML template set:
//!
//! ```toml
//! [metadata]
//! name = "console-wrappers"
//!
//! [templates]
//! call_guard = "var {name} = {callee}({args});"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::renderer::{render, TemplateValues};

/// Errors from registry lookups and template-set loading
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found in the registry
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// Duplicate template registration
    #[error("duplicate template: {name}")]
    Duplicate { name: String },

    #[error("failed to read template set: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse template set TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// TOML structure for deserializing template sets
#[derive(Deserialize)]
struct TomlTemplateSet {
    metadata: Option<TomlMetadata>,
    templates: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Named store of code templates
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    /// Optional name of the loaded template set
    pub name: Option<String>,
    /// Optional description of the loaded template set
    pub description: Option<String>,
    templates: HashMap<String, String>,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a template set from a TOML string
    pub fn from_str(content: &str) -> Result<Self, TemplateError> {
        let parsed: TomlTemplateSet = toml::from_str(content)?;
        let (name, description) = match parsed.metadata {
            Some(m) => (m.name, m.description),
            None => (None, None),
        };
        Ok(Self {
            name,
            description,
            templates: parsed.templates,
        })
    }

    /// Load a template set from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Register a template under a name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<(), TemplateError> {
        let name = name.into();
        if self.templates.contains_key(&name) {
            return Err(TemplateError::Duplicate { name });
        }
        self.templates.insert(name, template.into());
        Ok(())
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(|s| s.as_str())
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Names of all registered templates
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render a registered template with the given placeholder values
    pub fn render(&self, name: &str, values: &TemplateValues) -> Result<String, TemplateError> {
        let template = self.get(name).ok_or_else(|| TemplateError::NotFound {
            name: name.to_string(),
        })?;
        Ok(render(template, values))
    }
}
