//! Project.toml parsing and the project descriptor.
//!
//! A descriptor carries only the metadata the platform gate looks at: the
//! SDK, the target framework, boolean properties and framework references.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Canonical project file name.
pub const PROJECT_FILE_NAME: &str = "Project.toml";

/// The subset of project metadata relevant to the platform gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Project name (defaults to the directory name when loaded from disk)
    pub name: String,

    /// SDK attribute, e.g. `Microsoft.NET.Sdk.WindowsDesktop`
    pub sdk: String,

    /// Target framework moniker, e.g. `netcoreapp3.0`
    pub target_framework: String,

    /// Boolean project properties, e.g. `UseWPF = true`
    pub boolean_properties: HashMap<String, bool>,

    /// Explicit framework references, verbatim
    pub framework_references: BTreeSet<String>,
}

impl ProjectDescriptor {
    /// Create a descriptor for a project using the given SDK.
    pub fn new(sdk: impl Into<String>) -> Self {
        ProjectDescriptor {
            sdk: sdk.into(),
            ..Default::default()
        }
    }

    /// Set the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the target framework moniker.
    pub fn with_target_framework(mut self, tfm: impl Into<String>) -> Self {
        self.target_framework = tfm.into();
        self
    }

    /// Set a boolean property.
    pub fn with_property(mut self, name: impl Into<String>, value: bool) -> Self {
        self.boolean_properties.insert(name.into(), value);
        self
    }

    /// Add an explicit framework reference.
    pub fn with_framework_reference(mut self, name: impl Into<String>) -> Self {
        self.framework_references.insert(name.into());
        self
    }

    /// Look up a boolean property, ignoring ASCII case in the name.
    pub fn property(&self, name: &str) -> Option<bool> {
        self.boolean_properties
            .get(name)
            .or_else(|| {
                self.boolean_properties
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .copied()
    }

    /// Load a descriptor from a `Project.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read project file: {}", path.display()))?;

        let mut project = Self::parse(&contents)
            .with_context(|| format!("failed to parse project file: {}", path.display()))?;

        if project.name.is_empty() {
            project.name = path
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        Ok(project)
    }

    /// Parse a descriptor from `Project.toml` contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawProjectFile = toml::from_str(contents)?;

        let mut boolean_properties = HashMap::new();
        for (name, value) in raw.properties {
            match property_as_bool(&value) {
                Some(b) => {
                    boolean_properties.insert(name, b);
                }
                None => tracing::debug!("ignoring non-boolean property `{}` = {}", name, value),
            }
        }

        Ok(ProjectDescriptor {
            name: raw.project.name.unwrap_or_default(),
            sdk: raw.project.sdk,
            target_framework: raw.project.target_framework,
            boolean_properties,
            framework_references: raw
                .framework_reference
                .into_iter()
                .map(|r| r.name)
                .collect(),
        })
    }
}

/// Property values are booleans or boolean-like strings; anything else is ignored.
fn property_as_bool(value: &toml::Value) -> Option<bool> {
    match value {
        toml::Value::Boolean(b) => Some(*b),
        toml::Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawProjectFile {
    #[serde(default)]
    project: RawProjectSection,

    #[serde(default)]
    properties: HashMap<String, toml::Value>,

    #[serde(default, rename = "framework-reference")]
    framework_reference: Vec<RawFrameworkReference>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawProjectSection {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    sdk: String,

    #[serde(default)]
    target_framework: String,
}

#[derive(Debug, Deserialize)]
struct RawFrameworkReference {
    name: String,
}
