//! Requirement resolution.
//!
//! Turns a project descriptor into the set of frameworks it depends on:
//! frameworks implied by UI properties under the desktop SDK, plus every
//! explicit framework reference.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::core::ProjectDescriptor;
use crate::gate::rules::FrameworkRuleTable;

/// A framework the project depends on.
///
/// Ordered lexically by identifier so iteration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FrameworkRequirement(String);

impl FrameworkRequirement {
    pub fn new(id: impl Into<String>) -> Self {
        FrameworkRequirement(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameworkRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FrameworkRequirement {
    fn from(s: &str) -> Self {
        FrameworkRequirement::new(s)
    }
}

/// Resolve the effective framework requirements of a project.
///
/// Implied and explicit requirements are additive; duplicates collapse.
/// Unknown properties and frameworks are carried or ignored, never rejected.
pub fn resolve(
    project: &ProjectDescriptor,
    rules: &FrameworkRuleTable,
) -> BTreeSet<FrameworkRequirement> {
    let mut requirements = BTreeSet::new();

    let enabled = rules
        .properties()
        .iter()
        .filter(|p| project.property(&p.property) == Some(true));

    if rules.is_desktop_sdk(&project.sdk) {
        for ui in enabled {
            tracing::debug!("`{}` implies framework `{}`", ui.property, ui.framework);
            requirements.insert(FrameworkRequirement::new(ui.framework.as_str()));
        }
    } else if enabled.count() > 0 {
        tracing::debug!(
            "UI framework properties ignored: sdk `{}` is not `{}`",
            project.sdk,
            rules.desktop_sdk()
        );
    }

    requirements.extend(
        project
            .framework_references
            .iter()
            .map(|r| FrameworkRequirement::new(r.as_str())),
    );

    requirements
}
