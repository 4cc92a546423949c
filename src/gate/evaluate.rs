//! Compatibility evaluation.
//!
//! Requirements are checked in lexical order and the first violation wins,
//! so the same inputs always produce the same diagnostic.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::HostPlatform;
use crate::gate::errors::IncompatiblePlatformError;
use crate::gate::requirement::FrameworkRequirement;
use crate::gate::rules::{FrameworkRuleTable, PlatformConstraint};

/// Outcome of the gate for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    Allow,
    Deny(IncompatiblePlatformError),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    /// The denial, if any.
    pub fn denial(&self) -> Option<&IncompatiblePlatformError> {
        match self {
            Verdict::Allow => None,
            Verdict::Deny(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<(), IncompatiblePlatformError> {
        match self {
            Verdict::Allow => Ok(()),
            Verdict::Deny(err) => Err(err),
        }
    }
}

/// Decides whether a requirement set can be built on a host.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEvaluator {
    rules: FrameworkRuleTable,
}

impl CompatibilityEvaluator {
    pub fn new(rules: FrameworkRuleTable) -> Self {
        CompatibilityEvaluator { rules }
    }

    /// The rule table this evaluator consults.
    pub fn rules(&self) -> &FrameworkRuleTable {
        &self.rules
    }

    /// Evaluate `requirements` against `host`.
    ///
    /// An `Other` host is unknown and always allowed.
    pub fn evaluate(
        &self,
        requirements: &BTreeSet<FrameworkRequirement>,
        host: HostPlatform,
    ) -> Verdict {
        if !host.is_known() {
            tracing::debug!("host platform unknown, skipping compatibility check");
            return Verdict::Allow;
        }

        for requirement in requirements {
            match self.rules.required_platforms(requirement.as_str()) {
                PlatformConstraint::Unconstrained => {
                    tracing::debug!("`{}` is unconstrained", requirement);
                }
                PlatformConstraint::Requires(platforms) if platforms.contains(&host) => {
                    tracing::debug!("`{}` is supported on {}", requirement, host);
                }
                PlatformConstraint::Requires(platforms) => {
                    tracing::debug!("`{}` is not supported on {}", requirement, host);
                    return Verdict::Deny(IncompatiblePlatformError::new(
                        requirement.as_str(),
                        platforms,
                        host,
                    ));
                }
            }
        }

        Verdict::Allow
    }
}
