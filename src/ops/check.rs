//! Run the platform gate over one or more projects.
//!
//! Each project is loaded and evaluated independently; with several
//! projects the work is spread across the rayon pool. The host platform is
//! probed once and shared read-only.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

use crate::core::{HostPlatform, ProjectDescriptor};
use crate::gate::{
    resolve, CompatibilityEvaluator, FrameworkRequirement, IncompatiblePlatformError, Verdict,
};

/// Options for [`check`].
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Project files to check, in report order
    pub manifests: Vec<PathBuf>,
}

/// Gate result for a single project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectOutcome {
    /// Project name
    pub project: String,

    /// Project file, when loaded from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Effective framework requirements
    pub requirements: BTreeSet<FrameworkRequirement>,

    /// The gate's decision
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Gate results for every checked project.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Platform the check ran on
    pub host: HostPlatform,

    /// Per-project outcomes, in request order
    pub projects: Vec<ProjectOutcome>,
}

impl CheckReport {
    /// Check if no project was denied.
    pub fn all_allowed(&self) -> bool {
        self.projects.iter().all(|p| p.verdict.is_allowed())
    }

    /// Denied projects with their errors.
    pub fn denials(
        &self,
    ) -> impl Iterator<Item = (&ProjectOutcome, &IncompatiblePlatformError)> {
        self.projects
            .iter()
            .filter_map(|p| p.verdict.denial().map(|err| (p, err)))
    }
}

/// Gate a single project on `host`.
pub fn check_project(
    project: &ProjectDescriptor,
    host: HostPlatform,
    evaluator: &CompatibilityEvaluator,
) -> ProjectOutcome {
    let requirements = resolve(project, evaluator.rules());
    let verdict = evaluator.evaluate(&requirements, host);

    match &verdict {
        Verdict::Allow => tracing::debug!("`{}` is compatible with {}", project.name, host),
        Verdict::Deny(err) => tracing::info!("`{}` denied: {}", project.name, err),
    }

    ProjectOutcome {
        project: project.name.clone(),
        manifest: None,
        requirements,
        verdict,
    }
}

/// Load and gate every project in `opts.manifests` on the current host.
///
/// Fails only if a project file cannot be read or parsed.
pub fn check(opts: &CheckOptions, evaluator: &CompatibilityEvaluator) -> Result<CheckReport> {
    check_on(opts, evaluator, HostPlatform::current())
}

/// Like [`check`], with an explicit host platform.
pub fn check_on(
    opts: &CheckOptions,
    evaluator: &CompatibilityEvaluator,
    host: HostPlatform,
) -> Result<CheckReport> {
    tracing::debug!("checking {} project(s) on {}", opts.manifests.len(), host);

    let projects = opts
        .manifests
        .par_iter()
        .map(|path| -> Result<ProjectOutcome> {
            let project = ProjectDescriptor::load(path)?;
            let mut outcome = check_project(&project, host, evaluator);
            outcome.manifest = Some(path.clone());
            Ok(outcome)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CheckReport { host, projects })
}
