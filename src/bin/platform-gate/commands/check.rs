//! `platform-gate check` command

use anyhow::Result;

use crate::cli::CheckArgs;
use crate::Session;
use platform_gate::ops::{check, CheckOptions};
use platform_gate::util::{DiagnosticReporter, HumanReporter, JsonReporter, MessageFormat};
use platform_gate::CompatibilityEvaluator;

pub fn execute(args: CheckArgs, session: &Session) -> Result<bool> {
    let manifests = if args.manifests.is_empty() {
        vec![session.ctx.find_manifest()?]
    } else {
        args.manifests
    };

    let evaluator = CompatibilityEvaluator::default();
    let report = check(&CheckOptions { manifests }, &evaluator)?;

    let stdout = std::io::stdout().lock();
    match session.message_format(&args.format) {
        MessageFormat::Human => HumanReporter::new(stdout, session.color).report(&report)?,
        MessageFormat::Json => JsonReporter::new(stdout).report(&report)?,
    }

    Ok(report.all_allowed())
}
