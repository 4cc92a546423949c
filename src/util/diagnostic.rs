//! Diagnostic messages and reporters.
//!
//! The gate returns structured verdicts; this module turns a
//! [`CheckReport`] into text on the build's standard output. Deciding the
//! process exit status is left to the caller.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::gate::IncompatiblePlatformError;
use crate::ops::CheckReport;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with optional code, location and context.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Diagnostic code, e.g. `NETSDK1100`
    pub code: Option<String>,
    /// Additional context lines
    pub context: Vec<String>,
    /// Related location (project file)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            code: None,
            context: Vec::new(),
            location: None,
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let label = match &self.code {
            Some(code) => format!("{}[{}]", self.severity, code),
            None => self.severity.to_string(),
        };

        let label = if color {
            let style = match self.severity {
                Severity::Error => "1;31",
            };
            format!("\x1b[{}m{}\x1b[0m", style, label)
        } else {
            label
        };

        output.push_str(&format!("{}: {}\n", label, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

impl From<&IncompatiblePlatformError> for Diagnostic {
    fn from(err: &IncompatiblePlatformError) -> Self {
        Diagnostic::error(err.summary())
            .with_code(err.code())
            .with_context(err.to_string())
    }
}

/// Surfaces gate results to the build output.
pub trait DiagnosticReporter {
    /// Write every outcome in `report`.
    fn report(&mut self, report: &CheckReport) -> Result<()>;
}

/// Human-readable, rustc-style output.
pub struct HumanReporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> HumanReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        HumanReporter { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticReporter for HumanReporter<W> {
    fn report(&mut self, report: &CheckReport) -> Result<()> {
        for outcome in &report.projects {
            match outcome.verdict.denial() {
                None => writeln!(
                    self.out,
                    "     Checked `{}` on {}",
                    outcome.project,
                    report.host
                )?,
                Some(err) => {
                    let mut diag = Diagnostic::from(err);
                    if let Some(ref path) = outcome.manifest {
                        diag = diag.with_location(path);
                    }
                    write!(self.out, "{}", diag.format(self.color))?;
                }
            }
        }
        self.out.flush().context("failed to flush diagnostics")
    }
}

/// Machine-readable output: the whole report as one JSON document.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        JsonReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticReporter for JsonReporter<W> {
    fn report(&mut self, report: &CheckReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)
            .context("failed to serialize check report")?;
        writeln!(self.out)?;
        self.out.flush().context("failed to flush diagnostics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HostPlatform;
    use crate::gate::rules::{USE_WINDOWS_FORMS_PROPERTY, WINDOWS_FORMS_FRAMEWORK};
    use crate::gate::{CompatibilityEvaluator, WINDOWS_DESKTOP_REQUIRES_WINDOWS};
    use crate::ops::check_project;
    use crate::test_support::fixtures;

    fn report_on(host: HostPlatform) -> CheckReport {
        let mut outcome = check_project(
            &fixtures::desktop_sdk_project(USE_WINDOWS_FORMS_PROPERTY),
            host,
            &CompatibilityEvaluator::default(),
        );
        outcome.manifest = Some(PathBuf::from("WindowsDesktopSdkTest/Project.toml"));
        CheckReport {
            host,
            projects: vec![outcome],
        }
    }

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("Windows is required")
            .with_code("NETSDK1100")
            .with_location("App/Project.toml")
            .with_context("detail line");

        let output = diag.format(false);
        assert!(output.starts_with("error[NETSDK1100]: Windows is required\n"));
        assert!(output.contains("  --> App/Project.toml\n"));
        assert!(output.contains("  = detail line\n"));
    }

    #[test]
    fn test_color_wraps_label() {
        let output = Diagnostic::error("boom").format(true);
        assert!(output.starts_with("\x1b[1;31merror\x1b[0m: boom"));
    }

    #[test]
    fn test_human_reporter_deny() {
        let mut reporter = HumanReporter::new(Vec::new(), false);
        reporter.report(&report_on(HostPlatform::Linux)).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains(&format!(
            "error[NETSDK1100]: {}",
            WINDOWS_DESKTOP_REQUIRES_WINDOWS
        )));
        assert!(text.contains("--> WindowsDesktopSdkTest/Project.toml"));
        assert!(text.contains(&format!(
            "{} requires targeting Windows, but the current platform is Linux.",
            WINDOWS_FORMS_FRAMEWORK
        )));
    }

    #[test]
    fn test_human_reporter_allow() {
        let mut reporter = HumanReporter::new(Vec::new(), false);
        reporter.report(&report_on(HostPlatform::Windows)).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains("Checked `WindowsDesktopSdkTest`"));
        assert!(!text.contains("error"));
    }

    #[test]
    fn test_json_reporter() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.report(&report_on(HostPlatform::Darwin)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();

        assert_eq!(value["host"], "Darwin");
        assert_eq!(value["projects"][0]["verdict"], "deny");
        assert_eq!(value["projects"][0]["framework"], WINDOWS_FORMS_FRAMEWORK);
        assert_eq!(value["projects"][0]["code"], "NETSDK1100");
        assert_eq!(value["projects"][0]["summary"], WINDOWS_DESKTOP_REQUIRES_WINDOWS);
        assert_eq!(
            value["projects"][0]["message"],
            format!(
                "{} requires targeting Windows, but the current platform is Darwin.",
                WINDOWS_FORMS_FRAMEWORK
            )
        );
    }
}
