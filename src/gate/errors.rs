//! Platform mismatch error.

use std::collections::BTreeSet;

use miette::Diagnostic;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::core::HostPlatform;

/// Diagnostic code reported for a desktop framework built on the wrong host.
pub const DIAGNOSTIC_CODE: &str = "NETSDK1100";

/// Fixed summary for Windows desktop frameworks built off Windows.
pub const WINDOWS_DESKTOP_REQUIRES_WINDOWS: &str =
    "Windows is required to build Windows desktop applications.";

/// A framework the project depends on cannot be built on this host.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error(
    "{framework} requires targeting {}, but the current platform is {actual}.",
    join_platforms(.required)
)]
#[diagnostic(code(NETSDK1100))]
pub struct IncompatiblePlatformError {
    /// The framework that triggered the failure
    pub framework: String,
    /// Platforms the framework can be built on
    pub required: BTreeSet<HostPlatform>,
    /// The platform the build is running on
    pub actual: HostPlatform,
}

impl IncompatiblePlatformError {
    pub fn new(
        framework: impl Into<String>,
        required: BTreeSet<HostPlatform>,
        actual: HostPlatform,
    ) -> Self {
        IncompatiblePlatformError {
            framework: framework.into(),
            required,
            actual,
        }
    }

    /// The diagnostic code.
    pub fn code(&self) -> &'static str {
        DIAGNOSTIC_CODE
    }

    /// One-line summary of the failure.
    pub fn summary(&self) -> String {
        if self.required.len() == 1 && self.required.contains(&HostPlatform::Windows) {
            WINDOWS_DESKTOP_REQUIRES_WINDOWS.to_string()
        } else {
            format!(
                "{} is required to build projects referencing {}.",
                join_platforms(&self.required),
                self.framework
            )
        }
    }
}

/// Serialized with the diagnostic code, summary and message ahead of the fields.
impl Serialize for IncompatiblePlatformError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IncompatiblePlatformError", 6)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("summary", &self.summary())?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("framework", &self.framework)?;
        state.serialize_field("required", &self.required)?;
        state.serialize_field("actual", &self.actual)?;
        state.end()
    }
}

/// Join platforms with " or ", in enum order.
pub fn join_platforms(platforms: &BTreeSet<HostPlatform>) -> String {
    platforms
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let err = IncompatiblePlatformError::new(
            "Microsoft.WindowsDesktop.App.WPF",
            [HostPlatform::Windows].into_iter().collect(),
            HostPlatform::Linux,
        );
        assert_eq!(
            err.to_string(),
            "Microsoft.WindowsDesktop.App.WPF requires targeting Windows, but the current platform is Linux."
        );
        assert_eq!(err.summary(), WINDOWS_DESKTOP_REQUIRES_WINDOWS);
        assert_eq!(err.code(), "NETSDK1100");
    }

    #[test]
    fn test_miette_code() {
        let err = IncompatiblePlatformError::new(
            "Microsoft.WindowsDesktop.App",
            [HostPlatform::Windows].into_iter().collect(),
            HostPlatform::Darwin,
        );
        let code = Diagnostic::code(&err).map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some(DIAGNOSTIC_CODE));
    }

    #[test]
    fn test_json_carries_code_and_messages() {
        let err = IncompatiblePlatformError::new(
            "Microsoft.WindowsDesktop.App.WPF",
            [HostPlatform::Windows].into_iter().collect(),
            HostPlatform::Linux,
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], DIAGNOSTIC_CODE);
        assert_eq!(json["summary"], WINDOWS_DESKTOP_REQUIRES_WINDOWS);
        assert_eq!(json["message"], err.to_string());
        assert_eq!(json["framework"], "Microsoft.WindowsDesktop.App.WPF");
        assert_eq!(json["required"][0], "Windows");
        assert_eq!(json["actual"], "Linux");
    }

    #[test]
    fn test_summary_for_other_platform_sets() {
        let err = IncompatiblePlatformError::new(
            "Contoso.Cocoa",
            [HostPlatform::Darwin, HostPlatform::FreeBSD]
                .into_iter()
                .collect(),
            HostPlatform::Windows,
        );
        assert_eq!(
            err.summary(),
            "Darwin or FreeBSD is required to build projects referencing Contoso.Cocoa."
        );
        assert!(err
            .to_string()
            .contains("requires targeting Darwin or FreeBSD"));
    }
}
