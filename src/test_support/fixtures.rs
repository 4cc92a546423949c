//! Test fixtures for common gate scenarios.

use crate::core::ProjectDescriptor;
use crate::gate::rules::WINDOWS_DESKTOP_SDK;

const TFM: &str = "netcoreapp3.0";

/// A desktop-SDK project with `ui_framework_property = true`.
pub fn desktop_sdk_project(ui_framework_property: &str) -> ProjectDescriptor {
    ProjectDescriptor::new(WINDOWS_DESKTOP_SDK)
        .with_name("WindowsDesktopSdkTest")
        .with_target_framework(TFM)
        .with_property(ui_framework_property, true)
}

/// A plain-SDK project with an explicit reference to `framework`.
pub fn framework_reference_project(framework: &str) -> ProjectDescriptor {
    ProjectDescriptor::new("Microsoft.NET.Sdk")
        .with_name("WindowsDesktopReferenceTest")
        .with_target_framework(TFM)
        .with_framework_reference(framework)
}

/// `Project.toml` text for [`desktop_sdk_project`].
pub fn desktop_sdk_manifest(name: &str, ui_framework_property: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
sdk = "{WINDOWS_DESKTOP_SDK}"
target-framework = "{TFM}"

[properties]
{ui_framework_property} = "true"
"#
    )
}

/// `Project.toml` text for [`framework_reference_project`].
pub fn framework_reference_manifest(name: &str, framework: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
sdk = "Microsoft.NET.Sdk"
target-framework = "{TFM}"

[[framework-reference]]
name = "{framework}"
"#
    )
}
