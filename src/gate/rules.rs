//! Framework platform rules - which shared frameworks require which host.
//!
//! The table is built once and never mutated. Identifiers missing from the
//! table are unconstrained.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::HostPlatform;

/// SDK that enables the Windows desktop UI toolkits.
pub const WINDOWS_DESKTOP_SDK: &str = "Microsoft.NET.Sdk.WindowsDesktop";

/// Umbrella Windows desktop shared framework.
pub const WINDOWS_DESKTOP_FRAMEWORK: &str = "Microsoft.WindowsDesktop.App";

/// WPF shared framework.
pub const WPF_FRAMEWORK: &str = "Microsoft.WindowsDesktop.App.WPF";

/// Windows Forms shared framework.
pub const WINDOWS_FORMS_FRAMEWORK: &str = "Microsoft.WindowsDesktop.App.WindowsForms";

/// Property enabling WPF under the desktop SDK.
pub const USE_WPF_PROPERTY: &str = "UseWPF";

/// Property enabling Windows Forms under the desktop SDK.
pub const USE_WINDOWS_FORMS_PROPERTY: &str = "UseWindowsForms";

const WINDOWS_ONLY: &[HostPlatform] = &[HostPlatform::Windows];

static BUILTIN_RULES: &[(&str, &[HostPlatform])] = &[
    (WINDOWS_DESKTOP_FRAMEWORK, WINDOWS_ONLY),
    (WPF_FRAMEWORK, WINDOWS_ONLY),
    (WINDOWS_FORMS_FRAMEWORK, WINDOWS_ONLY),
];

static BUILTIN_PROPERTIES: &[(&str, &str)] = &[
    (USE_WPF_PROPERTY, WPF_FRAMEWORK),
    (USE_WINDOWS_FORMS_PROPERTY, WINDOWS_FORMS_FRAMEWORK),
];

/// Platforms a framework can be built on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformConstraint {
    /// No rule for this framework; any host is fine.
    Unconstrained,
    /// The host must be one of these platforms.
    Requires(BTreeSet<HostPlatform>),
}

impl PlatformConstraint {
    /// Whether a build on `host` satisfies this constraint.
    pub fn permits(&self, host: HostPlatform) -> bool {
        match self {
            PlatformConstraint::Unconstrained => true,
            PlatformConstraint::Requires(platforms) => platforms.contains(&host),
        }
    }
}

/// A single framework -> required platforms rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformRule {
    pub framework: String,
    pub platforms: BTreeSet<HostPlatform>,
}

/// A boolean property that implies a framework reference under the desktop SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiFrameworkProperty {
    pub property: String,
    pub framework: String,
}

/// Immutable lookup table consulted by the resolver and the evaluator.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkRuleTable {
    desktop_sdk: String,
    rules: Vec<PlatformRule>,
    properties: Vec<UiFrameworkProperty>,
}

impl FrameworkRuleTable {
    /// Build the table of Windows desktop frameworks.
    pub fn builtin() -> Self {
        FrameworkRuleTable {
            desktop_sdk: WINDOWS_DESKTOP_SDK.to_string(),
            rules: BUILTIN_RULES
                .iter()
                .map(|(framework, platforms)| PlatformRule {
                    framework: framework.to_string(),
                    platforms: platforms.iter().copied().collect(),
                })
                .collect(),
            properties: BUILTIN_PROPERTIES
                .iter()
                .map(|(property, framework)| UiFrameworkProperty {
                    property: property.to_string(),
                    framework: framework.to_string(),
                })
                .collect(),
        }
    }

    /// Platforms required to build against `framework`.
    pub fn required_platforms(&self, framework: &str) -> PlatformConstraint {
        self.rules
            .iter()
            .find(|r| r.framework.eq_ignore_ascii_case(framework))
            .map(|r| PlatformConstraint::Requires(r.platforms.clone()))
            .unwrap_or(PlatformConstraint::Unconstrained)
    }

    /// Framework implied by a UI-framework-enabling property, if recognized.
    pub fn ui_framework_for_property(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.property.eq_ignore_ascii_case(property))
            .map(|p| p.framework.as_str())
    }

    /// Whether `sdk` names the desktop SDK.
    ///
    /// An `Sdk/version` suffix is ignored.
    pub fn is_desktop_sdk(&self, sdk: &str) -> bool {
        let name = sdk.split('/').next().unwrap_or_default().trim();
        name.eq_ignore_ascii_case(&self.desktop_sdk)
    }

    /// The desktop SDK identifier.
    pub fn desktop_sdk(&self) -> &str {
        &self.desktop_sdk
    }

    /// All platform rules.
    pub fn rules(&self) -> &[PlatformRule] {
        &self.rules
    }

    /// All recognized UI-framework-enabling properties.
    pub fn properties(&self) -> &[UiFrameworkProperty] {
        &self.properties
    }
}

impl Default for FrameworkRuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
