//! Platform compatibility gate.
//!
//! ## Pipeline
//!
//! ```text
//! ProjectDescriptor -> resolve() -> CompatibilityEvaluator::evaluate() -> Verdict
//!                                         ^
//!                                   HostPlatform::current()
//! ```
//!
//! Both stages consult the same immutable [`FrameworkRuleTable`]. Nothing
//! here performs I/O; a `Deny` verdict is handed to a
//! [`DiagnosticReporter`](crate::util::diagnostic::DiagnosticReporter)
//! which turns it into a failed build.

pub mod errors;
pub mod evaluate;
pub mod requirement;
pub mod rules;

pub use errors::{IncompatiblePlatformError, DIAGNOSTIC_CODE, WINDOWS_DESKTOP_REQUIRES_WINDOWS};
pub use evaluate::{CompatibilityEvaluator, Verdict};
pub use requirement::{resolve, FrameworkRequirement};
pub use rules::{FrameworkRuleTable, PlatformConstraint, PlatformRule, UiFrameworkProperty};
