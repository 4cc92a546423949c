//! Platform Gate - build-time platform compatibility checks
//!
//! Before a project is compiled, the gate decides whether the UI frameworks
//! it declares (directly or through SDK properties) can be built on the
//! current host, and produces a structured verdict the build can fail on.

pub mod core;
pub mod gate;
pub mod ops;
pub mod util;

/// Test fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{platform::HostPlatform, project::ProjectDescriptor};

pub use gate::{CompatibilityEvaluator, FrameworkRuleTable, IncompatiblePlatformError, Verdict};
pub use util::context::GlobalContext;
