//! Shared utilities

pub mod config;
pub mod context;
pub mod diagnostic;

pub use config::{Config, MessageFormat};
pub use context::GlobalContext;
pub use diagnostic::{Diagnostic, DiagnosticReporter, HumanReporter, JsonReporter};
