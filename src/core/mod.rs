//! Core data types: host platform and project descriptor.

pub mod platform;
pub mod project;

pub use platform::HostPlatform;
pub use project::{ProjectDescriptor, PROJECT_FILE_NAME};
