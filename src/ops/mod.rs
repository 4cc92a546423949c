//! High-level operations.
//!
//! This module contains the implementation of the gate's commands.

pub mod check;

pub use check::{check, check_on, check_project, CheckOptions, CheckReport, ProjectOutcome};
