//! Command implementations

pub mod check;
pub mod host;
pub mod rules;
