//! Serde types for the host graph editor's raw JSON dialect.

pub mod types;

pub use types::*;
