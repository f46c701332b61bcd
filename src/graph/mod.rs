//! The data-only formula graph model and the conversion trait for custom
//! editor formats.

pub mod conversion;
pub mod definition;

pub use conversion::*;
pub use definition::*;
