//! Runtime metric data supplied for one evaluation run.

pub mod model;

pub use model::*;
