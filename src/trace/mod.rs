//! The append-only evaluation trace: step records, the recorder that
//! accumulates them in post-order, and number formatting shared with the
//! trace texts.

pub mod formatter;
pub mod recorder;
pub mod step;

pub use formatter::fmt_number;
pub use recorder::TraceRecorder;
pub use step::{EvaluationStep, Value};
