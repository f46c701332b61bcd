use crate::trace::formatter::fmt_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value a trace step carries: the number a node produced, or the raw
/// boolean outcome of a comparison before its `1`/`0` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", fmt_number(*n)),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// One entry in the evaluation trace.
///
/// Steps are appended in post-order: a node's step comes after the steps of
/// everything it depends on, so the sequence reads top-to-bottom as "how the
/// answer was built". The host UI shows `description` verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationStep {
    /// The node this step explains. Empty for the synthetic step recorded
    /// when a failure has no node to point at.
    pub node_id: String,
    pub description: String,
    pub value: Value,
    pub is_error: bool,
}
