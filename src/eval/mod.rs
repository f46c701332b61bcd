//! The evaluator: the recursive reduction engine, the graph resolver it
//! leans on, and the public `evaluate` boundary that turns every outcome —
//! success or failure — into a well-formed [`EvaluationResult`].

use crate::data::EvaluationInput;
use crate::graph::Formula;
use crate::trace::EvaluationStep;
use serde::{Deserialize, Serialize};

mod engine;
mod resolver;

use engine::EvalEngine;

/// The result of one evaluation run.
///
/// This is always well-formed: no error or panic escapes [`evaluate`]. The
/// host's payment workflow takes `value` as the computed pay figure and shows
/// `steps`/`error` verbatim in the operator-facing audit view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// The computed number, or the sentinel `0` when `error` is set. Never a
    /// partial or guessed value.
    pub value: f64,
    /// The ordered trace of how `value` was built. On failure it holds
    /// everything computed before the failure plus one error step.
    pub steps: Vec<EvaluationStep>,
    /// A human-readable message in the trace language when evaluation failed.
    pub error: Option<String>,
}

/// Evaluates a formula against runtime metrics.
///
/// An `Evaluator` owns its formula and holds no other state; every call to
/// [`eval`](Evaluator::eval) starts with fresh memo and cycle tracking, so a
/// single instance can be shared across threads for a payroll run over many
/// instructors.
pub struct Evaluator {
    formula: Formula,
}

impl Evaluator {
    pub fn new(formula: Formula) -> Self {
        Self { formula }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Evaluates the formula against one set of metrics. See [`evaluate`].
    pub fn eval(&self, inputs: &EvaluationInput) -> EvaluationResult {
        evaluate(&self.formula, inputs)
    }
}

/// Reduces a formula graph to a single number plus its trace.
///
/// This is the error boundary of the whole engine: internal failures
/// (structural problems, missing connections, division by zero, cycles) are
/// caught exactly once, here, and reported as `value = 0` with an error
/// message and a final error step. All failures are deterministic for a given
/// `(formula, inputs)` pair, so there is nothing to retry.
pub fn evaluate(formula: &Formula, inputs: &EvaluationInput) -> EvaluationResult {
    log::debug!(
        "evaluating formula '{}' ({} nodes, {} connections)",
        formula.id,
        formula.nodes.len(),
        formula.connections.len()
    );

    let (outcome, mut trace) = EvalEngine::new(formula, inputs).run();
    match outcome {
        Ok(value) => {
            log::debug!("formula '{}' evaluated to {}", formula.id, value);
            EvaluationResult {
                value,
                steps: trace.into_steps(),
                error: None,
            }
        }
        Err(error) => {
            log::debug!("formula '{}' failed: {}", formula.id, error);
            trace.record_error(&error);
            EvaluationResult {
                value: 0.0,
                steps: trace.into_steps(),
                error: Some(error.to_string()),
            }
        }
    }
}
