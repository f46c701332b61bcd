use crate::error::EvalError;
use crate::graph::{Condition, Operator};
use crate::trace::formatter::{fmt_number, fmt_operands};
use crate::trace::step::{EvaluationStep, Value};

/// Accumulates the evaluation trace.
///
/// The recorder is append-only and holds the literal step texts in one place.
/// Post-order is guaranteed by the engine's call order, not by the recorder:
/// a node records its step only after all of its dependencies have recorded
/// theirs.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<EvaluationStep>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_variable(&mut self, node_id: &str, name: &str, value: f64) {
        self.push(
            node_id,
            format!("Variable {}: {}", name, fmt_number(value)),
            Value::Number(value),
        );
    }

    pub fn record_number(&mut self, node_id: &str, value: f64) {
        self.push(
            node_id,
            format!("Número constante: {}", fmt_number(value)),
            Value::Number(value),
        );
    }

    pub fn record_operation(
        &mut self,
        node_id: &str,
        operator: Operator,
        operands: &[f64],
        result: f64,
    ) {
        self.push(
            node_id,
            format!(
                "Operación {}: [{}] = {}",
                operator,
                fmt_operands(operands),
                fmt_number(result)
            ),
            Value::Number(result),
        );
    }

    /// Records a comparison with its raw boolean outcome. The description
    /// shows the `1`/`0` encoding the parent nodes actually receive.
    pub fn record_comparison(
        &mut self,
        node_id: &str,
        condition: Condition,
        a: f64,
        b: f64,
        outcome: bool,
    ) {
        self.push(
            node_id,
            format!(
                "Comparación: {} {} {} = {}",
                fmt_number(a),
                condition,
                fmt_number(b),
                if outcome { 1 } else { 0 }
            ),
            Value::Bool(outcome),
        );
    }

    pub fn record_result(&mut self, node_id: &str, value: f64) {
        self.push(
            node_id,
            format!("Resultado final: {}", fmt_number(value)),
            Value::Number(value),
        );
    }

    /// Appends the single synthetic error step the boundary adds on failure.
    pub fn record_error(&mut self, error: &EvalError) {
        self.steps.push(EvaluationStep {
            node_id: error.node_id().unwrap_or_default().to_string(),
            description: format!("Error: {}", error),
            value: Value::Number(0.0),
            is_error: true,
        });
    }

    pub fn into_steps(self) -> Vec<EvaluationStep> {
        self.steps
    }

    fn push(&mut self, node_id: &str, description: String, value: Value) {
        self.steps.push(EvaluationStep {
            node_id: node_id.to_string(),
            description,
            value,
            is_error: false,
        });
    }
}
