use super::resolver::GraphResolver;
use crate::data::EvaluationInput;
use crate::error::EvalError;
use crate::graph::{Condition, Formula, NodeKind, Operator, slot};
use crate::trace::TraceRecorder;
use ahash::AHashMap;
use std::collections::HashSet;

/// The core depth-first reduction of one `evaluate` call.
///
/// All mutable state is owned by the engine and lives exactly as long as the
/// call: `memo` caches finished nodes so shared sub-expressions compute once,
/// and `in_progress` holds the ids on the current recursion path so re-entry
/// is caught as a cycle instead of looping forever. Per node the states are
/// `unvisited → in_progress → memoized`; the only other transition is
/// re-entering `in_progress`, which aborts the call.
pub(super) struct EvalEngine<'a> {
    resolver: GraphResolver<'a>,
    inputs: &'a EvaluationInput,
    memo: AHashMap<String, f64>,
    in_progress: HashSet<String>,
    trace: TraceRecorder,
}

impl<'a> EvalEngine<'a> {
    pub(super) fn new(formula: &'a Formula, inputs: &'a EvaluationInput) -> Self {
        Self {
            resolver: GraphResolver::new(formula),
            inputs,
            memo: AHashMap::new(),
            in_progress: HashSet::new(),
            trace: TraceRecorder::new(),
        }
    }

    /// Resolves the terminal node and reduces it. Returns whatever trace was
    /// accumulated alongside the outcome, so the boundary can report the
    /// steps leading up to a failure.
    pub(super) fn run(mut self) -> (Result<f64, EvalError>, TraceRecorder) {
        let resolved = self.resolver.result_node_id();
        let outcome = resolved.and_then(|node_id| self.eval_node(node_id));
        (outcome, self.trace)
    }

    fn eval_node(&mut self, node_id: &str) -> Result<f64, EvalError> {
        if let Some(value) = self.memo.get(node_id) {
            log::trace!("memo hit for node '{}'", node_id);
            return Ok(*value);
        }
        if self.in_progress.contains(node_id) {
            return Err(EvalError::CycleDetected {
                node_id: node_id.to_string(),
            });
        }
        self.in_progress.insert(node_id.to_string());

        let node = self.resolver.node(node_id)?;
        log::trace!("evaluating node '{}'", node_id);

        let value = match &node.kind {
            NodeKind::Variable { name } => {
                // Missing metrics default silently to 0. Intentional: stored
                // formulas reference metrics a given class may not report.
                let value = self.inputs.get(name).copied().unwrap_or(0.0);
                self.trace.record_variable(node_id, name, value);
                value
            }
            NodeKind::Number { value } => {
                let value = *value;
                self.trace.record_number(node_id, value);
                value
            }
            NodeKind::Operation { operator } => self.eval_operation(node_id, *operator)?,
            NodeKind::Comparator { condition } => self.eval_comparator(node_id, *condition)?,
            NodeKind::Result => self.eval_result(node_id)?,
            NodeKind::Unsupported => {
                return Err(EvalError::UnsupportedKind {
                    node_id: node_id.to_string(),
                });
            }
        };

        self.memo.insert(node_id.to_string(), value);
        self.in_progress.remove(node_id);
        Ok(value)
    }

    /// Operations are slot-agnostic: every incoming connection contributes an
    /// operand, in connection declaration order.
    fn eval_operation(&mut self, node_id: &str, operator: Operator) -> Result<f64, EvalError> {
        let incoming = self.resolver.incoming(node_id, None);
        let mut operands = Vec::with_capacity(incoming.len());
        for connection in incoming {
            operands.push(self.eval_node(&connection.source_node_id)?);
        }

        let required = match operator {
            Operator::Division | Operator::Percentage => 2,
            _ => 1,
        };
        if operands.len() < required {
            return Err(EvalError::InsufficientOperands {
                node_id: node_id.to_string(),
                required,
                found: operands.len(),
            });
        }

        let result = match operator {
            Operator::Sum => operands.iter().sum(),
            // A lone operand passes through unchanged.
            Operator::Subtraction => operands[0] - operands[1..].iter().sum::<f64>(),
            Operator::Multiplication => operands.iter().product(),
            // Division and percentage use only the first two operands.
            Operator::Division => {
                if operands[1] == 0.0 {
                    return Err(EvalError::DivisionByZero {
                        node_id: node_id.to_string(),
                    });
                }
                operands[0] / operands[1]
            }
            Operator::Percentage => operands[0] * operands[1] / 100.0,
        };

        self.trace.record_operation(node_id, operator, &operands, result);
        Ok(result)
    }

    /// Comparators are slot-named: the `valueA` and `valueB` inputs must each
    /// be connected. The boolean outcome is encoded as `1`/`0` so it composes
    /// with arithmetic nodes downstream.
    fn eval_comparator(&mut self, node_id: &str, condition: Condition) -> Result<f64, EvalError> {
        let source_a = self.slot_source(node_id, slot::VALUE_A).ok_or_else(|| {
            EvalError::ComparatorMissingInputs {
                node_id: node_id.to_string(),
                slot: slot::VALUE_A,
            }
        })?;
        let source_b = self.slot_source(node_id, slot::VALUE_B).ok_or_else(|| {
            EvalError::ComparatorMissingInputs {
                node_id: node_id.to_string(),
                slot: slot::VALUE_B,
            }
        })?;

        let a = self.eval_node(source_a)?;
        let b = self.eval_node(source_b)?;

        let outcome = match condition {
            Condition::MayorQue => a > b,
            Condition::MenorQue => a < b,
            Condition::Igual => a == b,
            Condition::MayorIgual => a >= b,
            Condition::MenorIgual => a <= b,
        };

        self.trace
            .record_comparison(node_id, condition, a, b, outcome);
        Ok(if outcome { 1.0 } else { 0.0 })
    }

    fn eval_result(&mut self, node_id: &str) -> Result<f64, EvalError> {
        let source = self.slot_source(node_id, slot::INPUT).ok_or_else(|| {
            EvalError::MissingResultInput {
                node_id: node_id.to_string(),
            }
        })?;
        let value = self.eval_node(source)?;
        self.trace.record_result(node_id, value);
        Ok(value)
    }

    /// The source feeding a named slot. When several connections target the
    /// same slot, the first in declaration order wins.
    fn slot_source(&self, node_id: &str, slot: &str) -> Option<&'a str> {
        self.resolver
            .incoming(node_id, Some(slot))
            .into_iter()
            .next()
            .map(|connection| connection.source_node_id.as_str())
    }
}
