//! # Nomina - Pay-Formula Evaluation Engine
//!
//! **Nomina** is the formula evaluation core of a fitness-studio administration
//! system. Instructors are paid by user-authored rules: an operator draws a
//! directed graph of computation nodes (metric variables, numeric constants,
//! n-ary arithmetic operations, relational comparators and one terminal result)
//! in a visual editor, and this crate reduces that graph plus a map of named
//! class metrics to a single number — together with an ordered, human-readable
//! trace of how the number was derived, so the operator can always answer
//! "why this amount?".
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical [`Formula`]
//! model. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse the formula definition from wherever the host
//!     stores it. For the stock graph editor's JSON there is a ready-made
//!     [`ui::UiFormula`] type; any other format can implement the
//!     [`graph::IntoFormula`] trait to provide a translation layer.
//! 2.  **Evaluate**: Call [`evaluate`] (or hold an [`Evaluator`] and call
//!     [`Evaluator::eval`] repeatedly) with an [`data::EvaluationInput`] map of
//!     metric values for one class or pay period.
//! 3.  **Consume the Result**: [`EvaluationResult::value`] is the computed pay
//!     figure; [`EvaluationResult::steps`] is the step-by-step trace surfaced
//!     verbatim in the host's audit view. Evaluation never panics and never
//!     returns an `Err` — structural problems, cycles and division by zero all
//!     come back as a well-formed result with `value = 0` and an error message.
//!
//! ## Quick Start
//!
//! The following example evaluates `Result ← SUM ← [Variable("reservaciones"),
//! Number(10)]` with 25 reservations.
//!
//! ```rust
//! use nomina::prelude::*;
//!
//! let nodes: AHashMap<String, FormulaNode> = [
//!     FormulaNode {
//!         id: "var".to_string(),
//!         kind: NodeKind::Variable { name: "reservaciones".to_string() },
//!     },
//!     FormulaNode {
//!         id: "ten".to_string(),
//!         kind: NodeKind::Number { value: 10.0 },
//!     },
//!     FormulaNode {
//!         id: "sum".to_string(),
//!         kind: NodeKind::Operation { operator: Operator::Sum },
//!     },
//!     FormulaNode {
//!         id: "res".to_string(),
//!         kind: NodeKind::Result,
//!     },
//! ]
//! .into_iter()
//! .map(|node| (node.id.clone(), node))
//! .collect();
//!
//! let connections = vec![
//!     Connection {
//!         id: "c1".to_string(),
//!         source_node_id: "var".to_string(),
//!         destination_node_id: "sum".to_string(),
//!         output_slot: slot::OUTPUT.to_string(),
//!         input_slot: "a".to_string(),
//!     },
//!     Connection {
//!         id: "c2".to_string(),
//!         source_node_id: "ten".to_string(),
//!         destination_node_id: "sum".to_string(),
//!         output_slot: slot::OUTPUT.to_string(),
//!         input_slot: "b".to_string(),
//!     },
//!     Connection {
//!         id: "c3".to_string(),
//!         source_node_id: "sum".to_string(),
//!         destination_node_id: "res".to_string(),
//!         output_slot: slot::OUTPUT.to_string(),
//!         input_slot: slot::INPUT.to_string(),
//!     },
//! ];
//!
//! let formula = Formula {
//!     id: "pago-base".to_string(),
//!     nodes,
//!     connections,
//!     result_node_id: Some("res".to_string()),
//! };
//!
//! let mut inputs = EvaluationInput::default();
//! inputs.insert("reservaciones".to_string(), 25.0);
//!
//! let result = evaluate(&formula, &inputs);
//! assert_eq!(result.value, 35.0);
//! assert_eq!(result.error, None);
//!
//! // The trace reads top-to-bottom as "how the answer was built":
//! //   Variable reservaciones: 25
//! //   Número constante: 10
//! //   Operación SUM: [25, 10] = 35
//! //   Resultado final: 35
//! for step in &result.steps {
//!     println!("{}", step.description);
//! }
//! ```

pub mod data;
pub mod error;
pub mod eval;
pub mod graph;
pub mod prelude;
pub mod trace;
pub mod ui;

pub use eval::{EvaluationResult, Evaluator, evaluate};
pub use graph::{Connection, Formula, FormulaNode, NodeKind};
