//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! nomina crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use nomina::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a formula in the graph editor's JSON dialect and convert it
//! let formula_json = std::fs::read_to_string("path/to/formula.json")?;
//! let ui_formula: nomina::ui::UiFormula = serde_json::from_str(&formula_json)?;
//! let formula = ui_formula.into_formula()?;
//!
//! // Load class metrics and evaluate
//! let sample = SampleMetrics::from_file("path/to/metrics.json")?;
//! let evaluator = Evaluator::new(formula);
//! let result = evaluator.eval(sample.metrics());
//!
//! println!("Pago calculado: {}", result.value);
//! for step in &result.steps {
//!     println!("  {}", step.description);
//! }
//! # Ok(())
//! # }
//! ```

// Core evaluation
pub use crate::eval::{EvaluationResult, Evaluator, evaluate};

// Graph model
pub use crate::graph::{
    Condition, Connection, Formula, FormulaNode, IntoFormula, NodeKind, Operator, slot,
};

// Trace types
pub use crate::trace::{EvaluationStep, TraceRecorder, Value, fmt_number};

// Runtime data
pub use crate::data::{EvaluationInput, SampleMetrics};

// Error types
pub use crate::error::{EvalError, FormulaConversionError};

// Hashing re-export commonly used with this crate
pub use ahash::AHashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
