use thiserror::Error;

/// Errors that can occur while evaluating a formula graph.
///
/// Display strings are in the trace language of the host system (Spanish);
/// they are surfaced verbatim to operators in the "why this amount" view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    // Structural
    #[error("La fórmula no tiene un nodo de resultado definido")]
    MissingResultNode,

    #[error("El nodo '{node_id}' no existe en la fórmula")]
    UnknownNodeReference { node_id: String },

    // Connectivity
    #[error("El nodo de operación '{node_id}' requiere al menos {required} operandos y recibió {found}")]
    InsufficientOperands {
        node_id: String,
        required: usize,
        found: usize,
    },

    #[error("El nodo comparador '{node_id}' no tiene conexión en la entrada '{slot}'")]
    ComparatorMissingInputs {
        node_id: String,
        slot: &'static str,
    },

    #[error("El nodo de resultado '{node_id}' no tiene una entrada conectada")]
    MissingResultInput { node_id: String },

    // Arithmetic
    #[error("División entre cero en el nodo '{node_id}'")]
    DivisionByZero { node_id: String },

    // Cycles
    #[error("La fórmula contiene un ciclo que pasa por el nodo '{node_id}'")]
    CycleDetected { node_id: String },

    #[error("El nodo '{node_id}' es de un tipo que el evaluador no soporta")]
    UnsupportedKind { node_id: String },
}

impl EvalError {
    /// The node where the failure surfaced, when one exists.
    ///
    /// `MissingResultNode` is the only failure with no node to point at.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            EvalError::MissingResultNode => None,
            EvalError::UnknownNodeReference { node_id }
            | EvalError::InsufficientOperands { node_id, .. }
            | EvalError::ComparatorMissingInputs { node_id, .. }
            | EvalError::MissingResultInput { node_id }
            | EvalError::DivisionByZero { node_id }
            | EvalError::CycleDetected { node_id }
            | EvalError::UnsupportedKind { node_id } => Some(node_id),
        }
    }
}

/// Errors that can occur when converting a custom editor format into a
/// canonical [`Formula`](crate::graph::Formula).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaConversionError {
    #[error("El nodo '{node_id}' es inválido: {message}")]
    InvalidNode { node_id: String, message: String },

    #[error("El identificador de nodo '{node_id}' está duplicado en la fórmula")]
    DuplicateNode { node_id: String },
}
