use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the input slots the evaluator looks up by name.
///
/// `Operation` nodes are slot-agnostic (all incoming connections count, in
/// declaration order); `Comparator` and `Result` nodes require these exact
/// slot names.
pub mod slot {
    /// The single input of a `Result` node.
    pub const INPUT: &str = "input";
    /// Left-hand comparator input.
    pub const VALUE_A: &str = "valueA";
    /// Right-hand comparator input.
    pub const VALUE_B: &str = "valueB";
    /// Default output slot written by the graph editor.
    pub const OUTPUT: &str = "output";
}

/// The complete, canonical definition of a pay formula, ready for evaluation.
/// This is the target structure for any custom editor-format conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    pub id: String,
    /// Nodes keyed by their id; the map makes id uniqueness structural.
    pub nodes: AHashMap<String, FormulaNode>,
    /// Directed edges, in declaration order. The order is semantically
    /// meaningful: it decides operand order for n-ary operations.
    pub connections: Vec<Connection>,
    /// The designated terminal node. When unset, evaluation falls back to
    /// the first node of `Result` kind.
    #[serde(default)]
    pub result_node_id: Option<String>,
}

/// A single computation node in the formula graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaNode {
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// What a node computes. One variant per node kind; the payload each kind
/// carries is statically tied to its variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    /// Reads a named metric from the evaluation input.
    Variable { name: String },
    /// A numeric literal.
    Number { value: f64 },
    /// An n-ary arithmetic operation over all incoming connections.
    Operation { operator: Operator },
    /// A relational comparison of the `valueA` and `valueB` slots.
    Comparator { condition: Condition },
    /// The terminal node; passes its `input` slot through unchanged.
    Result,
    /// Any node type this engine does not know. Formulas written by newer
    /// editor versions still deserialize; evaluation fails only if the node
    /// is actually reachable from the result.
    #[serde(other)]
    Unsupported,
}

/// Arithmetic operators, serialized with their wire names (`"SUM"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Sum,
    Subtraction,
    Multiplication,
    Division,
    Percentage,
}

impl Operator {
    /// Parses a wire-format tag (`"SUM"`, `"DIVISION"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "SUM" => Some(Operator::Sum),
            "SUBTRACTION" => Some(Operator::Subtraction),
            "MULTIPLICATION" => Some(Operator::Multiplication),
            "DIVISION" => Some(Operator::Division),
            "PERCENTAGE" => Some(Operator::Percentage),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Sum => "SUM",
            Operator::Subtraction => "SUBTRACTION",
            Operator::Multiplication => "MULTIPLICATION",
            Operator::Division => "DIVISION",
            Operator::Percentage => "PERCENTAGE",
        };
        write!(f, "{}", name)
    }
}

/// Relational conditions, serialized with their wire names (`"MAYOR_QUE"`,
/// ...) and displayed as comparison symbols in traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    MayorQue,
    MenorQue,
    Igual,
    MayorIgual,
    MenorIgual,
}

impl Condition {
    /// Parses a wire-format tag (`"MAYOR_QUE"`, `"IGUAL"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "MAYOR_QUE" => Some(Condition::MayorQue),
            "MENOR_QUE" => Some(Condition::MenorQue),
            "IGUAL" => Some(Condition::Igual),
            "MAYOR_IGUAL" => Some(Condition::MayorIgual),
            "MENOR_IGUAL" => Some(Condition::MenorIgual),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Condition::MayorQue => ">",
            Condition::MenorQue => "<",
            Condition::Igual => "==",
            Condition::MayorIgual => ">=",
            Condition::MenorIgual => "<=",
        };
        write!(f, "{}", symbol)
    }
}

/// A directed edge from one node's output slot to another node's named
/// input slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub source_node_id: String,
    pub destination_node_id: String,
    pub output_slot: String,
    pub input_slot: String,
}
