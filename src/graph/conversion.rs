use super::definition::Formula;
use crate::error::FormulaConversionError;

/// A trait for custom data models that can be converted into a canonical
/// [`Formula`].
///
/// This is the primary extension point for keeping the engine format-agnostic.
/// By implementing this trait on your own structs, you provide a translation
/// layer that lets the evaluator process whatever shape your editor or
/// database stores formulas in. The stock graph editor's JSON already has an
/// implementation on [`UiFormula`](crate::ui::UiFormula).
///
/// # Example
///
/// ```rust
/// use nomina::prelude::*;
/// use nomina::error::FormulaConversionError;
/// use ahash::AHashMap;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyCustomNode { id: String, metric: String }
/// struct MyCustomFormula { id: String, nodes: Vec<MyCustomNode> }
///
/// // 2. Implement `IntoFormula` for your top-level struct.
/// impl IntoFormula for MyCustomFormula {
///     fn into_formula(self) -> std::result::Result<Formula, FormulaConversionError> {
///         let mut nodes = AHashMap::new();
///         for node in self.nodes {
///             // Your logic to map your node model onto `NodeKind`.
///             let converted = FormulaNode {
///                 id: node.id.clone(),
///                 kind: NodeKind::Variable { name: node.metric },
///             };
///             nodes.insert(node.id, converted);
///         }
///
///         Ok(Formula {
///             id: self.id,
///             nodes,
///             connections: vec![], // Convert your edges here as well
///             result_node_id: None,
///         })
///     }
/// }
/// ```
pub trait IntoFormula {
    /// Consumes the object and converts it into an evaluator-ready formula.
    fn into_formula(self) -> Result<Formula, FormulaConversionError>;
}
