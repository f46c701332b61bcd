use crate::error::FormulaConversionError;
use crate::graph::{
    Condition, Connection, Formula, FormulaNode, IntoFormula, NodeKind, Operator, slot,
};
use ahash::AHashMap;
use serde::Deserialize;

/// Canvas coordinates assigned by the graph editor. Irrelevant to evaluation
/// and dropped during conversion.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// The per-node payload the editor writes. Which field is present depends on
/// the node's `type` tag.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiNodeData {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub operator: Option<String>,
    pub condition: Option<String>,
}

/// UI node with id, type tag, payload and layout data.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub data: Option<UiNodeData>,
    #[serde(default)]
    pub position: Option<UiPosition>,
}

/// UI edge connecting one node's output slot to another node's input slot.
#[derive(Debug, Deserialize)]
pub struct UiConnection {
    pub id: String,
    #[serde(alias = "sourceNodeId")]
    pub source_node_id: String,
    #[serde(alias = "destinationNodeId")]
    pub destination_node_id: String,
    #[serde(default = "default_output_slot", alias = "outputSlot")]
    pub output_slot: String,
    #[serde(alias = "inputSlot")]
    pub input_slot: String,
}

fn default_output_slot() -> String {
    slot::OUTPUT.to_string()
}

/// Complete editor formula structure.
#[derive(Debug, Deserialize)]
pub struct UiFormula {
    pub id: String,
    pub nodes: Vec<UiNode>,
    pub connections: Vec<UiConnection>,
    #[serde(default, alias = "resultNodeId")]
    pub result_node_id: Option<String>,
}

impl IntoFormula for UiFormula {
    fn into_formula(self) -> Result<Formula, FormulaConversionError> {
        let mut nodes = AHashMap::with_capacity(self.nodes.len());
        for ui_node in self.nodes {
            let kind = convert_kind(&ui_node)?;
            let id = ui_node.id;
            let previous = nodes.insert(id.clone(), FormulaNode { id: id.clone(), kind });
            if previous.is_some() {
                return Err(FormulaConversionError::DuplicateNode { node_id: id });
            }
        }

        let connections = self
            .connections
            .into_iter()
            .map(|ui_connection| Connection {
                id: ui_connection.id,
                source_node_id: ui_connection.source_node_id,
                destination_node_id: ui_connection.destination_node_id,
                output_slot: ui_connection.output_slot,
                input_slot: ui_connection.input_slot,
            })
            .collect();

        Ok(Formula {
            id: self.id,
            nodes,
            connections,
            result_node_id: self.result_node_id,
        })
    }
}

/// Maps an editor type tag onto [`NodeKind`].
///
/// Unknown node types and unknown operator/condition tags become
/// [`NodeKind::Unsupported`]: a formula written by a newer editor version
/// still converts, and evaluation fails only if the node is actually
/// reachable from the result. A known tag with its payload missing is a
/// conversion error instead, because the editor never writes that.
fn convert_kind(node: &UiNode) -> Result<NodeKind, FormulaConversionError> {
    let data = node.data.as_ref();
    let kind = match node.node_type.as_str() {
        "variable" => {
            let name = data
                .and_then(|data| data.name.clone())
                .ok_or_else(|| invalid(node, "un nodo de variable requiere un nombre de métrica"))?;
            NodeKind::Variable { name }
        }
        "number" => {
            let value = data
                .and_then(|data| data.value)
                .ok_or_else(|| invalid(node, "un nodo de número requiere un valor"))?;
            NodeKind::Number { value }
        }
        "operation" => {
            let tag = data
                .and_then(|data| data.operator.as_deref())
                .ok_or_else(|| invalid(node, "un nodo de operación requiere un operador"))?;
            match Operator::from_tag(tag) {
                Some(operator) => NodeKind::Operation { operator },
                None => NodeKind::Unsupported,
            }
        }
        "comparator" => {
            let tag = data
                .and_then(|data| data.condition.as_deref())
                .ok_or_else(|| invalid(node, "un nodo comparador requiere una condición"))?;
            match Condition::from_tag(tag) {
                Some(condition) => NodeKind::Comparator { condition },
                None => NodeKind::Unsupported,
            }
        }
        "result" => NodeKind::Result,
        _ => NodeKind::Unsupported,
    };
    Ok(kind)
}

fn invalid(node: &UiNode, message: &str) -> FormulaConversionError {
    FormulaConversionError::InvalidNode {
        node_id: node.id.clone(),
        message: message.to_string(),
    }
}
