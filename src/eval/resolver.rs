use crate::error::EvalError;
use crate::graph::{Connection, Formula, FormulaNode, NodeKind};
use ahash::AHashMap;

/// Locates the terminal node and answers "what feeds this node?" queries.
///
/// Connections are indexed by destination once per resolver, so a full
/// evaluation stays `O(nodes + connections)`. Per-destination order is
/// declaration order, which is the operand order n-ary operations see.
pub(super) struct GraphResolver<'a> {
    formula: &'a Formula,
    by_destination: AHashMap<&'a str, Vec<&'a Connection>>,
}

impl<'a> GraphResolver<'a> {
    pub(super) fn new(formula: &'a Formula) -> Self {
        let mut by_destination: AHashMap<&'a str, Vec<&'a Connection>> = AHashMap::new();
        for connection in &formula.connections {
            by_destination
                .entry(connection.destination_node_id.as_str())
                .or_default()
                .push(connection);
        }
        Self {
            formula,
            by_destination,
        }
    }

    /// The id of the node evaluation starts from: the designated
    /// `result_node_id` when set, otherwise the first node of `Result` kind.
    ///
    /// `nodes` is a hash map, so "first" needs a deterministic order: the
    /// fallback scans connections in declaration order (destination, then
    /// source) and only then the remaining node ids lexicographically.
    pub(super) fn result_node_id(&self) -> Result<&'a str, EvalError> {
        if let Some(id) = self.formula.result_node_id.as_deref() {
            return Ok(id);
        }

        for connection in &self.formula.connections {
            for id in [
                connection.destination_node_id.as_str(),
                connection.source_node_id.as_str(),
            ] {
                if let Some(node) = self.formula.nodes.get(id) {
                    if matches!(node.kind, NodeKind::Result) {
                        return Ok(node.id.as_str());
                    }
                }
            }
        }

        let mut unconnected: Vec<&'a str> = self
            .formula
            .nodes
            .values()
            .filter(|node| matches!(node.kind, NodeKind::Result))
            .map(|node| node.id.as_str())
            .collect();
        unconnected.sort_unstable();
        unconnected
            .first()
            .copied()
            .ok_or(EvalError::MissingResultNode)
    }

    /// All connections into `node_id`, optionally filtered by input slot,
    /// in declaration order.
    pub(super) fn incoming(&self, node_id: &str, slot: Option<&str>) -> Vec<&'a Connection> {
        let Some(connections) = self.by_destination.get(node_id) else {
            return Vec::new();
        };
        match slot {
            Some(slot) => connections
                .iter()
                .filter(|connection| connection.input_slot == slot)
                .copied()
                .collect(),
            None => connections.clone(),
        }
    }

    pub(super) fn node(&self, node_id: &str) -> Result<&'a FormulaNode, EvalError> {
        self.formula
            .nodes
            .get(node_id)
            .ok_or_else(|| EvalError::UnknownNodeReference {
                node_id: node_id.to_string(),
            })
    }
}
