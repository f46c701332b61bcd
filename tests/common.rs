//! Common test utilities for building formula graphs and metric maps.
use nomina::prelude::*;

/// Builds a `Formula` from node and connection lists.
#[allow(dead_code)]
pub fn formula(
    nodes: Vec<FormulaNode>,
    connections: Vec<Connection>,
    result_node_id: Option<&str>,
) -> Formula {
    Formula {
        id: "test-formula".to_string(),
        nodes: nodes
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect(),
        connections,
        result_node_id: result_node_id.map(str::to_string),
    }
}

#[allow(dead_code)]
pub fn variable(id: &str, name: &str) -> FormulaNode {
    FormulaNode {
        id: id.to_string(),
        kind: NodeKind::Variable {
            name: name.to_string(),
        },
    }
}

#[allow(dead_code)]
pub fn number(id: &str, value: f64) -> FormulaNode {
    FormulaNode {
        id: id.to_string(),
        kind: NodeKind::Number { value },
    }
}

#[allow(dead_code)]
pub fn operation(id: &str, operator: Operator) -> FormulaNode {
    FormulaNode {
        id: id.to_string(),
        kind: NodeKind::Operation { operator },
    }
}

#[allow(dead_code)]
pub fn comparator(id: &str, condition: Condition) -> FormulaNode {
    FormulaNode {
        id: id.to_string(),
        kind: NodeKind::Comparator { condition },
    }
}

#[allow(dead_code)]
pub fn result_node(id: &str) -> FormulaNode {
    FormulaNode {
        id: id.to_string(),
        kind: NodeKind::Result,
    }
}

/// Connects `source` to `destination` on the given input slot. Connection ids
/// are derived from the endpoints so tests stay terse.
#[allow(dead_code)]
pub fn connect(source: &str, destination: &str, input_slot: &str) -> Connection {
    Connection {
        id: format!("{}->{}", source, destination),
        source_node_id: source.to_string(),
        destination_node_id: destination.to_string(),
        output_slot: slot::OUTPUT.to_string(),
        input_slot: input_slot.to_string(),
    }
}

#[allow(dead_code)]
pub fn inputs(entries: &[(&str, f64)]) -> EvaluationInput {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

/// Scenario A: `Result ← SUM ← [Variable("reservaciones"), Number(10)]`.
#[allow(dead_code)]
pub fn simple_sum_formula() -> Formula {
    formula(
        vec![
            variable("var", "reservaciones"),
            number("ten", 10.0),
            operation("sum", Operator::Sum),
            result_node("res"),
        ],
        vec![
            connect("var", "sum", "a"),
            connect("ten", "sum", "b"),
            connect("sum", "res", slot::INPUT),
        ],
        Some("res"),
    )
}

/// Scenario B: `Result ← Comparator(valueA=Variable("ocupacion"),
/// valueB=Number(80))`.
#[allow(dead_code)]
pub fn comparator_formula(condition: Condition) -> Formula {
    formula(
        vec![
            variable("occ", "ocupacion"),
            number("limit", 80.0),
            comparator("cmp", condition),
            result_node("res"),
        ],
        vec![
            connect("occ", "cmp", slot::VALUE_A),
            connect("limit", "cmp", slot::VALUE_B),
            connect("cmp", "res", slot::INPUT),
        ],
        Some("res"),
    )
}

/// A diamond: one shared variable feeding two operations, both feeding the
/// top-level sum.
///
/// ```text
///            Result
///              |
///             sum
///            /   \
///     double      triple
///           \     /
///          shared (Variable "reservaciones")
/// ```
#[allow(dead_code)]
pub fn diamond_formula() -> Formula {
    formula(
        vec![
            variable("shared", "reservaciones"),
            number("two", 2.0),
            number("three", 3.0),
            operation("double", Operator::Multiplication),
            operation("triple", Operator::Multiplication),
            operation("sum", Operator::Sum),
            result_node("res"),
        ],
        vec![
            connect("shared", "double", "a"),
            connect("two", "double", "b"),
            connect("shared", "triple", "a"),
            connect("three", "triple", "b"),
            connect("double", "sum", "a"),
            connect("triple", "sum", "b"),
            connect("sum", "res", slot::INPUT),
        ],
        Some("res"),
    )
}

/// Two operations that feed each other, reachable from the result.
#[allow(dead_code)]
pub fn cyclic_formula() -> Formula {
    formula(
        vec![
            operation("op-a", Operator::Sum),
            operation("op-b", Operator::Sum),
            result_node("res"),
        ],
        vec![
            connect("op-b", "op-a", "a"),
            connect("op-a", "op-b", "a"),
            connect("op-a", "res", slot::INPUT),
        ],
        Some("res"),
    )
}

/// No `Result`-kind node and no designated result id (Scenario C).
#[allow(dead_code)]
pub fn no_result_formula() -> Formula {
    formula(
        vec![variable("var", "reservaciones"), number("ten", 10.0)],
        vec![],
        None,
    )
}

/// Scenario A in the graph editor's JSON dialect, layout data included.
#[allow(dead_code)]
pub const SIMPLE_FORMULA_JSON: &str = r#"{
    "id": "pago-base",
    "nodes": [
        {
            "id": "var",
            "type": "variable",
            "data": { "name": "reservaciones" },
            "position": { "x": 40.0, "y": 120.0 }
        },
        {
            "id": "ten",
            "type": "number",
            "data": { "value": 10.0 },
            "position": { "x": 40.0, "y": 260.0 }
        },
        {
            "id": "sum",
            "type": "operation",
            "data": { "operator": "SUM" },
            "position": { "x": 320.0, "y": 190.0 }
        },
        {
            "id": "res",
            "type": "result",
            "position": { "x": 600.0, "y": 190.0 }
        }
    ],
    "connections": [
        {
            "id": "c1",
            "sourceNodeId": "var",
            "destinationNodeId": "sum",
            "outputSlot": "output",
            "inputSlot": "a"
        },
        {
            "id": "c2",
            "sourceNodeId": "ten",
            "destinationNodeId": "sum",
            "outputSlot": "output",
            "inputSlot": "b"
        },
        {
            "id": "c3",
            "sourceNodeId": "sum",
            "destinationNodeId": "res",
            "outputSlot": "output",
            "inputSlot": "input"
        }
    ],
    "resultNodeId": "res"
}"#;
