use clap::Parser;
use nomina::data::SampleMetrics;
use nomina::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value as Json, json};
use std::fs;

/// A CLI tool to generate random formulas and metrics for the nomina evaluator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated formula JSON (editor format) to
    #[arg(short, long, default_value = "generated_formula.json")]
    output: String,

    /// The path to write the matching metrics JSON to
    #[arg(short, long, default_value = "generated_metrics.json")]
    metrics: String,

    /// The number of operation layers between the variables and the result
    #[arg(long, default_value_t = 2)]
    layers: usize,

    /// The number of operation nodes per layer
    #[arg(long, default_value_t = 3)]
    width: usize,
}

const METRIC_NAMES: [&str; 7] = [
    "reservaciones",
    "reservacionesPagadas",
    "listaEspera",
    "cortesias",
    "capacidad",
    "lugares",
    "ocupacion",
];

// Division is left out: a random denominator of zero would make the formula
// fail by construction, and these formulas exist to smoke-test the happy path.
const OPERATORS: [&str; 3] = ["SUM", "SUBTRACTION", "MULTIPLICATION"];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.width == 0 || cli.layers == 0 {
        eprintln!("Error: --layers and --width must both be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a layered acyclic formula ({} layers of {} operations)...",
        cli.layers, cli.width
    );

    let formula = generate_formula(&mut rng, cli.layers, cli.width);
    fs::write(&cli.output, serde_json::to_string_pretty(&formula)?)?;
    println!("-> Saved formula to '{}'.", cli.output);

    let sample = generate_metrics(&mut rng);
    fs::write(&cli.metrics, serde_json::to_string_pretty(&sample)?)?;
    println!("-> Saved metrics to '{}'.", cli.metrics);

    Ok(())
}

/// Builds an editor-format formula: variables and constants in layer 0,
/// `layers` rows of operation nodes each fed by the previous layer, and one
/// result node on top.
fn generate_formula(rng: &mut ThreadRng, layers: usize, width: usize) -> Json {
    let mut nodes: Vec<Json> = Vec::new();
    let mut connections: Vec<Json> = Vec::new();
    let mut connection_id = 0;

    // Layer 0: one variable per metric plus a couple of constants.
    let mut previous_layer: Vec<String> = Vec::new();
    for (i, name) in METRIC_NAMES.iter().enumerate() {
        let id = format!("var-{}", i);
        nodes.push(ui_node(&id, "variable", json!({ "name": name }), rng));
        previous_layer.push(id);
    }
    for i in 0..2 {
        let id = format!("num-{}", i);
        let value: f64 = rng.random_range(1.0..50.0);
        nodes.push(ui_node(&id, "number", json!({ "value": value }), rng));
        previous_layer.push(id);
    }

    for layer in 0..layers {
        let mut current_layer = Vec::with_capacity(width);
        for index in 0..width {
            let id = format!("op-{}-{}", layer, index);
            let operator = OPERATORS[rng.random_range(0..OPERATORS.len())];
            nodes.push(ui_node(&id, "operation", json!({ "operator": operator }), rng));

            let max_operands = previous_layer.len().min(3);
            let operand_count = if max_operands < 2 {
                max_operands
            } else {
                rng.random_range(2..=max_operands)
            };
            for slot_index in 0..operand_count {
                let source = &previous_layer[rng.random_range(0..previous_layer.len())];
                connections.push(ui_connection(
                    &mut connection_id,
                    source,
                    &id,
                    &format!("in-{}", slot_index),
                ));
            }
            current_layer.push(id);
        }
        previous_layer = current_layer;
    }

    nodes.push(ui_node("res", "result", Json::Null, rng));
    let top = &previous_layer[rng.random_range(0..previous_layer.len())];
    connections.push(ui_connection(&mut connection_id, top, "res", "input"));

    json!({
        "id": "generated-formula",
        "nodes": nodes,
        "connections": connections,
        "resultNodeId": "res",
    })
}

fn ui_node(id: &str, node_type: &str, data: Json, rng: &mut ThreadRng) -> Json {
    json!({
        "id": id,
        "type": node_type,
        "data": data,
        "position": {
            "x": rng.random_range(0.0..1200.0),
            "y": rng.random_range(0.0..800.0),
        },
    })
}

fn ui_connection(connection_id: &mut usize, source: &str, destination: &str, slot: &str) -> Json {
    *connection_id += 1;
    json!({
        "id": format!("conn-{}", connection_id),
        "sourceNodeId": source,
        "destinationNodeId": destination,
        "outputSlot": "output",
        "inputSlot": slot,
    })
}

/// Random but plausible class metrics matching the generated variables.
fn generate_metrics(rng: &mut ThreadRng) -> SampleMetrics {
    let mut metrics = AHashMap::new();
    let capacity: f64 = rng.random_range(10..=40) as f64;
    let reservations: f64 = rng.random_range(0..=capacity as u32) as f64;
    metrics.insert("capacidad".to_string(), capacity);
    metrics.insert("lugares".to_string(), capacity);
    metrics.insert("reservaciones".to_string(), reservations);
    metrics.insert(
        "reservacionesPagadas".to_string(),
        rng.random_range(0..=reservations as u32) as f64,
    );
    metrics.insert("listaEspera".to_string(), rng.random_range(0..=8) as f64);
    metrics.insert("cortesias".to_string(), rng.random_range(0..=4) as f64);
    metrics.insert(
        "ocupacion".to_string(),
        (reservations / capacity * 100.0).round(),
    );
    println!("-> Generated metrics for a class of {}.", capacity);
    SampleMetrics { metrics }
}
