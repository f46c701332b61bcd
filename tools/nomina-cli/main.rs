use clap::Parser;
use nomina::prelude::*;
use nomina::ui::UiFormula;
use std::fs;
use std::time::Instant;

/// A graph-based pay-formula evaluation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the formula JSON file (graph editor format)
    formula_path: String,
    /// Optional path to a metrics JSON file for evaluation
    metrics_path: Option<String>,

    /// Print the evaluation result as JSON instead of a report
    #[arg(short, long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let formula_json = fs::read_to_string(&cli.formula_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read formula file '{}': {}",
            &cli.formula_path, e
        ))
    });

    let sample = if let Some(metrics_path) = &cli.metrics_path {
        SampleMetrics::from_file(metrics_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to load metrics from '{}': {}",
                metrics_path, e
            ))
        })
    } else {
        if !cli.json {
            println!("No metrics file provided. Using default mock metrics.");
        }
        SampleMetrics::default()
    };
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let convert_start = Instant::now();
    let ui_formula: UiFormula = serde_json::from_str(&formula_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse formula JSON: {}", e)));

    let formula = ui_formula
        .into_formula()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert formula: {}", e)));
    let convert_duration = convert_start.elapsed();

    // --- 3. Evaluation ---
    let evaluator = Evaluator::new(formula);
    let eval_start = Instant::now();
    let result = evaluator.eval(sample.metrics());
    let eval_duration = eval_start.elapsed();

    if cli.json {
        let output = serde_json::to_string_pretty(&result)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));
        println!("{}", output);
        return;
    }

    // --- 4. Results and Summary ---
    println!("\nEvaluation Finished!");
    println!("\n--- Trace ---");
    for step in &result.steps {
        let marker = if step.is_error { "!" } else { "-" };
        println!("  {} {}", marker, step.description);
    }

    match &result.error {
        Some(message) => println!("\n  -> Failed: {} (value = {})", message, result.value),
        None => println!("\n  -> Computed pay: {}", fmt_number(result.value)),
    }

    let total_duration = total_start.elapsed();
    println!("\n--- Formula Summary ---");
    println!("Formula:     {}", evaluator.formula().id);
    println!("Nodes:       {}", evaluator.formula().nodes.len());
    println!("Connections: {}", evaluator.formula().connections.len());
    println!("Metrics:     {}", sample.metrics().len());

    println!("\n--- Performance Summary ---");
    println!("File Loading:    {:?}", load_duration);
    println!("Conversion:      {:?}", convert_duration);
    println!("Evaluation:      {:?}", eval_duration);
    println!("-----------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
