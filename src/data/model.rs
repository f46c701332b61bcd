use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// The named numeric metrics supplied for a single evaluation run, e.g.
/// reservations, waitlist size or room capacity for one class. Open-ended:
/// formulas may reference any key, and keys a formula does not reference are
/// simply ignored.
pub type EvaluationInput = AHashMap<String, f64>;

/// Runtime metrics as the CLI expects them on disk.
#[derive(Serialize, Deserialize, Debug)]
pub struct SampleMetrics {
    pub metrics: EvaluationInput,
}

impl SampleMetrics {
    /// Load metrics from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Get a reference to the metric map.
    pub fn metrics(&self) -> &EvaluationInput {
        &self.metrics
    }
}

impl Default for SampleMetrics {
    /// Mock metrics for a representative class, used when no file is given.
    fn default() -> Self {
        let mut metrics = AHashMap::new();
        metrics.insert("reservaciones".to_string(), 25.0);
        metrics.insert("reservacionesPagadas".to_string(), 22.0);
        metrics.insert("listaEspera".to_string(), 4.0);
        metrics.insert("cortesias".to_string(), 2.0);
        metrics.insert("capacidad".to_string(), 30.0);
        metrics.insert("lugares".to_string(), 30.0);
        metrics.insert("ocupacion".to_string(), 90.0);
        Self { metrics }
    }
}
