use serde::{Deserialize, Serialize};

/// Inclusive per-cubic-metre dosage bounds of a product, in kg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosageRange {
    pub min: f64,
    pub max: f64,
}

impl DosageRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min < self.max
    }

    /// Linear interpolation from `min` (fraction 0.0) to `max` (fraction 1.0).
    pub fn interpolate(&self, fraction: f64) -> f64 {
        self.min + (self.max - self.min) * fraction
    }

    pub fn contains(&self, dosage: f64) -> bool {
        dosage >= self.min && dosage <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub fiber_type: String,
    pub dosage_range: DosageRange,
    /// Price per kilogram, in rupees.
    pub rate: f64,
    pub use_for: String,
}

impl Product {
    pub fn new(name: &str, fiber_type: &str, dosage_range: DosageRange, rate: f64, use_for: &str) -> Self {
        Self {
            name: name.to_string(),
            fiber_type: fiber_type.to_string(),
            dosage_range,
            rate,
            use_for: use_for.to_string(),
        }
    }
}
