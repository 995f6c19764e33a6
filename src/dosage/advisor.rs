// Dosage advisor: category -> product lookup, toughness interpolation, quantity and cost
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::catalog::Catalog;
use crate::config::constants::{
    HIGH_TOUGHNESS_FRACTION, LOW_TOUGHNESS_FRACTION, MEDIUM_TOUGHNESS_FRACTION, ROUNDING_DECIMALS,
};
use crate::error::{CoreError, CoreResult};
use crate::models::product::Product;
use crate::utils::logging::{self, OperationCategory};
use crate::utils::rounding::round_to;

/// Structural toughness requirement of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Toughness {
    Low,
    Medium,
    High,
}

impl Toughness {
    pub const ALL: [Toughness; 3] = [Toughness::Low, Toughness::Medium, Toughness::High];

    /// Position between the product's minimum and maximum dosage.
    pub fn fraction(&self) -> f64 {
        match self {
            Toughness::Low => LOW_TOUGHNESS_FRACTION,
            Toughness::Medium => MEDIUM_TOUGHNESS_FRACTION,
            Toughness::High => HIGH_TOUGHNESS_FRACTION,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Toughness::Low => "Low Toughness",
            Toughness::Medium => "Medium Toughness",
            Toughness::High => "High Toughness",
        }
    }
}

impl fmt::Display for Toughness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Toughness {
    type Err = CoreError;

    /// Accepts the form labels ("High Toughness") as well as the bare level ("high").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let level = normalized.strip_suffix("toughness").unwrap_or(normalized.as_str()).trim();
        match level {
            "low" => Ok(Toughness::Low),
            "medium" => Ok(Toughness::Medium),
            "high" => Ok(Toughness::High),
            _ => Err(CoreError::invalid_input(format!("unknown toughness level '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M20,
    M25,
    #[default]
    M30,
    M35,
    M40,
    M45,
    M50,
}

impl ConcreteGrade {
    pub const ALL: [ConcreteGrade; 7] = [
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
        ConcreteGrade::M45,
        ConcreteGrade::M50,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConcreteGrade::M20 => "M20",
            ConcreteGrade::M25 => "M25",
            ConcreteGrade::M30 => "M30",
            ConcreteGrade::M35 => "M35",
            ConcreteGrade::M40 => "M40",
            ConcreteGrade::M45 => "M45",
            ConcreteGrade::M50 => "M50",
        }
    }
}

impl fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConcreteGrade {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        ConcreteGrade::ALL
            .iter()
            .find(|g| g.label() == wanted)
            .copied()
            .ok_or_else(|| CoreError::invalid_input(format!("unknown concrete grade '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageRequest {
    pub category: String,
    pub toughness: Toughness,
    /// Application volume in m³.
    pub volume: f64,
    pub grade: ConcreteGrade,
}

impl DosageRequest {
    pub fn new(category: &str, toughness: Toughness, volume: f64) -> Self {
        Self {
            category: category.to_string(),
            toughness,
            volume,
            grade: ConcreteGrade::default(),
        }
    }

    pub fn with_grade(mut self, grade: ConcreteGrade) -> Self {
        self.grade = grade;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageResult {
    pub category: String,
    /// True when the category was not in the catalog and the default product was used.
    pub used_default_product: bool,
    pub product: Product,
    pub toughness: Toughness,
    pub grade: ConcreteGrade,
    /// kg/m³, always inside the product's dosage range.
    pub dosage: f64,
    pub volume: f64,
    /// kg
    pub total_qty: f64,
    pub rate: f64,
    pub est_cost: f64,
}

/// Suggests a product, dosage, quantity and cost for one application.
///
/// Rounding order: the interpolated dosage is rounded first, the quantity is computed
/// from the rounded dosage and rounded, and the cost is computed from the rounded
/// quantity and rounded. Each figure is rounded exactly once.
///
/// An unknown category is not an error: the catalog's default product is used.
pub fn suggest_dosage(catalog: &Catalog, request: &DosageRequest) -> CoreResult<DosageResult> {
    let _timing = logging::start_timing("suggest_dosage", OperationCategory::DosageCalculation);

    if request.volume.is_nan() || request.volume.is_infinite() {
        return Err(CoreError::computation(format!("volume {} is not a finite number", request.volume)));
    }
    if request.volume < 0.0 {
        return Err(CoreError::invalid_input("volume must be non-negative"));
    }
    // -0.0 passes the check above; fold it into +0.0
    let volume = request.volume + 0.0;

    let (product, used_default_product) = catalog.resolve(&request.category);
    if used_default_product {
        debug!(category = %request.category, product = %product.name, "category not in catalog, using default product");
    }

    let range = product.dosage_range;
    let dosage = round_to(range.interpolate(request.toughness.fraction()), ROUNDING_DECIMALS)?
        .clamp(range.min, range.max);
    let total_qty = round_to(dosage * volume, ROUNDING_DECIMALS)?;
    let est_cost = round_to(total_qty * product.rate, ROUNDING_DECIMALS)?;

    debug!(
        product = %product.name,
        toughness = %request.toughness,
        dosage,
        total_qty,
        est_cost,
        "dosage suggested"
    );

    Ok(DosageResult {
        category: request.category.clone(),
        used_default_product,
        product: product.clone(),
        toughness: request.toughness,
        grade: request.grade,
        dosage,
        volume,
        total_qty,
        rate: product.rate,
        est_cost,
    })
}
