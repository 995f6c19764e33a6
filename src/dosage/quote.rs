use serde::{Deserialize, Serialize};

use crate::config::catalog::CompanyProfile;
use crate::dosage::advisor::{ConcreteGrade, DosageResult};

/// The "Order & Rate Details" view of a dosage suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub product: String,
    pub fiber_type: String,
    pub category: String,
    pub grade: ConcreteGrade,
    pub dosage: f64,
    pub volume: f64,
    pub total_qty: f64,
    pub rate: f64,
    pub est_cost: f64,
}

impl Quote {
    pub fn from_result(result: &DosageResult) -> Self {
        Self {
            product: result.product.name.clone(),
            fiber_type: result.product.fiber_type.clone(),
            category: result.category.clone(),
            grade: result.grade,
            dosage: result.dosage,
            volume: result.volume,
            total_qty: result.total_qty,
            rate: result.rate,
            est_cost: result.est_cost,
        }
    }

    /// Field/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Product", self.product.clone()),
            ("Type of Fiber", self.fiber_type.clone()),
            ("Dosage (kg/m³)", format!("{}", self.dosage)),
            ("Application Volume (m³)", format!("{}", self.volume)),
            ("Total Quantity (kg)", format!("{}", self.total_qty)),
            ("Rate (₹/kg)", format!("{}", self.rate)),
            ("Estimated Cost (₹)", format!("{}", self.est_cost)),
        ]
    }
}

/// Quote for the latest suggestion, if the user has asked for one yet.
pub fn current_quote(last_suggestion: Option<&DosageResult>) -> Option<Quote> {
    last_suggestion.map(Quote::from_result)
}

/// `24675.0` -> `₹24,675.00`
pub fn format_inr(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}₹{}.{}", sign, grouped, fraction)
}

pub fn footer_lines(company: &CompanyProfile) -> Vec<String> {
    vec![
        format!("GSTIN: {}", company.gstin),
        format!("Website: {}", company.website),
        format!("Email: {}", company.email),
        format!("Phone: {}", company.phone),
    ]
}
