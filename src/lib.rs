// Module declarations for the dosage advisor and the sales proximity dashboard

#[macro_use]
extern crate lazy_static;

// Errors shared by the computations
pub mod error;

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod catalog;
    pub mod dashboard_config;
}

// Model definitions
pub mod models {
    pub mod product;
    pub mod staff;
    pub mod project;
    pub mod order;
}

// Data loaders
pub mod data {
    pub mod poi;
    pub mod roster_loader;
}

// Dosage suggestion
pub mod dosage {
    pub mod advisor;
    pub mod quote;
}

// Distance matrix and nearest-project recommendation
pub mod proximity {
    pub mod distance;
    pub mod matrix;
    pub mod recommend;
}

// Tables and summaries handed to the presentation layer
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
    pub mod rounding;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::config::catalog::{Catalog, DEFAULT_CATALOG};
pub use crate::data::poi::Location;
pub use crate::dosage::advisor::{suggest_dosage, DosageRequest, DosageResult, Toughness};
pub use crate::error::CoreError;
pub use crate::proximity::matrix::{compute_distance_matrix, DistanceRecord};
pub use crate::proximity::recommend::{recommend_nearest, NearestProjects, Recommendation};
