// Tuning constants for the dosage advisor and the proximity dashboard

// Dosage interpolation: fraction of the way from the minimum to the maximum dosage
pub const HIGH_TOUGHNESS_FRACTION: f64 = 0.7;
pub const MEDIUM_TOUGHNESS_FRACTION: f64 = 0.5;
pub const LOW_TOUGHNESS_FRACTION: f64 = 0.3;

// Every dosage, quantity, cost and distance is reported to this many decimals
pub const ROUNDING_DECIMALS: usize = 2;

// Distances
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;
pub const WGS84_SEMI_MAJOR_AXIS_KM: f64 = 6378.137;
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;
pub const WGS84_SEMI_MINOR_AXIS_KM: f64 = WGS84_SEMI_MAJOR_AXIS_KM * (1.0 - WGS84_FLATTENING);
pub const VINCENTY_MAX_ITERATIONS: usize = 200;
pub const VINCENTY_CONVERGENCE_THRESHOLD: f64 = 1e-12;

// Service region (India) used for sanity checks on loaded coordinates
pub const SERVICE_REGION_MIN_LAT: f64 = 6.5;
pub const SERVICE_REGION_MAX_LAT: f64 = 37.5;
pub const SERVICE_REGION_MIN_LON: f64 = 68.0;
pub const SERVICE_REGION_MAX_LON: f64 = 97.5;

// Default roster files, one per sheet of the source workbook
pub const DEFAULT_STAFF_CSV: &str = "data/sales_executives.csv";
pub const DEFAULT_PROJECTS_CSV: &str = "data/projects.csv";

// Shipped catalog
pub const GUARD_PRODUCT: &str = "Bajaj Guard";
pub const FIBRE_TUFF_PRODUCT: &str = "Bajaj Fibre Tuff";
pub const DEFAULT_PRODUCT: &str = FIBRE_TUFF_PRODUCT;
pub const DEFAULT_CATEGORY: &str = "Industrial Floor";
