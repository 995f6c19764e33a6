use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

use crate::config::constants::*;
use crate::data::poi::Location;
use crate::proximity::distance::DistanceMetric;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl ServiceRegion {
    pub fn contains(&self, location: &Location) -> bool {
        location.latitude >= self.min_lat
            && location.latitude <= self.max_lat
            && location.longitude >= self.min_lon
            && location.longitude <= self.max_lon
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub staff_csv: String,
    pub projects_csv: String,
    pub distance_metric: DistanceMetric,
    pub service_region: ServiceRegion,
}

impl DashboardConfig {
    pub fn load_from_json(path: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: DashboardConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            staff_csv: DEFAULT_STAFF_CSV.to_string(),
            projects_csv: DEFAULT_PROJECTS_CSV.to_string(),
            distance_metric: DistanceMetric::Geodesic,
            service_region: ServiceRegion {
                min_lat: SERVICE_REGION_MIN_LAT,
                max_lat: SERVICE_REGION_MAX_LAT,
                min_lon: SERVICE_REGION_MIN_LON,
                max_lon: SERVICE_REGION_MAX_LON,
            },
        }
    }
}
