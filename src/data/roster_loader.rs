// Loads the sales executive and project site sheets, exported as CSV
use std::fs::File;
use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::dashboard_config::ServiceRegion;
use crate::data::poi::Location;
use crate::models::project::ProjectSite;
use crate::models::staff::StaffMember;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug)]
pub enum RosterLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    MissingField { row: usize, field: &'static str },
    InvalidCoordinate { row: usize, message: String },
}

impl From<std::io::Error> for RosterLoadError {
    fn from(err: std::io::Error) -> Self {
        RosterLoadError::IoError(err)
    }
}

impl From<csv::Error> for RosterLoadError {
    fn from(err: csv::Error) -> Self {
        RosterLoadError::CsvError(err)
    }
}

impl std::fmt::Display for RosterLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterLoadError::IoError(e) => write!(f, "IO error: {}", e),
            RosterLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            RosterLoadError::MissingField { row, field } => write!(f, "Row {}: missing {}", row, field),
            RosterLoadError::InvalidCoordinate { row, message } => {
                write!(f, "Row {}: invalid coordinate: {}", row, message)
            }
        }
    }
}

impl std::error::Error for RosterLoadError {}

#[derive(Debug, Deserialize)]
struct StaffRow {
    exec_name: String,
    city: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ProjectRow {
    project_name: String,
    contractor: String,
    project_manager: String,
    contact: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

// Data rows are numbered from 1, after the header line
fn to_location(
    row: usize,
    latitude: Option<f64>,
    longitude: Option<f64>,
    region: &ServiceRegion,
) -> Result<Location, RosterLoadError> {
    let latitude = latitude.ok_or(RosterLoadError::MissingField { row, field: "latitude" })?;
    let longitude = longitude.ok_or(RosterLoadError::MissingField { row, field: "longitude" })?;
    let location = Location::new(latitude, longitude);

    if !location.is_valid() {
        return Err(RosterLoadError::InvalidCoordinate {
            row,
            message: format!("({}, {}) is not a latitude/longitude pair", latitude, longitude),
        });
    }
    if !region.contains(&location) {
        warn!(row, latitude, longitude, "coordinates outside the service region");
    }
    Ok(location)
}

fn require(row: usize, field: &'static str, value: &str) -> Result<(), RosterLoadError> {
    if value.trim().is_empty() {
        Err(RosterLoadError::MissingField { row, field })
    } else {
        Ok(())
    }
}

pub fn read_staff<R: Read>(reader: R, region: &ServiceRegion) -> Result<Vec<StaffMember>, RosterLoadError> {
    let mut reader = ReaderBuilder::new().has_headers(true).trim(Trim::All).from_reader(reader);

    let mut staff = Vec::new();
    for (index, result) in reader.deserialize::<StaffRow>().enumerate() {
        let row = index + 1;
        let record = result?;
        require(row, "exec_name", &record.exec_name)?;
        let location = to_location(row, record.latitude, record.longitude, region)?;
        staff.push(StaffMember::new(&record.exec_name, &record.city, location));
    }
    Ok(staff)
}

pub fn read_projects<R: Read>(reader: R, region: &ServiceRegion) -> Result<Vec<ProjectSite>, RosterLoadError> {
    let mut reader = ReaderBuilder::new().has_headers(true).trim(Trim::All).from_reader(reader);

    let mut projects = Vec::new();
    for (index, result) in reader.deserialize::<ProjectRow>().enumerate() {
        let row = index + 1;
        let record = result?;
        require(row, "project_name", &record.project_name)?;
        let location = to_location(row, record.latitude, record.longitude, region)?;
        projects.push(ProjectSite::new(
            &record.project_name,
            &record.contractor,
            &record.project_manager,
            &record.contact,
            location,
        ));
    }
    Ok(projects)
}

pub fn load_staff(csv_path: &str, region: &ServiceRegion) -> Result<Vec<StaffMember>, RosterLoadError> {
    let _timing = logging::start_timing("load_staff",
        OperationCategory::FileIO { subcategory: FileIOType::RosterLoad });

    let file = File::open(csv_path)?;
    let staff = read_staff(file, region)?;
    info!(path = csv_path, count = staff.len(), "loaded sales executives");
    Ok(staff)
}

pub fn load_projects(csv_path: &str, region: &ServiceRegion) -> Result<Vec<ProjectSite>, RosterLoadError> {
    let _timing = logging::start_timing("load_projects",
        OperationCategory::FileIO { subcategory: FileIOType::RosterLoad });

    let file = File::open(csv_path)?;
    let projects = read_projects(file, region)?;
    info!(path = csv_path, count = projects.len(), "loaded project sites");
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::dashboard_config::DashboardConfig;
    use crate::data::poi::POI;

    fn region() -> ServiceRegion {
        DashboardConfig::default().service_region
    }

    #[test]
    fn reads_staff_rows() {
        let csv = "exec_name,city,latitude,longitude\n\
                   Asha, Mumbai ,19.07,72.87\n\
                   Vikram,Delhi,28.61,77.20\n";
        let staff = read_staff(csv.as_bytes(), &region()).unwrap();
        assert_eq!(staff.len(), 2);
        assert_eq!(staff[0].get_city(), "Mumbai");
        assert_eq!(staff[1].get_location(), &Location::new(28.61, 77.20));
    }

    #[test]
    fn reads_project_rows() {
        let csv = "project_name,contractor,project_manager,contact,latitude,longitude\n\
                   Metro Depot,L&T,R. Shah,98200 11111,19.10,72.90\n";
        let projects = read_projects(csv.as_bytes(), &region()).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].get_contractor(), "L&T");
        assert_eq!(projects[0].get_contact(), "98200 11111");
    }

    #[test]
    fn missing_coordinate_names_the_row() {
        let csv = "exec_name,city,latitude,longitude\n\
                   Asha,Mumbai,19.07,72.87\n\
                   Vikram,Delhi,,77.20\n";
        let err = read_staff(csv.as_bytes(), &region()).unwrap_err();
        assert!(matches!(err, RosterLoadError::MissingField { row: 2, field: "latitude" }));
        assert_eq!(err.to_string(), "Row 2: missing latitude");
    }

    #[test]
    fn impossible_coordinate_is_rejected() {
        let csv = "exec_name,city,latitude,longitude\nAsha,Mumbai,119.07,72.87\n";
        assert!(matches!(
            read_staff(csv.as_bytes(), &region()),
            Err(RosterLoadError::InvalidCoordinate { row: 1, .. })
        ));
    }

    #[test]
    fn out_of_region_is_kept_unchanged() {
        let csv = "exec_name,city,latitude,longitude\nTom,London,51.5,-0.12\n";
        let staff = read_staff(csv.as_bytes(), &region()).unwrap();
        assert_eq!(staff[0].get_location(), &Location::new(51.5, -0.12));
    }

    #[test]
    fn unparsable_number_is_a_csv_error() {
        let csv = "exec_name,city,latitude,longitude\nAsha,Mumbai,north,72.87\n";
        assert!(matches!(read_staff(csv.as_bytes(), &region()), Err(RosterLoadError::CsvError(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_staff("does/not/exist.csv", &region()),
            Err(RosterLoadError::IoError(_))
        ));
    }
}
