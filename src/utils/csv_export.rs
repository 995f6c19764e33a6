use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use csv::Writer;
use tracing::info;

use crate::proximity::matrix::DistanceRecord;
use crate::proximity::recommend::{Recommendation, StaffRecommendation};
use crate::utils::logging::{self, FileIOType, OperationCategory};

const RECOMMENDATION_HEADERS: [&str; 8] = [
    "Sales Executive",
    "Sales City",
    "Project Name",
    "Contractor",
    "Project Manager",
    "Contact",
    "Distance (km)",
    "Status",
];

fn open_with_banner(path: &Path, title: &str) -> Result<BufWriter<File>, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "# {} generated {}", title, Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    Ok(file)
}

/// Writes the distance table, one row per staff/site pair.
pub fn export_distance_records(
    path: &Path,
    records: &[DistanceRecord],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _timing = logging::start_timing("export_distance_records",
        OperationCategory::FileIO { subcategory: FileIOType::Export });

    let mut writer = Writer::from_writer(open_with_banner(path, "Distance table")?);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = records.len(), "exported distance table");
    Ok(())
}

/// Writes one row per staff member; members without a site get an empty project and
/// a "no site available" status.
pub fn export_recommendations(
    path: &Path,
    recommendations: &[StaffRecommendation],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _timing = logging::start_timing("export_recommendations",
        OperationCategory::FileIO { subcategory: FileIOType::Export });

    let mut writer = Writer::from_writer(open_with_banner(path, "Recommended visits")?);
    writer.write_record(RECOMMENDATION_HEADERS)?;

    for rec in recommendations {
        match &rec.recommendation {
            Recommendation::Nearest(record) => {
                let distance = format!("{:.2}", record.distance_km);
                writer.write_record([
                    rec.staff_name.as_str(),
                    rec.staff_city.as_str(),
                    record.site_name.as_str(),
                    record.contractor.as_str(),
                    record.project_manager.as_str(),
                    record.contact.as_str(),
                    distance.as_str(),
                    "nearest",
                ])?;
            }
            Recommendation::NoSiteAvailable => {
                writer.write_record([
                    rec.staff_name.as_str(),
                    rec.staff_city.as_str(),
                    "",
                    "",
                    "",
                    "",
                    "",
                    "no site available",
                ])?;
            }
        }
    }
    writer.flush()?;

    info!(path = %path.display(), rows = recommendations.len(), "exported recommendations");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DistanceRecord {
        DistanceRecord {
            staff_name: "Asha".to_string(),
            staff_city: "Mumbai".to_string(),
            site_name: "Metro Depot".to_string(),
            contractor: "L&T".to_string(),
            project_manager: "R. Shah".to_string(),
            contact: "98200 11111".to_string(),
            distance_km: 4.6,
        }
    }

    #[test]
    fn distance_table_has_banner_and_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/distances.csv");
        export_distance_records(&path, &[record()]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("# Distance table generated "));
        assert_eq!(
            lines[1],
            "Sales Executive,Sales City,Project Name,Contractor,Project Manager,Contact,Distance (km)"
        );
        assert_eq!(lines[2], "Asha,Mumbai,Metro Depot,L&T,R. Shah,98200 11111,4.6");
    }

    #[test]
    fn recommendations_mark_missing_sites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.csv");
        let recommendations = vec![
            StaffRecommendation {
                staff_name: "Asha".to_string(),
                staff_city: "Mumbai".to_string(),
                recommendation: Recommendation::Nearest(record()),
            },
            StaffRecommendation {
                staff_name: "Vikram".to_string(),
                staff_city: "Delhi".to_string(),
                recommendation: Recommendation::NoSiteAvailable,
            },
        ];
        export_recommendations(&path, &recommendations).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Asha,Mumbai,Metro Depot,L&T,R. Shah,98200 11111,4.60,nearest");
        assert_eq!(lines[3], "Vikram,Delhi,,,,,,no site available");
    }
}
