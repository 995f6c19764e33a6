use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::constants::ROUNDING_DECIMALS;
use crate::data::poi::POI;
use crate::error::CoreResult;
use crate::models::project::ProjectSite;
use crate::models::staff::StaffMember;
use crate::proximity::distance::{distance_km, DistanceMetric};
use crate::utils::logging::{self, OperationCategory};
use crate::utils::rounding::round_to;

/// Distance between one staff member and one project site, with the columns the
/// dashboard table shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    #[serde(rename = "Sales Executive")]
    pub staff_name: String,
    #[serde(rename = "Sales City")]
    pub staff_city: String,
    #[serde(rename = "Project Name")]
    pub site_name: String,
    #[serde(rename = "Contractor")]
    pub contractor: String,
    #[serde(rename = "Project Manager")]
    pub project_manager: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    /// Rounded to two decimals.
    #[serde(rename = "Distance (km)")]
    pub distance_km: f64,
}

impl DistanceRecord {
    pub fn new(staff: &StaffMember, site: &ProjectSite, distance_km: f64) -> Self {
        Self {
            staff_name: staff.get_name().to_string(),
            staff_city: staff.get_city().to_string(),
            site_name: site.get_name().to_string(),
            contractor: site.get_contractor().to_string(),
            project_manager: site.get_project_manager().to_string(),
            contact: site.get_contact().to_string(),
            distance_km,
        }
    }
}

/// Full cross product of staff and sites, staff-major: every site for the first staff
/// member in input order, then every site for the second, and so on.
pub fn compute_distance_matrix(
    staff: &[StaffMember],
    sites: &[ProjectSite],
    metric: DistanceMetric,
) -> CoreResult<Vec<DistanceRecord>> {
    let _timing = logging::start_timing("compute_distance_matrix", OperationCategory::DistanceMatrix);

    let mut records = Vec::with_capacity(staff.len() * sites.len());
    for member in staff {
        for site in sites {
            let km = distance_km(member.get_location(), site.get_location(), metric)?;
            records.push(DistanceRecord::new(member, site, round_to(km, ROUNDING_DECIMALS)?));
        }
    }

    debug!(staff = staff.len(), sites = sites.len(), records = records.len(), ?metric, "distance matrix computed");
    Ok(records)
}

/// Records belonging to one staff member, in their original order.
pub fn records_for_staff(records: &[DistanceRecord], staff_name: &str) -> Vec<DistanceRecord> {
    records
        .iter()
        .filter(|r| r.staff_name == staff_name)
        .cloned()
        .collect()
}

/// Ascending by distance; equal distances keep their input order.
pub fn sorted_by_distance(records: &[DistanceRecord]) -> Vec<DistanceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::poi::Location;

    fn staff() -> Vec<StaffMember> {
        vec![
            StaffMember::new("Asha", "Mumbai", Location::new(19.07, 72.87)),
            StaffMember::new("Vikram", "Delhi", Location::new(28.61, 77.20)),
        ]
    }

    fn sites() -> Vec<ProjectSite> {
        vec![
            ProjectSite::new("Metro Depot", "L&T", "R. Shah", "98200 11111", Location::new(19.10, 72.90)),
            ProjectSite::new("Airport T2", "GMR", "P. Singh", "98110 22222", Location::new(28.55, 77.10)),
            ProjectSite::new("Ring Road", "Afcons", "K. Rao", "98450 33333", Location::new(12.97, 77.59)),
        ]
    }

    #[test]
    fn produces_full_cross_product_in_staff_major_order() {
        let records = compute_distance_matrix(&staff(), &sites(), DistanceMetric::Geodesic).unwrap();
        assert_eq!(records.len(), 6);
        let order: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.staff_name.as_str(), r.site_name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Asha", "Metro Depot"),
                ("Asha", "Airport T2"),
                ("Asha", "Ring Road"),
                ("Vikram", "Metro Depot"),
                ("Vikram", "Airport T2"),
                ("Vikram", "Ring Road"),
            ]
        );
        assert_eq!(records[0].staff_city, "Mumbai");
        assert_eq!(records[1].contractor, "GMR");
    }

    #[test]
    fn distances_are_rounded_to_two_decimals() {
        let records = compute_distance_matrix(&staff(), &sites(), DistanceMetric::GreatCircle).unwrap();
        for record in &records {
            assert!(record.distance_km >= 0.0);
            let scaled = record.distance_km * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{}", record.distance_km);
        }
    }

    #[test]
    fn empty_inputs_give_empty_matrix() {
        assert!(compute_distance_matrix(&staff(), &[], DistanceMetric::Geodesic).unwrap().is_empty());
        assert!(compute_distance_matrix(&[], &sites(), DistanceMetric::Geodesic).unwrap().is_empty());
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let member = &staff()[0];
        let all_sites = sites();
        let records = vec![
            DistanceRecord::new(member, &all_sites[0], 5.0),
            DistanceRecord::new(member, &all_sites[1], 1.0),
            DistanceRecord::new(member, &all_sites[2], 5.0),
        ];
        let sorted = sorted_by_distance(&records);
        let names: Vec<&str> = sorted.iter().map(|r| r.site_name.as_str()).collect();
        assert_eq!(names, vec!["Airport T2", "Metro Depot", "Ring Road"]);
    }

    #[test]
    fn filters_by_staff_name() {
        let records = compute_distance_matrix(&staff(), &sites(), DistanceMetric::Geodesic).unwrap();
        let vikram = records_for_staff(&records, "Vikram");
        assert_eq!(vikram.len(), 3);
        assert!(vikram.iter().all(|r| r.staff_name == "Vikram"));
        assert!(records_for_staff(&records, "Nobody").is_empty());
    }
}
