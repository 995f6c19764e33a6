// Nearest project per staff member
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::models::project::ProjectSite;
use crate::models::staff::StaffMember;
use crate::proximity::distance::DistanceMetric;
use crate::proximity::matrix::{compute_distance_matrix, DistanceRecord};
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Recommendation {
    Nearest(DistanceRecord),
    NoSiteAvailable,
}

impl Recommendation {
    pub fn as_record(&self) -> Option<&DistanceRecord> {
        match self {
            Recommendation::Nearest(record) => Some(record),
            Recommendation::NoSiteAvailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Recommendation::Nearest(_))
    }

    /// Turns a missing recommendation into [`CoreError::NoSiteAvailable`].
    pub fn into_result(self, staff_name: &str) -> CoreResult<DistanceRecord> {
        match self {
            Recommendation::Nearest(record) => Ok(record),
            Recommendation::NoSiteAvailable => Err(CoreError::NoSiteAvailable {
                staff: staff_name.to_string(),
            }),
        }
    }
}

/// Closest record per staff member, keyed by staff name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearestProjects {
    entries: Vec<DistanceRecord>,
}

impl NearestProjects {
    /// Any name without records, including unknown names, has no site available.
    pub fn get(&self, staff_name: &str) -> Recommendation {
        self.entries
            .iter()
            .find(|r| r.staff_name == staff_name)
            .cloned()
            .map(Recommendation::Nearest)
            .unwrap_or(Recommendation::NoSiteAvailable)
    }

    pub fn records(&self) -> &[DistanceRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Only the entry for `staff_name`, as a single-executive view.
    pub fn only(&self, staff_name: &str) -> NearestProjects {
        NearestProjects {
            entries: self
                .entries
                .iter()
                .filter(|r| r.staff_name == staff_name)
                .cloned()
                .collect(),
        }
    }
}

/// Groups `records` by staff name and keeps the minimum distance of each group.
/// Ties go to the record that appears first.
///
/// Executives sharing a name share a group; use [`recommend_for_staff`] when each
/// staff member needs the site nearest to their own location.
pub fn recommend_nearest(records: &[DistanceRecord]) -> NearestProjects {
    let _timing = logging::start_timing("recommend_nearest", OperationCategory::Recommendation);

    let mut entries: Vec<DistanceRecord> = Vec::new();
    for record in records {
        match entries.iter_mut().find(|best| best.staff_name == record.staff_name) {
            Some(best) => {
                if record.distance_km < best.distance_km {
                    *best = record.clone();
                }
            }
            None => entries.push(record.clone()),
        }
    }

    debug!(groups = entries.len(), records = records.len(), "nearest projects selected");
    NearestProjects { entries }
}

/// First record with the smallest distance.
fn nearest_in(block: &[DistanceRecord]) -> Option<&DistanceRecord> {
    block.iter().fold(None, |best: Option<&DistanceRecord>, record| match best {
        Some(current) if current.distance_km <= record.distance_km => Some(current),
        _ => Some(record),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffRecommendation {
    pub staff_name: String,
    pub staff_city: String,
    pub recommendation: Recommendation,
}

/// Recommendation for every staff member in input order, including the ones that
/// could not be matched to any site. Each member is matched from their own location,
/// even when another member has the same name.
pub fn recommend_for_staff(
    staff: &[StaffMember],
    sites: &[ProjectSite],
    metric: DistanceMetric,
) -> CoreResult<Vec<StaffRecommendation>> {
    let _timing = logging::start_timing("recommend_for_staff", OperationCategory::Recommendation);
    let records = compute_distance_matrix(staff, sites, metric)?;

    // staff-major: member i owns records[i * n..(i + 1) * n]
    let n = sites.len();
    let recommendations: Vec<StaffRecommendation> = staff
        .iter()
        .enumerate()
        .map(|(i, member)| StaffRecommendation {
            staff_name: member.get_name().to_string(),
            staff_city: member.get_city().to_string(),
            recommendation: nearest_in(&records[i * n..(i + 1) * n])
                .cloned()
                .map(Recommendation::Nearest)
                .unwrap_or(Recommendation::NoSiteAvailable),
        })
        .collect();

    let unmatched = recommendations.iter().filter(|r| !r.recommendation.is_available()).count();
    if unmatched > 0 {
        info!(unmatched, "staff members without any project site");
    }
    Ok(recommendations)
}

/// Staff list restricted to one executive; `None` keeps everyone.
pub fn select_staff(staff: &[StaffMember], name: Option<&str>) -> Vec<StaffMember> {
    match name {
        Some(name) => staff.iter().filter(|s| s.get_name() == name).cloned().collect(),
        None => staff.to_vec(),
    }
}
