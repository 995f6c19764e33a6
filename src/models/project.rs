use serde::{Deserialize, Serialize};

use crate::data::poi::{Location, POI};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSite {
    name: String,
    contractor: String,
    project_manager: String,
    contact: String,
    location: Location,
}

impl ProjectSite {
    pub fn new(name: &str, contractor: &str, project_manager: &str, contact: &str, location: Location) -> Self {
        Self {
            name: name.to_string(),
            contractor: contractor.to_string(),
            project_manager: project_manager.to_string(),
            contact: contact.to_string(),
            location,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_contractor(&self) -> &str {
        &self.contractor
    }

    pub fn get_project_manager(&self) -> &str {
        &self.project_manager
    }

    pub fn get_contact(&self) -> &str {
        &self.contact
    }
}

impl POI for ProjectSite {
    fn get_location(&self) -> &Location {
        &self.location
    }
}
