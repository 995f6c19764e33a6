use serde::{Deserialize, Serialize};

use crate::data::poi::{Location, POI};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    name: String,
    city: String,
    location: Location,
}

impl StaffMember {
    pub fn new(name: &str, city: &str, location: Location) -> Self {
        Self {
            name: name.to_string(),
            city: city.to_string(),
            location,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_city(&self) -> &str {
        &self.city
    }
}

impl POI for StaffMember {
    fn get_location(&self) -> &Location {
        &self.location
    }
}
