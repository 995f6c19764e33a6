use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dosage::quote::Quote;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderError {
    /// Labels of the required fields that were left blank, in form order.
    MissingFields(Vec<&'static str>),
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::MissingFields(fields) => {
                write!(f, "Please fill the required fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for OrderError {}

/// Customer and delivery address as typed into the order form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub customer_name: String,
    pub phone: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl DeliveryDetails {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Customer Name", &self.customer_name),
            ("Phone", &self.phone),
            ("Address", &self.address_line),
            ("City", &self.city),
            ("State", &self.state),
            ("Pincode", &self.pincode),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect()
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(OrderError::MissingFields(missing))
        }
    }
}

/// A quote bound to complete delivery details.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryOrder {
    quote: Quote,
    details: DeliveryDetails,
    placed_at: DateTime<Utc>,
}

impl DeliveryOrder {
    pub fn new(quote: Quote, details: DeliveryDetails) -> Result<Self, OrderError> {
        details.validate()?;
        Ok(Self {
            quote,
            details,
            placed_at: Utc::now(),
        })
    }

    pub fn get_quote(&self) -> &Quote {
        &self.quote
    }

    pub fn get_details(&self) -> &DeliveryDetails {
        &self.details
    }

    pub fn get_placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}
