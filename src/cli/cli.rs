use clap::{Parser, Subcommand};

use crate::config::constants::DEFAULT_CATEGORY;
use crate::dosage::advisor::{ConcreteGrade, Toughness};
use crate::models::order::DeliveryDetails;

#[derive(Parser)]
#[command(author, version, about = "Fiber dosage advisor and sales proximity dashboard", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(long, global = true, help = "Dashboard configuration (JSON)")]
    config: Option<String>,

    #[arg(long, global = true, help = "Product catalog replacing the built-in one (JSON)")]
    catalog: Option<String>,

    #[arg(long, global = true, help = "Write the computed table to this CSV file")]
    export_csv: Option<String>,

    #[arg(long, global = true, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, global = true, default_value_t = false)]
    debug_logging: bool,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// List construction types and the product each one maps to
    Categories,

    /// Suggest product, dosage, quantity and cost
    Dosage {
        #[arg(short, long, default_value = DEFAULT_CATEGORY)]
        category: String,

        #[arg(short, long, default_value = "Medium Toughness")]
        toughness: Toughness,

        #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
        volume: f64,

        #[arg(short, long, default_value = "M30")]
        grade: ConcreteGrade,

        #[arg(long, default_value_t = false, help = "Place a delivery order for the suggestion")]
        order: bool,

        #[arg(long, default_value = "")]
        customer_name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        state: String,
        #[arg(long, default_value = "")]
        pincode: String,
    },

    /// Distance from every sales executive to every project site
    Distances {
        #[arg(short, long, help = "Only this sales executive")]
        exec: Option<String>,
    },

    /// Nearest project site for each sales executive
    Recommend {
        #[arg(short, long, help = "Only this sales executive")]
        exec: Option<String>,
    },
}

impl Command {
    /// Delivery details typed on the command line, for `dosage --order`.
    pub fn delivery_details(&self) -> Option<DeliveryDetails> {
        match self {
            Command::Dosage {
                customer_name,
                phone,
                address,
                city,
                state,
                pincode,
                ..
            } => Some(DeliveryDetails {
                customer_name: customer_name.clone(),
                phone: phone.clone(),
                address_line: address.clone(),
                city: city.clone(),
                state: state.clone(),
                pincode: pincode.clone(),
            }),
            _ => None,
        }
    }
}

impl Args {
    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    pub fn export_csv(&self) -> Option<&str> {
        self.export_csv.as_deref()
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dosage_command() {
        let args = Args::try_parse_from([
            "fieldkit", "dosage", "--category", "Industrial Floor", "--toughness", "High Toughness", "--volume", "10",
        ])
        .unwrap();
        match args.command() {
            Command::Dosage { category, toughness, volume, grade, order, .. } => {
                assert_eq!(category, "Industrial Floor");
                assert_eq!(*toughness, Toughness::High);
                assert_eq!(*volume, 10.0);
                assert_eq!(*grade, ConcreteGrade::M30);
                assert!(!order);
            }
            _ => panic!("expected dosage command"),
        }
    }

    #[test]
    fn negative_volume_reaches_the_advisor() {
        let args = Args::try_parse_from(["fieldkit", "dosage", "--volume", "-3"]).unwrap();
        assert!(matches!(args.command(), Command::Dosage { volume, .. } if *volume == -3.0));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from(["fieldkit", "recommend", "--exec", "Asha", "--export-csv", "out.csv"]).unwrap();
        assert_eq!(args.export_csv(), Some("out.csv"));
        assert!(matches!(args.command(), Command::Recommend { exec: Some(name) } if name == "Asha"));
    }

    #[test]
    fn rejects_unknown_toughness() {
        assert!(Args::try_parse_from(["fieldkit", "dosage", "--toughness", "extreme"]).is_err());
    }
}
