use crate::config::catalog::Catalog;
use crate::dosage::advisor::DosageResult;
use crate::dosage::quote::{footer_lines, format_inr, Quote};
use crate::models::order::DeliveryOrder;
use crate::models::project::ProjectSite;
use crate::proximity::matrix::DistanceRecord;
use crate::proximity::recommend::{Recommendation, StaffRecommendation};

pub fn print_categories(catalog: &Catalog) {
    println!("\nConstruction Types");
    println!("----------------------------------------");
    for mapping in catalog.get_categories() {
        println!("  {:<32} -> {}", mapping.category, mapping.product);
    }
    println!("  (anything else)                  -> {}", catalog.get_default_product().name);
}

pub fn print_dosage_suggestion(result: &DosageResult) {
    println!("\nSuggestion Ready!");
    println!("----------------------------------------");
    if result.used_default_product {
        println!("Construction type '{}' is not listed; using the default product.", result.category);
    }
    println!("Product: {}", result.product.name);
    println!("Fiber Type: {}", result.product.fiber_type);
    println!("Concrete Grade: {}", result.grade);
    println!("Requirement: {}", result.toughness);
    println!("Suggested Dosage: {} kg/m³", result.dosage);
    println!("Total Quantity: {} kg", result.total_qty);
    println!("Estimated Cost: {}", format_inr(result.est_cost));
}

pub fn print_quote(quote: Option<&Quote>, catalog: &Catalog) {
    println!("\nOrder & Rate Details");
    println!("----------------------------------------");
    match quote {
        Some(quote) => {
            for (field, value) in quote.rows() {
                println!("  {:<26} {}", field, value);
            }
        }
        None => println!("No dosage suggestion yet. Run a dosage suggestion first."),
    }
    println!("----------------------------------------");
    for line in footer_lines(catalog.get_company()) {
        println!("{}", line);
    }
}

pub fn print_order(order: &DeliveryOrder) {
    let details = order.get_details();
    println!("\nOrder Placed");
    println!("----------------------------------------");
    println!("Customer: {} ({})", details.customer_name, details.phone);
    println!(
        "Deliver to: {}, {}, {} {}",
        details.address_line, details.city, details.state, details.pincode
    );
    println!(
        "{}: {} kg for {}",
        order.get_quote().product,
        order.get_quote().total_qty,
        format_inr(order.get_quote().est_cost)
    );
    println!("Placed at: {}", order.get_placed_at().format("%Y-%m-%d %H:%M:%S UTC"));
}

pub fn print_distance_table(records: &[DistanceRecord]) {
    println!("\nDistance Between Sales Executives & Projects");
    println!("----------------------------------------");
    if records.is_empty() {
        println!("No staff/site pairs to show.");
        return;
    }
    println!(
        "{:<20} {:<14} {:<24} {:<18} {:>12}",
        "Sales Executive", "Sales City", "Project Name", "Contractor", "Distance (km)"
    );
    for record in records {
        println!(
            "{:<20} {:<14} {:<24} {:<18} {:>12.2}",
            record.staff_name, record.staff_city, record.site_name, record.contractor, record.distance_km
        );
    }
}

pub fn print_recommendations(recommendations: &[StaffRecommendation]) {
    println!("\nRecommended Visits");
    println!("----------------------------------------");
    println!("Closest project for each sales executive:");
    for rec in recommendations {
        match &rec.recommendation {
            Recommendation::Nearest(record) => println!(
                "  {} ({}): {} - {:.2} km (PM {}, {})",
                rec.staff_name,
                rec.staff_city,
                record.site_name,
                record.distance_km,
                record.project_manager,
                record.contact
            ),
            Recommendation::NoSiteAvailable => {
                println!("  {} ({}): no project site available", rec.staff_name, rec.staff_city)
            }
        }
    }
}

/// Hover text for a staff marker on the map.
pub fn staff_marker_summary(rec: &StaffRecommendation) -> String {
    let mut lines = vec![rec.staff_name.clone(), format!("City: {}", rec.staff_city), String::new()];
    match &rec.recommendation {
        Recommendation::Nearest(record) => {
            lines.push("Nearest Project:".to_string());
            lines.push(record.site_name.clone());
            lines.push(format!("Contractor: {}", record.contractor));
            lines.push(format!("PM: {}", record.project_manager));
            lines.push(format!("Distance: {:.2} km", record.distance_km));
        }
        Recommendation::NoSiteAvailable => lines.push("No project sites available".to_string()),
    }
    lines.join("\n")
}

/// Popup text for a project site marker.
pub fn site_marker_summary(site: &ProjectSite) -> String {
    [
        site.get_name().to_string(),
        format!("Contractor: {}", site.get_contractor()),
        format!("Project Manager: {}", site.get_project_manager()),
        format!("Contact: {}", site.get_contact()),
    ]
    .join("\n")
}
