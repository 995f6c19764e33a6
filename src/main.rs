use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use fieldkit::analysis::reporting;
use fieldkit::cli::cli::{Args, Command};
use fieldkit::config::catalog::{Catalog, DEFAULT_CATALOG};
use fieldkit::config::dashboard_config::DashboardConfig;
use fieldkit::data::roster_loader;
use fieldkit::dosage::advisor::{suggest_dosage, DosageRequest};
use fieldkit::dosage::quote::{current_quote, Quote};
use fieldkit::models::order::DeliveryOrder;
use fieldkit::models::project::ProjectSite;
use fieldkit::models::staff::StaffMember;
use fieldkit::proximity::matrix::{compute_distance_matrix, sorted_by_distance};
use fieldkit::proximity::recommend::{recommend_for_staff, select_staff};
use fieldkit::utils::csv_export;
use fieldkit::utils::logging::{self, FileIOType, OperationCategory};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging())
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialise logging")?;

    let config = load_config(args.config())?;
    let custom_catalog = match args.catalog() {
        Some(path) => Some(load_catalog(path)?),
        None => None,
    };
    let catalog: &Catalog = custom_catalog.as_ref().unwrap_or(&*DEFAULT_CATALOG);

    match args.command() {
        Command::Categories => reporting::print_categories(catalog),
        Command::Dosage { category, toughness, volume, grade, order, .. } => {
            let request = DosageRequest::new(category, *toughness, *volume).with_grade(*grade);
            let result = suggest_dosage(catalog, &request)?;
            reporting::print_dosage_suggestion(&result);

            let quote = current_quote(Some(&result));
            reporting::print_quote(quote.as_ref(), catalog);

            if *order {
                let details = args.command().delivery_details().unwrap_or_default();
                let order = DeliveryOrder::new(Quote::from_result(&result), details)?;
                reporting::print_order(&order);
            }
        }
        Command::Distances { exec } => {
            let (staff, sites) = load_rosters(&config)?;
            let staff = select_staff(&staff, exec.as_deref());
            if let Some(name) = exec {
                if staff.is_empty() {
                    warn!(exec = %name, "no sales executive with that name");
                }
            }

            let records = compute_distance_matrix(&staff, &sites, config.distance_metric)?;
            let records = sorted_by_distance(&records);
            reporting::print_distance_table(&records);

            if let Some(path) = args.export_csv() {
                csv_export::export_distance_records(Path::new(path), &records)
                    .map_err(|e| anyhow::anyhow!(e))
                    .with_context(|| format!("failed to export distance table to {}", path))?;
            }
        }
        Command::Recommend { exec } => {
            let (staff, sites) = load_rosters(&config)?;
            let staff = select_staff(&staff, exec.as_deref());

            let recommendations = recommend_for_staff(&staff, &sites, config.distance_metric)?;
            reporting::print_recommendations(&recommendations);
            for rec in &recommendations {
                info!(marker = %reporting::staff_marker_summary(rec).replace('\n', " | "), "staff marker");
            }
            for site in &sites {
                debug!(marker = %reporting::site_marker_summary(site).replace('\n', " | "), "site marker");
            }

            if let Some(path) = args.export_csv() {
                csv_export::export_recommendations(Path::new(path), &recommendations)
                    .map_err(|e| anyhow::anyhow!(e))
                    .with_context(|| format!("failed to export recommendations to {}", path))?;
            }
        }
    }

    logging::print_timing_report();
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<DashboardConfig> {
    let _timing = logging::start_timing("load_config",
        OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });

    match path {
        Some(path) => DashboardConfig::load_from_json(path)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("failed to load dashboard config from {}", path)),
        None => Ok(DashboardConfig::default()),
    }
}

fn load_catalog(path: &str) -> Result<Catalog> {
    let _timing = logging::start_timing("load_catalog",
        OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });

    let catalog = Catalog::load_from_json(path)
        .with_context(|| format!("failed to load catalog from {}", path))?;
    info!(path, products = catalog.get_products().len(), "loaded product catalog");
    Ok(catalog)
}

fn load_rosters(config: &DashboardConfig) -> Result<(Vec<StaffMember>, Vec<ProjectSite>)> {
    let staff = roster_loader::load_staff(&config.staff_csv, &config.service_region)
        .with_context(|| format!("failed to load sales executives from {}", config.staff_csv))?;
    let sites = roster_loader::load_projects(&config.projects_csv, &config.service_region)
        .with_context(|| format!("failed to load project sites from {}", config.projects_csv))?;
    Ok((staff, sites))
}
