// Earlier revisions of the dosage tool disagree on two details. These tests pin the
// behaviour of the latest revision and show where the older variants would differ.

use fieldkit::config::catalog::DEFAULT_CATALOG;
use fieldkit::dosage::advisor::{suggest_dosage, DosageRequest, Toughness};
use fieldkit::utils::rounding::round_to;

#[test]
fn medium_interpolation_matches_midpoint_variant_for_shipped_products() {
    // One revision computes Medium as (min + max) / 2 instead of min + (max - min) * 0.5.
    for product in DEFAULT_CATALOG.get_products() {
        let range = product.dosage_range;
        let interpolated = round_to(range.interpolate(0.5), 2).unwrap();
        let midpoint = round_to((range.min + range.max) / 2.0, 2).unwrap();
        assert_eq!(interpolated, midpoint, "{}", product.name);
    }
}

#[test]
fn unmatched_category_uses_fibre_tuff() {
    // Older revisions indexed the table directly and had no default at all.
    let result = suggest_dosage(&DEFAULT_CATALOG, &DosageRequest::new("Bridge Deck", Toughness::Medium, 10.0))
        .unwrap();
    assert!(result.used_default_product);
    assert_eq!(result.product.name, "Bajaj Fibre Tuff");
    assert_eq!(result.dosage, 5.75);
    assert_eq!(result.total_qty, 57.5);
    assert_eq!(result.est_cost, 20125.0);
}

#[test]
fn rounding_once_per_step_differs_from_rounding_only_at_the_end() {
    // Guard at High interpolates to 0.8799999999999999 and is stored as 0.88.
    // The quantity is taken from 0.88, and the cost from the rounded quantity.
    let result = suggest_dosage(
        &DEFAULT_CATALOG,
        &DosageRequest::new("Residential / Decorative Floor", Toughness::High, 3.333),
    )
    .unwrap();
    assert_eq!(result.dosage, 0.88);
    assert_eq!(result.total_qty, round_to(0.88 * 3.333, 2).unwrap());
    assert_eq!(result.est_cost, round_to(result.total_qty * 180.0, 2).unwrap());

    // Cost from the unrounded quantity would be 527.95 instead of 527.4.
    let unrounded_cost = round_to(0.88 * 3.333 * 180.0, 2).unwrap();
    assert_ne!(result.est_cost, unrounded_cost);
}
