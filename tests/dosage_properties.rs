use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fieldkit::config::catalog::{Catalog, CategoryMapping, CompanyProfile, DEFAULT_CATALOG};
use fieldkit::dosage::advisor::{suggest_dosage, DosageRequest, Toughness};
use fieldkit::models::product::{DosageRange, Product};
use fieldkit::CoreError;

fn suggest(category: &str, toughness: Toughness, volume: f64) -> fieldkit::DosageResult {
    suggest_dosage(&DEFAULT_CATALOG, &DosageRequest::new(category, toughness, volume)).unwrap()
}

#[test]
fn dosage_stays_inside_product_range_for_every_category() {
    for mapping in DEFAULT_CATALOG.get_categories() {
        for toughness in Toughness::ALL {
            let result = suggest(&mapping.category, toughness, 12.0);
            assert_eq!(result.product.name, mapping.product);
            assert!(
                result.product.dosage_range.contains(result.dosage),
                "{} / {}: {}",
                mapping.category,
                toughness,
                result.dosage
            );
        }
    }
}

#[test]
fn dosage_is_monotonic_in_toughness() {
    for mapping in DEFAULT_CATALOG.get_categories() {
        let low = suggest(&mapping.category, Toughness::Low, 7.5).dosage;
        let medium = suggest(&mapping.category, Toughness::Medium, 7.5).dosage;
        let high = suggest(&mapping.category, Toughness::High, 7.5).dosage;
        assert!(high >= medium && medium >= low, "{}: {} {} {}", mapping.category, low, medium, high);
    }
}

#[test]
fn cost_scales_linearly_with_volume() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let volume: f64 = rng.gen_range(0.0..500.0);
        for mapping in DEFAULT_CATALOG.get_categories() {
            let toughness = Toughness::ALL[rng.gen_range(0..3)];
            let single = suggest(&mapping.category, toughness, volume);
            let double = suggest(&mapping.category, toughness, 2.0 * volume);
            // quantities are rounded to 0.01 kg before pricing, costs to 0.01
            let tolerance = single.rate * 0.02 + 0.02;
            assert!(
                (double.est_cost - 2.0 * single.est_cost).abs() <= tolerance,
                "volume {}: {} vs 2 x {}",
                volume,
                double.est_cost,
                single.est_cost
            );
        }
    }
}

#[test]
fn quantities_and_costs_are_non_negative() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let volume: f64 = rng.gen_range(0.0..1000.0);
        let result = suggest("Tunnel Lining / Shotcrete", Toughness::High, volume);
        assert!(result.total_qty >= 0.0);
        assert!(result.est_cost >= 0.0);
    }
}

#[test]
fn reference_examples() {
    let floor = suggest("Industrial Floor", Toughness::High, 10.0);
    assert_eq!(
        (floor.product.name.as_str(), floor.dosage, floor.total_qty, floor.est_cost),
        ("Bajaj Fibre Tuff", 7.05, 70.5, 24675.0)
    );

    let plaster = suggest("Plaster / Screed / Finishing", Toughness::Low, 5.0);
    assert_eq!(
        (plaster.product.name.as_str(), plaster.dosage, plaster.total_qty, plaster.est_cost),
        ("Bajaj Guard", 0.72, 3.6, 648.0)
    );
}

#[test]
fn negative_volume_is_never_clamped() {
    let err = suggest_dosage(&DEFAULT_CATALOG, &DosageRequest::new("Industrial Floor", Toughness::Low, -0.01))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid Input: volume must be non-negative");
}

#[test]
fn custom_catalog_drives_the_lookup() {
    let catalog = Catalog::new(
        vec![Product::new("Mesh", "Steel mesh", DosageRange::new(10.0, 20.0), 80.0, "Slabs")],
        vec![CategoryMapping {
            category: "Slab".to_string(),
            product: "Mesh".to_string(),
        }],
        "Mesh".to_string(),
        CompanyProfile {
            website: String::new(),
            email: String::new(),
            phone: String::new(),
            gstin: String::new(),
        },
    )
    .unwrap();

    let result = suggest_dosage(&catalog, &DosageRequest::new("Slab", Toughness::High, 2.0)).unwrap();
    assert_eq!(result.dosage, 17.0);
    assert_eq!(result.total_qty, 34.0);
    assert_eq!(result.est_cost, 2720.0);

    let fallback = suggest_dosage(&catalog, &DosageRequest::new("Industrial Floor", Toughness::Low, 1.0)).unwrap();
    assert!(fallback.used_default_product);
    assert_eq!(fallback.product.name, "Mesh");
}

#[test]
fn nan_volume_is_a_computation_error() {
    let err = suggest_dosage(&DEFAULT_CATALOG, &DosageRequest::new("Industrial Floor", Toughness::Low, f64::NAN))
        .unwrap_err();
    assert!(matches!(err, CoreError::Computation(_)));
}
