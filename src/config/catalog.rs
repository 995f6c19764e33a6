use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_PRODUCT, FIBRE_TUFF_PRODUCT, GUARD_PRODUCT};
use crate::models::product::{DosageRange, Product};

#[derive(Debug)]
pub enum CatalogError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::IoError(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::JsonError(err)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::IoError(e) => write!(f, "IO error: {}", e),
            CatalogError::JsonError(e) => write!(f, "JSON error: {}", e),
            CatalogError::Invalid(s) => write!(f, "Invalid catalog: {}", s),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub website: String,
    pub email: String,
    pub phone: String,
    pub gstin: String,
}

/// One row of the construction type -> product table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMapping {
    pub category: String,
    pub product: String,
}

/// Static product and category tables.
///
/// A `Catalog` can only be obtained through [`Catalog::new`], deserialization or
/// `Default`, all of which validate it, so lookups never miss the default product.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<CategoryMapping>,
    default_product: String,
    company: CompanyProfile,
    default_index: usize,
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    categories: Vec<CategoryMapping>,
    default_product: String,
    company: CompanyProfile,
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Catalog", 4)?;
        state.serialize_field("products", &self.products)?;
        state.serialize_field("categories", &self.categories)?;
        state.serialize_field("default_product", &self.default_product)?;
        state.serialize_field("company", &self.company)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let file = CatalogFile::deserialize(deserializer)?;
        Catalog::new(file.products, file.categories, file.default_product, file.company)
            .map_err(serde::de::Error::custom)
    }
}

impl Catalog {
    pub fn new(
        products: Vec<Product>,
        categories: Vec<CategoryMapping>,
        default_product: String,
        company: CompanyProfile,
    ) -> Result<Self, CatalogError> {
        for product in &products {
            if !product.dosage_range.is_valid() {
                return Err(CatalogError::Invalid(format!(
                    "product '{}' has dosage range ({}, {}); expected 0 < min < max",
                    product.name, product.dosage_range.min, product.dosage_range.max
                )));
            }
            if !(product.rate.is_finite() && product.rate > 0.0) {
                return Err(CatalogError::Invalid(format!(
                    "product '{}' has non-positive rate {}",
                    product.name, product.rate
                )));
            }
            if products.iter().filter(|p| p.name == product.name).count() > 1 {
                return Err(CatalogError::Invalid(format!("duplicate product '{}'", product.name)));
            }
        }

        for mapping in &categories {
            if !products.iter().any(|p| p.name == mapping.product) {
                return Err(CatalogError::Invalid(format!(
                    "category '{}' maps to unknown product '{}'",
                    mapping.category, mapping.product
                )));
            }
            if categories.iter().filter(|m| m.category == mapping.category).count() > 1 {
                return Err(CatalogError::Invalid(format!("duplicate category '{}'", mapping.category)));
            }
        }

        let default_index = products
            .iter()
            .position(|p| p.name == default_product)
            .ok_or_else(|| CatalogError::Invalid(format!("unknown default product '{}'", default_product)))?;

        Ok(Self {
            products,
            categories,
            default_product,
            company,
            default_index,
        })
    }

    pub fn load_from_json(path: &str) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let catalog: Catalog = serde_json::from_reader(reader)?;
        Ok(catalog)
    }

    pub fn get_products(&self) -> &[Product] {
        &self.products
    }

    pub fn get_categories(&self) -> &[CategoryMapping] {
        &self.categories
    }

    pub fn get_company(&self) -> &CompanyProfile {
        &self.company
    }

    pub fn get_default_product(&self) -> &Product {
        &self.products[self.default_index]
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn mapped_product(&self, category: &str) -> Option<&Product> {
        self.categories
            .iter()
            .find(|m| m.category == category)
            .and_then(|m| self.product(&m.product))
    }

    /// Product for `category`, or the default product when the category is unknown.
    /// The flag is `true` when the default was used.
    pub fn resolve(&self, category: &str) -> (&Product, bool) {
        match self.mapped_product(category) {
            Some(product) => (product, false),
            None => (self.get_default_product(), true),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let products = vec![
            Product::new(
                GUARD_PRODUCT,
                "Fibrillated Polypropylene Microfiber (6 mm)",
                DosageRange::new(0.6, 1.0),
                180.0,
                "Shrinkage / finish control (plaster, screed, light slabs)",
            ),
            Product::new(
                FIBRE_TUFF_PRODUCT,
                "Macro Synthetic Polymer Fiber (36–54 mm)",
                DosageRange::new(2.5, 9.0),
                350.0,
                "Structural reinforcement (floors, pavements, runways, precast)",
            ),
        ];

        let categories = [
            ("Plaster / Screed / Finishing", GUARD_PRODUCT),
            ("Residential / Decorative Floor", GUARD_PRODUCT),
            ("Industrial Floor", FIBRE_TUFF_PRODUCT),
            ("Pavement / Road", FIBRE_TUFF_PRODUCT),
            ("Runway / Airfield", FIBRE_TUFF_PRODUCT),
            ("Tunnel Lining / Shotcrete", FIBRE_TUFF_PRODUCT),
            ("Precast Element", FIBRE_TUFF_PRODUCT),
        ]
        .iter()
        .map(|(category, product)| CategoryMapping {
            category: category.to_string(),
            product: product.to_string(),
        })
        .collect();

        let company = CompanyProfile {
            website: "https://www.brllp.in".to_string(),
            email: "info@brllp.in".to_string(),
            phone: "+91 7104 281000".to_string(),
            gstin: "27ABCDE1234F1Z5".to_string(),
        };

        // Shipped tables are known-good; the position lookup cannot miss.
        let default_index = products
            .iter()
            .position(|p| p.name == DEFAULT_PRODUCT)
            .unwrap_or(0);

        Self {
            products,
            categories,
            default_product: DEFAULT_PRODUCT.to_string(),
            company,
            default_index,
        }
    }
}

lazy_static! {
    /// Catalog shipped with the tool, built once and never mutated.
    pub static ref DEFAULT_CATALOG: Catalog = Catalog::default();
}
