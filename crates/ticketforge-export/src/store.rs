//! # Catalog Store
//!
//! Loads and saves catalogs as JSON files on disk.
//!
//! ## File Shape
//! A catalog file is the serde serialization of
//! [`ProductCatalog`]/[`PrizeCatalog`] - pretty-printed so staff can diff
//! and hand-inspect it. A missing file loads as an empty catalog, so a
//! fresh working directory "just works".

use std::fs;
use std::path::Path;

use ticketforge_core::{PrizeCatalog, ProductCatalog};
use tracing::{debug, info};

use crate::error::ExportResult;

// =============================================================================
// Product Catalog
// =============================================================================

/// Loads a product catalog from a JSON file.
///
/// A missing file is treated as an empty catalog, not an error.
pub fn load_products(path: &Path) -> ExportResult<ProductCatalog> {
    if !path.exists() {
        debug!(path = %path.display(), "product catalog file missing, starting empty");
        return Ok(ProductCatalog::new());
    }

    let contents = fs::read_to_string(path)?;
    let catalog: ProductCatalog = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), records = catalog.len(), "loaded product catalog");
    Ok(catalog)
}

/// Saves a product catalog to a JSON file, replacing any previous contents.
pub fn save_products(path: &Path, catalog: &ProductCatalog) -> ExportResult<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    info!(path = %path.display(), records = catalog.len(), "saved product catalog");
    Ok(())
}

// =============================================================================
// Prize Catalog
// =============================================================================

/// Loads a prize catalog from a JSON file.
///
/// A missing file is treated as an empty catalog, not an error.
pub fn load_prizes(path: &Path) -> ExportResult<PrizeCatalog> {
    if !path.exists() {
        debug!(path = %path.display(), "prize catalog file missing, starting empty");
        return Ok(PrizeCatalog::new());
    }

    let contents = fs::read_to_string(path)?;
    let catalog: PrizeCatalog = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), records = catalog.len(), "loaded prize catalog");
    Ok(catalog)
}

/// Saves a prize catalog to a JSON file, replacing any previous contents.
pub fn save_prizes(path: &Path, catalog: &PrizeCatalog) -> ExportResult<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    info!(path = %path.display(), records = catalog.len(), "saved prize catalog");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use ticketforge_core::{NewProduct, ProductType, UnitType};
    use uuid::Uuid;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ticketforge-store-{}-{}", name, Uuid::new_v4()))
    }

    fn sample_catalog() -> ProductCatalog {
        let mut catalog = ProductCatalog::new();
        catalog
            .add(NewProduct {
                upc: "632365900291".to_string(),
                sku: "GLOPOP".to_string(),
                name: "Popper".to_string(),
                unit_type: UnitType::Each,
                quantity: 6,
                total_cost_cents: 532,
                items_per_unit: 1,
                unit_cost_cents: 532,
                product_type: ProductType::Ret,
            })
            .unwrap();
        catalog
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let path = temp_file("missing");
        let catalog = load_products(&path).unwrap();
        assert!(catalog.is_empty());

        let prizes = load_prizes(&path).unwrap();
        assert!(prizes.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_file("roundtrip");
        let catalog = sample_catalog();

        save_products(&path, &catalog).unwrap();
        let restored = load_products(&path).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.products()[0].ticket_value, 1650);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let path = temp_file("corrupt");
        fs::write(&path, "not json at all").unwrap();

        let err = load_products(&path).unwrap_err();
        assert!(matches!(err, crate::error::ExportError::Json(_)));

        fs::remove_file(&path).unwrap();
    }
}
