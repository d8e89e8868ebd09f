//! # Domain Types
//!
//! Core domain types used throughout Ticketforge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Prize       │   │    UnitType     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  Each ("EACH")  │       │
//! │  │  upc (business) │   │  upc (business) │   │  Case ("CASE")  │       │
//! │  │  sku (optional) │   │  name           │   │  Inner ("INNER")│       │
//! │  │  unit_cost_cents│   │  unit_cost_cents│   └─────────────────┘       │
//! │  │  ticket_value   │   │  ticket_value   │   ┌─────────────────┐       │
//! │  └─────────────────┘   └─────────────────┘   │  ProductType    │       │
//! │                                              │  ─────────────  │       │
//! │  Both record types cache their ticket        │  Ret / Sow / Red│       │
//! │  value at create/edit time.                  └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every record has:
//! - `id`: UUID v4 - immutable, used for catalog operations
//! - `upc`: the business identifier that travels into the DPL export

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Unit Type
// =============================================================================

/// How a product is counted when purchased from the vendor.
///
/// Serialized and exported in uppercase (`EACH`/`CASE`/`INNER`), which is
/// the exact token the DPL consumer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitType {
    /// Sold individually.
    Each,
    /// Sold by the case.
    Case,
    /// Inner pack within a case.
    Inner,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            UnitType::Each => "EACH",
            UnitType::Case => "CASE",
            UnitType::Inner => "INNER",
        };
        f.write_str(token)
    }
}

impl Default for UnitType {
    fn default() -> Self {
        UnitType::Each
    }
}

// =============================================================================
// Product Type
// =============================================================================

/// The type code the redemption counter files a product under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductType {
    /// Retail item.
    Ret,
    /// Sow item.
    Sow,
    /// Redemption item.
    Red,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            ProductType::Ret => "RET",
            ProductType::Sow => "SOW",
            ProductType::Red => "RED",
        };
        f.write_str(token)
    }
}

impl Default for ProductType {
    fn default() -> Self {
        ProductType::Ret
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product entered for DPL export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// UPC barcode - business identifier, exported as-is.
    pub upc: String,

    /// Optional vendor SKU. When present and non-empty it is prefixed onto
    /// the exported display name (`SKU-Name`).
    pub sku: Option<String>,

    /// Display name shown in the catalog and exported.
    pub name: String,

    /// How the product is counted (EACH/CASE/INNER).
    pub unit_type: UnitType,

    /// Quantity on hand / ordered.
    pub quantity: i64,

    /// Total (case) cost in cents.
    pub total_cost_cents: i64,

    /// Cached ticket value, stamped whenever the record is created or
    /// edited. Never recomputed lazily.
    pub ticket_value: i64,

    /// Items contained in one unit.
    pub items_per_unit: i64,

    /// Cost of a single item in cents. This is the only field that feeds
    /// the pricing formula.
    pub unit_cost_cents: i64,

    /// Type code for the redemption counter (RET/SOW/RED).
    pub product_type: ProductType,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit cost as a Money type.
    #[inline]
    pub fn unit_cost(&self) -> Money {
        Money::from_cents(self.unit_cost_cents)
    }

    /// Returns the total cost as a Money type.
    #[inline]
    pub fn total_cost(&self) -> Money {
        Money::from_cents(self.total_cost_cents)
    }

    /// The name as it appears in the DPL export: `SKU-Name` when a
    /// non-empty SKU is present, otherwise the name alone.
    pub fn export_name(&self) -> String {
        match self.sku.as_deref() {
            Some(sku) if !sku.is_empty() => format!("{}-{}", sku, self.name),
            _ => self.name.clone(),
        }
    }
}

// =============================================================================
// Prize
// =============================================================================

/// A redemption prize tracked for the prize-export variant.
///
/// Prizes are always counted `EACH`, quantity 1, type `RET`; those fields
/// are hardcoded in the export format rather than stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prize {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// UPC barcode.
    pub upc: String,

    /// Prize name.
    pub name: String,

    /// Cost of a single prize in cents.
    pub unit_cost_cents: i64,

    /// Cached ticket value, stamped at create/edit time.
    pub ticket_value: i64,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Prize {
    /// Returns the unit cost as a Money type.
    #[inline]
    pub fn unit_cost(&self) -> Money {
        Money::from_cents(self.unit_cost_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(sku: Option<&str>) -> Product {
        let now = Utc::now();
        Product {
            id: "test-id".to_string(),
            upc: "632365900291".to_string(),
            sku: sku.map(str::to_string),
            name: "Popper".to_string(),
            unit_type: UnitType::Each,
            quantity: 6,
            total_cost_cents: 532,
            ticket_value: 1650,
            items_per_unit: 1,
            unit_cost_cents: 532,
            product_type: ProductType::Ret,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_unit_type_tokens() {
        assert_eq!(UnitType::Each.to_string(), "EACH");
        assert_eq!(UnitType::Case.to_string(), "CASE");
        assert_eq!(UnitType::Inner.to_string(), "INNER");
        assert_eq!(UnitType::default(), UnitType::Each);
    }

    #[test]
    fn test_product_type_tokens() {
        assert_eq!(ProductType::Ret.to_string(), "RET");
        assert_eq!(ProductType::Sow.to_string(), "SOW");
        assert_eq!(ProductType::Red.to_string(), "RED");
        assert_eq!(ProductType::default(), ProductType::Ret);
    }

    #[test]
    fn test_export_name_with_sku() {
        let product = sample_product(Some("GLOPOP"));
        assert_eq!(product.export_name(), "GLOPOP-Popper");
    }

    #[test]
    fn test_export_name_without_sku() {
        assert_eq!(sample_product(None).export_name(), "Popper");
        // An empty SKU behaves like no SKU at all
        assert_eq!(sample_product(Some("")).export_name(), "Popper");
    }

    #[test]
    fn test_money_accessors() {
        let product = sample_product(None);
        assert_eq!(product.unit_cost(), Money::from_cents(532));
        assert_eq!(product.total_cost(), Money::from_cents(532));
    }

    #[test]
    fn test_enum_serde_tokens() {
        assert_eq!(serde_json::to_string(&UnitType::Each).unwrap(), "\"EACH\"");
        assert_eq!(
            serde_json::to_string(&ProductType::Red).unwrap(),
            "\"RED\""
        );
        let parsed: UnitType = serde_json::from_str("\"INNER\"").unwrap();
        assert_eq!(parsed, UnitType::Inner);
    }
}
