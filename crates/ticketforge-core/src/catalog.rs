//! # Catalog Module
//!
//! Owned, in-memory record lists with create/edit/remove operations.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog: Add Product                               │
//! │                                                                         │
//! │  NewProduct draft (entered fields only)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate (upc, name, sku, quantity, costs, catalog size)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ticket_value = pricing::ticket_value(unit_cost)  ← computed ONCE      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product { id: uuid-v4, ticket_value, timestamps, ... } pushed          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ticket value is cached on the record at create/edit time. Every
//! `update` recomputes it from the draft's unit cost, so an edited cost can
//! never leave a stale ticket value behind.
//!
//! ## Ownership
//! A catalog is a plain owned collection: single-threaded, synchronous, no
//! interior mutability. The caller that owns the catalog is the only writer.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing;
use crate::types::{Prize, Product, ProductType, UnitType};
use crate::validation;

// =============================================================================
// Drafts
// =============================================================================

/// The caller-supplied fields of a product; everything else (id, ticket
/// value, timestamps) is stamped by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub upc: String,
    /// Optional vendor SKU; an empty string means "no SKU".
    pub sku: String,
    pub name: String,
    pub unit_type: UnitType,
    pub quantity: i64,
    pub total_cost_cents: i64,
    pub items_per_unit: i64,
    /// The only field that feeds the pricing formula. Callers that let the
    /// total cost drive it can derive this via
    /// [`Money::divide_rounded`](crate::money::Money::divide_rounded).
    pub unit_cost_cents: i64,
    pub product_type: ProductType,
}

impl NewProduct {
    fn validate(&self) -> CoreResult<()> {
        validation::validate_upc(&self.upc)?;
        validation::validate_sku(&self.sku)?;
        validation::validate_name(&self.name)?;
        validation::validate_quantity(self.quantity)?;
        validation::validate_items_per_unit(self.items_per_unit)?;
        validation::validate_cost_cents("total cost", self.total_cost_cents)?;
        validation::validate_cost_cents("unit cost", self.unit_cost_cents)?;
        Ok(())
    }

    fn sku_option(&self) -> Option<String> {
        let sku = self.sku.trim();
        if sku.is_empty() {
            None
        } else {
            Some(sku.to_string())
        }
    }
}

/// The caller-supplied fields of a prize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPrize {
    pub upc: String,
    pub name: String,
    pub unit_cost_cents: i64,
}

impl NewPrize {
    fn validate(&self) -> CoreResult<()> {
        validation::validate_upc(&self.upc)?;
        validation::validate_name(&self.name)?;
        validation::validate_cost_cents("unit cost", self.unit_cost_cents)?;
        Ok(())
    }
}

// =============================================================================
// Product Catalog
// =============================================================================

/// The accumulated list of products awaiting DPL export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    items: Vec<Product>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a draft, computes its ticket value, and appends the new
    /// record. Returns a reference to the stored product.
    pub fn add(&mut self, draft: NewProduct) -> CoreResult<&Product> {
        validation::validate_catalog_size(self.items.len())?;
        draft.validate()?;

        let now = Utc::now();
        let ticket_value = pricing::ticket_value(Money::from_cents(draft.unit_cost_cents));
        let product = Product {
            id: Uuid::new_v4().to_string(),
            upc: draft.upc.trim().to_string(),
            sku: draft.sku_option(),
            name: draft.name.trim().to_string(),
            unit_type: draft.unit_type,
            quantity: draft.quantity,
            total_cost_cents: draft.total_cost_cents,
            ticket_value,
            items_per_unit: draft.items_per_unit,
            unit_cost_cents: draft.unit_cost_cents,
            product_type: draft.product_type,
            created_at: now,
            updated_at: now,
        };

        let index = self.items.len();
        self.items.push(product);
        Ok(&self.items[index])
    }

    /// Replaces the entered fields of an existing record and recomputes the
    /// ticket value from the draft's unit cost. Identity and creation time
    /// are preserved; `updated_at` is bumped.
    pub fn update(&mut self, id: &str, draft: NewProduct) -> CoreResult<&Product> {
        let index = self
            .items
            .iter()
            .position(|product| product.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        draft.validate()?;

        let existing = &self.items[index];
        let updated = Product {
            id: existing.id.clone(),
            upc: draft.upc.trim().to_string(),
            sku: draft.sku_option(),
            name: draft.name.trim().to_string(),
            unit_type: draft.unit_type,
            quantity: draft.quantity,
            total_cost_cents: draft.total_cost_cents,
            ticket_value: pricing::ticket_value(Money::from_cents(draft.unit_cost_cents)),
            items_per_unit: draft.items_per_unit,
            unit_cost_cents: draft.unit_cost_cents,
            product_type: draft.product_type,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        self.items[index] = updated;
        Ok(&self.items[index])
    }

    /// Removes a record by id, returning it.
    pub fn remove(&mut self, id: &str) -> CoreResult<Product> {
        let index = self
            .items
            .iter()
            .position(|product| product.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    /// The records in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.items
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Prize Catalog
// =============================================================================

/// The accumulated list of redemption prizes awaiting export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrizeCatalog {
    items: Vec<Prize>,
}

impl PrizeCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a draft, computes its ticket value, and appends the new
    /// prize.
    pub fn add(&mut self, draft: NewPrize) -> CoreResult<&Prize> {
        validation::validate_catalog_size(self.items.len())?;
        draft.validate()?;

        let now = Utc::now();
        let prize = Prize {
            id: Uuid::new_v4().to_string(),
            upc: draft.upc.trim().to_string(),
            name: draft.name.trim().to_string(),
            unit_cost_cents: draft.unit_cost_cents,
            ticket_value: pricing::ticket_value(Money::from_cents(draft.unit_cost_cents)),
            created_at: now,
            updated_at: now,
        };

        let index = self.items.len();
        self.items.push(prize);
        Ok(&self.items[index])
    }

    /// Replaces the entered fields of an existing prize, recomputing the
    /// ticket value.
    pub fn update(&mut self, id: &str, draft: NewPrize) -> CoreResult<&Prize> {
        let index = self
            .items
            .iter()
            .position(|prize| prize.id == id)
            .ok_or_else(|| CoreError::PrizeNotFound(id.to_string()))?;
        draft.validate()?;

        let existing = &self.items[index];
        let updated = Prize {
            id: existing.id.clone(),
            upc: draft.upc.trim().to_string(),
            name: draft.name.trim().to_string(),
            unit_cost_cents: draft.unit_cost_cents,
            ticket_value: pricing::ticket_value(Money::from_cents(draft.unit_cost_cents)),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        self.items[index] = updated;
        Ok(&self.items[index])
    }

    /// Removes a prize by id, returning it.
    pub fn remove(&mut self, id: &str) -> CoreResult<Prize> {
        let index = self
            .items
            .iter()
            .position(|prize| prize.id == id)
            .ok_or_else(|| CoreError::PrizeNotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// The prizes in insertion order.
    pub fn prizes(&self) -> &[Prize] {
        &self.items
    }

    /// Number of prizes in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no prizes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewProduct {
        NewProduct {
            upc: "632365900291".to_string(),
            sku: "GLOPOP".to_string(),
            name: "Popper".to_string(),
            unit_type: UnitType::Each,
            quantity: 6,
            total_cost_cents: 532,
            items_per_unit: 1,
            unit_cost_cents: 532,
            product_type: ProductType::Ret,
        }
    }

    #[test]
    fn test_add_computes_ticket_value() {
        let mut catalog = ProductCatalog::new();
        let product = catalog.add(draft()).unwrap();
        // $5.32 → raw 1596 → interval 150 → 1650
        assert_eq!(product.ticket_value, 1650);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut catalog = ProductCatalog::new();

        let mut bad = draft();
        bad.upc = String::new();
        assert!(catalog.add(bad).is_err());

        let mut bad = draft();
        bad.unit_cost_cents = 0;
        assert!(catalog.add(bad).is_err());

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_normalizes_empty_sku_to_none() {
        let mut catalog = ProductCatalog::new();
        let mut no_sku = draft();
        no_sku.sku = "   ".to_string();
        let product = catalog.add(no_sku).unwrap();
        assert_eq!(product.sku, None);
        assert_eq!(product.export_name(), "Popper");
    }

    #[test]
    fn test_update_recomputes_ticket_value() {
        let mut catalog = ProductCatalog::new();
        let id = catalog.add(draft()).unwrap().id.clone();

        let mut edited = draft();
        edited.unit_cost_cents = 1899; // $18.99 → 6000 tickets
        let product = catalog.update(&id, edited).unwrap();
        assert_eq!(product.ticket_value, 6000);
        assert_eq!(product.id, id);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut catalog = ProductCatalog::new();
        let err = catalog.update("missing", draft()).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
    }

    #[test]
    fn test_remove() {
        let mut catalog = ProductCatalog::new();
        let id = catalog.add(draft()).unwrap().id.clone();

        let removed = catalog.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.remove(&id),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_prize_catalog_add_and_update() {
        let mut catalog = PrizeCatalog::new();
        let prize_draft = NewPrize {
            upc: "073854008528".to_string(),
            name: "Plush Bear".to_string(),
            unit_cost_cents: 450,
        };
        let id = catalog.add(prize_draft.clone()).unwrap().id.clone();
        // $4.50 → raw 1350 → interval 50 → 1350
        assert_eq!(catalog.prizes()[0].ticket_value, 1350);

        let mut edited = prize_draft;
        edited.unit_cost_cents = 532;
        let prize = catalog.update(&id, edited).unwrap();
        assert_eq!(prize.ticket_value, 1650);
    }

    #[test]
    fn test_catalog_serde_round_trip() {
        let mut catalog = ProductCatalog::new();
        catalog.add(draft()).unwrap();

        let json = serde_json::to_string(&catalog).unwrap();
        let restored: ProductCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.products()[0].ticket_value, 1650);
        assert_eq!(restored.products()[0].sku.as_deref(), Some("GLOPOP"));
    }
}
