//! # Validation Module
//!
//! Input validation for catalog entry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Entry surface (forms / CLI input)                             │
//! │  ├── Basic format checks, immediate feedback                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                        │
//! │  ├── Runs inside every catalog add/update                               │
//! │  └── Guards the DPL contract: no commas or newlines may reach           │
//! │      the formatter, costs must be positive before pricing               │
//! │                                                                         │
//! │  Defense in depth: the formatter itself never validates                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ticketforge_core::validation::{validate_upc, validate_quantity};
//!
//! validate_upc("632365900291").unwrap();
//! validate_quantity(6).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_CATALOG_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Characters that would corrupt an unescaped DPL line.
fn contains_dpl_delimiters(value: &str) -> bool {
    value.contains(',') || value.contains('\n') || value.contains('\r')
}

/// Validates a UPC code.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Must not contain commas or newlines (the DPL format has no escaping)
///
/// ## Example
/// ```rust
/// use ticketforge_core::validation::validate_upc;
///
/// assert!(validate_upc("632365900291").is_ok());
/// assert!(validate_upc("").is_err());
/// assert!(validate_upc("123,456").is_err());
/// ```
pub fn validate_upc(upc: &str) -> ValidationResult<()> {
    let upc = upc.trim();

    if upc.is_empty() {
        return Err(ValidationError::Required {
            field: "upc".to_string(),
        });
    }

    if upc.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "upc".to_string(),
            max: 50,
        });
    }

    if contains_dpl_delimiters(upc) {
        return Err(ValidationError::InvalidFormat {
            field: "upc".to_string(),
            reason: "must not contain commas or newlines".to_string(),
        });
    }

    Ok(())
}

/// Validates a product or prize name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
/// - Must not contain commas or newlines (the DPL format has no escaping)
///
/// ## Example
/// ```rust
/// use ticketforge_core::validation::validate_name;
///
/// assert!(validate_name("Glow-in-the-Dark Ping Pong Popper").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("Popper, Glow").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    if contains_dpl_delimiters(name) {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not contain commas or newlines".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional SKU.
///
/// ## Rules
/// - May be empty (SKU is optional; the export then uses the name alone)
/// - Must be at most 50 characters
/// - Should contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use ticketforge_core::validation::validate_sku;
///
/// assert!(validate_sku("GLOPOP").is_ok());
/// assert!(validate_sku("").is_ok());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Ok(());
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates an items-per-unit count.
///
/// ## Rules
/// - Must be positive (> 0); it divides the total cost
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_items_per_unit(count: i64) -> ValidationResult<()> {
    if count <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "items per unit".to_string(),
        });
    }

    if count > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "items per unit".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a cost in cents.
///
/// ## Rules
/// - Must be strictly positive; the pricing formula is total over any
///   integer, but only positive costs describe a real product
///
/// ## Example
/// ```rust
/// use ticketforge_core::validation::validate_cost_cents;
///
/// assert!(validate_cost_cents("unit cost", 532).is_ok());
/// assert!(validate_cost_cents("unit cost", 0).is_err());
/// assert!(validate_cost_cents("unit cost", -100).is_err());
/// ```
pub fn validate_cost_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates catalog size before inserting another record.
///
/// ## Rules
/// - Must not exceed MAX_CATALOG_ITEMS
pub fn validate_catalog_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CATALOG_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "catalog items".to_string(),
            min: 0,
            max: MAX_CATALOG_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
