//! # DPL Serialization Module
//!
//! Serializes catalog records into the delimited text format ("DPL")
//! consumed by the external redemption-counter system.
//!
//! ## The Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DPL Record Layouts                               │
//! │                                                                         │
//! │  Product export (9 fields, no header):                                  │
//! │  UPC,Name,UnitType,Qty,TotalCost,TicketValue,Items/Unit,UnitCost,Type  │
//! │                                                                         │
//! │  Prize export (fixed header line, then one record per prize):           │
//! │  UPC,Product Name,EACH,1,Unit Cost,Ticket Value,1,Unit Cost,RET        │
//! │  632365900291,Plush Bear,EACH,1,4.50,1500,1,4.50,RET                   │
//! │                                                                         │
//! │  Currency: exactly two decimals.  Ticket value: plain integer.          │
//! │  No quoting, no escaping - field order is a bit-for-bit contract.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Escaping
//! The format has no quoting mechanism, so textual fields must never
//! contain a comma or newline. That constraint is enforced upstream by the
//! [`crate::validation`] module, not here; the formatter is a pure
//! transformation of whatever it is handed.

use crate::types::{Prize, Product};

// =============================================================================
// Constants
// =============================================================================

/// The fixed header line of the prize export variant. Emitted verbatim,
/// including when the prize catalog is empty.
pub const PRIZE_EXPORT_HEADER: &str = "UPC,Product Name,EACH,1,Unit Cost,Ticket Value,1,Unit Cost,RET";

// =============================================================================
// Record Formatting
// =============================================================================

/// Serializes one product into its 9-field DPL record (no trailing newline).
///
/// ## Example
/// ```rust
/// # use chrono::Utc;
/// use ticketforge_core::dpl::product_line;
/// use ticketforge_core::types::{Product, ProductType, UnitType};
///
/// # let now = Utc::now();
/// let product = Product {
///     id: "x".into(),
///     upc: "632365900291".into(),
///     sku: Some("GLOPOP".into()),
///     name: "Popper".into(),
///     unit_type: UnitType::Each,
///     quantity: 6,
///     total_cost_cents: 3192,
///     ticket_value: 1650,
///     items_per_unit: 6,
///     unit_cost_cents: 532,
///     product_type: ProductType::Ret,
///     created_at: now,
///     updated_at: now,
/// };
/// assert_eq!(
///     product_line(&product),
///     "632365900291,GLOPOP-Popper,EACH,6,31.92,1650,6,5.32,RET"
/// );
/// ```
pub fn product_line(product: &Product) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{}",
        product.upc,
        product.export_name(),
        product.unit_type,
        product.quantity,
        product.total_cost().to_decimal_string(),
        product.ticket_value,
        product.items_per_unit,
        product.unit_cost().to_decimal_string(),
        product.product_type,
    )
}

/// Serializes one prize into its DPL record (no trailing newline).
///
/// Unit type and type code are the hardcoded constants `EACH`/`RET`,
/// quantity and items-per-unit are hardcoded to `1`, and the unit cost
/// appears twice (total cost of one prize is its unit cost).
pub fn prize_line(prize: &Prize) -> String {
    let unit_cost = prize.unit_cost().to_decimal_string();
    format!(
        "{},{},EACH,1,{},{},1,{},RET",
        prize.upc, prize.name, unit_cost, prize.ticket_value, unit_cost,
    )
}

// =============================================================================
// Document Assembly
// =============================================================================

/// Assembles the product export document: one record per line, each line
/// `\n`-terminated, no header.
///
/// An empty catalog yields the empty string.
pub fn product_document(products: &[Product]) -> String {
    let mut content = String::new();
    for product in products {
        content.push_str(&product_line(product));
        content.push('\n');
    }
    content
}

/// Assembles the prize export document: the fixed header line followed by
/// one record per prize, every line `\n`-terminated.
///
/// With zero prizes the document is the header line alone.
pub fn prize_document(prizes: &[Prize]) -> String {
    let mut content = String::with_capacity(PRIZE_EXPORT_HEADER.len() + 1);
    content.push_str(PRIZE_EXPORT_HEADER);
    content.push('\n');
    for prize in prizes {
        content.push_str(&prize_line(prize));
        content.push('\n');
    }
    content
}

// =============================================================================
// Unit Tests
// =============================================================================
