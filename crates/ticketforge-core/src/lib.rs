//! # ticketforge-core: Pure Business Logic for Ticketforge
//!
//! This crate is the **heart** of Ticketforge. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ticketforge Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Entry Surface (forms / CLI)                    │   │
//! │  │    Product entry ──► Catalog review ──► Preview ──► Export     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ ticketforge-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │    dpl    │  │  catalog  │  │ validation│  │   │
//! │  │   │ TicketVal │  │ DPL lines │  │  Product  │  │   rules   │  │   │
//! │  │   │  ranges   │  │ documents │  │   Prize   │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILESYSTEM • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ticketforge-export (I/O Layer)                     │   │
//! │  │         catalog JSON files, date-stamped .dpl output            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - Ticket value calculation (markup + interval quantization)
//! - [`dpl`] - DPL record serialization and document assembly
//! - [`catalog`] - Owned product/prize lists with create/edit/remove
//! - [`types`] - Domain types (Product, Prize, UnitType, ProductType)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - Entry validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Filesystem, network, database access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ticketforge_core::money::Money;
//! use ticketforge_core::pricing::ticket_value;
//!
//! // $5.32 unit cost → 1596 raw tickets → quantized to 1650
//! let cost = Money::from_cents(532);
//! assert_eq!(ticket_value(cost), 1650);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod dpl;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ticketforge_core::Money` instead of
// `use ticketforge_core::money::Money`

pub use catalog::{NewPrize, NewProduct, PrizeCatalog, ProductCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum records allowed in a single catalog
///
/// ## Business Reason
/// A DPL export is assembled in memory; this keeps catalogs at a size the
/// redemption counter can actually import.
pub const MAX_CATALOG_ITEMS: usize = 5000;

/// Maximum quantity / items-per-unit of a single record
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 9999;
