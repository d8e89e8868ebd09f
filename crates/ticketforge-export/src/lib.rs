//! # ticketforge-export: Export Layer for Ticketforge
//!
//! This crate owns every filesystem operation in the workspace: catalog
//! JSON persistence and writing the `.dpl` files the redemption counter
//! imports.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ticketforge Data Flow                              │
//! │                                                                         │
//! │  `dpl` CLI binary                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                ticketforge-export (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     store     │    │    writer     │    │    error     │  │   │
//! │  │   │ catalog JSON  │    │ .dpl files,   │    │ ExportError  │  │   │
//! │  │   │ load / save   │    │ date-stamped  │    │              │  │   │
//! │  │   └───────┬───────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │           │                    │                               │   │
//! │  └───────────┼────────────────────┼───────────────────────────────┘   │
//! │              ▼                    ▼                                    │
//! │     catalog .json files    products_YYYY-MM-DD.dpl                     │
//! │                            redemption_prizes_YYYY-MM-DD.dpl            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Catalog JSON load/save
//! - [`writer`] - Date-stamped `.dpl` file output
//! - [`error`] - Export error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ticketforge_export::{store, DplWriter};
//!
//! let catalog = store::load_products(Path::new("catalog.json"))?;
//! let writer = DplWriter::new("exports");
//! let path = writer.write_product_export(&catalog)?;
//! println!("wrote {}", path.display());
//! # Ok::<(), ticketforge_export::ExportError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod writer;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ExportError, ExportResult};
pub use writer::DplWriter;
