//! # DPL Writer
//!
//! Writes assembled DPL documents to date-stamped files.
//!
//! ## Output Files
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <out_dir>/products_2026-08-30.dpl           product export            │
//! │  <out_dir>/redemption_prizes_2026-08-30.dpl  prize export              │
//! │                                                                         │
//! │  Date stamp is the UTC date at write time. Re-exporting on the same    │
//! │  day overwrites the previous file, which is the desired behavior:      │
//! │  the counter imports one file per day.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Document contents come verbatim from `ticketforge_core::dpl`; this
//! module only decides where the bytes land.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use ticketforge_core::dpl;
use ticketforge_core::{PrizeCatalog, ProductCatalog};
use tracing::info;

use crate::error::{ExportError, ExportResult};

// =============================================================================
// DPL Writer
// =============================================================================

/// Writes `.dpl` export files into a configured output directory.
#[derive(Debug, Clone)]
pub struct DplWriter {
    out_dir: PathBuf,
}

impl DplWriter {
    /// Creates a writer targeting the given output directory. The directory
    /// is created on first write if it does not exist.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// The filename for a product export on the given date.
    pub fn product_filename(date: NaiveDate) -> String {
        format!("products_{}.dpl", date.format("%Y-%m-%d"))
    }

    /// The filename for a prize export on the given date.
    pub fn prize_filename(date: NaiveDate) -> String {
        format!("redemption_prizes_{}.dpl", date.format("%Y-%m-%d"))
    }

    /// Writes the product export for the catalog, returning the file path.
    ///
    /// Refuses an empty catalog with [`ExportError::EmptyCatalog`]: the
    /// product format has no header, so the file would be empty.
    pub fn write_product_export(&self, catalog: &ProductCatalog) -> ExportResult<PathBuf> {
        if catalog.is_empty() {
            return Err(ExportError::EmptyCatalog);
        }

        let document = dpl::product_document(catalog.products());
        let path = self.write(&Self::product_filename(Utc::now().date_naive()), &document)?;
        info!(path = %path.display(), records = catalog.len(), "wrote product export");
        Ok(path)
    }

    /// Writes the prize export for the catalog, returning the file path.
    ///
    /// An empty prize catalog still produces a valid document (the fixed
    /// header line), so no emptiness check applies here.
    pub fn write_prize_export(&self, catalog: &PrizeCatalog) -> ExportResult<PathBuf> {
        let document = dpl::prize_document(catalog.prizes());
        let path = self.write(&Self::prize_filename(Utc::now().date_naive()), &document)?;
        info!(path = %path.display(), records = catalog.len(), "wrote prize export");
        Ok(path)
    }

    fn write(&self, filename: &str, document: &str) -> ExportResult<PathBuf> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(filename);
        fs::write(&path, document)?;
        Ok(path)
    }

    /// The configured output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
