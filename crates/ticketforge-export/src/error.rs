//! # Export Error Types
//!
//! Error types for the filesystem layer. Core domain errors stay in
//! `ticketforge_core::error`; everything here is about getting bytes on and
//! off disk.

use thiserror::Error;

// =============================================================================
// Export Error
// =============================================================================

/// Errors raised while persisting catalogs or writing `.dpl` files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem operation failed (read, write, create directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file exists but is not valid JSON for the expected shape.
    #[error("Catalog file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Refusing to write a product export with no records.
    ///
    /// ## When This Occurs
    /// The product export has no header line, so an empty catalog would
    /// produce a zero-byte file the redemption counter rejects.
    #[error("Catalog is empty, nothing to export")]
    EmptyCatalog,
}

/// Convenience type alias for Results with ExportError.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExportError::EmptyCatalog.to_string(),
            "Catalog is empty, nothing to export"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
