//! Error types for railbus
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RailbusError
pub type Result<T> = std::result::Result<T, RailbusError>;

/// Unified error type for railbus operations
#[derive(Debug, Error)]
pub enum RailbusError {
    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    /// An integer field does not fit into its declared byte width
    #[error("Encoding overflow: {value} does not fit in {width} byte(s)")]
    EncodingOverflow { value: i128, width: usize },

    /// Negative integer, out-of-range bitset or unsupported field width
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wire code with no entry in its code table
    #[error("Unknown {table} code: 0x{code:02x}")]
    UnknownIdentifier { table: &'static str, code: u8 },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
