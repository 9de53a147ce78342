//! # railbus
//!
//! Encoder for model-railway control-bus commands:
//! - Typed command values, one enum per command family
//! - Compile-time subcommand and rail protocol code tables
//! - Fixed-width big-endian field encoding with overflow detection
//! - Variable-length bodies for optional trailing fields
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Request layer / CLI                         │
//! │               (JSON or argument input)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ SystemCommand
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                BusCommand::assemble()                        │
//! │          ident (4) + subcommand (1) + payload                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Codec    │          │ Code tables │
//!   │ (put_uint)  │          │ (sub/rail)  │
//!   └─────────────┘          └─────────────┘
//!                       │
//!                       ▼
//!               body bytes → transport
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RailbusError, Result};
pub use config::{Config, OutputFormat};
pub use protocol::{BusCommand, RailProtocol, Subcommand, SystemCommand};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of railbus
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
