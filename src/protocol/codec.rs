//! Protocol codec
//!
//! Fixed-width integer encoding and stream helpers for command bodies.
//!
//! ## Integer Encoding
//! ```text
//! value = 300, width = 2
//! ┌──────────┬──────────┐
//! │   0x01   │   0x2C   │
//! └──────────┴──────────┘
//!    MSB        LSB
//! ```
//!
//! Values that do not fit are rejected, never truncated.

use std::fmt::Write as _;
use std::io::Write;

use bytes::BufMut;

use crate::error::{RailbusError, Result};
use super::BusCommand;

/// Widest field the encoder accepts (in bytes)
pub const MAX_WIDTH: usize = 16;

// =============================================================================
// Integer Encoding
// =============================================================================

/// Encode a non-negative integer as `width` big-endian bytes
pub fn encode_uint(value: impl Into<i128>, width: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(width);
    put_uint(&mut out, value, width)?;
    Ok(out)
}

/// Append a non-negative integer to `buf` as `width` big-endian bytes
///
/// Nothing is written when the value is rejected.
pub fn put_uint<B: BufMut>(buf: &mut B, value: impl Into<i128>, width: usize) -> Result<()> {
    let value = value.into();

    if width == 0 || width > MAX_WIDTH {
        return Err(RailbusError::InvalidInput(format!(
            "Unsupported field width: {} bytes (expected 1..={})",
            width, MAX_WIDTH
        )));
    }

    if value < 0 {
        return Err(RailbusError::InvalidInput(format!(
            "Negative value {} cannot be encoded",
            value
        )));
    }

    // A non-negative i128 always fits into 16 bytes
    if width < MAX_WIDTH && value >= 1i128 << (8 * width) {
        return Err(RailbusError::EncodingOverflow { value, width });
    }

    let bytes = (value as u128).to_be_bytes();
    buf.put_slice(&bytes[MAX_WIDTH - width..]);
    Ok(())
}

// =============================================================================
// Display
// =============================================================================

/// Render bytes as space-separated two-digit hex
pub fn to_hex(bytes: &[u8], uppercase: bool) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = if uppercase {
            write!(out, "{:02X}", byte)
        } else {
            write!(out, "{:02x}", byte)
        };
    }
    out
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Assemble a command and write its body to a stream
///
/// Returns the number of bytes written. Nothing is written if encoding fails.
pub fn write_command<W: Write, C: BusCommand>(writer: &mut W, command: &C) -> Result<usize> {
    let body = command.assemble()?;
    writer.write_all(&body)?;
    writer.flush()?;
    Ok(body.len())
}
