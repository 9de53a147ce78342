//! Command contract
//!
//! Every command family implements [`BusCommand`]. The body layout is shared:
//! the family only supplies its subcommand code and the payload bytes.

use std::fmt::Debug;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Result;
use super::codec::put_uint;

/// Identifier width (bytes)
pub const IDENTIFIER_SIZE: usize = 4;

/// Identifier + subcommand code
pub const BODY_HEADER_SIZE: usize = IDENTIFIER_SIZE + 1;

/// A command that can be encoded into a wire body
pub trait BusCommand {
    /// Subcommand code table of this command family
    type Subcommand: Copy + Debug + Into<u8>;

    /// Target device/system identifier
    fn identifier(&self) -> i64;

    /// Subcommand selected by this command
    fn subcommand(&self) -> Self::Subcommand;

    /// Append the variant-specific payload to `buf`
    fn write_payload(&self, buf: &mut BytesMut) -> Result<()>;

    /// Encoded payload on its own
    fn payload(&self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        self.write_payload(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Encode the full body: identifier (4) + subcommand (1) + payload
    ///
    /// Either the whole body is produced or an error is returned.
    fn assemble(&self) -> Result<Bytes> {
        let subcommand = self.subcommand();
        let mut buf = BytesMut::with_capacity(BODY_HEADER_SIZE + 4);

        let result = put_uint(&mut buf, self.identifier(), IDENTIFIER_SIZE)
            .and_then(|()| {
                buf.put_u8(subcommand.into());
                self.write_payload(&mut buf)
            });

        if let Err(e) = result {
            tracing::debug!("Failed to encode {:?}: {}", subcommand, e);
            return Err(e);
        }

        tracing::trace!("Assembled {:?} body ({} bytes)", subcommand, buf.len());
        Ok(buf.freeze())
    }
}
