//! Protocol Module
//!
//! Encodes commands into the body of a control-bus frame. Frame header
//! fields (priority, command family, response flag, length) are added by
//! whoever transmits the body.
//!
//! ## Body Format
//! ```text
//! ┌──────────────┬──────────┬─────────────────────────────┐
//! │ Ident (4)    │ Sub (1)  │      Payload (0..=3)        │
//! └──────────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! All multi-byte integers are big endian.
//!
//! ### System Subcommands
//! - 0x00: SystemStop                     0x07: MfxFastRead
//! - 0x01: SystemGo                       0x08: EnableRailProtocol
//! - 0x02: SystemHalt                     0x09: SetMfxRegisterCounter
//! - 0x03: LocomotiveEmergencyStop        0x0A: SystemOverload
//! - 0x04: LocomotiveCycleStop            0x0B: SystemStatus
//! - 0x05: LocomotiveDataProtocol         0x0C: SetSystemIdentifier
//! - 0x06: AccessoryDecoderSwitchingTime  0x30: MfxSeek
//! - 0x80: SystemReset

mod codec;
mod command;
mod rail;
mod subcommand;
mod system;

pub use codec::{encode_uint, put_uint, to_hex, write_command, MAX_WIDTH};
pub use command::{BusCommand, BODY_HEADER_SIZE, IDENTIFIER_SIZE};
pub use rail::{DccProtocol, Mm2Protocol, ProtocolFamily, ProtocolMask, RailProtocol};
pub use subcommand::Subcommand;
pub use system::SystemCommand;
