//! System commands
//!
//! Track power, emergency stops, protocol setup and status reporting.
//! Integer fields hold the values as received; their widths are checked
//! when the command is assembled.
//!
//! ## Payload by Subcommand
//! - Stop/Go/Halt, loco emergency/cycle stop, MFX seek: empty
//! - LocomotiveDataProtocol:        protocol (1)
//! - AccessoryDecoderSwitchingTime: time in 10 ms units (2)
//! - MfxFastRead:                   MFX SID (2)
//! - EnableRailProtocol:            bitset (1)
//! - SetMfxRegisterCounter:         counter (2)
//! - SystemOverload:                channel (1)
//! - SystemStatus:                  channel (1) [+ measured value (2)]
//! - SetSystemIdentifier:           [system id (2)]
//! - SystemReset:                   target (1)
//!
//! Bracketed fields are left out entirely when absent; the receiver tells
//! them apart by the body length.

use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};

use crate::error::{RailbusError, Result};
use super::codec::put_uint;
use super::{BusCommand, ProtocolMask, RailProtocol, Subcommand};

/// A command of the system-command family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SystemCommand {
    /// Switch track power off
    SystemStop { id: i64 },

    /// Switch track power on
    SystemGo { id: i64 },

    /// Stop all locomotives, keep track power
    SystemHalt { id: i64 },

    /// Emergency stop of a single locomotive
    LocomotiveEmergencyStop { id: i64 },

    /// Drop a locomotive from the refresh cycle
    LocomotiveCycleStop { id: i64 },

    /// Select the rail protocol used for a locomotive
    LocomotiveDataProtocol { id: i64, protocol: RailProtocol },

    /// Accessory decoder switching time, in 10 ms units
    AccessoryDecoderSwitchingTime { id: i64, time: i64 },

    /// Assign an MFX SID for fast reading
    MfxFastRead { id: i64, mfx_sid: i64 },

    /// Enable rail protocols (bit 0: MM2, bit 1: MFX, bit 2: DCC)
    EnableRailProtocol { id: i64, bitset: i64 },

    /// Set the MFX re-registration counter
    SetMfxRegisterCounter { id: i64, counter: i64 },

    /// Overload report naming the responsible channel
    SystemOverload { id: i64, channel: i64 },

    /// Status query or report for a measurement channel
    SystemStatus {
        id: i64,
        channel: i64,
        #[serde(default)]
        measured_value: Option<i64>,
    },

    /// Query or assign the system identifier
    SetSystemIdentifier {
        id: i64,
        #[serde(default)]
        system_id: Option<i64>,
    },

    /// MFX seek
    MfxSeek { id: i64 },

    /// Reset a target device
    SystemReset { id: i64, target: i64 },
}

impl SystemCommand {
    /// Enable the given set of rail protocols
    pub fn enable_rail_protocol(id: i64, protocols: ProtocolMask) -> Self {
        SystemCommand::EnableRailProtocol {
            id,
            bitset: i64::from(protocols.bits()),
        }
    }

    /// Status command, with or without a measured value
    pub fn status(id: i64, channel: i64, measured_value: Option<i64>) -> Self {
        SystemCommand::SystemStatus {
            id,
            channel,
            measured_value,
        }
    }

    /// System identifier command, with or without a new identifier
    pub fn set_system_identifier(id: i64, system_id: Option<i64>) -> Self {
        SystemCommand::SetSystemIdentifier { id, system_id }
    }
}

impl BusCommand for SystemCommand {
    type Subcommand = Subcommand;

    fn identifier(&self) -> i64 {
        match *self {
            SystemCommand::SystemStop { id }
            | SystemCommand::SystemGo { id }
            | SystemCommand::SystemHalt { id }
            | SystemCommand::LocomotiveEmergencyStop { id }
            | SystemCommand::LocomotiveCycleStop { id }
            | SystemCommand::LocomotiveDataProtocol { id, .. }
            | SystemCommand::AccessoryDecoderSwitchingTime { id, .. }
            | SystemCommand::MfxFastRead { id, .. }
            | SystemCommand::EnableRailProtocol { id, .. }
            | SystemCommand::SetMfxRegisterCounter { id, .. }
            | SystemCommand::SystemOverload { id, .. }
            | SystemCommand::SystemStatus { id, .. }
            | SystemCommand::SetSystemIdentifier { id, .. }
            | SystemCommand::MfxSeek { id }
            | SystemCommand::SystemReset { id, .. } => id,
        }
    }

    fn subcommand(&self) -> Subcommand {
        match self {
            SystemCommand::SystemStop { .. } => Subcommand::SystemStop,
            SystemCommand::SystemGo { .. } => Subcommand::SystemGo,
            SystemCommand::SystemHalt { .. } => Subcommand::SystemHalt,
            SystemCommand::LocomotiveEmergencyStop { .. } => Subcommand::LocomotiveEmergencyStop,
            SystemCommand::LocomotiveCycleStop { .. } => Subcommand::LocomotiveCycleStop,
            SystemCommand::LocomotiveDataProtocol { .. } => Subcommand::LocomotiveDataProtocol,
            SystemCommand::AccessoryDecoderSwitchingTime { .. } => {
                Subcommand::AccessoryDecoderSwitchingTime
            }
            SystemCommand::MfxFastRead { .. } => Subcommand::MfxFastRead,
            SystemCommand::EnableRailProtocol { .. } => Subcommand::EnableRailProtocol,
            SystemCommand::SetMfxRegisterCounter { .. } => Subcommand::SetMfxRegisterCounter,
            SystemCommand::SystemOverload { .. } => Subcommand::SystemOverload,
            SystemCommand::SystemStatus { .. } => Subcommand::SystemStatus,
            SystemCommand::SetSystemIdentifier { .. } => Subcommand::SetSystemIdentifier,
            SystemCommand::MfxSeek { .. } => Subcommand::MfxSeek,
            SystemCommand::SystemReset { .. } => Subcommand::SystemReset,
        }
    }

    fn write_payload(&self, buf: &mut BytesMut) -> Result<()> {
        match *self {
            SystemCommand::SystemStop { .. }
            | SystemCommand::SystemGo { .. }
            | SystemCommand::SystemHalt { .. }
            | SystemCommand::LocomotiveEmergencyStop { .. }
            | SystemCommand::LocomotiveCycleStop { .. }
            | SystemCommand::MfxSeek { .. } => Ok(()),

            SystemCommand::LocomotiveDataProtocol { protocol, .. } => {
                buf.put_u8(protocol.wire_code());
                Ok(())
            }

            SystemCommand::AccessoryDecoderSwitchingTime { time, .. } => put_uint(buf, time, 2),

            SystemCommand::MfxFastRead { mfx_sid, .. } => put_uint(buf, mfx_sid, 2),

            SystemCommand::EnableRailProtocol { bitset, .. } => {
                let mask = u8::try_from(bitset)
                    .ok()
                    .and_then(ProtocolMask::from_bits)
                    .ok_or_else(|| {
                        RailbusError::InvalidInput(format!(
                            "Rail protocol bitset 0x{:x} has bits outside 0..=2 set",
                            bitset
                        ))
                    })?;
                buf.put_u8(mask.bits());
                Ok(())
            }

            SystemCommand::SetMfxRegisterCounter { counter, .. } => put_uint(buf, counter, 2),

            SystemCommand::SystemOverload { channel, .. } => put_uint(buf, channel, 1),

            SystemCommand::SystemStatus {
                channel,
                measured_value,
                ..
            } => {
                // Both fields are checked before anything is written
                let mut fields = BytesMut::with_capacity(3);
                put_uint(&mut fields, channel, 1)?;
                if let Some(value) = measured_value {
                    put_uint(&mut fields, value, 2)?;
                }
                buf.put_slice(&fields);
                Ok(())
            }

            SystemCommand::SetSystemIdentifier { system_id, .. } => match system_id {
                Some(system_id) => put_uint(buf, system_id, 2),
                None => Ok(()),
            },

            SystemCommand::SystemReset { target, .. } => put_uint(buf, target, 1),
        }
    }
}
