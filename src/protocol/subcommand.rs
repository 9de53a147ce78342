//! Subcommand definitions
//!
//! Code table for the system-command family. The enum discriminant is the
//! wire code, so the mapping is fixed at compile time and cannot miss an entry.

use std::fmt;

use crate::error::RailbusError;

/// System subcommands with their one-byte wire codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Subcommand {
    SystemStop = 0x00,
    SystemGo = 0x01,
    SystemHalt = 0x02,
    LocomotiveEmergencyStop = 0x03,
    LocomotiveCycleStop = 0x04,
    LocomotiveDataProtocol = 0x05,
    AccessoryDecoderSwitchingTime = 0x06,
    MfxFastRead = 0x07,
    EnableRailProtocol = 0x08,
    SetMfxRegisterCounter = 0x09,
    SystemOverload = 0x0A,
    SystemStatus = 0x0B,
    SetSystemIdentifier = 0x0C,
    MfxSeek = 0x30,
    SystemReset = 0x80,
}

impl Subcommand {
    /// Every subcommand, in wire code order
    pub const ALL: [Subcommand; 15] = [
        Subcommand::SystemStop,
        Subcommand::SystemGo,
        Subcommand::SystemHalt,
        Subcommand::LocomotiveEmergencyStop,
        Subcommand::LocomotiveCycleStop,
        Subcommand::LocomotiveDataProtocol,
        Subcommand::AccessoryDecoderSwitchingTime,
        Subcommand::MfxFastRead,
        Subcommand::EnableRailProtocol,
        Subcommand::SetMfxRegisterCounter,
        Subcommand::SystemOverload,
        Subcommand::SystemStatus,
        Subcommand::SetSystemIdentifier,
        Subcommand::MfxSeek,
        Subcommand::SystemReset,
    ];

    /// One-byte wire code
    pub fn wire_code(self) -> u8 {
        self as u8
    }

    /// Stable symbolic name
    pub fn name(self) -> &'static str {
        match self {
            Subcommand::SystemStop => "SystemStop",
            Subcommand::SystemGo => "SystemGo",
            Subcommand::SystemHalt => "SystemHalt",
            Subcommand::LocomotiveEmergencyStop => "LocomotiveEmergencyStop",
            Subcommand::LocomotiveCycleStop => "LocomotiveCycleStop",
            Subcommand::LocomotiveDataProtocol => "LocomotiveDataProtocol",
            Subcommand::AccessoryDecoderSwitchingTime => "AccessoryDecoderSwitchingTime",
            Subcommand::MfxFastRead => "MfxFastRead",
            Subcommand::EnableRailProtocol => "EnableRailProtocol",
            Subcommand::SetMfxRegisterCounter => "SetMfxRegisterCounter",
            Subcommand::SystemOverload => "SystemOverload",
            Subcommand::SystemStatus => "SystemStatus",
            Subcommand::SetSystemIdentifier => "SetSystemIdentifier",
            Subcommand::MfxSeek => "MfxSeek",
            Subcommand::SystemReset => "SystemReset",
        }
    }
}

impl From<Subcommand> for u8 {
    fn from(subcommand: Subcommand) -> Self {
        subcommand.wire_code()
    }
}

impl TryFrom<u8> for Subcommand {
    type Error = RailbusError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Subcommand::ALL
            .into_iter()
            .find(|s| s.wire_code() == code)
            .ok_or(RailbusError::UnknownIdentifier {
                table: "subcommand",
                code,
            })
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
