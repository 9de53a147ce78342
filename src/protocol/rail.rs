//! Rail protocol definitions
//!
//! The MM2 and DCC families number their members independently and both
//! start at 0x00, so each family keeps its own code table. A `RailProtocol`
//! always carries its family, and `wire_code` only consults that family's table.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::RailbusError;

/// Rail protocol family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolFamily {
    Mm2,
    Dcc,
}

/// MM2 family members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mm2Protocol {
    Mm2_2040 = 0x00,
    Mm2_20 = 0x01,
    Mm2_40 = 0x02,
}

/// DCC family members (short/long address, speed steps)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DccProtocol {
    Short28 = 0x00,
    Short14 = 0x01,
    Short126 = 0x02,
    Long28 = 0x03,
    Long126 = 0x04,
}

impl Mm2Protocol {
    pub const ALL: [Mm2Protocol; 3] = [Mm2Protocol::Mm2_2040, Mm2Protocol::Mm2_20, Mm2Protocol::Mm2_40];

    pub fn wire_code(self) -> u8 {
        self as u8
    }
}

impl DccProtocol {
    pub const ALL: [DccProtocol; 5] = [
        DccProtocol::Short28,
        DccProtocol::Short14,
        DccProtocol::Short126,
        DccProtocol::Long28,
        DccProtocol::Long126,
    ];

    pub fn wire_code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Mm2Protocol {
    type Error = RailbusError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Mm2Protocol::ALL
            .into_iter()
            .find(|p| p.wire_code() == code)
            .ok_or(RailbusError::UnknownIdentifier { table: "MM2 protocol", code })
    }
}

impl TryFrom<u8> for DccProtocol {
    type Error = RailbusError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        DccProtocol::ALL
            .into_iter()
            .find(|p| p.wire_code() == code)
            .ok_or(RailbusError::UnknownIdentifier { table: "DCC protocol", code })
    }
}

/// A rail protocol tagged with its family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum RailProtocol {
    Mm2(Mm2Protocol),
    Dcc(DccProtocol),
}

impl RailProtocol {
    /// Every rail protocol, MM2 family first
    pub const ALL: [RailProtocol; 8] = [
        RailProtocol::Mm2(Mm2Protocol::Mm2_2040),
        RailProtocol::Mm2(Mm2Protocol::Mm2_20),
        RailProtocol::Mm2(Mm2Protocol::Mm2_40),
        RailProtocol::Dcc(DccProtocol::Short28),
        RailProtocol::Dcc(DccProtocol::Short14),
        RailProtocol::Dcc(DccProtocol::Short126),
        RailProtocol::Dcc(DccProtocol::Long28),
        RailProtocol::Dcc(DccProtocol::Long126),
    ];

    pub fn family(self) -> ProtocolFamily {
        match self {
            RailProtocol::Mm2(_) => ProtocolFamily::Mm2,
            RailProtocol::Dcc(_) => ProtocolFamily::Dcc,
        }
    }

    /// Wire code within the protocol's own family table
    pub fn wire_code(self) -> u8 {
        match self {
            RailProtocol::Mm2(p) => p.wire_code(),
            RailProtocol::Dcc(p) => p.wire_code(),
        }
    }

    /// Symbolic name used by the request layer
    pub fn name(self) -> &'static str {
        match self {
            RailProtocol::Mm2(Mm2Protocol::Mm2_2040) => "MM2_2040",
            RailProtocol::Mm2(Mm2Protocol::Mm2_20) => "MM2_20",
            RailProtocol::Mm2(Mm2Protocol::Mm2_40) => "MM2_40",
            RailProtocol::Dcc(DccProtocol::Short28) => "DCC_short_28",
            RailProtocol::Dcc(DccProtocol::Short14) => "DCC_short_14",
            RailProtocol::Dcc(DccProtocol::Short126) => "DCC_short_126",
            RailProtocol::Dcc(DccProtocol::Long28) => "DCC_long_28",
            RailProtocol::Dcc(DccProtocol::Long126) => "DCC_long_126",
        }
    }
}

impl From<Mm2Protocol> for RailProtocol {
    fn from(protocol: Mm2Protocol) -> Self {
        RailProtocol::Mm2(protocol)
    }
}

impl From<DccProtocol> for RailProtocol {
    fn from(protocol: DccProtocol) -> Self {
        RailProtocol::Dcc(protocol)
    }
}

impl From<RailProtocol> for &'static str {
    fn from(protocol: RailProtocol) -> Self {
        protocol.name()
    }
}

impl FromStr for RailProtocol {
    type Err = RailbusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RailProtocol::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| RailbusError::InvalidInput(format!("Unknown rail protocol: {}", s)))
    }
}

impl TryFrom<String> for RailProtocol {
    type Error = RailbusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for RailProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

bitflags! {
    /// Rail protocols enabled on the track output (bits 3-7 must stay clear)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ProtocolMask: u8 {
        const MM2 = 0b0000_0001;
        const MFX = 0b0000_0010;
        const DCC = 0b0000_0100;
    }
}
