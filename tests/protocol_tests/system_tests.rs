//! System Command Tests
//!
//! Tests for assembling system-command bodies.

use railbus::protocol::{DccProtocol, Mm2Protocol, ProtocolMask, BODY_HEADER_SIZE};
use railbus::{BusCommand, RailProtocol, RailbusError, Subcommand, SystemCommand};

fn assemble(command: &SystemCommand) -> Vec<u8> {
    command.assemble().unwrap().to_vec()
}

// =============================================================================
// Commands Without Payload
// =============================================================================

#[test]
fn test_system_stop() {
    let body = assemble(&SystemCommand::SystemStop { id: 0x0011_2233 });
    assert_eq!(body, vec![0x00, 0x11, 0x22, 0x33, 0x00]);
}

#[test]
fn test_commands_without_payload_are_five_bytes() {
    let commands = [
        (SystemCommand::SystemStop { id: 7 }, 0x00),
        (SystemCommand::SystemGo { id: 7 }, 0x01),
        (SystemCommand::SystemHalt { id: 7 }, 0x02),
        (SystemCommand::LocomotiveEmergencyStop { id: 7 }, 0x03),
        (SystemCommand::LocomotiveCycleStop { id: 7 }, 0x04),
        (SystemCommand::MfxSeek { id: 7 }, 0x30),
    ];

    for (command, code) in commands {
        let body = assemble(&command);
        assert_eq!(body.len(), BODY_HEADER_SIZE);
        assert_eq!(body, vec![0, 0, 0, 7, code]);
        assert!(command.payload().unwrap().is_empty());
    }
}

// =============================================================================
// Fixed Payloads
// =============================================================================

#[test]
fn test_locomotive_data_protocol() {
    let command = SystemCommand::LocomotiveDataProtocol {
        id: 0,
        protocol: RailProtocol::Dcc(DccProtocol::Short28),
    };
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x05, 0x00]);

    let command = SystemCommand::LocomotiveDataProtocol {
        id: 0,
        protocol: RailProtocol::Dcc(DccProtocol::Long126),
    };
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x05, 0x04]);

    let command = SystemCommand::LocomotiveDataProtocol {
        id: 0,
        protocol: RailProtocol::Mm2(Mm2Protocol::Mm2_40),
    };
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x05, 0x02]);
}

#[test]
fn test_accessory_decoder_switching_time() {
    let command = SystemCommand::AccessoryDecoderSwitchingTime { id: 0, time: 300 };
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x06, 0x01, 0x2C]);
}

#[test]
fn test_mfx_fast_read() {
    let command = SystemCommand::MfxFastRead { id: 0, mfx_sid: 0x1234 };
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x07, 0x12, 0x34]);
}

#[test]
fn test_enable_rail_protocol() {
    let command = SystemCommand::enable_rail_protocol(0, ProtocolMask::MM2 | ProtocolMask::DCC);
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x08, 0b101]);

    let command = SystemCommand::enable_rail_protocol(0, ProtocolMask::empty());
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x08, 0x00]);
}

#[test]
fn test_enable_rail_protocol_rejects_unused_bits() {
    for bitset in [0b1000, 0xFF, 0x100, -1] {
        let command = SystemCommand::EnableRailProtocol { id: 0, bitset };
        assert!(
            matches!(command.assemble(), Err(RailbusError::InvalidInput(_))),
            "bitset {} should be rejected",
            bitset
        );
    }
}

#[test]
fn test_set_mfx_register_counter() {
    let command = SystemCommand::SetMfxRegisterCounter { id: 0, counter: 65_535 };
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x09, 0xFF, 0xFF]);
}

#[test]
fn test_set_mfx_register_counter_overflow() {
    let command = SystemCommand::SetMfxRegisterCounter { id: 0, counter: 70_000 };
    match command.assemble() {
        Err(RailbusError::EncodingOverflow { value, width }) => {
            assert_eq!(value, 70_000);
            assert_eq!(width, 2);
        }
        other => panic!("Expected overflow, got {:?}", other),
    }
}

#[test]
fn test_system_overload() {
    let command = SystemCommand::SystemOverload { id: 0, channel: 3 };
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x0A, 0x03]);
}

#[test]
fn test_system_reset() {
    let command = SystemCommand::SystemReset { id: 0x4300_0000, target: 0x01 };
    assert_eq!(assemble(&command), vec![0x43, 0, 0, 0, 0x80, 0x01]);
}

// =============================================================================
// Optional Trailing Fields
// =============================================================================

#[test]
fn test_system_status_without_value() {
    let command = SystemCommand::status(0, 2, None);
    let body = assemble(&command);
    assert_eq!(body, vec![0, 0, 0, 0, 0x0B, 0x02]);
    assert_eq!(body.len(), 6);
}

#[test]
fn test_system_status_with_value() {
    let command = SystemCommand::status(0, 2, Some(500));
    let body = assemble(&command);
    assert_eq!(body, vec![0, 0, 0, 0, 0x0B, 0x02, 0x01, 0xF4]);
    assert_eq!(body.len(), 8);
}

#[test]
fn test_system_status_value_adds_two_bytes() {
    for value in [0, 1, 65_535] {
        let without = SystemCommand::status(1, 4, None).payload().unwrap();
        let with = SystemCommand::status(1, 4, Some(value)).payload().unwrap();
        assert_eq!(with.len(), without.len() + 2);
        assert_eq!(&with[..without.len()], &without[..]);
    }
}

#[test]
fn test_system_status_invalid_value() {
    let command = SystemCommand::status(0, 2, Some(65_536));
    assert!(matches!(
        command.assemble(),
        Err(RailbusError::EncodingOverflow { width: 2, .. })
    ));

    let command = SystemCommand::status(0, 256, Some(1));
    assert!(matches!(
        command.assemble(),
        Err(RailbusError::EncodingOverflow { width: 1, .. })
    ));
}

#[test]
fn test_set_system_identifier() {
    let command = SystemCommand::set_system_identifier(0, Some(0x00AB));
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x0C, 0x00, 0xAB]);

    let command = SystemCommand::set_system_identifier(0, None);
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x0C]);
}

// =============================================================================
// Identifier and Contract
// =============================================================================

#[test]
fn test_identifier_range() {
    let command = SystemCommand::SystemGo { id: i64::from(u32::MAX) };
    assert_eq!(assemble(&command), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x01]);

    let command = SystemCommand::SystemGo { id: 1 << 32 };
    assert!(matches!(
        command.assemble(),
        Err(RailbusError::EncodingOverflow { width: 4, .. })
    ));

    let command = SystemCommand::SystemGo { id: -1 };
    assert!(matches!(command.assemble(), Err(RailbusError::InvalidInput(_))));
}

#[test]
fn test_negative_field_rejected() {
    let command = SystemCommand::AccessoryDecoderSwitchingTime { id: 0, time: -10 };
    assert!(matches!(command.assemble(), Err(RailbusError::InvalidInput(_))));
}

#[test]
fn test_assemble_is_deterministic() {
    let command = SystemCommand::status(0x1234, 1, Some(42));
    assert_eq!(command.assemble().unwrap(), command.assemble().unwrap());
}

#[test]
fn test_subcommand_and_identifier_accessors() {
    let command = SystemCommand::MfxFastRead { id: 99, mfx_sid: 5 };
    assert_eq!(command.identifier(), 99);
    assert_eq!(command.subcommand(), Subcommand::MfxFastRead);

    let body = assemble(&command);
    assert_eq!(body.len(), BODY_HEADER_SIZE + command.payload().unwrap().len());
    assert_eq!(body[4], Subcommand::MfxFastRead.wire_code());
}

// =============================================================================
// JSON Input
// =============================================================================

#[test]
fn test_deserialize_from_json() {
    let command: SystemCommand =
        serde_json::from_str(r#"{"command":"system_status","id":0,"channel":2}"#).unwrap();
    assert_eq!(command, SystemCommand::status(0, 2, None));

    let command: SystemCommand = serde_json::from_str(
        r#"{"command":"locomotive_data_protocol","id":0,"protocol":"DCC_short_28"}"#,
    )
    .unwrap();
    assert_eq!(assemble(&command), vec![0, 0, 0, 0, 0x05, 0x00]);

    let command: SystemCommand =
        serde_json::from_str(r#"{"command":"set_system_identifier","id":5}"#).unwrap();
    assert_eq!(command, SystemCommand::set_system_identifier(5, None));
}

#[test]
fn test_deserialize_rejects_unknown_command() {
    let result = serde_json::from_str::<SystemCommand>(r#"{"command":"system_explode","id":0}"#);
    assert!(result.is_err());
}
