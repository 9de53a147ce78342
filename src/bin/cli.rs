//! railbus CLI
//!
//! Encodes system commands and writes the bodies to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use railbus::protocol::{to_hex, write_command, ProtocolMask};
use railbus::{BusCommand, Config, OutputFormat, RailProtocol, RailbusError, Result, SystemCommand};
use tracing_subscriber::{fmt, EnvFilter};

/// railbus CLI
#[derive(Parser, Debug)]
#[command(name = "railbus-cli")]
#[command(about = "Encode control-bus system commands")]
#[command(version)]
struct Args {
    /// Target identifier (defaults to 0, all devices)
    #[arg(short, long, global = true)]
    id: Option<i64>,

    /// Output format: hex or raw
    #[arg(short, long, default_value = "hex", global = true)]
    format: OutputFormat,

    /// Upper-case hex digits
    #[arg(long, global = true)]
    upper: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Switch track power off
    Stop,

    /// Switch track power on
    Go,

    /// Stop all locomotives
    Halt,

    /// Emergency stop of a locomotive
    EmergencyStop,

    /// Remove a locomotive from the refresh cycle
    CycleStop,

    /// Select a locomotive's rail protocol (e.g. MM2_20, DCC_long_126)
    DataProtocol {
        protocol: RailProtocol,
    },

    /// Accessory decoder switching time, in 10 ms units
    SwitchingTime {
        time: i64,
    },

    /// MFX fast read with the given SID
    FastRead {
        mfx_sid: i64,
    },

    /// Enable rail protocols on the track output
    EnableProtocols {
        #[arg(long)]
        mm2: bool,

        #[arg(long)]
        mfx: bool,

        #[arg(long)]
        dcc: bool,
    },

    /// Set the MFX re-registration counter
    RegisterCounter {
        counter: i64,
    },

    /// System overload on a channel
    Overload {
        channel: i64,
    },

    /// System status of a channel, optionally with a measured value
    Status {
        channel: i64,
        measured_value: Option<i64>,
    },

    /// Query or set the system identifier
    SystemId {
        system_id: Option<i64>,
    },

    /// MFX seek
    MfxSeek,

    /// Reset a target device
    Reset {
        target: i64,
    },

    /// Encode a JSON command, e.g. '{"command":"system_go","id":0}'
    Json {
        payload: String,
    },

    /// Print the subcommand and rail protocol code tables (hex/text output only)
    Catalog,
}

fn main() {
    // Logs go to stderr so stdout only carries encoded output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,railbus=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .default_identifier(args.id.unwrap_or(0))
        .output_format(args.format)
        .uppercase_hex(args.upper)
        .build();

    if let Err(e) = config.validate().and_then(|()| run(&args, &config)) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    // Render everything first; the destination is only opened on success
    let rendered = render(&args.command, config)?;

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            out.write_all(&rendered)?;
            out.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(&rendered)?;
            out.flush()?;
        }
    }

    tracing::debug!("Wrote {} bytes", rendered.len());
    Ok(())
}

/// Produce the bytes for a subcommand in the configured output format
fn render(command: &Commands, config: &Config) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    let command = match build_command(command, config.default_identifier)? {
        Some(command) => command,
        None => {
            if config.output_format == OutputFormat::Raw {
                return Err(RailbusError::Config(
                    "The catalog is text only; use --format hex".to_string(),
                ));
            }
            print_catalog(&mut out)?;
            return Ok(out);
        }
    };

    tracing::debug!("Encoding {:?}", command);

    match config.output_format {
        OutputFormat::Hex => {
            let body = command.assemble()?;
            writeln!(out, "{}", to_hex(&body, config.uppercase_hex))?;
        }
        OutputFormat::Raw => {
            write_command(&mut out, &command)?;
        }
    }

    Ok(out)
}

/// Build the command for a CLI subcommand (`None` for informational ones)
fn build_command(command: &Commands, id: i64) -> Result<Option<SystemCommand>> {
    let command = match *command {
        Commands::Stop => SystemCommand::SystemStop { id },
        Commands::Go => SystemCommand::SystemGo { id },
        Commands::Halt => SystemCommand::SystemHalt { id },
        Commands::EmergencyStop => SystemCommand::LocomotiveEmergencyStop { id },
        Commands::CycleStop => SystemCommand::LocomotiveCycleStop { id },
        Commands::DataProtocol { protocol } => SystemCommand::LocomotiveDataProtocol { id, protocol },
        Commands::SwitchingTime { time } => SystemCommand::AccessoryDecoderSwitchingTime { id, time },
        Commands::FastRead { mfx_sid } => SystemCommand::MfxFastRead { id, mfx_sid },
        Commands::EnableProtocols { mm2, mfx, dcc } => {
            let mut mask = ProtocolMask::empty();
            mask.set(ProtocolMask::MM2, mm2);
            mask.set(ProtocolMask::MFX, mfx);
            mask.set(ProtocolMask::DCC, dcc);
            SystemCommand::enable_rail_protocol(id, mask)
        }
        Commands::RegisterCounter { counter } => SystemCommand::SetMfxRegisterCounter { id, counter },
        Commands::Overload { channel } => SystemCommand::SystemOverload { id, channel },
        Commands::Status { channel, measured_value } => {
            SystemCommand::status(id, channel, measured_value)
        }
        Commands::SystemId { system_id } => SystemCommand::set_system_identifier(id, system_id),
        Commands::MfxSeek => SystemCommand::MfxSeek { id },
        Commands::Reset { target } => SystemCommand::SystemReset { id, target },
        Commands::Json { ref payload } => serde_json::from_str(payload)?,
        Commands::Catalog => return Ok(None),
    };
    Ok(Some(command))
}

fn print_catalog<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Subcommands:")?;
    for subcommand in railbus::Subcommand::ALL {
        writeln!(out, "  0x{:02x}  {}", subcommand.wire_code(), subcommand)?;
    }

    writeln!(out, "Rail protocols:")?;
    for protocol in RailProtocol::ALL {
        writeln!(
            out,
            "  0x{:02x}  {:<14} ({:?})",
            protocol.wire_code(),
            protocol,
            protocol.family()
        )?;
    }

    out.flush()?;
    Ok(())
}
