//! rotor-cipher command line encoder/decoder.
//!
//! # Usage
//!
//! ```bash
//! # Encode with the preset wiring and key 0 0 0
//! rotor-cipher "Hello World"
//!
//! # Decode: run the ciphertext through the same wiring and key
//! rotor-cipher -k 1 2 3 "CVPKW KKUZN"
//!
//! # Reproducible random wiring, verbose output
//! rotor-cipher --random --seed 42 -vv "attack at dawn"
//! ```

use clap::{ArgAction, Parser};
use rotor_cipher::message::normalize;
use rotor_cipher::presets;
use rotor_cipher::random::WiringGenerator;
use rotor_cipher::{Key, MachineBuilder, RotorCipherError, RotorSlot};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rotor cipher encoder/decoder
#[derive(Parser, Debug)]
#[command(name = "rotor-cipher")]
#[command(about = "Three-rotor reciprocal cipher machine")]
#[command(version)]
struct Args {
    /// Message to encode (or decode)
    #[arg(default_value = "Hello World")]
    message: String,

    /// Starting key (3 offsets in [0, 25]: fast, middle, slow)
    #[arg(short, long, num_args = 3, value_names = ["FAST", "MIDDLE", "SLOW"], default_values_t = [0u32, 0, 0])]
    key: Vec<u32>,

    /// Rotor 1 wiring
    #[arg(long, default_value = presets::ROTOR_I)]
    r1e: String,

    /// Rotor 1 notch
    #[arg(long, default_value = presets::ROTOR_I_NOTCH)]
    r1n: String,

    /// Rotor 2 wiring
    #[arg(long, default_value = presets::ROTOR_II)]
    r2e: String,

    /// Rotor 2 notch
    #[arg(long, default_value = presets::ROTOR_II_NOTCH)]
    r2n: String,

    /// Rotor 3 wiring
    #[arg(long, default_value = presets::ROTOR_III)]
    r3e: String,

    /// Rotor 3 notch
    #[arg(long, default_value = presets::ROTOR_III_NOTCH)]
    r3n: String,

    /// Reflector wiring
    #[arg(long = "ref", default_value = presets::REFLECTOR)]
    reflector: String,

    /// Plugboard wiring
    #[arg(long = "plug", default_value = presets::PLUGBOARD)]
    plugboard: String,

    /// Generate random wiring instead of using the wiring options
    #[arg(long)]
    random: bool,

    /// Seed for --random wiring
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Verbose output (-v messages, -vv also wiring and key)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_target(false))
        .with(filter)
        .init();

    let positions: [u32; 3] = args.key.as_slice().try_into()?;
    let key = Key::try_from(positions)?;

    let builder = if args.random {
        MachineBuilder::new()
    } else {
        MachineBuilder::new()
            .rotor(RotorSlot::Fast, &args.r1e, &args.r1n)
            .rotor(RotorSlot::Middle, &args.r2e, &args.r2n)
            .rotor(RotorSlot::Slow, &args.r3e, &args.r3n)
            .reflector(&args.reflector)
            .plugboard(&args.plugboard)
    }
    .key(key);

    let mut machine = match args.seed {
        Some(seed) => builder.build_with(&mut WiringGenerator::from_seed(seed))?,
        None => builder.build()?,
    };

    if args.verbose >= 2 {
        for line in machine.wiring_summary().lines() {
            info!("{}", line);
        }
        info!("Key: {}", key);
    }

    let parsed = normalize(&args.message);
    info!("Parsed message: {}", parsed);

    match machine.encode_verified(&args.message, key) {
        Ok(encoded) => {
            info!("Encoded message: {}", encoded);
            info!("Decoded message: {}", parsed);
            println!("{}", encoded);
        }
        Err(RotorCipherError::ReciprocityMismatch { actual, .. }) => {
            info!("Decoded message: {}", actual);
            println!("FAILURE: Decoded message does not match original message!");
            println!(
                "         Please check your settings (e.g. this can be due to a \
                 non-symmetric reflector)."
            );
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
