//! pulsenet - Pulse Network Simulator
//!
//! Presses the button of a module network a number of times and reports
//! the delivered pulse counts.
//!
//! # Usage
//!
//! ```bash
//! pulsenet network.pnet --presses 1000 --watch rx
//! ```

use std::path::PathBuf;

use clap::Parser;
use pulse_network::{
    dsl,
    engine::{presses_until_low, DEFAULT_MAX_PRESSES, DEFAULT_PRESSES},
    error::Result,
    network::validate_network,
    EngineConfig, Network, PulseEngine,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Pulse network simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the network description file (.pnet)
    #[arg(value_name = "NETWORK_FILE")]
    network_file: PathBuf,

    /// Number of button presses
    #[arg(short, long, default_value_t = DEFAULT_PRESSES)]
    presses: u64,

    /// Also report how many presses it takes for this module to receive a low pulse
    #[arg(short, long, value_name = "MODULE")]
    watch: Option<String>,

    /// Give up the --watch search after this many presses
    #[arg(long, default_value_t = DEFAULT_MAX_PRESSES)]
    max_presses: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Parse the network file
    let ast = dsl::parse_file(&args.network_file)?;

    // Build the network
    let network = Network::from_ast(ast)?;

    // Validate
    validate_network(&network)?;
    info!(modules = network.len(), "network loaded");

    let config = EngineConfig::new().with_max_presses(args.max_presses);

    // Analysis runs on its own copy, so do it before pressing
    let watched = match &args.watch {
        Some(target) => Some((target, presses_until_low(&network, target, &config)?)),
        None => None,
    };

    let mut engine = PulseEngine::with_config(network, config);
    engine.press_many(args.presses);

    println!("Presses: {}", engine.presses());
    println!("Low pulses: {}", engine.total_low());
    println!("High pulses: {}", engine.total_high());
    println!("Product: {}", engine.counter().product());

    if let Some((target, presses)) = watched {
        println!("First low pulse to '{}' after {} presses", target, presses);
    }

    Ok(())
}
