//! Enigma CLI - binary entry point.
//!
//! # Architecture
//!
//! The CLI loads [`enigma_config`] settings, assembles an [`enigma_core::Machine`]
//! and runs one subcommand against it.
//!
//! ```text
//! main() -> Cli::parse() -> load_machine(--config) -> run(command, stdout)
//! ```
//!
//! Logs go to stderr so stdout carries only results.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use enigma_config::EnigmaConfig;
use enigma_core::{Catalog, Machine, trace_encrypt};
use enigma_types::{Letter, render_text};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Enigma M3 cipher machine simulator")]
struct Cli {
    /// Config file (default: $ENIGMA_CONFIG or ~/.enigma/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encipher a message; enciphering the output again from the same settings deciphers it
    Encrypt {
        /// Letters A-Z (case-insensitive)
        text: String,
        /// Print the rotor status before and after
        #[arg(long)]
        status: bool,
    },
    /// Show the signal path of one keypress on the demonstration machine
    Trace {
        letter: char,
        /// Emit the trace record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the rotor status of the configured machine
    Status,
    /// List the available rotors, reflectors and plugboard presets
    Catalog,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, cli.config.as_deref(), &mut out)
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_machine(config: Option<&Path>) -> Result<Machine> {
    let config = match config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config");
            Some(EnigmaConfig::load_from(path)?)
        }
        None => EnigmaConfig::load()?,
    };
    let machine = config.map_or_else(Machine::demonstration, |config| config.build_machine());
    tracing::info!(positions = %machine.positions(), "Machine ready");
    Ok(machine)
}

fn run(command: Commands, config: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Encrypt { text, status } => {
            let mut machine = load_machine(config)?;
            if status {
                writeln!(out, "{}", machine.status())?;
            }
            let ciphertext = machine
                .encrypt_str(&text.to_ascii_uppercase())
                .with_context(|| format!("cannot encipher {text:?}"))?;
            writeln!(out, "{ciphertext}")?;
            if status {
                writeln!(out, "{}", machine.status())?;
            }
        }
        Commands::Trace { letter, json } => {
            let letter = parse_letter(letter)?;
            let record = trace_encrypt(letter);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
            } else {
                writeln!(out, "{record}")?;
            }
        }
        Commands::Status => {
            let machine = load_machine(config)?;
            writeln!(out, "{}", machine.status())?;
        }
        Commands::Catalog => write_catalog(Catalog::standard(), out)?,
    }
    Ok(())
}

fn parse_letter(ch: char) -> Result<Letter> {
    match Letter::from_char(ch.to_ascii_uppercase()) {
        Ok(letter) => Ok(letter),
        Err(_) => bail!("'{ch}' is not a letter A-Z"),
    }
}

fn write_catalog(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Rotors:")?;
    for rotor in catalog.rotors() {
        writeln!(
            out,
            "  {:<4} {}  notch {}",
            rotor.id().as_str(),
            rotor.wiring(),
            rotor.notch()
        )?;
    }
    writeln!(out, "Reflectors:")?;
    for reflector in catalog.reflectors() {
        writeln!(
            out,
            "  {:<4} {}",
            reflector.id().as_str(),
            render_text(reflector.wiring().letters())
        )?;
    }
    writeln!(out, "Plugboards:")?;
    for plugboard in catalog.plugboards() {
        let preset = plugboard.preset();
        writeln!(out, "  {:<4} {}", preset.as_str(), preset.description())?;
    }
    Ok(())
}
