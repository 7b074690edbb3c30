//! `iotex-cli`: address conversion and read-only chain queries.
//!
//! # Commands
//!
//! ```text
//! iotex-cli convert   <addr>                      both forms as JSON
//! iotex-cli validate  <addr>                      format check, exit code 1 if invalid
//! iotex-cli to-native <addr> | to-hex <addr>      single conversion
//! iotex-cli units <amount> --from iotx --to rau   denomination scaling
//! iotex-cli balance <addr> | account <addr>       RPC queries
//! iotex-cli block-number
//! iotex-cli verify <addr> <message> <signature>   signer check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use iotex_kit::address::{self, CodecMode};
use iotex_kit::blockchain::{verify_message, IotexClient};
use iotex_kit::config::{load_config, KitConfig};
use iotex_kit::observability::init_logging;
use iotex_kit::units::{self, Unit};

#[derive(Parser)]
#[command(name = "iotex-cli")]
#[command(about = "IoTeX address codec and RPC toolkit", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "IOTEX_KIT_CONFIG")]
    config: Option<PathBuf>,

    /// Verify native address checksums (overrides config).
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print both forms of an address
    Convert { address: String },
    /// Check whether a string is a valid address
    Validate { address: String },
    /// Convert an address to native (io1...) form
    ToNative { address: String },
    /// Convert an address to hex (0x...) form
    ToHex { address: String },
    /// Convert an amount between denominations
    Units {
        amount: String,
        #[arg(long, default_value = "iotx")]
        from: Unit,
        #[arg(long, default_value = "rau")]
        to: Unit,
    },
    /// Query the balance of an address
    Balance { address: String },
    /// Query balance, nonce and contract status of an address
    Account { address: String },
    /// Query the latest block number
    BlockNumber,
    /// Check that a signature over a message was made by an address
    Verify {
        address: String,
        message: String,
        signature: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => KitConfig::default(),
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Warning: logging not initialized: {}", e);
    }

    let mode = if cli.strict {
        CodecMode::Strict
    } else {
        config.address.mode()
    };

    match run(cli.command, &config, mode).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    config: &KitConfig,
    mode: CodecMode,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Convert { address } => {
            let pair = address::both_formats_with(&address, mode)?;
            println!("{}", serde_json::to_string_pretty(&pair)?);
        }
        Commands::Validate { address } => {
            let valid = address::is_valid_address(&address)
                && (mode == CodecMode::Lenient
                    || !address::is_native_format(&address)
                    || address::verify_native_checksum(&address).is_ok());
            let format = if address::is_native_format(&address) {
                "native"
            } else if address::is_hex_format(&address) {
                "hex"
            } else {
                "unknown"
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "valid": valid, "format": format }))?
            );
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::ToNative { address } => {
            if mode == CodecMode::Strict && address::is_native_format(&address) {
                address::verify_native_checksum(&address)?;
            }
            println!("{}", address::to_native(&address)?);
        }
        Commands::ToHex { address } => {
            println!("{}", address::to_hex_with(&address, mode)?);
        }
        Commands::Units { amount, from, to } => {
            println!("{}", units::convert(&amount, from, to)?);
        }
        Commands::Balance { address } => {
            let client = IotexClient::with_mode(config.blockchain.clone(), mode).await?;
            let rau = client.get_balance(&address).await?;
            let body = json!({
                "address": address::both_formats_with(&address, mode)?,
                "balance_rau": rau.to_string(),
                "balance_iotx": units::format_amount(rau, Unit::Iotx),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Commands::Account { address } => {
            let client = IotexClient::with_mode(config.blockchain.clone(), mode).await?;
            let summary = client.account_summary(&address).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::BlockNumber => {
            let client = IotexClient::with_mode(config.blockchain.clone(), mode).await?;
            println!("{}", client.get_block_number().await?);
        }
        Commands::Verify {
            address,
            message,
            signature,
        } => {
            let valid = verify_message(message.as_bytes(), &signature, &address, mode)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "valid": valid }))?
            );
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
