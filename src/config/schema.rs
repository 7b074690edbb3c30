//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::address::CodecMode;
use crate::blockchain::types::Network;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct KitConfig {
    /// RPC endpoint settings.
    pub blockchain: BlockchainConfig,

    /// Address codec settings.
    pub address: AddressConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Blockchain RPC configuration.
///
/// `rpc_url` and `chain_id` default to the values of `network` when absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(from = "RawBlockchainConfig")]
pub struct BlockchainConfig {
    /// Named network; determines the expected chain ID.
    pub network: Network,

    /// EVM JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID (4689 mainnet, 4690 testnet).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self::for_network(Network::Mainnet)
    }
}

impl BlockchainConfig {
    /// Defaults for a named network.
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            rpc_url: network.default_rpc_url().to_string(),
            chain_id: network.chain_id().0,
            rpc_timeout_secs: 10,
        }
    }
}

/// `[blockchain]` section as written, before network defaults are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBlockchainConfig {
    network: Network,
    rpc_url: Option<String>,
    chain_id: Option<u64>,
    rpc_timeout_secs: Option<u64>,
}

impl From<RawBlockchainConfig> for BlockchainConfig {
    fn from(raw: RawBlockchainConfig) -> Self {
        let defaults = BlockchainConfig::for_network(raw.network);
        Self {
            network: raw.network,
            rpc_url: raw.rpc_url.unwrap_or(defaults.rpc_url),
            chain_id: raw.chain_id.unwrap_or(defaults.chain_id),
            rpc_timeout_secs: raw.rpc_timeout_secs.unwrap_or(defaults.rpc_timeout_secs),
        }
    }
}

/// Address codec configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AddressConfig {
    /// Verify the checksum of native addresses before decoding them.
    pub verify_checksum: bool,
}

impl AddressConfig {
    pub fn mode(&self) -> CodecMode {
        CodecMode::from_verify_flag(self.verify_checksum)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter (trace, debug, info, warn, error).
    /// `RUST_LOG` takes precedence when set.
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
