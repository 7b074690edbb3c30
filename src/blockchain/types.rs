//! Chain-specific types and error definitions.

use std::fmt;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{AddressError, AddressPair};

// Re-export BlockchainConfig from config module to avoid duplication
pub use crate::config::schema::BlockchainConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Public IoTeX networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// EVM chain ID of the network.
    pub fn chain_id(self) -> ChainId {
        match self {
            Network::Mainnet => ChainId(4689),
            Network::Testnet => ChainId(4690),
        }
    }

    /// Default EVM JSON-RPC endpoint of the network.
    pub fn default_rpc_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://babel-api.mainnet.iotex.io",
            Network::Testnet => "https://babel-api.testnet.iotex.io",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// An address argument could not be converted.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Invalid private key format, signing or signature parsing error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Blockchain client not initialized or disabled.
    #[error("Blockchain not available: {0}")]
    NotAvailable(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Account state as returned by [`crate::blockchain::IotexClient::account_summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Both address forms.
    pub address: AddressPair,
    /// Balance in Rau.
    pub balance_rau: U256,
    /// Balance in IOTX, formatted.
    pub balance_iotx: String,
    /// Number of transactions sent from the account.
    pub nonce: u64,
    /// Whether contract code is deployed at the address.
    pub is_contract: bool,
}
